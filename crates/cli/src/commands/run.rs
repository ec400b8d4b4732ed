use inscriber_jobfile::JobFile;
use tracing::info;

use super::common::broadcast;
use crate::error::InscriberError;

pub async fn run(jobfile: &str) -> Result<(), InscriberError> {
    let job = JobFile::from_file(jobfile)?;
    info!("loaded job from {jobfile}");
    broadcast(job.into_config()?).await?;
    Ok(())
}
