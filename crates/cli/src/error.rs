use miette::Diagnostic;
use thiserror::Error;
use tokio::task;

#[derive(Debug, Error, Diagnostic)]
pub enum InscriberError {
    #[error("core error")]
    Core(#[from] inscriber_core::Error),

    #[error("job file error")]
    JobFile(#[from] inscriber_jobfile::Error),

    #[error("tokio task join error")]
    TaskJoin(#[from] task::JoinError),
}
