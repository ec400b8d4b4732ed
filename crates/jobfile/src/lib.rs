mod error;
mod job_file;

pub use error::Error;
pub use job_file::JobFile;
