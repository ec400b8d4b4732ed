pub mod broadcaster;
pub mod config;
pub mod error;
pub mod node;
pub mod session;
pub mod status;
pub mod tx;

pub use error::Error;

pub type Result<T> = std::result::Result<T, error::Error>;
