pub mod api;
pub mod config;
pub mod error;
pub mod event;
pub mod message;
pub mod scope;
pub mod session;
pub mod time;
pub mod usage;
pub mod user;

#[cfg(test)]
mod tests;

pub use error::ClientError;
pub type Result<T> = std::result::Result<T, ClientError>;
