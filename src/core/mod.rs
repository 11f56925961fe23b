pub mod credential;
pub mod error;
