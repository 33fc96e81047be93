// Application layer - the operations every client (CLI, tool server) goes through.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
