//! Orchestration (classify → rewrite → metrics → conflict) and the HTTP surface.

pub mod error;
pub mod orchestrator;
pub mod routes;

pub use error::ServiceError;
pub use orchestrator::{ClassifyResponse, Orchestrator, RewriteResponse};
pub use routes::{router, serve};

#[cfg(test)]
pub(crate) mod testing;
