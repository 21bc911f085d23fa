//! Repositories over the document store

mod project;
mod session;

pub use project::{DocProjectRepository, ProjectRepository};
pub use session::{DocSessionRepository, SessionRepository, StoredSession};
