//! Goal Board API
//!
//! Typed client for the remote targets/todos REST service.
//! - models: wire records and creation drafts
//! - board: a loaded snapshot of both collections, grouped per target
//! - client: the HTTP wrapper, one method per endpoint

mod board;
mod client;
mod error;
mod models;

pub use board::{todos_for, Board};
pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::{ApiResult, ClientError};
pub use models::{NewTarget, NewTodo, Target, Todo};
