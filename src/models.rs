//! Frontend Models
//!
//! Record shapes come from the API crate so the UI and the client agree on the wire format.

pub use goal_board_api::{Board, NewTarget, NewTodo, Target, Todo};
