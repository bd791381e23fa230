//! UI Components
//!
//! Reusable Leptos components.

mod target_form;
mod todo_form;
mod target_card;
mod todo_row;
mod target_edit_dialog;
mod todo_edit_dialog;
mod delete_confirm_button;
mod toggle;

pub use target_form::TargetForm;
pub use todo_form::TodoForm;
pub use target_card::TargetCard;
pub use todo_row::TodoRow;
pub use target_edit_dialog::TargetEditDialog;
pub use todo_edit_dialog::TodoEditDialog;
pub use delete_confirm_button::DeleteConfirmButton;
