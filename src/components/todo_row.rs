//! Todo Row Component
//!
//! One todo inside its target's card.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::toggle::settle_toggle;
use crate::context::use_app_context;
use crate::models::Todo;

/// A single todo with toggle, edit and delete actions
#[component]
pub fn TodoRow(
    todo: Todo,
    set_todo_to_edit: WriteSignal<Option<Todo>>,
) -> impl IntoView {
    let ctx = use_app_context();

    let id = todo.id;
    let completed = todo.is_complete;
    let title = todo.title.clone();
    let description = todo.description.clone();
    let status = if completed { "Complete" } else { "Incomplete" };

    let (checked, set_checked) = signal(completed);

    let toggle_copy = todo.clone();
    let edit_copy = todo;

    view! {
        <div class=if completed { "todo-row completed" } else { "todo-row" }>
            <label class="todo-title">
                <input
                    type="checkbox"
                    prop:checked=move || checked.get()
                    on:change=move |ev| {
                        set_checked.set(event_target_checked(&ev));
                        let todo = toggle_copy.clone();
                        spawn_local(async move {
                            let outcome = commands::toggle_todo(todo).await;
                            if settle_toggle(set_checked, completed, &outcome) {
                                ctx.reload();
                            }
                        });
                    }
                />
                <h4>{title}</h4>
            </label>
            <p class="todo-description">{description}</p>
            <p class="todo-status">{status}</p>

            <div class="todo-actions">
                <button class="delete-btn" on:click=move |_| {
                    spawn_local(async move {
                        if commands::delete_todo(id).await.is_ok() {
                            ctx.reload();
                        }
                    });
                }>"Delete todo"</button>
                <button class="edit-btn" on:click=move |_| set_todo_to_edit.set(Some(edit_copy.clone()))>
                    "Edit"
                </button>
            </div>
        </div>
    }
}
