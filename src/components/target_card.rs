//! Target Card Component
//!
//! A target with its todos grouped underneath.

use leptos::prelude::*;
use leptos::task::spawn_local;

use goal_board_api::todos_for;

use crate::commands;
use crate::components::toggle::settle_toggle;
use crate::components::{DeleteConfirmButton, TodoRow};
use crate::context::use_app_context;
use crate::models::{Target, Todo};
use crate::store::{store_current_target, use_board_store, BoardStateStoreFields};

#[component]
pub fn TargetCard(
    target: Target,
    set_target_to_edit: WriteSignal<Option<Target>>,
    set_todo_to_edit: WriteSignal<Option<Todo>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_board_store();

    let id = target.id;
    let completed = target.is_complete;
    let title = target.title.clone();
    let description = target.description.clone();

    let (checked, set_checked) = signal(completed);

    // The card outlives reloads that only change its children, so actions
    // re-read the loaded copy before sending a full replace.
    let toggle_copy = target.clone();
    let edit_copy = target;

    // Grouping comes from the todo collection, not from the server-populated children
    let children = move || {
        todos_for(&store.todos().read(), id)
            .into_iter()
            .cloned()
            .collect::<Vec<Todo>>()
    };

    let delete_target = Callback::new(move |_: ()| {
        spawn_local(async move {
            if commands::delete_target(id).await.is_ok() {
                ctx.reload();
            }
        });
    });

    view! {
        <div class=if completed { "target-card completed" } else { "target-card" }>
            <label class="target-title">
                <input
                    type="checkbox"
                    prop:checked=move || checked.get()
                    on:change=move |ev| {
                        set_checked.set(event_target_checked(&ev));
                        let target = store_current_target(&store, &toggle_copy);
                        spawn_local(async move {
                            let outcome = commands::toggle_target(target).await;
                            if settle_toggle(set_checked, completed, &outcome) {
                                ctx.reload();
                            }
                        });
                    }
                />
                {title}
            </label>
            <h3 class="target-description">{description}</h3>

            <div class="todo-list">
                {move || {
                    let todos = children();
                    if todos.is_empty() {
                        view! { <p class="empty-todos">"No todos for this target."</p> }.into_any()
                    } else {
                        todos
                            .into_iter()
                            .map(|todo| view! { <TodoRow todo=todo set_todo_to_edit=set_todo_to_edit /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>

            <div class="target-actions">
                <DeleteConfirmButton
                    label="Delete target"
                    prompt="Delete this target? Its todos will be deleted too."
                    on_confirm=delete_target
                />
                <button class="edit-btn" on:click=move |_| set_target_to_edit.set(Some(store_current_target(&store, &edit_copy)))>
                    "Edit target"
                </button>
            </div>
        </div>
    }
}
