//! Todo Edit Dialog
//!
//! Modal for editing a todo's text and completion.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::Todo;

#[component]
pub fn TodoEditDialog(
    todo_to_edit: ReadSignal<Option<Todo>>,
    set_todo_to_edit: WriteSignal<Option<Todo>>,
) -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (completed, set_completed) = signal(false);

    Effect::new(move |_| {
        if let Some(todo) = todo_to_edit.get() {
            set_title.set(todo.title);
            set_description.set(todo.description);
            set_completed.set(todo.is_complete);
        }
    });

    let save = move |_| {
        let Some(current) = todo_to_edit.get() else { return };
        let updated = Todo {
            title: title.get(),
            description: description.get(),
            is_complete: completed.get(),
            ..current
        };

        spawn_local(async move {
            if commands::update_todo(updated).await.is_ok() {
                ctx.reload();
                set_todo_to_edit.set(None);
            }
        });
    };

    view! {
        <Show when=move || todo_to_edit.get().is_some()>
            <div class="modal-backdrop">
                <div class="modal" role="dialog" aria-labelledby="edit-todo-title">
                    <div class="modal-header">
                        <h1 id="edit-todo-title">"Edit todo"</h1>
                        <button class="close-btn" on:click=move |_| set_todo_to_edit.set(None)>"×"</button>
                    </div>
                    <div class="modal-body">
                        <input
                            type="text"
                            placeholder="Todo title"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Todo description"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        />
                        <label>
                            "Complete: "
                            <input
                                type="checkbox"
                                prop:checked=move || completed.get()
                                on:change=move |ev| set_completed.set(event_target_checked(&ev))
                            />
                        </label>
                    </div>
                    <div class="modal-footer">
                        <button class="cancel-btn" on:click=move |_| set_todo_to_edit.set(None)>"Cancel"</button>
                        <button class="save-btn" on:click=save>"Save changes"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
