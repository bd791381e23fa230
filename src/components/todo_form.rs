//! Todo Form Component
//!
//! Draft inputs for a new todo, with a picker for its parent target.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::NewTodo;
use crate::store::{store_target_options, use_board_store};

/// Form for creating a todo under a chosen target
#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_board_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    // 0 = nothing picked
    let (target_id, set_target_id) = signal(0u32);

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = NewTodo {
            title: title.get().trim().to_string(),
            description: description.get().trim().to_string(),
            target_id: target_id.get(),
        };
        if draft.title.is_empty() { return; }
        if !draft.has_target() {
            log::warn!("pick a target before adding a todo");
            return;
        }

        spawn_local(async move {
            if commands::create_todo(draft).await.is_ok() {
                set_title.set(String::new());
                set_description.set(String::new());
                ctx.reload();
            }
        });
    };

    let target_options = move || store_target_options(&store);

    view! {
        <form class="entity-form todo-form" on:submit=create_todo>
            <h2>"Add a todo"</h2>
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
            <select
                prop:value=move || target_id.get().to_string()
                on:change=move |ev| {
                    set_target_id.set(event_target_value(&ev).parse().unwrap_or(0));
                }
            >
                <option value="0">"Select a target"</option>
                <For
                    each=target_options
                    key=|(id, title)| (*id, title.clone())
                    children=move |(id, title)| {
                        view! { <option value=id.to_string()>{title}</option> }
                    }
                />
            </select>
            <button type="submit">"Add todo"</button>
        </form>
    }
}
