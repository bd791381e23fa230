//! Target Form Component
//!
//! Draft inputs for a new target.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::NewTarget;

/// Form for creating a target
#[component]
pub fn TargetForm() -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_target = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = NewTarget {
            title: title.get().trim().to_string(),
            description: description.get().trim().to_string(),
        };
        if draft.title.is_empty() { return; }

        spawn_local(async move {
            if commands::create_target(draft).await.is_ok() {
                set_title.set(String::new());
                set_description.set(String::new());
                ctx.reload();
            }
        });
    };

    view! {
        <form class="entity-form target-form" on:submit=create_target>
            <h2>"Set a goal"</h2>
            <input
                type="text"
                placeholder="Target title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Target description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">"Add target"</button>
        </form>
    }
}
