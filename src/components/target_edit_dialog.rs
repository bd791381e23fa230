//! Target Edit Dialog
//!
//! Modal for renaming a target or changing its description.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::Target;
use crate::store::{store_current_target, use_board_store};

#[component]
pub fn TargetEditDialog(
    target_to_edit: ReadSignal<Option<Target>>,
    set_target_to_edit: WriteSignal<Option<Target>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_board_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    // Seed the inputs whenever a different target is opened
    Effect::new(move |_| {
        if let Some(target) = target_to_edit.get() {
            set_title.set(target.title);
            set_description.set(target.description);
        }
    });

    let save = move |_| {
        let Some(opened) = target_to_edit.get() else { return };
        // A reload may have changed the children since the dialog opened
        let current = store_current_target(&store, &opened);
        let updated = Target {
            title: title.get(),
            description: description.get(),
            ..current
        };

        spawn_local(async move {
            // Dialog stays open on failure so the edit is not lost
            if commands::update_target(updated).await.is_ok() {
                ctx.reload();
                set_target_to_edit.set(None);
            }
        });
    };

    view! {
        <Show when=move || target_to_edit.get().is_some()>
            <div class="modal-backdrop">
                <div class="modal" role="dialog" aria-labelledby="edit-target-title">
                    <div class="modal-header">
                        <h1 id="edit-target-title">"Edit target"</h1>
                        <button class="close-btn" on:click=move |_| set_target_to_edit.set(None)>"×"</button>
                    </div>
                    <div class="modal-body">
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
                    </div>
                    <div class="modal-footer">
                        <button class="cancel-btn" on:click=move |_| set_target_to_edit.set(None)>"Cancel"</button>
                        <button class="save-btn" on:click=save>"Save changes"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
