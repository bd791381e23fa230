//! Goal Board App
//!
//! Main application component: creation forms on top, targets with their todos below.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{TargetCard, TargetEditDialog, TargetForm, TodoEditDialog, TodoForm};
use crate::context::AppContext;
use crate::models::{Target, Todo};
use crate::store::{store_replace_board, BoardState, BoardStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(BoardState::default());
    let ctx = AppContext::new();
    let (target_to_edit, set_target_to_edit) = signal::<Option<Target>>(None);
    let (todo_to_edit, set_todo_to_edit) = signal::<Option<Todo>>(None);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Reload everything on mount and after every mutation
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("loading board, trigger={}", trigger);
        spawn_local(async move {
            if let Ok(board) = commands::load_board().await {
                store_replace_board(&store, board);
            }
        });
    });

    let targets = move || store.targets().read().to_vec();
    let board_is_empty = move || *store.loaded().read() && store.targets().read().is_empty();

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Goal Board"</h1>
                <div class="forms">
                    <TargetForm />
                    <TodoForm />
                </div>
            </header>

            <main class="board">
                <For
                    each=targets
                    // Every displayed field, so an edit re-renders the card
                    key=|target| (
                        target.id,
                        target.title.clone(),
                        target.description.clone(),
                        target.is_complete,
                    )
                    children=move |target| {
                        view! {
                            <TargetCard
                                target=target
                                set_target_to_edit=set_target_to_edit
                                set_todo_to_edit=set_todo_to_edit
                            />
                        }
                    }
                />
                <Show when=board_is_empty>
                    <p class="empty-board">"No targets yet. Set a goal above."</p>
                </Show>
            </main>

            <p class="item-count">
                {move || format!("{} targets, {} todos", store.targets().read().len(), store.todos().read().len())}
            </p>

            <TargetEditDialog target_to_edit=target_to_edit set_target_to_edit=set_target_to_edit />
            <TodoEditDialog todo_to_edit=todo_to_edit set_todo_to_edit=set_todo_to_edit />
        </div>
    }
}
