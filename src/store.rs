//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Board, Target, Todo};

/// Local mirror of the service's collections
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// All targets, in server order
    pub targets: Vec<Target>,
    /// All todos, in server order
    pub todos: Vec<Todo>,
    /// Set after the first successful load
    pub loaded: bool,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace both collections with a freshly loaded snapshot
pub fn store_replace_board(store: &BoardStore, board: Board) {
    *store.targets().write() = board.targets;
    *store.todos().write() = board.todos;
    *store.loaded().write() = true;
}

/// Titles for the target picker, in server order
pub fn store_target_options(store: &BoardStore) -> Vec<(u32, String)> {
    store
        .targets()
        .read()
        .iter()
        .map(|t| (t.id, t.title.clone()))
        .collect()
}

/// Latest loaded copy of `target`, so a full replace carries the current children.
/// Falls back to `target` itself if it is no longer loaded.
pub fn store_current_target(store: &BoardStore, target: &Target) -> Target {
    current_target(&store.targets().read(), target)
}

fn current_target(targets: &[Target], stale: &Target) -> Target {
    targets
        .iter()
        .find(|t| t.id == stale.id)
        .cloned()
        .unwrap_or_else(|| stale.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, target_id: u32) -> Todo {
        Todo {
            id,
            title: format!("Todo {}", id),
            description: String::new(),
            is_complete: false,
            target_id,
        }
    }

    fn make_target(id: u32, todos: Vec<Todo>) -> Target {
        Target {
            id,
            title: format!("Target {}", id),
            description: String::new(),
            is_complete: false,
            todos,
        }
    }

    #[test]
    fn test_current_target_picks_up_new_children() {
        let stale = make_target(1, vec![]);
        let loaded = vec![make_target(2, vec![]), make_target(1, vec![make_todo(10, 1)])];

        let current = current_target(&loaded, &stale);
        assert_eq!(current.todos, vec![make_todo(10, 1)]);
    }

    #[test]
    fn test_current_target_falls_back_when_gone() {
        let stale = make_target(3, vec![make_todo(30, 3)]);
        assert_eq!(current_target(&[], &stale), stale);
    }

    #[test]
    fn test_store_replace_then_lookup() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(BoardState::default());
            let stale = make_target(1, vec![]);
            store_replace_board(
                &store,
                Board::new(vec![make_target(1, vec![make_todo(10, 1)])], vec![make_todo(10, 1)]),
            );

            assert!(*store.loaded().read());
            assert_eq!(store_current_target(&store, &stale).todos.len(), 1);
            assert_eq!(store_target_options(&store), vec![(1, "Target 1".to_string())]);
        });
    }
}
