//! Board Snapshot
//!
//! Both collections as loaded by one reload, plus the per-target grouping.

use std::collections::HashSet;

use crate::models::{Target, Todo};

/// One consistent snapshot of all targets and all todos
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    pub targets: Vec<Target>,
    pub todos: Vec<Todo>,
}

impl Board {
    pub fn new(targets: Vec<Target>, todos: Vec<Todo>) -> Self {
        Self { targets, todos }
    }

    pub fn target(&self, id: u32) -> Option<&Target> {
        self.targets.iter().find(|t| t.id == id)
    }

    /// Todos whose `target_id` is `target_id`, in server order
    pub fn todos_for(&self, target_id: u32) -> Vec<&Todo> {
        todos_for(&self.todos, target_id)
    }

    pub fn has_todos(&self, target_id: u32) -> bool {
        self.todos.iter().any(|t| t.target_id == target_id)
    }

    /// Todos pointing at a target that was not loaded
    pub fn orphaned_todos(&self) -> Vec<&Todo> {
        let ids: HashSet<u32> = self.targets.iter().map(|t| t.id).collect();
        self.todos
            .iter()
            .filter(|t| !ids.contains(&t.target_id))
            .collect()
    }
}

/// Filter a todo list down to one target's children
pub fn todos_for(todos: &[Todo], target_id: u32) -> Vec<&Todo> {
    todos.iter().filter(|t| t.target_id == target_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_target(id: u32) -> Target {
        Target {
            id,
            title: format!("Target {}", id),
            description: String::new(),
            is_complete: false,
            todos: vec![],
        }
    }

    fn make_todo(id: u32, target_id: u32) -> Todo {
        Todo {
            id,
            title: format!("Todo {}", id),
            description: String::new(),
            is_complete: false,
            target_id,
        }
    }

    #[test]
    fn test_todos_for_keeps_server_order() {
        let board = Board::new(
            vec![make_target(1), make_target(2)],
            vec![make_todo(10, 2), make_todo(11, 1), make_todo(12, 2), make_todo(13, 1)],
        );

        let ids: Vec<u32> = board.todos_for(2).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![10, 12]);
        let ids: Vec<u32> = board.todos_for(1).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![11, 13]);
    }

    #[test]
    fn test_target_without_todos() {
        let board = Board::new(vec![make_target(1), make_target(2)], vec![make_todo(10, 1)]);
        assert!(board.has_todos(1));
        assert!(!board.has_todos(2));
        assert!(board.todos_for(2).is_empty());
    }

    #[test]
    fn test_orphaned_todos_are_reported_not_grouped() {
        let board = Board::new(vec![make_target(1)], vec![make_todo(10, 1), make_todo(11, 99)]);

        let orphans: Vec<u32> = board.orphaned_todos().iter().map(|t| t.id).collect();
        assert_eq!(orphans, vec![11]);
        assert!(board.target(99).is_none());
        assert_eq!(board.target(1).map(|t| t.id), Some(1));
    }

    #[test]
    fn test_empty_board() {
        let board = Board::default();
        assert!(board.orphaned_todos().is_empty());
        assert!(!board.has_todos(0));
    }
}
