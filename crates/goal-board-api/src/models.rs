//! Wire Models
//!
//! Record shapes owned by the remote service. The client only mirrors them.

use serde::{Deserialize, Deserializer, Serialize};

/// A goal, parent of zero or more todos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub is_complete: bool,
    /// Populated by the server; not trusted for grouping
    #[serde(default, deserialize_with = "null_as_default")]
    pub todos: Vec<Todo>,
}

/// A task belonging to exactly one target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub is_complete: bool,
    pub target_id: u32,
}

/// Draft for a target that does not exist yet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTarget {
    pub title: String,
    pub description: String,
}

/// Draft for a todo that does not exist yet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    /// 0 means no target selected
    pub target_id: u32,
}

impl Target {
    pub fn with_completion(&self, is_complete: bool) -> Self {
        Self {
            is_complete,
            ..self.clone()
        }
    }
}

impl Todo {
    pub fn with_completion(&self, is_complete: bool) -> Self {
        Self {
            is_complete,
            ..self.clone()
        }
    }
}

impl NewTodo {
    pub fn has_target(&self) -> bool {
        self.target_id != 0
    }
}

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateTargetBody<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub is_complete: bool,
}

impl<'a> From<&'a NewTarget> for CreateTargetBody<'a> {
    fn from(draft: &'a NewTarget) -> Self {
        Self {
            title: &draft.title,
            description: &draft.description,
            is_complete: false,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateTodoBody<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub is_complete: bool,
    pub target_id: u32,
}

impl<'a> From<&'a NewTodo> for CreateTodoBody<'a> {
    fn from(draft: &'a NewTodo) -> Self {
        Self {
            title: &draft.title,
            description: &draft.description,
            is_complete: false,
            target_id: draft.target_id,
        }
    }
}

/// Full replacement of a target. The service expects the children under `todo`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReplaceTargetBody<'a> {
    pub id: u32,
    pub title: &'a str,
    pub description: &'a str,
    pub is_complete: bool,
    pub todo: &'a [Todo],
}

impl<'a> From<&'a Target> for ReplaceTargetBody<'a> {
    fn from(target: &'a Target) -> Self {
        Self {
            id: target.id,
            title: &target.title,
            description: &target.description,
            is_complete: target.is_complete,
            todo: &target.todos,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_target_reads_camel_case() {
        let target: Target = serde_json::from_value(json!({
            "id": 3,
            "title": "Run a marathon",
            "description": "Before 2027",
            "isComplete": true,
            "todos": [
                { "id": 7, "title": "Buy shoes", "description": "", "isComplete": false, "targetId": 3 }
            ]
        }))
        .unwrap();

        assert_eq!(target.id, 3);
        assert!(target.is_complete);
        assert_eq!(target.todos.len(), 1);
        assert_eq!(target.todos[0].target_id, 3);
    }

    #[test]
    fn test_target_null_fields_read_as_empty() {
        let target: Target = serde_json::from_value(json!({
            "id": 1,
            "title": "Learn Rust",
            "description": null,
            "isComplete": false,
            "todos": null
        }))
        .unwrap();

        assert_eq!(target.description, "");
        assert!(target.todos.is_empty());

        let bare: Target = serde_json::from_value(json!({ "id": 2, "title": "x" })).unwrap();
        assert!(bare.todos.is_empty());
        assert!(!bare.is_complete);
    }

    #[test]
    fn test_todo_writes_camel_case() {
        let todo = Todo {
            id: 9,
            title: "Stretch".to_string(),
            description: "10 min".to_string(),
            is_complete: false,
            target_id: 3,
        };
        let value = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            value,
            json!({ "id": 9, "title": "Stretch", "description": "10 min", "isComplete": false, "targetId": 3 })
        );
    }

    #[test]
    fn test_create_bodies_start_incomplete() {
        let draft = NewTodo {
            title: "Stretch".to_string(),
            description: String::new(),
            target_id: 4,
        };
        let value = serde_json::to_value(CreateTodoBody::from(&draft)).unwrap();
        assert_eq!(value["isComplete"], json!(false));
        assert_eq!(value["targetId"], json!(4));

        let draft = NewTarget {
            title: "Goal".to_string(),
            description: "desc".to_string(),
        };
        let value = serde_json::to_value(CreateTargetBody::from(&draft)).unwrap();
        assert_eq!(value, json!({ "title": "Goal", "description": "desc", "isComplete": false }));
    }

    #[test]
    fn test_replace_target_body_nests_todos_under_todo() {
        let target = Target {
            id: 5,
            title: "Goal".to_string(),
            description: String::new(),
            is_complete: false,
            todos: vec![],
        };
        let value = serde_json::to_value(ReplaceTargetBody::from(&target)).unwrap();
        assert_eq!(value["todo"], json!([]));
        assert_eq!(value["id"], json!(5));
        assert!(value.get("todos").is_none());
    }

    #[test]
    fn test_with_completion_keeps_other_fields() {
        let todo = Todo {
            id: 1,
            title: "a".to_string(),
            description: "b".to_string(),
            is_complete: false,
            target_id: 2,
        };
        let done = todo.with_completion(true);
        assert!(done.is_complete);
        assert_eq!(done.title, "a");
        assert_eq!(done.target_id, 2);
        assert!(!NewTodo::default().has_target());
    }
}
