//! Frontend Models
//!
//! Data structures matching the todo API wire format.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned task identifier.
///
/// Treated as opaque: the API may hand out numbers or strings, and the UI only
/// compares identifiers and echoes them back in request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(u64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(n) => write!(f, "{}", n),
            TaskId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for TaskId {
    fn from(n: u64) -> Self {
        TaskId::Number(n)
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub task: String,
    #[serde(with = "done_flag")]
    pub is_done: bool,
}

impl Task {
    pub fn status_label(&self) -> &'static str {
        if self.is_done { "Completed" } else { "Pending" }
    }

    /// Row text as shown in the list, e.g. `Buy milk - Pending`
    pub fn display_line(&self) -> String {
        format!("{} - {}", self.task, self.status_label())
    }
}

/// Request body for create and update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskDraft {
    pub task: String,
    #[serde(with = "done_flag")]
    pub is_done: bool,
}

/// The only place `is_done` crosses between `0|1` on the wire and `bool` in the UI.
///
/// Decoding also accepts a JSON boolean.
pub mod done_flag {
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Int(i64),
        Bool(bool),
    }

    pub fn serialize<S: Serializer>(done: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*done))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match Flag::deserialize(deserializer)? {
            Flag::Int(0) | Flag::Bool(false) => Ok(false),
            Flag::Int(1) | Flag::Bool(true) => Ok(true),
            Flag::Int(other) => Err(de::Error::custom(format!(
                "is_done must be 0 or 1, got {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_wire_task() {
        let task: Task = serde_json::from_value(json!({"id": 1, "task": "Buy milk", "is_done": 0})).unwrap();
        assert_eq!(task.id, TaskId::Number(1));
        assert_eq!(task.task, "Buy milk");
        assert!(!task.is_done);

        let done: Task = serde_json::from_value(json!({"id": 2, "task": "Walk dog", "is_done": 1})).unwrap();
        assert!(done.is_done);
    }

    #[test]
    fn test_decode_accepts_bool_and_string_id() {
        let task: Task = serde_json::from_value(json!({"id": "a7f", "task": "Read", "is_done": true})).unwrap();
        assert_eq!(task.id, TaskId::Text("a7f".to_string()));
        assert_eq!(task.id.to_string(), "a7f");
        assert!(task.is_done);
    }

    #[test]
    fn test_decode_rejects_out_of_range_flag() {
        let result = serde_json::from_value::<Task>(json!({"id": 1, "task": "Bad", "is_done": 2}));
        assert!(result.is_err());
    }

    #[test]
    fn test_draft_encodes_flag_as_integer() {
        let draft = TaskDraft { task: "Buy milk".to_string(), is_done: true };
        assert_eq!(serde_json::to_value(&draft).unwrap(), json!({"task": "Buy milk", "is_done": 1}));

        let pending = TaskDraft { task: "Buy milk".to_string(), is_done: false };
        assert_eq!(serde_json::to_value(&pending).unwrap()["is_done"], json!(0));
    }

    #[test]
    fn test_display_line() {
        let mut task = Task { id: 1.into(), task: "Buy milk".to_string(), is_done: false };
        assert_eq!(task.display_line(), "Buy milk - Pending");
        task.is_done = true;
        assert_eq!(task.display_line(), "Buy milk - Completed");
    }
}
