//! Task model and the injected store seam.
//!
//! The resolver core knows nothing about tasks; the agent keeps its list
//! behind the narrow [`TaskStore`] trait rather than in process-wide
//! mutable state. The task list serializes to caller-facing JSON with
//! Japanese status literals on the wire.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "未着手")]
    Pending,
    #[serde(rename = "完了")]
    Done,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    /// Due timestamp, `YYYY-MM-DDTHH:MM`.
    pub due: String,
    /// Suggested tool link label (PowerPoint Web, Excel Web, ...).
    pub link: String,
    pub status: TaskStatus,
}

/// The seam between the agent and whatever holds its tasks.
pub trait TaskStore {
    fn push(&mut self, task: Task);
    fn tasks(&self) -> &[Task];
    fn tasks_mut(&mut self) -> &mut [Task];
}

/// In-memory store for a single session.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tasks: Vec<Task>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskStore for MemoryStore {
    fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn tasks_mut(&mut self) -> &mut [Task] {
        &mut self.tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_to_the_japanese_literals() {
        let task = Task {
            id: 1,
            title: "営業資料の作成".to_string(),
            due: "2024-06-17T12:00".to_string(),
            link: "PowerPoint Web".to_string(),
            status: TaskStatus::Pending,
        };
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"未着手\""));

        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back.status, TaskStatus::Pending);
    }
}
