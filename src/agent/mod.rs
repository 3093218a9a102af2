//! The task-management collaborator around the resolver core.
//!
//! Takes transcribed utterances, classifies them as task creation or
//! completion, asks the resolver for a due timestamp (substituting the
//! reference + 7 days / 12:00 fallback when nothing resolves), and keeps
//! the task list behind an injected [`TaskStore`].
//!
//! Everything here is dictionary lookup and list upkeep; the temporal
//! grammar lives in the crate root modules.

mod intent;
mod store;
mod title;

pub use store::{MemoryStore, Task, TaskStatus, TaskStore};

use crate::api::{Context, fallback_due, resolve_with};

pub struct TaskAgent<S: TaskStore> {
    store: S,
}

impl Default for TaskAgent<MemoryStore> {
    fn default() -> Self {
        TaskAgent::new(MemoryStore::new())
    }
}

impl<S: TaskStore> TaskAgent<S> {
    pub fn new(store: S) -> Self {
        TaskAgent { store }
    }

    /// Process one utterance against the default context and return the
    /// full task list as JSON.
    pub fn process_input(&mut self, input: &str) -> String {
        self.process_input_at(input, &Context::default())
    }

    /// Process one utterance against an explicit reference instant.
    ///
    /// Completion is checked before creation so "営業資料の作成が完了"
    /// closes the existing task instead of opening a new one.
    pub fn process_input_at(&mut self, input: &str, context: &Context) -> String {
        if intent::is_task_completion(input) {
            if let Some(index) = intent::find_task_to_complete(self.store.tasks(), input) {
                self.store.tasks_mut()[index].status = TaskStatus::Done;
            }
        } else if intent::is_task_creation(input) {
            let due = match resolve_with(input, context) {
                Some(resolved) => resolved.format(),
                None => fallback_due(context.reference_time).format("%Y-%m-%dT%H:%M").to_string(),
            };

            let task = Task {
                id: self.next_id(),
                title: title::extract_title(input),
                due,
                link: title::extract_link_label(input),
                status: TaskStatus::Pending,
            };
            self.store.push(task);
        }

        serde_json::to_string_pretty(self.store.tasks()).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    fn next_id(&self) -> u64 {
        self.store.tasks().iter().map(|task| task.id).max().unwrap_or(0) + 1
    }
}
