//! Task List
//!
//! The todo document and its mutators. Mutators take the list by value and hand
//! back the next list, so the controller can discard the result on error.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{WidgetError, WidgetResult};
use crate::i18n::plural;
use crate::store::Document;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredTask")]
pub struct Task {
    /// Creation timestamp in milliseconds, unique within the list
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    /// Set iff `completed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// On-disk shape. Older pages wrote tasks without timestamps.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTask {
    id: u64,
    text: String,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    completed_at: Option<DateTime<Utc>>,
}

impl From<StoredTask> for Task {
    fn from(raw: StoredTask) -> Self {
        let created_at = raw
            .created_at
            .or_else(|| i64::try_from(raw.id).ok().and_then(|ms| Utc.timestamp_millis_opt(ms).single()))
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
        let completed_at = if raw.completed {
            Some(raw.completed_at.unwrap_or(created_at))
        } else {
            None
        };
        Task {
            id: raw.id,
            text: raw.text,
            completed: raw.completed,
            created_at,
            completed_at,
        }
    }
}

/// The task list document, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    pub tasks: Vec<Task>,
}

impl Document for TodoList {
    // Hand-edited or merged storage can repeat an id; later copies get fresh ones.
    fn restore(mut self) -> Option<Self> {
        let mut seen = std::collections::HashSet::new();
        let mut max = self.tasks.iter().map(|t| t.id).max().unwrap_or(0);
        for task in &mut self.tasks {
            if !seen.insert(task.id) {
                max = max.saturating_add(1);
                log::warn!("task id {} repeated, renumbered to {}", task.id, max);
                task.id = max;
                seen.insert(max);
            }
        }
        Some(self)
    }
}

impl TodoList {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a task. Blank input is rejected.
    pub fn add_task(mut self, text: &str, now: DateTime<Utc>) -> WidgetResult<(Self, u64)> {
        let text = text.trim();
        if text.is_empty() {
            return Err(WidgetError::EmptyTask);
        }

        let id = self.next_id(now);
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            completed: false,
            created_at: now,
            completed_at: None,
        });
        Ok((self, id))
    }

    /// Flip completion; returns the new `completed` value
    pub fn toggle_task(mut self, id: u64, now: DateTime<Utc>) -> WidgetResult<(Self, bool)> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(WidgetError::TaskNotFound(id))?;
        task.completed = !task.completed;
        task.completed_at = task.completed.then_some(now);
        let completed = task.completed;
        Ok((self, completed))
    }

    /// Remove the task with `id`, returning it
    pub fn delete_task(mut self, id: u64) -> WidgetResult<(Self, Task)> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(WidgetError::TaskNotFound(id))?;
        let removed = self.tasks.remove(idx);
        Ok((self, removed))
    }

    pub fn stats(&self) -> TodoStats {
        TodoStats {
            total: self.tasks.len(),
            completed: self.tasks.iter().filter(|t| t.completed).count(),
        }
    }

    // Timestamp ids collide when two tasks land in the same millisecond.
    fn next_id(&self, now: DateTime<Utc>) -> u64 {
        let stamp = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        match self.tasks.iter().map(|t| t.id).max() {
            Some(max) if max >= stamp => max + 1,
            _ => stamp,
        }
    }
}

/// Counters shown under the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
}

impl TodoStats {
    pub fn total_label(&self) -> String {
        plural(self.total, "tarefa", "tarefas")
    }

    pub fn completed_label(&self) -> String {
        plural(self.completed, "concluída", "concluídas")
    }
}
