//! Widget Configuration
//!
//! Storage keys and poll limits. The page may override any field with a JSON
//! blob; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TODO_KEY: &str = "todoTasks";
pub const DEFAULT_POLL_KEY: &str = "poll:jogos-2-enquete-v1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// localStorage key of the task list
    pub todo_key: String,
    /// localStorage key of the poll document
    pub poll_key: String,
    pub poll: PollLimits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollLimits {
    /// Suggestions are truncated to this many characters
    pub suggestion_max_chars: usize,
    /// Only the most recent suggestions are kept
    pub suggestion_log_cap: usize,
    /// Minimum trimmed length of a free-text suggestion
    pub suggestion_min_chars: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            todo_key: DEFAULT_TODO_KEY.to_string(),
            poll_key: DEFAULT_POLL_KEY.to_string(),
            poll: PollLimits::default(),
        }
    }
}

impl Default for PollLimits {
    fn default() -> Self {
        Self {
            suggestion_max_chars: 300,
            suggestion_log_cap: 25,
            suggestion_min_chars: 3,
        }
    }
}

impl WidgetConfig {
    /// Parse an override blob. Anything unreadable falls back to the defaults.
    pub fn from_json(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::default();
        }
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring malformed widget config: {}", e);
                Self::default()
            }
        }
    }
}
