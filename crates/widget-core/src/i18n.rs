//! pt-BR text helpers

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// `1 tarefa`, `0 tarefas`, `3 tarefas`
pub fn plural(n: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { plural })
}

/// Short pt-BR date and time, e.g. `07/03/2026, 14:05`
pub fn format_short<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%d/%m/%Y, %H:%M").to_string()
}
