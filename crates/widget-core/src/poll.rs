//! Poll
//!
//! Single-choice poll with a local tally. One browser is one voter: switching
//! the vote moves the voter's single count from the old option to the new one.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::PollLimits;
use crate::error::VoteError;
use crate::i18n::plural;
use crate::store::Document;

pub const SCHEMA_VERSION: u32 = 1;

/// Option that accepts a free-text suggestion
pub const FREE_TEXT_OPTION: &str = "opt4";

pub const POLL_QUESTION: &str = "Qual deve ser o próximo jogo da coleção?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOption {
    pub id: &'static str,
    pub label: &'static str,
}

impl PollOption {
    pub fn is_free_text(&self) -> bool {
        self.id == FREE_TEXT_OPTION
    }
}

pub const POLL_OPTIONS: &[PollOption] = &[
    PollOption { id: "opt1", label: "Jogo da memória" },
    PollOption { id: "opt2", label: "Quiz de lógica" },
    PollOption { id: "opt3", label: "Caça-palavras" },
    PollOption { id: FREE_TEXT_OPTION, label: "Outro (sugira abaixo)" },
];

pub fn find_option(id: &str) -> Option<&'static PollOption> {
    POLL_OPTIONS.iter().find(|o| o.id == id)
}

/// This browser's current vote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyVote {
    pub option_id: String,
    pub suggestion: Option<String>,
    pub voted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    pub at: DateTime<Utc>,
}

/// The persisted poll document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollState {
    pub version: u32,
    pub counts: BTreeMap<String, u32>,
    pub my_vote: Option<MyVote>,
    /// Most recent last
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

impl Default for PollState {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION,
            counts: POLL_OPTIONS.iter().map(|o| (o.id.to_string(), 0)).collect(),
            my_vote: None,
            suggestions: Vec::new(),
        }
    }
}

impl Document for PollState {
    fn restore(mut self) -> Option<Self> {
        if self.version != SCHEMA_VERSION {
            return None;
        }
        for option in POLL_OPTIONS {
            self.counts.entry(option.id.to_string()).or_insert(0);
        }
        Some(self)
    }
}

/// Outcome of a successful vote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    Recorded,
    Changed,
}

impl VoteOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            VoteOutcome::Recorded => "Voto registrado!",
            VoteOutcome::Changed => "Voto atualizado!",
        }
    }
}

/// Check a selection before it is applied
pub fn validate_vote(
    option_id: Option<&str>,
    suggestion: &str,
    limits: &PollLimits,
) -> Result<&'static PollOption, VoteError> {
    let id = option_id.ok_or(VoteError::NoSelection)?;
    let option = find_option(id).ok_or_else(|| VoteError::UnknownOption(id.to_string()))?;
    if option.is_free_text() && suggestion.trim().chars().count() < limits.suggestion_min_chars {
        return Err(VoteError::SuggestionTooShort { min: limits.suggestion_min_chars });
    }
    Ok(option)
}

/// Move this voter's count to `option_id`, record the vote and log a free-text suggestion.
/// Expects a validated option.
pub fn apply_vote(
    mut state: PollState,
    option_id: &str,
    suggestion: &str,
    now: DateTime<Utc>,
    limits: &PollLimits,
) -> (PollState, VoteOutcome) {
    let outcome = match state.my_vote.take() {
        Some(prev) => {
            if let Some(count) = state.counts.get_mut(&prev.option_id) {
                *count = count.saturating_sub(1);
            }
            if prev.option_id == option_id {
                VoteOutcome::Recorded
            } else {
                VoteOutcome::Changed
            }
        }
        None => VoteOutcome::Recorded,
    };
    let count = state.counts.entry(option_id.to_string()).or_insert(0);
    *count = count.saturating_add(1);

    let text = if option_id == FREE_TEXT_OPTION {
        let text: String = suggestion.trim().chars().take(limits.suggestion_max_chars).collect();
        (!text.is_empty()).then_some(text)
    } else {
        None
    };

    if let Some(text) = &text {
        state.suggestions.push(Suggestion { text: text.clone(), at: now });
        let overflow = state.suggestions.len().saturating_sub(limits.suggestion_log_cap);
        state.suggestions.drain(..overflow);
    }

    state.my_vote = Some(MyVote {
        option_id: option_id.to_string(),
        suggestion: text,
        voted_at: now,
    });
    (state, outcome)
}

/// Validate then apply
pub fn cast_vote(
    state: PollState,
    option_id: Option<&str>,
    suggestion: &str,
    now: DateTime<Utc>,
    limits: &PollLimits,
) -> Result<(PollState, VoteOutcome), VoteError> {
    let option = validate_vote(option_id, suggestion, limits)?;
    Ok(apply_vote(state, option.id, suggestion, now, limits))
}

/// One bar of the results chart
#[derive(Debug, Clone, PartialEq)]
pub struct ResultBar {
    pub option: &'static PollOption,
    pub count: u32,
    /// Width in percent of the leading option
    pub width: u32,
    pub mine: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PollResults {
    pub bars: Vec<ResultBar>,
    pub total: u32,
}

impl PollResults {
    pub fn total_label(&self) -> String {
        plural(self.total as usize, "voto", "votos")
    }
}

pub fn render_results(state: &PollState) -> PollResults {
    let count_of = |id: &str| state.counts.get(id).copied().unwrap_or(0);
    let max = POLL_OPTIONS.iter().map(|o| count_of(o.id)).max().unwrap_or(0).max(1);
    let mine = state.my_vote.as_ref().map(|v| v.option_id.as_str());

    let bars = POLL_OPTIONS
        .iter()
        .map(|option| {
            let count = count_of(option.id);
            ResultBar {
                option,
                count,
                width: (f64::from(count) / f64::from(max) * 100.0).round() as u32,
                mine: mine == Some(option.id),
            }
        })
        .collect::<Vec<_>>();

    PollResults {
        total: bars.iter().map(|b| b.count).sum(),
        bars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{load_document, MemoryStore};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
    }

    fn limits() -> PollLimits {
        PollLimits::default()
    }

    fn total(state: &PollState) -> u32 {
        state.counts.values().sum()
    }

    #[test]
    fn validation_failures() {
        let l = limits();
        assert_eq!(validate_vote(None, "", &l), Err(VoteError::NoSelection));
        assert_eq!(
            validate_vote(Some("opt4"), "ab", &l),
            Err(VoteError::SuggestionTooShort { min: 3 })
        );
        assert_eq!(
            validate_vote(Some("opt4"), "  ab   ", &l),
            Err(VoteError::SuggestionTooShort { min: 3 })
        );
        assert_eq!(
            validate_vote(Some("opt9"), "", &l),
            Err(VoteError::UnknownOption("opt9".to_string()))
        );
    }

    #[test]
    fn validation_successes() {
        let l = limits();
        assert_eq!(validate_vote(Some("opt4"), "abc", &l).unwrap().id, "opt4");
        assert_eq!(validate_vote(Some("opt1"), "", &l).unwrap().id, "opt1");
    }

    #[test]
    fn switching_vote_moves_the_count() {
        let l = limits();
        let (state, first) = apply_vote(PollState::default(), "opt1", "", now(), &l);
        assert_eq!(first, VoteOutcome::Recorded);
        let (state, second) = apply_vote(state, "opt4", "testar", now(), &l);
        assert_eq!(second, VoteOutcome::Changed);

        assert_eq!(state.counts["opt1"], 0);
        assert_eq!(state.counts["opt4"], 1);
        assert_eq!(state.suggestions.len(), 1);
        assert_eq!(state.suggestions[0].text, "testar");
        assert_eq!(state.my_vote.as_ref().unwrap().suggestion.as_deref(), Some("testar"));
    }

    #[test]
    fn single_voter_total_never_exceeds_one() {
        let l = limits();
        let mut state = PollState::default();
        for id in ["opt1", "opt2", "opt2", "opt3", "opt4", "opt1"] {
            state = apply_vote(state, id, "algo", now(), &l).0;
            assert_eq!(total(&state), 1);
        }
    }

    #[test]
    fn prior_count_floors_at_zero() {
        let l = limits();
        let mut state = PollState::default();
        state.my_vote = Some(MyVote { option_id: "opt2".into(), suggestion: None, voted_at: now() });
        let (state, _) = apply_vote(state, "opt3", "", now(), &l);
        assert_eq!(state.counts["opt2"], 0);
        assert_eq!(state.counts["opt3"], 1);
    }

    #[test]
    fn suggestion_log_is_capped() {
        let l = limits();
        let mut state = PollState::default();
        for i in 0..40 {
            state = apply_vote(state, "opt4", &format!("ideia {}", i), now(), &l).0;
        }
        assert_eq!(state.suggestions.len(), 25);
        assert_eq!(state.suggestions[0].text, "ideia 15");
        assert_eq!(state.suggestions[24].text, "ideia 39");
    }

    #[test]
    fn suggestion_is_trimmed_and_truncated() {
        let l = limits();
        let long = format!("  {}  ", "é".repeat(400));
        let (state, _) = apply_vote(PollState::default(), "opt4", &long, now(), &l);
        assert_eq!(state.suggestions[0].text.chars().count(), 300);
    }

    #[test]
    fn fixed_options_never_log_suggestions() {
        let l = limits();
        let (state, _) = apply_vote(PollState::default(), "opt2", "ignored", now(), &l);
        assert!(state.suggestions.is_empty());
        assert!(state.my_vote.unwrap().suggestion.is_none());
    }

    #[test]
    fn cast_vote_rejects_without_touching_state() {
        let err = cast_vote(PollState::default(), Some("opt4"), "no", now(), &limits()).unwrap_err();
        assert!(matches!(err, VoteError::SuggestionTooShort { .. }));
    }

    #[test]
    fn result_widths_scale_to_leader() {
        let mut state = PollState::default();
        state.counts.insert("opt1".into(), 3);
        state.counts.insert("opt2".into(), 1);
        state.counts.insert("opt3".into(), 2);
        state.my_vote = Some(MyVote { option_id: "opt3".into(), suggestion: None, voted_at: now() });

        let results = render_results(&state);
        let widths: Vec<_> = results.bars.iter().map(|b| b.width).collect();
        assert_eq!(widths, vec![100, 33, 67, 0]);
        assert!(results.bars[2].mine);
        assert!(!results.bars[0].mine);
        assert_eq!(results.total, 6);
        assert_eq!(results.total_label(), "6 votos");
    }

    #[test]
    fn empty_poll_has_zero_width_bars() {
        let results = render_results(&PollState::default());
        assert!(results.bars.iter().all(|b| b.width == 0));
        assert_eq!(results.total_label(), "0 votos");
    }

    #[test]
    fn outdated_schema_is_discarded() {
        let mut old = PollState::default();
        old.version = 0;
        assert!(old.restore().is_none());
    }

    #[test]
    fn saturated_count_does_not_overflow() {
        let store = MemoryStore::new().with_entry(
            "poll",
            r#"{"version":1,"counts":{"opt1":4294967295},"my_vote":null,"suggestions":[]}"#,
        );
        let state: PollState = load_document(&store, "poll");
        let (state, _) = apply_vote(state, "opt1", "", now(), &limits());
        assert_eq!(state.counts["opt1"], u32::MAX);
    }

    #[test]
    fn revoting_same_option_is_not_a_change() {
        let l = limits();
        let (state, _) = apply_vote(PollState::default(), "opt2", "", now(), &l);
        let (state, again) = apply_vote(state, "opt2", "", now(), &l);
        assert_eq!(again, VoteOutcome::Recorded);
        assert_eq!(state.counts["opt2"], 1);
    }

    #[test]
    fn restore_fills_missing_counts() {
        let raw = r#"{"version":1,"counts":{"opt1":2},"my_vote":null}"#;
        let state: PollState = serde_json::from_str(raw).unwrap();
        let state = state.restore().unwrap();
        assert_eq!(state.counts.len(), POLL_OPTIONS.len());
        assert_eq!(state.counts["opt1"], 2);
        assert!(state.suggestions.is_empty());
    }
}
