//! Controller Integration Tests
//!
//! Drives full widgets against the in-memory store and a recording renderer.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use chrono::Utc;

    use crate::config::WidgetConfig;
    use crate::error::{StoreError, VoteError, WidgetError};
    use crate::poll::{self, PollState, VoteOutcome};
    use crate::store::{KeyValueStore, MemoryStore};
    use crate::todo::TodoList;
    use crate::widget::{Renderer, Widget};

    /// Keeps every frame it was asked to draw
    #[derive(Clone)]
    struct Recorder<D>(Rc<RefCell<Vec<D>>>);

    impl<D> Recorder<D> {
        fn new() -> Self {
            Self(Rc::new(RefCell::new(Vec::new())))
        }

        fn frames(&self) -> usize {
            self.0.borrow().len()
        }
    }

    impl<D: Clone> Renderer<D> for Recorder<D> {
        fn render(&mut self, doc: &D) {
            self.0.borrow_mut().push(doc.clone());
        }
    }

    /// Store whose writes always fail, like a full quota
    struct FullStore(MemoryStore);

    impl KeyValueStore for FullStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.get(key)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Write { key: key.to_string(), reason: "QuotaExceededError".into() })
        }

        fn remove(&mut self, key: &str) -> Result<(), StoreError> {
            self.0.remove(key)
        }
    }

    #[test]
    fn todo_survives_reload() {
        let config = WidgetConfig::default();
        let mut w = Widget::load(config.todo_key.clone(), MemoryStore::new(), Recorder::<TodoList>::new());
        w.apply(|l| l.add_task("primeira", Utc::now())).unwrap();
        w.apply(|l| l.add_task("segunda", Utc::now())).unwrap();
        let first = w.doc().tasks[0].id;
        w.apply(|l| l.toggle_task(first, Utc::now())).unwrap();

        let store = w.store().clone();
        let reloaded = Widget::load(config.todo_key, store, Recorder::<TodoList>::new());
        assert_eq!(reloaded.doc(), w.doc());
        assert!(reloaded.doc().tasks[0].completed_at.is_some());
    }

    #[test]
    fn rejected_task_neither_persists_nor_renders() {
        let recorder = Recorder::<TodoList>::new();
        let mut w = Widget::load("todoTasks", MemoryStore::new(), recorder.clone());
        let err = w.apply(|l| l.add_task("   ", Utc::now())).unwrap_err();
        assert!(matches!(err, WidgetError::EmptyTask));
        assert!(w.doc().is_empty());
        assert_eq!(w.store().raw("todoTasks"), None);
        assert_eq!(recorder.frames(), 1);
    }

    #[test]
    fn malformed_todo_storage_starts_empty() {
        let store = MemoryStore::new().with_entry("todoTasks", "[{\"id\":");
        let w = Widget::load("todoTasks", store, Recorder::<TodoList>::new());
        assert!(w.doc().is_empty());
    }

    #[test]
    fn write_failure_keeps_ui_usable() {
        let recorder = Recorder::<TodoList>::new();
        let mut w = Widget::load("todoTasks", FullStore(MemoryStore::new()), recorder.clone());
        w.apply(|l| l.add_task("ainda aqui", Utc::now())).unwrap();
        assert_eq!(w.doc().tasks.len(), 1);
        assert_eq!(recorder.frames(), 2);
    }

    #[test]
    fn poll_vote_switch_and_reset() {
        let config = WidgetConfig::default();
        let limits = config.poll;
        let mut w = Widget::load(config.poll_key.clone(), MemoryStore::new(), Recorder::<PollState>::new());

        let first = w.apply(|s| poll::cast_vote(s, Some("opt1"), "", Utc::now(), &limits)).unwrap();
        assert_eq!(first, VoteOutcome::Recorded);
        let second = w.apply(|s| poll::cast_vote(s, Some("opt4"), "testar", Utc::now(), &limits)).unwrap();
        assert_eq!(second, VoteOutcome::Changed);

        let reloaded = Widget::load(config.poll_key.clone(), w.store().clone(), Recorder::<PollState>::new());
        assert_eq!(reloaded.doc().counts["opt1"], 0);
        assert_eq!(reloaded.doc().counts["opt4"], 1);
        assert_eq!(reloaded.doc().suggestions[0].text, "testar");

        w.reset();
        assert_eq!(w.doc(), &PollState::default());
        assert_eq!(w.store().raw(&config.poll_key), None);
    }

    #[test]
    fn invalid_vote_leaves_poll_untouched() {
        let limits = WidgetConfig::default().poll;
        let mut w = Widget::load("poll", MemoryStore::new(), Recorder::<PollState>::new());
        let err = w.apply(|s| poll::cast_vote(s, None, "", Utc::now(), &limits)).unwrap_err();
        assert_eq!(err, VoteError::NoSelection);
        assert_eq!(w.doc(), &PollState::default());
    }

    #[test]
    fn poll_from_other_schema_is_replaced() {
        let store = MemoryStore::new().with_entry("poll", r#"{"version":9,"counts":{"opt1":5},"my_vote":null,"suggestions":[]}"#);
        let w = Widget::load("poll", store, Recorder::<PollState>::new());
        assert_eq!(w.doc(), &PollState::default());
    }
}
