//! Test utilities and shared test helpers for Folio.
//!
//! This module provides common testing utilities and fixtures used across
//! all crates in the workspace for unit and integration testing.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

use crate::runtime::{LocalTask, Scheduler};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

#[derive(Default)]
struct ManualState {
    queue: VecDeque<LocalTask>,
    sleeps: Vec<Duration>,
}

/// Deterministic scheduler that queues spawned tasks until the test drives them.
///
/// Timers resolve immediately; the requested durations are recorded.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ManualState>>,
}

impl ManualScheduler {
    /// Creates an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued tasks.
    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Durations passed to [`Scheduler::sleep`], in call order.
    pub fn requested_sleeps(&self) -> Vec<Duration> {
        self.state.borrow().sleeps.clone()
    }

    /// Runs queued tasks oldest first, including tasks they spawn.
    pub async fn run_until_idle(&self) {
        loop {
            let next = self.state.borrow_mut().queue.pop_front();
            match next {
                Some(task) => task.await,
                None => break,
            }
        }
    }

    /// Runs queued tasks newest first, simulating completions arriving out of order.
    pub async fn run_newest_first(&self) {
        loop {
            let next = self.state.borrow_mut().queue.pop_back();
            match next {
                Some(task) => task.await,
                None => break,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn spawn(&self, task: LocalTask) {
        self.state.borrow_mut().queue.push_back(task);
    }

    fn sleep(&self, duration: Duration) -> LocalTask {
        self.state.borrow_mut().sleeps.push(duration);
        Box::pin(async {})
    }
}

/// Content payload fixtures.
pub mod content_fixtures {
    /// `about.json` with two paragraphs per locale.
    pub fn about_json() -> &'static str {
        r#"{"paragraphs":{"en":["A","B"],"es":["C","D"]}}"#
    }

    /// A complete project record.
    pub fn project_json() -> &'static str {
        r#"{
  "title": {"en": "Echoes", "es": "Ecos"},
  "genre": {"en": "Interactive fiction", "es": "Ficción interactiva"},
  "description": {"en": "A story about memory.", "es": "Una historia sobre la memoria."},
  "link": {"en": "https://example.com/echoes", "es": "https://example.com/ecos"}
}"#
    }

    /// A project record with only an English link.
    pub fn project_json_english_link_only() -> &'static str {
        r#"{
  "title": {"en": "Drift", "es": "Deriva"},
  "genre": {"en": "Puzzle", "es": "Rompecabezas"},
  "description": {"en": "Float along.", "es": "Déjate llevar."},
  "link": {"en": "x"}
}"#
    }
}
