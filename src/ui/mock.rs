//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use dotmgr::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Checking for missing config symlinks...");
//! ui.warning("tmux.conf is a directory");
//!
//! assert!(ui.has_message("missing config symlinks"));
//! assert!(ui.has_warning("tmux.conf"));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    usage: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<Rc<RefCell<SpinnerRecord>>>,
}

/// What happened to one spinner.
#[derive(Debug, Default, Clone)]
pub struct SpinnerRecord {
    /// Initial and updated messages, in order.
    pub messages: Vec<String>,
    /// Final message, once finished.
    pub finish_message: Option<String>,
    /// Final status, once finished.
    pub status: Option<SpinnerStatus>,
}

/// Status of a mock spinner when finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    Success,
    Error,
    Skipped,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Usage lines, recorded in every output mode.
    pub fn usage(&self) -> &[String] {
        &self.usage
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Snapshot of every spinner started so far.
    pub fn spinners(&self) -> Vec<SpinnerRecord> {
        self.spinners.iter().map(|s| s.borrow().clone()).collect()
    }

    /// Whether any plain message contains `needle`.
    pub fn has_message(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }

    /// Whether any warning contains `needle`.
    pub fn has_warning(&self, needle: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn show_usage(&mut self, lines: &[String]) {
        self.usage.extend_from_slice(lines);
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        let record = Rc::new(RefCell::new(SpinnerRecord {
            messages: vec![message.to_string()],
            ..Default::default()
        }));
        self.spinners.push(Rc::clone(&record));
        Box::new(MockSpinner { record })
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }
}

/// Spinner that writes into a [`SpinnerRecord`] shared with its [`MockUI`].
#[derive(Debug, Default)]
pub struct MockSpinner {
    record: Rc<RefCell<SpinnerRecord>>,
}

impl MockSpinner {
    /// Create a standalone mock spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all messages set during spinning.
    pub fn messages(&self) -> Vec<String> {
        self.record.borrow().messages.clone()
    }

    /// Get the final status.
    pub fn status(&self) -> Option<SpinnerStatus> {
        self.record.borrow().status
    }

    fn finish(&mut self, msg: &str, status: SpinnerStatus) {
        let mut record = self.record.borrow_mut();
        record.finish_message = Some(msg.to_string());
        record.status = Some(status);
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.record.borrow_mut().messages.push(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.finish(msg, SpinnerStatus::Success);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish(msg, SpinnerStatus::Error);
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.finish(msg, SpinnerStatus::Skipped);
    }
}
