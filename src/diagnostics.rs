//! Non-fatal notices raised while parsing specs and updating a range.
//!
//! Nothing here ever fails: a notice is handed to a [`DiagnosticSink`] and
//! control flow carries on. Where the notices end up is the sink's business.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// An added value was already a member.
    AlreadyInRange(i64),
    /// A deleted value was not a member.
    NotInRange(i64),
    /// `start..end` with `start > end`; the bounds were swapped.
    ReversedBounds { start: i64, end: i64 },
    /// `n..n`; treated as the single value `n`.
    PointlessRange(i64),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::AlreadyInRange(n) => write!(f, "{} already in range", n),
            Notice::NotInRange(n) => write!(f, "{} not in range", n),
            Notice::ReversedBounds { start, end } => write!(
                f,
                "reversed bounds {}..{}, reading it as {}..{}",
                start, end, end, start
            ),
            Notice::PointlessRange(n) => {
                write!(f, "pointless singleton range {}..{}, reading it as {}", n, n, n)
            }
        }
    }
}

pub trait DiagnosticSink {
    fn notice(&mut self, notice: &Notice);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(&Notice),
{
    fn notice(&mut self, notice: &Notice) {
        self(notice)
    }
}

/// Forwards notices to the `log` facade as warnings. Without an installed
/// logger they go nowhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn notice(&mut self, notice: &Notice) {
        log::warn!(target: "rangespec", "{}", notice);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl DiagnosticSink for Discard {
    fn notice(&mut self, _notice: &Notice) {}
}

/// Keeps every notice it receives. Clones share the same buffer, so one
/// clone can be handed to a `Range` while another is inspected.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Recorder::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    /// Returns the recorded notices and empties the buffer.
    pub fn take(&self) -> Vec<Notice> {
        self.notices.borrow_mut().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.borrow().is_empty()
    }
}

impl DiagnosticSink for Recorder {
    fn notice(&mut self, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}
