//! Diagnostic tracing of stemming decisions.
//!
//! The engine reports each rule match and each accept/reject decision to a
//! [`StemTracer`]. Tracers only observe: nothing they do can change the stem
//! returned to the caller.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use stemmer_hr::stemmer::engine::StemEngine;
//! use stemmer_hr::stemmer::rule::RuleTable;
//! use stemmer_hr::stemmer::trace::{CollectingTracer, TraceEvent};
//!
//! let tracer = Arc::new(CollectingTracer::new());
//! let rules = Arc::new(RuleTable::parse(".+m u|a\n"));
//! let engine = StemEngine::with_tracer(rules, tracer.clone());
//!
//! assert_eq!(engine.stem("šumu"), "šum");
//! assert!(matches!(
//!     tracer.events().last(),
//!     Some(TraceEvent::CandidateAccepted { .. })
//! ));
//! ```

use std::fmt;

use log::info;
use parking_lot::Mutex;

/// Why a matched candidate stem was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The candidate has no vowel and no syllabic "r".
    NoVowel,
    /// The candidate is a single character or empty.
    TooShort,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::NoVowel => write!(f, "no vowel"),
            RejectReason::TooShort => write!(f, "too short"),
        }
    }
}

/// A single diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    RuleMatched {
        token: String,
        rule: usize,
        pattern: String,
        candidate: String,
    },
    CandidateAccepted {
        token: String,
        rule: usize,
        stem: String,
    },
    CandidateRejected {
        token: String,
        rule: usize,
        candidate: String,
        reason: RejectReason,
    },
    NoRuleAccepted {
        token: String,
    },
    StopwordSkipped {
        token: String,
    },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::RuleMatched {
                token,
                rule,
                pattern,
                candidate,
            } => write!(f, "\"{token}\" matches rule #{rule} {pattern} -> \"{candidate}\""),
            TraceEvent::CandidateAccepted { token, rule, stem } => {
                write!(f, "\"{token}\": stem \"{stem}\" from rule #{rule} accepted")
            }
            TraceEvent::CandidateRejected {
                token,
                rule,
                candidate,
                reason,
            } => write!(
                f,
                "\"{token}\": stem \"{candidate}\" from rule #{rule} rejected ({reason})"
            ),
            TraceEvent::NoRuleAccepted { token } => {
                write!(f, "\"{token}\": no rule accepted, keeping token")
            }
            TraceEvent::StopwordSkipped { token } => {
                write!(f, "\"{token}\" is a stopword, skipping")
            }
        }
    }
}

/// Sink for stemming diagnostics.
pub trait StemTracer: Send + Sync {
    /// Receive one event.
    fn record(&self, event: TraceEvent);

    /// Whether events should be built at all. The engine skips event
    /// construction entirely when this returns `false`.
    fn enabled(&self) -> bool {
        true
    }
}

/// Tracer that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracer;

impl StemTracer for NoopTracer {
    fn record(&self, _event: TraceEvent) {}

    fn enabled(&self) -> bool {
        false
    }
}

/// Tracer that forwards every event to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTracer;

impl StemTracer for LogTracer {
    fn record(&self, event: TraceEvent) {
        info!("{event}");
    }
}

/// Tracer that buffers events in memory.
#[derive(Debug, Default)]
pub struct CollectingTracer {
    events: Mutex<Vec<TraceEvent>>,
}

impl CollectingTracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.lock().clone()
    }

    /// Remove and return all recorded events.
    pub fn take(&self) -> Vec<TraceEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl StemTracer for CollectingTracer {
    fn record(&self, event: TraceEvent) {
        self.events.lock().push(event);
    }
}
