//! Construction trace: what the hull builder decided, in order.
//!
//! Purpose
//! - Let an observer (renderer, logger, test) rebuild every intermediate chain
//!   state without re-running the algorithm.
//!
//! Contract
//! - Events are emitted synchronously, in algorithm order, from the calling
//!   thread. Sinks may drop events; hull correctness never depends on them.
//! - Payloads:
//!   - `Checking`: subject is the point under test, no related ids.
//!   - `Classified`: subject is `r`, related is `[p, q, r]`.
//!   - `Removing`: subject is the popped point, related is `[point under test]`.
//!   - `Adding`: subject is the pushed point, related is its new predecessor (if any).
//!
//! Naming
//! - `Chain::Lower` is the left-to-right sweep, `Chain::Upper` the right-to-left
//!   one (y axis up). On a y-down canvas the two look swapped.

mod replay;
mod sink;

pub use replay::{replay, Replay, ReplayError, Snapshot};
pub use sink::{ChannelSink, EventSink, FnSink, NoTrace};

use std::fmt;

use crate::orientation::Orientation;

/// Which sweep an event belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Chain {
    Lower,
    Upper,
}

impl Chain {
    pub fn as_str(self) -> &'static str {
        match self {
            Chain::Lower => "lower",
            Chain::Upper => "upper",
        }
    }
}

/// Event tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Checking,
    Adding,
    Removing,
    Classified,
}

/// One step of the builder's decision process.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceEvent {
    pub kind: EventKind,
    pub chain: Chain,
    pub subject: u32,
    pub related: Vec<u32>,
    pub classification: Option<Orientation>,
}

impl TraceEvent {
    #[inline]
    pub fn checking(chain: Chain, subject: u32) -> Self {
        Self {
            kind: EventKind::Checking,
            chain,
            subject,
            related: Vec::new(),
            classification: None,
        }
    }

    #[inline]
    pub fn adding(chain: Chain, subject: u32, predecessor: Option<u32>) -> Self {
        Self {
            kind: EventKind::Adding,
            chain,
            subject,
            related: predecessor.into_iter().collect(),
            classification: None,
        }
    }

    #[inline]
    pub fn removing(chain: Chain, subject: u32, cause: u32) -> Self {
        Self {
            kind: EventKind::Removing,
            chain,
            subject,
            related: vec![cause],
            classification: None,
        }
    }

    /// `(p, q, r)` ids; `r` is the point under test.
    #[inline]
    pub fn classified(chain: Chain, pqr: [u32; 3], orientation: Orientation) -> Self {
        Self {
            kind: EventKind::Classified,
            chain,
            subject: pqr[2],
            related: pqr.to_vec(),
            classification: Some(orientation),
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chain = self.chain.as_str();
        match self.kind {
            EventKind::Checking => write!(f, "CHECKING: point {} in {chain} chain", self.subject),
            EventKind::Adding => write!(f, "ADDING: point {} to {chain} chain", self.subject),
            EventKind::Removing => {
                write!(f, "REMOVING: point {} from {chain} chain", self.subject)
            }
            EventKind::Classified => {
                let sense = self.classification.map_or("unclassified", Orientation::as_str);
                match self.related.as_slice() {
                    [p, q, _] => write!(
                        f,
                        "FOUND: point {} is {sense} w.r.t. points {p} and {q}",
                        self.subject
                    ),
                    _ => write!(f, "FOUND: point {} is {sense}", self.subject),
                }
            }
        }
    }
}
