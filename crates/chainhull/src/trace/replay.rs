//! Rebuild chain states from an event log.
//!
//! This is what a renderer animates: one `Snapshot` per `Adding`/`Removing`
//! event, replayed at whatever pace it likes.

use super::{Chain, EventKind, TraceEvent};

/// Ids on both chain stacks after one step (bottom first).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub lower: Vec<u32>,
    pub upper: Vec<u32>,
}

impl Snapshot {
    fn chain_mut(&mut self, chain: Chain) -> &mut Vec<u32> {
        match chain {
            Chain::Lower => &mut self.lower,
            Chain::Upper => &mut self.upper,
        }
    }
}

/// Result of replaying a complete log.
#[derive(Clone, Debug, Default)]
pub struct Replay {
    /// State after each stack-changing event, in order.
    pub steps: Vec<Snapshot>,
    /// Final (untrimmed) stacks.
    pub last: Snapshot,
    pub adds: usize,
    pub removes: usize,
}

/// Log inconsistent with a stack discipline.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ReplayError {
    #[error("event {index}: removing point {found} from the {chain:?} chain, but its top is {top:?}")]
    NotOnTop {
        index: usize,
        chain: Chain,
        found: u32,
        top: Option<u32>,
    },
}

/// Replay `events` against two empty stacks.
///
/// `Checking` and `Classified` events carry no state change and are skipped.
pub fn replay<'a, I>(events: I) -> Result<Replay, ReplayError>
where
    I: IntoIterator<Item = &'a TraceEvent>,
{
    let mut out = Replay::default();
    for (index, ev) in events.into_iter().enumerate() {
        let stack = out.last.chain_mut(ev.chain);
        match ev.kind {
            EventKind::Adding => {
                stack.push(ev.subject);
                out.adds += 1;
            }
            EventKind::Removing => {
                let top = stack.last().copied();
                if top != Some(ev.subject) {
                    return Err(ReplayError::NotOnTop {
                        index,
                        chain: ev.chain,
                        found: ev.subject,
                        top,
                    });
                }
                stack.pop();
                out.removes += 1;
            }
            EventKind::Checking | EventKind::Classified => continue,
        }
        out.steps.push(out.last.clone());
    }
    Ok(out)
}
