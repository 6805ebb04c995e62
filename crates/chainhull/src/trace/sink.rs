//! Event sinks.

use std::sync::mpsc::SyncSender;

use super::TraceEvent;

/// Receiver of trace events, called in emission order.
///
/// Implementations must not block indefinitely. `enabled() == false` lets the
/// builder skip constructing events at all.
pub trait EventSink {
    fn emit(&mut self, event: TraceEvent);

    #[inline]
    fn enabled(&self) -> bool {
        true
    }
}

/// Tracing disabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl EventSink for NoTrace {
    #[inline]
    fn emit(&mut self, _event: TraceEvent) {}

    #[inline]
    fn enabled(&self) -> bool {
        false
    }
}

impl EventSink for Vec<TraceEvent> {
    #[inline]
    fn emit(&mut self, event: TraceEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    #[inline]
    fn emit(&mut self, event: TraceEvent) {
        (**self).emit(event);
    }

    #[inline]
    fn enabled(&self) -> bool {
        (**self).enabled()
    }
}

/// Adapter for closures: `FnSink(|e| println!("{e}"))`.
pub struct FnSink<F>(pub F);

impl<F: FnMut(TraceEvent)> EventSink for FnSink<F> {
    #[inline]
    fn emit(&mut self, event: TraceEvent) {
        (self.0)(event);
    }
}

/// Forwards events over a bounded channel without ever blocking.
///
/// A full or disconnected channel drops the event and bumps `dropped()`.
#[derive(Debug)]
pub struct ChannelSink {
    tx: SyncSender<TraceEvent>,
    dropped: usize,
}

impl ChannelSink {
    pub fn new(tx: SyncSender<TraceEvent>) -> Self {
        Self { tx, dropped: 0 }
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl EventSink for ChannelSink {
    fn emit(&mut self, event: TraceEvent) {
        if self.tx.try_send(event).is_err() {
            self.dropped += 1;
        }
    }
}
