//! Single-slot user notifications.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// How long a notification stays visible by default.
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(5);

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// A confirmed operation.
    Success,
    /// A failed or degraded operation.
    Error,
}

/// A user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Message text.
    pub message: String,
    /// Severity.
    pub kind: NoticeKind,
}

impl Notice {
    /// Creates a success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    /// Creates an error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

#[derive(Debug)]
struct Slot {
    notice: Notice,
    seq: u64,
    expires_at: Instant,
}

/// Single-slot, last-writer-wins notification holder.
///
/// Showing a notice replaces the slot and stamps it with a fresh sequence
/// number and expiry. The sequence number is what keeps a superseded
/// notice's pending auto-clear harmless: [`Notifier::clear_if`] with a
/// stale sequence is a no-op, so at most one auto-clear ever takes effect
/// and the newest writer always wins. [`Notifier::current`] treats an
/// expired notice as already cleared, which makes the 5-second lifetime
/// hold even for callers that never schedule the callback.
#[derive(Debug)]
pub struct Notifier {
    slot: Mutex<Option<Slot>>,
    seq: AtomicU64,
    ttl: Duration,
}

impl Notifier {
    /// Creates a notifier with the default lifetime.
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_NOTICE_TTL)
    }

    /// Creates a notifier whose notices live for `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            slot: Mutex::new(None),
            seq: AtomicU64::new(0),
            ttl,
        }
    }

    /// Shows a notice, replacing whatever is on screen.
    ///
    /// Returns the sequence number to hand back to [`Notifier::clear_if`]
    /// when this notice's auto-clear fires.
    pub fn show(&self, notice: Notice) -> u64 {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        *self.slot.lock() = Some(Slot {
            notice,
            seq,
            expires_at: Instant::now() + self.ttl,
        });
        seq
    }

    /// The notice currently on screen, if any.
    ///
    /// An expired notice reads as already cleared (and the slot is freed
    /// on the way out).
    pub fn current(&self) -> Option<Notice> {
        let mut slot = self.slot.lock();
        match slot.as_ref() {
            Some(s) if s.expires_at <= Instant::now() => {
                *slot = None;
                None
            }
            Some(s) => Some(s.notice.clone()),
            None => None,
        }
    }

    /// Auto-clear callback: clears the slot only while `seq` is still the
    /// one on screen.
    pub fn clear_if(&self, seq: u64) {
        let mut slot = self.slot.lock();
        if slot.as_ref().is_some_and(|s| s.seq == seq) {
            *slot = None;
        }
    }

    /// Clears the slot unconditionally.
    pub fn clear(&self) {
        *self.slot.lock() = None;
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
