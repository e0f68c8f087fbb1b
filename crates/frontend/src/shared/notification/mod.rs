//! Transient status messages ("toasts").
//!
//! At most one notice is displayed at a time: showing a new one replaces
//! whatever is on screen. Every notice gets a sequence number so that a
//! timer armed for an old notice cannot dismiss the one that replaced it.

mod toast;

pub use toast::{NoticeHost, NoticeHostProps, NoticeView, Notification};

/// Auto-dismiss delay used when the caller does not pick one
pub const DEFAULT_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            NoticeKind::Success => "toast--success",
            NoticeKind::Error => "toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub seq: u64,
    pub message: String,
    pub kind: NoticeKind,
    pub duration_ms: u32,
    pub persistent: bool,
}

/// Holds the notice currently on screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeSlot {
    current: Option<Notice>,
    next_seq: u64,
}

impl NoticeSlot {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.show(message, NoticeKind::Success, DEFAULT_DURATION_MS, false)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.show(message, NoticeKind::Error, DEFAULT_DURATION_MS, false)
    }

    /// A notice that stays until the user closes it
    pub fn persistent(&mut self, message: impl Into<String>, kind: NoticeKind) -> u64 {
        self.show(message, kind, DEFAULT_DURATION_MS, true)
    }

    pub fn show(
        &mut self,
        message: impl Into<String>,
        kind: NoticeKind,
        duration_ms: u32,
        persistent: bool,
    ) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.current = Some(Notice {
            seq,
            message: message.into(),
            kind,
            duration_ms,
            persistent,
        });
        seq
    }

    /// Closes the notice `seq` if it is still the one displayed.
    /// Returns whether anything was closed.
    pub fn dismiss(&mut self, seq: u64) -> bool {
        match &self.current {
            Some(notice) if notice.seq == seq => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

/// Close-once bookkeeping of a mounted toast. `H` is the auto-dismiss
/// timer handle.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastLifecycle<H> {
    closed: bool,
    timer: Option<H>,
}

impl<H> Default for ToastLifecycle<H> {
    fn default() -> Self {
        Self {
            closed: false,
            timer: None,
        }
    }
}

impl<H> ToastLifecycle<H> {
    /// Keeps the timer handle. A toast already closed hands it back to be
    /// cleared.
    pub fn arm(&mut self, handle: H) -> Option<H> {
        if self.closed {
            return Some(handle);
        }
        self.timer = Some(handle);
        None
    }

    /// Marks the toast closed. Only the first call returns `Some`, with the
    /// pending timer (if any) to clear.
    pub fn close(&mut self) -> Option<Option<H>> {
        if self.closed {
            return None;
        }
        self.closed = true;
        Some(self.timer.take())
    }

    /// Timer still pending at unmount
    pub fn teardown(&mut self) -> Option<H> {
        self.timer.take()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_closes_once() {
        let mut toast = ToastLifecycle::default();
        assert_eq!(toast.arm(7), None);

        assert_eq!(toast.close(), Some(Some(7)));
        assert!(toast.is_closed());
        assert_eq!(toast.close(), None);
    }

    #[test]
    fn test_closed_toast_has_no_timer_at_unmount() {
        let mut toast = ToastLifecycle::default();
        toast.arm(1);
        toast.close();
        assert_eq!(toast.teardown(), None);
    }

    #[test]
    fn test_unmount_clears_pending_timer() {
        let mut toast = ToastLifecycle::default();
        toast.arm(3);
        assert_eq!(toast.teardown(), Some(3));
        assert_eq!(toast.teardown(), None);
        assert!(!toast.is_closed());
    }

    #[test]
    fn test_persistent_toast_closes_without_timer() {
        let mut toast: ToastLifecycle<u32> = ToastLifecycle::default();
        assert_eq!(toast.close(), Some(None));
        assert_eq!(toast.arm(9), Some(9));
    }

    #[test]
    fn test_new_notice_replaces_current() {
        let mut slot = NoticeSlot::default();
        slot.success("Métrica creada");
        slot.error("Error al cargar métricas");

        let current = slot.current().unwrap();
        assert_eq!(current.message, "Error al cargar métricas");
        assert_eq!(current.kind, NoticeKind::Error);
    }

    #[test]
    fn test_stale_dismiss_keeps_newer_notice() {
        let mut slot = NoticeSlot::default();
        let first = slot.success("uno");
        let second = slot.success("dos");

        assert!(!slot.dismiss(first));
        assert_eq!(slot.current().map(|n| n.seq), Some(second));
        assert!(slot.dismiss(second));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_dismiss_fires_once() {
        let mut slot = NoticeSlot::default();
        let seq = slot.success("ok");
        assert!(slot.dismiss(seq));
        assert!(!slot.dismiss(seq));
    }

    #[test]
    fn test_persistent_notice_flag() {
        let mut slot = NoticeSlot::default();
        slot.persistent("Contraseña temporal generada: abc", NoticeKind::Success);
        let notice = slot.current().unwrap();
        assert!(notice.persistent);
        assert_eq!(notice.duration_ms, DEFAULT_DURATION_MS);
    }
}
