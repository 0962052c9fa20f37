//! Toast payloads shared by the shell and the toast host.

/// Most toasts visible at once; older ones are dropped first.
pub const MAX_TOASTS: usize = 4;

/// How long a toast stays up unless dismissed.
pub const TOAST_TTL_MS: u32 = 4_000;

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational toast.
    Info,
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

impl ToastKind {
    /// CSS modifier class.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message for the toast.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
    /// Epoch milliseconds at which the toast dismisses itself.
    pub expires_at_ms: f64,
}

impl Toast {
    /// Milliseconds left before auto-dismiss, `0` once expired.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn remaining_ms(&self, now_ms: f64) -> u32 {
        let left = self.expires_at_ms - now_ms;
        if left.is_nan() || left <= 0.0 {
            return 0;
        }
        left.min(f64::from(TOAST_TTL_MS)).ceil() as u32
    }
}

/// Append a toast expiring [`TOAST_TTL_MS`] after `now_ms`, keeping at most [`MAX_TOASTS`].
pub fn push_toast(list: &mut Vec<Toast>, id: u64, kind: ToastKind, message: String, now_ms: f64) {
    list.push(Toast {
        id,
        message,
        kind,
        expires_at_ms: now_ms + f64::from(TOAST_TTL_MS),
    });
    if list.len() > MAX_TOASTS {
        let drain = list.len() - MAX_TOASTS;
        list.drain(0..drain);
    }
}

/// Remove a toast by id.
pub fn dismiss_toast(list: &mut Vec<Toast>, id: u64) {
    list.retain(|toast| toast.id != id);
}
