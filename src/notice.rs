//! User-Visible Notices
//!
//! Failures the user must see are raised through a `Notifier`.

/// Receives blocking failure notices
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Shows notices with `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        let shown = web_sys::window().map(|window| window.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            log::warn!(target: "tasks::notice", "could not show alert: {}", message);
        }
    }
}

#[cfg(test)]
pub use recording::RecordingNotifier;
