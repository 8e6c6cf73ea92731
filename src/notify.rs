//! User-facing acknowledgement channel.
//!
//! Every submission produces a blocking notice of what is about to be sent
//! and a second one for what happened to it.  Screens talk to the [`Notify`]
//! trait so tests can capture the messages instead of blocking on a modal.

pub trait Notify {
    fn notify(&self, message: &str);
}

/// Production notifier: `window.alert`.  Falls back to the console when no
/// window is available (headless test runners).
pub struct AlertNotify;

impl Notify for AlertNotify {
    fn notify(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if window.alert_with_message(message).is_err() {
                    crate::console_warn!("alert unavailable: {}", message);
                }
            }
            None => crate::console_log!("{}", message),
        }
    }
}
