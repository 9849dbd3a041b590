//! User-facing notification seam.
//!
//! The dispatcher and clipboard service report outcomes through [`Notify`]
//! instead of calling `alert` directly, so tests can observe notifications
//! without a blocking dialog.

/// Sink for user-facing messages (copy success/failure, login prompts).
pub trait Notify {
    fn notify(&self, message: &str);
}

/// Browser alert dialog notifier.
pub struct AlertNotifier;

impl Notify for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Err(e) = gloo_utils::window().alert_with_message(message) {
            tracing::warn!("alert failed: {:?}", e);
        }
    }
}
