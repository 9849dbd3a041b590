//! Browser clipboard implementation.
//!
//! Drives the core's [`CopyStep`] sequence against the two browser copy
//! mechanisms: the async Clipboard API when the navigator exposes it, and
//! a synthesized off-screen textarea with the legacy copy command when it
//! doesn't (or when the API rejects, e.g. permission denied).
//!
//! Outcome reporting is asymmetric by design: invalid input is logged and
//! silently dropped, a successful copy on either tier notifies success, and
//! only a terminal both-tiers failure notifies failure.

use std::rc::Rc;

use pagekit_core::{CopyOutcome, CopyStep, CopyTier, validate_text};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlTextAreaElement;

use crate::notify::Notify;

/// User-facing message on a successful copy.
pub const COPIED_MESSAGE: &str = "Link copied to clipboard!";
/// User-facing message when both copy tiers fail.
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy link";

/// Copy `text` to the clipboard, notifying the user of the outcome.
///
/// Empty text is logged and dropped without any attempt or notification.
/// Otherwise the attempt sequence runs on a spawned task (the preferred
/// tier is async) and ends in exactly one notification.
pub fn copy_text(text: &str, notifier: Rc<dyn Notify>) {
    let text = match validate_text(Some(text)) {
        Ok(t) => t.to_string(),
        Err(e) => {
            tracing::error!("invalid text for clipboard: {e}");
            return;
        }
    };

    wasm_bindgen_futures::spawn_local(async move {
        let outcome = run_copy(&text).await;
        match outcome {
            CopyOutcome::Copied(tier) => {
                tracing::debug!("copied {} bytes via {:?}", text.len(), tier);
                notifier.notify(COPIED_MESSAGE);
            }
            CopyOutcome::Failed => notifier.notify(COPY_FAILED_MESSAGE),
        }
    });
}

/// Drive the attempt sequence to its terminal outcome.
async fn run_copy(text: &str) -> CopyOutcome {
    let mut step = CopyStep::start(clipboard_api_available());
    loop {
        match step {
            CopyStep::Attempt(CopyTier::Preferred) => {
                let result = write_preferred(text).await;
                if let Err(e) = &result {
                    tracing::error!("clipboard API write failed: {:?}", e);
                }
                step = step.advance(result.is_ok());
            }
            CopyStep::Attempt(CopyTier::Fallback) => {
                let result = write_fallback(text);
                if let Err(e) = &result {
                    tracing::error!("fallback copy failed: {:?}", e);
                }
                step = step.advance(result.is_ok());
            }
            CopyStep::Done(outcome) => return outcome,
        }
    }
}

/// Whether the navigator exposes the async Clipboard API.
fn clipboard_api_available() -> bool {
    let navigator = gloo_utils::window().navigator();
    js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("clipboard"))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false)
}

/// Preferred tier: `navigator.clipboard.writeText`.
async fn write_preferred(text: &str) -> Result<(), JsValue> {
    let clipboard = gloo_utils::window().navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}

/// Fallback tier: select-and-copy through a synthesized textarea.
///
/// The textarea is fixed-position and fully transparent so it never flashes
/// on screen, and it is removed on success and on every failure path.
fn write_fallback(text: &str) -> Result<(), JsValue> {
    let document = gloo_utils::document();

    let textarea: HtmlTextAreaElement = document.create_element("textarea")?.unchecked_into();
    textarea.set_value(text);
    textarea.style().set_property("position", "fixed")?;
    textarea.style().set_property("opacity", "0")?;

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;
    body.append_child(&textarea)?;

    textarea.select();
    let result = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .ok_or_else(|| JsValue::from_str("document is not an HtmlDocument"))
        .and_then(|doc| doc.exec_command("copy"));

    // Clean up before inspecting the result so no path leaks the element.
    textarea.remove();

    match result {
        Ok(true) => Ok(()),
        Ok(false) => Err(JsValue::from_str("copy command refused")),
        Err(e) => Err(e),
    }
}
