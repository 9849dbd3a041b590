//! Browser DOM layer for pagekit page interaction glue.
//!
//! This crate wires the pure logic from `pagekit-core` to the document:
//! share menus, link copying, like toggles, image upload previews, and
//! password visibility. It assumes a `wasm32-unknown-unknown` target
//! environment.
//!
//! # Architecture
//!
//! - `dispatch`: the single delegated click listener and action execution
//! - `clipboard`: two-tier copy (async clipboard API, then textarea fallback)
//! - `preview`: file-input change handling, data-URL thumbnails, removal
//! - `password`: password input visibility toggles
//! - `notify`: user-facing notification seam (alerts by default)
//!
//! # Re-exports
//!
//! This crate re-exports `pagekit-core` for convenience, so consumers only
//! need to depend on `pagekit-browser`.
//!
//! # Usage
//!
//! ```ignore
//! pagekit_browser::init();
//! let glue = pagekit_browser::PageGlue::mount(Default::default())?;
//! // Keep `glue` alive for the lifetime of the page; dropping it unwires
//! // every listener it installed.
//! ```

// Re-export core crate
pub use pagekit_core;
pub use pagekit_core::*;

pub mod clipboard;
pub mod dispatch;
pub mod notify;
pub mod password;
pub mod preview;

use std::rc::Rc;

use gloo_events::EventListener;
use smol_str::SmolStr;
use wasm_bindgen::JsValue;

pub use dispatch::{Dispatcher, DomProbe, SessionProvider, body_session};
pub use notify::{AlertNotifier, Notify};
pub use preview::PreviewManager;

/// Initialize panic hook for better error messages in console.
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Mount configuration. `Default` matches the page markup conventions.
pub struct MountOptions {
    /// Where gated actions redirect when the user is logged out.
    pub login_path: SmolStr,
    /// Element id of the image file input.
    pub image_input_id: SmolStr,
    /// Element id of the preview container.
    pub preview_container_id: SmolStr,
    /// Login state provider. Defaults to reading the `data-logged-in` flag
    /// from `<body>` on each dispatch.
    pub session: Option<SessionProvider>,
    /// User notification sink. Defaults to browser alerts.
    pub notifier: Option<Rc<dyn Notify>>,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            login_path: SmolStr::new_static("/login"),
            image_input_id: SmolStr::new_static("images"),
            preview_container_id: SmolStr::new_static("imagePreview"),
            session: None,
            notifier: None,
        }
    }
}

/// Handle owning every listener this crate installs.
///
/// One delegated click listener on the document covers all current and
/// future share/copy/like controls. The preview manager and password
/// toggles are wired only when their elements exist; absence just leaves
/// that feature unwired.
pub struct PageGlue {
    _click: EventListener,
    _previews: Option<PreviewManager>,
    _password: Vec<EventListener>,
}

impl PageGlue {
    /// Install the page glue on the current document.
    pub fn mount(options: MountOptions) -> Result<Self, JsValue> {
        let document = gloo_utils::document();

        let session = options.session.unwrap_or_else(|| Rc::new(body_session));
        let notifier: Rc<dyn Notify> = options
            .notifier
            .unwrap_or_else(|| Rc::new(AlertNotifier));

        let dispatcher = Rc::new(Dispatcher::new(
            session,
            notifier.clone(),
            options.login_path,
        ));

        let click = {
            let doc = document.clone();
            let dispatcher = dispatcher.clone();
            EventListener::new(&document, "click", move |event| {
                dispatcher.handle_click(&doc, event);
            })
        };

        let previews = PreviewManager::wire(
            &document,
            &options.image_input_id,
            &options.preview_container_id,
        );
        if previews.is_none() {
            tracing::debug!("image input or preview container absent, previews not wired");
        }

        let password = password::wire(&document);

        Ok(Self {
            _click: click,
            _previews: previews,
            _password: password,
        })
    }
}
