//! Delegated click dispatch.
//!
//! A single listener on the document classifies every click through the
//! core's `AncestorProbe` seam and executes the resulting action. Login
//! state comes from an injected provider, never from ambient reads inside
//! the logic, so gating stays testable without a real document.
//!
//! All DOM failures here degrade to logged no-ops; the worst case is a
//! single inert control.

use std::rc::Rc;

use pagekit_core::{
    AncestorProbe, Gated, PageAction, Session, classify, gate, menu_id, resolve_dismiss,
    resolve_toggle, toggle_like,
};
use smol_str::SmolStr;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

use crate::clipboard;
use crate::notify::Notify;

/// `AncestorProbe` over a live click target, backed by `Element::closest`.
pub struct DomProbe<'a> {
    target: Option<&'a Element>,
}

impl<'a> DomProbe<'a> {
    /// Probe the ancestry of `target`. `None` (a non-element event target)
    /// matches nothing and classifies as an outside click.
    pub fn new(target: Option<&'a Element>) -> Self {
        Self { target }
    }

    fn closest(&self, selector: &str) -> Option<Element> {
        self.target?.closest(selector).ok().flatten()
    }
}

impl AncestorProbe for DomProbe<'_> {
    fn has_ancestor(&self, selector: &str) -> bool {
        self.closest(selector).is_some()
    }

    fn ancestor_attr(&self, selector: &str, attr: &str) -> Option<String> {
        self.closest(selector)?.get_attribute(attr)
    }
}

/// Produces the current login state at dispatch time.
pub type SessionProvider = Rc<dyn Fn() -> Session>;

/// Default session provider: the page-level `data-logged-in` flag on `<body>`.
pub fn body_session() -> Session {
    let logged_in = gloo_utils::document()
        .body()
        .and_then(|body| body.get_attribute("data-logged-in"))
        .is_some_and(|v| !v.is_empty());
    Session { logged_in }
}

/// Classifies and executes delegated clicks.
pub struct Dispatcher {
    session: SessionProvider,
    notifier: Rc<dyn Notify>,
    login_path: SmolStr,
}

impl Dispatcher {
    pub fn new(session: SessionProvider, notifier: Rc<dyn Notify>, login_path: SmolStr) -> Self {
        Self {
            session,
            notifier,
            login_path,
        }
    }

    /// Handle one delegated click event.
    pub fn handle_click(&self, document: &Document, event: &Event) {
        let target = event.target().and_then(|t| t.dyn_into::<Element>().ok());
        let action = classify(&DomProbe::new(target.as_ref()));

        match gate(action, (self.session)()) {
            Gated::LoginRequired { message } => {
                self.notifier.notify(message);
                redirect(&self.login_path);
            }
            Gated::Allowed(action) => self.run(document, target.as_ref(), action),
        }
    }

    fn run(&self, document: &Document, target: Option<&Element>, action: PageAction) {
        match action {
            PageAction::Share { post_id, .. } => apply_share_toggle(document, &post_id),
            PageAction::CopyLink { url } => clipboard::copy_text(&url, self.notifier.clone()),
            PageAction::LikeToggle => apply_like_toggle(target),
            PageAction::Outside => dismiss_share_ui(document),
            PageAction::Inert => {}
            PageAction::Skipped(reason) => {
                tracing::warn!("click skipped: {reason}");
            }
        }
    }
}

/// Navigate to the login entry point.
fn redirect(path: &str) {
    if let Err(e) = gloo_utils::window().location().set_href(path) {
        tracing::warn!("login redirect failed: {:?}", e);
    }
}

/// Snapshot all share menu elements with their ids.
fn share_menus(document: &Document) -> Vec<(SmolStr, Element)> {
    let Ok(list) = document.query_selector_all(pagekit_core::action::SHARE_MENU) else {
        return Vec::new();
    };

    let mut menus = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        let Some(node) = list.item(i) else { continue };
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };
        menus.push((SmolStr::from(element.id()), element));
    }
    menus
}

fn is_visible(element: &Element) -> bool {
    element
        .dyn_ref::<HtmlElement>()
        .and_then(|el| el.style().get_property_value("display").ok())
        .is_some_and(|display| display == "block")
}

fn set_display(element: &Element, value: &str) {
    let Some(el) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    if let Err(e) = el.style().set_property("display", value) {
        tracing::warn!("failed to set display on #{}: {:?}", element.id(), e);
    }
}

/// Toggle a post's share menu, closing all others first.
fn apply_share_toggle(document: &Document, post_id: &str) {
    let menus = share_menus(document);
    let target = menu_id(post_id);

    let update = resolve_toggle(
        menus.iter().map(|(id, el)| (id.as_str(), is_visible(el))),
        &target,
    );

    for (id, element) in &menus {
        if update.hide.contains(id) {
            set_display(element, "none");
        }
    }

    if let Some(id) = update.show {
        match menus.iter().find(|(menu, _)| *menu == id) {
            Some((_, element)) => set_display(element, "block"),
            // Menu markup absent for this post: logged no-op.
            None => tracing::warn!("no share menu element #{id}"),
        }
    }
}

/// Outside click: hide every menu and overlay, clear the share-open marker.
fn dismiss_share_ui(document: &Document) {
    let menus = share_menus(document);
    let update = resolve_dismiss(menus.iter().map(|(id, el)| (id.as_str(), is_visible(el))));

    for (id, element) in &menus {
        if update.hide.contains(id) {
            set_display(element, "none");
        }
    }

    if let Ok(overlays) = document.query_selector_all(pagekit_core::action::SHARE_OVERLAY) {
        for i in 0..overlays.length() {
            if let Some(element) = overlays.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                set_display(&element, "none");
            }
        }
    }

    if let Some(body) = document.body() {
        let _ = body.class_list().remove_1("share-open");
    }
}

/// Flip the liked class and adjust the displayed counter.
///
/// The counter is parsed from the currently displayed text; non-integer
/// text makes the whole toggle a logged no-op.
fn apply_like_toggle(target: Option<&Element>) {
    let Some(button) = target.and_then(|t| t.closest(pagekit_core::action::LIKE).ok().flatten())
    else {
        tracing::warn!("like click without a like button ancestor");
        return;
    };

    let Some(count_el) = button.query_selector(".like-count").ok().flatten() else {
        tracing::warn!("like button without a .like-count element");
        return;
    };

    let liked = button.class_list().contains("liked");
    let text = count_el.text_content().unwrap_or_default();

    let Some(update) = toggle_like(liked, &text) else {
        tracing::warn!("like count text {text:?} is not an integer");
        return;
    };

    if update.liked {
        let _ = button.class_list().add_1("liked");
    } else {
        let _ = button.class_list().remove_1("liked");
    }
    count_el.set_text_content(Some(&update.count.to_string()));
}
