//! Click classification and login gating.
//!
//! A single delegated listener at the document level classifies every click
//! by walking the target's ancestor chain for the nearest matching marker.
//! The classifier is a tagged-variant enum matched in a fixed priority order
//! (share controls, copy, like, outside), so adding a control means adding a
//! variant rather than another scattered conditional.
//!
//! The DOM is only reached through [`AncestorProbe`], which makes the whole
//! classification path testable without a document.

use smol_str::SmolStr;

/// Marker selector for the share menu open toggle.
pub const SHARE_TOGGLE: &str = ".share-toggle";
/// Marker selector for the share menu close button.
pub const SHARE_CLOSE: &str = ".close-share";
/// Marker selector for the share overlay backdrop.
pub const SHARE_OVERLAY: &str = ".share-overlay";
/// Marker selector for copy-link controls.
pub const COPY: &str = ".copy";
/// Marker selector for like buttons.
pub const LIKE: &str = ".like-btn";
/// Marker selector for the share dropdown container.
pub const SHARE_DROPDOWN: &str = ".share-dropdown";
/// Marker selector for share menu elements.
pub const SHARE_MENU: &str = ".share-menu";

/// Selector for the nearest ancestor carrying a post identifier.
pub const POST_ID_SELECTOR: &str = "[data-blog-id]";
/// Attribute holding the post identifier.
pub const POST_ID_ATTR: &str = "data-blog-id";
/// Selector for the nearest ancestor carrying a shareable URL.
pub const URL_SELECTOR: &str = "[data-url]";
/// Attribute holding the shareable URL.
pub const URL_ATTR: &str = "data-url";

/// Read-only view of a click target's ancestor chain.
///
/// `has_ancestor` answers "is the target inside an element matching this
/// selector", `ancestor_attr` resolves an attribute on the nearest matching
/// ancestor. The browser implementation is `Element::closest`; tests use a
/// plain map.
pub trait AncestorProbe {
    /// Whether the click target or one of its ancestors matches `selector`.
    fn has_ancestor(&self, selector: &str) -> bool;

    /// Attribute value from the nearest ancestor matching `selector`, if any.
    fn ancestor_attr(&self, selector: &str, attr: &str) -> Option<String>;
}

/// Which share control was clicked.
///
/// Only the open toggle is login-gated; close and overlay clicks must work
/// regardless so an open menu can always be dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareControl {
    /// The `.share-toggle` button.
    Open,
    /// The `.close-share` button inside the menu.
    Close,
    /// The `.share-overlay` backdrop.
    Overlay,
}

/// Why a click that matched a control was skipped anyway.
///
/// Missing ancestor context is a logged no-op, never an unguarded fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    /// A share control without a `[data-blog-id]` ancestor. Carries which
    /// control it was so gating can still see the control class.
    #[error("share control has no data-blog-id ancestor")]
    MissingPostId(ShareControl),
    /// A copy control without a `[data-url]` ancestor.
    #[error("copy control has no data-url ancestor")]
    MissingUrl,
}

/// The logical action a click represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    /// Toggle a post's share menu.
    Share {
        post_id: SmolStr,
        control: ShareControl,
    },
    /// Copy a post link to the clipboard.
    CopyLink { url: String },
    /// Flip a post's liked state.
    LikeToggle,
    /// Click inside share UI that matched no control: leave menus alone.
    Inert,
    /// Click outside any share control: dismiss open menus.
    Outside,
    /// A matched control missing its expected ancestor data.
    Skipped(SkipReason),
}

/// Classify a click by its ancestor chain.
///
/// Priority order: share controls, copy, like, outside. Exactly one variant
/// is returned for any probe.
pub fn classify(probe: &impl AncestorProbe) -> PageAction {
    let share_control = if probe.has_ancestor(SHARE_TOGGLE) {
        Some(ShareControl::Open)
    } else if probe.has_ancestor(SHARE_CLOSE) {
        Some(ShareControl::Close)
    } else if probe.has_ancestor(SHARE_OVERLAY) {
        Some(ShareControl::Overlay)
    } else {
        None
    };

    if let Some(control) = share_control {
        return match probe.ancestor_attr(POST_ID_SELECTOR, POST_ID_ATTR) {
            Some(post_id) => PageAction::Share {
                post_id: post_id.into(),
                control,
            },
            None => PageAction::Skipped(SkipReason::MissingPostId(control)),
        };
    }

    if probe.has_ancestor(COPY) {
        return match probe.ancestor_attr(URL_SELECTOR, URL_ATTR) {
            Some(url) => PageAction::CopyLink { url },
            None => PageAction::Skipped(SkipReason::MissingUrl),
        };
    }

    if probe.has_ancestor(LIKE) {
        return PageAction::LikeToggle;
    }

    // Inside the dropdown or an open menu but on no control: inert, not an
    // outside click, or the menu under the pointer would dismiss itself.
    if probe.has_ancestor(SHARE_DROPDOWN) || probe.has_ancestor(SHARE_MENU) {
        return PageAction::Inert;
    }

    PageAction::Outside
}

/// Login state read from the page at dispatch time.
///
/// Produced by a provider injected at dispatcher construction, never read
/// ambiently inside the gating logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    pub logged_in: bool,
}

/// Outcome of gating an action against the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gated {
    /// Proceed with the action.
    Allowed(PageAction),
    /// Abort: notify with `message` and navigate to the login page.
    LoginRequired { message: &'static str },
}

/// Gate an action against the session.
///
/// Only the share open toggle and the like toggle require login. Dismissal
/// paths (close, overlay, outside) and copy never do.
///
/// Gating is decided from the control class alone: a share toggle whose
/// post id failed to resolve still prompts for login first, and only
/// becomes a skipped no-op for a logged-in user.
pub fn gate(action: PageAction, session: Session) -> Gated {
    match &action {
        PageAction::Share {
            control: ShareControl::Open,
            ..
        }
        | PageAction::Skipped(SkipReason::MissingPostId(ShareControl::Open))
            if !session.logged_in =>
        {
            Gated::LoginRequired {
                message: "Please login to share posts!",
            }
        }
        PageAction::LikeToggle if !session.logged_in => Gated::LoginRequired {
            message: "Please login to like posts!",
        },
        _ => Gated::Allowed(action),
    }
}
