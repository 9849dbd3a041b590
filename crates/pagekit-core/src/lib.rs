//! pagekit-core: Pure interaction logic without framework dependencies.
//!
//! This crate provides:
//! - `PageAction` / `classify` - tagged-variant click classification over an
//!   `AncestorProbe` abstraction
//! - `Session` / `gate` - explicit login gating for protected actions
//! - `CopyStep` - the clipboard copy attempt sequence as an explicit chain
//! - Share menu mutual exclusion, like counter transitions, and selected-file
//!   set operations
//!
//! Everything here is testable natively; the DOM only enters through the
//! `pagekit-browser` crate.

pub mod action;
pub mod clipboard;
pub mod like;
pub mod preview;
pub mod share;

pub use action::{
    AncestorProbe, Gated, PageAction, Session, ShareControl, SkipReason, classify, gate,
};
pub use clipboard::{CopyOutcome, CopyStep, CopyTextError, CopyTier, validate_text};
pub use like::{LikeUpdate, toggle_like};
pub use preview::{is_image_mime, previewable_indices, remove_index};
pub use share::{MenuUpdate, menu_id, resolve_dismiss, resolve_toggle};
pub use smol_str::SmolStr;
