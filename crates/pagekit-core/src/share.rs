//! Share menu mutual exclusion.
//!
//! Menu visibility lives in the DOM; these functions take a snapshot of
//! `(menu id, visible)` pairs and compute the transition, which the browser
//! layer then applies. Invariant: at most one menu is visible after any
//! resolved update.

use smol_str::SmolStr;

/// Prefix for per-post share menu element ids (`shareMenu{post_id}`).
pub const MENU_ID_PREFIX: &str = "shareMenu";

/// Element id of the share menu for a post.
pub fn menu_id(post_id: &str) -> SmolStr {
    SmolStr::from(format!("{MENU_ID_PREFIX}{post_id}"))
}

/// A computed visibility transition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuUpdate {
    /// Menu ids to hide.
    pub hide: Vec<SmolStr>,
    /// Menu id to show, if any.
    pub show: Option<SmolStr>,
}

/// Resolve a toggle of `target` against the current menu snapshot.
///
/// Every other visible menu is closed first; the target is hidden if it was
/// visible and shown otherwise.
pub fn resolve_toggle<'a>(
    menus: impl IntoIterator<Item = (&'a str, bool)>,
    target: &str,
) -> MenuUpdate {
    let mut update = MenuUpdate::default();
    let mut target_visible = false;

    for (id, visible) in menus {
        if id == target {
            target_visible = visible;
        } else if visible {
            update.hide.push(SmolStr::from(id));
        }
    }

    if target_visible {
        update.hide.push(SmolStr::from(target));
    } else {
        update.show = Some(SmolStr::from(target));
    }

    update
}

/// Resolve an outside-click dismissal: hide everything visible.
pub fn resolve_dismiss<'a>(menus: impl IntoIterator<Item = (&'a str, bool)>) -> MenuUpdate {
    MenuUpdate {
        hide: menus
            .into_iter()
            .filter(|(_, visible)| *visible)
            .map(|(id, _)| SmolStr::from(id))
            .collect(),
        show: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_id_format() {
        assert_eq!(menu_id("42"), "shareMenu42");
    }

    #[test]
    fn test_open_closed_menu() {
        let update = resolve_toggle([("shareMenu1", false), ("shareMenu2", false)], "shareMenu1");
        assert!(update.hide.is_empty());
        assert_eq!(update.show.as_deref(), Some("shareMenu1"));
    }

    #[test]
    fn test_toggle_open_menu_closes_it() {
        let update = resolve_toggle([("shareMenu1", true)], "shareMenu1");
        assert_eq!(update.hide, vec![SmolStr::from("shareMenu1")]);
        assert_eq!(update.show, None);
    }

    #[test]
    fn test_opening_b_closes_a() {
        let update = resolve_toggle([("shareMenuA", true), ("shareMenuB", false)], "shareMenuB");
        assert_eq!(update.hide, vec![SmolStr::from("shareMenuA")]);
        assert_eq!(update.show.as_deref(), Some("shareMenuB"));
    }

    #[test]
    fn test_at_most_one_shown() {
        // Even with inconsistent markup (several menus visible), the update
        // leaves at most the target visible.
        let update = resolve_toggle(
            [("m1", true), ("m2", true), ("m3", false)],
            "m3",
        );
        assert_eq!(update.hide.len(), 2);
        assert_eq!(update.show.as_deref(), Some("m3"));
    }

    #[test]
    fn test_target_absent_from_snapshot_still_shows() {
        // Menu rendered after the snapshot convention: treat as closed.
        let update = resolve_toggle([("m1", true)], "m2");
        assert_eq!(update.hide, vec![SmolStr::from("m1")]);
        assert_eq!(update.show.as_deref(), Some("m2"));
    }

    #[test]
    fn test_dismiss_hides_all_visible() {
        let update = resolve_dismiss([("m1", true), ("m2", false), ("m3", true)]);
        assert_eq!(
            update.hide,
            vec![SmolStr::from("m1"), SmolStr::from("m3")]
        );
        assert_eq!(update.show, None);
    }
}
