//! Like toggle transitions.
//!
//! The displayed counter text is the source of truth: there is no backing
//! count, the DOM text is parsed and rewritten on every toggle. The text
//! must therefore always hold a base-10 integer literal; anything else makes
//! the toggle a logged no-op rather than corrupting the display.

/// Result of flipping the liked state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeUpdate {
    /// The new liked flag.
    pub liked: bool,
    /// The new counter value to display.
    pub count: i64,
}

/// Flip the liked flag and adjust the displayed counter.
///
/// Increments exactly on unliked -> liked and decrements on the reverse, so
/// toggling twice restores both the flag and the count. Returns `None` when
/// the displayed text does not parse as a base-10 integer.
pub fn toggle_like(liked: bool, count_text: &str) -> Option<LikeUpdate> {
    let count: i64 = count_text.trim().parse().ok()?;
    Some(if liked {
        LikeUpdate {
            liked: false,
            count: count - 1,
        }
    } else {
        LikeUpdate {
            liked: true,
            count: count + 1,
        }
    })
}
