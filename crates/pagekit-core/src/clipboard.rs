//! Clipboard copy attempt sequencing.
//!
//! The copy path is a two-tier fallback: the async platform clipboard API
//! first, then a synthesized selection-and-copy maneuver. Rather than nest
//! the conditionals, the sequence is an explicit result chain: each attempt
//! feeds its outcome back into [`CopyStep::advance`], which yields either
//! the next tier to try or a terminal [`CopyOutcome`]. Additional tiers
//! would slot in without restructuring.
//!
//! Validation is asymmetric: invalid input is logged by the caller and
//! dropped silently, while a terminal failure after real attempts is
//! surfaced to the user.

/// Why a copy request was rejected before any attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CopyTextError {
    /// No text was supplied.
    #[error("no text supplied for clipboard copy")]
    Missing,
    /// The supplied text was empty.
    #[error("empty text supplied for clipboard copy")]
    Empty,
}

/// Validate text before attempting any copy.
///
/// Rejection means: log, no clipboard mutation, no user notification.
pub fn validate_text(text: Option<&str>) -> Result<&str, CopyTextError> {
    match text {
        None => Err(CopyTextError::Missing),
        Some("") => Err(CopyTextError::Empty),
        Some(t) => Ok(t),
    }
}

/// A copy mechanism tier, in preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTier {
    /// The async platform clipboard API.
    Preferred,
    /// Synthesized off-screen element + legacy copy command.
    Fallback,
}

/// Terminal result of the attempt sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// A tier succeeded; notify the user of success.
    Copied(CopyTier),
    /// Every tier failed; notify the user of failure.
    Failed,
}

/// One step of the copy attempt sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStep {
    /// Try this tier next.
    Attempt(CopyTier),
    /// The sequence has terminated.
    Done(CopyOutcome),
}

impl CopyStep {
    /// Start the sequence.
    ///
    /// When the platform clipboard API is absent the preferred tier is
    /// skipped entirely rather than attempted and failed.
    pub fn start(preferred_available: bool) -> Self {
        if preferred_available {
            CopyStep::Attempt(CopyTier::Preferred)
        } else {
            CopyStep::Attempt(CopyTier::Fallback)
        }
    }

    /// Feed the outcome of the current attempt and get the next step.
    ///
    /// Advancing a `Done` step is a no-op, so a driver loop can't resurrect
    /// a terminated sequence.
    pub fn advance(self, succeeded: bool) -> Self {
        match self {
            CopyStep::Attempt(tier) if succeeded => CopyStep::Done(CopyOutcome::Copied(tier)),
            CopyStep::Attempt(CopyTier::Preferred) => CopyStep::Attempt(CopyTier::Fallback),
            CopyStep::Attempt(CopyTier::Fallback) => CopyStep::Done(CopyOutcome::Failed),
            done @ CopyStep::Done(_) => done,
        }
    }
}
