//! Typed results returned by the engine.
//!
//! The engine performs no I/O; callers translate these outcomes into visual
//! feedback, audio cues, and log lines.

use crate::catalog::RegionId;
use crate::session::GameMode;
use crate::timer::TickStatus;

/// Effect of a list-entry selection on the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionChange {
    /// The entry is now selected (displacing any previous selection).
    Selected { entry: RegionId },
    /// Re-selecting the current entry toggled the selection off.
    Cleared,
    /// Nothing changed: session over, unknown id, or already matched.
    Ignored,
}

/// How a map click resolved against the current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum MatchResolution {
    /// Clicked region equals the selected entry.
    Correct,
    /// Known region, but not the selected entry.
    Incorrect,
    /// Clicked feature has no catalog entry. Resolves like a mismatch but is
    /// logged distinctly for diagnostics.
    Unrecognized,
    /// Ignored: session over, no selection, or region already matched.
    NoOp,
}

/// Full result of a match attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchOutcome {
    pub resolution: MatchResolution,
    /// Matched-set size after the attempt.
    pub matched_count: usize,
    /// Star rating after the attempt (0 in practice mode).
    pub stars: u8,
    /// True when this attempt matched the final region.
    pub completed: bool,
}

/// Discriminated result of executing one [`Action`].
///
/// [`Action`]: crate::engine::Action
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Selection(SelectionChange),
    Match(MatchOutcome),
    Clock(TickStatus),
    Reset { mode: GameMode },
}
