//! Presentation vocabulary shared by frontends.

/// Visual state of one map region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionVisual {
    Default,
    /// Practice-mode hint: cursored region while an entry is selected.
    SelectedHighlight,
    /// Matched this session.
    Correct,
    /// Just resolved as a mismatch; shown briefly.
    Incorrect,
}

/// Top-level views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Game,
}

/// Dialogs layered over the game view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    /// Confirmation before a timed session starts.
    ChallengeStart,
    /// Final score after a challenge ends.
    ChallengeResults,
}
