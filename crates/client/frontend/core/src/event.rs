//! Utilities for reacting to runtime events inside UI layers.
use crate::cues::CueKind;

/// What a runtime event asks of the frontend: redraw, and optionally a cue.
#[derive(Clone, Copy, Debug, Default)]
pub struct EventImpact {
    pub requires_redraw: bool,
    pub cue: Option<CueKind>,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
            cue: None,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
            cue: None,
        }
    }

    pub const fn redraw_with_cue(kind: CueKind) -> Self {
        Self {
            requires_redraw: true,
            cue: Some(kind),
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
            cue: self.cue.or(other.cue),
        }
    }
}
