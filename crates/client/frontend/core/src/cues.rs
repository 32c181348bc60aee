//! Audio cue contract.

/// The two feedback cues the game plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum CueKind {
    Correct,
    Incorrect,
}

/// Sink for feedback cues.
///
/// Implementations must tolerate unavailable audio as a silent no-op; a
/// missing cue never disturbs the session.
pub trait AudioCues {
    fn play_cue(&mut self, kind: CueKind);
}

/// Cue sink that plays nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAudioCues;

impl AudioCues for NullAudioCues {
    fn play_cue(&mut self, _kind: CueKind) {}
}
