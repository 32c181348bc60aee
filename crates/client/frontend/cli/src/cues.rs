//! Terminal-bell implementation of the audio cue contract.

use std::io::Write;

use client_frontend_core::{AudioCues, CueKind};

/// Plays the terminal bell for match feedback. Write failures are swallowed;
/// a missing cue never disturbs the session.
#[derive(Clone, Copy, Debug)]
pub struct TerminalBell {
    enabled: bool,
}

impl TerminalBell {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl AudioCues for TerminalBell {
    fn play_cue(&mut self, _kind: CueKind) {
        if !self.enabled {
            return;
        }

        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
    }
}
