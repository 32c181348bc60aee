/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Countdown length for a challenge session, in seconds.
    pub challenge_time_limit_secs: u32,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Upper bound on the star rating.
    pub const MAX_STARS: u8 = 5;
    /// Correct matches required per star.
    pub const MATCHES_PER_STAR: usize = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CHALLENGE_TIME_LIMIT_SECS: u32 = 120;

    pub fn new() -> Self {
        Self {
            challenge_time_limit_secs: Self::DEFAULT_CHALLENGE_TIME_LIMIT_SECS,
        }
    }

    pub fn with_time_limit(challenge_time_limit_secs: u32) -> Self {
        Self {
            challenge_time_limit_secs,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
