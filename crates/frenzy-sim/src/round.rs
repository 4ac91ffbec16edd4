//! Round-level scoring and failure tracking.

use frenzy_core::constants::*;
use frenzy_core::enums::RoundOverReason;

/// Life, ammo, score, countdown, and the mode flags that survive a reset.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub life: u32,
    pub score: u32,
    pub ammo: u32,
    pub missed_shots: u32,
    /// Seconds left; clamped to [0, ROUND_COUNTDOWN_SECS].
    pub countdown_secs: f64,
    pub cheat_mode: bool,
    pub first_person: bool,
    pub game_over: bool,
    pub round_over_reason: Option<RoundOverReason>,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundState {
    pub fn new() -> Self {
        Self {
            life: ROUND_START_LIFE,
            score: 0,
            ammo: ROUND_START_AMMO,
            missed_shots: 0,
            countdown_secs: ROUND_COUNTDOWN_SECS,
            cheat_mode: false,
            first_person: false,
            game_over: false,
            round_over_reason: None,
        }
    }

    /// Back to initial values. Cheat and camera flags persist.
    pub fn reset(&mut self) {
        let cheat_mode = self.cheat_mode;
        let first_person = self.first_person;
        *self = Self::new();
        self.cheat_mode = cheat_mode;
        self.first_person = first_person;
    }

    /// Take one round for a shot. Returns false (and leaves ammo at zero)
    /// when the magazine is empty.
    pub fn consume_ammo(&mut self) -> bool {
        if self.ammo == 0 {
            return false;
        }
        self.ammo -= 1;
        true
    }

    pub fn add_ammo(&mut self) {
        self.ammo += AMMO_PICKUP_ROUNDS;
    }

    pub fn add_life(&mut self) {
        self.life = (self.life + 1).min(ROUND_MAX_LIFE);
    }

    pub fn lose_life(&mut self) {
        self.life = self.life.saturating_sub(1);
    }

    /// Lethal-volley hits skip the decrement and empty the pool outright.
    pub fn deplete_life(&mut self) {
        self.life = 0;
    }

    pub fn record_miss(&mut self) {
        self.missed_shots += 1;
    }

    /// Kill bonus, clamped to the starting countdown.
    pub fn extend_countdown(&mut self) {
        self.countdown_secs = (self.countdown_secs + KILL_TIME_BONUS_SECS).min(ROUND_COUNTDOWN_SECS);
    }

    /// Advance the countdown one tick. Returns true exactly once, on the
    /// tick it reaches zero.
    pub fn tick_countdown(&mut self) -> bool {
        if self.game_over || self.countdown_secs <= 0.0 {
            return false;
        }
        self.countdown_secs -= DT;
        if self.countdown_secs <= 0.0 {
            self.countdown_secs = 0.0;
            return true;
        }
        false
    }

    /// Mark the round over. Returns true only on the first call.
    pub fn end(&mut self, reason: RoundOverReason) -> bool {
        if self.game_over {
            return false;
        }
        self.game_over = true;
        self.round_over_reason = Some(reason);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ammo_refused_at_zero() {
        let mut round = RoundState::new();
        for _ in 0..ROUND_START_AMMO {
            assert!(round.consume_ammo());
        }
        assert!(!round.consume_ammo());
        assert_eq!(round.ammo, 0);
    }

    #[test]
    fn test_life_capped() {
        let mut round = RoundState::new();
        for _ in 0..10 {
            round.add_life();
        }
        assert_eq!(round.life, ROUND_MAX_LIFE);
    }

    #[test]
    fn test_countdown_expires_once() {
        let mut round = RoundState::new();
        let mut expiries = 0;
        for _ in 0..(TICK_RATE as u64 * 31) {
            if round.tick_countdown() {
                expiries += 1;
            }
        }
        assert_eq!(expiries, 1);
        assert_eq!(round.countdown_secs, 0.0);
    }

    #[test]
    fn test_countdown_bonus_clamped() {
        let mut round = RoundState::new();
        round.countdown_secs = 28.0;
        round.extend_countdown();
        assert_eq!(round.countdown_secs, ROUND_COUNTDOWN_SECS);
    }

    #[test]
    fn test_end_latches_first_reason() {
        let mut round = RoundState::new();
        assert!(round.end(RoundOverReason::TimeExpired));
        assert!(!round.end(RoundOverReason::LifeDepleted));
        assert_eq!(round.round_over_reason, Some(RoundOverReason::TimeExpired));
    }

    #[test]
    fn test_reset_preserves_mode_flags() {
        let mut round = RoundState::new();
        round.cheat_mode = true;
        round.score = 7;
        round.end(RoundOverReason::BombContact);
        round.reset();
        assert!(round.cheat_mode);
        assert_eq!(round.score, 0);
        assert!(!round.game_over);
        assert_eq!(round.round_over_reason, None);
    }
}
