//! Coordinated-attack escalation state machine.
//!
//! Normal -> Warning when the elimination counter reaches the threshold
//! (latched; a new cycle cannot start until the current one completes).
//! Warning -> Active after a fixed duration: the volley fires on this
//! transition. Active -> Normal after a fixed settle period; the
//! elimination counter resets to zero exactly then, and only then.

use frenzy_core::constants::{
    ATTACK_ELIMINATION_THRESHOLD, ATTACK_SETTLE_TICKS, ATTACK_WARNING_TICKS,
};
use frenzy_core::enums::AttackPhase;

/// Transition produced by advancing the state machine one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscalationTransition {
    /// The warning period elapsed; fire the volley now.
    Volley,
    /// The settle period elapsed; back to normal, counter reset.
    Settled,
}

/// Round-level escalation state.
#[derive(Debug, Clone, Default)]
pub struct EscalationState {
    pub phase: AttackPhase,
    /// Kills since the last completed cycle.
    pub eliminations: u32,
    /// Ticks elapsed in the current Warning or Active phase.
    phase_timer: u32,
    /// Set when a cycle begins; cleared when it completes.
    triggered: bool,
}

impl EscalationState {
    /// Record an enemy elimination. Returns true when this kill starts the
    /// warning phase.
    pub fn record_elimination(&mut self) -> bool {
        self.eliminations += 1;
        if self.eliminations >= ATTACK_ELIMINATION_THRESHOLD && !self.triggered {
            self.triggered = true;
            self.phase = AttackPhase::Warning;
            self.phase_timer = 0;
            return true;
        }
        false
    }

    /// Advance one tick. At most one transition occurs per tick.
    pub fn advance(&mut self) -> Option<EscalationTransition> {
        match self.phase {
            AttackPhase::Normal => None,
            AttackPhase::Warning => {
                self.phase_timer += 1;
                if self.phase_timer >= ATTACK_WARNING_TICKS {
                    self.phase = AttackPhase::Active;
                    self.phase_timer = 0;
                    Some(EscalationTransition::Volley)
                } else {
                    None
                }
            }
            AttackPhase::Active => {
                self.phase_timer += 1;
                if self.phase_timer >= ATTACK_SETTLE_TICKS {
                    self.phase = AttackPhase::Normal;
                    self.phase_timer = 0;
                    self.eliminations = 0;
                    self.triggered = false;
                    Some(EscalationTransition::Settled)
                } else {
                    None
                }
            }
        }
    }

    /// Ticks remaining until the volley (Warning phase only; 0 otherwise).
    pub fn warning_ticks_left(&self) -> u32 {
        match self.phase {
            AttackPhase::Warning => ATTACK_WARNING_TICKS.saturating_sub(self.phase_timer),
            _ => 0,
        }
    }

    /// True while any hit on the player ends the round outright.
    pub fn volley_lethal(&self) -> bool {
        self.phase == AttackPhase::Active
    }
}
