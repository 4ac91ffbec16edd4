//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. While the
//! round is over, only `ResetRound` applies.

use serde::{Deserialize, Serialize};

use crate::enums::MoveDirection;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Movement ---
    /// Press or release a movement intent (held flags drive per-tick motion).
    SetMovementIntent {
        direction: MoveDirection,
        pressed: bool,
    },

    // --- Aiming ---
    /// Adjust the target aim angle by a relative amount (degrees; callers use
    /// the +-20 body-turn and +-5 fine-aim increments).
    AimAdjust { degrees: f64 },
    /// Set the target aim angle absolutely (degrees, wrapped to [0, 360)).
    SetAimAngle { degrees: f64 },

    // --- Actions ---
    /// Fire one bullet from the gun tip. Consumes one round; refused at zero.
    Fire,
    /// Toggle Standing <-> Crouching. Blocked while Lying.
    ToggleCrouch,

    // --- Mode toggles ---
    /// Toggle cheat mode (auto-rotate and auto-fire at aligned enemies).
    ToggleCheatMode,
    /// Toggle the first-person camera flag echoed in the snapshot.
    /// The simulation itself never reads it.
    ToggleCameraMode,

    // --- Round control ---
    /// Restore every subsystem to its initial state.
    ResetRound,
}
