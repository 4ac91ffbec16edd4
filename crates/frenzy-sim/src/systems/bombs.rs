//! Bomb timers, the population spawner, and player-contact detonation.
//!
//! Bullet hits on bombs are resolved in the bullets system; this module
//! owns everything time-driven.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use frenzy_core::components::Bomb;
use frenzy_core::constants::*;
use frenzy_core::enums::{BombPhase, EffectKind};
use frenzy_core::events::GameEvent;
use frenzy_core::types::Vec3;

use crate::player::PlayerState;
use crate::systems::effects;
use crate::world_setup;

/// Advance blink/lifetime/flash timers and the Idle -> Warning escalation;
/// finished explosions are queued for despawn.
pub fn run_timers(world: &mut World, despawn_buffer: &mut Vec<hecs::Entity>) {
    for (entity, bomb) in world.query_mut::<&mut Bomb>() {
        match bomb.phase {
            BombPhase::Idle | BombPhase::Warning => {
                bomb.lifetime_timer += 1;
                bomb.blink_timer += 1;
                if bomb.blink_timer >= bomb.blink_interval * 2 {
                    bomb.blink_timer = 0;
                }
                if bomb.flash_timer > 0 {
                    bomb.flash_timer -= 1;
                }
                if bomb.phase == BombPhase::Idle && bomb.lifetime_timer > BOMB_WARNING_DELAY_TICKS {
                    bomb.phase = BombPhase::Warning;
                    bomb.blink_interval = BOMB_BLINK_WARNING;
                }
            }
            BombPhase::Exploding => {
                bomb.explosion_timer += 1;
                if bomb.explosion_timer >= BOMB_EXPLOSION_TICKS {
                    despawn_buffer.push(entity);
                }
            }
        }
    }
}

/// Explosion-progress-only variant, run while the round is over so a
/// detonation finishes animating.
pub fn animate_explosions(world: &mut World, despawn_buffer: &mut Vec<hecs::Entity>) {
    for (entity, bomb) in world.query_mut::<&mut Bomb>() {
        if bomb.phase == BombPhase::Exploding {
            bomb.explosion_timer += 1;
            if bomb.explosion_timer >= BOMB_EXPLOSION_TICKS {
                despawn_buffer.push(entity);
            }
        }
    }
}

/// Add one bomb per interval while under the population cap.
pub fn run_spawner(world: &mut World, rng: &mut ChaCha8Rng, spawn_timer: &mut u32) {
    *spawn_timer += 1;
    if *spawn_timer >= BOMB_SPAWN_INTERVAL_TICKS {
        *spawn_timer = 0;
        let count = world.query_mut::<&Bomb>().into_iter().count();
        if count < BOMB_MAX_COUNT {
            world_setup::spawn_bomb(world, rng);
        }
    }
}

/// Physical contact between the player and an armed bomb forces it to
/// explode. Returns true when a detonation happened; the engine ends the
/// round.
pub fn run_player_contact(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player: &PlayerState,
    events: &mut Vec<GameEvent>,
) -> bool {
    let head = player.head_position();
    let torso = player.torso_center();

    let mut detonated: Option<Vec3> = None;
    for (_, (bomb, pos)) in world.query_mut::<(&mut Bomb, &Vec3)>() {
        if !matches!(bomb.phase, BombPhase::Idle | BombPhase::Warning) {
            continue;
        }
        let contact = pos.distance_to(&head) < BOMB_RADIUS + PLAYER_HEAD_RADIUS
            || pos.distance_to(&torso) < BOMB_RADIUS + BOMB_TORSO_CONTACT_RADIUS;
        if contact {
            bomb.phase = BombPhase::Exploding;
            bomb.explosion_timer = 0;
            detonated = Some(*pos);
            break;
        }
    }

    match detonated {
        Some(position) => {
            events.push(GameEvent::BombDetonated { position });
            effects::spawn(world, rng, position, EffectKind::BombBlast);
            true
        }
        None => false,
    }
}
