//! Enemy per-tick behavior: pulse animation, targeting, firing, melee,
//! and the coordinated-volley execution.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use frenzy_arena::cover::CoverField;
use frenzy_core::components::{Enemy, EnemyShot};
use frenzy_core::constants::*;
use frenzy_core::events::GameEvent;
use frenzy_core::types::Vec3;

use frenzy_enemy_ai::escalation::{EscalationState, EscalationTransition};
use frenzy_enemy_ai::targeting::{
    self, accuracy_penalty, cooldown_after_shot, evaluate, TargetingContext,
};

use crate::player::PlayerState;
use crate::round::RoundState;
use crate::world_setup;

pub fn run(
    world: &mut World,
    player: &PlayerState,
    covers: &CoverField,
    round: &mut RoundState,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    let modifier = player.detection_modifier();
    let penalty = accuracy_penalty(player.stance, player.behind_cover);

    let mut shots: Vec<(Vec3, Vec3)> = Vec::new();
    let mut melee: Vec<hecs::Entity> = Vec::new();

    for (entity, (enemy, pos)) in world.query_mut::<(&mut Enemy, &Vec3)>() {
        enemy.pulse_clock += ENEMY_PULSE_CLOCK_STEP;
        enemy.scale = ENEMY_PULSE_BASE + ENEMY_PULSE_AMPLITUDE * enemy.pulse_clock.sin();
        if enemy.firing_cooldown > 0 {
            enemy.firing_cooldown -= 1;
        }
        if enemy.targeting_indicator > 0 {
            enemy.targeting_indicator -= 1;
        }
        if enemy.muzzle_flash > 0 {
            enemy.muzzle_flash -= 1;
        }

        let distance = pos.distance_to(&player.position);
        let decision = evaluate(&TargetingContext {
            distance,
            detection_range: ENEMY_DETECTION_RANGE,
            firing_range: ENEMY_FIRING_RANGE,
            detection_modifier: modifier,
            occluded: covers.occluded(pos, &player.position),
            cooldown_ready: enemy.firing_cooldown <= 0,
        });

        enemy.is_targeting = decision.detected;
        if decision.detected {
            enemy.target_position = Some(player.position);
            enemy.targeting_indicator = ENEMY_TARGETING_INDICATOR_TICKS;
            if decision.fire {
                let direction =
                    targeting::fire_direction(rng, pos, &player.position, enemy.accuracy, penalty);
                shots.push((*pos + Vec3::new(0.0, 0.0, enemy.radius), direction));
                enemy.muzzle_flash = ENEMY_MUZZLE_FLASH_TICKS;
                enemy.firing_cooldown = cooldown_after_shot(rng, enemy.firing_interval);
            }
        }

        if distance < ENEMY_MELEE_RANGE {
            melee.push(entity);
        }
    }

    for (origin, direction) in shots {
        spawn_shot(world, origin, direction);
    }

    // Each melee hit costs a life and teleports the enemy to a fresh cell.
    for entity in melee {
        round.lose_life();
        events.push(GameEvent::MeleeHit {
            life_remaining: round.life,
        });
        let fresh = world_setup::random_enemy_position(rng);
        if let Ok((enemy, pos)) = world.query_one_mut::<(&mut Enemy, &mut Vec3)>(entity) {
            *pos = fresh;
            enemy.original_position = fresh;
        }
    }
}

/// Advance the escalation machine one tick; on the Warning -> Active edge,
/// every enemy with a recorded target fires its volley shot.
pub fn run_escalation(
    world: &mut World,
    escalation: &mut EscalationState,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    match escalation.advance() {
        Some(EscalationTransition::Volley) => {
            events.push(GameEvent::CoordinatedVolley);
            let mut shots: Vec<(Vec3, Vec3, f64)> = Vec::new();
            for (_, (enemy, pos)) in world.query_mut::<(&mut Enemy, &Vec3)>() {
                if let Some(target) = enemy.target_position {
                    shots.push((*pos, target, enemy.accuracy));
                    enemy.muzzle_flash = ENEMY_MUZZLE_FLASH_TICKS;
                }
            }
            for (pos, target, accuracy) in shots {
                let direction =
                    targeting::fire_direction(rng, &pos, &target, accuracy, ATTACK_VOLLEY_PENALTY);
                spawn_shot(world, pos + Vec3::new(0.0, 0.0, ENEMY_RADIUS), direction);
            }
            let flashes: Vec<Vec3> = world
                .query_mut::<(&Enemy, &Vec3)>()
                .into_iter()
                .map(|(_, (_, pos))| *pos)
                .collect();
            for pos in flashes {
                crate::systems::effects::spawn(
                    world,
                    rng,
                    pos,
                    frenzy_core::enums::EffectKind::MuzzleFlash,
                );
            }
        }
        Some(EscalationTransition::Settled) | None => {}
    }
}

fn spawn_shot(world: &mut World, origin: Vec3, direction: Vec3) {
    world.spawn((
        origin,
        EnemyShot {
            direction,
            speed: ENEMY_SHOT_SPEED,
            age: 0,
            lifetime: ENEMY_SHOT_LIFETIME_TICKS,
        },
    ));
}
