//! Player-bullet flight and collision resolution.
//!
//! Order per bullet: bomb contact at the pre-move position, then advance,
//! then cover, boundary, and enemy checks. Cover hits and boundary exits
//! both count as missed shots.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use frenzy_arena::cover::CoverField;
use frenzy_arena::geom;
use frenzy_core::components::{Bomb, Enemy, PlayerBullet};
use frenzy_core::constants::*;
use frenzy_core::enums::{BombPhase, EffectKind};
use frenzy_core::events::GameEvent;
use frenzy_core::types::Vec3;

use frenzy_enemy_ai::escalation::EscalationState;

use crate::round::RoundState;
use crate::systems::effects;
use crate::world_setup;

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    covers: &mut CoverField,
    round: &mut RoundState,
    escalation: &mut EscalationState,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<hecs::Entity>,
) {
    // Collision targets, snapshotted before the bullet scan.
    let enemies: Vec<(hecs::Entity, Vec3, f64)> = world
        .query_mut::<(&Enemy, &Vec3)>()
        .into_iter()
        .map(|(entity, (enemy, pos))| (entity, *pos, enemy.radius * enemy.scale + BULLET_RADIUS))
        .collect();
    let bombs: Vec<(hecs::Entity, Vec3)> = world
        .query_mut::<(&Bomb, &Vec3)>()
        .into_iter()
        .filter(|(_, (bomb, _))| matches!(bomb.phase, BombPhase::Idle | BombPhase::Warning))
        .map(|(entity, (_, pos))| (entity, *pos))
        .collect();

    let mut bomb_hits: Vec<hecs::Entity> = Vec::new();
    let mut kills: Vec<(hecs::Entity, Vec3)> = Vec::new();

    for (entity, (pos, bullet)) in world.query_mut::<(&mut Vec3, &PlayerBullet)>() {
        if let Some((bomb_entity, _)) = bombs
            .iter()
            .find(|(_, bomb_pos)| geom::sphere_vs_sphere(pos, BULLET_RADIUS, bomb_pos, BOMB_RADIUS))
        {
            bomb_hits.push(*bomb_entity);
            despawn_buffer.push(entity);
            continue;
        }

        *pos = *pos + bullet.direction * bullet.speed;

        if let Some(index) = covers.first_hit(pos, BULLET_RADIUS) {
            let destroyed = covers.covers[index].take_damage(BULLET_DAMAGE, *pos);
            if destroyed {
                events.push(GameEvent::CoverDestroyed { cover_index: index });
            } else {
                events.push(GameEvent::CoverDamaged {
                    cover_index: index,
                    health: covers.covers[index].health,
                });
            }
            round.record_miss();
            despawn_buffer.push(entity);
            continue;
        }

        if pos.x.abs() > PROJECTILE_BOUND_XY
            || pos.y.abs() > PROJECTILE_BOUND_XY
            || pos.z < 0.0
            || pos.z > PROJECTILE_BOUND_Z
        {
            round.record_miss();
            despawn_buffer.push(entity);
            continue;
        }

        if let Some((enemy_entity, enemy_pos, _)) = enemies
            .iter()
            .find(|(_, enemy_pos, hit_radius)| pos.distance_to(enemy_pos) < *hit_radius)
        {
            kills.push((*enemy_entity, *enemy_pos));
            despawn_buffer.push(entity);
        }
    }

    for bomb_entity in bomb_hits {
        resolve_bomb_hit(world, rng, events, bomb_entity);
    }

    for (enemy_entity, position) in kills {
        // Two bullets can claim the same enemy in one tick.
        if !world.contains(enemy_entity) {
            continue;
        }
        let _ = world.despawn(enemy_entity);
        world_setup::spawn_enemy_random(world, rng);
        round.score += 1;
        round.extend_countdown();
        effects::spawn(world, rng, position, EffectKind::EnemyDefeat);
        events.push(GameEvent::EnemyDown {
            position,
            score: round.score,
        });

        if escalation.record_elimination() {
            events.push(GameEvent::CoordinatedAttackWarning);
            let live: Vec<Vec3> = world
                .query_mut::<(&Enemy, &Vec3)>()
                .into_iter()
                .map(|(_, (_, pos))| *pos)
                .collect();
            for pos in live {
                effects::spawn(world, rng, pos, EffectKind::AttackWarning);
            }
        }
    }
}

/// One bullet hit on a bomb: bump the counter, flash, and at the hit cap
/// destroy it and respawn a replacement elsewhere.
fn resolve_bomb_hit(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    bomb_entity: hecs::Entity,
) {
    let destroyed = match world.query_one_mut::<&mut Bomb>(bomb_entity) {
        Ok(bomb) => {
            bomb.hit_count += 1;
            bomb.flash_timer = BOMB_FLASH_TICKS;
            events.push(GameEvent::BombHit {
                hits: bomb.hit_count,
            });
            bomb.hit_count >= BOMB_MAX_HITS
        }
        Err(_) => false,
    };
    if destroyed {
        let position = world
            .query_one_mut::<&Vec3>(bomb_entity)
            .map(|pos| *pos)
            .unwrap_or(Vec3::ZERO);
        let _ = world.despawn(bomb_entity);
        events.push(GameEvent::BombDestroyed { position });
        effects::spawn(world, rng, position, EffectKind::BombBlast);
        world_setup::spawn_bomb(world, rng);
    }
}
