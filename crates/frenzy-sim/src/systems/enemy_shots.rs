//! Enemy-shot flight, expiry, and player-hit resolution.

use hecs::World;

use frenzy_arena::cover::CoverField;
use frenzy_arena::hitbox::Hitbox;
use frenzy_core::components::EnemyShot;
use frenzy_core::constants::ENEMY_SHOT_RADIUS;
use frenzy_core::events::GameEvent;
use frenzy_core::types::Vec3;

use frenzy_enemy_ai::escalation::EscalationState;

use crate::player::PlayerState;
use crate::round::RoundState;

pub fn run(
    world: &mut World,
    covers: &CoverField,
    player: &PlayerState,
    round: &mut RoundState,
    escalation: &EscalationState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<hecs::Entity>,
) {
    let hitbox = player.hitbox();
    let mut player_hits = 0u32;

    for (entity, (pos, shot)) in world.query_mut::<(&mut Vec3, &mut EnemyShot)>() {
        *pos = *pos + shot.direction * shot.speed;
        shot.age += 1;

        if shot.age >= shot.lifetime {
            despawn_buffer.push(entity);
            continue;
        }
        // Cover absorbs the shot without taking damage.
        if covers.first_hit(pos, ENEMY_SHOT_RADIUS).is_some() {
            despawn_buffer.push(entity);
            continue;
        }
        if hitbox.intersects_sphere(pos, ENEMY_SHOT_RADIUS) {
            player_hits += 1;
            despawn_buffer.push(entity);
        }
    }

    for _ in 0..player_hits {
        if escalation.volley_lethal() {
            round.deplete_life();
        } else {
            round.lose_life();
        }
        events.push(GameEvent::PlayerHit {
            life_remaining: round.life,
        });
    }
}
