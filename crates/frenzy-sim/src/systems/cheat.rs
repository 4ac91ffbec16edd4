//! Cheat mode: auto-rotation and auto-fire at aligned enemies.
//!
//! The aim angle sweeps one degree per tick, bypassing smooth rotation.
//! A bullet fires when the gun lines up with any enemy, rate-limited to
//! one shot per interval, through the same ammo accounting as manual fire.

use hecs::World;

use frenzy_core::components::{Enemy, PlayerBullet};
use frenzy_core::constants::*;
use frenzy_core::events::GameEvent;
use frenzy_core::types::Vec3;

use crate::player::PlayerState;
use crate::round::RoundState;

pub fn run(
    world: &mut World,
    player: &mut PlayerState,
    round: &mut RoundState,
    fire_cooldown: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    player.angle = (player.angle + CHEAT_ROTATE_DEG_PER_TICK).rem_euclid(360.0);
    player.target_angle = player.angle;

    if *fire_cooldown > 0 {
        *fire_cooldown -= 1;
    }

    let direction = player.gun_direction();
    let mut aligned = false;
    for (_, (_, pos)) in world.query_mut::<(&Enemy, &Vec3)>() {
        let to_enemy = Vec3::new(
            pos.x - player.position.x,
            pos.y - player.position.y,
            0.0,
        )
        .normalized();
        let dot = direction.dot(&to_enemy);
        if dot > CHEAT_AIM_DOT_MIN
            && dot.clamp(-1.0, 1.0).acos().to_degrees() < CHEAT_AIM_ANGLE_MAX
        {
            aligned = true;
            break;
        }
    }

    // An empty magazine just skips the shot; no per-tick refusal spam.
    if aligned && *fire_cooldown == 0 && round.consume_ammo() {
        world.spawn((
            player.gun_tip(),
            PlayerBullet {
                direction,
                speed: BULLET_SPEED,
            },
        ));
        events.push(GameEvent::ShotFired);
        *fire_cooldown = CHEAT_FIRE_INTERVAL_TICKS;
    }
}
