//! Entity spawn factories for setting up the arena world.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use frenzy_core::components::{Bomb, Enemy, Pickup};
use frenzy_core::constants::*;
use frenzy_core::enums::{BombPhase, PickupKind};
use frenzy_core::types::Vec3;

/// Populate a fresh round: the five fixed enemies plus the initial bombs.
pub fn setup_round(world: &mut World, rng: &mut ChaCha8Rng) {
    for position in initial_enemy_positions() {
        spawn_enemy(world, rng, position);
    }
    for _ in 0..BOMB_INITIAL_COUNT {
        spawn_bomb(world, rng);
    }
}

/// The fixed starting spawns: one enemy per corner plus one due north.
pub fn initial_enemy_positions() -> [Vec3; 5] {
    [
        Vec3::new(-300.0, 300.0, ENEMY_SPAWN_Z),
        Vec3::new(300.0, 300.0, ENEMY_SPAWN_Z),
        Vec3::new(-300.0, -300.0, ENEMY_SPAWN_Z),
        Vec3::new(300.0, -300.0, ENEMY_SPAWN_Z),
        Vec3::new(0.0, 360.0, ENEMY_SPAWN_Z),
    ]
}

/// Spawn one enemy with randomized accuracy, firing interval, and pulse
/// phase.
pub fn spawn_enemy(world: &mut World, rng: &mut ChaCha8Rng, position: Vec3) -> hecs::Entity {
    let pulse_clock = rng.gen_range(0.0..std::f64::consts::TAU);
    let enemy = Enemy {
        original_position: position,
        radius: ENEMY_RADIUS,
        pulse_clock,
        scale: ENEMY_PULSE_BASE + ENEMY_PULSE_AMPLITUDE * pulse_clock.sin(),
        accuracy: rng.gen_range(ENEMY_ACCURACY_MIN..=ENEMY_ACCURACY_MAX),
        firing_interval: rng.gen_range(ENEMY_FIRING_INTERVAL_MIN..=ENEMY_FIRING_INTERVAL_MAX),
        firing_cooldown: 0,
        is_targeting: false,
        target_position: None,
        targeting_indicator: 0,
        muzzle_flash: 0,
    };
    world.spawn((position, enemy))
}

/// A fresh spawn cell on the enemy grid.
pub fn random_enemy_position(rng: &mut ChaCha8Rng) -> Vec3 {
    let grid_x = rng.gen_range(-ENEMY_SPAWN_CELL_RANGE..=ENEMY_SPAWN_CELL_RANGE);
    let grid_y = rng.gen_range(-ENEMY_SPAWN_CELL_RANGE..=ENEMY_SPAWN_CELL_RANGE);
    Vec3::new(
        grid_x as f64 * GRID_CELL,
        grid_y as f64 * GRID_CELL,
        ENEMY_SPAWN_Z,
    )
}

/// Replacement enemy at a random grid cell.
pub fn spawn_enemy_random(world: &mut World, rng: &mut ChaCha8Rng) -> hecs::Entity {
    let position = random_enemy_position(rng);
    spawn_enemy(world, rng, position)
}

/// Armed bomb at a random cell on the bomb grid.
pub fn spawn_bomb(world: &mut World, rng: &mut ChaCha8Rng) -> hecs::Entity {
    let grid_x = rng.gen_range(-BOMB_SPAWN_CELL_RANGE..=BOMB_SPAWN_CELL_RANGE);
    let grid_y = rng.gen_range(-BOMB_SPAWN_CELL_RANGE..=BOMB_SPAWN_CELL_RANGE);
    let position = Vec3::new(
        grid_x as f64 * BOMB_SPAWN_CELL,
        grid_y as f64 * BOMB_SPAWN_CELL,
        BOMB_SPAWN_Z,
    );
    world.spawn((
        position,
        Bomb {
            phase: BombPhase::Idle,
            hit_count: 0,
            lifetime_timer: 0,
            blink_timer: 0,
            blink_interval: BOMB_BLINK_IDLE,
            explosion_timer: 0,
            flash_timer: 0,
        },
    ))
}

/// Pickup of a uniformly random kind at a random cell.
pub fn spawn_pickup(world: &mut World, rng: &mut ChaCha8Rng) -> hecs::Entity {
    let kind = match rng.gen_range(0..5) {
        0 => PickupKind::Health,
        1 => PickupKind::Speed,
        2 => PickupKind::Damage,
        3 => PickupKind::Shield,
        _ => PickupKind::Ammo,
    };
    let grid_x = rng.gen_range(-PICKUP_SPAWN_CELL_RANGE..=PICKUP_SPAWN_CELL_RANGE);
    let grid_y = rng.gen_range(-PICKUP_SPAWN_CELL_RANGE..=PICKUP_SPAWN_CELL_RANGE);
    let position = Vec3::new(
        grid_x as f64 * GRID_CELL,
        grid_y as f64 * GRID_CELL,
        PICKUP_SPAWN_Z,
    );
    world.spawn((
        position,
        Pickup {
            kind,
            collected: false,
            rotation: 0.0,
            pulse_clock: 0.0,
        },
    ))
}
