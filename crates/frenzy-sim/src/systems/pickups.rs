//! Pickup spawning, animation, and collection.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use frenzy_core::components::Pickup;
use frenzy_core::constants::*;
use frenzy_core::enums::PickupKind;
use frenzy_core::events::GameEvent;
use frenzy_core::types::Vec3;

use crate::player::PlayerState;
use crate::round::RoundState;
use crate::world_setup;

pub fn run_spawner(world: &mut World, rng: &mut ChaCha8Rng, spawn_timer: &mut u32) {
    *spawn_timer += 1;
    if *spawn_timer >= PICKUP_SPAWN_INTERVAL_TICKS {
        *spawn_timer = 0;
        world_setup::spawn_pickup(world, rng);
    }
}

pub fn animate(world: &mut World) {
    for (_, pickup) in world.query_mut::<&mut Pickup>() {
        pickup.rotation = (pickup.rotation + PICKUP_SPIN_DEG_PER_TICK) % 360.0;
        pickup.pulse_clock += PICKUP_PULSE_CLOCK_STEP;
    }
}

/// Collect pickups near the player's torso. `collected` is terminal; the
/// entity despawns after the scan.
pub fn run_collection(
    world: &mut World,
    player: &PlayerState,
    round: &mut RoundState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<hecs::Entity>,
) {
    let torso = player.torso_center();

    let mut collected: Vec<(hecs::Entity, PickupKind)> = Vec::new();
    for (entity, (pickup, pos)) in world.query_mut::<(&mut Pickup, &Vec3)>() {
        if pickup.collected {
            continue;
        }
        if pos.distance_to(&torso) < PICKUP_RADIUS + PICKUP_COLLECT_TORSO_RADIUS {
            pickup.collected = true;
            collected.push((entity, pickup.kind));
        }
    }

    for (entity, kind) in collected {
        match kind {
            PickupKind::Health => round.add_life(),
            PickupKind::Ammo => round.add_ammo(),
            // Announce-only kinds; no stat change.
            PickupKind::Speed | PickupKind::Damage | PickupKind::Shield => {}
        }
        events.push(GameEvent::PickupCollected { kind });
        despawn_buffer.push(entity);
    }
}
