//! Snapshot builder: queries the world and engine state into a complete
//! `RoundSnapshot`. Read-only; it never modifies the world.

use hecs::World;

use frenzy_arena::cover::CoverField;
use frenzy_core::components::*;
use frenzy_core::constants::{BOMB_EXPLOSION_TICKS, COVER_DECAL_TICKS};
use frenzy_core::enums::BombPhase;
use frenzy_core::events::GameEvent;
use frenzy_core::state::*;
use frenzy_core::types::{SimTime, Vec3};

use frenzy_enemy_ai::escalation::EscalationState;

use crate::player::PlayerState;
use crate::round::RoundState;

#[allow(clippy::too_many_arguments)]
pub fn build(
    world: &World,
    time: &SimTime,
    player: &PlayerState,
    round: &RoundState,
    escalation: &EscalationState,
    covers: &CoverField,
    screen_shake: Vec3,
    events: Vec<GameEvent>,
) -> RoundSnapshot {
    RoundSnapshot {
        time: *time,
        hud: build_hud(round, escalation),
        player: build_player(player),
        enemies: build_enemies(world),
        bullets: build_bullets(world),
        enemy_shots: build_enemy_shots(world),
        covers: build_covers(covers),
        bombs: build_bombs(world),
        pickups: build_pickups(world),
        effects: build_effects(world),
        screen_shake,
        events,
    }
}

fn build_hud(round: &RoundState, escalation: &EscalationState) -> HudView {
    HudView {
        life: round.life,
        score: round.score,
        ammo: round.ammo,
        missed_shots: round.missed_shots,
        countdown_secs: round.countdown_secs,
        attack_phase: escalation.phase,
        attack_warning_ticks_left: escalation.warning_ticks_left(),
        eliminations: escalation.eliminations,
        cheat_mode: round.cheat_mode,
        first_person: round.first_person,
        game_over: round.game_over,
        round_over_reason: round.round_over_reason,
    }
}

fn build_player(player: &PlayerState) -> PlayerView {
    PlayerView {
        position: player.position,
        angle: player.angle,
        target_angle: player.target_angle,
        stance: player.stance,
        behind_cover: player.behind_cover,
        current_cover: player.current_cover,
        walking: player.walking,
        walk_clock: player.walk_clock,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Enemy, &Vec3)>()
        .iter()
        .map(|(_, (enemy, pos))| EnemyView {
            position: *pos,
            scale: enemy.scale,
            is_targeting: enemy.is_targeting,
            indicator_lit: enemy.targeting_indicator > 0,
            muzzle_flash_lit: enemy.muzzle_flash > 0,
        })
        .collect()
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    world
        .query::<(&PlayerBullet, &Vec3)>()
        .iter()
        .map(|(_, (bullet, pos))| BulletView {
            position: *pos,
            direction: bullet.direction,
        })
        .collect()
}

fn build_enemy_shots(world: &World) -> Vec<EnemyShotView> {
    world
        .query::<(&EnemyShot, &Vec3)>()
        .iter()
        .map(|(_, (shot, pos))| EnemyShotView {
            position: *pos,
            direction: shot.direction,
        })
        .collect()
}

fn build_covers(covers: &CoverField) -> Vec<CoverView> {
    covers
        .covers
        .iter()
        .map(|cover| CoverView {
            position: cover.position,
            kind: cover.kind,
            health: cover.health,
            max_health: cover.max_health,
            destroyed: cover.destroyed,
            decals: cover
                .decals
                .iter()
                .map(|decal| DecalView {
                    position: decal.position,
                    fade: decal.ticks_left as f64 / COVER_DECAL_TICKS as f64,
                })
                .collect(),
        })
        .collect()
}

fn build_bombs(world: &World) -> Vec<BombView> {
    world
        .query::<(&Bomb, &Vec3)>()
        .iter()
        .map(|(_, (bomb, pos))| BombView {
            position: *pos,
            phase: bomb.phase,
            hit_count: bomb.hit_count,
            blink_on: bomb.blink_timer < bomb.blink_interval,
            flashing: bomb.flash_timer > 0,
            explosion_progress: if bomb.phase == BombPhase::Exploding {
                bomb.explosion_timer as f64 / BOMB_EXPLOSION_TICKS as f64
            } else {
                0.0
            },
        })
        .collect()
}

fn build_pickups(world: &World) -> Vec<PickupView> {
    world
        .query::<(&Pickup, &Vec3)>()
        .iter()
        .map(|(_, (pickup, pos))| PickupView {
            position: *pos,
            kind: pickup.kind,
            rotation: pickup.rotation,
            pulse_clock: pickup.pulse_clock,
        })
        .collect()
}

fn build_effects(world: &World) -> Vec<EffectView> {
    world
        .query::<&Effect>()
        .iter()
        .map(|(_, effect)| EffectView {
            kind: effect.kind,
            particles: effect
                .particles
                .iter()
                .map(|particle| ParticleView {
                    position: particle.position,
                    color: particle.color,
                    size: particle.size,
                })
                .collect(),
        })
        .collect()
}
