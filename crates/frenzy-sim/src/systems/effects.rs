//! Particle effects and the screen-shake envelope.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use frenzy_core::components::{Effect, Particle};
use frenzy_core::constants::*;
use frenzy_core::enums::EffectKind;
use frenzy_core::types::Vec3;

/// Spawn a particle burst at `position`. Kind determines count, color
/// palette, speed scale, lifetime range, and shake envelope.
pub fn spawn(world: &mut World, rng: &mut ChaCha8Rng, position: Vec3, kind: EffectKind) {
    let (count, scale) = match kind {
        EffectKind::BombBlast => (50, 1.5),
        EffectKind::AttackWarning => (40, 1.0),
        EffectKind::EnemyDefeat => (30, 1.0),
        EffectKind::MuzzleFlash => (20, 1.0),
    };
    let (shake_intensity, shake_duration) = match kind {
        EffectKind::BombBlast => (SHAKE_BLAST_INTENSITY, SHAKE_BLAST_TICKS),
        _ => (SHAKE_DEFAULT_INTENSITY, SHAKE_DEFAULT_TICKS),
    };

    let mut particles = Vec::with_capacity(count);
    for _ in 0..count {
        let angle_h = rng.gen_range(0.0..std::f64::consts::TAU);
        let angle_v = rng.gen_range(-std::f64::consts::FRAC_PI_4..std::f64::consts::FRAC_PI_4);
        let speed = rng.gen_range(5.0..15.0) * scale;
        let velocity = Vec3::new(
            angle_h.cos() * angle_v.cos() * speed,
            angle_h.sin() * angle_v.cos() * speed,
            angle_v.sin() * speed,
        );
        let color = match kind {
            EffectKind::BombBlast => {
                [rng.gen_range(0.8..1.0), rng.gen_range(0.3..0.7), 0.1, 1.0]
            }
            EffectKind::AttackWarning => [1.0, rng.gen_range(0.0..0.3), 0.0, 1.0],
            EffectKind::MuzzleFlash => [1.0, 1.0, rng.gen_range(0.5..1.0), 1.0],
            EffectKind::EnemyDefeat => {
                [rng.gen_range(0.5..1.0), rng.gen_range(0.5..1.0), 1.0, 1.0]
            }
        };
        let size = rng.gen_range(2.0..6.0) * scale;
        let lifetime = match kind {
            EffectKind::AttackWarning => rng.gen_range(60..=120),
            EffectKind::MuzzleFlash => rng.gen_range(10..=30),
            _ => rng.gen_range(30..=80),
        };
        let offset = Vec3::new(
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-2.0..8.0),
        );
        particles.push(Particle {
            position: position + offset,
            velocity,
            color,
            size,
            age: 0,
            lifetime,
        });
    }

    world.spawn((Effect {
        kind,
        particles,
        age: 0,
        shake_intensity,
        shake_duration,
        shake_timer: 0,
    },));
}

/// Advance every effect one tick and return the summed screen-shake
/// offset. Effects despawn at max age or once all particles expire.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    despawn_buffer: &mut Vec<hecs::Entity>,
) -> Vec3 {
    let mut shake = Vec3::ZERO;

    for (entity, effect) in world.query_mut::<&mut Effect>() {
        effect.age += 1;
        effect.shake_timer += 1;

        for particle in &mut effect.particles {
            particle.position = particle.position + particle.velocity;
            particle.velocity.z += PARTICLE_GRAVITY;
            particle.age += 1;
            let fade = 1.0 / particle.lifetime as f64;
            particle.color[3] = (particle.color[3] - fade).max(0.0);
        }
        effect.particles.retain(|p| p.age < p.lifetime);

        if effect.age >= EFFECT_MAX_AGE_TICKS || effect.particles.is_empty() {
            despawn_buffer.push(entity);
            continue;
        }

        if effect.shake_timer < effect.shake_duration {
            let intensity = effect.shake_intensity
                * (1.0 - effect.shake_timer as f64 / effect.shake_duration as f64);
            shake = shake
                + Vec3::new(
                    rng.gen_range(-intensity..=intensity),
                    rng.gen_range(-intensity..=intensity),
                    rng.gen_range(-intensity / 2.0..=intensity / 2.0),
                );
        }
    }

    shake
}
