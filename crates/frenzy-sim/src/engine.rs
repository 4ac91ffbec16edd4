//! Simulation engine — the round controller.
//!
//! `SimulationEngine` owns the hecs ECS world, the player, the cover
//! field, and round state; it processes queued commands at the tick
//! boundary, runs all systems in a strict order, and produces
//! `RoundSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use frenzy_arena::cover::CoverField;
use frenzy_core::commands::PlayerCommand;
use frenzy_core::components::{Enemy, PlayerBullet};
use frenzy_core::constants::*;
use frenzy_core::enums::RoundOverReason;
use frenzy_core::events::GameEvent;
use frenzy_core::state::RoundSnapshot;
use frenzy_core::types::{SimTime, Vec3};

use frenzy_enemy_ai::escalation::EscalationState;

use crate::player::PlayerState;
use crate::round::RoundState;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all round state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    player: PlayerState,
    round: RoundState,
    escalation: EscalationState,
    covers: CoverField,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    screen_shake: Vec3,
    bomb_spawn_timer: u32,
    pickup_spawn_timer: u32,
    cheat_fire_cooldown: u32,
}

impl SimulationEngine {
    /// Create a new engine with a populated arena, ready to tick.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            player: PlayerState::new(),
            round: RoundState::new(),
            escalation: EscalationState::default(),
            covers: CoverField::standard_arena(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            screen_shake: Vec3::ZERO,
            bomb_spawn_timer: 0,
            pickup_spawn_timer: 0,
            cheat_fire_cooldown: 0,
        };
        world_setup::setup_round(&mut engine.world, &mut engine.rng);
        log::info!("simulation started with seed {}", config.seed);
        engine
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. After the round ends only explosions and particle
    /// effects continue animating.
    pub fn tick(&mut self) -> RoundSnapshot {
        self.process_commands();

        if self.round.game_over {
            systems::bombs::animate_explosions(&mut self.world, &mut self.despawn_buffer);
            self.screen_shake =
                systems::effects::run(&mut self.world, &mut self.rng, &mut self.despawn_buffer);
            self.flush_despawns();
        } else {
            self.run_systems();
        }
        self.time.advance();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            &self.time,
            &self.player,
            &self.round,
            &self.escalation,
            &self.covers,
            self.screen_shake,
            events,
        )
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn covers(&self) -> &CoverField {
        &self.covers
    }

    /// Process all queued commands. While the round is over only the
    /// reset and the pure mode toggles apply.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        if self.round.game_over {
            match command {
                PlayerCommand::ResetRound => self.reset_round(),
                PlayerCommand::ToggleCheatMode => {
                    self.round.cheat_mode = !self.round.cheat_mode;
                }
                PlayerCommand::ToggleCameraMode => {
                    self.round.first_person = !self.round.first_person;
                }
                _ => {}
            }
            return;
        }

        match command {
            PlayerCommand::SetMovementIntent { direction, pressed } => {
                self.player.set_intent(direction, pressed);
            }
            PlayerCommand::AimAdjust { degrees } => self.player.adjust_aim(degrees),
            PlayerCommand::SetAimAngle { degrees } => self.player.set_aim(degrees),
            PlayerCommand::Fire => self.fire_bullet(),
            PlayerCommand::ToggleCrouch => self.player.toggle_crouch(),
            PlayerCommand::ToggleCheatMode => {
                self.round.cheat_mode = !self.round.cheat_mode;
            }
            PlayerCommand::ToggleCameraMode => {
                self.round.first_person = !self.round.first_person;
            }
            PlayerCommand::ResetRound => self.reset_round(),
        }
    }

    /// Spawn one bullet from the gun tip; refused on an empty magazine.
    fn fire_bullet(&mut self) {
        if !self.round.consume_ammo() {
            self.events.push(GameEvent::OutOfAmmo);
            return;
        }
        let direction = self.player.gun_direction();
        self.world.spawn((
            self.player.gun_tip(),
            PlayerBullet {
                direction,
                speed: BULLET_SPEED,
            },
        ));
        self.events.push(GameEvent::ShotFired);
    }

    /// Restore every subsystem to its initial state. Mode flags persist.
    fn reset_round(&mut self) {
        self.world.clear();
        self.covers = CoverField::standard_arena();
        self.player = PlayerState::new();
        self.round.reset();
        self.escalation = EscalationState::default();
        self.time = SimTime::default();
        self.screen_shake = Vec3::ZERO;
        self.bomb_spawn_timer = 0;
        self.pickup_spawn_timer = 0;
        self.cheat_fire_cooldown = 0;
        self.despawn_buffer.clear();
        world_setup::setup_round(&mut self.world, &mut self.rng);
        log::info!("round reset");
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Player rotation and movement (cheat mode sweeps the aim).
        if self.round.cheat_mode {
            systems::cheat::run(
                &mut self.world,
                &mut self.player,
                &mut self.round,
                &mut self.cheat_fire_cooldown,
                &mut self.events,
            );
        } else {
            self.player.update_rotation();
        }
        let blockers: Vec<(Vec3, f64)> = self
            .world
            .query_mut::<(&Enemy, &Vec3)>()
            .into_iter()
            .map(|(_, (enemy, pos))| (*pos, enemy.radius * enemy.scale))
            .collect();
        self.player.update_movement(&self.covers, &blockers);

        // 2. Environment: decals, pickups, bomb timers, bomb population.
        self.covers.tick();
        systems::pickups::run_spawner(&mut self.world, &mut self.rng, &mut self.pickup_spawn_timer);
        systems::pickups::animate(&mut self.world);
        systems::bombs::run_timers(&mut self.world, &mut self.despawn_buffer);
        systems::bombs::run_spawner(&mut self.world, &mut self.rng, &mut self.bomb_spawn_timer);

        // 3. Escalation advance; the volley fires on the Warning edge.
        systems::enemies::run_escalation(
            &mut self.world,
            &mut self.escalation,
            &mut self.rng,
            &mut self.events,
        );

        // 4. Player cover status, against current enemy positions.
        let enemy_positions: Vec<Vec3> = self
            .world
            .query_mut::<(&Enemy, &Vec3)>()
            .into_iter()
            .map(|(_, (_, pos))| *pos)
            .collect();
        self.player
            .recompute_cover_status(&self.covers, &enemy_positions);

        // 5. Player bullets: bombs first, then cover, boundary, enemies.
        systems::bullets::run(
            &mut self.world,
            &mut self.covers,
            &mut self.round,
            &mut self.escalation,
            &mut self.rng,
            &mut self.events,
            &mut self.despawn_buffer,
        );

        // 6. Enemies: targeting, firing, melee; then their shots in flight.
        systems::enemies::run(
            &mut self.world,
            &self.player,
            &self.covers,
            &mut self.round,
            &mut self.rng,
            &mut self.events,
        );
        systems::enemy_shots::run(
            &mut self.world,
            &self.covers,
            &self.player,
            &mut self.round,
            &self.escalation,
            &mut self.events,
            &mut self.despawn_buffer,
        );

        // 7. Pickup collection.
        systems::pickups::run_collection(
            &mut self.world,
            &self.player,
            &mut self.round,
            &mut self.events,
            &mut self.despawn_buffer,
        );

        // 8. Bomb contact detonation ends the round outright.
        if systems::bombs::run_player_contact(
            &mut self.world,
            &mut self.rng,
            &self.player,
            &mut self.events,
        ) {
            self.end_round(RoundOverReason::BombContact);
        }

        // 9. Round-over check for life and missed-shot limits.
        self.check_round_over();

        // 10. Effects and screen shake.
        self.screen_shake =
            systems::effects::run(&mut self.world, &mut self.rng, &mut self.despawn_buffer);

        // 11. Countdown.
        if self.round.tick_countdown() {
            self.end_round(RoundOverReason::TimeExpired);
        }

        self.flush_despawns();
    }

    fn check_round_over(&mut self) {
        if self.round.game_over {
            return;
        }
        if self.round.life == 0 {
            self.end_round(RoundOverReason::LifeDepleted);
        } else if self.round.missed_shots >= ROUND_MAX_MISSED_SHOTS {
            self.end_round(RoundOverReason::TooManyMisses);
        }
    }

    fn end_round(&mut self, reason: RoundOverReason) {
        if self.round.end(reason) {
            self.player.lie_down();
            self.events.push(GameEvent::RoundOver { reason });
            log::debug!("round over: {reason:?}");
        }
    }

    fn flush_despawns(&mut self) {
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
    }

    // --- Test scaffolding ---

    /// Remove every bomb (tests that must not trip over random placement).
    #[cfg(test)]
    pub fn clear_bombs(&mut self) {
        let bombs: Vec<hecs::Entity> = self
            .world
            .query_mut::<&frenzy_core::components::Bomb>()
            .into_iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in bombs {
            let _ = self.world.despawn(entity);
        }
    }

    #[cfg(test)]
    pub fn spawn_enemy_at(&mut self, position: Vec3) {
        world_setup::spawn_enemy(&mut self.world, &mut self.rng, position);
    }

    #[cfg(test)]
    pub fn spawn_bomb_at(&mut self, position: Vec3) {
        self.world.spawn((
            position,
            frenzy_core::components::Bomb {
                phase: frenzy_core::enums::BombPhase::Idle,
                hit_count: 0,
                lifetime_timer: 0,
                blink_timer: 0,
                blink_interval: BOMB_BLINK_IDLE,
                explosion_timer: 0,
                flash_timer: 0,
            },
        ));
    }

    #[cfg(test)]
    pub fn spawn_pickup_at(&mut self, position: Vec3, kind: frenzy_core::enums::PickupKind) {
        self.world.spawn((
            position,
            frenzy_core::components::Pickup {
                kind,
                collected: false,
                rotation: 0.0,
                pulse_clock: 0.0,
            },
        ));
    }

    /// Push the elimination counter to the threshold, starting a
    /// coordinated-attack cycle.
    #[cfg(test)]
    pub fn trigger_escalation(&mut self) {
        for _ in 0..ATTACK_ELIMINATION_THRESHOLD {
            self.escalation.record_elimination();
        }
    }
}
