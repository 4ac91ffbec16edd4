//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). One tick per rendered frame.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena bounds ---

/// Projectiles deactivate beyond this |x| / |y|.
pub const PROJECTILE_BOUND_XY: f64 = 650.0;

/// Projectiles deactivate below z = 0 or above this altitude.
pub const PROJECTILE_BOUND_Z: f64 = 200.0;

/// The player may not move to |x| or |y| at or beyond this.
pub const PLAYER_BOUND_XY: f64 = 540.0;

/// Arena floor grid cell size (spawn positions snap to this).
pub const GRID_CELL: f64 = 60.0;

// --- Player ---

/// Player collision radius for movement rejection.
pub const PLAYER_RADIUS: f64 = 20.0;

/// World units moved per tick per held movement key.
pub const PLAYER_MOVE_SPEED: f64 = 4.0;

/// Standing eye/base height.
pub const PLAYER_STAND_HEIGHT: f64 = 30.0;

/// Crouching height.
pub const PLAYER_CROUCH_HEIGHT: f64 = 15.0;

/// Smooth rotation rate (degrees per tick).
pub const PLAYER_ROTATION_RATE: f64 = 8.0;

/// Remaining angular difference below which rotation snaps to target.
pub const PLAYER_ROTATION_SNAP: f64 = 1.0;

/// Body turn increment (degrees).
pub const PLAYER_BODY_TURN_DEG: f64 = 20.0;

/// Fine aim increment (degrees).
pub const PLAYER_AIM_ADJUST_DEG: f64 = 5.0;

/// Head hitbox radius.
pub const PLAYER_HEAD_RADIUS: f64 = 4.0;

/// Torso hitbox full width (x and y extent of the box test).
pub const PLAYER_TORSO_WIDTH: f64 = 6.0;

/// Torso hitbox full height (z extent of the box test).
pub const PLAYER_TORSO_HEIGHT: f64 = 12.0;

/// Bullet spawn distance in front of the player.
pub const GUN_TIP_OFFSET: f64 = 30.0;

/// Walk animation clock advance per moving tick.
pub const WALK_CYCLE_SPEED: f64 = 0.2;

// --- Detection modifiers (multiplicative, applied to enemy detection range) ---

pub const DETECTION_MOD_CROUCHING: f64 = 0.7;
pub const DETECTION_MOD_LYING: f64 = 0.5;
pub const DETECTION_MOD_BEHIND_COVER: f64 = 0.3;

// --- Player bullets ---

pub const BULLET_SPEED: f64 = 15.0;
pub const BULLET_RADIUS: f64 = 8.0;

/// Damage dealt to cover per bullet hit.
pub const BULLET_DAMAGE: f64 = 25.0;

// --- Enemy shots ---

pub const ENEMY_SHOT_SPEED: f64 = 8.0;
pub const ENEMY_SHOT_RADIUS: f64 = 3.0;

/// Enemy shots expire after this many ticks regardless of collision.
pub const ENEMY_SHOT_LIFETIME_TICKS: u32 = 300;

// --- Enemies ---

pub const ENEMY_RADIUS: f64 = 15.0;
pub const ENEMY_DETECTION_RANGE: f64 = 400.0;
pub const ENEMY_FIRING_RANGE: f64 = 350.0;

/// Per-enemy accuracy drawn uniformly from this range at spawn.
pub const ENEMY_ACCURACY_MIN: f64 = 0.3;
pub const ENEMY_ACCURACY_MAX: f64 = 0.8;

/// Per-enemy base firing interval drawn uniformly from this range (ticks).
pub const ENEMY_FIRING_INTERVAL_MIN: i32 = 60;
pub const ENEMY_FIRING_INTERVAL_MAX: i32 = 180;

/// Symmetric jitter added to the cooldown after each shot (ticks).
pub const ENEMY_COOLDOWN_JITTER: i32 = 30;

/// Base spread factor: spread = (1 - accuracy) * this / penalty.
pub const ENEMY_SPREAD_FACTOR: f64 = 0.5;

/// Accuracy penalty multipliers (lower penalty widens the spread cone).
pub const ACCURACY_PENALTY_CROUCHING: f64 = 0.8;
pub const ACCURACY_PENALTY_BEHIND_COVER: f64 = 0.6;

/// Ticks the targeting indicator stays lit after a detection.
pub const ENEMY_TARGETING_INDICATOR_TICKS: i32 = 30;

/// Ticks the muzzle flash stays lit after a shot.
pub const ENEMY_MUZZLE_FLASH_TICKS: i32 = 10;

/// Pulse animation: scale = PULSE_BASE + PULSE_AMPLITUDE * sin(clock).
pub const ENEMY_PULSE_BASE: f64 = 0.7;
pub const ENEMY_PULSE_AMPLITUDE: f64 = 0.3;
pub const ENEMY_PULSE_CLOCK_STEP: f64 = 0.1;

/// Contact range at which an enemy lands a melee hit.
pub const ENEMY_MELEE_RANGE: f64 = 40.0;

/// Enemy respawn cell range: GRID_CELL * [-9, 9] on x and y.
pub const ENEMY_SPAWN_CELL_RANGE: i32 = 9;

/// Spawn altitude for enemies.
pub const ENEMY_SPAWN_Z: f64 = 25.0;

// --- Cover ---

pub const COVER_MAX_HEALTH: f64 = 100.0;

/// Ticks a damage decal stays visible.
pub const COVER_DECAL_TICKS: u32 = 60;

/// Expansion margin for the sampled occlusion test.
pub const OCCLUSION_MARGIN: f64 = 10.0;

// --- Bombs ---

pub const BOMB_RADIUS: f64 = 20.0;

/// Ticks in Idle before a bomb enters the Warning phase.
pub const BOMB_WARNING_DELAY_TICKS: u32 = 180;

/// Ticks the explosion animation runs before removal.
pub const BOMB_EXPLOSION_TICKS: u32 = 60;

/// Bullet hits required to destroy a bomb.
pub const BOMB_MAX_HITS: u32 = 3;

/// Ticks the hit flash stays lit.
pub const BOMB_FLASH_TICKS: u32 = 10;

/// Blink interval in Idle / Warning phase (ticks per half-cycle).
pub const BOMB_BLINK_IDLE: u32 = 10;
pub const BOMB_BLINK_WARNING: u32 = 5;

/// Interval between population-controller spawns (ticks).
pub const BOMB_SPAWN_INTERVAL_TICKS: u32 = 600;

/// Maximum concurrent live bombs.
pub const BOMB_MAX_COUNT: usize = 5;

/// Bombs placed at round start.
pub const BOMB_INITIAL_COUNT: usize = 3;

/// Bomb spawn cell size and range: BOMB_SPAWN_CELL * [-6, 6].
pub const BOMB_SPAWN_CELL: f64 = 80.0;
pub const BOMB_SPAWN_CELL_RANGE: i32 = 6;
pub const BOMB_SPAWN_Z: f64 = 20.0;

/// Torso contact radius used for the bomb player-contact test.
pub const BOMB_TORSO_CONTACT_RADIUS: f64 = 10.0;

// --- Pickups ---

pub const PICKUP_RADIUS: f64 = 20.0;

/// Interval between pickup spawns (ticks).
pub const PICKUP_SPAWN_INTERVAL_TICKS: u32 = 300;

/// Pickup spawn cell range: GRID_CELL * [-8, 8].
pub const PICKUP_SPAWN_CELL_RANGE: i32 = 8;
pub const PICKUP_SPAWN_Z: f64 = 40.0;

/// Torso proximity required to collect a pickup.
pub const PICKUP_COLLECT_TORSO_RADIUS: f64 = 15.0;

pub const PICKUP_SPIN_DEG_PER_TICK: f64 = 2.0;
pub const PICKUP_PULSE_CLOCK_STEP: f64 = 0.1;

// --- Round ---

pub const ROUND_START_LIFE: u32 = 5;
pub const ROUND_MAX_LIFE: u32 = 10;
pub const ROUND_START_AMMO: u32 = 30;
pub const AMMO_PICKUP_ROUNDS: u32 = 5;
pub const ROUND_MAX_MISSED_SHOTS: u32 = 10;

/// Countdown timer start and cap (seconds).
pub const ROUND_COUNTDOWN_SECS: f64 = 30.0;

/// Seconds added to the countdown per enemy kill (clamped to the cap).
pub const KILL_TIME_BONUS_SECS: f64 = 5.0;

// --- Coordinated attack ---

/// Eliminations required to trigger the warning phase.
pub const ATTACK_ELIMINATION_THRESHOLD: u32 = 5;

/// Warning phase duration (ticks) before the volley.
pub const ATTACK_WARNING_TICKS: u32 = 120;

/// Settle duration (ticks) after the volley before returning to normal.
pub const ATTACK_SETTLE_TICKS: u32 = 30;

/// Accuracy penalty applied to volley shots (near-perfect aim).
pub const ATTACK_VOLLEY_PENALTY: f64 = 0.1;

// --- Cheat mode ---

/// Auto-rotate rate while cheat mode is on (degrees per tick).
pub const CHEAT_ROTATE_DEG_PER_TICK: f64 = 1.0;

/// Minimum ticks between cheat-mode auto shots.
pub const CHEAT_FIRE_INTERVAL_TICKS: u32 = 30;

/// Horizontal dot-product alignment required for a cheat shot.
pub const CHEAT_AIM_DOT_MIN: f64 = 0.98;

/// Angular alignment required for a cheat shot (degrees).
pub const CHEAT_AIM_ANGLE_MAX: f64 = 5.0;

// --- Particle effects ---

/// Downward velocity added to every particle each tick.
pub const PARTICLE_GRAVITY: f64 = -0.5;

/// An effect despawns at this age even if particles remain.
pub const EFFECT_MAX_AGE_TICKS: u32 = 120;

/// Screen shake envelope for bomb blasts.
pub const SHAKE_BLAST_INTENSITY: f64 = 15.0;
pub const SHAKE_BLAST_TICKS: u32 = 30;

/// Screen shake envelope for all other effects.
pub const SHAKE_DEFAULT_INTENSITY: f64 = 8.0;
pub const SHAKE_DEFAULT_TICKS: u32 = 15;
