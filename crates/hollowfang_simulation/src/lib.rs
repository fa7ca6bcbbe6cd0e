//! HOLLOWFANG Gameplay Core
//!
//! ECS-симуляция геймплея на Bevy 0.16 (strategic layer)
//!
//! HYBRID ARCHITECTURE:
//! - ECS = gameplay state (patrol state machine, combat rules, health, UI-facing state)
//! - Engine = tactical layer (physics solving, rendering, animation playback)
//!
//! Ядро публикует intents (MoveIntent, JumpIntent, AnimationCues, HealthBar state)
//! и потребляет injected state (InputSnapshot, Grounded, patrol routes).

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod combat;
pub mod components;
pub mod items;
pub mod logger;
pub mod movement;
pub mod patrol;
pub mod player;
pub mod ui;

// Re-export базовых типов для удобства
pub use combat::{
    AttackArea, AttackStarted, CombatPlugin, DamageDealt, Damager, Dead, EntityDied,
    HealthChanged, SkillActivated, VampireSkill,
};
pub use components::*;
pub use items::{ItemKind, ItemPickedUp, ItemsPlugin, Wallet, PICKUP_RADIUS};
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use movement::{JumpIntent, MovementPlugin};
pub use patrol::{
    move_towards, CancelToken, PatrolPlugin, PatrolRoute, PatrolRouteConfig, PatrolRouteError,
    PatrolState, ARRIVAL_THRESHOLD,
};
pub use player::{AttackDelay, InputSnapshot, PlayerPlugin, MAX_ATTACK_DELAY};
pub use ui::{HealthBar, UiPlugin};

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick (легче считать интервалы)
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            // Детерминистичный RNG (не перетирает seed от create_headless_app)
            .init_resource::<DeterministicRng>()
            // Подсистемы (ECS strategic layer)
            .add_plugins((PatrolPlugin, PlayerPlugin, CombatPlugin, ItemsPlugin, UiPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

impl Default for DeterministicRng {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

/// Прогоняет ровно один fixed tick (headless driver)
///
/// Обходит real-time аккумуляцию: Time<Fixed> продвигается на timestep вручную,
/// затем выполняется FixedUpdate. Нужен тестам и демо, где количество тиков
/// должно быть точным, а не зависеть от wall clock.
pub fn run_fixed_tick(app: &mut App) {
    let timestep = app.world().resource::<Time<Fixed>>().timestep();
    app.world_mut()
        .resource_mut::<Time<Fixed>>()
        .advance_by(timestep);
    app.world_mut().run_schedule(FixedUpdate);
}

/// Snapshot мира для сравнения детерминизма
/// (упрощённая версия: Debug-сериализация компонентов, сортировка по Entity ID)
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
