//! Combat module
//!
//! ECS ответственность:
//! - Game state: Health, Damager, AttackArea, VampireSkill
//! - Combat rules: area damage, skill drain, death handling
//! - Events: AttackStarted, SkillActivated, DamageDealt, EntityDied, HealthChanged
//!
//! Engine ответственность:
//! - Animation playback (punch/die cues), hit VFX

use bevy::prelude::*;

pub mod damage;
pub mod events;
pub mod skill;


// Re-export основных типов
pub use damage::{
    apply_attacks, disable_behavior_on_death, emit_health_changes, AttackArea, Damager, Dead,
};
pub use events::{AttackStarted, DamageDealt, EntityDied, HealthChanged, SkillActivated};
pub use skill::{activate_vampire_skill, tick_skill_cooldowns, VampireSkill};

/// Combat Plugin
///
/// Регистрирует combat системы в FixedUpdate.
/// Порядок выполнения:
/// 1. tick_skill_cooldowns — таймеры skill
/// 2. apply_attacks — AttackStarted → area damage
/// 3. activate_vampire_skill — SkillActivated → drain + heal
/// 4. emit_health_changes — Changed<Health> → HealthChanged
/// 5. disable_behavior_on_death — уборка компонентов у мертвых
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<AttackStarted>()
            .add_event::<SkillActivated>()
            .add_event::<DamageDealt>()
            .add_event::<EntityDied>()
            .add_event::<HealthChanged>();

        // Регистрация систем в FixedUpdate
        app.add_systems(
            FixedUpdate,
            (
                tick_skill_cooldowns,
                apply_attacks,
                activate_vampire_skill,
                emit_health_changes,
                disable_behavior_on_death,
            )
                .chain(), // Последовательное выполнение
        );
    }
}
