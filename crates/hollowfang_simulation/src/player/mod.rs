//! Player module — input-driven координатор
//!
//! Каждый тик: накопление attack delay → движение → прыжок → атака → skill.
//! Input не опрашивается внутри ядра: host пишет InputSnapshot resource
//! до шага симуляции (dependency injection).

use bevy::prelude::*;

pub mod input;
pub mod systems;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod systems_tests;

// Re-export основных типов
pub use input::InputSnapshot;
pub use systems::{AttackDelay, MAX_ATTACK_DELAY};

/// Player Plugin
///
/// Регистрирует player системы в FixedUpdate.
/// Порядок выполнения:
/// 1. tick_attack_delay — накопление delay (saturating)
/// 2. player_move — ось → MoveIntent + speed cue
/// 3. player_jump — JumpIntent + grounded cue
/// 4. player_attack — gating (input + grounded + delay) → AttackStarted
/// 5. player_skill — gating (input + can_activate) → SkillActivated
/// 6. deactivate_player_on_death — die cue, снятие управления
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputSnapshot>()
            .add_event::<crate::movement::JumpIntent>();

        app.add_systems(
            FixedUpdate,
            (
                systems::tick_attack_delay,
                systems::player_move,
                systems::player_jump,
                systems::player_attack,
                systems::player_skill,
                systems::deactivate_player_on_death,
            )
                .chain(), // Последовательное выполнение для детерминизма
        );
    }
}
