//! Movement системы: headless интеграция MoveIntent
//!
//! В engine-hosted режиме физику применяет engine (MoveIntent → velocity,
//! collision, gravity). Headless режим (тесты, демо) интегрирует intent
//! напрямую в Position — без коллизий и гравитации.

use bevy::prelude::*;

use crate::components::{MoveIntent, MovementSpeed, Position};

pub mod events;

pub use events::JumpIntent;

/// Система: прямая интеграция MoveIntent → Position (headless)
pub fn integrate_move_intent(
    mut query: Query<(&MoveIntent, &MovementSpeed, &mut Position)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (intent, speed, mut position) in query.iter_mut() {
        let axis = intent.horizontal.clamp(-1.0, 1.0);
        if axis.abs() > f32::EPSILON {
            position.0.x += axis * speed.speed * delta;
        }
    }
}

/// Plugin для headless режима (без engine-физики)
///
/// Не входит в SimulationPlugin: engine-hosted сборки применяют
/// MoveIntent сами.
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, integrate_move_intent);
    }
}
