//! Enemy patrol module
//!
//! Кооперативный patrol-цикл поверх waypoint-маршрута: один шаг движения
//! за FixedUpdate тик, polled cancellation через внешний токен.
//!
//! Порядок на тик (patrol_step):
//! 1. poll cancel token → Cancelled
//! 2. Idle → advance cursor, начало движения
//! 3. шаг move_towards к waypoint под cursor, по достижении — advance

use bevy::prelude::*;

pub mod route;
pub mod systems;


// Re-export основных типов
pub use route::{CancelToken, PatrolRoute, PatrolRouteConfig, PatrolRouteError, PatrolState};
pub use systems::{move_towards, patrol_step, ARRIVAL_THRESHOLD};

/// Patrol Plugin
///
/// Регистрирует patrol системы в FixedUpdate для детерминизма.
pub struct PatrolPlugin;

impl Plugin for PatrolPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, systems::patrol_step);
    }
}
