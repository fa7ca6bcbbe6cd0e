//! Movement events

use bevy::prelude::*;

/// Event: намерение прыгнуть (jump intent)
///
/// Генерируется:
/// - Player input system (jump input)
///
/// Обрабатывается:
/// - Engine-слоем: проверяет grounded и применяет jump velocity
#[derive(Event, Debug, Clone)]
pub struct JumpIntent {
    pub entity: Entity,
}
