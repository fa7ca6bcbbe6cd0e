//! Player control marker component
//!
//! Отмечает entity которым управляет игрок через input (в отличие от AI).

use bevy::prelude::Component;

/// Marker component для player-controlled entity
///
/// Акторы БЕЗ этого компонента управляются patrol/AI системами.
/// Акторы С этим компонентом получают команды от player input systems.
///
/// # Архитектурная заметка
/// - Patrol системы работают по своим компонентам (PatrolRoute/PatrolState)
/// - Input системы используют `With<Player>` filter (только player-controlled акторы)
///
/// # Single-player
/// В single-player режиме обычно только один entity имеет этот компонент.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
