//! Movement компоненты: позиция, скорость, команды перемещения

use bevy::prelude::*;

/// Позиция актора в 2D мире
///
/// Для патрулирующих акторов ECS authoritative: patrol система пишет напрямую.
/// Для player-управляемых акторов authoritative engine-физика; headless режим
/// интегрирует MoveIntent сам (см. movement::integrate_move_intent).
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub struct Position(pub Vec2);

/// Скорость движения актора (units/sec)
///
/// Конфигурируется при спавне; mover её только читает.
#[derive(Component, Clone, Copy, Debug, Reflect)]
#[reflect(Component)]
pub struct MovementSpeed {
    pub speed: f32,
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self { speed: 2.0 } // 2 units/s — базовая скорость ходьбы
    }
}

/// Команда горизонтального движения (high-level intent)
///
/// Архитектура:
/// - ECS система пишет MoveIntent (player input → intent)
/// - Engine-слой читает и конвертирует в физическую velocity
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveIntent {
    /// Горизонтальная ось [-1, 1]
    pub horizontal: f32,
}

/// На земле ли актор
///
/// Пишется engine-слоем после физического шага; ECS только читает
/// (attack gating, анимационные cues).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Grounded(pub bool);

/// Направление взгляда по X (±1)
///
/// Обновляется из последнего ненулевого горизонтального input.
/// AttackArea зеркалит offset по этому знаку.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Facing {
    pub sign: f32,
}

impl Default for Facing {
    fn default() -> Self {
        Self { sign: 1.0 }
    }
}
