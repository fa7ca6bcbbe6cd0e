//! Input snapshot — внешний вход симуляции
//!
//! Host (engine integration, тест, демо) пишет snapshot каждый кадр ДО шага
//! симуляции; player системы только читают. Глобального опроса устройств
//! внутри ядра нет — input device abstraction остаётся на engine-слое.

use bevy::prelude::*;

/// Снимок входа за кадр
///
/// Default = «ничего не нажато»: симуляция без host-а просто стоит.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Горизонтальная ось [-1, 1]
    pub axis_horizontal: f32,
    /// Прыжок нажат в этом кадре
    pub jump: bool,
    /// Атака удерживается
    pub attack: bool,
    /// Активация skill
    pub skill: bool,
}
