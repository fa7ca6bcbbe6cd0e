//! Animation cues — состояние для engine-аниматора
//!
//! ECS не проигрывает анимации: пишет cues, engine-слой читает,
//! применяет к своему animation tree и сбрасывает one-shot triggers.

use bevy::prelude::*;

/// Cues для анимационного контроллера
///
/// speed/grounded — continuous параметры (blend idle/walk, jump/land),
/// punch/die — one-shot triggers (держатся до clear_triggers от engine).
#[derive(Component, Debug, Clone, Default)]
pub struct AnimationCues {
    /// Текущая горизонтальная ось (для blend idle/walk)
    pub speed: f32,
    /// Grounded flag (для jump/land переходов)
    pub grounded: bool,
    /// One-shot: удар
    pub punch: bool,
    /// One-shot: смерть
    pub die: bool,
}

impl AnimationCues {
    pub fn set_speed(&mut self, value: f32) {
        self.speed = value;
    }

    pub fn set_grounded(&mut self, grounded: bool) {
        self.grounded = grounded;
    }

    pub fn trigger_punch(&mut self) {
        self.punch = true;
    }

    pub fn trigger_die(&mut self) {
        self.die = true;
    }

    /// Engine вызывает после чтения triggers
    pub fn clear_triggers(&mut self) {
        self.punch = false;
        self.die = false;
    }
}
