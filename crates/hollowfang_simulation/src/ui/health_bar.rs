//! Health bar widget: fill + text от HealthChanged нотификаций

use bevy::prelude::*;

use crate::combat::HealthChanged;
use crate::components::Health;

/// Health bar: наблюдает health-capable entity
///
/// Engine-слой читает fill (0..1) и text и рисует. Подписка живёт вместе
/// с компонентом: despawn бара прекращает наблюдение, висячих слушателей
/// не остаётся.
#[derive(Component, Debug, Clone)]
pub struct HealthBar {
    /// За кем наблюдаем
    pub target: Entity,
    /// Доля заполнения [0, 1]
    pub fill: f32,
    /// Текст "current/max"
    pub text: String,
}

impl HealthBar {
    pub fn new(target: Entity) -> Self {
        Self {
            target,
            fill: 1.0,
            text: String::new(),
        }
    }

    /// Применить (current, max) нотификацию
    ///
    /// max == 0: лог ошибки и fill не трогаем (остаётся stale);
    /// text обновляется в любом случае.
    fn apply(&mut self, current: u32, max: u32) {
        self.text = format!("{}/{}", current, max);

        if max == 0 {
            crate::logger::log_error(&format!(
                "HealthBar: target {:?} has max == 0, fill not updated",
                self.target
            ));
            return;
        }

        self.fill = current as f32 / max as f32;
    }
}

/// Система: инициализация свежих health bars
///
/// HealthChanged от спавна цели мог уйти раньше, чем появился бар —
/// читаем Health напрямую.
pub fn init_health_bars(
    mut bars: Query<&mut HealthBar, Added<HealthBar>>,
    healths: Query<&Health>,
) {
    for mut bar in bars.iter_mut() {
        let Ok(health) = healths.get(bar.target) else {
            continue;
        };
        let (current, max) = (health.current, health.max);
        bar.apply(current, max);
    }
}

/// Система: обновление от HealthChanged нотификаций
pub fn update_health_bars(
    mut health_events: EventReader<HealthChanged>,
    mut bars: Query<&mut HealthBar>,
) {
    for event in health_events.read() {
        for mut bar in bars.iter_mut() {
            if bar.target == event.entity {
                bar.apply(event.current, event.max);
            }
        }
    }
}
