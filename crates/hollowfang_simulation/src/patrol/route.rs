//! Patrol route: waypoint-последовательность, cursor, cancellation token

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// Ошибки валидации patrol route
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatrolRouteError {
    /// advance() берёт индекс по модулю длины — пустой маршрут запрещён
    #[error("patrol route requires at least one waypoint")]
    Empty,
}

/// Маршрут патруля: упорядоченная циклическая последовательность waypoints
///
/// Инварианты:
/// - points непуст (гарантируется конструктором)
/// - cursor ∈ [0, points.len())
/// - cursor мутируется только patrol системой и переживает отмену
#[derive(Component, Debug, Clone, PartialEq)]
pub struct PatrolRoute {
    points: Vec<Vec2>,
    cursor: usize,
}

impl PatrolRoute {
    /// Создать маршрут. Пустой список → ошибка (fail fast, не дефект в рантайме).
    pub fn new(points: Vec<Vec2>) -> Result<Self, PatrolRouteError> {
        if points.is_empty() {
            return Err(PatrolRouteError::Empty);
        }
        Ok(Self { points, cursor: 0 })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        // Конструктор не пропускает пустые маршруты
        self.points.is_empty()
    }

    /// Waypoint под cursor
    pub fn current_waypoint(&self) -> Vec2 {
        self.points[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Сдвинуть cursor на следующий waypoint (циклически), вернуть его
    pub fn advance(&mut self) -> Vec2 {
        self.cursor = (self.cursor + 1) % self.points.len();
        self.points[self.cursor]
    }
}

/// Level-authored конфигурация маршрута
///
/// Инжектится из level-данных до старта патруля; конвертация в PatrolRoute
/// валидирует непустоту.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatrolRouteConfig {
    pub points: Vec<[f32; 2]>,
}

impl TryFrom<PatrolRouteConfig> for PatrolRoute {
    type Error = PatrolRouteError;

    fn try_from(config: PatrolRouteConfig) -> Result<Self, Self::Error> {
        PatrolRoute::new(config.points.into_iter().map(Vec2::from).collect())
    }
}

/// Состояние patrol state machine
///
/// Цель движения не хранится в состоянии — она всегда points[cursor] маршрута.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PatrolState {
    /// Патруль не запущен
    #[default]
    Idle,
    /// Движение к waypoint под cursor
    MovingToWaypoint,
    /// Отмена наблюдена; терминально до rearm()
    Cancelled,
}

impl PatrolState {
    /// Перезапуск после отмены
    ///
    /// Cursor маршрута сохраняется — патруль продолжится со следующего
    /// waypoint, не с начала. Вместе с rearm host обычно вставляет свежий
    /// CancelToken (старый остаётся взведённым).
    pub fn rearm(&mut self) {
        *self = PatrolState::Idle;
    }
}

/// Cooperative cancellation token
///
/// Владелец (host / AI-контроллер) держит клон и вызывает cancel();
/// patrol система только опрашивает флаг. Отмена наблюдается в начале тика:
/// запрос середины тика может пропустить максимум один шаг движения.
#[derive(Component, Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Запросить отмену
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
