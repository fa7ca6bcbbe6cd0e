//! Patrol системы: один шаг движения за FixedUpdate тик

use bevy::prelude::*;

use super::route::{CancelToken, PatrolRoute, PatrolState};
use crate::components::{MovementSpeed, Position};

/// Дистанция на которой waypoint считается достигнутым
pub const ARRIVAL_THRESHOLD: f32 = 0.5;

/// Линейный шаг от from к to, ограниченный max_step
///
/// Не перелетает за to: если дистанция ≤ max_step, возвращает to.
/// При большом max_step шаг может закончиться внутри arrival threshold —
/// это ожидаемое поведение, не корректируется.
pub fn move_towards(from: Vec2, to: Vec2, max_step: f32) -> Vec2 {
    let delta = to - from;
    let distance = delta.length();

    if distance <= max_step || distance < f32::EPSILON {
        to
    } else {
        from + delta * (max_step / distance)
    }
}

/// Система: patrol state machine
///
/// Для каждого патрулирующего entity за тик:
/// 1. Poll cancel token. Взведён → Cancelled; cursor и Position не трогаем.
/// 2. Idle → advance cursor, начинаем движение (в этом же тике).
/// 3. Движение: по достижении waypoint (≤ ARRIVAL_THRESHOLD) advance,
///    затем один шаг move_towards с ограничением speed * dt.
///
/// Единственный writer позиции и cursor патрулирующих акторов — эта система;
/// параллельных patrol-циклов на entity не существует по построению.
pub fn patrol_step(
    mut movers: Query<(
        Entity,
        &mut PatrolRoute,
        &mut PatrolState,
        &mut Position,
        &MovementSpeed,
        &CancelToken,
    )>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, mut route, mut state, mut position, speed, token) in movers.iter_mut() {
        // Кооперативная отмена: poll в начале тика. Запрос середины тика
        // наблюдается на следующем — максимум один лишний шаг движения.
        if token.is_cancelled() {
            if *state != PatrolState::Cancelled {
                *state = PatrolState::Cancelled;
                crate::logger::log(&format!(
                    "Patrol: {:?} cancelled at waypoint #{}",
                    entity,
                    route.cursor()
                ));
            }
            continue;
        }

        match *state {
            PatrolState::Cancelled => continue, // ждём rearm()
            PatrolState::Idle => {
                // Старт цикла: advance до движения — первый target
                // это следующий за cursor waypoint
                route.advance();
                *state = PatrolState::MovingToWaypoint;
            }
            PatrolState::MovingToWaypoint => {}
        }

        let mut target = route.current_waypoint();
        if position.0.distance(target) <= ARRIVAL_THRESHOLD {
            // Достигли — advance и сразу шаг к следующему waypoint
            target = route.advance();
        }

        if position.0.distance(target) > ARRIVAL_THRESHOLD {
            position.0 = move_towards(position.0, target, speed.speed * delta);
        }
    }
}
