//! Damage application and death systems.

use bevy::prelude::*;

use super::events::{AttackStarted, DamageDealt, EntityDied, HealthChanged};
use crate::components::{Actor, Facing, Health, MoveIntent, Position};

/// Компонент-маркер: entity мертв (Health == 0)
///
/// Деспавн не автоматический — труп остаётся (death animation на engine-слое).
#[derive(Component, Debug)]
pub struct Dead;

/// Melee damager: урон применяемый к целям в attack area
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Damager {
    pub base_damage: u32,
}

impl Default for Damager {
    fn default() -> Self {
        Self { base_damage: 25 }
    }
}

/// Зона атаки: offset от позиции атакующего + радиус
///
/// offset.x зеркалится по Facing (удар всегда перед собой).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct AttackArea {
    pub offset: Vec2,
    pub radius: f32,
}

impl Default for AttackArea {
    fn default() -> Self {
        Self {
            offset: Vec2::new(0.8, 0.0),
            radius: 0.9,
        }
    }
}

impl AttackArea {
    /// Центр зоны в мировых координатах
    pub fn center(&self, position: Vec2, facing_sign: f32) -> Vec2 {
        position + Vec2::new(self.offset.x * facing_sign, self.offset.y)
    }
}

/// Система: применение атак
///
/// AttackStarted → урон всем живым акторам другой фракции в attack area.
/// DamageDealt за каждое попадание, EntityDied если цель умерла.
pub fn apply_attacks(
    mut attack_events: EventReader<AttackStarted>,
    mut damage_events: EventWriter<DamageDealt>,
    mut death_events: EventWriter<EntityDied>,
    attackers: Query<(&Position, &Facing, &Damager, &AttackArea, &Actor)>,
    mut targets: Query<(Entity, &Position, &mut Health, &Actor), Without<Dead>>,
) {
    for event in attack_events.read() {
        let Ok((attacker_pos, facing, damager, area, attacker_actor)) =
            attackers.get(event.attacker)
        else {
            continue;
        };

        let center = area.center(attacker_pos.0, facing.sign);

        for (target, target_pos, mut health, target_actor) in targets.iter_mut() {
            if target == event.attacker
                || target_actor.faction_id == attacker_actor.faction_id
                || !health.is_alive()
                || target_pos.0.distance(center) > area.radius
            {
                continue;
            }

            health.take_damage(damager.base_damage);
            damage_events.write(DamageDealt {
                attacker: event.attacker,
                target,
                damage: damager.base_damage,
            });

            if !health.is_alive() {
                death_events.write(EntityDied {
                    entity: target,
                    killer: Some(event.attacker),
                });
            }
        }
    }
}

/// Система: health change notification
///
/// Changed<Health> → HealthChanged(current, max). Единая точка эмита:
/// мутирующие системы не шлют событие сами. Added<Health> тоже триггерит,
/// поэтому observers получают начальное значение после спавна.
pub fn emit_health_changes(
    mut health_events: EventWriter<HealthChanged>,
    changed: Query<(Entity, &Health), Changed<Health>>,
) {
    for (entity, health) in changed.iter() {
        health_events.write(HealthChanged {
            entity,
            current: health.current,
            max: health.max,
        });
    }
}

/// Система: отключение поведения при смерти
///
/// Убирает patrol state и MoveIntent, добавляет маркер Dead.
/// PatrolRoute остаётся: cursor переживает смерть владельца так же,
/// как переживает отмену.
pub fn disable_behavior_on_death(
    mut commands: Commands,
    mut death_events: EventReader<EntityDied>,
) {
    for event in death_events.read() {
        if let Ok(mut entity_commands) = commands.get_entity(event.entity) {
            entity_commands.remove::<crate::patrol::PatrolState>();
            entity_commands.remove::<MoveIntent>();
            entity_commands.insert(Dead);

            crate::logger::log(&format!(
                "Combat: disabled behavior for dead entity {:?}",
                event.entity
            ));
        }
    }
}
