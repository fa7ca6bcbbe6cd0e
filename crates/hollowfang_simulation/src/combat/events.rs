//! Combat events

use bevy::prelude::*;

/// Событие: атака начата
///
/// Пишет player_attack (gating уже пройден); damager разрешает цели
/// в attack area атакующего.
#[derive(Event, Debug, Clone)]
pub struct AttackStarted {
    pub attacker: Entity,
}

/// Событие: активация vampire skill
///
/// Пишет player_skill; исполняет combat::activate_vampire_skill.
#[derive(Event, Debug, Clone)]
pub struct SkillActivated {
    pub caster: Entity,
}

/// Событие: урон нанесён
#[derive(Event, Debug, Clone)]
pub struct DamageDealt {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: u32,
}

/// Событие: entity умер (Health == 0)
#[derive(Event, Debug, Clone)]
pub struct EntityDied {
    pub entity: Entity,
    pub killer: Option<Entity>,
}

/// Событие: health изменился — (current, max) нотификация для observers
///
/// Эмитится change-detection системой при любой мутации Health (урон,
/// лечение, spawn). Подписчики (HealthBar и др.) читают через EventReader;
/// despawn подписчика автоматически прекращает наблюдение.
#[derive(Event, Debug, Clone)]
pub struct HealthChanged {
    pub entity: Entity,
    pub current: u32,
    pub max: u32,
}
