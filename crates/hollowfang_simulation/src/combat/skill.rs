//! Vampire skill: area drain → лечение владельца

use bevy::prelude::*;

use super::damage::Dead;
use super::events::{DamageDealt, EntityDied, SkillActivated};
use crate::components::{Actor, Health, Position};

/// Vampire skill: дренирует health живых врагов в радиусе, лечит владельца
/// на сумму забранного (clamp на max у Health::heal)
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct VampireSkill {
    /// Радиус зоны действия
    pub radius: f32,
    /// Сколько health забираем с каждого врага за активацию
    pub drain_per_target: u32,
    /// Cooldown между активациями (секунды)
    pub cooldown: f32,
    /// Текущий cooldown таймер (уменьшается до 0)
    pub cooldown_timer: f32,
}

impl Default for VampireSkill {
    fn default() -> Self {
        Self {
            radius: 3.0,
            drain_per_target: 15,
            cooldown: 8.0,
            cooldown_timer: 0.0,
        }
    }
}

impl VampireSkill {
    /// Можно ли активировать (cooldown == 0)
    pub fn can_activate(&self) -> bool {
        self.cooldown_timer <= 0.0
    }

    /// Активация: взвести cooldown
    pub fn start_cooldown(&mut self) {
        self.cooldown_timer = self.cooldown;
    }
}

/// Система: tick skill cooldown таймеров
pub fn tick_skill_cooldowns(mut query: Query<&mut VampireSkill>, time: Res<Time<Fixed>>) {
    let delta = time.delta_secs();

    for mut skill in query.iter_mut() {
        if skill.cooldown_timer > 0.0 {
            skill.cooldown_timer = (skill.cooldown_timer - delta).max(0.0);
        }
    }
}

/// Система: активация vampire skill
///
/// SkillActivated → drain живых врагов в радиусе, heal caster на сумму.
/// Gating продублирован (can_activate): события могли накопиться
/// за время cooldown.
pub fn activate_vampire_skill(
    mut skill_events: EventReader<SkillActivated>,
    mut damage_events: EventWriter<DamageDealt>,
    mut death_events: EventWriter<EntityDied>,
    mut casters: Query<(&Position, &Actor, &mut VampireSkill)>,
    mut targets: Query<(Entity, &Position, &mut Health, &Actor), Without<Dead>>,
) {
    for event in skill_events.read() {
        let Ok((caster_pos, caster_actor, mut skill)) = casters.get_mut(event.caster) else {
            continue;
        };

        if !skill.can_activate() {
            continue;
        }

        let center = caster_pos.0;
        let radius = skill.radius;
        let drain = skill.drain_per_target;
        let caster_faction = caster_actor.faction_id;
        skill.start_cooldown();

        let mut total_drained: u32 = 0;
        for (target, target_pos, mut health, target_actor) in targets.iter_mut() {
            if target == event.caster
                || target_actor.faction_id == caster_faction
                || !health.is_alive()
                || target_pos.0.distance(center) > radius
            {
                continue;
            }

            let drained = drain.min(health.current);
            health.take_damage(drained);
            total_drained += drained;

            damage_events.write(DamageDealt {
                attacker: event.caster,
                target,
                damage: drained,
            });

            if !health.is_alive() {
                death_events.write(EntityDied {
                    entity: target,
                    killer: Some(event.caster),
                });
            }
        }

        if total_drained > 0 {
            if let Ok((_, _, mut caster_health, _)) = targets.get_mut(event.caster) {
                caster_health.heal(total_drained);
            }
            crate::logger::log(&format!(
                "Skill: {:?} drained {} HP total",
                event.caster, total_drained
            ));
        }
    }
}
