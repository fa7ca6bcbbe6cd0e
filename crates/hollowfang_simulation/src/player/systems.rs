//! Player системы: per-tick координатор input → mover/damager/skill/animation

use bevy::prelude::*;

use super::input::InputSnapshot;
use crate::combat::{AttackStarted, EntityDied, SkillActivated, VampireSkill};
use crate::components::{AnimationCues, Facing, Grounded, MoveIntent, Player};
use crate::movement::JumpIntent;

/// Минимальная задержка между атаками (секунды)
pub const MAX_ATTACK_DELAY: f32 = 0.5;

/// Накопитель attack delay
///
/// Насыщается на MAX_ATTACK_DELAY и пассивно не сбрасывается;
/// в 0 уходит только при успешной атаке.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct AttackDelay {
    pub elapsed: f32,
}

impl Default for AttackDelay {
    fn default() -> Self {
        // Спавнимся готовыми атаковать
        Self {
            elapsed: MAX_ATTACK_DELAY,
        }
    }
}

impl AttackDelay {
    pub fn is_ready(&self) -> bool {
        self.elapsed >= MAX_ATTACK_DELAY
    }
}

/// Система: накопление attack delay (saturating)
pub fn tick_attack_delay(
    mut query: Query<&mut AttackDelay, With<Player>>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for mut delay in query.iter_mut() {
        if delay.elapsed < MAX_ATTACK_DELAY {
            delay.elapsed = (delay.elapsed + delta).min(MAX_ATTACK_DELAY);
        }
    }
}

/// Система: горизонтальное движение от input
///
/// Ось копируется в MoveIntent (читает engine-слой) и в speed cue аниматора.
/// Facing обновляется только от ненулевого input (стоя не разворачиваемся).
pub fn player_move(
    input: Res<InputSnapshot>,
    mut query: Query<(&mut MoveIntent, &mut Facing, &mut AnimationCues), With<Player>>,
) {
    for (mut intent, mut facing, mut cues) in query.iter_mut() {
        intent.horizontal = input.axis_horizontal;
        if input.axis_horizontal.abs() > f32::EPSILON {
            facing.sign = input.axis_horizontal.signum();
        }
        cues.set_speed(input.axis_horizontal);
    }
}

/// Система: прыжок + grounded cue
///
/// JumpIntent уходит всегда при нажатии; валидация «на земле ли»
/// остаётся за engine-слоем, применяющим jump velocity.
pub fn player_jump(
    input: Res<InputSnapshot>,
    mut jump_events: EventWriter<JumpIntent>,
    mut query: Query<(Entity, &Grounded, &mut AnimationCues), With<Player>>,
) {
    for (entity, grounded, mut cues) in query.iter_mut() {
        if input.jump {
            jump_events.write(JumpIntent { entity });
        }
        cues.set_grounded(grounded.0);
    }
}

/// Система: атака
///
/// Gating: attack input AND grounded AND delay накоплен.
/// Успешная атака: AttackStarted + punch cue + delay в 0.
pub fn player_attack(
    input: Res<InputSnapshot>,
    mut attack_events: EventWriter<AttackStarted>,
    mut query: Query<(Entity, &Grounded, &mut AttackDelay, &mut AnimationCues), With<Player>>,
) {
    if !input.attack {
        return;
    }

    for (entity, grounded, mut delay, mut cues) in query.iter_mut() {
        if grounded.0 && delay.is_ready() {
            attack_events.write(AttackStarted { attacker: entity });
            cues.trigger_punch();
            delay.elapsed = 0.0;
        }
    }
}

/// Система: активация vampire skill
///
/// Gating: skill input AND skill.can_activate(). Исполнение (drain + heal)
/// в combat::activate_vampire_skill.
pub fn player_skill(
    input: Res<InputSnapshot>,
    mut skill_events: EventWriter<SkillActivated>,
    query: Query<(Entity, &VampireSkill), With<Player>>,
) {
    if !input.skill {
        return;
    }

    for (entity, skill) in query.iter() {
        if skill.can_activate() {
            skill_events.write(SkillActivated { caster: entity });
        }
    }
}

/// Система: деактивация player при смерти
///
/// Die cue для аниматора, затем снятие управления: MoveIntent и AttackDelay
/// удаляются, respawn не предусмотрен.
pub fn deactivate_player_on_death(
    mut commands: Commands,
    mut death_events: EventReader<EntityDied>,
    mut players: Query<&mut AnimationCues, With<Player>>,
) {
    for event in death_events.read() {
        let Ok(mut cues) = players.get_mut(event.entity) else {
            continue;
        };

        cues.trigger_die();

        if let Ok(mut entity_commands) = commands.get_entity(event.entity) {
            entity_commands.remove::<MoveIntent>();
            entity_commands.remove::<AttackDelay>();
            crate::logger::log_info(&format!(
                "Player: {:?} died, controls disabled",
                event.entity
            ));
        }
    }
}
