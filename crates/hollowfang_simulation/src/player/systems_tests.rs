//! Tests for player coordinator systems (input gating, delay, death).

use bevy::prelude::*;

use crate::combat::{AttackStarted, EntityDied, SkillActivated, VampireSkill};
use crate::components::{Actor, AnimationCues, Facing, Grounded, Health, MoveIntent, Player, Position};
use crate::movement::JumpIntent;
use crate::player::{AttackDelay, InputSnapshot, MAX_ATTACK_DELAY};
use crate::{create_headless_app, run_fixed_tick, SimulationPlugin};

fn create_player_app() -> App {
    let mut app = create_headless_app(42);
    app.add_plugins(SimulationPlugin);
    app
}

fn spawn_player(app: &mut App, grounded: bool) -> Entity {
    app.world_mut()
        .spawn((
            Player,
            Actor { faction_id: 1 },
            Position(Vec2::ZERO),
            Health::new(100),
            Grounded(grounded),
            Facing::default(),
            MoveIntent::default(),
            AnimationCues::default(),
            AttackDelay::default(),
        ))
        .id()
}

fn set_input(app: &mut App, input: InputSnapshot) {
    *app.world_mut().resource_mut::<InputSnapshot>() = input;
}

fn count_events<E: Event>(app: &App) -> usize {
    let events = app.world().resource::<Events<E>>();
    let mut cursor = events.get_cursor();
    cursor.read(events).count()
}

#[test]
fn test_attack_emits_event_and_resets_delay() {
    let mut app = create_player_app();
    let player = spawn_player(&mut app, true);

    set_input(
        &mut app,
        InputSnapshot {
            attack: true,
            ..Default::default()
        },
    );

    // Спавнимся готовыми — первая атака в первом же тике
    run_fixed_tick(&mut app);
    assert_eq!(count_events::<AttackStarted>(&app), 1);
    assert!(!app.world().get::<AttackDelay>(player).unwrap().is_ready());
    assert!(app.world().get::<AnimationCues>(player).unwrap().punch);

    // Delay не накоплен — повторная атака не проходит
    for _ in 0..28 {
        run_fixed_tick(&mut app);
    }
    assert_eq!(count_events::<AttackStarted>(&app), 1);

    // После ~MAX_ATTACK_DELAY секунд — вторая атака
    for _ in 0..5 {
        run_fixed_tick(&mut app);
    }
    assert_eq!(count_events::<AttackStarted>(&app), 2);
}

#[test]
fn test_attack_requires_grounded() {
    let mut app = create_player_app();
    let player = spawn_player(&mut app, false);

    set_input(
        &mut app,
        InputSnapshot {
            attack: true,
            ..Default::default()
        },
    );

    for _ in 0..10 {
        run_fixed_tick(&mut app);
    }

    assert_eq!(count_events::<AttackStarted>(&app), 0);
    // Delay не сброшен — атаки не было
    assert!(app.world().get::<AttackDelay>(player).unwrap().is_ready());
}

#[test]
fn test_no_input_no_attack() {
    let mut app = create_player_app();
    spawn_player(&mut app, true);

    for _ in 0..10 {
        run_fixed_tick(&mut app);
    }

    assert_eq!(count_events::<AttackStarted>(&app), 0);
}

#[test]
fn test_attack_delay_saturates_at_max() {
    let mut app = create_player_app();
    let player = spawn_player(&mut app, true);

    // Долгий простой: delay насыщается ровно на MAX, не растёт дальше
    for _ in 0..200 {
        run_fixed_tick(&mut app);
    }

    let delay = app.world().get::<AttackDelay>(player).unwrap();
    assert_eq!(delay.elapsed, MAX_ATTACK_DELAY);
}

#[test]
fn test_move_updates_intent_facing_and_cues() {
    let mut app = create_player_app();
    let player = spawn_player(&mut app, true);

    set_input(
        &mut app,
        InputSnapshot {
            axis_horizontal: -0.7,
            ..Default::default()
        },
    );
    run_fixed_tick(&mut app);

    assert_eq!(
        app.world().get::<MoveIntent>(player).unwrap().horizontal,
        -0.7
    );
    assert_eq!(app.world().get::<Facing>(player).unwrap().sign, -1.0);
    assert_eq!(app.world().get::<AnimationCues>(player).unwrap().speed, -0.7);

    // Ось отпущена: intent обнулился, facing сохранился
    set_input(&mut app, InputSnapshot::default());
    run_fixed_tick(&mut app);

    assert_eq!(app.world().get::<MoveIntent>(player).unwrap().horizontal, 0.0);
    assert_eq!(app.world().get::<Facing>(player).unwrap().sign, -1.0);
}

#[test]
fn test_jump_emits_intent_and_grounded_cue() {
    let mut app = create_player_app();
    let player = spawn_player(&mut app, false);

    set_input(
        &mut app,
        InputSnapshot {
            jump: true,
            ..Default::default()
        },
    );
    run_fixed_tick(&mut app);

    // Intent уходит всегда — grounded валидирует engine-слой
    assert_eq!(count_events::<JumpIntent>(&app), 1);
    assert!(!app.world().get::<AnimationCues>(player).unwrap().grounded);
}

#[test]
fn test_skill_gated_by_cooldown() {
    let mut app = create_player_app();
    let player = spawn_player(&mut app, true);
    app.world_mut().entity_mut(player).insert(VampireSkill {
        cooldown_timer: 5.0,
        ..Default::default()
    });

    set_input(
        &mut app,
        InputSnapshot {
            skill: true,
            ..Default::default()
        },
    );
    run_fixed_tick(&mut app);
    assert_eq!(count_events::<SkillActivated>(&app), 0);

    // Cooldown снят — активация проходит
    app.world_mut()
        .get_mut::<VampireSkill>(player)
        .unwrap()
        .cooldown_timer = 0.0;
    run_fixed_tick(&mut app);
    assert_eq!(count_events::<SkillActivated>(&app), 1);
}

#[test]
fn test_death_disables_controls() {
    let mut app = create_player_app();
    let player = spawn_player(&mut app, true);

    app.world_mut().send_event(EntityDied {
        entity: player,
        killer: None,
    });
    run_fixed_tick(&mut app);

    assert!(app.world().get::<AnimationCues>(player).unwrap().die);
    assert!(app.world().get::<MoveIntent>(player).is_none());
    assert!(app.world().get::<AttackDelay>(player).is_none());
}
