//! Headless демо HOLLOWFANG
//!
//! Запускает gameplay core без рендера: игрок идёт вправо и атакует,
//! враг патрулирует seeded маршрут, health bar следит за врагом.

use bevy::prelude::*;
use hollowfang_simulation::*;
use rand::Rng;

fn main() {
    let seed = 42;
    println!("Starting HOLLOWFANG headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins((SimulationPlugin, MovementPlugin));

    // Seeded patrol маршрут
    let points: Vec<Vec2> = {
        let mut rng_resource = app.world_mut().resource_mut::<DeterministicRng>();
        (0..4)
            .map(|_| Vec2::new(rng_resource.rng.gen_range(-8.0..8.0), 0.0))
            .collect()
    };
    let route = match PatrolRoute::new(points) {
        Ok(route) => route,
        Err(err) => {
            log_error(&format!("demo route rejected: {}", err));
            return;
        }
    };

    let token = CancelToken::new();
    let enemy = app
        .world_mut()
        .spawn((
            Actor { faction_id: 2 },
            Position(Vec2::new(5.0, 0.0)),
            Health::new(50),
            MovementSpeed { speed: 3.0 },
            route,
            PatrolState::default(),
            token.clone(),
        ))
        .id();

    let player = app
        .world_mut()
        .spawn((
            Player,
            Actor { faction_id: 1 },
            Position(Vec2::ZERO),
            Health::new(100),
            MovementSpeed { speed: 4.0 },
            Grounded(true),
            Facing::default(),
            MoveIntent::default(),
            AnimationCues::default(),
            AttackDelay::default(),
            Damager::default(),
            AttackArea::default(),
            VampireSkill::default(),
            Wallet::default(),
        ))
        .id();

    let bar = app.world_mut().spawn(HealthBar::new(enemy)).id();

    // Input-скрипт: идём вправо и держим атаку
    *app.world_mut().resource_mut::<InputSnapshot>() = InputSnapshot {
        axis_horizontal: 1.0,
        attack: true,
        ..Default::default()
    };

    // 600 тиков (10 секунд при 60Hz), патруль отменяем на середине
    for tick in 0..600 {
        if tick == 300 {
            token.cancel();
            println!("Tick {}: patrol cancellation requested", tick);
        }

        run_fixed_tick(&mut app);

        if tick % 100 == 0 {
            let player_pos = app.world().get::<Position>(player).map(|p| p.0);
            let enemy_pos = app.world().get::<Position>(enemy).map(|p| p.0);
            let bar_text = app.world().get::<HealthBar>(bar).map(|b| b.text.clone());
            println!(
                "Tick {}: player = {:?}, enemy = {:?}, enemy hp = {:?}",
                tick, player_pos, enemy_pos, bar_text
            );
        }
    }

    println!("Simulation complete!");
}
