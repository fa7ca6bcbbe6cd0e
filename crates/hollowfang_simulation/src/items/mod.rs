//! Items: подбираемые предметы и кошелёк игрока
//!
//! Упрощённая схема: предмет = entity с Position + ItemKind.
//! Пересечение с player в pickup-радиусе → эффект + despawn предмета.
//! Физический overlap мира не нужен — дистанционная проверка на strategic
//! позициях, как и у attack area.

use bevy::prelude::*;

use crate::components::{Health, Player, Position};

/// Радиус подбора предметов
pub const PICKUP_RADIUS: f32 = 0.6;

/// Тип предмета и его эффект при подборе
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Монета — пополняет Wallet
    Coin { value: u32 },
    /// Зелье — лечит (clamp на max)
    HealthPotion { heal: u32 },
}

/// Кошелёк игрока
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Wallet {
    pub coins: u32,
}

/// Событие: предмет подобран
#[derive(Event, Debug, Clone)]
pub struct ItemPickedUp {
    pub item: Entity,
    pub picker: Entity,
    pub kind: ItemKind,
}

/// Система: подбор предметов в радиусе игрока
pub fn pickup_items(
    mut commands: Commands,
    mut pickup_events: EventWriter<ItemPickedUp>,
    items: Query<(Entity, &Position, &ItemKind)>,
    mut players: Query<(Entity, &Position, &mut Wallet, &mut Health), With<Player>>,
) {
    for (picker, player_pos, mut wallet, mut health) in players.iter_mut() {
        for (item, item_pos, kind) in items.iter() {
            if item_pos.0.distance(player_pos.0) > PICKUP_RADIUS {
                continue;
            }

            match *kind {
                ItemKind::Coin { value } => wallet.coins += value,
                ItemKind::HealthPotion { heal } => health.heal(heal),
            }

            pickup_events.write(ItemPickedUp {
                item,
                picker,
                kind: *kind,
            });
            commands.entity(item).despawn();

            crate::logger::log(&format!("Item: {:?} picked up {:?}", picker, kind));
        }
    }
}

/// Items Plugin
pub struct ItemsPlugin;

impl Plugin for ItemsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ItemPickedUp>()
            .add_systems(FixedUpdate, pickup_items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Actor;
    use crate::{create_headless_app, run_fixed_tick};

    fn create_items_app() -> App {
        let mut app = create_headless_app(42);
        app.add_plugins(ItemsPlugin);
        app
    }

    fn spawn_player(app: &mut App, position: Vec2, hp: u32) -> Entity {
        app.world_mut()
            .spawn((
                Player,
                Actor { faction_id: 1 },
                Position(position),
                Health {
                    current: hp,
                    max: 100,
                },
                Wallet::default(),
            ))
            .id()
    }

    #[test]
    fn test_coin_pickup_fills_wallet() {
        let mut app = create_items_app();

        let player = spawn_player(&mut app, Vec2::ZERO, 100);
        let coin = app
            .world_mut()
            .spawn((Position(Vec2::new(0.3, 0.0)), ItemKind::Coin { value: 5 }))
            .id();

        run_fixed_tick(&mut app);

        assert_eq!(app.world().get::<Wallet>(player).unwrap().coins, 5);
        // Предмет исчез
        assert!(app.world().get_entity(coin).is_err());
    }

    #[test]
    fn test_potion_heals_player() {
        let mut app = create_items_app();

        let player = spawn_player(&mut app, Vec2::ZERO, 40);
        app.world_mut().spawn((
            Position(Vec2::new(0.2, 0.2)),
            ItemKind::HealthPotion { heal: 25 },
        ));

        run_fixed_tick(&mut app);

        assert_eq!(app.world().get::<Health>(player).unwrap().current, 65);
    }

    #[test]
    fn test_out_of_range_item_untouched() {
        let mut app = create_items_app();

        let player = spawn_player(&mut app, Vec2::ZERO, 100);
        let coin = app
            .world_mut()
            .spawn((Position(Vec2::new(3.0, 0.0)), ItemKind::Coin { value: 5 }))
            .id();

        run_fixed_tick(&mut app);

        assert_eq!(app.world().get::<Wallet>(player).unwrap().coins, 0);
        assert!(app.world().get_entity(coin).is_ok());
    }
}
