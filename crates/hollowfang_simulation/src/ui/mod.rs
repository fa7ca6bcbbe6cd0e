//! UI domain — health bar widget state.
//!
//! # Architecture
//!
//! ECS считает UI-facing state (fill fraction, text), рендер и layout
//! остаются на engine-слое:
//! - **health_bar**: HealthBar component (fill + text от HealthChanged)
//!
//! Engine читает HealthBar.fill / HealthBar.text и рисует их своими
//! средствами (image fill, label).

use bevy::prelude::*;

pub mod health_bar;

pub use health_bar::HealthBar;

/// UI Plugin
///
/// Порядок выполнения:
/// 1. init_health_bars — начальное значение для свежих баров
/// 2. update_health_bars — применение HealthChanged нотификаций
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (health_bar::init_health_bars, health_bar::update_health_bars).chain(),
        );
    }
}
