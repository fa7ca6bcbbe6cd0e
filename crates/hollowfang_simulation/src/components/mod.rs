//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: базовые характеристики (faction, health)
//! - movement: позиция и перемещение (Position, MovementSpeed, MoveIntent, Grounded, Facing)
//! - animation: cues для engine-аниматора (AnimationCues)
//! - player: player control marker (Player)

pub mod actor;
pub mod animation;
pub mod movement;
pub mod player;

// Re-exports для удобного импорта
pub use actor::*;
pub use animation::*;
pub use movement::*;
pub use player::*;
