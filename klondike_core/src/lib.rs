pub mod card;
pub mod controller;
pub mod engine;
pub mod layout;
pub mod pile;
pub mod scene;

pub use card::*;
pub use controller::{Controller, Input, Interaction, Key, Phase};
pub use engine::{DragSession, GameState};
pub use layout::{Cell, Layout, Point, Rect, Size};
pub use pile::{Pile, PileId};
pub use scene::{Blit, Scene, Sprite};
