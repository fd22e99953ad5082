//! Firing and contact rules shared by the player and the enemy formation

mod contact;
mod selector;
mod spawner;

pub use contact::{Contact, Kill, resolve};
pub use selector::pick_shooter;
pub use spawner::Spawner;
