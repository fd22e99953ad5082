// Library exports for the binary and tests
pub use arcade::Arcade;
pub use clock::{Clock, ManualClock, SystemClock};
pub use combat::{Contact, Kill, Spawner, pick_shooter, resolve};
pub use config::GameConfig;
pub use engine::{Bodies, Engine};
pub use entities::{
    Cooldown, Direction, Faction, Formation, FormationAnchor, GameState, PROJECTILE_LIFETIME_MS,
    Projectile, ProjectileId, Shooter, ShooterId, grid_offsets, member_position,
};
pub use game::{Controls, Game};

pub mod arcade;
pub mod clock;
pub mod combat;
pub mod config;
pub mod engine;
pub mod entities;
pub mod game;
pub mod input;
pub mod renderer;
