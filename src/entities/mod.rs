mod formation;
mod game_state;
mod projectile;
mod shooter;

// Re-export all public types
pub use formation::{Formation, FormationAnchor, grid_offsets, member_position};
pub use game_state::GameState;
pub use projectile::{Direction, PROJECTILE_LIFETIME_MS, Projectile, ProjectileId};
pub use shooter::{Cooldown, Faction, Shooter, ShooterId};
