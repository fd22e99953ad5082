use rand::Rng;

use crate::entities::Shooter;

/// Picks one alive shooter uniformly at random, or `None` when every
/// candidate is dead.
pub fn pick_shooter<'a, R: Rng + ?Sized>(
    candidates: &'a [Shooter],
    rng: &mut R,
) -> Option<&'a Shooter> {
    let alive: Vec<&Shooter> = candidates.iter().filter(|s| s.is_alive()).collect();
    if alive.is_empty() {
        return None;
    }

    let index = rng.random_range(0..alive.len());
    Some(alive[index])
}
