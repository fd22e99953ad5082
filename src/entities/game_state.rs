#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Paused,
    GameOver,
    /// Every formation member has been destroyed
    Cleared,
}

impl GameState {
    pub fn is_finished(&self) -> bool {
        matches!(self, GameState::GameOver | GameState::Cleared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finished_states() {
        assert!(GameState::GameOver.is_finished());
        assert!(GameState::Cleared.is_finished());
        assert!(!GameState::Playing.is_finished());
        assert!(!GameState::Paused.is_finished());
    }
}
