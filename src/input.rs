use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::entities::GameState;
use crate::game::Controls;

/// One-shot actions that change the match rather than steer the ship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Pause,
    Resume,
    Restart,
    Quit,
}

/// Polls the terminal and turns key events into held [`Controls`] plus
/// one-shot [`InputAction`]s.
pub struct InputManager {
    controls: Controls,
    oneshot_actions: Vec<InputAction>,
    /// Without keyboard enhancement the terminal never reports key releases,
    /// so held keys only last for the frame their (repeated) press arrived in.
    reports_releases: bool,
}

impl InputManager {
    pub fn new(reports_releases: bool) -> Self {
        Self {
            controls: Controls::default(),
            oneshot_actions: Vec::new(),
            reports_releases,
        }
    }

    /// Drains pending terminal events without blocking.
    /// Call once per frame before reading controls or actions.
    pub fn poll_events(&mut self, game_state: GameState) -> color_eyre::Result<()> {
        self.oneshot_actions.clear();
        if !self.reports_releases {
            self.controls = Controls::default();
        }

        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = event::read()? {
                self.handle_key_event(key_event, game_state);
            }
        }

        Ok(())
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    pub fn actions(&self) -> &[InputAction] {
        &self.oneshot_actions
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent, game_state: GameState) {
        match key_event.kind {
            KeyEventKind::Release => self.set_held(key_event.code, false),
            _ => self.handle_key_press(key_event, game_state),
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent, game_state: GameState) {
        let quit = matches!(key_event.code, KeyCode::Char('q' | 'Q') | KeyCode::Esc)
            || (key_event.code == KeyCode::Char('c')
                && key_event.modifiers.contains(KeyModifiers::CONTROL));
        if quit {
            self.oneshot_actions.push(InputAction::Quit);
            return;
        }

        let action = match (game_state, key_event.code) {
            (GameState::Playing, KeyCode::Char('p' | 'P')) => Some(InputAction::Pause),
            (GameState::Paused, KeyCode::Char('p' | 'P')) => Some(InputAction::Resume),
            (state, KeyCode::Char('r' | 'R')) if state.is_finished() => Some(InputAction::Restart),
            _ => None,
        };
        if let Some(action) = action {
            self.oneshot_actions.push(action);
            return;
        }

        if game_state == GameState::Playing {
            self.set_held(key_event.code, true);
        }
    }

    fn set_held(&mut self, code: KeyCode, held: bool) {
        match code {
            KeyCode::Up => self.controls.up = held,
            KeyCode::Down => self.controls.down = held,
            KeyCode::Left => self.controls.left = held,
            KeyCode::Right => self.controls.right = held,
            KeyCode::Char(' ') => self.controls.fire = held,
            _ => {}
        }
    }
}
