//! Application state management
//!
//! Maps keyboard events to navigation actions and routes them to the session
//! controller and the screen components of the active screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;

use super::screens::{ResultAction, Screens};
use crate::session::{Handled, Screen, ScreenController};
use crate::util::clock::AttemptClock;

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Previous slide or action (arrow left, h)
    Left,
    /// Next slide or action (arrow right, l)
    Right,
    /// Confirm selection (Enter, Space)
    Select,
    /// Pick an answer directly (1-4, a-d)
    Choose(usize),
    /// Open the answer review (r)
    Review,
    /// Go back or restart (Esc, Backspace)
    Back,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

impl NavigationAction {
    /// Convert keyboard event to navigation action
    pub fn from_key(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::Quit,
            KeyCode::Char('q') | KeyCode::Char('Q') => Self::Quit,

            KeyCode::Up | KeyCode::Char('k') => Self::Up,
            KeyCode::Down | KeyCode::Char('j') => Self::Down,
            KeyCode::Left | KeyCode::Char('h') => Self::Left,
            KeyCode::Right | KeyCode::Char('l') => Self::Right,

            KeyCode::Enter | KeyCode::Char(' ') => Self::Select,
            KeyCode::Esc | KeyCode::Backspace => Self::Back,

            KeyCode::Char(c @ '1'..='4') => Self::Choose(c as usize - '1' as usize),
            KeyCode::Char(c @ 'a'..='d') => Self::Choose(c as usize - 'a' as usize),
            KeyCode::Char('r') => Self::Review,

            _ => Self::None,
        }
    }
}

/// Application state manager
///
/// Owns the session controller together with the UI-only state of each
/// screen, and keeps the two consistent across screen changes.
#[derive(Debug)]
pub struct StateManager {
    controller: ScreenController,
    screens: Screens,
    clock: AttemptClock,
    should_quit: bool,
}

impl StateManager {
    pub fn new(controller: ScreenController, show_running_score: bool) -> Self {
        Self {
            controller,
            screens: Screens::new(show_running_score),
            clock: AttemptClock::new(),
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &ScreenController {
        &self.controller
    }

    pub fn screens(&self) -> &Screens {
        &self.screens
    }

    /// Controller and screens, split for drawing
    pub fn parts_mut(&mut self) -> (&ScreenController, &mut Screens) {
        (&self.controller, &mut self.screens)
    }

    pub fn clock(&self) -> &AttemptClock {
        &self.clock
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Handle a keyboard event and update state accordingly
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.handle_navigation(NavigationAction::from_key(key));
    }

    /// Apply one navigation action to the active screen
    pub fn handle_navigation(&mut self, action: NavigationAction) {
        if action == NavigationAction::Quit {
            self.quit();
            return;
        }

        let before = self.controller.screen();
        let outcome = match before {
            Screen::Welcome => self.on_welcome(action),
            Screen::Presentation => self.on_presentation(action),
            Screen::Quiz => self.on_quiz(action),
            Screen::Results => self.on_results(action),
            Screen::Review => self.on_review(action),
        };

        if let Err(rejected) = outcome {
            debug!("{:?} ignored on {}: {}", action, before, rejected);
        }

        let after = self.controller.screen();
        if after != before {
            self.entered(after);
        }
        self.clock.observe(after);
    }

    fn on_welcome(&mut self, action: NavigationAction) -> Handled {
        match action {
            NavigationAction::Select | NavigationAction::Right => {
                self.controller.start_presentation()
            }
            NavigationAction::Back => {
                self.quit();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn on_presentation(&mut self, action: NavigationAction) -> Handled {
        match action {
            NavigationAction::Left => self.controller.previous_slide(),
            NavigationAction::Right => self.controller.next_slide(),
            NavigationAction::Up => {
                self.screens.presentation.scroll_up();
                Ok(())
            }
            NavigationAction::Down => {
                self.screens.presentation.scroll_down();
                Ok(())
            }
            NavigationAction::Select => {
                let on_last = self
                    .controller
                    .presentation()
                    .map_or(false, |p| p.is_last());
                if on_last {
                    self.controller.start_quiz()
                } else {
                    self.controller.next_slide()
                }
            }
            NavigationAction::Back => self.controller.restart(),
            _ => Ok(()),
        }
    }

    fn on_quiz(&mut self, action: NavigationAction) -> Handled {
        match action {
            NavigationAction::Up => {
                self.screens.quiz.select_previous();
                Ok(())
            }
            NavigationAction::Down => {
                self.screens.quiz.select_next();
                Ok(())
            }
            NavigationAction::Choose(index) => self.controller.select_answer(index).map(|_| ()),
            NavigationAction::Select | NavigationAction::Right => {
                if self.controller.quiz().current_answer().is_some() {
                    self.controller.advance()?;
                    self.screens.quiz.reset_cursor();
                    Ok(())
                } else if action == NavigationAction::Select {
                    let cursor = self.screens.quiz.cursor();
                    self.controller.select_answer(cursor).map(|_| ())
                } else {
                    Ok(())
                }
            }
            NavigationAction::Back => self.controller.restart(),
            _ => Ok(()),
        }
    }

    fn on_results(&mut self, action: NavigationAction) -> Handled {
        match action {
            NavigationAction::Left | NavigationAction::Up => {
                self.screens.results.select_previous_action();
                Ok(())
            }
            NavigationAction::Right | NavigationAction::Down => {
                self.screens.results.select_next_action();
                Ok(())
            }
            NavigationAction::Select => match self.screens.results.selected_action() {
                ResultAction::Review => self.controller.view_review(),
                ResultAction::Restart => self.controller.restart(),
            },
            NavigationAction::Review => self.controller.view_review(),
            NavigationAction::Back => self.controller.restart(),
            _ => Ok(()),
        }
    }

    fn on_review(&mut self, action: NavigationAction) -> Handled {
        match action {
            NavigationAction::Up => {
                self.screens.review.scroll_up();
                Ok(())
            }
            NavigationAction::Down => {
                self.screens.review.scroll_down();
                Ok(())
            }
            NavigationAction::Select | NavigationAction::Back => self.controller.finish_review(),
            _ => Ok(()),
        }
    }

    /// Reset per-screen UI state when a screen becomes active
    fn entered(&mut self, screen: Screen) {
        match screen {
            Screen::Quiz => self.screens.quiz.reset_cursor(),
            Screen::Review => self.screens.review.reset_scroll(),
            Screen::Welcome => self.screens.results.reset_action(),
            _ => {}
        }
    }
}
