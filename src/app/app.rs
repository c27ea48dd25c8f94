//! Main application controller
//!
//! Manages the TUI, application state, and the draw/input loop.

use log::{info, warn};
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{
    app::{
        screens::FrameRenderer,
        state::StateManager,
        tui::{Tui, MIN_HEIGHT, MIN_WIDTH},
    },
    config::TrainerConfig,
    render::Renderer,
    session::ScreenController,
    Result, TrainerError,
};

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Session plus per-screen UI state
    state_manager: StateManager,
}

impl App {
    /// Create a new application instance
    pub fn new(controller: ScreenController, config: &TrainerConfig) -> Result<Self> {
        Ok(Self {
            tui: Tui::new(config.tick_rate_duration()?).map_err(tui_error)?,
            state_manager: StateManager::new(controller, config.show_running_score),
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui.init().map_err(tui_error)?;
        if !self.tui.is_size_adequate()? {
            warn!(
                "terminal is smaller than {}x{}, layout may be clipped",
                MIN_WIDTH, MIN_HEIGHT
            );
        }
        info!("tui started, tick rate {:?}", self.tui.tick_rate());
        Ok(())
    }

    /// Run the main application loop until the user quits
    pub fn run(&mut self) -> Result<()> {
        while !self.state_manager.should_quit() {
            self.draw()?;
            if let Some(key) = self.tui.handle_events()? {
                self.state_manager.handle_key_event(key);
            }
        }
        self.tui.restore()?;
        Ok(())
    }

    /// Draw the active screen
    fn draw(&mut self) -> Result<()> {
        let elapsed = self.state_manager.clock().elapsed();
        let (controller, screens) = self.state_manager.parts_mut();
        let view = controller.view().with_elapsed(elapsed);

        let mut outcome = Ok(());
        self.tui.draw(|f| {
            let size = f.size();
            if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
                render_too_small(f);
                return;
            }
            outcome = FrameRenderer::new(screens, f).render(&view);
        })?;
        outcome
    }
}

fn tui_error(err: std::io::Error) -> TrainerError {
    TrainerError::TuiError(err.to_string())
}

fn render_too_small(f: &mut Frame) {
    let notice = Paragraph::new(format!(
        "Terminal too small. Resize to at least {}x{}, or press q to quit.",
        MIN_WIDTH, MIN_HEIGHT
    ))
    .style(Style::default().fg(Color::Yellow))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(notice, f.size());
}
