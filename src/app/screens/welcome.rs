//! Welcome screen

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{help_bar, title_bar};
use crate::render::WelcomeView;

#[derive(Debug, Default)]
pub struct WelcomeScreen;

impl WelcomeScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, f: &mut Frame, view: &WelcomeView) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(8),    // Intro
                Constraint::Length(3), // Help
            ])
            .split(f.size());

        f.render_widget(
            title_bar("Radioactive Pybrix - Robotics Training", Color::Cyan),
            chunks[0],
        );
        self.render_intro(f, chunks[1], view);
        f.render_widget(help_bar(&[("Enter", "Start Training"), ("q", "Quit")]), chunks[2]);
    }

    fn render_intro(&self, f: &mut Frame, area: Rect, view: &WelcomeView) {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "🤖 Welcome to Robotics Training",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Learn how to program Pybricks robots with Python,"),
            Line::from("then check what you picked up with a short quiz."),
            Line::from(""),
            Line::from(format!(
                "{} slides  ·  {} questions",
                view.slide_count, view.question_count
            )),
        ];

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White)),
            );

        f.render_widget(paragraph, area);
    }
}
