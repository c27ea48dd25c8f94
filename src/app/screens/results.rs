//! Results screen implementation
//!
//! Displays the final score, percentage and feedback tier, with options to
//! review the answers or start over.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{help_bar, title_bar};
use crate::render::ResultsView;
use crate::session::Tier;
use crate::util::format::{format_elapsed, format_percentage, format_score};

/// Results screen component
#[derive(Debug, Default)]
pub struct ResultsScreen {
    selected_action: ResultAction,
}

/// Available actions on the results screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultAction {
    #[default]
    Review,
    Restart,
}

impl ResultAction {
    /// Get all available actions
    pub fn all() -> [Self; 2] {
        [Self::Review, Self::Restart]
    }

    /// Get display text for the action
    pub fn display_text(&self) -> &'static str {
        match self {
            Self::Review => "Review Answers",
            Self::Restart => "Restart Training",
        }
    }
}

impl ResultsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_action(&self) -> ResultAction {
        self.selected_action
    }

    /// Select next action
    pub fn select_next_action(&mut self) {
        let actions = ResultAction::all();
        let current = actions
            .iter()
            .position(|a| *a == self.selected_action)
            .unwrap_or(0);
        self.selected_action = actions[(current + 1) % actions.len()];
    }

    /// Select previous action
    pub fn select_previous_action(&mut self) {
        let actions = ResultAction::all();
        let current = actions
            .iter()
            .position(|a| *a == self.selected_action)
            .unwrap_or(0);
        let previous = if current == 0 { actions.len() - 1 } else { current - 1 };
        self.selected_action = actions[previous];
    }

    /// Highlight the default action again, for a fresh results screen
    pub fn reset_action(&mut self) {
        self.selected_action = ResultAction::default();
    }

    pub fn render(&self, f: &mut Frame, view: &ResultsView) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(9),    // Score and feedback
                Constraint::Length(3), // Actions
                Constraint::Length(3), // Help
            ])
            .split(f.size());

        f.render_widget(title_bar("Quiz Complete!", Color::Cyan), chunks[0]);
        self.render_summary(f, chunks[1], view);
        self.render_actions(f, chunks[2]);
        f.render_widget(
            help_bar(&[
                ("←→", "Choose"),
                ("Enter", "Select"),
                ("r", "Review"),
                ("Esc", "Restart"),
                ("q", "Quit"),
            ]),
            chunks[3],
        );
    }

    fn render_summary(&self, f: &mut Frame, area: Rect, view: &ResultsView) {
        let results = &view.results;
        let color = tier_color(results.tier);

        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                format_percentage(results.percentage),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!(
                "You got {} questions correct",
                format_score(results.score, results.total)
            )),
        ];
        if let Some(elapsed) = view.elapsed {
            text.push(Line::from(Span::styled(
                format!("Time taken: {}", format_elapsed(elapsed)),
                Style::default().fg(Color::DarkGray),
            )));
        }
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            results.tier.message(),
            Style::default().fg(color),
        )));

        let summary = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title("Your Score")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );

        f.render_widget(summary, area);
    }

    fn render_actions(&self, f: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for action in ResultAction::all() {
            let style = if action == self.selected_action {
                Style::default()
                    .bg(Color::Cyan)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(format!(" {} ", action.display_text()), style));
            spans.push(Span::raw("   "));
        }

        let actions = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));

        f.render_widget(actions, area);
    }
}

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Perfect => Color::Green,
        Tier::Great => Color::Cyan,
        Tier::Good => Color::Yellow,
        Tier::KeepLearning => Color::Magenta,
    }
}
