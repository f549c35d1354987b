use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{EffectKind, FoodKind, GameSession, Position, SessionState};

/// Milliseconds of remaining food lifetime under which the food blinks.
const BLINK_WINDOW_MS: u128 = 1500;
/// Blink half-period in milliseconds.
const BLINK_PHASE_MS: u128 = 250;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, session: &GameSession, now: Instant) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(chunks[0], session);
        frame.render_widget(stats, chunks[0]);

        // Center the game area horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let body = match session.state() {
            SessionState::Menu => self.render_menu(game_area, session),
            SessionState::GameOver => self.render_game_over(game_area, session),
            SessionState::Playing | SessionState::Paused => {
                self.render_grid(game_area, session, now)
            }
        };
        frame.render_widget(body, game_area);

        let controls = self.render_controls(chunks[2], session.state());
        frame.render_widget(controls, chunks[2]);
    }

    fn snake_body_style(&self, session: &GameSession) -> Style {
        // Tint hints at the active effect.
        if session.snake().has_effect(EffectKind::Speed) {
            Style::default().fg(Color::Yellow)
        } else if session.snake().has_effect(EffectKind::Slow) {
            Style::default().fg(Color::Blue)
        } else {
            Style::default().fg(Color::Green)
        }
    }

    fn food_span(&self, session: &GameSession, now: Instant) -> Span<'static> {
        let food = session.food();
        let (glyph, color) = match food.kind {
            FoodKind::Normal => ("o ", Color::Red),
            FoodKind::Bonus => ("* ", Color::Magenta),
            FoodKind::Speed => ("> ", Color::Yellow),
            FoodKind::Slow => ("< ", Color::Blue),
        };

        let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        if food.kind != FoodKind::Normal {
            let age_ms = food.age(now).as_millis();
            let lifetime_ms = session.config().food_lifetime_ms as u128;
            let remaining = lifetime_ms.saturating_sub(age_ms);
            if remaining < BLINK_WINDOW_MS && (age_ms / BLINK_PHASE_MS) % 2 == 0 {
                style = Style::default().fg(Color::DarkGray);
            }
        }

        Span::styled(glyph, style)
    }

    fn render_grid(&self, _area: Rect, session: &GameSession, now: Instant) -> Paragraph<'_> {
        let body_style = self.snake_body_style(session);
        let head_style = body_style.add_modifier(Modifier::BOLD);
        let food_span = self.food_span(session, now);

        let mut lines = Vec::new();
        for y in 0..session.config().grid_height {
            let mut spans = Vec::new();

            for x in 0..session.config().grid_width {
                let pos = Position::new(x, y);

                let cell = if pos == session.snake().head() {
                    Span::styled("■ ", head_style)
                } else if session.snake().body.contains(&pos) {
                    Span::styled("□ ", body_style)
                } else if session.obstacle_cells().contains(&pos) {
                    Span::styled("▓ ", Style::default().fg(Color::Gray))
                } else if pos == session.food().position {
                    food_span.clone()
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let title = if session.state() == SessionState::Paused {
            " Paused "
        } else {
            " Snake "
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, _area: Rect, session: &GameSession) -> Paragraph<'_> {
        let best = session
            .high_scores()
            .best()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());

        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Level: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.level().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(best, Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn high_score_lines(&self, session: &GameSession) -> Vec<Line<'_>> {
        let mut lines = vec![Line::from(Span::styled(
            "High Scores",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))];

        if session.high_scores().entries().is_empty() {
            lines.push(Line::from(Span::styled(
                "none yet",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            for (i, score) in session.high_scores().entries().iter().enumerate() {
                lines.push(Line::from(Span::styled(
                    format!("{}. {}", i + 1, score),
                    Style::default().fg(Color::White),
                )));
            }
        }

        lines
    }

    fn render_menu(&self, _area: Rect, session: &GameSession) -> Paragraph<'_> {
        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "S N A K E",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        text.extend(self.high_score_lines(session));
        text.push(Line::from(""));
        text.push(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to play", Style::default().fg(Color::Gray)),
        ]));

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Green)),
        )
    }

    fn render_game_over(&self, _area: Rect, session: &GameSession) -> Paragraph<'_> {
        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    session.score().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
        ];
        text.extend(self.high_score_lines(session));
        text.push(Line::from(""));
        text.push(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Esc",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" for the menu", Style::default().fg(Color::Gray)),
        ]));

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, _area: Rect, state: SessionState) -> Paragraph<'_> {
        let text = match state {
            SessionState::Menu => vec![Line::from(vec![
                Span::styled("Enter", Style::default().fg(Color::Green)),
                Span::raw(" to play | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])],
            _ => vec![Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("P", Style::default().fg(Color::Yellow)),
                Span::raw(" to pause | "),
                Span::styled("Esc", Style::default().fg(Color::Gray)),
                Span::raw(" for menu | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])],
        };

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
