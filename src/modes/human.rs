use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::interval;

use crate::game::GameSession;
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;

pub struct HumanMode {
    session: GameSession,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Game tick rate follows the session (levels speed it up).
        let mut tick_len = self.session.tick_interval();
        let mut tick_timer = interval(tick_len);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.session.update(Instant::now());

                    // Rebuild the timer after a level-up changed the speed.
                    if self.session.tick_interval() != tick_len {
                        tick_len = self.session.tick_interval();
                        tick_timer = interval(tick_len);
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    let now = Instant::now();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.session, now);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Intent(intent) => {
                    self.session.handle(intent, Instant::now())?;
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }

        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameRng, Intent, SessionState};

    fn mode() -> HumanMode {
        let session =
            GameSession::new(GameConfig::small(), GameRng::new(7), None).unwrap();
        HumanMode::new(session)
    }

    #[test]
    fn test_mode_starts_in_menu() {
        let mode = mode();
        assert_eq!(mode.session.state(), SessionState::Menu);
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_quit_key_sets_flag() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let mut mode = mode();
        mode.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
        )))
        .unwrap();
        assert!(mode.should_quit);
    }

    #[test]
    fn test_confirm_event_starts_game() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let mut mode = mode();
        mode.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Enter,
            KeyModifiers::NONE,
        )))
        .unwrap();
        assert_eq!(mode.session.state(), SessionState::Playing);

        // And the session reacts to direction intents from here.
        mode.session
            .handle(Intent::PauseToggle, Instant::now())
            .unwrap();
        assert_eq!(mode.session.state(), SessionState::Paused);
    }
}
