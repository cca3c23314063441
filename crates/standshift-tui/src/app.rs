//! Terminal event loop.
//!
//! The loop is the engine's external scheduler: crossterm key events and
//! a deadline-based one-second tick are turned into [`InputEvent`]s and
//! fed to the machine one at a time. The effects that come back are
//! executed here; the machine never touches the terminal or the clock.
//!
//! A tick deadline is armed only when a transition requests
//! `ScheduleTick`, so ticking stops on its own while the machine is
//! paused or waiting for an acknowledge.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use standshift_core::{ComboNotifier, CycleMachine, Effect, InputEvent, Notifier};

use crate::ui::{self, Theme};

const TICK_INTERVAL: Duration = Duration::from_secs(1);
/// Redraw cadence while no tick is armed (paused, Start, Waiting).
const IDLE_POLL: Duration = Duration::from_millis(250);

struct App {
    machine: CycleMachine,
    notifier: ComboNotifier,
    /// Deadline for the next tick; `None` until the machine asks again.
    next_tick: Option<Instant>,
    /// Most recent delivery failure, surfaced in the footer.
    notify_failure: Option<String>,
}

pub fn run(
    machine: CycleMachine,
    notifier: ComboNotifier,
) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App {
        machine,
        notifier,
        next_tick: None,
        notify_failure: None,
    };
    let res = app.event_loop(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res
}

impl App {
    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let theme = Theme::default();
        loop {
            let snapshot = self.machine.snapshot();
            terminal.draw(|f| {
                ui::render(f, &snapshot, &theme, self.notify_failure.as_deref());
            })?;

            let Some(input) = self.next_input()? else {
                continue;
            };
            for effect in self.machine.handle(input) {
                match effect {
                    Effect::ScheduleTick => {
                        self.next_tick = Some(Instant::now() + TICK_INTERVAL);
                    }
                    Effect::Notify { title, message } => {
                        // Delivery failure never blocks the transition.
                        self.notify_failure = self
                            .notifier
                            .notify(&title, &message)
                            .err()
                            .map(|e| e.to_string());
                    }
                    Effect::Terminate => return Ok(()),
                }
            }
        }
    }

    /// Block until a key arrives or the armed tick deadline passes.
    fn next_input(&mut self) -> io::Result<Option<InputEvent>> {
        let timeout = match self.next_tick {
            Some(deadline) => deadline.saturating_duration_since(Instant::now()),
            None => IDLE_POLL,
        };
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(map_key(key));
                }
            }
            return Ok(None);
        }
        if let Some(deadline) = self.next_tick {
            if Instant::now() >= deadline {
                // Consumed; re-armed only via Effect::ScheduleTick.
                self.next_tick = None;
                return Ok(Some(InputEvent::Tick));
            }
        }
        Ok(None)
    }
}

fn map_key(key: KeyEvent) -> Option<InputEvent> {
    match key.code {
        KeyCode::Enter => Some(InputEvent::Acknowledge),
        KeyCode::Char(' ') => Some(InputEvent::TogglePause),
        KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn keys_map_to_user_intent_events() {
        assert_eq!(map_key(press(KeyCode::Enter)), Some(InputEvent::Acknowledge));
        assert_eq!(
            map_key(press(KeyCode::Char(' '))),
            Some(InputEvent::TogglePause)
        );
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(InputEvent::Quit));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(InputEvent::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputEvent::Quit)
        );
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(press(KeyCode::Tab)), None);
    }
}
