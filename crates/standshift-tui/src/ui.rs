//! Snapshot rendering.
//!
//! The view reads an immutable [`Snapshot`] and a [`Theme`]; it never
//! feeds anything back into the machine except through the key events the
//! event loop maps separately.

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

use standshift_core::{CycleState, Snapshot};

const TITLE: &str = "StandShift - Beat the Desk Slump";
const INSTRUCTIONS: &str = "Press 'Enter' to start, 'Space' to pause, 'Q' to quit";

/// Style configuration, built once at startup and passed by reference.
/// Rendering has no other styling state.
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,
    pub highlight: Color,
    pub border: Color,
    pub dim: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Magenta,
            highlight: Color::Cyan,
            border: Color::Magenta,
            dim: Color::DarkGray,
        }
    }
}

pub fn render(f: &mut Frame, snapshot: &Snapshot, theme: &Theme, notify_failure: Option<&str>) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));
    let inner = outer.inner(f.size());
    f.render_widget(outer, f.size());

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Length(1), // cycle dots
            Constraint::Length(2), // status line
            Constraint::Length(3), // progress gauge
            Constraint::Length(2), // instructions
            Constraint::Min(0),    // footer (delivery failures)
        ])
        .split(inner);

    let title = Paragraph::new(TITLE)
        .style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .alignment(Alignment::Center);
    f.render_widget(title, sections[0]);

    let dots = Paragraph::new(cycle_dots(snapshot.cycle_count))
        .style(
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(dots, sections[1]);

    let status = Paragraph::new(status_line(snapshot))
        .style(Style::default().fg(theme.highlight))
        .alignment(Alignment::Center);
    f.render_widget(status, sections[2]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(theme.highlight))
        .use_unicode(true)
        .ratio(snapshot.progress.clamp(0.0, 1.0));
    f.render_widget(gauge, sections[3]);

    let instructions = Paragraph::new(INSTRUCTIONS)
        .style(Style::default().fg(theme.accent))
        .alignment(Alignment::Center);
    f.render_widget(instructions, sections[4]);

    if let Some(failure) = notify_failure {
        let footer = Paragraph::new(format!("notification delivery failed: {failure}"))
            .style(Style::default().fg(theme.dim))
            .alignment(Alignment::Center);
        f.render_widget(footer, sections[5]);
    }
}

/// One dot per completed cycle, alternating filled and hollow.
pub fn cycle_dots(count: u32) -> String {
    let mut dots = String::new();
    for i in 0..count {
        if i > 0 {
            dots.push(' ');
        }
        dots.push(if i % 2 == 0 { '●' } else { '○' });
    }
    dots
}

/// The state-dependent content line.
pub fn status_line(snapshot: &Snapshot) -> String {
    let line = match snapshot.state {
        CycleState::Standing => format!("Standing up! Time left: {}", snapshot.remaining),
        CycleState::Sitting => format!("Sitting down! Time left: {}", snapshot.remaining),
        CycleState::Waiting => "Please change your position".to_string(),
        CycleState::Start => "Welcome, please begin standing".to_string(),
    };
    if snapshot.paused && snapshot.state.posture().is_some() {
        format!("{line} (paused)")
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use standshift_core::{CycleMachine, InputEvent};

    #[test]
    fn cycle_dots_alternate_filled_and_hollow() {
        assert_eq!(cycle_dots(0), "");
        assert_eq!(cycle_dots(1), "●");
        assert_eq!(cycle_dots(2), "● ○");
        assert_eq!(cycle_dots(5), "● ○ ● ○ ●");
    }

    #[test]
    fn status_line_follows_the_cycle() {
        let mut machine = CycleMachine::new(90, 60);
        assert_eq!(
            status_line(&machine.snapshot()),
            "Welcome, please begin standing"
        );

        machine.handle(InputEvent::Acknowledge);
        assert_eq!(
            status_line(&machine.snapshot()),
            "Standing up! Time left: 01:30"
        );

        machine.handle(InputEvent::TogglePause);
        assert_eq!(
            status_line(&machine.snapshot()),
            "Standing up! Time left: 01:30 (paused)"
        );
        machine.handle(InputEvent::TogglePause);

        for _ in 0..90 {
            machine.handle(InputEvent::Tick);
        }
        assert_eq!(status_line(&machine.snapshot()), "Please change your position");

        machine.handle(InputEvent::Acknowledge);
        assert_eq!(
            status_line(&machine.snapshot()),
            "Sitting down! Time left: 01:00"
        );
    }
}
