use std::io;
use std::io::Write;

use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use crossterm::execute;
use crossterm::terminal;

use crate::events::AppEvent;
use crate::events::Event;
use crate::events::PointerEvent;

/// Converts a crossterm event into a lifeboard event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        CrossTermEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Some(Event::AppEvent(AppEvent::Exit)),
            _ => None,
        },
        CrossTermEvent::Mouse(MouseEvent {
            kind, column, row, ..
        }) => match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(Event::PointerEvent(PointerEvent::Pressed { col: column, row }))
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                Some(Event::PointerEvent(PointerEvent::Moved { col: column, row }))
            }
            _ => None,
        },
        CrossTermEvent::Resize(cols, rows) => {
            Some(Event::AppEvent(AppEvent::Resize { cols, rows }))
        }
        _ => None,
    }
}

/// Holds the terminal in raw mode on the alternate screen, with mouse capture on, for as long
/// as it lives.
pub struct TerminalSession<W: Write> {
    out: W,
}

impl<W: Write> TerminalSession<W> {
    pub fn enter(out: W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        // Dropping the session on a failed setup puts the terminal back
        let mut session = Self { out };
        execute!(
            session.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture
        )?;

        Ok(session)
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        // Nothing left to report errors to
        let _ = execute!(
            self.out,
            DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
