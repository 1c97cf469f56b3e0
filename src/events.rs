use crossterm::event::Event as CtEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Exit the application
    Exit,

    /// Stop or resume advancing generations
    TogglePause,

    /// Advance a single generation while paused
    Step,
}

/// Converts a crossterm event into an asciilife event
pub fn convert_event(event: CtEvent) -> Option<Event> {
    let CtEvent::Key(key_event) = event else {
        return None;
    };

    // Some terminals also report key releases
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    match key_event {
        KeyEvent {
            code: KeyCode::Char('q') | KeyCode::Esc,
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Some(Event::Exit),
        KeyEvent {
            code: KeyCode::Char(' '),
            ..
        } => Some(Event::TogglePause),
        KeyEvent {
            code: KeyCode::Char('n'),
            ..
        } => Some(Event::Step),
        _ => None,
    }
}
