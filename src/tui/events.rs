use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::sync::mpsc;

use super::actions::Action;
use super::{App, TICK_MS};

impl App {
    pub fn handle_events(
        &mut self,
        tx: mpsc::UnboundedSender<Option<Action>>,
    ) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut events = EventStream::new();
            let mut tick = tokio::time::interval(Duration::from_millis(TICK_MS));
            loop {
                let action = tokio::select! {
                    _ = tick.tick() => Some(Action::Tick),
                    event = events.next() => match event {
                        Some(Ok(Event::Key(key))) => handle_key_event(key),
                        Some(Ok(_)) => None,
                        Some(Err(_)) | None => Some(Action::Exit),
                    },
                };
                if tx.send(action).is_err() {
                    break;
                }
            }
        })
    }
}

fn handle_key_event(key: KeyEvent) -> Option<Action> {
    // crossterm also emits key release and repeat events on Windows
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let action = match key.code {
        KeyCode::Esc => Action::Exit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Exit,
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Restart,
        KeyCode::Enter => Action::Submit,
        KeyCode::Backspace => Action::Backspace,
        // Shift is fine (uppercase typing), other chords are not input
        KeyCode::Char(x)
            if x.is_ascii_alphabetic()
                && !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Action::Letter(x)
        }
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn plain_and_shifted_letters_type() {
        assert!(matches!(
            handle_key_event(press(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(Action::Letter('a'))
        ));
        assert!(matches!(
            handle_key_event(press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Action::Letter('A'))
        ));
    }

    #[test]
    fn control_chords_do_not_type_letters() {
        assert!(handle_key_event(press(KeyCode::Char('a'), KeyModifiers::CONTROL)).is_none());
        assert!(handle_key_event(press(KeyCode::Char('x'), KeyModifiers::ALT)).is_none());
        // The bound chords keep their meaning
        assert!(matches!(
            handle_key_event(press(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            Some(Action::Restart)
        ));
        assert!(matches!(
            handle_key_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Exit)
        ));
    }

    #[test]
    fn game_keys_map_to_actions() {
        assert!(matches!(
            handle_key_event(press(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Action::Submit)
        ));
        assert!(matches!(
            handle_key_event(press(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(Action::Backspace)
        ));
        assert!(matches!(
            handle_key_event(press(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Action::Exit)
        ));
        assert!(handle_key_event(press(KeyCode::Char('3'), KeyModifiers::NONE)).is_none());
    }
}
