use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Global (intercepted before any screen sees it)
    Quit,

    // Screen-local navigation
    NextTab,
    PrevTab,
    NextPage,
    PrevPage,
    MoveDown,
    MoveUp,
    Select,
    ToggleHelp,
    Back,

    // Terminal driver
    Resize { width: u16, height: u16 },
}

/// Block until the terminal produces something we care about.
///
/// Returns `Ok(None)` for events with no binding (mouse, focus, unbound keys).
pub fn read_event() -> std::io::Result<Option<TuiEvent>> {
    Ok(map_event(event::read()?))
}

pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Resize(width, height) => Some(TuiEvent::Resize { width, height }),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<TuiEvent> {
    // Releases arrive on terminals with keyboard enhancement; acting on them
    // would double every keystroke.
    if key.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(TuiEvent::Quit),
        KeyCode::BackTab => Some(TuiEvent::PrevTab),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(TuiEvent::PrevTab),
        KeyCode::Tab => Some(TuiEvent::NextTab),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char('l') => Some(TuiEvent::NextPage),
        KeyCode::Char('h') => Some(TuiEvent::PrevPage),
        KeyCode::Char('j') => Some(TuiEvent::MoveDown),
        KeyCode::Char('k') => Some(TuiEvent::MoveUp),
        KeyCode::Char('?') => Some(TuiEvent::ToggleHelp),
        KeyCode::Enter => Some(TuiEvent::Select),
        KeyCode::Esc => Some(TuiEvent::Back),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent, MouseEventKind};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn plain(code: KeyCode) -> Option<TuiEvent> {
        map_event(key(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_required_keymap() {
        assert_eq!(
            map_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::Quit)
        );
        assert_eq!(plain(KeyCode::Tab), Some(TuiEvent::NextTab));
        assert_eq!(
            map_event(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(TuiEvent::PrevTab)
        );
        assert_eq!(plain(KeyCode::Char('l')), Some(TuiEvent::NextPage));
        assert_eq!(plain(KeyCode::Char('h')), Some(TuiEvent::PrevPage));
        assert_eq!(plain(KeyCode::Char('j')), Some(TuiEvent::MoveDown));
        assert_eq!(plain(KeyCode::Char('k')), Some(TuiEvent::MoveUp));
    }

    #[test]
    fn test_shift_tab_without_backtab() {
        assert_eq!(
            map_event(key(KeyCode::Tab, KeyModifiers::SHIFT)),
            Some(TuiEvent::PrevTab)
        );
    }

    #[test]
    fn test_additional_keys() {
        assert_eq!(plain(KeyCode::Enter), Some(TuiEvent::Select));
        assert_eq!(plain(KeyCode::Char('?')), Some(TuiEvent::ToggleHelp));
        assert_eq!(plain(KeyCode::Esc), Some(TuiEvent::Back));
    }

    #[test]
    fn test_plain_c_and_ctrl_letters_are_unbound() {
        assert_eq!(plain(KeyCode::Char('c')), None);
        assert_eq!(map_event(key(KeyCode::Char('j'), KeyModifiers::CONTROL)), None);
        assert_eq!(plain(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('l'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_event(Event::Key(release)), None);
    }

    #[test]
    fn test_resize_and_mouse() {
        assert_eq!(
            map_event(Event::Resize(100, 30)),
            Some(TuiEvent::Resize { width: 100, height: 30 })
        );
        let mouse = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(mouse), None);
    }
}
