use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Esc,
    Space,
    R,
    Q,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (_, KeyCode::Esc) => Some(Command::Esc),
            (KeyModifiers::NONE, KeyCode::Char(' ')) => Some(Command::Space),
            (KeyModifiers::NONE, KeyCode::Char('r')) => Some(Command::R),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Q),
            _ => None,
        }
    }

    /// Is this one of the four steering commands?
    pub(crate) fn is_directional(self) -> bool {
        matches!(
            self,
            Command::Up | Command::Down | Command::Left | Command::Right
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, KeyModifiers::NONE, Some(Command::Up))]
    #[case(KeyCode::Char('w'), KeyModifiers::NONE, Some(Command::Up))]
    #[case(KeyCode::Char('k'), KeyModifiers::NONE, Some(Command::Up))]
    #[case(KeyCode::Down, KeyModifiers::NONE, Some(Command::Down))]
    #[case(KeyCode::Char('j'), KeyModifiers::NONE, Some(Command::Down))]
    #[case(KeyCode::Left, KeyModifiers::NONE, Some(Command::Left))]
    #[case(KeyCode::Char('h'), KeyModifiers::NONE, Some(Command::Left))]
    #[case(KeyCode::Right, KeyModifiers::NONE, Some(Command::Right))]
    #[case(KeyCode::Char('l'), KeyModifiers::NONE, Some(Command::Right))]
    #[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Some(Command::Quit))]
    #[case(KeyCode::Esc, KeyModifiers::NONE, Some(Command::Esc))]
    #[case(KeyCode::Esc, KeyModifiers::SHIFT, Some(Command::Esc))]
    #[case(KeyCode::Char(' '), KeyModifiers::NONE, Some(Command::Space))]
    #[case(KeyCode::Char('r'), KeyModifiers::NONE, Some(Command::R))]
    #[case(KeyCode::Char('q'), KeyModifiers::NONE, Some(Command::Q))]
    #[case(KeyCode::Char('q'), KeyModifiers::CONTROL, None)]
    #[case(KeyCode::Char('x'), KeyModifiers::NONE, None)]
    #[case(KeyCode::F(1), KeyModifiers::NONE, None)]
    fn test_from_key_event(
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] cmd: Option<Command>,
    ) {
        let ev = KeyEvent::new(code, modifiers);
        assert_eq!(Command::from_key_event(ev), cmd);
    }

    #[rstest]
    #[case(Command::Up, true)]
    #[case(Command::Down, true)]
    #[case(Command::Left, true)]
    #[case(Command::Right, true)]
    #[case(Command::Esc, false)]
    #[case(Command::Space, false)]
    #[case(Command::Quit, false)]
    fn test_is_directional(#[case] cmd: Command, #[case] directional: bool) {
        assert_eq!(cmd.is_directional(), directional);
    }
}
