/// The closed set of actions an agent can receive, with wire-stable integer
/// discriminants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    Stay = 0,
    Up = 1,
    Down = 2,
    Left = 3,
    Right = 4,
}

impl Action {
    /// Wire value of this action.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode a wire value, if it names an action.
    pub fn from_code(code: u8) -> Option<Action> {
        match code {
            0 => Some(Action::Stay),
            1 => Some(Action::Up),
            2 => Some(Action::Down),
            3 => Some(Action::Left),
            4 => Some(Action::Right),
            _ => None,
        }
    }

    /// Get action name for display
    pub fn name(self) -> &'static str {
        match self {
            Action::Stay => "Stay",
            Action::Up => "Up",
            Action::Down => "Down",
            Action::Left => "Left",
            Action::Right => "Right",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes() {
        assert_eq!(Action::Stay.code(), 0);
        assert_eq!(Action::Up.code(), 1);
        assert_eq!(Action::Down.code(), 2);
        assert_eq!(Action::Left.code(), 3);
        assert_eq!(Action::Right.code(), 4);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Action::from_code(3), Some(Action::Left));
        assert_eq!(Action::from_code(5), None);
    }

    #[test]
    fn test_action_name() {
        assert_eq!(Action::Left.name(), "Left");
        assert_eq!(Action::Stay.name(), "Stay");
    }
}
