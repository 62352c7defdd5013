//! Calculator keypad layout shared by every host
//!
//! ```text
//! [ON ] [OFF]
//! [AC ] [DE ] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ * ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ 0 ] [ . ] [ √ ] [ = ]
//! ```

/// Actions a key or button can perform on the pad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadAction {
    /// Append a digit (0-9)
    Digit(u8),
    /// Append a decimal point
    Decimal,
    /// Append an operator character
    Operator(char),
    /// Append an opening parenthesis (keyboard only)
    OpenParen,
    /// Append a closing parenthesis (keyboard only)
    CloseParen,
    /// Empty the buffer (AC)
    AllClear,
    /// Remove the last character (DE)
    Delete,
    /// Evaluate and divide by 100
    Percent,
    /// Evaluate and take the square root
    SquareRoot,
    /// Evaluate and replace the buffer
    Equals,
    /// Turn the pad on
    PowerOn,
    /// Turn the pad off, emptying the buffer
    PowerOff,
}

impl KeypadAction {
    /// Returns the character appended to the buffer, if any
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Decimal => Some('.'),
            Self::Operator(op) => Some(*op),
            Self::OpenParen => Some('('),
            Self::CloseParen => Some(')'),
            Self::AllClear
            | Self::Delete
            | Self::Percent
            | Self::SquareRoot
            | Self::Equals
            | Self::PowerOn
            | Self::PowerOff => None,
        }
    }

    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Operator('/') => "÷".to_string(),
            Self::AllClear => "AC".to_string(),
            Self::Delete => "DE".to_string(),
            Self::Percent => "%".to_string(),
            Self::SquareRoot => "√".to_string(),
            Self::Equals => "=".to_string(),
            Self::PowerOn => "ON".to_string(),
            Self::PowerOff => "OFF".to_string(),
            other => other.to_char().map(String::from).unwrap_or_default(),
        }
    }

    /// Returns the DOM element ID for this action's button
    #[must_use]
    pub fn element_id(&self) -> String {
        match self {
            Self::Digit(d) => format!("btn-{d}"),
            Self::Decimal => "btn-decimal".to_string(),
            Self::Operator(op) => format!("btn-{}", op_name(*op)),
            Self::OpenParen => "btn-open-paren".to_string(),
            Self::CloseParen => "btn-close-paren".to_string(),
            Self::AllClear => "btn-ac".to_string(),
            Self::Delete => "btn-de".to_string(),
            Self::Percent => "btn-percent".to_string(),
            Self::SquareRoot => "btn-sqrt".to_string(),
            Self::Equals => "btn-equals".to_string(),
            Self::PowerOn => "btn-on".to_string(),
            Self::PowerOff => "btn-off".to_string(),
        }
    }
}

/// Returns a name for an operator (for element IDs)
fn op_name(op: char) -> &'static str {
    match op {
        '+' => "plus",
        '-' => "minus",
        '*' => "times",
        '/' => "divide",
        _ => "op",
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The action this button performs
    pub action: KeypadAction,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a new button definition
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self {
            id: action.element_id(),
            action,
            row,
            col,
        }
    }

    /// Returns the button label
    #[must_use]
    pub fn label(&self) -> String {
        self.action.label()
    }
}

/// The calculator keypad: a 5x4 grid plus the power row
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Grid buttons in row-major order
    buttons: Vec<KeypadButton>,
    /// ON and OFF
    power: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use KeypadAction::{
            AllClear, Decimal, Delete, Digit, Equals, Operator, Percent, SquareRoot,
        };

        let layout = [
            [AllClear, Delete, Percent, Operator('/')],
            [Digit(7), Digit(8), Digit(9), Operator('*')],
            [Digit(4), Digit(5), Digit(6), Operator('-')],
            [Digit(1), Digit(2), Digit(3), Operator('+')],
            [Digit(0), Decimal, SquareRoot, Equals],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, actions)| {
                actions
                    .iter()
                    .enumerate()
                    .map(move |(col, action)| KeypadButton::new(*action, row, col))
            })
            .collect();

        let power = vec![
            KeypadButton::new(KeypadAction::PowerOn, 0, 0),
            KeypadButton::new(KeypadAction::PowerOff, 0, 1),
        ];

        Self {
            buttons,
            power,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of grid buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all grid buttons
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets the ON and OFF buttons
    #[must_use]
    pub fn power_buttons(&self) -> &[KeypadButton] {
        &self.power
    }

    /// Iterates over every button, power row first
    pub fn all_buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.power.iter().chain(self.buttons.iter())
    }

    /// Gets a grid button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a grid button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the grid index of the button performing an action
    #[must_use]
    pub fn position_of(&self, action: KeypadAction) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Finds a button (grid or power) by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.all_buttons().find(|b| b.id == id)
    }

    /// Processes a button click and returns its action
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_button_by_id(element_id).map(|btn| btn.action)
    }

    /// Maps a browser key name to an action
    #[must_use]
    pub fn key_to_action(key: &str) -> Option<KeypadAction> {
        let action = match key {
            "." => KeypadAction::Decimal,
            "+" | "-" | "*" | "/" => KeypadAction::Operator(key.chars().next()?),
            "(" => KeypadAction::OpenParen,
            ")" => KeypadAction::CloseParen,
            "%" => KeypadAction::Percent,
            "r" | "R" => KeypadAction::SquareRoot,
            "Enter" | "=" => KeypadAction::Equals,
            "Escape" => KeypadAction::AllClear,
            "Backspace" | "Delete" => KeypadAction::Delete,
            _ => {
                let mut chars = key.chars();
                let digit = chars.next()?.to_digit(10)?;
                if chars.next().is_some() {
                    return None;
                }
                KeypadAction::Digit(digit as u8)
            }
        };
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== KeypadAction tests =====

    #[test]
    fn test_action_digit_to_char() {
        for d in 0..=9 {
            assert_eq!(
                KeypadAction::Digit(d).to_char(),
                char::from_digit(u32::from(d), 10)
            );
        }
    }

    #[test]
    fn test_action_transforms_have_no_char() {
        for action in [
            KeypadAction::AllClear,
            KeypadAction::Delete,
            KeypadAction::Percent,
            KeypadAction::SquareRoot,
            KeypadAction::Equals,
            KeypadAction::PowerOn,
            KeypadAction::PowerOff,
        ] {
            assert_eq!(action.to_char(), None);
        }
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(KeypadAction::Operator('/').label(), "÷");
        assert_eq!(KeypadAction::Operator('*').label(), "*");
        assert_eq!(KeypadAction::SquareRoot.label(), "√");
        assert_eq!(KeypadAction::AllClear.label(), "AC");
        assert_eq!(KeypadAction::Delete.label(), "DE");
        assert_eq!(KeypadAction::Decimal.label(), ".");
        assert_eq!(KeypadAction::PowerOff.label(), "OFF");
    }

    #[test]
    fn test_action_element_ids() {
        assert_eq!(KeypadAction::Digit(5).element_id(), "btn-5");
        assert_eq!(KeypadAction::Operator('+').element_id(), "btn-plus");
        assert_eq!(KeypadAction::Operator('/').element_id(), "btn-divide");
        assert_eq!(KeypadAction::SquareRoot.element_id(), "btn-sqrt");
        assert_eq!(KeypadAction::PowerOn.element_id(), "btn-on");
    }

    // ===== Keypad layout tests =====

    #[test]
    fn test_keypad_dimensions() {
        let keypad = Keypad::new();
        assert_eq!(keypad.dimensions(), (5, 4));
        assert_eq!(keypad.button_count(), 20);
        assert_eq!(keypad.power_buttons().len(), 2);
    }

    #[test]
    fn test_keypad_first_row() {
        let keypad = Keypad::new();
        let labels: Vec<String> = (0..4)
            .map(|col| keypad.get_button_at(0, col).unwrap().label())
            .collect();
        assert_eq!(labels, vec!["AC", "DE", "%", "÷"]);
    }

    #[test]
    fn test_keypad_last_row() {
        let keypad = Keypad::new();
        let labels: Vec<String> = (0..4)
            .map(|col| keypad.get_button_at(4, col).unwrap().label())
            .collect();
        assert_eq!(labels, vec!["0", ".", "√", "="]);
    }

    #[test]
    fn test_keypad_out_of_bounds() {
        let keypad = Keypad::new();
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_keypad_ids_unique() {
        let keypad = Keypad::new();
        let mut ids: Vec<&str> = keypad.all_buttons().map(|b| b.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_keypad_handle_click() {
        let keypad = Keypad::new();
        assert_eq!(keypad.handle_click("btn-7"), Some(KeypadAction::Digit(7)));
        assert_eq!(keypad.handle_click("btn-off"), Some(KeypadAction::PowerOff));
        assert_eq!(keypad.handle_click("nope"), None);
    }

    #[test]
    fn test_keypad_position_of() {
        let keypad = Keypad::new();
        assert_eq!(keypad.position_of(KeypadAction::AllClear), Some(0));
        assert_eq!(keypad.position_of(KeypadAction::Equals), Some(19));
        assert_eq!(keypad.position_of(KeypadAction::PowerOn), None);
    }

    // ===== key_to_action tests =====

    #[test]
    fn test_key_to_action_digits() {
        for d in 0..=9u8 {
            assert_eq!(
                Keypad::key_to_action(&d.to_string()),
                Some(KeypadAction::Digit(d))
            );
        }
    }

    #[test]
    fn test_key_to_action_controls() {
        assert_eq!(Keypad::key_to_action("Enter"), Some(KeypadAction::Equals));
        assert_eq!(Keypad::key_to_action("="), Some(KeypadAction::Equals));
        assert_eq!(Keypad::key_to_action("Escape"), Some(KeypadAction::AllClear));
        assert_eq!(Keypad::key_to_action("Backspace"), Some(KeypadAction::Delete));
        assert_eq!(Keypad::key_to_action("%"), Some(KeypadAction::Percent));
        assert_eq!(Keypad::key_to_action("r"), Some(KeypadAction::SquareRoot));
        assert_eq!(Keypad::key_to_action("("), Some(KeypadAction::OpenParen));
    }

    #[test]
    fn test_key_to_action_unknown() {
        assert_eq!(Keypad::key_to_action("x"), None);
        assert_eq!(Keypad::key_to_action("12"), None);
        assert_eq!(Keypad::key_to_action(""), None);
        assert_eq!(Keypad::key_to_action("Shift"), None);
    }
}
