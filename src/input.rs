//! Toolkit-independent input events consumed by the controller

use crate::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keys the controller reacts to. Everything else arrives as `Other`,
/// possibly carrying a text character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Space,
    Delete,
    Backspace,
    Enter,
    Escape,
    R,
    Other,
}

/// A single discrete input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    MouseDown { button: MouseButton, pos: Point },
    MouseUp { button: MouseButton, pos: Point },
    MouseMove { pos: Point },
    KeyDown { key: KeyCode, text: Option<char> },
}

impl InputEvent {
    /// Key press that produced a printable character
    pub fn char(c: char) -> Self {
        let key = match c {
            ' ' => KeyCode::Space,
            'r' | 'R' => KeyCode::R,
            _ => KeyCode::Other,
        };
        InputEvent::KeyDown { key, text: Some(c) }
    }

    /// Key press without text (Enter, Backspace, ...)
    pub fn key(key: KeyCode) -> Self {
        InputEvent::KeyDown { key, text: None }
    }

    pub fn left_click(pos: Point) -> Self {
        InputEvent::MouseDown {
            button: MouseButton::Left,
            pos,
        }
    }
}
