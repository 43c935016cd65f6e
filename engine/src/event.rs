//====================================================================

//====================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Tab,
    Space,
    Backspace,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PadButton {
    A,
    B,
    X,
    Y,
    Start,
    Select,
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    LeftX,
    LeftY,
    RightX,
    RightY,
}

/// Input delivered once per pending event per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    KeyDown(Key),
    KeyUp(Key),
    MouseMove { x: i32, y: i32 },
    ClickDown { button: MouseButton, x: i32, y: i32 },
    ClickUp { button: MouseButton, x: i32, y: i32 },
    PadDown(PadButton),
    PadUp(PadButton),
    Axis { axis: Axis, value: i16 },
    ThemeChanged,
    Quit,
}

impl Event {
    /// The key of a key down event.
    #[inline]
    pub fn key_down(&self) -> Option<Key> {
        match self {
            Event::KeyDown(key) => Some(*key),
            _ => None,
        }
    }
}

//====================================================================
