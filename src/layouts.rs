use crate::consts::{W_1U, W_1_25U, W_1_5U, W_1_75U, W_2U, W_2_25U, W_2_75U, W_6_25U};
use strum_macros::{Display, EnumIter};

/// One slot of a row table. `width` is in units (1.0 = 1U).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeySpec {
    pub label: &'static str,
    pub keycode: &'static str,
    pub width: f64,
    /// Insert the group gap after this key, on top of the normal spacing.
    pub gap_after: bool,
}

const fn key(label: &'static str, keycode: &'static str, width: f64) -> KeySpec {
    KeySpec {
        label,
        keycode,
        width,
        gap_after: false,
    }
}

const fn key_gap(label: &'static str, keycode: &'static str, width: f64) -> KeySpec {
    KeySpec {
        label,
        keycode,
        width,
        gap_after: true,
    }
}

/// The six rows of the main block, top to bottom.
#[derive(Debug, Clone, Copy, EnumIter, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum MainRow {
    Function,
    Number,
    Qwerty,
    Home,
    BottomLetter,
    Bottom,
}

impl MainRow {
    /// Zero-based position from the top.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn specs(&self) -> &'static [KeySpec] {
        match self {
            Self::Function => &FUNCTION_ROW,
            Self::Number => &NUMBER_ROW,
            Self::Qwerty => &QWERTY_ROW,
            Self::Home => &HOME_ROW,
            Self::BottomLetter => &BOTTOM_LETTER_ROW,
            Self::Bottom => &BOTTOM_ROW,
        }
    }

    /// Rows whose right edge defines where the navigation cluster starts.
    pub fn bounds_main_block(&self) -> bool {
        matches!(
            self,
            Self::Number | Self::Qwerty | Self::Home | Self::BottomLetter
        )
    }
}

pub const FUNCTION_ROW: [KeySpec; 13] = [
    key_gap("Esc", "esc", W_1U),
    key("F1", "f1", W_1U),
    key("F2", "f2", W_1U),
    key("F3", "f3", W_1U),
    key_gap("F4", "f4", W_1U),
    key("F5", "f5", W_1U),
    key("F6", "f6", W_1U),
    key("F7", "f7", W_1U),
    key_gap("F8", "f8", W_1U),
    key("F9", "f9", W_1U),
    key("F10", "f10", W_1U),
    key("F11", "f11", W_1U),
    key("F12", "f12", W_1U),
];

pub const NUMBER_ROW: [KeySpec; 14] = [
    key("`", "grave", W_1U),
    key("1", "1", W_1U),
    key("2", "2", W_1U),
    key("3", "3", W_1U),
    key("4", "4", W_1U),
    key("5", "5", W_1U),
    key("6", "6", W_1U),
    key("7", "7", W_1U),
    key("8", "8", W_1U),
    key("9", "9", W_1U),
    key("0", "0", W_1U),
    key("-", "minus", W_1U),
    key("=", "equal", W_1U),
    key("Backspace", "backspace", W_2U),
];

pub const QWERTY_ROW: [KeySpec; 14] = [
    key("Tab", "tab", W_1_5U),
    key("Q", "q", W_1U),
    key("W", "w", W_1U),
    key("E", "e", W_1U),
    key("R", "r", W_1U),
    key("T", "t", W_1U),
    key("Y", "y", W_1U),
    key("U", "u", W_1U),
    key("I", "i", W_1U),
    key("O", "o", W_1U),
    key("P", "p", W_1U),
    key("[", "leftbrace", W_1U),
    key("]", "rightbrace", W_1U),
    key("\\", "backslash", W_1_5U),
];

pub const HOME_ROW: [KeySpec; 13] = [
    key("Caps Lock", "capslock", W_1_75U),
    key("A", "a", W_1U),
    key("S", "s", W_1U),
    key("D", "d", W_1U),
    key("F", "f", W_1U),
    key("G", "g", W_1U),
    key("H", "h", W_1U),
    key("J", "j", W_1U),
    key("K", "k", W_1U),
    key("L", "l", W_1U),
    key(";", "semicolon", W_1U),
    key("'", "apostrophe", W_1U),
    key("Enter", "enter", W_2_25U),
];

pub const BOTTOM_LETTER_ROW: [KeySpec; 12] = [
    key("Shift", "leftshift", W_2_25U),
    key("Z", "z", W_1U),
    key("X", "x", W_1U),
    key("C", "c", W_1U),
    key("V", "v", W_1U),
    key("B", "b", W_1U),
    key("N", "n", W_1U),
    key("M", "m", W_1U),
    key(",", "comma", W_1U),
    key(".", "dot", W_1U),
    key("/", "slash", W_1U),
    key("Shift", "rightshift", W_2_75U),
];

pub const BOTTOM_ROW: [KeySpec; 8] = [
    key("Ctrl", "leftctrl", W_1_25U),
    key("Super", "leftmeta", W_1_25U),
    key("Alt", "leftalt", W_1_25U),
    key("Space", "space", W_6_25U),
    key("Alt", "rightalt", W_1_25U),
    key("Super", "rightmeta", W_1_25U),
    key("Menu", "menu", W_1_25U),
    key("Ctrl", "rightctrl", W_1_25U),
];

/// Navigation cluster, one entry per row (function, number, qwerty) and column.
pub const NAV_CLUSTER: [[(&str, &str); 3]; 3] = [
    [
        ("Print Screen", "printscreen"),
        ("Scroll Lock", "scrolllock"),
        ("Pause", "pause"),
    ],
    [("Ins", "insert"), ("Home", "home"), ("PgUp", "pageup")],
    [("Del", "delete"), ("End", "end"), ("PgDn", "pagedown")],
];

/// Rows the navigation cluster sits on, top to bottom.
pub const NAV_ROWS: [MainRow; 3] = [MainRow::Function, MainRow::Number, MainRow::Qwerty];
