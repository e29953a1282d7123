// Codes follow linux/include/uapi/linux/input-event-codes.h.
use crate::error::{LayoutError, LayoutResult};

/// Lowercases, drops underscores, and drops hyphens when the name contains
/// letters (so "-" stays the minus key but "page-up" becomes "pageup").
pub fn normalize(name: &str) -> String {
    let lowered = name.to_lowercase().replace('_', "");
    if lowered.chars().any(char::is_alphabetic) {
        lowered.replace('-', "")
    } else {
        lowered
    }
}

/// Resolves a logical keycode or alias to its Linux input-event code.
pub fn resolve(name: &str) -> LayoutResult<u16> {
    let n = normalize(name);

    match n.as_str() {
        "shift" => {
            return Err(LayoutError::Keycode(
                "Ambiguous key name 'shift'. Use 'leftshift' or 'rightshift'.".into(),
            ))
        }
        "ctrl" | "control" => {
            return Err(LayoutError::Keycode(format!(
                "Ambiguous key name '{}'. Use 'leftctrl' or 'rightctrl'.",
                name
            )))
        }
        "alt" => {
            return Err(LayoutError::Keycode(
                "Ambiguous key name 'alt'. Use 'leftalt' or 'rightalt' (or 'altgr').".into(),
            ))
        }
        "meta" | "win" | "windows" | "super" => {
            return Err(LayoutError::Keycode(format!(
                "Ambiguous key name '{}'. Use 'leftmeta' or 'rightmeta'.",
                name
            )))
        }
        _ => {}
    }

    let code = match n.as_str() {
        "esc" | "escape" => 1,
        "1" => 2,
        "2" => 3,
        "3" => 4,
        "4" => 5,
        "5" => 6,
        "6" => 7,
        "7" => 8,
        "8" => 9,
        "9" => 10,
        "0" => 11,
        "minus" | "-" => 12,
        "equal" | "=" => 13,
        "backspace" | "bksp" => 14,
        "tab" => 15,
        "q" => 16,
        "w" => 17,
        "e" => 18,
        "r" => 19,
        "t" => 20,
        "y" => 21,
        "u" => 22,
        "i" => 23,
        "o" => 24,
        "p" => 25,
        "leftbrace" | "[" | "lbracket" => 26,
        "rightbrace" | "]" | "rbracket" => 27,
        "enter" | "return" => 28,
        "leftctrl" | "lctrl" => 29,
        "a" => 30,
        "s" => 31,
        "d" => 32,
        "f" => 33,
        "g" => 34,
        "h" => 35,
        "j" => 36,
        "k" => 37,
        "l" => 38,
        "semicolon" | ";" => 39,
        "apostrophe" | "'" | "quote" => 40,
        "grave" | "`" | "tilde" => 41,
        "leftshift" | "lshift" => 42,
        "backslash" | "\\" => 43,
        "z" => 44,
        "x" => 45,
        "c" => 46,
        "v" => 47,
        "b" => 48,
        "n" => 49,
        "m" => 50,
        "comma" | "," => 51,
        "dot" | "." | "period" => 52,
        "slash" | "/" => 53,
        "rightshift" | "rshift" => 54,
        "leftalt" | "lalt" => 56,
        "space" => 57,
        "capslock" | "caps" => 58,
        "f1" => 59,
        "f2" => 60,
        "f3" => 61,
        "f4" => 62,
        "f5" => 63,
        "f6" => 64,
        "f7" => 65,
        "f8" => 66,
        "f9" => 67,
        "f10" => 68,
        "numlock" => 69,
        "scrolllock" | "scroll" => 70,
        "f11" => 87,
        "f12" => 88,
        "rightctrl" | "rctrl" => 97,
        "sysrq" | "printscreen" | "prtscr" => 99,
        "rightalt" | "ralt" | "altgr" => 100,
        "home" => 102,
        "up" | "uparrow" => 103,
        "pageup" | "pgup" => 104,
        "left" | "leftarrow" => 105,
        "right" | "rightarrow" => 106,
        "end" => 107,
        "down" | "downarrow" => 108,
        "pagedown" | "pgdn" => 109,
        "insert" | "ins" => 110,
        "delete" | "del" => 111,
        "pause" | "pausebreak" => 119,
        "leftmeta" | "lmeta" | "leftwindows" | "lwin" | "leftsuper" | "lsuper" => 125,
        "rightmeta" | "rmeta" | "rightwindows" | "rwin" | "rightsuper" | "rsuper" => 126,
        "compose" => 127,
        "menu" | "appmenu" => 139,
        "f13" => 183,
        "f14" => 184,
        "f15" => 185,
        "f16" => 186,
        "f17" => 187,
        "f18" => 188,
        "f19" => 189,
        "f20" => 190,
        "f21" => 191,
        "f22" => 192,
        "f23" => 193,
        "f24" => 194,
        "fn" => 0x1d0,
        _ => {
            return Err(LayoutError::Keycode(format!(
                "Unknown key name: '{}'",
                name
            )))
        }
    };

    Ok(code)
}
