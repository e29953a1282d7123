use serde::{Deserialize, Serialize};

/// One physical key. Field order is the order keys are written to `keys.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyRecord {
    pub name: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub keycode: String,
}

impl KeyRecord {
    pub fn new(name: &str, keycode: &str, left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            name: name.to_string(),
            left,
            top,
            width,
            height,
            keycode: keycode.to_string(),
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// The document root of `keys.toml`: a single `[[key]]` array of tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyboardLayout {
    pub key: Vec<KeyRecord>,
}

impl KeyboardLayout {
    pub fn key_count(&self) -> usize {
        self.key.len()
    }

    pub fn find_by_keycode(&self, keycode: &str) -> Option<&KeyRecord> {
        self.key.iter().find(|k| k.keycode == keycode)
    }

    /// Rightmost edge over every key, or 0.0 for an empty layout.
    pub fn max_right(&self) -> f64 {
        max_right(&self.key)
    }

    pub fn max_bottom(&self) -> f64 {
        self.key.iter().fold(0.0f64, |max, k| max.max(k.bottom()))
    }
}

pub fn max_right(keys: &[KeyRecord]) -> f64 {
    keys.iter().fold(0.0f64, |max, k| max.max(k.right()))
}
