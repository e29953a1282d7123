/// Width and height of a standard 1U key, in layout units.
pub const UNIT: f64 = 50.0;

/// Gap between horizontally adjacent keys and between consecutive rows.
pub const SPACING: f64 = 5.0;

/// Extra gap separating the function-row groups (Esc | F1-F4 | F5-F8 | F9-F12).
pub const GROUP_GAP: f64 = 25.0;

/// Extra gap between the main block and the navigation cluster.
pub const CLUSTER_GAP: f64 = 25.0;

// Key widths, in multiples of UNIT.
pub const W_1U: f64 = 1.0;
pub const W_1_25U: f64 = 1.25;
pub const W_1_5U: f64 = 1.5;
pub const W_1_75U: f64 = 1.75;
pub const W_2U: f64 = 2.0;
pub const W_2_25U: f64 = 2.25;
pub const W_2_75U: f64 = 2.75;
pub const W_6_25U: f64 = 6.25;

/// Where `generate` writes when no `--output` is given.
pub const DEFAULT_OUTPUT_PATH: &str = "keys.toml";
