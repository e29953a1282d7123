use crate::consts::{CLUSTER_GAP, GROUP_GAP, SPACING, UNIT};
use crate::geometry::{max_right, KeyRecord, KeyboardLayout};
use crate::layouts::{KeySpec, MainRow, NAV_CLUSTER, NAV_ROWS};
use strum::IntoEnumIterator;
use tracing::debug;

/// Scalar inputs of the layout arithmetic. `Default` is the shipped geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub unit: f64,
    pub spacing: f64,
    pub group_gap: f64,
    pub cluster_gap: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            unit: UNIT,
            spacing: SPACING,
            group_gap: GROUP_GAP,
            cluster_gap: CLUSTER_GAP,
        }
    }
}

impl LayoutParams {
    /// Distance between the origins of two adjacent 1U keys (or rows).
    pub fn pitch(&self) -> f64 {
        self.unit + self.spacing
    }
}

/// A contiguous group of keys in emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub label: String,
    pub keys: Vec<KeyRecord>,
}

impl Section {
    pub fn right(&self) -> f64 {
        max_right(&self.keys)
    }
}

/// Horizontal origins of the three navigation-cluster columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavColumns {
    pub left: f64,
    pub middle: f64,
    pub right: f64,
}

/// Top of every main row, indexed by `MainRow::index()`.
pub fn row_baselines(params: &LayoutParams) -> [f64; 6] {
    let mut tops = [0.0; 6];
    for i in 1..tops.len() {
        tops[i] = tops[i - 1] + params.unit + params.spacing;
    }
    tops
}

/// Lays out one row left to right starting at x = 0.
///
/// Returns the row's keys and its right edge (the last key's `left + width`).
pub fn build_row(specs: &[KeySpec], top: f64, params: &LayoutParams) -> (Vec<KeyRecord>, f64) {
    let (keys, _) = specs.iter().fold(
        (Vec::with_capacity(specs.len()), 0.0f64),
        |(mut keys, left), spec| {
            let width = spec.width * params.unit;
            keys.push(KeyRecord::new(
                spec.label,
                spec.keycode,
                left,
                top,
                width,
                params.unit,
            ));

            let mut next = left + (width + params.spacing);
            if spec.gap_after {
                next += params.group_gap;
            }
            (keys, next)
        },
    );

    let right = keys.last().map_or(0.0, KeyRecord::right);
    (keys, right)
}

/// Column origins of the navigation cluster, placed right of `main_block_right`.
pub fn nav_columns(main_block_right: f64, params: &LayoutParams) -> NavColumns {
    let origin = main_block_right + params.spacing + params.cluster_gap;
    NavColumns {
        left: origin,
        middle: origin + params.pitch(),
        right: origin + params.pitch() * 2.0,
    }
}

pub fn build_nav_cluster(cols: &NavColumns, tops: &[f64; 6], params: &LayoutParams) -> Vec<KeyRecord> {
    let xs = [cols.left, cols.middle, cols.right];
    let mut keys = Vec::with_capacity(9);

    for (row, labels) in NAV_ROWS.iter().zip(NAV_CLUSTER.iter()) {
        let top = tops[row.index()];
        for (x, (name, keycode)) in xs.iter().zip(labels.iter()) {
            keys.push(KeyRecord::new(name, keycode, *x, top, params.unit, params.unit));
        }
    }
    keys
}

/// Inverted T under the navigation cluster: Up, Left, Down, Right.
pub fn build_arrow_cluster(cols: &NavColumns, bottom_top: f64, params: &LayoutParams) -> Vec<KeyRecord> {
    let u = params.unit;
    let up_top = bottom_top - u - params.spacing;

    vec![
        KeyRecord::new("Up", "up", cols.middle, up_top, u, u),
        KeyRecord::new("Left", "left", cols.left, bottom_top, u, u),
        KeyRecord::new("Down", "down", cols.middle, bottom_top, u, u),
        KeyRecord::new("Right", "right", cols.right, bottom_top, u, u),
    ]
}

pub struct LayoutGenerator {
    params: LayoutParams,
}

impl Default for LayoutGenerator {
    fn default() -> Self {
        Self::new(LayoutParams::default())
    }
}

impl LayoutGenerator {
    pub fn new(params: LayoutParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Builds every section in emission order: the six main rows, then the
    /// navigation cluster, then the arrow cluster.
    pub fn sections(&self) -> Vec<Section> {
        let p = &self.params;
        let tops = row_baselines(p);
        let mut sections = Vec::with_capacity(8);
        let mut main_block_right = 0.0f64;

        for row in MainRow::iter() {
            let (keys, right) = build_row(row.specs(), tops[row.index()], p);
            debug!(
                "Row {:<13} top={:>6.1} keys={:>2} right={:.2}",
                row.to_string(),
                tops[row.index()],
                keys.len(),
                right
            );
            if row.bounds_main_block() {
                main_block_right = main_block_right.max(right);
            }
            sections.push(Section {
                label: row.to_string(),
                keys,
            });
        }

        let cols = nav_columns(main_block_right, p);
        debug!(
            "Main block right edge {:.2}, navigation cluster starts at x={:.2}",
            main_block_right, cols.left
        );

        sections.push(Section {
            label: "navigation".to_string(),
            keys: build_nav_cluster(&cols, &tops, p),
        });
        sections.push(Section {
            label: "arrows".to_string(),
            keys: build_arrow_cluster(&cols, tops[MainRow::Bottom.index()], p),
        });

        sections
    }

    pub fn generate(&self) -> KeyboardLayout {
        let key = self
            .sections()
            .into_iter()
            .flat_map(|s| s.keys)
            .collect();
        KeyboardLayout { key }
    }
}

/// Layout with the shipped constants.
pub fn generate() -> KeyboardLayout {
    LayoutGenerator::default().generate()
}
