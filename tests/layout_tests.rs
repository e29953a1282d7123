use keylayout::consts::{SPACING, UNIT};
use keylayout::generator::{generate, row_baselines, LayoutGenerator, LayoutParams};
use keylayout::geometry::KeyRecord;
use keylayout::keycodes;
use keylayout::layouts::MainRow;
use rstest::rstest;
use std::collections::HashSet;

const BOTTOM_TOP: f64 = 275.0;

fn key(keycode: &str) -> KeyRecord {
    generate()
        .find_by_keycode(keycode)
        .cloned()
        .unwrap_or_else(|| panic!("no key with keycode '{}'", keycode))
}

// --- COUNTS & ORDER ---

#[test]
fn test_total_key_count() {
    assert_eq!(generate().key_count(), 87);
}

#[test]
fn test_section_counts() {
    let counts: Vec<usize> = LayoutGenerator::default()
        .sections()
        .iter()
        .map(|s| s.keys.len())
        .collect();
    assert_eq!(counts, vec![13, 14, 14, 13, 12, 8, 9, 4]);
}

#[test]
fn test_emission_order_boundaries() {
    let layout = generate();
    let codes: Vec<&str> = layout.key.iter().map(|k| k.keycode.as_str()).collect();
    assert_eq!(codes[0], "esc");
    assert_eq!(codes[12], "f12");
    assert_eq!(codes[13], "grave");
    assert_eq!(codes[27], "tab");
    assert_eq!(codes[41], "capslock");
    assert_eq!(codes[54], "leftshift");
    assert_eq!(codes[66], "leftctrl");
    assert_eq!(codes[74], "printscreen");
    assert_eq!(codes[82], "pagedown");
    assert_eq!(&codes[83..], &["up", "left", "down", "right"]);
}

// --- LITERAL SCENARIOS ---

#[rstest]
#[case("esc", "Esc", 0.0, 0.0, 50.0)]
#[case("f1", "F1", 80.0, 0.0, 50.0)]
#[case("f5", "F5", 325.0, 0.0, 50.0)]
#[case("f9", "F9", 570.0, 0.0, 50.0)]
#[case("f12", "F12", 735.0, 0.0, 50.0)]
#[case("backspace", "Backspace", 715.0, 55.0, 100.0)]
#[case("tab", "Tab", 0.0, 110.0, 75.0)]
#[case("backslash", "\\", 740.0, 110.0, 75.0)]
#[case("enter", "Enter", 697.5, 165.0, 112.5)]
#[case("rightshift", "Shift", 667.5, 220.0, 137.5)]
#[case("space", "Space", 202.5, 275.0, 312.5)]
#[case("rightctrl", "Ctrl", 722.5, 275.0, 62.5)]
fn test_key_placement(
    #[case] keycode: &str,
    #[case] name: &str,
    #[case] left: f64,
    #[case] top: f64,
    #[case] width: f64,
) {
    let k = key(keycode);
    assert_eq!(k.name, name);
    assert_eq!(k.left, left);
    assert_eq!(k.top, top);
    assert_eq!(k.width, width);
    assert_eq!(k.height, 50.0);
}

#[test]
fn test_escape_record() {
    assert_eq!(
        key("esc"),
        KeyRecord::new("Esc", "esc", 0.0, 0.0, 50.0, 50.0)
    );
}

#[test]
fn test_up_arrow_sits_one_row_above_bottom() {
    let up = key("up");
    assert_eq!(up.top, BOTTOM_TOP - 55.0);
    assert_eq!(up.left, key("home").left);
}

// --- CLUSTERS ---

#[rstest]
#[case("printscreen", 845.0, 0.0)]
#[case("scrolllock", 900.0, 0.0)]
#[case("pause", 955.0, 0.0)]
#[case("insert", 845.0, 55.0)]
#[case("home", 900.0, 55.0)]
#[case("pageup", 955.0, 55.0)]
#[case("delete", 845.0, 110.0)]
#[case("end", 900.0, 110.0)]
#[case("pagedown", 955.0, 110.0)]
#[case("left", 845.0, 275.0)]
#[case("down", 900.0, 275.0)]
#[case("right", 955.0, 275.0)]
fn test_cluster_positions(#[case] keycode: &str, #[case] left: f64, #[case] top: f64) {
    let k = key(keycode);
    assert_eq!(k.left, left);
    assert_eq!(k.top, top);
    assert_eq!(k.width, UNIT);
}

#[test]
fn test_nav_origin_derived_from_widest_row() {
    // Backspace is the widest of the rows that bound the cluster.
    let bksp = key("backspace");
    assert_eq!(key("insert").left, bksp.right() + SPACING + 25.0);
}

// --- ROW INVARIANTS ---

#[test]
fn test_row_tops() {
    let generator = LayoutGenerator::default();
    let sections = generator.sections();
    let tops = row_baselines(generator.params());

    assert_eq!(tops[0], 0.0);
    for i in 1..6 {
        assert_eq!(tops[i] - tops[i - 1], UNIT + SPACING);
        assert!(sections[i].keys.iter().all(|k| k.top == tops[i]));
    }
}

#[test]
fn test_rows_are_contiguous_except_function_gaps() {
    let sections = LayoutGenerator::default().sections();
    let gap_after: HashSet<&str> = ["esc", "f4", "f8"].into_iter().collect();

    for s in &sections[..6] {
        for pair in s.keys.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let mut expected = a.left + a.width + SPACING;
            if gap_after.contains(a.keycode.as_str()) {
                expected += 25.0;
            }
            assert_eq!(b.left, expected, "{} -> {}", a.keycode, b.keycode);
            assert!(b.left > a.left);
        }
        assert_eq!(s.keys[0].left, 0.0, "{}", s.label);
    }
}

#[test]
fn test_every_row_starts_at_baseline() {
    let p = LayoutParams::default();
    let tops = row_baselines(&p);
    let layout = generate();
    for row in [MainRow::Number, MainRow::Home] {
        let first = row.specs()[0].keycode;
        assert_eq!(layout.find_by_keycode(first).unwrap().top, tops[row.index()]);
    }
}

// --- FIELD COMPLETENESS ---

#[test]
fn test_fields_populated_and_positive() {
    for k in generate().key {
        assert!(!k.name.is_empty());
        assert!(!k.keycode.is_empty());
        assert!(k.width > 0.0, "{}", k.keycode);
        assert!(k.height > 0.0, "{}", k.keycode);
        assert!(k.left >= 0.0 && k.top >= 0.0);
    }
}

#[test]
fn test_keycodes_unique_and_resolvable() {
    let layout = generate();
    let mut seen_names = HashSet::new();
    let mut seen_codes = HashSet::new();
    for k in &layout.key {
        assert!(seen_names.insert(k.keycode.clone()), "duplicate {}", k.keycode);
        let code = keycodes::resolve(&k.keycode)
            .unwrap_or_else(|e| panic!("{} does not resolve: {}", k.keycode, e));
        assert!(seen_codes.insert(code), "duplicate code {}", code);
    }
}

#[test]
fn test_layout_bounds() {
    let layout = generate();
    assert_eq!(layout.max_right(), 1005.0);
    assert_eq!(layout.max_bottom(), 325.0);
}
