use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keylayout::error::LayoutResult;
use keylayout::generator::{LayoutParams, Section};
use keylayout::keycodes;

pub fn print_section_summary(sections: &[Section], params: &LayoutParams) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Section").add_attribute(Attribute::Bold),
        Cell::new("Keys").fg(Color::Cyan),
        Cell::new("Top"),
        Cell::new("Left"),
        Cell::new("Right"),
        Cell::new("Width (U)"),
    ]);

    for i in 1..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let mut total = 0;
    for s in sections {
        let top = s.keys.iter().map(|k| k.top).fold(f64::INFINITY, f64::min);
        let left = s.keys.iter().map(|k| k.left).fold(f64::INFINITY, f64::min);
        let right = s.right();
        total += s.keys.len();

        table.add_row(vec![
            Cell::new(&s.label).add_attribute(Attribute::Bold),
            Cell::new(s.keys.len()).fg(Color::Cyan),
            Cell::new(format!("{:.1}", top)),
            Cell::new(format!("{:.1}", left)),
            Cell::new(format!("{:.1}", right)),
            Cell::new(format!("{:.2}", (right - left) / params.unit)),
        ]);
    }

    table.add_row(vec![
        Cell::new("total").add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
    ]);
    println!("\n{}", table);
}

/// Per-key table, with the Linux input-event code each keycode maps to.
pub fn print_key_table(section: &Section) -> LayoutResult<()> {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Keycode"),
        Cell::new("Code").fg(Color::Green),
        Cell::new("Left"),
        Cell::new("Top"),
        Cell::new("Width"),
        Cell::new("Height"),
    ]);

    for k in &section.keys {
        let code = keycodes::resolve(&k.keycode)?;
        table.add_row(vec![
            Cell::new(&k.name),
            Cell::new(&k.keycode),
            Cell::new(code).fg(Color::Green),
            Cell::new(format!("{:.2}", k.left)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", k.top)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", k.width)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", k.height)).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("\nSection: {}", section.label);
    println!("{}", table);
    Ok(())
}
