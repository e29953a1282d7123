use crate::reports;
use clap::Args;
use keylayout::error::{LayoutError, LayoutResult};
use keylayout::generator::{LayoutGenerator, Section};

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Also print every key of the matching sections
    #[arg(long, default_value_t = false)]
    pub keys: bool,

    /// Only include sections whose name contains this text
    #[arg(short, long)]
    pub section: Option<String>,

    /// Print a single key, looked up by keycode
    #[arg(short, long)]
    pub key: Option<String>,
}

pub fn run(args: ReportArgs) -> LayoutResult<()> {
    let generator = LayoutGenerator::default();

    if let Some(ref keycode) = args.key {
        let layout = generator.generate();
        let record = layout
            .find_by_keycode(keycode)
            .ok_or_else(|| LayoutError::Keycode(format!("No key with keycode '{}'", keycode)))?;

        let section = Section {
            label: keycode.clone(),
            keys: vec![record.clone()],
        };
        return reports::print_key_table(&section);
    }

    let mut sections = generator.sections();

    if let Some(ref filter) = args.section {
        let filter = filter.to_lowercase();
        sections.retain(|s| s.label.contains(&filter));
    }

    if sections.is_empty() {
        println!("No sections found matching criteria.");
        return Ok(());
    }

    println!("\n📐 === LAYOUT REPORT === 📐");
    reports::print_section_summary(&sections, generator.params());

    let layout = generator.generate();
    println!(
        "Bounds: {:.1} x {:.1} ({} keys)",
        layout.max_right(),
        layout.max_bottom(),
        layout.key_count()
    );

    if args.keys {
        for section in &sections {
            reports::print_key_table(section)?;
        }
    }
    Ok(())
}
