use clap::Args;
use keylayout::consts::DEFAULT_OUTPUT_PATH;
use keylayout::error::LayoutResult;
use keylayout::generator::LayoutGenerator;
use keylayout::writer;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Destination file; replaced atomically
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

pub fn run(args: GenerateArgs) -> LayoutResult<()> {
    // Fully computed before the sink is touched.
    let layout = LayoutGenerator::default().generate();
    info!("📐 Computed {} keys", layout.key_count());

    writer::write_layout(&layout, &args.output)?;
    println!("{} generated successfully.", args.output.display());
    Ok(())
}
