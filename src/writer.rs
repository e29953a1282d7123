use crate::error::LayoutResult;
use crate::geometry::KeyboardLayout;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Renders the layout as a `[[key]]` TOML document.
pub fn to_toml_string(layout: &KeyboardLayout) -> LayoutResult<String> {
    Ok(toml::to_string(layout)?)
}

/// Writes `contents` to a uniquely named file beside `path`, then renames it
/// into place, so a failed write never leaves a truncated target behind.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> std::io::Result<()> {
    let path = path.as_ref();
    // Same directory keeps the rename on one filesystem.
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Dropped (and removed) on any early return.
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(contents.as_ref())?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Serializes and writes the layout. Returns the number of bytes written.
pub fn write_layout<P: AsRef<Path>>(layout: &KeyboardLayout, path: P) -> LayoutResult<usize> {
    let path = path.as_ref();
    let rendered = to_toml_string(layout)?;
    debug!("Rendered {} keys into {} bytes", layout.key_count(), rendered.len());

    atomic_write(path, &rendered)?;
    info!("💾 Wrote {}", path.display());
    Ok(rendered.len())
}
