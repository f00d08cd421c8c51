//! Writing a single collection face as a standalone font (made by FontLab https://www.fontlab.com/)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use write_fonts::FontBuilder;

use crate::collection::FontCollection;
use crate::tags::{tag_to_string, to_write_tag};

/// Serialize face `index` as a standalone sfnt.
///
/// Tables are copied byte for byte; the builder lays out a fresh table
/// directory and picks the sfnt version from the tables present.
pub fn extract_face(collection: &FontCollection, index: u32) -> Result<Vec<u8>> {
    let font = collection.face(index)?;
    let mut builder = FontBuilder::new();

    for record in font.table_directory.table_records() {
        let tag = record.tag();
        let data = font.table_data(tag).ok_or_else(|| {
            anyhow!(
                "face {index}: table '{}' lies outside the file",
                tag_to_string(tag)
            )
        })?;
        debug!(
            "face {index}: copying '{}' ({} bytes)",
            tag_to_string(tag),
            data.len()
        );
        builder.add_raw(to_write_tag(tag), data.as_bytes());
    }

    Ok(builder.build())
}

/// Extract face `index` and write it to `out`, replacing any existing file.
///
/// Missing parent directories are created first. Returns the path written.
pub fn save_face(
    collection: &FontCollection,
    index: u32,
    out: impl AsRef<Path>,
) -> Result<PathBuf> {
    let out = out.as_ref();
    let bytes = extract_face(collection, index)?;

    ensure_parent_dir(out)?;
    fs::write(out, &bytes).with_context(|| format!("writing {}", out.display()))?;
    info!("wrote face {index} ({} bytes) to {}", bytes.len(), out.display());

    Ok(out.to_path_buf())
}

/// Create the directory that will hold `path`, including missing ancestors.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let absolute =
        std::path::absolute(path).with_context(|| format!("resolving {}", path.display()))?;

    if let Some(dir) = absolute.parent() {
        if !dir.as_os_str().is_empty() && !dir.is_dir() {
            debug!("creating directory {}", dir.display());
            fs::create_dir_all(dir)
                .with_context(|| format!("creating directory {}", dir.display()))?;
        }
    }

    Ok(())
}
