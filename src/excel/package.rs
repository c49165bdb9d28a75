use std::fs::File;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::common::{PackageError, PackageResult};

const CONTENT_TYPES: &str = "[Content_Types].xml";

/// Expands a spreadsheet archive into `dir`, one file per part.
pub fn expand(bytes: &[u8], dir: &Path) -> PackageResult<usize> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| PackageError::Template(e.to_string()))?;
    let parts = archive.len();
    archive.extract(dir)?;
    Ok(parts)
}

/// Part name of `path` relative to `root`, always `/`-separated.
fn part_name(root: &Path, path: &Path) -> PackageResult<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|e| PackageError::Io(io::Error::new(io::ErrorKind::InvalidInput, e)))?;
    let segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(segments.join("/"))
}

/// Zips every file under `root` into an in-memory spreadsheet archive.
pub fn assemble(root: &Path) -> PackageResult<Vec<u8>> {
    let mut parts: Vec<(String, PathBuf)> = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_file() {
            parts.push((part_name(root, entry.path())?, entry.into_path()));
        }
    }

    // [Content_Types].xml first, the rest in path order.
    parts.sort_by(|(a, _), (b, _)| (a != CONTENT_TYPES, a).cmp(&(b != CONTENT_TYPES, b)));

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, path) in &parts {
        writer.start_file(name.as_str(), options)?;
        let mut file = File::open(path)?;
        io::copy(&mut file, &mut writer)?;
    }
    let cursor = writer.finish()?;

    tracing::debug!(parts = parts.len(), "Assembled package");
    Ok(cursor.into_inner())
}
