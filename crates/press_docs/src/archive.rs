use anyhow::{Context, Result, bail};
use std::collections::HashSet;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipArchive, ZipWriter};

/// Bundle `files` into a Deflate-compressed ZIP at `archive_path`.
///
/// Each entry is named by the file's base name, with no directories inside
/// the archive, so base names must be unique. Entries are stamped with the
/// ZIP epoch (1980-01-01) so identical inputs give identical archives.
pub fn bundle_files(archive_path: &Path, files: &[PathBuf]) -> Result<()> {
    let mut names = HashSet::new();
    let mut entries = Vec::with_capacity(files.len());
    for path in files {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("No usable file name in {}", path.display()))?;
        if !names.insert(name) {
            bail!("Duplicate archive entry name: {name}");
        }
        entries.push((name, path));
    }

    let file = File::create(archive_path)
        .with_context(|| format!("Failed to create archive: {}", archive_path.display()))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    for (name, path) in entries {
        let mut source = File::open(path)
            .with_context(|| format!("Failed to open {} for archiving", path.display()))?;
        zip.start_file(name, options)
            .with_context(|| format!("Failed to create archive entry {name}"))?;
        std::io::copy(&mut source, &mut zip)
            .with_context(|| format!("Failed to write archive entry {name}"))?;
        debug!("Archived {} as {name}", path.display());
    }

    let mut file = zip.finish().context("Failed to finalize zip archive")?;
    file.flush()
        .with_context(|| format!("Failed to flush archive: {}", archive_path.display()))?;
    Ok(())
}

/// Read every entry of a ZIP archive, in archive order, as `(name, bytes)`.
pub fn read_entries(archive_path: &Path) -> Result<Vec<(String, Vec<u8>)>> {
    let file = File::open(archive_path)
        .with_context(|| format!("Failed to open archive: {}", archive_path.display()))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("Not a zip archive: {}", archive_path.display()))?;

    let mut entries = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .with_context(|| format!("Failed to read archive entry #{i}"))?;
        // Declared sizes come from the archive headers and are not trusted
        let mut bytes = Vec::new();
        entry
            .read_to_end(&mut bytes)
            .with_context(|| format!("Failed to extract {}", entry.name()))?;
        entries.push((entry.name().to_string(), bytes));
    }
    Ok(entries)
}
