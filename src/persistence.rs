// File: src/persistence.rs
use crate::core::types::Snapshot;
use crate::error::Result;
use std::fs::{self, File};
use std::io::{BufReader, Seek, Write};
use std::path::Path;
use tempfile::Builder;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Archive member holding the spelling model.
pub const LEXICON_MEMBER: &str = "lexicon.bin";
/// Archive member holding the context model.
pub const CONTEXT_MEMBER: &str = "context.bin";

/// Writes every component that has a snapshot into a zip archive at `path`.
///
/// The archive is built in a temporary file next to `path` and renamed over
/// it only once complete. On any failure the temporary file is removed and
/// `path` is left as it was.
pub fn save_to_disk(path: &Path, members: &[(&str, Option<&dyn Snapshot>)]) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let mut temp_file = Builder::new().prefix("temp-").tempfile_in(parent_dir)?;
    write_archive(temp_file.as_file_mut(), members)?;
    temp_file.as_file().sync_all()?;

    temp_file.persist(path)?;
    log::debug!("snapshot saved to {}", path.display());
    Ok(())
}

fn write_archive<W: Write + Seek>(writer: W, members: &[(&str, Option<&dyn Snapshot>)]) -> Result<()> {
    let mut archive = ZipWriter::new(writer);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for &(name, component) in members {
        let Some(component) = component else {
            log::debug!("skipping {}: component has no snapshot", name);
            continue;
        };
        archive.start_file(name, options)?;
        component.save(&mut archive)?;
    }

    archive.finish()?;
    Ok(())
}

/// Restores each recognized member of the archive at `path` into its
/// component. Members are applied in archive order; a failure stops the
/// load and leaves the failing component unchanged.
pub fn load_from_disk(path: &Path, members: &[(&str, Option<&dyn Snapshot>)]) -> Result<()> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let name = entry.name().to_owned();

        match members.iter().find(|(member, _)| *member == name) {
            Some((_, Some(component))) => {
                component.load(&mut entry)?;
                log::debug!("restored {} from {}", name, path.display());
            }
            Some((_, None)) => log::debug!("skipping {}: component has no snapshot", name),
            None => log::warn!("ignoring unknown snapshot member {:?}", name),
        }
    }

    Ok(())
}
