use crate::error::AnalysisError;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One regular, non-empty file extracted from the backup archive.
#[derive(Debug)]
pub struct ArchiveEntry {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Materializes every regular, non-empty entry of a gzip compressed tar
/// archive. The whole archive is read up front; analysis never touches the
/// container again.
///
/// Any container-level failure (missing file, bad gzip stream, truncated
/// tar) maps to [`AnalysisError::ArchiveOpen`], the single fatal condition.
pub fn read_entries(path: &Path) -> Result<Vec<ArchiveEntry>, AnalysisError> {
    let open_err = |source| AnalysisError::ArchiveOpen {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(open_err)?;
    let mut archive = tar::Archive::new(GzDecoder::new(file));

    let mut entries = Vec::new();
    for entry in archive.entries().map_err(open_err)? {
        let mut entry = entry.map_err(open_err)?;
        if !entry.header().entry_type().is_file() || entry.size() == 0 {
            continue;
        }
        let name = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
        let mut bytes = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut bytes).map_err(open_err)?;
        entries.push(ArchiveEntry { name, bytes });
    }
    Ok(entries)
}
