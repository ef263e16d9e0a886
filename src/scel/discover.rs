//! Input discovery: a single file, or every `.scel` file in a directory.

use std::fs;
use std::path::{Path, PathBuf};
use log::debug;

use super::types::error::Result;

/// Conventional extension of cell dictionary files.
pub const SCEL_EXTENSION: &str = "scel";

/// Lists the files to convert for `input`.
///
/// A directory is searched non-recursively for `*.scel` files, returned in
/// sorted order. Anything else is returned as-is. A path that does not exist
/// is an error.
pub fn discover_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if !fs::metadata(input)?.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }

    let escaped = glob::Pattern::escape(&input.to_string_lossy());
    let pattern = Path::new(&escaped).join(format!("*.{}", SCEL_EXTENSION));
    let mut files = glob::glob(&pattern.to_string_lossy())?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    files.retain(|p| p.is_file());
    files.sort();

    debug!("Found {} cell dictionaries in {}", files.len(), input.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn lists_only_scel_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.scel"), b"").unwrap();
        fs::write(dir.path().join("a.scel"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        fs::create_dir(dir.path().join("nested.scel")).unwrap();
        fs::write(dir.path().join("nested.scel").join("c.scel"), b"").unwrap();

        let found = discover_inputs(dir.path()).unwrap();
        assert_eq!(found, vec![dir.path().join("a.scel"), dir.path().join("b.scel")]);
    }

    #[test]
    fn single_file_is_returned_as_is() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("words.bin");
        fs::write(&file, b"").unwrap();
        assert_eq!(discover_inputs(&file).unwrap(), vec![file]);
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let dir = tempdir().unwrap();
        assert!(discover_inputs(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_path_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(discover_inputs(&dir.path().join("missing")).is_err());
    }
}
