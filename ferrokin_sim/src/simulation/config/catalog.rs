// ferrokin_sim/src/simulation/config/catalog.rs

//! Resolves a `--scenario` argument into the list of scenario files to run.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::SimError;

/// A single file is returned as is. A directory is walked recursively and
/// every `.toml` file below it is returned, sorted by path.
pub fn discover_scenarios(path: &Path) -> Result<Vec<PathBuf>, SimError> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    info!("Scanning scenario directory: {:?}", path);
    let mut scenarios = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_dir()
            && entry.path().extension().map_or(false, |ext| ext == "toml")
        {
            debug!("Found scenario: {:?}", entry.path());
            scenarios.push(entry.into_path());
        }
    }

    if scenarios.is_empty() {
        return Err(SimError::NoScenarios(path.to_path_buf()));
    }
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ferrokin_catalog_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("nested")).unwrap();
        dir
    }

    #[test]
    fn test_directory_yields_sorted_toml_files() {
        let dir = scratch_dir("sorted");
        fs::write(dir.join("b.toml"), "").unwrap();
        fs::write(dir.join("a.toml"), "").unwrap();
        fs::write(dir.join("notes.md"), "").unwrap();
        fs::write(dir.join("nested").join("c.toml"), "").unwrap();

        let found = discover_scenarios(&dir).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.strip_prefix(&dir).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("a.toml"),
                PathBuf::from("b.toml"),
                PathBuf::from("nested").join("c.toml"),
            ]
        );
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_empty_directory_is_an_error() {
        let dir = scratch_dir("empty");
        assert!(matches!(discover_scenarios(&dir), Err(SimError::NoScenarios(_))));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_file_is_returned_as_is() {
        let path = Path::new("does/not/need/to/exist.toml");
        assert_eq!(discover_scenarios(path).unwrap(), vec![path.to_path_buf()]);
    }
}
