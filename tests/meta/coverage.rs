//! Keeps `tests/unit/` in step with `src/`: one unit test file per source file, and
//! every test file actually containing tests

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Module declarations and the crate root carry no logic of their own
    fn needs_counterpart(relative: &str) -> bool {
        relative != "lib.rs" && !relative.ends_with("mod.rs")
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let sources = relative_paths(Path::new(SRC_DIR)).unwrap_or_default();
        let units = relative_paths(Path::new(UNIT_DIR)).unwrap_or_default();
        assert!(!sources.is_empty(), "no sources found under {SRC_DIR}");

        let missing: Vec<String> = sources
            .iter()
            .filter(|path| needs_counterpart(path) && !units.contains(*path))
            .map(|path| format!("  - {SRC_DIR}/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_a_source_file() {
        let sources = relative_paths(Path::new(SRC_DIR)).unwrap_or_default();
        let units = relative_paths(Path::new(UNIT_DIR)).unwrap_or_default();

        let orphaned: Vec<String> = units
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !sources.contains(*path))
            .map(|path| format!("  - {UNIT_DIR}/{path} (no {SRC_DIR}/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source counterpart:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_every_test_file_contains_tests() {
        let tests_dir = Path::new("tests");
        let files = relative_paths(tests_dir).unwrap_or_default();

        let empty: Vec<String> = files
            .iter()
            .filter(|path| path.ends_with(".rs") && !path.ends_with("mod.rs"))
            .filter(|path| {
                fs::read_to_string(tests_dir.join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
    }

    /// Directories and `.rs` files below `base`, relative to it
    fn relative_paths(base: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        collect(base, base, &mut paths)?;
        Ok(paths)
    }

    fn collect(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(io::Error::other)?
                .to_string_lossy()
                .into_owned();

            if path.is_dir() {
                paths.insert(relative);
                collect(&path, base, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }
}
