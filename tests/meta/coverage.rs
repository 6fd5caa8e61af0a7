//! Keeps `tests/unit` a mirror of `src` and every test file non-empty

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

/// Files that organize modules rather than implement them
fn is_organizational(relative: &str) -> bool {
    relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
}

/// Relative paths of every directory and `.rs` file below `base`
fn mirror_paths(base: &Path) -> io::Result<BTreeSet<String>> {
    let mut paths = BTreeSet::new();
    collect(base, base, &mut paths)?;
    Ok(paths)
}

fn collect(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let relative = path
            .strip_prefix(base)
            .map_err(|_stripped| io::Error::other("path outside base"))?
            .to_string_lossy()
            .replace('\\', "/");

        if path.is_dir() {
            paths.insert(relative);
            collect(&path, base, paths)?;
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
            paths.insert(relative);
        }
    }
    Ok(())
}

// Tests every source file has a unit test file at the same relative path
// Verified by adding an untested module under src
#[test]
fn test_every_source_file_has_unit_tests() {
    let sources = mirror_paths(Path::new("src")).expect("Failed to read src");
    let tests = mirror_paths(Path::new("tests/unit")).expect("Failed to read tests/unit");

    let missing: Vec<_> = sources
        .iter()
        .filter(|path| !is_organizational(path) && !tests.contains(*path))
        .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
        .collect();

    assert!(
        missing.is_empty(),
        "Source files without unit tests:\n{}",
        missing.join("\n")
    );
}

// Tests no unit test file outlives the source file it covers
// Verified by renaming a source module
#[test]
fn test_every_unit_test_file_has_a_source() {
    let sources = mirror_paths(Path::new("src")).expect("Failed to read src");
    let tests = mirror_paths(Path::new("tests/unit")).expect("Failed to read tests/unit");

    let orphaned: Vec<_> = tests
        .iter()
        .filter(|path| !path.ends_with("mod.rs") && !sources.contains(*path))
        .map(|path| format!("  - tests/unit/{path}"))
        .collect();

    assert!(
        orphaned.is_empty(),
        "Unit test files without a source counterpart:\n{}",
        orphaned.join("\n")
    );
}

// Tests each test file declares at least one test
// Verified by emptying a unit test file
#[test]
fn test_every_test_file_contains_tests() {
    let files = mirror_paths(Path::new("tests")).expect("Failed to read tests");

    let empty: Vec<_> = files
        .iter()
        .filter(|path| path.ends_with(".rs") && !path.ends_with("mod.rs"))
        .filter(|path| {
            let content = fs::read_to_string(Path::new("tests").join(path)).unwrap_or_default();
            !content.contains("#[test]")
        })
        .map(|path| format!("  - tests/{path}"))
        .collect();

    assert!(
        empty.is_empty(),
        "Test files without any #[test]:\n{}",
        empty.join("\n")
    );
}
