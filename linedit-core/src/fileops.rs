//! Stateless operations on the target file.
//!
//! Every operation re-opens the path and closes its handle before
//! returning; no state is kept between calls. Nothing here prints or
//! logs. Failures are returned to the caller as typed [`FileError`]
//! values and the caller decides whether to continue.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::Path;

use crate::error::{FileError, FileResult};

/// Check whether a filesystem entry exists at `path`. No side effects.
pub fn exists(path: &Path) -> bool {
    path.exists()
}

/// Create an empty file at `path`.
///
/// Fails with [`FileError::AlreadyExists`] if the path is already
/// present. The open uses `create_new`, so the existence check and the
/// create cannot race.
pub fn create(path: &Path) -> FileResult<()> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            Err(FileError::AlreadyExists(path.display().to_string()))
        }
        Err(e) => Err(FileError::Io(e)),
    }
}

/// Append `text` plus a trailing newline to the file at `path`,
/// creating the file if it does not exist yet. No prior existence
/// check is required.
pub fn append_line(path: &Path, text: &str) -> FileResult<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    writeln!(file, "{}", text)?;
    Ok(())
}

/// Read every line of the file at `path`, in order, without trailing
/// newline characters.
///
/// Fails with [`FileError::NotFound`] if the path is absent.
pub fn read_all(path: &Path) -> FileResult<Vec<String>> {
    if !exists(path) {
        return Err(FileError::NotFound(path.display().to_string()));
    }
    let reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    Ok(lines)
}

/// Read the `n`-th line (1-based) of the file at `path`.
///
/// Returns `Ok(None)` when the file has fewer than `n` lines. The
/// counter starts at 1 and only counts up, so a non-positive `n` can
/// never match and also yields `Ok(None)`.
///
/// Fails with [`FileError::NotFound`] if the path is absent.
pub fn read_line(path: &Path, n: i64) -> FileResult<Option<String>> {
    if !exists(path) {
        return Err(FileError::NotFound(path.display().to_string()));
    }
    let reader = BufReader::new(File::open(path)?);
    let mut counter: i64 = 1;
    for line in reader.lines() {
        let line = line?;
        if counter == n {
            return Ok(Some(line));
        }
        counter += 1;
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};

    static NEXT_ID: AtomicU32 = AtomicU32::new(0);

    /// Unique scratch path under the system temp directory.
    /// The file is not created; tests start from an absent path.
    fn scratch_path(tag: &str) -> PathBuf {
        let id = NEXT_ID.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "linedit-fileops-{}-{}-{}.txt",
            tag,
            std::process::id(),
            id
        ))
    }

    /// Removes the scratch file when the test ends, pass or fail.
    struct Scratch(PathBuf);

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    #[test]
    fn test_create_then_exists() {
        let path = scratch_path("create");
        let _guard = Scratch(path.clone());

        assert!(!exists(&path));
        create(&path).unwrap();
        assert!(exists(&path));

        // Created file is empty
        assert_eq!(read_all(&path).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_create_existing_fails_and_preserves_contents() {
        let path = scratch_path("recreate");
        let _guard = Scratch(path.clone());

        append_line(&path, "keep me").unwrap();
        let result = create(&path);
        assert!(matches!(result, Err(FileError::AlreadyExists(_))));
        assert_eq!(read_all(&path).unwrap(), ["keep me"]);
    }

    #[test]
    fn test_append_creates_missing_file() {
        let path = scratch_path("append-missing");
        let _guard = Scratch(path.clone());

        assert!(!exists(&path));
        append_line(&path, "first").unwrap();
        assert!(exists(&path));
        assert_eq!(read_all(&path).unwrap(), ["first"]);
    }

    #[test]
    fn test_append_order() {
        let path = scratch_path("append-order");
        let _guard = Scratch(path.clone());

        append_line(&path, "alpha").unwrap();
        append_line(&path, "beta").unwrap();
        append_line(&path, "gamma").unwrap();
        assert_eq!(read_all(&path).unwrap(), ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_read_line_in_and_out_of_range() {
        let path = scratch_path("read-line");
        let _guard = Scratch(path.clone());

        append_line(&path, "alpha").unwrap();
        append_line(&path, "beta").unwrap();

        assert_eq!(read_line(&path, 1).unwrap(), Some("alpha".to_string()));
        assert_eq!(read_line(&path, 2).unwrap(), Some("beta".to_string()));
        assert_eq!(read_line(&path, 3).unwrap(), None);
        assert_eq!(read_line(&path, 0).unwrap(), None);
        assert_eq!(read_line(&path, -4).unwrap(), None);
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let path = scratch_path("missing");

        assert!(matches!(read_all(&path), Err(FileError::NotFound(_))));
        assert!(matches!(read_line(&path, 1), Err(FileError::NotFound(_))));
    }

    #[test]
    fn test_create_in_missing_directory_is_io_error() {
        let path = scratch_path("no-dir").join("nested/file.txt");

        assert!(matches!(create(&path), Err(FileError::Io(_))));
    }

    /// Lines containing newline characters cannot round-trip as single
    /// lines; the properties below discard them.
    fn is_single_line(s: &str) -> bool {
        !s.contains('\n') && !s.contains('\r')
    }

    #[test]
    fn prop_append_sequence_read_all_roundtrip() {
        fn property(lines: Vec<String>) -> TestResult {
            // An empty sequence never creates the file; covered by the
            // missing-file unit test instead.
            if lines.is_empty() || !lines.iter().all(|l| is_single_line(l)) {
                return TestResult::discard();
            }

            let path = scratch_path("prop-roundtrip");
            let _guard = Scratch(path.clone());

            for line in &lines {
                append_line(&path, line).unwrap();
            }
            TestResult::from_bool(read_all(&path).unwrap() == lines)
        }

        // File I/O per iteration, keep the run count low
        let mut qc = quickcheck::QuickCheck::new().tests(10);
        qc.quickcheck(property as fn(Vec<String>) -> TestResult);
    }

    #[test]
    fn prop_read_line_matches_index() {
        fn property(lines: Vec<String>, k: usize) -> TestResult {
            if lines.is_empty() || !lines.iter().all(|l| is_single_line(l)) {
                return TestResult::discard();
            }

            let path = scratch_path("prop-index");
            let _guard = Scratch(path.clone());

            for line in &lines {
                append_line(&path, line).unwrap();
            }

            // Fold k into the valid 1-based range
            let n = (k % lines.len()) + 1;
            let expected = lines[n - 1].clone();
            let got = read_line(&path, n as i64).unwrap();
            TestResult::from_bool(got == Some(expected))
        }

        let mut qc = quickcheck::QuickCheck::new().tests(10);
        qc.quickcheck(property as fn(Vec<String>, usize) -> TestResult);
    }
}
