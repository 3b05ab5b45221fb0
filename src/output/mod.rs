//! Console and file output for the CLI frontend.
//!
//! Renderings go to stdout one after another. In graph mode the first few
//! renderings can also be saved as `.dot` files for Graphviz.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, TransimError};

/// Maximum number of graph files written per run.
pub const MAX_GRAPH_FILES: usize = 4;

/// Extension of written graph files.
pub const GRAPH_EXTENSION: &str = "dot";

/// Write renderings to `writer`, one per line block.
pub fn write_renderings<W: Write>(writer: &mut W, renderings: &[String]) -> Result<()> {
    for rendering in renderings {
        writeln!(writer, "{rendering}").map_err(|e| TransimError::OutputError {
            message: e.to_string(),
        })?;
    }
    writer.flush().map_err(|e| TransimError::OutputError {
        message: e.to_string(),
    })
}

/// Print renderings to stdout.
pub fn print_renderings(renderings: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_renderings(&mut handle, renderings)
}

/// Save graph renderings as `<stem>_<n>.dot` in `dir`.
///
/// At most [`MAX_GRAPH_FILES`] are written, or one when `single` is set.
/// The directory is created if needed. Returns the written paths in order.
pub fn write_graphs(
    renderings: &[String],
    dir: &Path,
    stem: &str,
    single: bool,
) -> Result<Vec<PathBuf>> {
    let limit = if single { 1 } else { MAX_GRAPH_FILES };

    fs::create_dir_all(dir).map_err(|source| TransimError::FileWriteError {
        path: dir.display().to_string(),
        source,
    })?;

    let mut written = Vec::new();
    for (n, graph) in renderings.iter().take(limit).enumerate() {
        let path = dir.join(format!("{stem}_{n}.{GRAPH_EXTENSION}"));
        fs::write(&path, graph).map_err(|source| TransimError::FileWriteError {
            path: path.display().to_string(),
            source,
        })?;
        info!(path = %path.display(), "wrote graph");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graphs(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("digraph {{\n  // pass {i}\n}}")).collect()
    }

    #[test]
    fn test_write_renderings() {
        let mut buffer = Vec::new();
        write_renderings(&mut buffer, &["00=>0".to_string(), "01=>1".to_string()]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "00=>0\n01=>1\n");
    }

    #[test]
    fn test_write_graphs_caps_file_count() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_graphs(&graphs(6), dir.path(), "xor", false).unwrap();
        assert_eq!(paths.len(), MAX_GRAPH_FILES);
        assert_eq!(paths[0], dir.path().join("xor_0.dot"));
        assert_eq!(fs::read_to_string(&paths[3]).unwrap(), graphs(4)[3]);
        assert!(!dir.path().join("xor_4.dot").exists());
    }

    #[test]
    fn test_write_graphs_single() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out");
        let paths = write_graphs(&graphs(3), &nested, "adder8", true).unwrap();
        assert_eq!(paths, vec![nested.join("adder8_0.dot")]);
    }

    #[test]
    fn test_write_graphs_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();

        // A regular file where the directory should be
        let err = write_graphs(&graphs(1), &blocker, "not", false).unwrap_err();
        assert!(matches!(err, TransimError::FileWriteError { .. }));
        assert!(err.to_string().contains("file"));
    }
}
