// crates/engine/src/filesystem.rs
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use crossbeam_channel::Sender;
use ignore::WalkBuilder;
use wordfreq_ports::engine::InputPlan;

use crate::error::{EngineError, Result};

/// One channel message: a batch of raw input lines.
pub type LineBatch = Vec<String>;

/// Expand the plan's root into concrete source files.
///
/// A missing root is fatal here, before any tokenization starts. A
/// directory that expands to zero files is an empty corpus, not an error.
pub fn expand_input(plan: &InputPlan) -> Result<Vec<PathBuf>> {
    let root = &plan.root;
    if !root.exists() {
        return Err(EngineError::InputNotFound { path: root.clone() });
    }
    if root.is_file() {
        return Ok(vec![root.clone()]);
    }

    // Corpus directories are not git checkouts; only hidden-file filtering
    // applies.
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(!plan.include_hidden)
        .follow_links(plan.follow_links);

    let mut sources = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        if entry.file_type().is_some_and(|ft| ft.is_file()) {
            sources.push(entry.into_path());
        }
    }
    // Stable source order keeps logs and read patterns reproducible.
    sources.sort();
    Ok(sources)
}

/// Stream `sources` as line batches into `tx` until exhausted.
///
/// Bytes are decoded lossily: invalid UTF-8 becomes replacement
/// characters, which are separators downstream, so a malformed line can
/// lose tokens but never fail the run. Any I/O failure aborts the whole
/// run.
pub fn stream_batches(sources: &[PathBuf], batch_lines: usize, tx: &Sender<LineBatch>) -> Result<()> {
    let mut batch: LineBatch = Vec::with_capacity(batch_lines);

    for path in sources {
        let file = File::open(path).map_err(|e| EngineError::FileRead {
            path: path.clone(),
            source: e,
        })?;
        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf).map_err(|e| EngineError::FileRead {
                path: path.clone(),
                source: e,
            })?;
            if read == 0 {
                break;
            }
            batch.push(String::from_utf8_lossy(&buf).into_owned());
            if batch.len() == batch_lines
                && tx.send(std::mem::replace(&mut batch, Vec::with_capacity(batch_lines))).is_err()
            {
                // Receiver gone; nothing left to feed.
                return Ok(());
            }
        }
        log::debug!("read {}", path.display());
    }

    if !batch.is_empty() {
        let _ = tx.send(batch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    fn plan_for(root: &std::path::Path) -> InputPlan {
        InputPlan::for_path(root)
    }

    #[test]
    fn missing_root_is_fatal() {
        let err = expand_input(&plan_for(std::path::Path::new("/no/such/corpus"))).unwrap_err();
        assert!(matches!(err, EngineError::InputNotFound { .. }));
    }

    #[test]
    fn single_file_expands_to_itself() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");
        std::fs::write(&path, "hello\n").unwrap();

        let sources = expand_input(&plan_for(&path)).unwrap();
        assert_eq!(sources, vec![path]);
    }

    #[test]
    fn directory_expands_to_sorted_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "b\n").unwrap();
        std::fs::write(dir.path().join("a.txt"), "a\n").unwrap();

        let sources = expand_input(&plan_for(dir.path())).unwrap();
        let names: Vec<_> =
            sources.iter().map(|p| p.file_name().unwrap().to_string_lossy().into_owned()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn hidden_files_are_skipped_unless_requested() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("seen.txt"), "x\n").unwrap();
        std::fs::write(dir.path().join(".skipped"), "y\n").unwrap();

        let default = expand_input(&plan_for(dir.path())).unwrap();
        assert_eq!(default.len(), 1);

        let mut plan = plan_for(dir.path());
        plan.include_hidden = true;
        let with_hidden = expand_input(&plan).unwrap();
        assert_eq!(with_hidden.len(), 2);
    }

    #[test]
    fn streams_every_line_in_batches() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");
        let mut file = File::create(&path).unwrap();
        for i in 0..10 {
            writeln!(file, "line {i}").unwrap();
        }
        drop(file);

        let (tx, rx) = crossbeam_channel::unbounded();
        stream_batches(&[path], 3, &tx).unwrap();
        drop(tx);

        let lines: Vec<String> = rx.into_iter().flatten().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with("line 0"));
    }

    #[test]
    fn invalid_utf8_is_absorbed_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mixed.bin");
        std::fs::write(&path, b"good words\n\xFF\xFE broken\n").unwrap();

        let (tx, rx) = crossbeam_channel::unbounded();
        stream_batches(&[path], 8, &tx).unwrap();
        drop(tx);

        let lines: Vec<String> = rx.into_iter().flatten().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains('\u{FFFD}'));
        assert!(lines[1].contains("broken"));
    }
}
