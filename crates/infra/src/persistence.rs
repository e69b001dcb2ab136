// crates/infra/src/persistence.rs
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Atomically write `data` to `path` via a temp file and rename, so an
/// aborted run never leaves a half-written data file behind. Best-effort
/// fsync where available.
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let parent = path.parent().ok_or_else(|| std::io::Error::other("path has no parent"))?;

    // Unique temp name in the same directory so the rename stays on one
    // filesystem.
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

    let mut writer = BufWriter::new(File::create(&tmp)?);
    writer.write_all(data)?;
    writer.flush()?;
    let _ = writer.get_ref().sync_all();

    fs::rename(&tmp, path)?;

    // Sync the parent directory to make the rename durable on Unix.
    #[cfg(unix)]
    {
        if let Ok(dir) = File::open(parent) {
            let _ = dir.sync_all();
        }
    }

    Ok(())
}
