//! Database directory size.
//!
//! The walk is blocking, so it runs on the blocking pool under a deadline.
//! Dropping the future (timeout or shutdown) raises a flag the walk checks
//! between entries, so an abandoned walk stops promptly.

use crate::source::error::FetchCause;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Blocking size computation run by [`measure`].
pub type Walk = fn(&Path, &AtomicBool) -> io::Result<u64>;

/// Sum of the sizes of every non-directory entry under `path`.
///
/// `path` itself may be a symlink to the real directory; symlinks below it
/// are counted as links and never followed. Entries removed while the walk
/// runs (the database compacts continuously) count as zero. Any other
/// unreadable entry fails the whole walk.
pub fn dir_size(path: &Path, cancel: &AtomicBool) -> io::Result<u64> {
    let root = fs::metadata(path)?;
    if !root.is_dir() {
        return Ok(root.len());
    }
    walk(path, cancel, &|entry: &Path| fs::symlink_metadata(entry))
}

fn walk<S>(dir: &Path, cancel: &AtomicBool, stat: &S) -> io::Result<u64>
where
    S: Fn(&Path) -> io::Result<fs::Metadata>,
{
    let mut total: u64 = 0;
    for entry in fs::read_dir(dir)? {
        if cancel.load(Ordering::Relaxed) {
            return Err(io::Error::new(io::ErrorKind::Interrupted, "walk cancelled"));
        }

        let path = entry?.path();
        let metadata = match stat(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e),
        };

        let size = if metadata.is_dir() {
            match walk(&path, cancel, stat) {
                Err(e) if e.kind() == io::ErrorKind::NotFound => 0,
                result => result?,
            }
        } else {
            metadata.len()
        };
        total = total.saturating_add(size);
    }
    Ok(total)
}

/// Sets the flag when dropped.
struct CancelOnDrop(Arc<AtomicBool>);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

/// Runs `walk` over `path` off the async runtime, giving up after `deadline`.
pub async fn measure<F>(path: PathBuf, deadline: Duration, walk: F) -> Result<u64, FetchCause>
where
    F: FnOnce(&Path, &AtomicBool) -> io::Result<u64> + Send + 'static,
{
    let cancel = Arc::new(AtomicBool::new(false));
    let _guard = CancelOnDrop(cancel.clone());

    let task = tokio::task::spawn_blocking(move || walk(&path, &cancel));
    match tokio::time::timeout(deadline, task).await {
        Ok(Ok(result)) => result.map_err(FetchCause::Filesystem),
        Ok(Err(join_error)) => Err(FetchCause::Filesystem(io::Error::other(join_error))),
        Err(_) => Err(FetchCause::Timeout(deadline)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use tempfile::tempdir;

    fn populated() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.sst"), vec![0u8; 1000]).unwrap();
        fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
        fs::write(dir.path().join("nested/b.sst"), vec![0u8; 24]).unwrap();
        fs::write(dir.path().join("nested/deeper/c.sst"), vec![0u8; 1]).unwrap();
        dir
    }

    #[test]
    fn test_sums_nested_files() {
        let dir = populated();
        let size = dir_size(dir.path(), &AtomicBool::new(false)).unwrap();
        assert_eq!(size, 1025);
    }

    #[test]
    fn test_empty_directory_is_zero() {
        let dir = tempdir().unwrap();
        assert_eq!(dir_size(dir.path(), &AtomicBool::new(false)).unwrap(), 0);
    }

    #[test]
    fn test_missing_path_is_not_found() {
        let dir = tempdir().unwrap();
        let err = dir_size(&dir.path().join("gone"), &AtomicBool::new(false)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_cancelled_walk_stops() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a"), b"abc").unwrap();
        let err = dir_size(dir.path(), &AtomicBool::new(true)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Interrupted);
    }

    #[test]
    fn test_entry_removed_during_walk_counts_as_zero() {
        let dir = populated();
        let compacted = |path: &Path| {
            if path.ends_with("b.sst") || path.ends_with("deeper") {
                Err(io::Error::from(io::ErrorKind::NotFound))
            } else {
                fs::symlink_metadata(path)
            }
        };
        let size = walk(dir.path(), &AtomicBool::new(false), &compacted).unwrap();
        assert_eq!(size, 1000);
    }

    #[test]
    fn test_unreadable_entry_still_fails_walk() {
        let dir = populated();
        let denied = |path: &Path| {
            if path.ends_with("b.sst") {
                Err(io::Error::from(io::ErrorKind::PermissionDenied))
            } else {
                fs::symlink_metadata(path)
            }
        };
        let err = walk(dir.path(), &AtomicBool::new(false), &denied).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_root_is_followed_but_children_are_not() {
        let target = populated();
        let links = tempdir().unwrap();
        let root = links.path().join("chain_db");
        std::os::unix::fs::symlink(target.path(), &root).unwrap();
        std::os::unix::fs::symlink(target.path().join("a.sst"), target.path().join("a.link"))
            .unwrap();

        let size = dir_size(&root, &AtomicBool::new(false)).unwrap();
        let link_len = fs::symlink_metadata(target.path().join("a.link"))
            .unwrap()
            .len();
        assert_eq!(size, 1025 + link_len);
    }

    #[tokio::test]
    async fn test_measure_reports_filesystem_errors() {
        let dir = tempdir().unwrap();
        let result = measure(dir.path().join("gone"), Duration::from_secs(5), dir_size).await;
        assert!(matches!(
            result,
            Err(FetchCause::Filesystem(e)) if e.kind() == io::ErrorKind::NotFound
        ));
    }

    #[tokio::test]
    async fn test_measure_returns_size() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("chain.db"), vec![0u8; 4096]).unwrap();
        let size = measure(dir.path().to_path_buf(), Duration::from_secs(5), dir_size)
            .await
            .unwrap();
        assert_eq!(size, 4096);
    }

    #[tokio::test]
    async fn test_measure_deadline_cancels_the_walk() {
        let (stopped_tx, stopped_rx) = mpsc::channel();
        let endless = move |_: &Path, cancel: &AtomicBool| {
            while !cancel.load(Ordering::Relaxed) {
                std::thread::sleep(Duration::from_millis(1));
            }
            let _ = stopped_tx.send(());
            Err(io::Error::new(io::ErrorKind::Interrupted, "walk cancelled"))
        };

        let deadline = Duration::from_millis(50);
        let result = measure(PathBuf::from("/"), deadline, endless).await;
        assert!(matches!(result, Err(FetchCause::Timeout(d)) if d == deadline));

        stopped_rx.recv_timeout(Duration::from_secs(5)).unwrap();
    }

    #[tokio::test]
    async fn test_dropping_measure_cancels_the_walk() {
        let (started_tx, started_rx) = tokio::sync::oneshot::channel();
        let (stopped_tx, stopped_rx) = mpsc::channel();
        let endless = move |_: &Path, cancel: &AtomicBool| {
            let _ = started_tx.send(());
            while !cancel.load(Ordering::Relaxed) {
                std::thread::sleep(Duration::from_millis(1));
            }
            let _ = stopped_tx.send(());
            Ok(0)
        };

        let pending = tokio::spawn(measure(PathBuf::from("/"), Duration::from_secs(60), endless));
        started_rx.await.unwrap();
        pending.abort();
        assert!(pending.await.unwrap_err().is_cancelled());

        stopped_rx.recv_timeout(Duration::from_secs(5)).unwrap();
    }
}
