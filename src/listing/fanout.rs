//! Parallel per-entry hashing
//!
//! Every entry becomes one task on a bounded rayon pool. Tasks share nothing
//! but the sending half of a channel sized to the entry count, so a send never
//! blocks and a slow printer never stalls hashing.

use crate::error::{HashError, ListingError};
use crate::listing::entry::{CidVersion, Entry, EntryKind, EntryOutcome, Listing, Rendered};
use crate::listing::hasher::compute_cid;
use crate::listing::palette::Palette;
use crate::listing::render::render_line;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::io::ErrorKind;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::mpsc;
use tracing::{debug, error};

/// Worker threads used when the caller does not bring a pool
pub fn default_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

/// Build the pool hashing tasks run on
pub fn worker_pool(threads: usize) -> Result<ThreadPool, ListingError> {
    ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("cidls-hash-{}", i))
        .build()
        .map_err(pool_error)
}

fn pool_error(err: ThreadPoolBuildError) -> ListingError {
    ListingError::WorkerSpawn(err.to_string())
}

/// Hash every entry of `listing` in parallel
///
/// `sink` receives each result on the calling thread, in completion order.
/// Returns once every task has finished. The first sink error stops further
/// delivery but the remaining tasks still run to completion.
pub fn hash_entries<F>(
    listing: &Listing,
    version: CidVersion,
    palette: &Palette,
    sink: F,
) -> Result<(), ListingError>
where
    F: FnMut(Rendered) -> Result<(), ListingError>,
{
    if listing.is_empty() {
        return Ok(());
    }

    let pool = worker_pool(default_threads().min(listing.len()))?;
    hash_entries_on(&pool, listing, version, palette, sink)
}

/// Same as [`hash_entries`], on an existing pool
pub fn hash_entries_on<F>(
    pool: &ThreadPool,
    listing: &Listing,
    version: CidVersion,
    palette: &Palette,
    sink: F,
) -> Result<(), ListingError>
where
    F: FnMut(Rendered) -> Result<(), ListingError>,
{
    let dir = listing.dir.as_path();
    let width = listing.width;

    fan_out(
        pool,
        listing,
        |index, entry| {
            let outcome = process_entry(dir, entry, version);
            let line = render_line(entry, &outcome, width, palette);
            Rendered {
                index,
                entry: entry.clone(),
                outcome,
                line,
            }
        },
        sink,
    )
}

/// Run `task` once per entry on `pool` and feed the results to `sink`
///
/// A panicking task is caught on its worker and reported as
/// `WorkerPanicked` once every other result has been delivered.
fn fan_out<T, F>(
    pool: &ThreadPool,
    listing: &Listing,
    task: T,
    mut sink: F,
) -> Result<(), ListingError>
where
    T: Fn(usize, &Entry) -> Rendered + Sync,
    F: FnMut(Rendered) -> Result<(), ListingError>,
{
    if listing.is_empty() {
        return Ok(());
    }

    let (tx, rx) = mpsc::sync_channel::<Result<Rendered, String>>(listing.len());
    let task = &task;

    pool.in_place_scope(|scope| {
        for (index, entry) in listing.entries.iter().enumerate() {
            let tx = tx.clone();
            scope.spawn(move |_| {
                let result = panic::catch_unwind(AssertUnwindSafe(|| task(index, entry)))
                    .map_err(|_| entry.name.clone());
                // Capacity matches the entry count, so this never blocks
                let _ = tx.send(result);
            });
        }
        drop(tx);

        let mut delivered = Ok(());
        let mut panicked = None;
        for message in rx {
            match message {
                Ok(rendered) => {
                    if delivered.is_ok() {
                        delivered = sink(rendered);
                    }
                }
                Err(name) => {
                    error!(entry = %name, "Hashing task panicked");
                    panicked.get_or_insert(name);
                }
            }
        }

        match panicked {
            Some(name) => Err(ListingError::WorkerPanicked(name)),
            None => delivered,
        }
    })
}

/// Hash every entry and return the results in listing order
pub fn collect_sorted(
    listing: &Listing,
    version: CidVersion,
    palette: &Palette,
) -> Result<Vec<Rendered>, ListingError> {
    let mut results = Vec::with_capacity(listing.len());
    hash_entries(listing, version, palette, |rendered| {
        results.push(rendered);
        Ok(())
    })?;
    results.sort_by_key(|r| r.index);
    Ok(results)
}

/// Compute the outcome for a single entry
///
/// Directories carry no CID. Symlinks are followed: a link to a directory is
/// treated like one, a dangling link reports a missing file.
pub fn process_entry(dir: &Path, entry: &Entry, version: CidVersion) -> EntryOutcome {
    let path = dir.join(&entry.name);

    let outcome = match entry.kind {
        EntryKind::Directory => EntryOutcome::Skipped,
        EntryKind::Symlink => match std::fs::metadata(&path) {
            Ok(target) if target.is_dir() => EntryOutcome::Skipped,
            Ok(_) => to_outcome(compute_cid(&path, version)),
            Err(e) if e.kind() == ErrorKind::NotFound => EntryOutcome::Error(HashError::NoSuchFile),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                EntryOutcome::Error(HashError::InsufficientPermissions)
            }
            Err(e) => EntryOutcome::Error(HashError::Io(e)),
        },
        EntryKind::Executable | EntryKind::Regular => to_outcome(compute_cid(&path, version)),
    };

    match &outcome {
        EntryOutcome::Cid(cid) => debug!(entry = %entry.name, cid = %cid, "Computed CID"),
        EntryOutcome::Error(err) => debug!(entry = %entry.name, error = %err, "Failed to hash entry"),
        EntryOutcome::Skipped => debug!(entry = %entry.name, "Skipped directory"),
    }

    outcome
}

fn to_outcome(result: Result<String, HashError>) -> EntryOutcome {
    match result {
        Ok(cid) => EntryOutcome::Cid(cid),
        Err(err) => EntryOutcome::Error(err),
    }
}
