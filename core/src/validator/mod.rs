//! Startup reconciliation of entries against the filesystem.

use crate::icons::IconCache;
use crate::types::{Container, Entry};
use std::io::ErrorKind;
use tracing::{debug, warn};

/// An entry pruned because its target file no longer exists.
#[derive(Debug)]
pub struct RemovedEntry {
    /// Name of the container the entry was removed from.
    pub container: String,
    pub entry: Entry,
}

/// Checks every entry of every non-marker container against the filesystem
/// and removes the ones whose target is gone, deleting their cached icons
/// best-effort.
///
/// A missing target prunes the entry; any other I/O error is logged and the
/// entry kept, since the failure may be transient (unmounted share, permission
/// hiccup). Removal happens only after the full scan so the collection is
/// never mutated mid-iteration. Runs once per session; frontends put it on a
/// worker so it never blocks interaction.
pub fn validate(containers: &mut [Container]) -> Vec<RemovedEntry> {
    let mut stale: Vec<(usize, usize)> = Vec::new();

    for (ci, container) in containers.iter().enumerate() {
        if container.is_add_marker() {
            continue;
        }
        for (ei, entry) in container.entries.iter().enumerate() {
            match std::fs::metadata(&entry.file_path) {
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!(path = %entry.file_path.display(), "target missing, marking entry for removal");
                    stale.push((ci, ei));
                }
                Err(e) => {
                    warn!(path = %entry.file_path.display(), error = %e, "could not validate entry, keeping it");
                }
            }
        }
    }

    // Indices were collected in ascending order; removing back to front keeps
    // the remaining ones valid.
    let mut removed = Vec::with_capacity(stale.len());
    for &(ci, ei) in stale.iter().rev() {
        let entry = containers[ci].entries.remove(ei);
        if let Some(icon) = &entry.icon_path {
            IconCache::remove(icon);
        }
        removed.push(RemovedEntry {
            container: containers[ci].name.clone(),
            entry,
        });
    }
    removed.reverse();
    removed
}
