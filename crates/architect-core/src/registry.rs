//! Shared lookup helpers for the static registries.
//!
//! Registries are immutable slices initialised once per process. Lookups are
//! linear scans: every registry holds a handful of entries.

/// An entry addressable by a unique string id.
pub trait Entry {
    fn id(&self) -> &str;
}

/// Find the entry with the given id.
pub fn lookup<'a, T: Entry>(entries: &'a [T], id: &str) -> Option<&'a T> {
    entries.iter().find(|entry| entry.id() == id)
}

/// Find the entry with the given id, or the first declared entry.
///
/// Each registry declares its default entry first.
pub fn lookup_or_default<'a, T: Entry>(entries: &'a [T], id: &str, kind: &str) -> &'a T {
    match lookup(entries, id) {
        Some(entry) => entry,
        None => {
            tracing::debug!(kind, id, default = entries[0].id(), "Unknown id, using default entry");
            &entries[0]
        }
    }
}
