//! Shared lookup-table cache.
//!
//! Dozens of named CRC variants collapse onto a handful of
//! `(polynomial, reflected_input)` pairs, so tables are deduplicated across
//! every algorithm instance. Entries are weak: the cache never keeps a table
//! alive on its own, and a table nobody uses is simply rebuilt on demand.
//!
//! # Protocol
//!
//! 1. Fast path: read the entry from the concurrent map without the insert
//!    lock and return the table if it is still alive. This takes a shard
//!    read lock, so it can briefly wait behind a sweep or insert holding
//!    that shard for writing.
//! 2. Slow path: take the insert lock, look again (another thread may have
//!    populated the key meanwhile) and return a live table if found.
//! 3. Otherwise build the table, repoint a dead entry for the key or sweep
//!    every dead entry and insert a fresh one.
//!
//! Table generation happens inside the lock; it is 256 iterations of pure
//! arithmetic so the hold time is small and bounded.

use crate::register::Register;
use crate::table::Table;
use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct TableKey<T> {
    polynomial: T,
    reflected_input: bool,
}

/// Thread-safe, weakly-held store of lookup tables for one register width.
///
/// Each register type owns a process-wide instance, reachable through
/// [`Register::table_cache`] or [`TableCache::global`]. Separate instances
/// can be created for isolation.
#[derive(Debug)]
pub struct TableCache<T: Register> {
    entries: DashMap<TableKey<T>, Weak<Table<T>>>,
    insert_lock: Mutex<()>,
    tables_built: AtomicUsize,
}

impl<T: Register> TableCache<T> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            insert_lock: Mutex::new(()),
            tables_built: AtomicUsize::new(0),
        }
    }

    /// The process-wide cache for registers of type `T`.
    pub fn global() -> &'static Self {
        T::table_cache()
    }

    /// Get the table for `(polynomial, reflected_input)`, building it if no
    /// live copy exists.
    ///
    /// At most one live table exists per key; concurrent callers for the same
    /// key receive the same `Arc`.
    pub fn get_table(&self, polynomial: T, reflected_input: bool) -> Arc<Table<T>> {
        let key = TableKey {
            polynomial,
            reflected_input,
        };

        if let Some(table) = self.lookup(&key) {
            return table;
        }

        let _guard = self
            .insert_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(table) = self.lookup(&key) {
            return table;
        }

        let table = Arc::new(Table::build(polynomial, reflected_input));
        let built = self.tables_built.fetch_add(1, Ordering::Relaxed) + 1;

        // The shard guard must be released before sweeping the map.
        let repointed = match self.entries.get_mut(&key) {
            Some(mut slot) => {
                *slot = Arc::downgrade(&table);
                true
            }
            None => false,
        };

        if !repointed {
            self.sweep();
            self.entries.insert(key, Arc::downgrade(&table));
        }

        debug!(
            width = T::BITS,
            polynomial = %format!("{polynomial:#x}"),
            reflected_input,
            tables_built = built,
            "Built CRC lookup table"
        );

        table
    }

    /// Drop every entry whose table has been released.
    ///
    /// Returns the number of entries removed. Called automatically whenever a
    /// new key is inserted.
    pub fn purge(&self) -> usize {
        let _guard = self
            .insert_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        self.sweep()
    }

    /// Number of entries, live or dead.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries whose table is still referenced somewhere.
    pub fn live_tables(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.value().strong_count() > 0)
            .count()
    }

    /// Total number of tables this cache has built since creation.
    pub fn tables_built(&self) -> usize {
        self.tables_built.load(Ordering::Relaxed)
    }

    fn lookup(&self, key: &TableKey<T>) -> Option<Arc<Table<T>>> {
        self.entries.get(key).and_then(|entry| entry.value().upgrade())
    }

    // Caller must hold `insert_lock`.
    fn sweep(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, table| table.strong_count() > 0);
        let removed = before.saturating_sub(self.entries.len());
        if removed > 0 {
            debug!(width = T::BITS, removed, "Swept stale CRC table entries");
        }
        removed
    }
}

impl<T: Register> Default for TableCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn same_key_shares_one_table() {
        let cache = TableCache::<u16>::new();
        let a = cache.get_table(0x1021, false);
        let b = cache.get_table(0x1021, false);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.tables_built(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn reflection_is_part_of_the_key() {
        let cache = TableCache::<u16>::new();
        let normal = cache.get_table(0x1021, false);
        let reflected = cache.get_table(0x1021, true);
        assert!(!Arc::ptr_eq(&normal, &reflected));
        assert_ne!(*normal, *reflected);
        assert_eq!(cache.live_tables(), 2);
    }

    #[test]
    fn cache_does_not_keep_tables_alive() {
        let cache = TableCache::<u32>::new();
        let table = cache.get_table(0x04C1_1DB7, true);
        let weak = Arc::downgrade(&table);
        drop(table);
        assert!(weak.upgrade().is_none());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.live_tables(), 0);
    }

    #[test]
    fn dead_entry_is_repointed() {
        let cache = TableCache::<u8>::new();
        let first = cache.get_table(0x07, false);
        let expected = (*first).clone();
        drop(first);

        let second = cache.get_table(0x07, false);
        assert_eq!(*second, expected);
        assert_eq!(cache.tables_built(), 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.live_tables(), 1);
    }

    #[test]
    fn inserting_a_new_key_sweeps_dead_entries() {
        let cache = TableCache::<u8>::new();
        let a = cache.get_table(0x07, false);
        let b = cache.get_table(0x31, true);
        drop((a, b));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.live_tables(), 0);

        let _live = cache.get_table(0x9B, false);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.live_tables(), 1);
    }

    #[test]
    fn purge_removes_only_dead_entries() {
        let cache = TableCache::<u64>::new();
        let live = cache.get_table(0x42F0_E1EB_A9EA_3693, true);
        drop(cache.get_table(0x42F0_E1EB_A9EA_3693, false));
        assert_eq!(cache.purge(), 1);
        assert_eq!(cache.len(), 1);
        drop(live);
        assert_eq!(cache.purge(), 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn concurrent_requests_build_once_while_held() {
        let cache = Arc::new(TableCache::<u32>::new());
        let keeper = cache.get_table(0x1EDC_6F41, true);

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    (0..100)
                        .map(|_| cache.get_table(0x1EDC_6F41, true))
                        .last()
                })
            })
            .collect();

        for handle in handles {
            let table = handle.join().unwrap().unwrap();
            assert!(Arc::ptr_eq(&table, &keeper));
        }
        assert_eq!(cache.tables_built(), 1);
    }

    #[test]
    fn concurrent_cold_start_is_deduplicated() {
        let cache = Arc::new(TableCache::<u16>::new());
        let barrier = Arc::new(std::sync::Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    cache.get_table(0x8005, true)
                })
            })
            .collect();

        let tables: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for table in &tables[1..] {
            assert!(Arc::ptr_eq(table, &tables[0]));
        }
        assert_eq!(cache.tables_built(), 1);
    }
}
