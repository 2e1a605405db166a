pub use crate::core::catalog::*;

use crate::Error;
use crate::source::{Network, Source};
use crate::store::Store;

/// Storage key of the persisted catalog snapshot.
pub const KEY: &str = "catalog";

// Known species at the time of writing. The snapshot never expires, so
// bumping this and running a refresh is how new generations show up.
const SPECIES_LIMIT: u32 = 1333;

/// The home-screen catalog, backed by a persisted snapshot.
///
/// A non-empty snapshot is trusted indefinitely; [`Catalog::refresh`] is the
/// only invalidation path.
pub struct Catalog<S, N, P> {
    source: S,
    network: N,
    store: P,
    entries: Vec<Entry>,
}

impl<S, N, P> Catalog<S, N, P>
where
    S: Source,
    N: Network,
    P: Store,
{
    pub fn new(source: S, network: N, store: P) -> Self {
        Self {
            source,
            network,
            store,
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the catalog, preferring the persisted snapshot over a fetch.
    ///
    /// Offline, this degrades to whatever is already in memory without
    /// touching storage. A storage failure is treated as a cache miss and
    /// falls through to a refresh; only a failed refresh is an error.
    pub async fn load(&mut self) -> Result<Vec<Entry>, Error> {
        if !self.network.is_reachable().await {
            log::warn!(
                "Network is unreachable; serving {} in-memory entries",
                self.entries.len()
            );

            return Ok(self.entries.clone());
        }

        match self.store.get(KEY).await {
            Ok(Some(snapshot)) => match ron::from_str::<Vec<Entry>>(&snapshot) {
                Ok(entries) if !entries.is_empty() => {
                    log::info!("Loaded {} catalog entries from storage", entries.len());
                    self.entries = entries;

                    return Ok(self.entries.clone());
                }
                Ok(_) => {}
                Err(error) => log::warn!("Discarding unreadable catalog snapshot: {error}"),
            },
            Ok(None) => {}
            Err(error) => log::warn!("Storage read failed; treating as cache miss: {error}"),
        }

        self.refresh().await
    }

    /// Fetches the full species enumeration and replaces the snapshot.
    pub async fn refresh(&mut self) -> Result<Vec<Entry>, Error> {
        let names = self.source.species_names(0, SPECIES_LIMIT).await?;
        let entries = from_names(names);

        match ron::ser::to_string_pretty(&entries, ron::ser::PrettyConfig::default()) {
            Ok(snapshot) => {
                if let Err(error) = self.store.set(KEY, snapshot).await {
                    log::warn!("Failed to persist catalog snapshot: {error}");
                }
            }
            Err(error) => log::warn!("Failed to encode catalog snapshot: {error}"),
        }

        log::info!("Refreshed catalog with {} entries", entries.len());
        self.entries = entries;

        Ok(self.entries.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::effectiveness::Relations;
    use crate::core::pokemon::{self, Pokemon, Type};
    use crate::core::species::Species;

    use std::cell::Cell;
    use std::collections::HashMap;
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct FakeSource {
        names: Vec<&'static str>,
        fail: bool,
        calls: AtomicUsize,
    }

    impl Source for &FakeSource {
        async fn species_names(&self, _offset: u32, _limit: u32) -> Result<Vec<String>, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if self.fail {
                return Err(Error::DataUnavailable);
            }

            Ok(self.names.iter().map(|name| (*name).to_owned()).collect())
        }

        async fn pokemon(&self, _id: pokemon::Id) -> Result<Pokemon, Error> {
            unreachable!()
        }

        async fn species(&self, _id: pokemon::Id) -> Result<Species, Error> {
            unreachable!()
        }

        async fn relations(&self, _type: Type) -> Result<Relations, Error> {
            unreachable!()
        }
    }

    struct Online(Cell<bool>);

    impl Network for &Online {
        async fn is_reachable(&self) -> bool {
            self.0.get()
        }
    }

    #[derive(Default)]
    struct FakeStore {
        snapshots: Mutex<HashMap<String, String>>,
        fail_reads: bool,
        reads: AtomicUsize,
        writes: AtomicUsize,
    }

    impl Store for &FakeStore {
        async fn get(&self, key: &str) -> Result<Option<String>, Error> {
            self.reads.fetch_add(1, Ordering::SeqCst);

            if self.fail_reads {
                return Err(Error::StorageFailed(Arc::new(io::Error::other(
                    "bad sector",
                ))));
            }

            Ok(self.snapshots.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: String) -> Result<(), Error> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.snapshots.lock().unwrap().insert(key.to_owned(), value);

            Ok(())
        }
    }

    fn starters() -> Vec<Entry> {
        from_names(["bulbasaur", "charmander", "squirtle"].map(String::from))
    }

    #[tokio::test]
    async fn serves_persisted_snapshot_without_fetching() {
        let source = FakeSource::default();
        let store = FakeStore::default();
        store.snapshots.lock().unwrap().insert(
            KEY.to_owned(),
            ron::ser::to_string_pretty(&starters(), ron::ser::PrettyConfig::default()).unwrap(),
        );

        let online = Online(Cell::new(true));
        let mut catalog = Catalog::new(&source, &online, &store);
        let entries = catalog.load().await.unwrap();

        assert_eq!(entries, starters());
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn refreshes_once_and_persists_on_empty_cache() {
        let source = FakeSource {
            names: vec!["bulbasaur", "charmander", "squirtle"],
            ..FakeSource::default()
        };
        let store = FakeStore::default();

        let online = Online(Cell::new(true));
        let mut catalog = Catalog::new(&source, &online, &store);
        let entries = catalog.load().await.unwrap();

        assert_eq!(entries, starters());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.writes.load(Ordering::SeqCst), 1);

        // A second load serves the freshly persisted snapshot
        let entries = catalog.load().await.unwrap();

        assert_eq!(entries, starters());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.writes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn offline_returns_in_memory_entries() {
        let source = FakeSource::default();
        let store = FakeStore::default();

        let online = Online(Cell::new(false));
        let mut catalog = Catalog::new(&source, &online, &store);
        let entries = catalog.load().await.unwrap();

        assert!(entries.is_empty());
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.reads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn offline_keeps_the_last_refreshed_list() {
        let source = FakeSource {
            names: vec!["bulbasaur", "charmander", "squirtle"],
            ..FakeSource::default()
        };
        let store = FakeStore::default();
        let online = Online(Cell::new(true));

        let mut catalog = Catalog::new(&source, &online, &store);
        catalog.refresh().await.unwrap();

        online.0.set(false);
        let reads = store.reads.load(Ordering::SeqCst);
        let entries = catalog.load().await.unwrap();

        assert_eq!(entries, starters());
        assert_eq!(store.reads.load(Ordering::SeqCst), reads);
    }

    #[tokio::test]
    async fn storage_failure_falls_back_to_refresh() {
        let source = FakeSource {
            names: vec!["bulbasaur", "charmander", "squirtle"],
            ..FakeSource::default()
        };
        let store = FakeStore {
            fail_reads: true,
            ..FakeStore::default()
        };

        let online = Online(Cell::new(true));
        let mut catalog = Catalog::new(&source, &online, &store);
        let entries = catalog.load().await.unwrap();

        assert_eq!(entries, starters());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.writes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unreadable_snapshot_falls_back_to_refresh() {
        let source = FakeSource {
            names: vec!["bulbasaur", "charmander", "squirtle"],
            ..FakeSource::default()
        };
        let store = FakeStore::default();
        store
            .snapshots
            .lock()
            .unwrap()
            .insert(KEY.to_owned(), "not a snapshot".to_owned());

        let online = Online(Cell::new(true));
        let mut catalog = Catalog::new(&source, &online, &store);
        let entries = catalog.load().await.unwrap();

        assert_eq!(entries, starters());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_refresh_surfaces_and_persists_nothing() {
        let source = FakeSource {
            fail: true,
            ..FakeSource::default()
        };
        let store = FakeStore::default();

        let online = Online(Cell::new(true));
        let mut catalog = Catalog::new(&source, &online, &store);

        assert!(catalog.load().await.is_err());
        assert_eq!(store.writes.load(Ordering::SeqCst), 0);
        assert!(catalog.entries().is_empty());
    }
}
