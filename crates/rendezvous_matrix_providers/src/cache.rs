use std::{
    hash::{Hash, Hasher},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use fxhash::{FxHashMap, FxHasher64};
use jiff::{SignedDuration, Timestamp};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::{
    travel_matrix_provider::TravelMatrixProvider, travel_matrix_request::TravelMatrixRequest,
    travel_time_matrix::TravelTimeMatrix,
};

pub const CACHE_FOLDER_ENV_VAR: &str = "RENDEZVOUS_CACHE_FOLDER";

pub const ONE_DAY: SignedDuration = SignedDuration::from_hours(24);

/// Memoizes provider answers.
///
/// Entries are keyed by the provider and the full request, including the kind
/// of time constraint and its instant, and stop being served after expiry.
pub trait MatricesCache: Send + Sync {
    fn cache(
        &self,
        provider: &TravelMatrixProvider,
        request: &TravelMatrixRequest,
        matrix: &TravelTimeMatrix,
    ) -> Result<(), anyhow::Error>;

    fn get_cached(
        &self,
        provider: &TravelMatrixProvider,
        request: &TravelMatrixRequest,
    ) -> Result<Option<TravelTimeMatrix>, anyhow::Error>;
}

#[derive(Serialize, Deserialize, Clone)]
struct CachedMatrix {
    cached_at: Timestamp,
    request: TravelMatrixRequest,
    matrix: TravelTimeMatrix,
}

impl CachedMatrix {
    fn is_fresh(&self, now: Timestamp, expire_after: SignedDuration) -> bool {
        now.duration_since(self.cached_at) < expire_after
    }
}

fn cache_key(provider: &TravelMatrixProvider, request: &TravelMatrixRequest) -> u64 {
    let mut hasher = FxHasher64::default();

    provider.hash(&mut hasher);
    request.origins.hash(&mut hasher);
    request.destinations.hash(&mut hasher);
    request.mode.hash(&mut hasher);
    std::mem::discriminant(&request.constraint).hash(&mut hasher);
    request.constraint.bucket().hash(&mut hasher);

    hasher.finish()
}

fn same_request(left: &TravelMatrixRequest, right: &TravelMatrixRequest) -> bool {
    left.origins == right.origins
        && left.destinations == right.destinations
        && left.mode == right.mode
        && std::mem::discriminant(&left.constraint) == std::mem::discriminant(&right.constraint)
        && left.constraint.bucket() == right.constraint.bucket()
}

/// Never stores anything.
#[derive(Default, Clone, Copy)]
pub struct NoCache;

impl MatricesCache for NoCache {
    fn cache(
        &self,
        _provider: &TravelMatrixProvider,
        _request: &TravelMatrixRequest,
        _matrix: &TravelTimeMatrix,
    ) -> Result<(), anyhow::Error> {
        Ok(())
    }

    fn get_cached(
        &self,
        _provider: &TravelMatrixProvider,
        _request: &TravelMatrixRequest,
    ) -> Result<Option<TravelTimeMatrix>, anyhow::Error> {
        Ok(None)
    }
}

/// Per-process cache.
pub struct MemoryCache {
    expire_after: SignedDuration,
    entries: Mutex<FxHashMap<u64, CachedMatrix>>,
}

impl MemoryCache {
    pub fn new(expire_after: SignedDuration) -> Self {
        Self {
            expire_after,
            entries: Mutex::new(FxHashMap::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(ONE_DAY)
    }
}

impl MatricesCache for MemoryCache {
    fn cache(
        &self,
        provider: &TravelMatrixProvider,
        request: &TravelMatrixRequest,
        matrix: &TravelTimeMatrix,
    ) -> Result<(), anyhow::Error> {
        let now = Timestamp::now();
        let mut entries = self.entries.lock();

        entries.retain(|_, entry| entry.is_fresh(now, self.expire_after));
        entries.insert(
            cache_key(provider, request),
            CachedMatrix {
                cached_at: now,
                request: request.clone(),
                matrix: matrix.clone(),
            },
        );

        Ok(())
    }

    fn get_cached(
        &self,
        provider: &TravelMatrixProvider,
        request: &TravelMatrixRequest,
    ) -> Result<Option<TravelTimeMatrix>, anyhow::Error> {
        let entries = self.entries.lock();

        Ok(entries
            .get(&cache_key(provider, request))
            .filter(|entry| same_request(&entry.request, request))
            .filter(|entry| entry.is_fresh(Timestamp::now(), self.expire_after))
            .map(|entry| entry.matrix.clone()))
    }
}

/// One JSON file per request inside a cache folder.
pub struct FileCache {
    folder: PathBuf,
    expire_after: SignedDuration,
}

impl FileCache {
    pub fn new(folder: impl Into<PathBuf>, expire_after: SignedDuration) -> Result<Self, anyhow::Error> {
        let folder = folder.into();

        if !folder.is_dir() {
            return Err(anyhow::anyhow!(format!(
                "Path {} is not a directory",
                folder.display()
            )));
        }

        Ok(Self {
            folder,
            expire_after,
        })
    }

    /// Uses the folder named by `RENDEZVOUS_CACHE_FOLDER`, if set.
    pub fn from_env(expire_after: SignedDuration) -> Result<Option<Self>, anyhow::Error> {
        match std::env::var(CACHE_FOLDER_ENV_VAR) {
            Ok(folder) => Ok(Some(Self::new(folder, expire_after)?)),
            Err(_) => Ok(None),
        }
    }

    fn file_path(&self, provider: &TravelMatrixProvider, request: &TravelMatrixRequest) -> PathBuf {
        self.folder
            .join(format!("{:016x}.json", cache_key(provider, request)))
    }

    fn read(path: &Path) -> Result<CachedMatrix, anyhow::Error> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }
}

impl MatricesCache for FileCache {
    fn cache(
        &self,
        provider: &TravelMatrixProvider,
        request: &TravelMatrixRequest,
        matrix: &TravelTimeMatrix,
    ) -> Result<(), anyhow::Error> {
        let entry = CachedMatrix {
            cached_at: Timestamp::now(),
            request: request.clone(),
            matrix: matrix.clone(),
        };

        let file = std::fs::File::create(self.file_path(provider, request))?;
        let mut writer = BufWriter::with_capacity(64 * 1024, file);
        serde_json::to_writer(&mut writer, &entry)?;
        writer.flush()?;

        Ok(())
    }

    fn get_cached(
        &self,
        provider: &TravelMatrixProvider,
        request: &TravelMatrixRequest,
    ) -> Result<Option<TravelTimeMatrix>, anyhow::Error> {
        let path = self.file_path(provider, request);

        if !path.is_file() {
            return Ok(None);
        }

        let entry = Self::read(&path)?;

        if !entry.is_fresh(Timestamp::now(), self.expire_after) {
            std::fs::remove_file(&path)?;
            return Ok(None);
        }

        if !same_request(&entry.request, request) {
            return Ok(None);
        }

        Ok(Some(entry.matrix))
    }
}

/// Consults a memory cache first and falls back to a file cache.
pub struct LayeredCache {
    memory: MemoryCache,
    file: Option<FileCache>,
}

impl LayeredCache {
    pub fn new(memory: MemoryCache, file: Option<FileCache>) -> Self {
        Self { memory, file }
    }
}

impl MatricesCache for LayeredCache {
    fn cache(
        &self,
        provider: &TravelMatrixProvider,
        request: &TravelMatrixRequest,
        matrix: &TravelTimeMatrix,
    ) -> Result<(), anyhow::Error> {
        self.memory.cache(provider, request, matrix)?;
        if let Some(file) = &self.file {
            file.cache(provider, request, matrix)?;
        }
        Ok(())
    }

    fn get_cached(
        &self,
        provider: &TravelMatrixProvider,
        request: &TravelMatrixRequest,
    ) -> Result<Option<TravelTimeMatrix>, anyhow::Error> {
        if let Some(matrix) = self.memory.get_cached(provider, request)? {
            return Ok(Some(matrix));
        }

        let Some(file) = &self.file else {
            return Ok(None);
        };

        let cached = file.get_cached(provider, request)?;
        if let Some(matrix) = &cached {
            self.memory.cache(provider, request, matrix)?;
        }

        Ok(cached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{time_constraint::TimeConstraint, travel_mode::TravelMode};

    fn request(constraint: TimeConstraint) -> TravelMatrixRequest {
        TravelMatrixRequest {
            origins: vec!["51.5,-0.1".to_string()],
            destinations: vec!["51.6,-0.2".to_string(), "51.4,0.0".to_string()],
            mode: TravelMode::Transit,
            constraint,
        }
    }

    fn at(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn test_key_separates_arrival_and_departure() {
        let provider = TravelMatrixProvider::GoogleMaps;
        let instant = at("2024-03-04T19:00:00Z");

        assert_ne!(
            cache_key(&provider, &request(TimeConstraint::ArriveBy(instant))),
            cache_key(&provider, &request(TimeConstraint::DepartAt(instant)))
        );
        assert_ne!(
            cache_key(&provider, &request(TimeConstraint::ArriveBy(instant))),
            cache_key(
                &provider,
                &request(TimeConstraint::ArriveBy(at("2024-03-04T21:00:00Z")))
            )
        );
    }

    #[test]
    fn test_key_buckets_subsecond_instants() {
        let provider = TravelMatrixProvider::GoogleMaps;

        assert_eq!(
            cache_key(
                &provider,
                &request(TimeConstraint::ArriveBy(at("2024-03-04T19:00:00.100Z")))
            ),
            cache_key(
                &provider,
                &request(TimeConstraint::ArriveBy(at("2024-03-04T19:00:00.900Z")))
            )
        );
    }

    #[test]
    fn test_memory_cache_round_trip() {
        let cache = MemoryCache::default();
        let provider = TravelMatrixProvider::GoogleMaps;
        let arrive = request(TimeConstraint::ArriveBy(at("2024-03-04T19:00:00Z")));
        let depart = request(TimeConstraint::DepartAt(at("2024-03-04T19:00:00Z")));
        let matrix = TravelTimeMatrix::from_rows(vec![vec![12.0, 30.0]]).unwrap();

        cache.cache(&provider, &arrive, &matrix).unwrap();

        assert_eq!(cache.get_cached(&provider, &arrive).unwrap(), Some(matrix));
        assert_eq!(cache.get_cached(&provider, &depart).unwrap(), None);
        assert_eq!(
            cache
                .get_cached(
                    &TravelMatrixProvider::AsTheCrowFlies {
                        speeds: Default::default()
                    },
                    &arrive
                )
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_expired_entries_are_not_served() {
        let cache = MemoryCache::new(SignedDuration::ZERO);
        let provider = TravelMatrixProvider::GoogleMaps;
        let request = request(TimeConstraint::ArriveBy(at("2024-03-04T19:00:00Z")));
        let matrix = TravelTimeMatrix::filled(1, 2, 5.0);

        cache.cache(&provider, &request, &matrix).unwrap();

        assert_eq!(cache.get_cached(&provider, &request).unwrap(), None);
    }

    #[test]
    fn test_freshness() {
        let entry = CachedMatrix {
            cached_at: at("2024-03-04T10:00:00Z"),
            request: request(TimeConstraint::ArriveBy(at("2024-03-04T19:00:00Z"))),
            matrix: TravelTimeMatrix::filled(1, 2, 5.0),
        };

        assert!(entry.is_fresh(at("2024-03-05T09:59:59Z"), ONE_DAY));
        assert!(!entry.is_fresh(at("2024-03-05T10:00:00Z"), ONE_DAY));
    }

    #[test]
    fn test_file_cache_round_trip() {
        let folder = tempfile::tempdir().unwrap();
        let cache = FileCache::new(folder.path(), ONE_DAY).unwrap();
        let provider = TravelMatrixProvider::GoogleMaps;
        let request = request(TimeConstraint::DepartAt(at("2024-03-04T21:00:00Z")));
        let matrix = TravelTimeMatrix::from_rows(vec![vec![7.5, 9.25]]).unwrap();

        assert_eq!(cache.get_cached(&provider, &request).unwrap(), None);

        cache.cache(&provider, &request, &matrix).unwrap();

        assert_eq!(cache.get_cached(&provider, &request).unwrap(), Some(matrix));
        assert_eq!(std::fs::read_dir(folder.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_file_cache_requires_directory() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(FileCache::new(file.path(), ONE_DAY).is_err());
    }

    #[test]
    fn test_layered_cache_promotes_file_hits() {
        let folder = tempfile::tempdir().unwrap();
        let provider = TravelMatrixProvider::GoogleMaps;
        let request = request(TimeConstraint::ArriveBy(at("2024-03-04T19:00:00Z")));
        let matrix = TravelTimeMatrix::filled(1, 2, 3.0);

        FileCache::new(folder.path(), ONE_DAY)
            .unwrap()
            .cache(&provider, &request, &matrix)
            .unwrap();

        let layered = LayeredCache::new(
            MemoryCache::default(),
            Some(FileCache::new(folder.path(), ONE_DAY).unwrap()),
        );

        assert!(layered.memory.is_empty());
        assert_eq!(layered.get_cached(&provider, &request).unwrap(), Some(matrix));
        assert_eq!(layered.memory.len(), 1);
    }
}
