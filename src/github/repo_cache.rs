use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

pub const DEFAULT_REPO_CACHE_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoMeta {
    pub stars: u64,
    pub language: Option<String>,
}

/// Repository metadata keyed by `repository_url`, shared by all fetch threads.
pub struct RepoCache {
    entries: Mutex<LruCache<String, RepoMeta>>,
}

impl RepoCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn get(&self, repository_url: &str) -> Option<RepoMeta> {
        self.entries
            .lock()
            .ok()
            .and_then(|mut cache| cache.get(repository_url).cloned())
    }

    pub fn put(&self, repository_url: String, meta: RepoMeta) {
        if let Ok(mut cache) = self.entries.lock() {
            cache.put(repository_url, meta);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|cache| cache.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RepoCache {
    fn default() -> Self {
        Self::new(DEFAULT_REPO_CACHE_CAPACITY)
    }
}
