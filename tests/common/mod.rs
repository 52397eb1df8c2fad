//! Common test utilities: counting and failing fakes for the store and
//! cache backend, plus service fixtures.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use textvault::{
    CacheBackend, CacheError, Document, DocumentId, DocumentStore, MemoryCache, MemoryStore,
    NewUser, ResultCache, StorageResult, TextService, User, UserId,
};

/// Store wrapper that counts document fetches, to observe whether the
/// cache actually short-circuited an operation.
pub struct CountingStore {
    inner: MemoryStore,
    fetches: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for CountingStore {
    async fn create_user(&self, input: NewUser) -> StorageResult<User> {
        self.inner.create_user(input).await
    }

    async fn get_user(&self, id: &UserId) -> StorageResult<Option<User>> {
        self.inner.get_user(id).await
    }

    async fn delete_user(&self, id: &UserId) -> StorageResult<bool> {
        self.inner.delete_user(id).await
    }

    async fn create_document(&self, owner: &UserId, content: &str) -> StorageResult<Document> {
        self.inner.create_document(owner, content).await
    }

    async fn get_document(
        &self,
        id: &DocumentId,
        owner: &UserId,
    ) -> StorageResult<Option<Document>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.get_document(id, owner).await
    }

    async fn update_document(
        &self,
        id: &DocumentId,
        owner: &UserId,
        content: &str,
    ) -> StorageResult<bool> {
        self.inner.update_document(id, owner, content).await
    }

    async fn delete_document(&self, id: &DocumentId, owner: &UserId) -> StorageResult<bool> {
        self.inner.delete_document(id, owner).await
    }

    async fn list_documents(&self, owner: &UserId) -> StorageResult<Vec<Document>> {
        self.inner.list_documents(owner).await
    }
}

/// Cache backend that fails every call, for fail-open tests
pub struct BrokenBackend;

#[async_trait]
impl CacheBackend for BrokenBackend {
    async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Err(CacheError::Unavailable("backend down".into()))
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<(), CacheError> {
        Err(CacheError::Unavailable("backend down".into()))
    }
}

/// A seeded service over a counting store and a working memory cache
pub struct Fixture {
    pub service: TextService,
    pub store: Arc<CountingStore>,
    pub backend: Arc<MemoryCache>,
    pub user: UserId,
    pub doc: DocumentId,
}

/// Build a service holding one user with one document, with the given TTL.
pub async fn fixture_with_ttl(content: &str, ttl: Duration) -> Fixture {
    let store = Arc::new(CountingStore::new());
    let backend = Arc::new(MemoryCache::new());

    let user = store
        .create_user(NewUser {
            name: "Fixture".into(),
            username: "fixture".into(),
            email: "fixture@example.com".into(),
        })
        .await
        .expect("create user");
    let doc = store
        .create_document(&user.id, content)
        .await
        .expect("create document");

    let cache = ResultCache::new(backend.clone() as Arc<dyn CacheBackend>).with_ttl(ttl);
    let service = TextService::new(store.clone() as Arc<dyn DocumentStore>, cache);

    Fixture {
        service,
        store,
        backend,
        user: user.id,
        doc: doc.id,
    }
}

/// Seeded service with the default 60 s TTL
pub async fn fixture(content: &str) -> Fixture {
    fixture_with_ttl(content, Duration::from_secs(60)).await
}
