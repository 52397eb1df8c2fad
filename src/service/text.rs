//! Text service: document CRUD and memoized analysis operations

use super::{ServiceError, ServiceResult};
use crate::analysis;
use crate::analysis::{ParagraphLongestWords, TextReport};
use crate::cache::{CacheKey, ResultCache};
use crate::model::{Document, DocumentId, UserId};
use crate::storage::DocumentStore;
use std::sync::Arc;
use tracing::info;

/// Cache operation names; part of every entry's key identity
mod ops {
    pub const WORD_COUNT: &str = "text.word_count";
    pub const CHARACTER_COUNT: &str = "text.character_count";
    pub const SENTENCE_COUNT: &str = "text.sentence_count";
    pub const PARAGRAPH_COUNT: &str = "text.paragraph_count";
    pub const LONGEST_WORDS: &str = "text.longest_words";
}

/// Document storage and analysis operations, owner-scoped throughout.
///
/// Each analysis operation is memoized end to end (fetch included) under a
/// key of operation name + (document id, owner id), so a cache hit skips
/// both the store and the computation. Entries expire after the cache's
/// TTL; there is no invalidation on update or delete, so a caller may see
/// analysis of the previous content for at most one TTL.
pub struct TextService {
    store: Arc<dyn DocumentStore>,
    cache: ResultCache,
}

impl TextService {
    /// Create a service over the given store and cache wrapper
    pub fn new(store: Arc<dyn DocumentStore>, cache: ResultCache) -> Self {
        Self { store, cache }
    }

    fn op_key(op: &'static str, id: &DocumentId, owner: &UserId) -> CacheKey {
        CacheKey::new(op).arg(id).arg(owner)
    }

    /// Fetch a document or fail with `NotFound`
    async fn fetch(&self, id: &DocumentId, owner: &UserId) -> ServiceResult<Document> {
        self.store
            .get_document(id, owner)
            .await?
            .ok_or(ServiceError::NotFound(*id))
    }

    // === CRUD ===

    /// Store a new document for the owner
    pub async fn create(&self, owner: &UserId, content: &str) -> ServiceResult<Document> {
        info!(owner = %owner, "create text");
        Ok(self.store.create_document(owner, content).await?)
    }

    /// Load a document
    pub async fn get(&self, id: &DocumentId, owner: &UserId) -> ServiceResult<Document> {
        info!(document = %id, "get text");
        self.fetch(id, owner).await
    }

    /// Replace a document's content
    pub async fn update(&self, id: &DocumentId, owner: &UserId, content: &str) -> ServiceResult<()> {
        info!(document = %id, "update text");
        if self.store.update_document(id, owner, content).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound(*id))
        }
    }

    /// Delete a document
    pub async fn delete(&self, id: &DocumentId, owner: &UserId) -> ServiceResult<()> {
        info!(document = %id, "delete text");
        if self.store.delete_document(id, owner).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound(*id))
        }
    }

    /// List the owner's documents in creation order
    pub async fn list(&self, owner: &UserId) -> ServiceResult<Vec<Document>> {
        info!(owner = %owner, "list texts");
        Ok(self.store.list_documents(owner).await?)
    }

    // === Analysis operations ===

    /// Number of normalized words in the document
    pub async fn word_count(&self, id: &DocumentId, owner: &UserId) -> ServiceResult<usize> {
        info!(document = %id, "word count requested");
        let key = Self::op_key(ops::WORD_COUNT, id, owner);
        self.cache
            .memoize(&key, || async move {
                let doc = self.fetch(id, owner).await?;
                Ok(analysis::word_count(&doc.content))
            })
            .await
    }

    /// Number of non-whitespace characters in the document
    pub async fn character_count(&self, id: &DocumentId, owner: &UserId) -> ServiceResult<usize> {
        info!(document = %id, "character count requested");
        let key = Self::op_key(ops::CHARACTER_COUNT, id, owner);
        self.cache
            .memoize(&key, || async move {
                let doc = self.fetch(id, owner).await?;
                Ok(analysis::character_count(&doc.content))
            })
            .await
    }

    /// Number of terminated sentences in the document
    pub async fn sentence_count(&self, id: &DocumentId, owner: &UserId) -> ServiceResult<usize> {
        info!(document = %id, "sentence count requested");
        let key = Self::op_key(ops::SENTENCE_COUNT, id, owner);
        self.cache
            .memoize(&key, || async move {
                let doc = self.fetch(id, owner).await?;
                Ok(analysis::sentence_count(&doc.content))
            })
            .await
    }

    /// Number of non-blank paragraphs in the document
    pub async fn paragraph_count(&self, id: &DocumentId, owner: &UserId) -> ServiceResult<usize> {
        info!(document = %id, "paragraph count requested");
        let key = Self::op_key(ops::PARAGRAPH_COUNT, id, owner);
        self.cache
            .memoize(&key, || async move {
                let doc = self.fetch(id, owner).await?;
                Ok(analysis::paragraph_count(&doc.content))
            })
            .await
    }

    /// Longest words of every paragraph in the document
    pub async fn longest_words(
        &self,
        id: &DocumentId,
        owner: &UserId,
    ) -> ServiceResult<Vec<ParagraphLongestWords>> {
        info!(document = %id, "longest words requested");
        let key = Self::op_key(ops::LONGEST_WORDS, id, owner);
        self.cache
            .memoize(&key, || async move {
                let doc = self.fetch(id, owner).await?;
                Ok(analysis::longest_words(&doc.content))
            })
            .await
    }

    /// Composite report: all five metrics over one fetch of the document.
    ///
    /// The document is fetched once, then the five sub-computations run
    /// concurrently and join fail-fast. Each sub-computation is memoized
    /// under the same key as its standalone operation, so the report both
    /// reuses and warms those entries.
    pub async fn full_report(&self, id: &DocumentId, owner: &UserId) -> ServiceResult<TextReport> {
        info!(document = %id, "full report requested");
        let doc = self.fetch(id, owner).await?;
        let content = doc.content.as_str();

        let memoized = |op: &'static str, value_of: fn(&str) -> usize| {
            let key = Self::op_key(op, id, owner);
            async move {
                self.cache
                    .memoize::<usize, ServiceError, _, _>(&key, || async move {
                        Ok(value_of(content))
                    })
                    .await
            }
        };

        let longest_key = Self::op_key(ops::LONGEST_WORDS, id, owner);
        let (word_count, character_count, sentence_count, paragraph_count, longest_words) =
            tokio::try_join!(
                memoized(ops::WORD_COUNT, analysis::word_count),
                memoized(ops::CHARACTER_COUNT, analysis::character_count),
                memoized(ops::SENTENCE_COUNT, analysis::sentence_count),
                memoized(ops::PARAGRAPH_COUNT, analysis::paragraph_count),
                self.cache
                    .memoize::<Vec<ParagraphLongestWords>, ServiceError, _, _>(
                        &longest_key,
                        || async move { Ok(analysis::longest_words(content)) },
                    ),
            )?;

        Ok(TextReport {
            word_count,
            character_count,
            sentence_count,
            paragraph_count,
            longest_words,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::model::NewUser;
    use crate::storage::MemoryStore;

    async fn service_with_doc(content: &str) -> (TextService, DocumentId, UserId) {
        let store = Arc::new(MemoryStore::new());
        let user = store
            .create_user(NewUser {
                name: "Tester".into(),
                username: "tester".into(),
                email: "tester@example.com".into(),
            })
            .await
            .unwrap();
        let doc = store.create_document(&user.id, content).await.unwrap();
        let service = TextService::new(store, ResultCache::new(Arc::new(MemoryCache::new())));
        (service, doc.id, user.id)
    }

    #[tokio::test]
    async fn test_counts_for_known_content() {
        let (service, id, owner) = service_with_doc("Hello. How are you? Fine!").await;
        assert_eq!(service.word_count(&id, &owner).await.unwrap(), 5);
        assert_eq!(service.character_count(&id, &owner).await.unwrap(), 21);
        assert_eq!(service.sentence_count(&id, &owner).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_paragraph_count_filters_blank_segments() {
        let (service, id, owner) = service_with_doc("Para 1\n\n\n\nPara 2").await;
        assert_eq!(service.paragraph_count(&id, &owner).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_analysis_of_foreign_document_is_not_found() {
        let (service, id, _) = service_with_doc("mine").await;
        let stranger = UserId::new();
        assert!(matches!(
            service.word_count(&id, &stranger).await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_full_report_is_consistent_with_individual_ops() {
        let content = "First paragraph.\n\nSecond paragraph.\n\nThird.";
        let (service, id, owner) = service_with_doc(content).await;

        let report = service.full_report(&id, &owner).await.unwrap();
        assert_eq!(report.word_count, service.word_count(&id, &owner).await.unwrap());
        assert_eq!(report.paragraph_count, 3);
        assert_eq!(report.sentence_count, 3);
        assert_eq!(report.longest_words.len(), 3);
    }

    #[tokio::test]
    async fn test_full_report_missing_document_fails_fast() {
        let (service, _, owner) = service_with_doc("content").await;
        let missing = DocumentId::new();
        assert!(matches!(
            service.full_report(&missing, &owner).await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_update_missing_document_is_not_found() {
        let (service, _, owner) = service_with_doc("content").await;
        let missing = DocumentId::new();
        assert!(matches!(
            service.update(&missing, &owner, "new").await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
    }
}
