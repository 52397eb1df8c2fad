//! End-to-end tests for the caller-facing analysis operations.
//!
//! Run with: `cargo test --test analysis_ops`

mod common;

use common::fixture;
use textvault::{DocumentId, DocumentStore, ParagraphLongestWords, ServiceError, UserId};

fn entry(paragraph: usize, words: &[&str]) -> ParagraphLongestWords {
    ParagraphLongestWords {
        paragraph,
        longest_words: words.iter().map(|w| w.to_string()).collect(),
    }
}

#[tokio::test]
async fn counts_for_mixed_sentences() {
    let f = fixture("Hello. How are you? Fine!").await;
    assert_eq!(f.service.word_count(&f.doc, &f.user).await.unwrap(), 5);
    assert_eq!(f.service.character_count(&f.doc, &f.user).await.unwrap(), 21);
    assert_eq!(f.service.sentence_count(&f.doc, &f.user).await.unwrap(), 3);
    assert_eq!(f.service.paragraph_count(&f.doc, &f.user).await.unwrap(), 1);
}

#[tokio::test]
async fn paragraphs_split_on_blank_lines() {
    let f = fixture("First paragraph.\n\nSecond paragraph.\n\nThird.").await;
    assert_eq!(f.service.paragraph_count(&f.doc, &f.user).await.unwrap(), 3);
}

#[tokio::test]
async fn blank_segments_do_not_count_as_paragraphs() {
    let f = fixture("Para 1\n\n\n\nPara 2").await;
    assert_eq!(f.service.paragraph_count(&f.doc, &f.user).await.unwrap(), 2);
}

#[tokio::test]
async fn longest_words_reported_per_paragraph() {
    let f = fixture("Short longword longest\n\nAnother line longestwordinpara2 short").await;
    assert_eq!(
        f.service.longest_words(&f.doc, &f.user).await.unwrap(),
        vec![entry(1, &["longword"]), entry(2, &["longestwordinpara2"])]
    );
}

#[tokio::test]
async fn longest_word_ties_deduplicate() {
    let f = fixture("Word, wordy. longest! longest?").await;
    assert_eq!(
        f.service.longest_words(&f.doc, &f.user).await.unwrap(),
        vec![entry(1, &["longest"])]
    );
}

#[tokio::test]
async fn blank_document_still_yields_paragraph_entries() {
    let f = fixture("\n\n\n\n").await;
    assert_eq!(
        f.service.longest_words(&f.doc, &f.user).await.unwrap(),
        vec![entry(1, &[]), entry(2, &[]), entry(3, &[])]
    );
    assert_eq!(f.service.paragraph_count(&f.doc, &f.user).await.unwrap(), 0);
}

#[tokio::test]
async fn unknown_document_is_not_found() {
    let f = fixture("irrelevant").await;
    let missing = DocumentId::new();
    assert!(matches!(
        f.service.sentence_count(&missing, &f.user).await.unwrap_err(),
        ServiceError::NotFound(_)
    ));
}

#[tokio::test]
async fn foreign_owner_cannot_analyze() {
    let f = fixture("secret text").await;
    let stranger = UserId::new();
    assert!(matches!(
        f.service.longest_words(&f.doc, &stranger).await.unwrap_err(),
        ServiceError::NotFound(_)
    ));
}

#[tokio::test]
async fn full_report_matches_individual_metrics() {
    let content = "Short longword longest\n\nAnother line longestwordinpara2 short. Done!";
    let f = fixture(content).await;

    let report = f.service.full_report(&f.doc, &f.user).await.unwrap();
    assert_eq!(report.word_count, f.service.word_count(&f.doc, &f.user).await.unwrap());
    assert_eq!(
        report.character_count,
        f.service.character_count(&f.doc, &f.user).await.unwrap()
    );
    assert_eq!(
        report.sentence_count,
        f.service.sentence_count(&f.doc, &f.user).await.unwrap()
    );
    assert_eq!(
        report.paragraph_count,
        f.service.paragraph_count(&f.doc, &f.user).await.unwrap()
    );
    assert_eq!(
        report.longest_words,
        f.service.longest_words(&f.doc, &f.user).await.unwrap()
    );
}

#[tokio::test]
async fn full_report_on_missing_document_fails_fast() {
    let f = fixture("content").await;
    assert!(matches!(
        f.service.full_report(&DocumentId::new(), &f.user).await.unwrap_err(),
        ServiceError::NotFound(_)
    ));
}

#[tokio::test]
async fn analysis_is_idempotent() {
    let f = fixture("Stable. Content here!").await;
    let first = f.service.full_report(&f.doc, &f.user).await.unwrap();
    let second = f.service.full_report(&f.doc, &f.user).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn concurrent_requests_for_distinct_documents() {
    let f = fixture("Doc one. Has two sentences!").await;
    let other = f
        .store
        .create_document(&f.user, "Doc two?\n\nWith two paragraphs.")
        .await
        .unwrap();

    let (ones, twos, one_words, two_paras) = tokio::join!(
        f.service.sentence_count(&f.doc, &f.user),
        f.service.sentence_count(&other.id, &f.user),
        f.service.word_count(&f.doc, &f.user),
        f.service.paragraph_count(&other.id, &f.user),
    );

    assert_eq!(ones.unwrap(), 2);
    assert_eq!(twos.unwrap(), 2);
    assert_eq!(one_words.unwrap(), 5);
    assert_eq!(two_paras.unwrap(), 2);
}
