//! End-to-end tests for the encode -> retrieve -> threshold pipeline,
//! built entirely in memory.

use std::sync::Arc;

use async_trait::async_trait;

use agrimed::domain::models::{AnswerTable, Config};
use agrimed::{Domain, DomainCatalog, FlatIndex, HashEncoder, QaService, QueryEncoder, RetrievalError};

/// Encoder pinned to one vector, so tests control distances exactly.
struct PinnedEncoder {
    vector: Vec<f32>,
}

#[async_trait]
impl QueryEncoder for PinnedEncoder {
    fn name(&self) -> &'static str {
        "pinned"
    }

    fn dimension(&self) -> usize {
        self.vector.len()
    }

    async fn encode(&self, _text: &str) -> Result<Vec<f32>, RetrievalError> {
        Ok(self.vector.clone())
    }
}

fn table(entries: &[&str]) -> AnswerTable {
    AnswerTable::new(entries.iter().map(|s| (*s).to_string()).collect())
}

/// A medical reference at position 3 with squared distance 2.0 to the
/// query, under the default threshold of 15.0, serves the answer plus
/// the disclaimer suffix.
#[tokio::test]
async fn medical_match_within_threshold_gets_disclaimer_suffix() {
    let encoder: Arc<dyn QueryEncoder> = Arc::new(PinnedEncoder {
        vector: vec![0.0, 0.0],
    });
    let vectors = vec![
        vec![9.0, 9.0],
        vec![-9.0, 9.0],
        vec![9.0, -9.0],
        vec![1.0, 1.0], // squared distance 2.0 from the origin
    ];
    let answers = table(&["a", "b", "c", "Take paracetamol for fever"]);

    let mut catalog = DomainCatalog::new();
    catalog
        .insert(
            Domain::Medical,
            Box::new(FlatIndex::from_vectors(2, vectors).unwrap()),
            answers,
            2,
        )
        .unwrap();

    let config = Config::default();
    let disclaimer = config.responses.medical_disclaimer.clone();
    let qa = QaService::new(encoder, Arc::new(catalog), &config);

    let response = qa
        .answer_query("what should I take for fever", Domain::Medical)
        .await
        .unwrap();

    assert_eq!(
        response,
        format!("Take paracetamol for fever\n\n_({disclaimer})_")
    );
}

/// The same setup with squared distance 20.0 serves the fixed
/// fallback, unchanged by domain.
#[tokio::test]
async fn match_above_threshold_serves_fallback() {
    let vectors = vec![vec![2.0, 4.0]]; // squared distance 20.0
    let config = Config::default();
    let fallback = config.responses.not_found.clone();

    for domain in Domain::ALL {
        let mut catalog = DomainCatalog::new();
        catalog
            .insert(
                domain,
                Box::new(FlatIndex::from_vectors(2, vectors.clone()).unwrap()),
                table(&["Take paracetamol for fever"]),
                2,
            )
            .unwrap();
        let qa = QaService::new(
            Arc::new(PinnedEncoder {
                vector: vec![0.0, 0.0],
            }),
            Arc::new(catalog),
            &config,
        );

        let response = qa.answer_query("anything", domain).await.unwrap();
        assert_eq!(response, fallback, "fallback must not vary by domain");
    }
}

/// Self-retrieval: an index containing the query's own embedding
/// returns it at distance ~0 with the aligned answer.
#[tokio::test]
async fn self_retrieval_round_trip_through_hash_encoder() {
    let dimension = 48;
    let probe = HashEncoder::new(dimension);
    let own = probe.encode("ဆန်စပါး အပင်ကျန်းမာရေး").await.unwrap();
    let other = probe.encode("unrelated filler entry").await.unwrap();

    for domain in Domain::ALL {
        let mut catalog = DomainCatalog::new();
        catalog
            .insert(
                domain,
                Box::new(
                    FlatIndex::from_vectors(dimension, vec![other.clone(), own.clone()]).unwrap(),
                ),
                table(&["wrong", "aligned answer"]),
                dimension,
            )
            .unwrap();

        let qa = QaService::new(
            Arc::new(HashEncoder::new(dimension)),
            Arc::new(catalog),
            &Config::default(),
        );
        let response = qa
            .answer_query("ဆန်စပါး အပင်ကျန်းမာရေး", domain)
            .await
            .unwrap();
        assert!(
            response.starts_with("aligned answer"),
            "{domain}: got {response}"
        );
    }
}

/// Queries routed to one domain never serve the other domain's table.
#[tokio::test]
async fn domain_isolation_end_to_end() {
    let dimension = 32;
    let probe = HashEncoder::new(dimension);
    let shared = probe.encode("shared question").await.unwrap();

    let mut catalog = DomainCatalog::new();
    for (domain, answer) in [
        (Domain::Medical, "from the medical table"),
        (Domain::Agricultural, "from the agricultural table"),
    ] {
        catalog
            .insert(
                domain,
                Box::new(FlatIndex::from_vectors(dimension, vec![shared.clone()]).unwrap()),
                table(&[answer]),
                dimension,
            )
            .unwrap();
    }

    let config = Config::default();
    let qa = QaService::new(
        Arc::new(HashEncoder::new(dimension)),
        Arc::new(catalog),
        &config,
    );

    let medical = qa
        .answer_query("shared question", Domain::Medical)
        .await
        .unwrap();
    let agricultural = qa
        .answer_query("shared question", Domain::Agricultural)
        .await
        .unwrap();

    assert!(medical.starts_with("from the medical table"));
    assert!(medical.ends_with(&format!("_({})_", config.responses.medical_disclaimer)));
    assert_eq!(agricultural, "from the agricultural table");
    assert!(!agricultural.contains(&config.responses.medical_disclaimer));
}

/// Identical inputs against an unchanged catalog yield identical output.
#[tokio::test]
async fn answer_query_is_idempotent() {
    let dimension = 24;
    let reference = HashEncoder::new(dimension)
        .encode("crop rotation schedule")
        .await
        .unwrap();

    let mut catalog = DomainCatalog::new();
    catalog
        .insert(
            Domain::Agricultural,
            Box::new(FlatIndex::from_vectors(dimension, vec![reference]).unwrap()),
            table(&["rotate rice with pulses"]),
            dimension,
        )
        .unwrap();

    let qa = QaService::new(
        Arc::new(HashEncoder::new(dimension)),
        Arc::new(catalog),
        &Config::default(),
    );

    let first = qa
        .answer_query("crop rotation schedule", Domain::Agricultural)
        .await
        .unwrap();
    let second = qa
        .answer_query("crop rotation schedule", Domain::Agricultural)
        .await
        .unwrap();
    assert_eq!(first, second);
}

/// An empty index never panics and never serves an out-of-range answer;
/// the user sees the lookup-failure message, distinct from "not found".
#[tokio::test]
async fn empty_index_yields_lookup_failure_message() {
    let mut catalog = DomainCatalog::new();
    catalog
        .insert(Domain::Medical, Box::new(FlatIndex::new(2)), table(&[]), 2)
        .unwrap();

    let config = Config::default();
    let qa = QaService::new(
        Arc::new(PinnedEncoder {
            vector: vec![0.0, 0.0],
        }),
        Arc::new(catalog),
        &config,
    );

    let response = qa.answer_query("anything", Domain::Medical).await.unwrap();
    assert_eq!(response, config.responses.lookup_failure);
    assert_ne!(response, config.responses.not_found);
}

/// Concurrent queries share the encoder and catalog without locking.
#[tokio::test]
async fn concurrent_queries_share_read_only_state() {
    let dimension = 16;
    let reference = HashEncoder::new(dimension)
        .encode("shared reference")
        .await
        .unwrap();

    let mut catalog = DomainCatalog::new();
    catalog
        .insert(
            Domain::Medical,
            Box::new(FlatIndex::from_vectors(dimension, vec![reference]).unwrap()),
            table(&["the answer"]),
            dimension,
        )
        .unwrap();

    let qa = Arc::new(QaService::new(
        Arc::new(HashEncoder::new(dimension)),
        Arc::new(catalog),
        &Config::default(),
    ));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let qa = Arc::clone(&qa);
        handles.push(tokio::spawn(async move {
            qa.answer_query("shared reference", Domain::Medical).await
        }));
    }

    for handle in handles {
        let response = handle.await.unwrap().unwrap();
        assert!(response.starts_with("the answer"));
    }
}
