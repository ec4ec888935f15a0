mod common;

use common::{batch, qdrant_err, qdrant_ok, setup};
use mockito::Matcher;
use serde_json::json;
use vecstore::domain::entities::vector_record::{VectorBatch, VectorRecord};
use vecstore::domain::error::DomainError;
use vecstore::domain::ports::vector_store::{UpdateStatus, UpsertAck, VectorStore};
use vecstore::domain::values::point_id::PointId;

#[tokio::test]
async fn test_add_vectors_waits_for_durable_upsert() {
    let (mut server, store) = setup().await;
    let mock = server
        .mock("PUT", "/collections/docs/points")
        .match_query(Matcher::UrlEncoded("wait".into(), "true".into()))
        .match_body(Matcher::Json(json!({"points": [
            {"id": 1, "vector": [1.0, 0.0, 0.0], "payload": {"t": "a"}},
            {"id": 2, "vector": [0.0, 1.0, 0.0], "payload": {"t": "b"}},
        ]})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(qdrant_ok(json!({"operation_id": 5, "status": "completed"})))
        .create_async()
        .await;

    let records = batch(vec![
        (2, vec![0.0, 1.0, 0.0], json!({"t": "b"})),
        (1, vec![1.0, 0.0, 0.0], json!({"t": "a"})),
    ]);
    let ack = store.add_vectors("docs", &records).await.unwrap();

    assert_eq!(ack.operation_id, Some(5));
    assert_eq!(ack.status, UpdateStatus::Completed);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_add_vectors_with_uuid_ids() {
    let (mut server, store) = setup().await;
    let id = uuid::Uuid::new_v4();
    let mock = server
        .mock("PUT", "/collections/docs/points")
        .match_query(Matcher::UrlEncoded("wait".into(), "true".into()))
        .match_body(Matcher::Json(json!({"points": [
            {"id": id.to_string(), "vector": [0.5, 0.5], "payload": {}}
        ]})))
        .with_status(200)
        .with_body(qdrant_ok(json!({"operation_id": 1, "status": "completed"})))
        .create_async()
        .await;

    let mut records = VectorBatch::new();
    records.insert(PointId::from(id), VectorRecord::with_json(vec![0.5, 0.5], json!({})));
    store.add_vectors("docs", &records).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_batch_on_missing_collection() {
    let (mut server, store) = setup().await;
    let mock = server
        .mock("PUT", "/collections/ghost/points")
        .match_query(Matcher::UrlEncoded("wait".into(), "true".into()))
        .match_body(Matcher::Json(json!({"points": []})))
        .with_status(404)
        .with_body(qdrant_err("Not found: Collection `ghost` doesn't exist!"))
        .create_async()
        .await;

    let err = store.add_vectors("ghost", &VectorBatch::new()).await.unwrap_err();
    assert!(matches!(err, DomainError::CollectionNotFound(name) if name == "ghost"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_batch_on_existing_collection() {
    let (mut server, store) = setup().await;
    let mock = server
        .mock("PUT", "/collections/docs/points")
        .match_query(Matcher::UrlEncoded("wait".into(), "true".into()))
        .match_body(Matcher::Json(json!({"points": []})))
        .with_status(200)
        .with_body(qdrant_ok(json!({"operation_id": 4, "status": "completed"})))
        .create_async()
        .await;

    let ack = store.add_vectors("docs", &VectorBatch::new()).await.unwrap();
    assert_eq!(ack.status, UpdateStatus::Completed);
    assert_eq!(ack.operation_id, Some(4));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_dimension_mismatch() {
    let (mut server, store) = setup().await;
    server
        .mock("PUT", "/collections/docs/points")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(qdrant_err(
            "Wrong input: Vector dimension error: expected dim: 3, got 2",
        ))
        .create_async()
        .await;

    let records = batch(vec![(1, vec![1.0, 0.0], json!({"t": "a"}))]);
    let err = store.add_vectors("docs", &records).await.unwrap_err();
    match err {
        DomainError::DimensionMismatch(msg) => assert!(msg.contains("expected dim: 3")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_collection() {
    let (mut server, store) = setup().await;
    server
        .mock("PUT", "/collections/ghost/points")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(qdrant_err("Not found: Collection `ghost` doesn't exist!"))
        .create_async()
        .await;

    let records = batch(vec![(1, vec![1.0], json!({}))]);
    let err = store.add_vectors("ghost", &records).await.unwrap_err();
    assert!(matches!(err, DomainError::CollectionNotFound(name) if name == "ghost"));
}

async fn upsert_with_status(status: &str) -> Result<UpsertAck, DomainError> {
    let (mut server, store) = setup().await;
    server
        .mock("PUT", "/collections/docs/points")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(qdrant_ok(json!({"operation_id": 3, "status": status})))
        .create_async()
        .await;

    let records = batch(vec![(1, vec![1.0], json!({}))]);
    store.add_vectors("docs", &records).await
}

#[tokio::test]
async fn test_wait_timeout_is_not_success() {
    let err = upsert_with_status("wait_timeout").await.unwrap_err();
    assert!(matches!(err, DomainError::BackendUnavailable(_)));
}

#[tokio::test]
async fn test_acknowledged_only_is_not_success() {
    let err = upsert_with_status("acknowledged").await.unwrap_err();
    assert!(matches!(err, DomainError::BackendUnavailable(_)));
}

#[tokio::test]
async fn test_unrecognized_status_is_backend_error() {
    let err = upsert_with_status("clock_rejected").await.unwrap_err();
    assert!(matches!(err, DomainError::Backend { status: 200, .. }));
}
