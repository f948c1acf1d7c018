mod common;

use common::{id_generator, spawn_store, task, task_store, Label, Task, TaskAction, TaskCreate, TaskUpdate};
use serde_json::json;
use std::sync::Arc;
use tiered_client::mock::MockTransport;
use tiered_client::{
    ClientError, FallbackResolver, Method, QueryParams, ResourceClient, Source, Transport,
};

fn resolver(mock: &MockTransport, seed: Vec<Task>) -> FallbackResolver<Task> {
    let transport: Arc<dyn Transport> = Arc::new(mock.clone());
    FallbackResolver::new(ResourceClient::new(transport), task_store(seed))
}

fn seed() -> Vec<Task> {
    vec![task("task_1", "First"), task("task_2", "Second")]
}

#[tokio::test]
async fn remote_success_is_returned_unchanged() {
    let mock = MockTransport::new();
    mock.expect_get("/tasks/r1")
        .return_json(json!({ "id": "r1", "title": "From backend", "priority": 5 }));
    let resolver = resolver(&mock, seed());

    let env = resolver.get("r1".into()).await.unwrap();
    assert_eq!(env.source, Source::Remote);
    assert_eq!(env.data.title, "From backend");
    assert_eq!(env.data.priority, 5);
    mock.verify();
}

#[tokio::test]
async fn remote_failures_fall_back_to_local() {
    let mock = MockTransport::new();
    mock.expect_get("/tasks").return_status(500, "Internal Server Error");
    mock.expect_get("/tasks").return_err(ClientError::Timeout);
    mock.expect_get("/tasks").return_json(json!({ "unexpected": true }));
    mock.expect_get("/tasks").return_err(ClientError::Network("connection refused".into()));
    let resolver = resolver(&mock, seed());

    let local = resolver.local().list().await.unwrap();
    for _ in 0..4 {
        let env = resolver.list().await.unwrap();
        assert_eq!(env.source, Source::Local);
        assert_eq!(env.data, local);
    }
    mock.verify();
}

#[tokio::test]
async fn empty_success_falls_back() {
    let mock = MockTransport::new();
    mock.expect_post("/tasks").return_empty();
    let resolver = resolver(&mock, seed());

    let env = resolver
        .create(TaskCreate {
            title: Some("Offline".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(env.source, Source::Local);
    assert_eq!(env.data.id, "task_3");

    let body = mock.calls()[0].body.clone();
    assert_eq!(body, Some(json!({ "title": "Offline" })));
}

#[tokio::test]
async fn unconfigured_never_touches_transport() {
    let mock = MockTransport::unconfigured();
    let resolver = resolver(&mock, seed());

    let env = resolver.get("task_1".into()).await.unwrap();
    assert_eq!(env.source, Source::Local);
    assert_eq!(env.data.title, "First");
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn missing_route_is_answered_locally_without_a_request() {
    let mock = MockTransport::new();
    let transport: Arc<dyn Transport> = Arc::new(mock.clone());
    let labels = spawn_store("labels", vec![], id_generator("label"));
    let resolver = FallbackResolver::<Label>::new(ResourceClient::new(transport), labels);

    let env = resolver.create(TaskCreate::default()).await.unwrap();
    assert_eq!(env.source, Source::Local);
    assert_eq!(env.data.id, "label_1");

    let direct = resolver.remote().create(&TaskCreate::default()).await;
    assert!(matches!(
        direct,
        Err(ClientError::NotSupported { family: "labels", .. })
    ));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn local_get_miss_is_not_found() {
    let mock = MockTransport::new();
    mock.expect_get("/tasks/nope").return_status(404, "Not Found");
    let resolver = resolver(&mock, seed());

    let result = resolver.get("nope".into()).await;
    assert_eq!(result, Err(ClientError::NotFound("nope".into())));
}

#[tokio::test]
async fn update_and_delete_round_trip_locally() {
    let mock = MockTransport::unconfigured();
    let resolver = resolver(&mock, seed());

    let env = resolver
        .update(
            "task_2".into(),
            TaskUpdate {
                title: Some("Renamed".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(env.data.title, "Renamed");
    assert_eq!(env.data.priority, 3);

    assert!(resolver.delete("task_2".into()).await.unwrap().data);
    assert_eq!(
        resolver.get("task_2".into()).await,
        Err(ClientError::NotFound("task_2".into()))
    );
}

#[tokio::test]
async fn remote_delete_with_body_is_confirmed() {
    let mock = MockTransport::new();
    mock.expect_delete("/tasks/task_1").return_json(json!({ "deleted": true }));
    let resolver = resolver(&mock, seed());

    let env = resolver.delete("task_1".into()).await.unwrap();
    assert_eq!(env.source, Source::Remote);
    assert!(env.data);
    // The local copy is untouched; only one tier answers.
    assert!(resolver.local().get("task_1".into()).await.unwrap().is_some());
}

#[tokio::test]
async fn list_accepts_wrapped_body_and_sends_query() {
    let mock = MockTransport::new();
    mock.expect_get("/tasks")
        .return_json(json!({ "data": [{ "id": "r1", "title": "Remote" }] }));
    let resolver = resolver(&mock, seed());

    let query = QueryParams::new()
        .param("priority", 1)
        .optional::<String>("owner", None);
    let env = resolver.list_where(query, |t| t.priority == 1).await.unwrap();
    assert_eq!(env.source, Source::Remote);
    assert_eq!(env.data.len(), 1);

    let call = &mock.calls()[0];
    assert_eq!(call.method, Method::GET);
    assert_eq!(call.query.present().collect::<Vec<_>>(), vec![("priority", "1")]);
}

#[tokio::test]
async fn local_list_applies_predicate() {
    let mock = MockTransport::unconfigured();
    let resolver = resolver(&mock, seed());

    let env = resolver
        .list_where(QueryParams::new(), |t| t.title == "Second")
        .await
        .unwrap();
    assert_eq!(env.data, vec![task("task_2", "Second")]);
}

#[tokio::test]
async fn action_uses_family_route_then_falls_back() {
    let mock = MockTransport::new();
    mock.expect_post("/tasks/task_1/complete")
        .return_json(json!({ "id": "task_1", "title": "First", "done": true }));
    mock.expect_post("/tasks/task_2/complete").return_status(502, "Bad Gateway");
    let resolver = resolver(&mock, seed());

    let remote = resolver.action("task_1".into(), TaskAction::Complete).await.unwrap();
    assert_eq!(remote.source, Source::Remote);
    assert!(remote.data.done);

    let local = resolver.action("task_2".into(), TaskAction::Complete).await.unwrap();
    assert_eq!(local.source, Source::Local);
    assert!(resolver.local().get("task_2".into()).await.unwrap().unwrap().done);
    mock.verify();
}
