//! End-to-end tests: controller + HTTP client against a mock collection.

use roster_client::{ClientConfig, UsersClient};
use roster_core::{Draft, Entity, EntityId, Field, Violation};
use roster_state::{
    ControllerOptions, CreateOutcome, DeleteOutcome, ListController, LoadOutcome, StatusMessage,
};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn controller_for(mock_server: &MockServer) -> ListController {
    let config = ClientConfig::new(format!("{}/users", mock_server.uri()));
    let api = Arc::new(UsersClient::new(config).unwrap());
    ListController::new(api, ControllerOptions::default())
}

async fn mount_alice(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "1", "name": "Alice", "email": "a@b.com", "username": "alice"}
        ])))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_initialize_loads_remote_collection() {
    let mock_server = MockServer::start().await;
    mount_alice(&mock_server).await;

    let controller = controller_for(&mock_server);
    assert_eq!(controller.initialize().await, LoadOutcome::Loaded(1));

    let state = controller.snapshot();
    assert_eq!(
        state.entities(),
        &[Entity {
            id: EntityId::new("1"),
            name: "Alice".to_string(),
            email: "a@b.com".to_string(),
            username: "alice".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_create_appends_server_confirmed_entity() {
    let mock_server = MockServer::start().await;
    mount_alice(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "2", "name": "Bob", "email": "bob@x.com", "username": "bob"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let controller = controller_for(&mock_server);
    controller.initialize().await;

    let outcome = controller
        .submit_create(&Draft::new("Bob", "bob@x.com", "bob"))
        .await;
    assert!(matches!(outcome, CreateOutcome::Created(_)));

    let state = controller.snapshot();
    assert_eq!(state.len(), 2);
    let last = state.entities().last().unwrap();
    assert_eq!(last.id.as_str(), "2");
    assert_eq!(last.name, "Bob");
    assert_eq!(state.status(), Some(StatusMessage::Created));
    assert_eq!(state.status().unwrap().text(), "User created successfully");
}

#[tokio::test]
async fn test_invalid_draft_never_reaches_server() {
    let mock_server = MockServer::start().await;
    mount_alice(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let controller = controller_for(&mock_server);
    controller.initialize().await;
    let before = controller.snapshot();

    let outcome = controller.submit_create(&Draft::new("", "bad", "c")).await;

    let errors = match outcome {
        CreateOutcome::Rejected(errors) => errors,
        other => panic!("Expected Rejected, got: {:?}", other),
    };
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get(Field::Name), Some(Violation::Required));
    assert_eq!(errors.get(Field::Email), Some(Violation::InvalidFormat));
    assert_eq!(controller.snapshot(), before);
}

#[tokio::test]
async fn test_delete_round_trip() {
    let mock_server = MockServer::start().await;
    mount_alice(&mock_server).await;

    Mock::given(method("DELETE"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let controller = controller_for(&mock_server);
    controller.initialize().await;
    controller.delete_entity(&EntityId::new("1")).await;

    let state = controller.snapshot();
    assert!(state.is_empty());
    assert_eq!(state.status().map(|s| s.text()), Some("User deleted"));
}

#[tokio::test]
async fn test_dot_id_delete_keeps_entry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": "..",
            "name": "Dot",
            "email": "dot@b.com",
            "username": "dot"
        }])))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&mock_server)
        .await;

    let controller = controller_for(&mock_server);
    controller.initialize().await;

    let outcome = controller.delete_entity(&EntityId::new("..")).await;

    assert_eq!(outcome, DeleteOutcome::Failed);
    let state = controller.snapshot();
    assert!(state.contains(&EntityId::new("..")));
    assert!(state.status().is_none());
}

#[tokio::test]
async fn test_server_outage_is_absorbed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let controller = controller_for(&mock_server);

    assert_eq!(controller.initialize().await, LoadOutcome::Failed);
    assert!(controller.snapshot().is_empty());
    assert!(controller.snapshot().status().is_none());
    assert!(controller.is_live());
}
