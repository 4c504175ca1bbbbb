mod support;

use serde_json::{Value, json};

use atl_client::{ApiClient, ClientConfig, ClientError, submit_batch};
use atl_map::commit;
use atl_model::{CompetitionResult, MappedRecord, OrderDraft, ProjectDraft};

use support::{MockEndpoint, Reply};

fn client_for(endpoint: &MockEndpoint) -> ApiClient {
    ApiClient::new(ClientConfig::new(endpoint.url()).unwrap()).unwrap()
}

fn record(name: &str, quantity: u64) -> MappedRecord {
    MappedRecord {
        name: name.to_string(),
        quantity,
        ..MappedRecord::default()
    }
}

#[test]
fn bulk_add_returns_reported_count() {
    let endpoint = MockEndpoint::serve(vec![Reply::json(
        json!({"success": true, "addedCount": 2}),
    )]);
    let client = client_for(&endpoint);

    let added = client
        .bulk_add_components(&[record("Bolt", 4), record("Nut", 0)])
        .unwrap();

    assert_eq!(added, 2);
    assert_eq!(endpoint.param(0, "action").as_deref(), Some("bulkAddComponents"));
    let data: Value = serde_json::from_str(&endpoint.param(0, "data").unwrap()).unwrap();
    assert_eq!(
        data,
        json!([
            {"ComponentName": "Bolt", "Type": "", "Description": "", "Quantity": 4},
            {"ComponentName": "Nut", "Type": "", "Description": "", "Quantity": 0}
        ])
    );
}

#[test]
fn bulk_add_without_added_count_is_malformed() {
    let endpoint = MockEndpoint::serve(vec![Reply::json(json!({"success": true}))]);
    let client = client_for(&endpoint);

    let err = client.bulk_add_components(&[record("Bolt", 1)]).unwrap_err();

    assert!(matches!(err, ClientError::MissingField("addedCount")));
}

#[test]
fn server_error_status_is_reported() {
    let endpoint = MockEndpoint::serve(vec![Reply::status(500, "script crashed")]);
    let client = client_for(&endpoint);

    let err = client.bulk_add_components(&[record("Bolt", 1)]).unwrap_err();

    match err {
        ClientError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "script crashed");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn envelope_failure_becomes_api_error() {
    let endpoint = MockEndpoint::serve(vec![Reply::json(
        json!({"success": false, "error": "Sheet not found"}),
    )]);
    let client = client_for(&endpoint);

    let err = client.list_components().unwrap_err();

    assert!(matches!(err, ClientError::Api(message) if message == "Sheet not found"));
}

#[test]
fn partial_bulk_add_is_passed_through_by_submit() {
    let endpoint = MockEndpoint::serve(vec![Reply::json(
        json!({"success": true, "addedCount": 1}),
    )]);
    let client = client_for(&endpoint);
    let batch = commit(vec![record("a", 1), record("", 2), record("b", 3)]).unwrap();

    let outcome = submit_batch(&client, &batch).unwrap();

    assert_eq!(outcome.submitted, 2);
    assert_eq!(outcome.added, 1);
    assert_eq!(outcome.rejected, 1);
    assert!(outcome.is_partial());
}

#[test]
fn component_get_then_update_round_trips_fields() {
    let endpoint = MockEndpoint::serve(vec![
        Reply::json(json!({
            "success": true,
            "data": {"ComponentID": "C-7", "ComponentName": "Servo", "Type": "Actuator",
                     "Description": "metal gears", "Quantity": "3"}
        })),
        Reply::json(json!({"success": true})),
    ]);
    let client = client_for(&endpoint);

    let component = client.get_component("C-7").unwrap().unwrap();
    let mut record = component.to_record();
    record.quantity = 9;
    client.update_component(&component.id, &record).unwrap();

    assert_eq!(endpoint.param(0, "action").as_deref(), Some("getComponent"));
    assert_eq!(endpoint.param(0, "id").as_deref(), Some("C-7"));
    assert_eq!(endpoint.param(1, "action").as_deref(), Some("updateComponent"));
    assert_eq!(endpoint.param(1, "id").as_deref(), Some("C-7"));
    let data: Value = serde_json::from_str(&endpoint.param(1, "data").unwrap()).unwrap();
    assert_eq!(data["ComponentName"], "Servo");
    assert_eq!(data["Quantity"], 9);
}

#[test]
fn add_component_sends_data_without_id() {
    let endpoint = MockEndpoint::serve(vec![Reply::json(json!({"success": true}))]);
    let client = client_for(&endpoint);

    client.add_component(&record("Relay", 5)).unwrap();

    assert_eq!(endpoint.param(0, "action").as_deref(), Some("addComponent"));
    assert_eq!(endpoint.param(0, "id"), None);
}

#[test]
fn missing_record_reads_as_none() {
    let endpoint = MockEndpoint::serve(vec![
        Reply::json(json!({"success": true, "data": null})),
        Reply::json(json!({"success": false})),
    ]);
    let client = client_for(&endpoint);

    assert!(client.get_project("P-404").unwrap().is_none());
    assert!(client.get_order("O-404").unwrap().is_none());
}

#[test]
fn project_actions_use_project_keys() {
    let endpoint = MockEndpoint::serve(vec![
        Reply::json(json!({
            "success": true,
            "data": [{"ProjectID": "P-1", "ProjectName": "Rover", "ComponentsUsed": "C-1, C-2"}]
        })),
        Reply::json(json!({"success": true})),
        Reply::json(json!({"success": true})),
        Reply::json(json!({"success": true})),
    ]);
    let client = client_for(&endpoint);

    let projects = client.list_projects().unwrap();
    assert_eq!(projects[0].component_ids(), vec!["C-1", "C-2"]);

    let draft = ProjectDraft {
        name: "Rover v2".to_string(),
        ..projects[0].to_draft()
    };
    client.add_project(&draft).unwrap();
    client.update_project("P-1", &draft).unwrap();
    client.delete_project("P-1").unwrap();

    let actions: Vec<String> = (0..4)
        .filter_map(|index| endpoint.param(index, "action"))
        .collect();
    assert_eq!(
        actions,
        vec!["getProjects", "addProject", "updateProject", "deleteProject"]
    );
    let data: Value = serde_json::from_str(&endpoint.param(2, "data").unwrap()).unwrap();
    assert_eq!(data["ProjectName"], "Rover v2");
    assert_eq!(data["ComponentsUsed"], "C-1, C-2");
    assert_eq!(endpoint.param(3, "id").as_deref(), Some("P-1"));
}

#[test]
fn competition_actions_use_event_keys() {
    let endpoint = MockEndpoint::serve(vec![
        Reply::json(json!({
            "success": true,
            "data": {"EventID": "E-2", "EventName": "Robo Cup", "Date": "2026-05-01", "Status": "Ongoing"}
        })),
        Reply::json(json!({"success": true})),
        Reply::json(json!({"success": true})),
        Reply::json(json!({"success": true})),
        Reply::json(json!({"success": true, "data": []})),
        Reply::json(json!({"success": true})),
    ]);
    let client = client_for(&endpoint);

    let competition = client.get_competition("E-2").unwrap().unwrap();
    client.add_competition(&competition.to_draft()).unwrap();
    client
        .update_competition(&competition.id, &competition.to_draft())
        .unwrap();
    let result = CompetitionResult {
        status: "Completed".to_string(),
        position: "1st".to_string(),
        ..competition.to_result()
    };
    client
        .update_competition_result(&competition.id, &result)
        .unwrap();
    assert!(client.list_competitions().unwrap().is_empty());
    client.delete_competition("E-2").unwrap();

    assert_eq!(
        endpoint.param(3, "action").as_deref(),
        Some("updateCompetitionResult")
    );
    let data: Value = serde_json::from_str(&endpoint.param(3, "data").unwrap()).unwrap();
    assert_eq!(
        data,
        json!({"Status": "Completed", "Position": "1st", "Result": "", "Notes": ""})
    );
    assert_eq!(endpoint.param(5, "action").as_deref(), Some("deleteCompetition"));
}

#[test]
fn order_actions_use_order_keys() {
    let endpoint = MockEndpoint::serve(vec![
        Reply::json(json!({
            "success": true,
            "data": [{"OrderID": "O-1", "ComponentID": "C-3", "ComponentName": "Motor", "Quantity": 2}]
        })),
        Reply::json(json!({"success": true})),
        Reply::json(json!({"success": true})),
        Reply::json(json!({"success": true})),
    ]);
    let client = client_for(&endpoint);

    let orders = client.list_orders().unwrap();
    assert_eq!(orders[0].status_label(), "Ordered");

    let draft = OrderDraft {
        status: "Delivered".to_string(),
        ..orders[0].to_draft()
    };
    client.add_order(&draft).unwrap();
    client.update_order("O-1", &draft).unwrap();
    client.delete_order("O-1").unwrap();

    let data: Value = serde_json::from_str(&endpoint.param(2, "data").unwrap()).unwrap();
    assert_eq!(data["ComponentID"], "C-3");
    assert_eq!(data["Status"], "Delivered");
    assert_eq!(endpoint.param(3, "action").as_deref(), Some("deleteOrder"));
}
