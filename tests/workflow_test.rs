//! End-to-end tests of the store, dialog and table over the real HTTP client

use async_trait::async_trait;
use mockito::{Matcher, Server};
use pii_setup::adapters::remote::{ApiResponse, ConfigurationService, PiiApiClient};
use pii_setup::core::{
    ConfigurationStore, ConfigurationTable, DialogController, DialogProps, Notification,
    NotificationQueue, SubmitOutcome, TableView,
};
use pii_setup::domain::{
    ConfigurationId, FieldUpdate, PiiCategory, PiiConfiguration, PiiConfigurationFormData,
    SensitivityLevel,
};
use serde_json::json;
use std::sync::Arc;

fn email_record_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "piiCategory": "Contact Information",
        "dataElementName": "Email",
        "description": "d",
        "sensitivityLevel": "High",
        "maskingRequired": true,
        "encryptionRequired": false,
        "accessControlLevel": "Restricted",
        "retentionPolicy": "5 years",
        "purpose": "p"
    })
}

#[tokio::test]
async fn test_add_edit_delete_round() {
    let mut server = Server::new_async().await;
    let base = format!("{}/pii", server.url());
    server
        .mock("GET", "/pii")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    server
        .mock("POST", "/pii")
        .with_status(201)
        .with_body(email_record_json("1").to_string())
        .create_async()
        .await;

    let queue = Arc::new(NotificationQueue::new());
    let client = Arc::new(PiiApiClient::with_base_url(base).unwrap());
    let store = ConfigurationStore::activate(client, queue.clone()).await;
    let table = ConfigurationTable::new();
    assert_eq!(table.view(&store.snapshot()), TableView::Empty);

    // Add through the dialog
    let mut dialog = DialogController::new();
    dialog.sync(DialogProps::add());
    for update in [
        FieldUpdate::PiiCategory(Some(PiiCategory::ContactInformation)),
        FieldUpdate::DataElementName("Email".to_string()),
        FieldUpdate::Description("d".to_string()),
        FieldUpdate::SensitivityLevel(SensitivityLevel::High),
        FieldUpdate::MaskingRequired(true),
        FieldUpdate::AccessControlLevel("Restricted".to_string()),
        FieldUpdate::RetentionPolicy("5 years".to_string()),
        FieldUpdate::Purpose("p".to_string()),
    ] {
        dialog.update_field(update);
    }
    let store_ref = &store;
    let outcome = dialog
        .submit(|form| async move { store_ref.add(&form).await })
        .await;

    assert_eq!(outcome, SubmitOutcome::Closed);
    assert_eq!(dialog.form(), &PiiConfigurationFormData::default());
    let list = store.configurations();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id.as_str(), "1");

    // Edit the stored record
    let mut updated = email_record_json("1");
    updated["dataElementName"] = json!("Work Email");
    updated["updatedAt"] = json!("2025-06-18T09:00:00Z");
    server
        .mock("PUT", "/pii/1")
        .with_status(200)
        .with_body(updated.to_string())
        .create_async()
        .await;

    let existing = store.find(&list[0].id).unwrap();
    dialog.sync(DialogProps::edit(&existing));
    assert_eq!(dialog.form().data_element_name, "Email");
    dialog.update_field(FieldUpdate::DataElementName("Work Email".to_string()));
    let id = existing.id.clone();
    let id_ref = &id;
    let outcome = dialog
        .submit(|form| async move { store_ref.update(id_ref, &form).await })
        .await;
    assert_eq!(outcome, SubmitOutcome::Closed);
    assert_eq!(store.configurations()[0].data_element_name, "Work Email");

    // Delete it
    server
        .mock("DELETE", "/pii/1")
        .with_status(200)
        .create_async()
        .await;
    assert!(table.delete(&store, &id).await.unwrap());
    assert!(store.configurations().is_empty());

    assert_eq!(
        queue.drain(),
        vec![
            Notification::Success("Configuration added successfully".to_string()),
            Notification::Success("Configuration updated successfully".to_string()),
            Notification::Success("Configuration deleted successfully".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_edit_keeps_values_outside_the_known_vocabulary() {
    let mut stored = email_record_json("1");
    stored["piiCategory"] = json!("Device Identifiers");
    stored["sensitivityLevel"] = json!("Critical");

    let mut server = Server::new_async().await;
    server
        .mock("GET", "/pii")
        .with_status(200)
        .with_body(json!([stored.clone()]).to_string())
        .create_async()
        .await;

    let mut expected = stored.clone();
    expected.as_object_mut().unwrap().remove("id");
    expected["purpose"] = json!("Fraud prevention");
    let mut returned = stored.clone();
    returned["purpose"] = json!("Fraud prevention");
    let put = server
        .mock("PUT", "/pii/1")
        .match_body(Matcher::Json(expected))
        .with_status(200)
        .with_body(returned.to_string())
        .create_async()
        .await;

    let queue = Arc::new(NotificationQueue::new());
    let client = Arc::new(PiiApiClient::with_base_url(format!("{}/pii", server.url())).unwrap());
    let store = ConfigurationStore::activate(client, queue.clone()).await;

    let existing = store.configurations()[0].clone();
    assert_eq!(existing.category_label(), "Device Identifiers");
    assert_eq!(existing.sensitivity_level.as_str(), "Critical");

    let mut dialog = DialogController::new();
    dialog.sync(DialogProps::edit(&existing));
    dialog.update_field(FieldUpdate::Purpose("Fraud prevention".to_string()));
    let store_ref = &store;
    let id_ref = &existing.id;
    let outcome = dialog
        .submit(|form| async move { store_ref.update(id_ref, &form).await })
        .await;

    put.assert_async().await;
    assert_eq!(outcome, SubmitOutcome::Closed);
    let updated = &store.configurations()[0];
    assert_eq!(updated.category_label(), "Device Identifiers");
    assert_eq!(updated.purpose, "Fraud prevention");
}

#[tokio::test]
async fn test_rejected_add_keeps_dialog_open() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/pii")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    server
        .mock("POST", "/pii")
        .with_status(400)
        .create_async()
        .await;

    let queue = Arc::new(NotificationQueue::new());
    let client = Arc::new(PiiApiClient::with_base_url(format!("{}/pii", server.url())).unwrap());
    let store = ConfigurationStore::activate(client, queue.clone()).await;

    let mut dialog = DialogController::new();
    dialog.sync(DialogProps::add());
    dialog.update_field(FieldUpdate::DataElementName("Passport".to_string()));
    let store_ref = &store;
    let outcome = dialog
        .submit(|form| async move { store_ref.add(&form).await })
        .await;

    assert_eq!(outcome, SubmitOutcome::StayOpen);
    assert!(dialog.is_open());
    assert_eq!(dialog.form().data_element_name, "Passport");
    assert!(store.configurations().is_empty());
    assert_eq!(
        queue.drain(),
        vec![Notification::Error("HTTP error! status: 400".to_string())]
    );
}

#[tokio::test]
async fn test_refresh_failure_shows_error_and_keeps_list() {
    let mut server = Server::new_async().await;
    let first = server
        .mock("GET", "/pii")
        .with_status(200)
        .with_body(json!([email_record_json("1")]).to_string())
        .expect(1)
        .create_async()
        .await;

    let queue = Arc::new(NotificationQueue::new());
    let client = Arc::new(PiiApiClient::with_base_url(format!("{}/pii", server.url())).unwrap());
    let store = ConfigurationStore::activate(client, queue.clone()).await;
    first.assert_async().await;
    first.remove_async().await;

    server
        .mock("GET", "/pii")
        .with_status(503)
        .create_async()
        .await;
    store.refresh().await;

    let snapshot = store.snapshot();
    assert_eq!(snapshot.configurations.len(), 1);
    assert_eq!(snapshot.error.as_deref(), Some("HTTP error! status: 503"));
    assert!(!snapshot.is_loading);
    assert_eq!(
        queue.drain(),
        vec![Notification::Error("Failed to load PII configurations".to_string())]
    );
}

#[tokio::test]
async fn test_refresh_reports_records_without_id() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/pii")
        .with_status(200)
        .with_body(
            json!([
                email_record_json("1"),
                { "dataElementName": "Orphan" },
                { "id": "", "dataElementName": "Blank" }
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let queue = Arc::new(NotificationQueue::new());
    let client = Arc::new(PiiApiClient::with_base_url(format!("{}/pii", server.url())).unwrap());
    let store = ConfigurationStore::activate(client, queue.clone()).await;

    let snapshot = store.snapshot();
    assert_eq!(snapshot.configurations.len(), 1);
    assert_eq!(snapshot.skipped, 2);
    assert_eq!(snapshot.error, None);
}

/// Reads from a live server, writes to an address nobody listens on
struct UnreachableWrites {
    live: PiiApiClient,
    dead: PiiApiClient,
}

#[async_trait]
impl ConfigurationService for UnreachableWrites {
    async fn list_all(&self) -> ApiResponse<Vec<PiiConfiguration>> {
        self.live.list_all().await
    }

    async fn create(&self, form: &PiiConfigurationFormData) -> ApiResponse<PiiConfiguration> {
        self.dead.create(form).await
    }

    async fn update(
        &self,
        id: &ConfigurationId,
        form: &PiiConfigurationFormData,
    ) -> ApiResponse<PiiConfiguration> {
        self.dead.update(id, form).await
    }

    async fn remove(&self, id: &ConfigurationId) -> ApiResponse<()> {
        self.dead.remove(id).await
    }

    fn base_url(&self) -> &str {
        self.live.base_url()
    }
}

#[tokio::test]
async fn test_delete_while_store_unreachable() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/pii")
        .with_status(200)
        .with_body(json!([email_record_json("1")]).to_string())
        .create_async()
        .await;

    let service = UnreachableWrites {
        live: PiiApiClient::with_base_url(format!("{}/pii", server.url())).unwrap(),
        dead: PiiApiClient::with_base_url("http://127.0.0.1:1/pii").unwrap(),
    };
    let queue = Arc::new(NotificationQueue::new());
    let store = ConfigurationStore::activate(Arc::new(service), queue.clone()).await;
    let before = store.configurations();
    assert_eq!(before.len(), 1);

    let table = ConfigurationTable::new();
    let id = ConfigurationId::new("1").unwrap();
    let result = table.delete(&store, &id).await;

    assert!(result.is_err());
    assert_eq!(store.configurations(), before);
    assert!(!table.is_deleting(&id));
    assert_eq!(
        queue.drain(),
        vec![Notification::Error("Failed to delete configuration".to_string())]
    );
}
