//! Blocking client for the component record API.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, warn};

use atl_model::{
    Competition, CompetitionDraft, CompetitionResult, Component, MappedRecord, Order, OrderDraft,
    Project, ProjectDraft,
};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::request::{ApiEnvelope, build_action_url};
use crate::sink::ComponentSink;

/// Client for the spreadsheet-backed record API.
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a new client for `config`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("atl/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends one action and returns the checked response envelope.
    pub fn call(&self, action: &str, params: &[(&str, Value)]) -> Result<ApiEnvelope> {
        let url = build_action_url(&self.config.base_url, action, params);
        debug!(action, "Calling record API");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(action, status, "Record API returned an error status");
            return Err(ClientError::Status { status, message });
        }

        let envelope: ApiEnvelope = response.json()?;
        envelope.into_result().inspect_err(|error| {
            warn!(action, %error, "Record API reported a failure");
        })
    }

    // === Components ===

    /// All stored components (`getComponents`).
    pub fn list_components(&self) -> Result<Vec<Component>> {
        self.list("getComponents")
    }

    /// One component by ID (`getComponent`).
    pub fn get_component(&self, id: &str) -> Result<Option<Component>> {
        self.get("getComponent", id)
    }

    /// Creates one component (`addComponent`).
    pub fn add_component(&self, record: &MappedRecord) -> Result<()> {
        self.save("addComponent", None, record)
    }

    /// Replaces a component's fields (`updateComponent`).
    pub fn update_component(&self, id: &str, record: &MappedRecord) -> Result<()> {
        self.save("updateComponent", Some(id), record)
    }

    /// Sets a component's stock count (`updateComponentQuantity`).
    pub fn update_quantity(&self, id: &str, quantity: u64) -> Result<()> {
        self.call(
            "updateComponentQuantity",
            &[("id", json!(id)), ("quantity", json!(quantity))],
        )?;
        Ok(())
    }

    /// Creates many components at once (`bulkAddComponents`).
    ///
    /// Returns the number of rows the endpoint reports as added, which may be
    /// lower than the number sent.
    pub fn bulk_add_components(&self, records: &[MappedRecord]) -> Result<usize> {
        let envelope = self.call("bulkAddComponents", &[("data", to_param(records)?)])?;
        let added = envelope
            .added_count
            .ok_or(ClientError::MissingField("addedCount"))?;
        Ok(usize::try_from(added).unwrap_or(usize::MAX))
    }

    // === Projects ===

    pub fn list_projects(&self) -> Result<Vec<Project>> {
        self.list("getProjects")
    }

    pub fn get_project(&self, id: &str) -> Result<Option<Project>> {
        self.get("getProject", id)
    }

    pub fn add_project(&self, draft: &ProjectDraft) -> Result<()> {
        self.save("addProject", None, draft)
    }

    pub fn update_project(&self, id: &str, draft: &ProjectDraft) -> Result<()> {
        self.save("updateProject", Some(id), draft)
    }

    pub fn delete_project(&self, id: &str) -> Result<()> {
        self.delete("deleteProject", id)
    }

    // === Competitions ===

    pub fn list_competitions(&self) -> Result<Vec<Competition>> {
        self.list("getCompetitions")
    }

    pub fn get_competition(&self, id: &str) -> Result<Option<Competition>> {
        self.get("getCompetition", id)
    }

    pub fn add_competition(&self, draft: &CompetitionDraft) -> Result<()> {
        self.save("addCompetition", None, draft)
    }

    pub fn update_competition(&self, id: &str, draft: &CompetitionDraft) -> Result<()> {
        self.save("updateCompetition", Some(id), draft)
    }

    /// Records status, placing and outcome (`updateCompetitionResult`).
    pub fn update_competition_result(&self, id: &str, result: &CompetitionResult) -> Result<()> {
        self.save("updateCompetitionResult", Some(id), result)
    }

    pub fn delete_competition(&self, id: &str) -> Result<()> {
        self.delete("deleteCompetition", id)
    }

    // === Orders ===

    pub fn list_orders(&self) -> Result<Vec<Order>> {
        self.list("getOrders")
    }

    pub fn get_order(&self, id: &str) -> Result<Option<Order>> {
        self.get("getOrder", id)
    }

    pub fn add_order(&self, draft: &OrderDraft) -> Result<()> {
        self.save("addOrder", None, draft)
    }

    pub fn update_order(&self, id: &str, draft: &OrderDraft) -> Result<()> {
        self.save("updateOrder", Some(id), draft)
    }

    pub fn delete_order(&self, id: &str) -> Result<()> {
        self.delete("deleteOrder", id)
    }

    fn list<T: DeserializeOwned>(&self, action: &str) -> Result<Vec<T>> {
        let mut envelope = self.call(action, &[])?;
        match envelope.take_data() {
            Value::Null => Ok(Vec::new()),
            data => Ok(serde_json::from_value(data)?),
        }
    }

    /// Null data, or a failure without an error message, reads as `None`.
    fn get<T: DeserializeOwned>(&self, action: &str, id: &str) -> Result<Option<T>> {
        let mut envelope = self.call(action, &[("id", json!(id))])?;
        if !envelope.success {
            return Ok(None);
        }
        match envelope.take_data() {
            Value::Null => Ok(None),
            data => Ok(Some(serde_json::from_value(data)?)),
        }
    }

    fn save<T: Serialize + ?Sized>(&self, action: &str, id: Option<&str>, data: &T) -> Result<()> {
        let data = to_param(data)?;
        match id {
            Some(id) => self.call(action, &[("id", json!(id)), ("data", data)])?,
            None => self.call(action, &[("data", data)])?,
        };
        Ok(())
    }

    fn delete(&self, action: &str, id: &str) -> Result<()> {
        self.call(action, &[("id", json!(id))])?;
        Ok(())
    }
}

impl ComponentSink for ApiClient {
    fn bulk_add(&self, records: &[MappedRecord]) -> Result<usize> {
        self.bulk_add_components(records)
    }
}

fn to_param<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}
