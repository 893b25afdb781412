//! In-memory [`ConfigurationService`] for unit tests

use crate::adapters::remote::{ApiResponse, ConfigurationService};
use crate::domain::{
    ConfigurationId, PiiCategory, PiiConfiguration, PiiConfigurationFormData, SensitivityLevel,
};
use async_trait::async_trait;
use std::sync::Mutex;
use tokio::sync::Semaphore;

/// Scripted service: each operation returns whatever was last set for it
pub(crate) struct MockService {
    list: Mutex<ApiResponse<Vec<PiiConfiguration>>>,
    create: Mutex<ApiResponse<PiiConfiguration>>,
    update: Mutex<ApiResponse<PiiConfiguration>>,
    remove: Mutex<ApiResponse<()>>,
    calls: Mutex<Vec<String>>,
    gate: Option<Semaphore>,
}

impl MockService {
    pub(crate) fn new() -> Self {
        Self {
            list: Mutex::new(ApiResponse::Success(Vec::new())),
            create: Mutex::new(ApiResponse::Failure("create not scripted".to_string())),
            update: Mutex::new(ApiResponse::Failure("update not scripted".to_string())),
            remove: Mutex::new(ApiResponse::Success(())),
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Every call waits for a [`release`](Self::release) before answering
    pub(crate) fn gated(mut self) -> Self {
        self.gate = Some(Semaphore::new(0));
        self
    }

    pub(crate) fn release(&self, calls: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(calls);
        }
    }

    pub(crate) fn set_list(&self, response: ApiResponse<Vec<PiiConfiguration>>) {
        *self.list.lock().unwrap() = response;
    }

    pub(crate) fn set_create(&self, response: ApiResponse<PiiConfiguration>) {
        *self.create.lock().unwrap() = response;
    }

    pub(crate) fn set_update(&self, response: ApiResponse<PiiConfiguration>) {
        *self.update.lock().unwrap() = response;
    }

    pub(crate) fn set_remove(&self, response: ApiResponse<()>) {
        *self.remove.lock().unwrap() = response;
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn enter(&self, call: String) {
        self.calls.lock().unwrap().push(call);
        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate closed").forget();
        }
    }
}

#[async_trait]
impl ConfigurationService for MockService {
    async fn list_all(&self) -> ApiResponse<Vec<PiiConfiguration>> {
        self.enter("list".to_string()).await;
        self.list.lock().unwrap().clone()
    }

    async fn create(&self, _form: &PiiConfigurationFormData) -> ApiResponse<PiiConfiguration> {
        self.enter("create".to_string()).await;
        self.create.lock().unwrap().clone()
    }

    async fn update(
        &self,
        id: &ConfigurationId,
        _form: &PiiConfigurationFormData,
    ) -> ApiResponse<PiiConfiguration> {
        self.enter(format!("update:{id}")).await;
        self.update.lock().unwrap().clone()
    }

    async fn remove(&self, id: &ConfigurationId) -> ApiResponse<()> {
        self.enter(format!("remove:{id}")).await;
        self.remove.lock().unwrap().clone()
    }

    fn base_url(&self) -> &str {
        "mock://configurations"
    }
}

pub(crate) fn id(raw: &str) -> ConfigurationId {
    ConfigurationId::new(raw).unwrap()
}

pub(crate) fn record(raw_id: &str, name: &str) -> PiiConfiguration {
    PiiConfiguration::from_form(id(raw_id), form(name))
}

pub(crate) fn form(name: &str) -> PiiConfigurationFormData {
    PiiConfigurationFormData {
        pii_category: Some(PiiCategory::ContactInformation),
        data_element_name: name.to_string(),
        description: format!("{name} description"),
        sensitivity_level: SensitivityLevel::High,
        masking_required: true,
        encryption_required: false,
        access_control_level: "Restricted".to_string(),
        retention_policy: "5 years".to_string(),
        purpose: "Customer contact".to_string(),
    }
}
