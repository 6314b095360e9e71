pub mod highlevel;

use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPayload {
    pub calendar_id: String,
    pub contact_id: String,
    pub start_time: String,
    pub title: String,
    pub description: String,
    pub location_id: String,
}

/// Raw upstream reply: status plus unparsed body text. The workflow decides
/// what counts as success and how to read the body.
#[derive(Debug, Clone)]
pub struct CrmReply {
    pub status: u16,
    pub body: String,
}

impl CrmReply {
    pub fn is_success(&self) -> bool {
        matches!(self.status, 200 | 201)
    }
}

#[async_trait]
pub trait CrmProvider: Send + Sync {
    async fn upsert_contact(&self, contact: &ContactPayload) -> anyhow::Result<CrmReply>;

    async fn create_appointment(
        &self,
        appointment: &AppointmentPayload,
    ) -> anyhow::Result<CrmReply>;
}
