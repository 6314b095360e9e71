use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;

use super::{AppointmentPayload, ContactPayload, CrmProvider, CrmReply};

const BASE_URL: &str = "https://rest.gohighlevel.com/v1";

pub struct HighLevelProvider {
    api_key: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HighLevelProvider {
    pub fn new(api_key: String, timeout: Duration) -> Self {
        Self {
            api_key,
            timeout,
            client: reqwest::Client::new(),
        }
    }

    async fn post_json<T: Serialize + Sync>(
        &self,
        url: &str,
        payload: &T,
    ) -> anyhow::Result<CrmReply> {
        let resp = self
            .client
            .post(url)
            .timeout(self.timeout)
            .bearer_auth(&self.api_key)
            .json(payload)
            .send()
            .await
            .context("failed to reach GoHighLevel API")?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .context("failed to read GoHighLevel response")?;

        Ok(CrmReply { status, body })
    }
}

#[async_trait]
impl CrmProvider for HighLevelProvider {
    async fn upsert_contact(&self, contact: &ContactPayload) -> anyhow::Result<CrmReply> {
        self.post_json(&format!("{BASE_URL}/contacts/"), contact)
            .await
    }

    async fn create_appointment(
        &self,
        appointment: &AppointmentPayload,
    ) -> anyhow::Result<CrmReply> {
        self.post_json(&format!("{BASE_URL}/appointments/"), appointment)
            .await
    }
}
