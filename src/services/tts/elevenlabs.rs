use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;

use super::{SpeechProvider, SynthesisReply};

const SYNTHESIS_MODEL: &str = "eleven_monolingual_v1";

pub struct ElevenLabsProvider {
    api_key: String,
    voice_id: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl ElevenLabsProvider {
    pub fn new(api_key: String, voice_id: String, timeout: Duration) -> Self {
        Self {
            api_key,
            voice_id,
            timeout,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SpeechProvider for ElevenLabsProvider {
    async fn synthesize(&self, text: &str) -> anyhow::Result<SynthesisReply> {
        let url = format!(
            "https://api.elevenlabs.io/v1/text-to-speech/{}",
            self.voice_id
        );

        let body = json!({
            "text": text,
            "model_id": SYNTHESIS_MODEL,
            "voice_settings": {
                "stability": 0.5,
                "similarity_boost": 0.5,
            },
        });

        let resp = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .header("Accept", "audio/mpeg")
            .header("xi-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .context("failed to call ElevenLabs API")?;

        let status = resp.status().as_u16();
        let bytes = resp
            .bytes()
            .await
            .context("failed to read ElevenLabs response")?;

        Ok(SynthesisReply {
            status,
            body: bytes.to_vec(),
        })
    }
}
