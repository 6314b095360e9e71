pub mod elevenlabs;

use async_trait::async_trait;

/// Raw synthesis reply. On success the body is the audio stream; on failure
/// it is the provider's diagnostic text.
#[derive(Debug, Clone)]
pub struct SynthesisReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl SynthesisReply {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[async_trait]
pub trait SpeechProvider: Send + Sync {
    async fn synthesize(&self, text: &str) -> anyhow::Result<SynthesisReply>;
}
