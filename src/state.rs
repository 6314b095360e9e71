use crate::config::AppConfig;
use crate::services::crm::CrmProvider;
use crate::services::tts::SpeechProvider;

pub struct AppState {
    pub config: AppConfig,
    pub tts: Box<dyn SpeechProvider>,
    pub crm: Box<dyn CrmProvider>,
}
