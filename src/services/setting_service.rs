use crate::config::Configuration;

const DEFAULT_TITLE: &str = "图库";
const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8090";
const DEFAULT_GALLERY_PAGE_SIZE: usize = 10;

/// Typed view over the configuration values the gallery reads.
#[derive(Debug, Clone)]
pub struct SettingService {
    config: Configuration,
}

impl SettingService {
    pub fn new(config: Configuration) -> Self {
        Self { config }
    }

    pub fn title(&self) -> String {
        self.config
            .get(Configuration::BASE_TITLE)
            .filter(|title| !title.trim().is_empty())
            .unwrap_or(DEFAULT_TITLE)
            .to_string()
    }

    pub fn gallery_page_size(&self) -> usize {
        self.config
            .parse::<usize>(Configuration::GALLERY_PAGE_SIZE)
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_GALLERY_PAGE_SIZE)
    }

    pub fn server_address(&self) -> String {
        self.config
            .get(Configuration::SERVER_ADDRESS)
            .unwrap_or(DEFAULT_SERVER_ADDRESS)
            .to_string()
    }

    pub fn database_url(&self) -> Option<String> {
        self.config
            .get(Configuration::DATABASE_URL)
            .filter(|url| !url.trim().is_empty())
            .map(str::to_string)
    }
}
