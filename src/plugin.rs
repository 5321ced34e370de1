use std::sync::Arc;

use crate::entities::{register_schemes, unregister_schemes};
use crate::extension::SchemeManager;

/// Plugin lifecycle: the gallery kinds are only known to the host while
/// the plugin is started.
pub struct PhotoPlugin {
    schemes: Arc<SchemeManager>,
    started: bool,
}

impl PhotoPlugin {
    pub fn new(schemes: Arc<SchemeManager>) -> Self {
        Self {
            schemes,
            started: false,
        }
    }

    pub fn start(&mut self) {
        register_schemes(&self.schemes);
        self.started = true;
        log::info!("Photo plugin started with {} schemes", self.schemes.len());
    }

    pub fn stop(&mut self) {
        unregister_schemes(&self.schemes);
        self.started = false;
        log::info!("Photo plugin stopped");
    }

    pub fn is_started(&self) -> bool {
        self.started
    }
}
