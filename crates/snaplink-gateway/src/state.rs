use std::sync::Arc;

use snaplink_shortener::Shortener;

use crate::config::GatewayConfig;
use crate::qr::QrEncoder;

#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    qr: Arc<dyn QrEncoder>,
    config: Arc<GatewayConfig>,
}

impl AppState {
    pub fn new(
        shortener: Arc<dyn Shortener>,
        qr: Arc<dyn QrEncoder>,
        config: GatewayConfig,
    ) -> Self {
        Self {
            shortener,
            qr,
            config: Arc::new(config),
        }
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn qr(&self) -> &dyn QrEncoder {
        self.qr.as_ref()
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}
