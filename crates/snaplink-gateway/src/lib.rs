//! HTTP boundary of the snaplink URL shortener.
//!
//! Exposes `POST /api/shorten` (short link plus QR code), `GET /{short_code}`
//! (permanent redirect, degrading to a fallback location on any failure) and
//! `GET /api/health`.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod qr;
pub mod state;

pub use app::App;
pub use config::{Environment, GatewayConfig};
pub use qr::{PngQrEncoder, QrEncoder};
pub use state::AppState;
