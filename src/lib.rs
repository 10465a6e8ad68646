//! QuickFlow — in-memory demo backend for a healthcare appointment portal.
//!
//! Everything lives for the duration of one session: a seeded mock dataset
//! (patients, appointments, referrals, commitments, bookable ultrasound
//! slots), a snapshot store with the query surface the portal screens read
//! from, one booking action that synthesizes the simulated side channels
//! (SMS, CRM, personal area, agent summary), and routing between the
//! quick-flow path and the legacy scheduler pastiche. No persistence, no
//! network, no authentication.

pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod notifications;
pub mod routing;
pub mod seed;
pub mod store;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for demo hosts.
///
/// Honors `RUST_LOG` when set, otherwise falls back to the crate default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
}
