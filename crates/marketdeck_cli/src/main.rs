//! CLI smoke entry point.
//!
//! # Responsibility
//! - Load layered config, start logging and build a seeded store.
//! - Print a deterministic JSON summary of the seeded dashboard.
//!
//! Usage: `marketdeck_cli [config.json]`

use log::{info, warn};
use marketdeck_core::gateway::AiGateway;
use marketdeck_core::query::{count_leads_by_status, CampaignSummary};
use marketdeck_core::{core_version, init_logging, AppConfig, AppStore};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = match AppConfig::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("marketdeck: invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging(&config.logging) {
        eprintln!("marketdeck: logging disabled: {err}");
    }

    let store = AppStore::seeded(&config);
    let gateway = AiGateway::from_config(&config.gateway, None);
    if !gateway.is_available() {
        warn!("event=cli_start module=cli status=noop reason=gateway_offline");
    }

    let leads_by_status: serde_json::Map<String, serde_json::Value> =
        count_leads_by_status(store.leads().as_slice())
            .into_iter()
            .map(|(status, count)| (status.to_string(), json!(count)))
            .collect();
    let summary = json!({
        "version": core_version(),
        "campaigns": CampaignSummary::from_campaigns(store.campaigns()),
        "leadsByStatus": leads_by_status,
        "audiences": store.audiences().len(),
        "assets": store.assets().len(),
        "rules": store.rules().len(),
        "unreadNotifications": store.unread_notification_count(),
        "brand": store.brand_profile().name,
        "gateway": {
            "model": gateway.model_name(),
            "available": gateway.is_available(),
        },
    });
    match serde_json::to_string_pretty(&summary) {
        Ok(text) => println!("{text}"),
        Err(err) => {
            eprintln!("marketdeck: failed to render summary: {err}");
            return ExitCode::FAILURE;
        }
    }
    info!("event=cli_summary module=cli status=ok");
    ExitCode::SUCCESS
}
