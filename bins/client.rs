use std::sync::Arc;

use common::http::TransportSettings;
use common::{ApiClient, ReqwestTransport};
use dotenvy::dotenv;
use pages::permissions::GroupPermissions;
use pages::router::resolve_path;
use pages::session::SessionUser;
use tracing::{error, info, warn};
use uuid::Uuid;

fn build_client(cfg: &configs::AppConfig) -> anyhow::Result<ApiClient> {
    let transport = ReqwestTransport::new(TransportSettings {
        base_url: cfg.api.base_url.clone(),
        token: cfg.api.token.clone(),
        connect_timeout: cfg.api.connect_timeout(),
        request_timeout: cfg.api.request_timeout(),
    })?;
    Ok(ApiClient::new(Arc::new(transport)))
}

/// Permission flags of the current group, as the store would provide them.
fn group_permissions_from_env() -> Option<GroupPermissions> {
    let raw = std::env::var("GROUP_PERMISSIONS").ok()?;
    match serde_json::from_str(&raw) {
        Ok(perms) => Some(perms),
        Err(e) => {
            warn!(error = %e, "ignoring malformed GROUP_PERMISSIONS");
            None
        }
    }
}

async fn run(cfg: configs::AppConfig, path: Option<String>) -> anyhow::Result<()> {
    let client = build_client(&cfg)?;

    let user = service::users::me(&client).await?;
    info!(service = "client", event = "session", user_id = user.id, name = %user.full_name(), email = %user.email, locale = %user.locale, "session user loaded");
    let session = SessionUser::from(&user);

    if let Some(path) = path {
        let perms = group_permissions_from_env();
        match resolve_path(&path, perms.as_ref(), Some(&session)) {
            Some(props) => info!(service = "client", event = "page_resolved", %path, props = ?props, "page props"),
            None => warn!(service = "client", event = "page_unknown", %path, "no page matches path"),
        }
    }
    Ok(())
}

fn main() -> std::process::ExitCode {
    dotenv().ok();

    let cfg = match configs::AppConfig::load_or_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            common::utils::logging::init_logging_default();
            error!(service = "client", event = "config_invalid", error = %e, "invalid configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    common::utils::logging::init_logging(cfg.logging.json);

    let run_id = Uuid::new_v4();
    info!(service = "client", event = "start", %run_id, base_url = %cfg.api.base_url, version = env!("CARGO_PKG_VERSION"), "client starting");

    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "client", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    let path = std::env::args().nth(1);
    match rt.block_on(run(cfg, path)) {
        Ok(()) => {
            info!(service = "client", event = "stop", %run_id, "done");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "client", event = "run_failed", %run_id, error = %e, "request failed");
            std::process::ExitCode::FAILURE
        }
    }
}
