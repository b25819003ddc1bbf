use std::process::ExitCode;

use configs::AppConfig;
use tokio::runtime::Runtime;
use tracing::{error, info, warn};
use uuid::Uuid;

const SERVICE: &str = "seller-service";

fn install_panic_hook(instance_id: Uuid) {
    std::panic::set_hook(Box::new(move |panic| {
        error!(service = SERVICE, event = "panic", %instance_id, message = %panic, "unhandled panic");
    }));
}

fn build_runtime(cfg: &AppConfig) -> std::io::Result<Runtime> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(threads) = cfg.server.worker_threads {
        builder.worker_threads(threads);
    }
    builder.build()
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(service = SERVICE, error = %e, "cannot listen for Ctrl+C; running until the server exits");
        std::future::pending::<()>().await;
    }
    info!(service = SERVICE, event = "shutdown_signal", "Ctrl+C received, draining connections");
}

fn main() -> ExitCode {
    // .env before the subscriber so RUST_LOG and LOG_FORMAT apply
    dotenvy::dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let instance_id = Uuid::new_v4();
    install_panic_hook(instance_id);

    let cfg = match server::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = SERVICE, event = "config_invalid", error = %e, "cannot start without a valid configuration");
            return ExitCode::FAILURE;
        }
    };

    let rt = match build_runtime(&cfg) {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = SERVICE, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = SERVICE,
        event = "start",
        %instance_id,
        pid = std::process::id(),
        version = env!("CARGO_PKG_VERSION"),
        threads = cfg.server.worker_threads.unwrap_or_default(),
        "seller service starting"
    );

    match rt.block_on(server::run(cfg, ctrl_c())) {
        Ok(()) => {
            info!(service = SERVICE, event = "stop", %instance_id, "seller service stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = SERVICE, event = "run_failed", %instance_id, error = %e, "seller service exited with error");
            ExitCode::FAILURE
        }
    }
}
