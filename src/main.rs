//! Diagnostic harness: loads a config file and reports the external
//! resources it describes, along with the connection string for each known
//! logical database.

use extres::config::ExternalResources;
use extres::dsn;
use std::env;
use std::process::ExitCode;
use tracing::{Level, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CONFIG_PATH: &str = "./config.json";

fn parse_config_path() -> String {
    for arg in env::args().skip(1) {
        if let Some(path) = arg.strip_prefix("--config=") {
            return path.to_string();
        }
    }
    DEFAULT_CONFIG_PATH.to_string()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let config_path = parse_config_path();
    let resources = match ExternalResources::load(&config_path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error reading config file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(config = %config_path, env = %resources.env, "configuration loaded");
    info!("Dbuser = {}", resources.db.user);
    info!("MojoWebAddr = {}", resources.mojo_db.web_addr);
    info!("Timezone = {}", resources.timezone);
    info!("Tester1 = {}", resources.testers.tester1_name);
    info!("Tester2 = {}", resources.testers.tester2_name);
    info!("WREISDbname = {}", resources.wreis_db.name);

    for name in ["accord", "rentroll", "receipts", "mojo", "wreis"] {
        match dsn::build_connection_string(name, &resources) {
            Ok(d) if d.is_fallback() => {
                warn!(db = %name, dsn = %d.as_str(), "fallback connection string")
            }
            Ok(d) => info!(db = %name, dsn = %d.as_str(), "connection string"),
            Err(e) => error!(db = %name, error = %e, "cannot build connection string"),
        }
    }

    ExitCode::SUCCESS
}
