use anyhow::Result;
use cmrlscraper::{collect, config::Config, fetch};
use reqwest::blocking::Client;
use std::{env, path::PathBuf, time::Duration};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();
    info!("startup");

    // ─── 2) load configuration ───────────────────────────────────────
    let config_path = env::args().nth(1).map(PathBuf::from);
    let cfg = Config::load(config_path.as_deref())?;
    let client = fetch::client(Duration::from_secs(cfg.request_timeout_secs))?;

    // ─── 3) run each collector in turn ───────────────────────────────
    let collectors: [(&str, fn(&Client, &Config) -> Result<()>); 3] = [
        ("parking", collect::parking::run),
        ("ridership", collect::ridership::run),
        ("phpdt", collect::phpdt::run),
    ];

    let mut failed = false;
    for (name, run) in collectors {
        info!(collector = name, "running");
        if let Err(err) = run(&client, &cfg) {
            error!(collector = name, "run failed: {:#}", err);
            failed = true;
        }
    }

    if failed {
        anyhow::bail!("one or more collectors failed");
    }
    info!("all done");
    Ok(())
}
