mod commands;

use clap::Parser;

use wealthsync::api::{BudgetApi, BudgetApiBuilder};

use crate::args::{CliArgs, Command};
use crate::config::{load_config, AppConfig};
use crate::logging::init_logging;

pub async fn run() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let loaded = load_config(args.config.clone())?;
    let _logger = init_logging(&loaded.config.logging, &loaded.paths)?;

    let config = apply_overrides(loaded.config, &args);
    log::debug!(
        "using backend {} with {} attempts, {}ms apart",
        config.api.base_url,
        config.retry.max_attempts(),
        config.retry.delay_ms()
    );
    let api = build_api(&config)?;

    match args.command {
        Command::Plan {
            email,
            income,
            expenses,
            savings_goal,
        } => commands::plan(api, email, income, expenses, savings_goal).await,
        Command::History { email } => commands::history(api, email).await,
    }
}

fn apply_overrides(mut config: AppConfig, args: &CliArgs) -> AppConfig {
    if let Some(url) = &args.base_url {
        config.api.base_url = url.clone();
    }
    if let Some(timeout) = args.timeout {
        config.api.timeout_seconds = Some(timeout);
    }
    if let Some(attempts) = args.max_attempts {
        config.retry = config.retry.with_max_attempts(attempts);
    }
    if let Some(delay) = args.delay_ms {
        config.retry = config.retry.with_delay_ms(delay);
    }
    config
}

fn build_api(config: &AppConfig) -> anyhow::Result<Box<dyn BudgetApi>> {
    let mut builder = BudgetApiBuilder::new()
        .base_url(config.api.base_url.clone())
        .retry(config.retry);
    if let Some(timeout) = config.api.timeout_seconds {
        builder = builder.timeout_seconds(timeout);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_values() {
        let args = CliArgs::try_parse_from([
            "wealthsync",
            "history",
            "-e",
            "me@example.com",
            "--base-url",
            "http://localhost:9000",
            "--delay-ms",
            "5000",
        ])
        .unwrap();

        let config = apply_overrides(AppConfig::default(), &args);
        assert_eq!(config.api.base_url, "http://localhost:9000");
        assert_eq!(config.retry.delay_ms(), 5_000);
        assert_eq!(config.retry.max_attempts().get(), 3);
        assert_eq!(config.api.timeout_seconds, None);
    }
}
