use anyhow::{anyhow, Result};
use clap::{App as ClapApp, Arg};
use log::LevelFilter;
use portfolio_tui::{ui::Theme, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let themes = Theme::available_themes();
    let theme_names: Vec<&str> = themes.iter().map(String::as_str).collect();
    let matches = ClapApp::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("theme")
                .short("t")
                .long("theme")
                .value_name("NAME")
                .possible_values(&theme_names)
                .help("Color theme")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("settle-ms")
                .long("settle-ms")
                .value_name("MS")
                .help("How long a transition locks navigation")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more detail to the log overlay"),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(theme) = matches.value_of("theme") {
        config.theme_name = theme.to_string();
    }
    if let Some(settle_ms) = matches.value_of("settle-ms") {
        config.navigation.settle_delay_ms = settle_ms
            .parse()
            .map_err(|e| anyhow!("Invalid --settle-ms '{}': {}", settle_ms, e))?;
    }
    let log_level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    App::start(config, log_level).await
}
