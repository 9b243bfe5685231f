use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chanlog::config::{load_config, AssertAction, ConfigError, DebugConfig};
use chanlog::observability::logging::init_logging;
use chanlog::sinks::OverlayBuffer;
use chanlog::{chan_assert, chan_log, log_method_call, Channel, ChannelLogger, EventKind};

#[derive(Parser)]
#[command(name = "chanlog-cli")]
#[command(about = "Inspect channel logger configuration and run the demo", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available debug channels
    Channels {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a config file and show the channels it enables
    Check {
        path: PathBuf,
    },
    /// Run the enable/log/disable scenario against a logger
    Demo {
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Extra channels to enable before the scenario
        #[arg(short, long)]
        enable: Vec<Channel>,

        /// Report failed asserts without pausing
        #[arg(long)]
        no_pause: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Channels { json } => list_channels(json),
        Commands::Check { path } => check(&path),
        Commands::Demo { config, enable, no_pause } => demo(config, enable, no_pause),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let ConfigError::Validation(errors) = &e {
                for err in errors {
                    eprintln!("  - {}", err);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn list_channels(as_json: bool) -> Result<(), ConfigError> {
    if as_json {
        let channels: Vec<_> = Channel::ALL
            .iter()
            .map(|c| json!({ "ordinal": c.ordinal(), "name": c.as_str() }))
            .collect();
        println!("{}", serde_json::Value::Array(channels));
    } else {
        for channel in Channel::ALL {
            println!("{:>2}  {}", channel.ordinal(), channel);
        }
    }
    Ok(())
}

fn check(path: &Path) -> Result<(), ConfigError> {
    let config = load_config(path)?;
    let enabled: Vec<_> = Channel::ALL
        .into_iter()
        .filter(|c| config.channels.wants(*c))
        .map(Channel::as_str)
        .collect();

    println!("{}: ok", path.display());
    println!("  enabled channels: {}", if enabled.is_empty() { "(none)".to_string() } else { enabled.join(", ") });
    println!("  console: {:?}", config.console.style);
    println!("  on assert failure: {:?}", config.assert.on_failure);
    println!("  logging: {} ({:?})", config.logging.filter, config.logging.format);
    Ok(())
}

fn demo(path: Option<PathBuf>, enable: Vec<Channel>, no_pause: bool) -> Result<(), ConfigError> {
    let mut config = match &path {
        Some(p) => load_config(p)?,
        None => DebugConfig::default(),
    };
    if no_pause {
        config.assert.on_failure = AssertAction::Continue;
    }

    init_logging(&config.logging);
    tracing::info!(config = ?path, active = chanlog::ACTIVE, "chanlog demo starting");

    let logger = ChannelLogger::from_config(&config);
    let overlay = OverlayBuffer::new(16);
    overlay.attach(&logger, &EventKind::ALL);

    for channel in enable {
        logger.set_channel(channel, true);
    }

    let mut player = Player { logger: &logger, health: 1 };

    logger.set_channel(Channel::Player, true);
    player.jump("jump");
    logger.set_channel(Channel::Player, false);
    player.jump("jump2");
    player.take_hit(2);

    tracing::info!(lines = overlay.len(), "Overlay contents:");
    for line in overlay.lines() {
        println!("  | {}", line.replace('\n', "\n  | "));
    }
    Ok(())
}

struct Player<'a> {
    logger: &'a ChannelLogger,
    health: i32,
}

impl Player<'_> {
    fn jump(&self, label: &str) {
        log_method_call!(logger: self.logger, Channel::Player);
        chan_log!(logger: self.logger, Channel::Player, "{}", label);
    }

    fn take_hit(&mut self, damage: i32) {
        self.health -= damage;
        chan_assert!(logger: self.logger, self.health >= 0, "health below zero: {}", self.health);
    }
}
