use clap::Parser;

use standshift_core::{
    parse_duration, ComboNotifier, Config, ConfigError, CycleMachine, DesktopNotifier, Notifier,
    SoundNotifier,
};

mod app;
mod ui;

#[derive(Parser)]
#[command(name = "standshift", version, about = "Posture-change reminder for the terminal")]
struct Cli {
    /// Standing interval, e.g. "30m", "1h30m", "90s" (bare numbers are minutes)
    #[arg(long, value_parser = duration_arg)]
    stand: Option<u64>,

    /// Sitting interval
    #[arg(long, value_parser = duration_arg)]
    sit: Option<u64>,

    /// Disable the terminal bell on interval expiry
    #[arg(long)]
    no_sound: bool,

    /// Disable desktop notifications on interval expiry
    #[arg(long)]
    no_desktop: bool,
}

fn duration_arg(value: &str) -> Result<u64, String> {
    parse_duration(value).map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Flags win over the config file.
fn resolve_intervals(cli: &Cli, config: &Config) -> Result<(u64, u64), ConfigError> {
    let stand = match cli.stand {
        Some(secs) => secs,
        None => config.stand_secs()?,
    };
    let sit = match cli.sit {
        Some(secs) => secs,
        None => config.sit_secs()?,
    };
    Ok((stand, sit))
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let (stand_secs, sit_secs) = resolve_intervals(&cli, &config)?;

    let mut notifiers: Vec<Box<dyn Notifier>> = Vec::new();
    if config.notifications.sound && !cli.no_sound {
        notifiers.push(Box::new(SoundNotifier));
    }
    if config.notifications.desktop && !cli.no_desktop {
        notifiers.push(Box::new(DesktopNotifier::new(None)));
    }

    let machine = CycleMachine::new(stand_secs, sit_secs);
    app::run(machine, ComboNotifier::new(notifiers))
}
