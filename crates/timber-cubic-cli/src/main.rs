//! Timber Cubic: Doyle log volume calculator
//!
//! ## Usage
//!
//! ```bash
//! timber-cubic                    # Open the interactive keypad
//! timber-cubic volume 12 36       # Print 6′ 9″
//! timber-cubic keys "12→36"       # Replay keypad presses
//! timber-cubic config --defaults  # Show the default configuration
//! ```

use clap::Parser;
use std::process::ExitCode;
use timber_cubic::core::{parse_key_sequence, InputController};
use timber_cubic_cli::{
    init_logging, render_snapshot, render_volume, Cli, CliConfig, CliResult, Commands,
    ConfigArgs, KeysArgs, Printer, RunArgs, TuiRunner, Verbosity, VolumeArgs, VolumeReport,
};
use tracing::{debug, info};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    let interactive = matches!(cli.command, None | Some(Commands::Run(_)));
    init_logging(&config, interactive)?;
    debug!(?config, "configuration resolved");

    match cli.command {
        None | Some(Commands::Run(_)) => run_tui(&config),
        Some(Commands::Volume(args)) => run_volume(&config, &args),
        Some(Commands::Keys(args)) => run_keys(&config, &args),
        Some(Commands::Config(args)) => run_config(&config, &args),
    }
}

/// Defaults, then the config file, then flags
fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let mut config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::new(),
    };

    if cli.quiet {
        config = config.with_verbosity(Verbosity::Quiet);
    } else if cli.verbose > 0 {
        config = config.with_verbosity(if cli.verbose == 1 {
            Verbosity::Verbose
        } else {
            Verbosity::Debug
        });
    }

    if let Some(color) = cli.color {
        config = config.with_color(color.into());
    }
    if let Some(path) = &cli.log_file {
        config = config.with_log_file(path);
    }
    if let Some(Commands::Run(RunArgs { no_mouse: true })) = cli.command {
        config = config.with_mouse(false);
    }

    Ok(config)
}

fn printer(config: &CliConfig) -> Printer {
    Printer::new(config.color.should_color(), config.verbosity.is_quiet())
}

fn run_tui(config: &CliConfig) -> CliResult<()> {
    let app = TuiRunner::new(config.mouse).run()?;
    let snapshot = app.snapshot();
    info!(
        length = %snapshot.length,
        circumference = %snapshot.circumference,
        volume = %snapshot.display,
        "session result"
    );
    Ok(())
}

fn run_volume(config: &CliConfig, args: &VolumeArgs) -> CliResult<()> {
    let report = VolumeReport::compute(&args.length, &args.circumference);
    debug!(
        length = %args.length,
        circumference = %args.circumference,
        volume = %report.display,
        "volume computed"
    );
    let out = printer(config);
    out.output(&render_volume(&report, args.format, out.use_color)?)
}

fn run_keys(config: &CliConfig, args: &KeysArgs) -> CliResult<()> {
    let commands = parse_key_sequence(&args.sequence)?;
    debug!(count = commands.len(), "replaying key sequence");

    let count = commands.len();
    let mut input = InputController::new();
    input.apply_all(commands);

    let out = printer(config);
    if config.verbosity.is_verbose() {
        out.info(&format!("Replayed {count} keys"))?;
    }
    out.output(&render_snapshot(&input.snapshot(), args.format, out.use_color)?)
}

fn run_config(config: &CliConfig, args: &ConfigArgs) -> CliResult<()> {
    let out = printer(config);
    let shown = if args.defaults {
        CliConfig::new()
    } else {
        config.clone()
    };
    if args.defaults {
        out.info("Built-in defaults")?;
    }
    out.output(shown.to_yaml()?.trim_end())
}
