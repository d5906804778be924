// SPDX-License-Identifier: MPL-2.0
use lead_dialogs::app::{self, Flags};
use lead_dialogs::config::{self, paths};
use lead_dialogs::logging::{self, LogFormat};
use std::process::ExitCode;

const HELP: &str = "\
lead_dialogs - lead form with alerts and confirmations

USAGE:
  lead_dialogs [OPTIONS]

OPTIONS:
  -h, --help               Print this help
  --config-dir <PATH>      Directory holding settings.toml
  --log-level <FILTER>     Log filter (overrides [logging] level)
  --log-format <FORMAT>    text | json
";

struct Args {
    help: bool,
    config_dir: Option<String>,
    log_level: Option<String>,
    log_format: Option<LogFormat>,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let parsed = Args {
        help: args.contains(["-h", "--help"]),
        config_dir: args.opt_value_from_str("--config-dir")?,
        log_level: args.opt_value_from_str("--log-level")?,
        log_format: args.opt_value_from_str("--log-format")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Ignoring unexpected arguments: {rest:?}");
    }
    Ok(parsed)
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };
    if args.help {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    paths::init_cli_override(args.config_dir);
    let (mut config, config_warning) = config::load();
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    if let Some(format) = args.log_format {
        config.logging.format = format;
    }
    if let Err(err) = logging::init(&config.logging) {
        eprintln!("Logging disabled: {err}");
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("lead-dialogs-timers")
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!(error = %err, "failed to start timer runtime");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");
    let flags = Flags {
        defaults: config.dialog_defaults(),
        runtime: runtime.handle().clone(),
        config_warning,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
