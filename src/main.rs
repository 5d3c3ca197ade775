// SPDX-License-Identifier: MPL-2.0
use flaglang::app::{self, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const HELP: &str = "\
Flaglang - localized greeting with a flag per language

USAGE:
    flaglang [OPTIONS]

OPTIONS:
    -h, --help              Print this help and exit
    --lang <CODE>           Start in the given language (en, el, es, it)
    --route <PATH>          Start at the given route (e.g. /it/welcome)
    --config-dir <DIR>      Read settings.toml from DIR
    --no-route-sync         Do not mirror the language into the route

ENVIRONMENT:
    FLAGLANG_CONFIG_DIR     Config directory, used when --config-dir is absent
    RUST_LOG                Log filter (default: flaglang=info)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        route: args.opt_value_from_str("--route")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        no_route_sync: args.contains("--no-route-sync"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flaglang=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> iced::Result {
    init_logging();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
