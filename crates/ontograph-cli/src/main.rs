//! Ontograph CLI - Build and query an in-memory ontology.

use clap::Parser;
use ontograph_cli::{repl, runner, Cli, Command, Config, Formatter, Session};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> ontograph_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    init_tracing(&config.settings.log_filter);

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        None | Some(Command::Repl) => {
            let mut session = Session::new(&cli.ontology, config.validation.clone())?;
            repl::run_repl(&mut session, &config, &formatter)?;
        }
        Some(Command::Run(args)) => {
            let mut session = Session::new(&cli.ontology, config.validation.clone())?;
            runner::run_script(&mut session, &formatter, &args.script, args.keep_going)?;
        }
        Some(Command::Config(args)) => {
            if args.init {
                let path = match cli.config {
                    Some(path) => path,
                    None => Config::path()?,
                };
                config.save_to(&path)?;
                println!("{}", formatter.success(&format!("Configuration written to {}", path.display())));
            } else {
                println!("{}", config.to_toml()?);
            }
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the configured filter
fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
