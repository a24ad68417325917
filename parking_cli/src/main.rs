use app::App;
use arguments::{Arguments, Command};
use clap::Parser;
use config::Config;
use std::process::ExitCode;
use tracing::Level;

mod app;
mod arguments;
mod config;
mod notice;
mod render;
mod repl;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Arguments::parse();
    init_tracing(args.verbose);

    let config = Config::load(args.config.as_deref(), args.remote, args.slots)?;
    tracing::debug!("{config:?}");
    let mut app = App::from_config(&config)?;

    match args.command {
        Command::Repl => {
            repl::run(&mut app).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Operation(operation) => {
            let rendered = app.run(operation).await;
            println!("{rendered}");
            if rendered.notice.is_error() {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
