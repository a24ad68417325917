use crate::{app::App, arguments::Operation};
use clap::{error::ErrorKind, Parser, Subcommand};
use rustyline::{error::ReadlineError, history::DefaultHistory};

#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    command: ReplCommand,
}

#[derive(Clone, Debug, PartialEq, Eq, Subcommand)]
pub enum ReplCommand {
    #[command(flatten)]
    Operation(Operation),

    /// Show the status messages that have not expired yet
    Status,

    /// Leave the REPL
    Quit,
}

/// Words are split the way a shell would, so quoting keeps a plate or update
/// data in one argument with its spacing intact.
pub fn parse_line(line: &str) -> Result<ReplCommand, clap::Error> {
    let words = shlex::split(line)
        .ok_or_else(|| clap::Error::raw(ErrorKind::InvalidValue, "unbalanced quotes\n"))?;
    Line::try_parse_from(words).map(|line| line.command)
}

pub async fn run(app: &mut App) -> anyhow::Result<()> {
    println!("Type `help` for the list of commands.");
    println!("CTRL+C to clear and CTRL+D to quit.");
    let mut rl = rustyline::Editor::<(), DefaultHistory>::new()?;
    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;
                match parse_line(line) {
                    Ok(ReplCommand::Operation(operation)) => println!("{}", app.run(operation).await),
                    Ok(ReplCommand::Status) => {
                        let notices = app.visible_notices();
                        if notices.is_empty() {
                            println!("No recent messages.");
                        }
                        for notice in notices {
                            println!("{:<14} {notice}", notice.section);
                        }
                    }
                    Ok(ReplCommand::Quit) => break,
                    Err(e) => println!("{e}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL+D");
                break;
            }
            Err(e) => {
                anyhow::bail!("{e:?}");
            }
        }
    }
    Ok(())
}
