//! Binary-side orchestration: the run command, its progress line and
//! summary, and the template/registry subcommands.
mod commands;
mod progress;
mod runner;
mod summary;

#[cfg(test)]
mod tests;

use crate::args::{Command, LureArgs};
use crate::config::Settings;
use crate::error::AppResult;

pub(crate) use runner::run_attack;

/// Dispatches the parsed command line.
///
/// # Errors
///
/// Returns configuration errors and I/O failures of the selected command.
pub(crate) async fn execute(args: LureArgs, settings: Settings) -> AppResult<()> {
    match args.command.as_ref() {
        Some(Command::Placeholders(placeholders)) => {
            for line in commands::placeholder_lines(placeholders)? {
                println!("{}", line);
            }
            Ok(())
        }
        Some(Command::Regions) => {
            for line in commands::region_lines() {
                println!("{}", line);
            }
            Ok(())
        }
        Some(Command::Templates { action }) => commands::run_templates_command(action, &settings),
        Some(Command::Render(render)) => {
            let rendered = commands::render_template(render, &args, &settings)?;
            println!("{}", serde_json::to_string_pretty(&rendered)?);
            Ok(())
        }
        None => {
            run_attack(&args, &settings).await?;
            Ok(())
        }
    }
}
