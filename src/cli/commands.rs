//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{catalog_tree, run_all, DemoKind, DemoReport};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        None => cmd_run(cli, &[]),
        Some(Commands::Run { only }) => cmd_run(cli, only),
        Some(Commands::List) => cmd_list(),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => cmd_config_show(cli),
            ConfigCommands::Template => cmd_config_template(),
        },
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
    }
}

#[instrument(skip(cli))]
fn cmd_run(cli: &Cli, only: &[DemoKind]) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("cmd_run: settings={:?}", settings.demo);

    let reports = run_all(&settings.demo, only)?;
    for report in &reports {
        print_report(report);
    }
    output::success(&format!("{} demonstrations completed", reports.len()));
    Ok(())
}

fn print_report(report: &DemoReport) {
    output::header(&format!("{} [{}]", report.demo, report.demo.severity()));
    output::rule(report.demo.rule());
    for line in &report.lines {
        output::detail(line);
    }
}

fn cmd_list() -> CliResult<()> {
    output::info(&catalog_tree());
    Ok(())
}

fn cmd_config_show(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    output::info(&settings.to_toml()?);
    Ok(())
}

fn cmd_config_template() -> CliResult<()> {
    output::info(&Settings::template());
    Ok(())
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
