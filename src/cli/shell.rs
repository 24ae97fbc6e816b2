use std::io;

use crate::config::ShellConfig;
use crate::errors::CliError;

use super::{
    input::{EditorSource, LineSource, ScriptSource},
    io as cli_io, menus,
    output::{self, info as output_info},
    shell_context::{CliMode, CommandError, LoopControl, ShellContext},
};

pub fn run_cli() -> Result<(), CliError> {
    let mode = CliMode::from_env();
    let input: Box<dyn LineSource> = match mode {
        CliMode::Interactive => Box::new(EditorSource::new()?),
        CliMode::Script => Box::new(ScriptSource::new(io::stdin().lock())),
    };
    output::set_plain(mode == CliMode::Script);

    let mut context = ShellContext::new(mode, ShellConfig::default(), input);
    run_loop(&mut context)
}

/// Shows the main menu and dispatches choices until the user exits or input ends.
pub fn run_loop(context: &mut ShellContext) -> Result<(), CliError> {
    tracing::info!(mode = ?context.mode, "finance tracker shell started");
    while context.running {
        menus::print_main_menu();
        let choice = match cli_io::read_choice(context.input.as_mut(), "Choice: ") {
            Ok(choice) => choice,
            Err(CommandError::EndOfInput) => {
                output_info("Exiting.");
                break;
            }
            Err(CommandError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
                continue;
            }
            Err(err) => {
                context.report_error(err)?;
                continue;
            }
        };

        match context.dispatch(&choice) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    context.running = false;
    Ok(())
}
