use std::time::Duration;

use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain, infra,
    infra::logging::LogOutput,
    ui,
    usecases::{
        self, bootstrap,
        contracts::{Clock, GroupStore},
        list_groups::{list_groups, toggle_membership, ToggleOutcome},
        open_conversation::open_conversation,
        send_message::{send_text, SendOutcome},
        shell::DefaultShellOrchestrator,
    },
};

pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command_or_default();
    // The TUI owns the terminal, so only the print commands log to stderr.
    let log_output = match command {
        Command::Run => LogOutput::Discard,
        Command::Groups { .. } | Command::Chat { .. } => LogOutput::Stderr,
    };
    let context = bootstrap::bootstrap(cli.config.as_deref(), log_output)?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match command {
        Command::Run => {
            let tick_rate = Duration::from_millis(context.config.ui.tick_rate_ms);
            let mut event_source = ui::CrosstermEventSource::new(tick_rate);
            let mut orchestrator = DefaultShellOrchestrator::new(&context.store, &context.clock);
            ui::shell::start(&context, &mut event_source, &mut orchestrator)?;
        }
        Command::Groups { toggle } => {
            print_lines(&groups_report(&context.store, &toggle));
        }
        Command::Chat { group_id, send } => {
            print_lines(&chat_report(&context.store, &context.clock, &group_id, &send));
        }
    }

    Ok(())
}

/// Group list after applying `toggles` in order. Unknown ids become warnings
/// at the end of the report.
fn groups_report(store: &dyn GroupStore, toggles: &[String]) -> Vec<String> {
    let mut state = list_groups(store);
    let mut warnings = Vec::new();

    for group_id in toggles {
        if toggle_membership(&mut state, group_id) == ToggleOutcome::GroupNotFound {
            warnings.push(format!("warning: no group with id {group_id:?}"));
        }
    }

    let mut lines = ui::report::group_list_report(&state);
    if !warnings.is_empty() {
        lines.push(String::new());
        lines.extend(warnings);
    }
    lines
}

/// Conversation after sending `messages` in order. Blank messages are skipped
/// the same way the input field skips them.
fn chat_report(
    store: &dyn GroupStore,
    clock: &dyn Clock,
    group_id: &str,
    messages: &[String],
) -> Vec<String> {
    let mut conversation = open_conversation(store, group_id);

    for text in messages {
        match send_text(&mut conversation, clock, text) {
            SendOutcome::Sent { .. } | SendOutcome::IgnoredEmpty => {}
            SendOutcome::GroupNotFound => break,
        }
    }

    ui::report::conversation_report(&conversation, clock.now_unix_ms())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
