use anyhow::Result;

use crate::{
    domain::shell_state::ShellState,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, Clock, ShellOrchestrator},
    },
};

use super::{terminal::TerminalSession, view};

pub fn start<C: Clock>(
    context: &AppContext<C>,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        groups = context.store.len(),
        tick_rate_ms = context.config.ui.tick_rate_ms,
        "starting TUI shell"
    );

    let mut terminal = TerminalSession::new()?;
    run_loop(event_source, orchestrator, |state| {
        terminal.draw(|frame| view::render(frame, state))
    })?;

    tracing::info!("TUI shell stopped");
    Ok(())
}

/// Draw, wait for one event, dispatch it; until the orchestrator stops.
fn run_loop<D>(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
    mut draw: D,
) -> Result<()>
where
    D: FnMut(&ShellState) -> Result<()>,
{
    while orchestrator.state().is_running() {
        draw(orchestrator.state())?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{
        domain::{
            events::{AppEvent, KeyInput},
            shell_state::Screen,
        },
        test_support::{fixture_store, FixedClock},
        ui::event_source::MockEventSource,
        usecases::shell::DefaultShellOrchestrator,
    };

    fn key(label: &str) -> AppEvent {
        AppEvent::InputKey(KeyInput::new(label, false))
    }

    #[test]
    fn loop_exits_on_quit_from_source() {
        let mut source = MockEventSource::from(vec![AppEvent::Tick, AppEvent::QuitRequested]);
        let mut orchestrator = DefaultShellOrchestrator::new(fixture_store(), FixedClock(0));
        let mut frames = 0;

        run_loop(&mut source, &mut orchestrator, |_| {
            frames += 1;
            Ok(())
        })
        .expect("loop must finish");

        assert!(!orchestrator.state().is_running());
        assert_eq!(frames, 2);
    }

    #[test]
    fn scripted_session_renders_every_screen() {
        let mut events = vec![key("j"), key("enter")];
        events.extend("hello".chars().map(|ch| key(&ch.to_string())));
        events.extend([key("enter"), key("esc"), key("q")]);
        let mut source = MockEventSource::from(events);
        let mut orchestrator = DefaultShellOrchestrator::new(fixture_store(), FixedClock(0));
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("terminal");
        let mut screens = Vec::new();

        run_loop(&mut source, &mut orchestrator, |state| {
            screens.push(state.screen());
            terminal.draw(|frame| view::render(frame, state))?;
            Ok(())
        })
        .expect("loop must finish");

        assert!(!orchestrator.state().is_running());
        assert_eq!(orchestrator.state().screen(), Screen::GroupList);
        assert!(screens.contains(&Screen::Conversation));
    }
}
