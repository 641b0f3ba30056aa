use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use tracing::{info, warn};

use viewdesc::cli::{parse_args, run_cli_command, CliCommand};
use viewdesc::config::OverlayConfig;
use viewdesc::events::EventOutcome;
use viewdesc::logging::init_logging;
use viewdesc::manager::DescriptionManager;
use viewdesc::measure::TerminalTextMeasure;
use viewdesc::models::DescriptionCatalog;
use viewdesc::terminal::{setup_panic_hook, TerminalManager};
use viewdesc::ui::DemoScreen;

/// Event poll timeout; also the long-press tick resolution.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(command.clone()) {
        return result;
    }
    let CliCommand::RunDemo { catalog } = command else {
        return Ok(());
    };

    color_eyre::install()?;
    init_logging()?;

    // Load everything that can fail before the terminal switches modes
    let config = OverlayConfig::from_env()?;
    let catalog = catalog.map(DescriptionCatalog::load).transpose()?;

    setup_panic_hook();
    let mut term = TerminalManager::new()?;
    let area = term.area()?;

    let mut manager = DescriptionManager::init(config, TerminalTextMeasure).with_area(area);
    let mut screen = DemoScreen::new(area, &mut manager, catalog.as_ref());

    let result = run_demo(&mut term, &mut manager, &mut screen);

    term.restore();
    manager.shutdown();
    result
}

fn run_demo(
    term: &mut TerminalManager,
    manager: &mut DescriptionManager,
    screen: &mut DemoScreen,
) -> Result<()> {
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            term.terminal().draw(|frame| {
                let area = frame.area();
                screen.render(area, frame.buffer_mut(), manager);
            })?;
            needs_redraw = false;
        }

        if event::poll(TICK)? {
            let event = event::read()?;

            if let Event::Key(key) = &event {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Esc => {
                        needs_redraw |= manager.dismiss();
                    }
                    _ => {}
                }
                continue;
            }

            if let Event::Resize(width, height) = event {
                screen.resize(ratatui::layout::Rect::new(0, 0, width, height));
            }

            match manager.handle_event(&event, &mut screen.tree) {
                EventOutcome::Ignored => {}
                EventOutcome::Dispatched(dispatched) => {
                    screen.apply(&dispatched);
                    needs_redraw = true;
                }
                EventOutcome::Overlay(_) | EventOutcome::Resized => needs_redraw = true,
            }
        }

        let dispatched = manager.tick(Instant::now(), &mut screen.tree);
        if !dispatched.is_empty() {
            screen.apply(&dispatched);
            needs_redraw = true;
        }
    }

    info!(target: "viewdesc::demo", presses = screen.presses(), "Demo finished");
    if manager.overlay().is_visible() {
        warn!(target: "viewdesc::demo", "Exiting with a popover still visible");
    }
    Ok(())
}
