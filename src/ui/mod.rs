pub mod app;
pub mod card;
pub mod events;
pub mod focus;
pub mod footer;
pub mod form;
pub mod hint;
pub mod layout;
pub mod theme;

mod terminal_guard;

use std::io;
use std::io::Stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::widgets::Clear;
use ratatui::{Frame, Terminal};

use crate::form::FormStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::footer::Footer;
use crate::ui::hint::Hint;
use crate::ui::layout::{body_columns, layout_regions};
use crate::ui::terminal_guard::TerminalGuard;

/// Run the TUI until the user quits.
pub fn run(store: FormStore, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(store);
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => app.on_key(key),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(_, _)) => {
                terminal.autoresize()?;
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (hint, body, footer) = layout_regions(area);
    let (form_area, card_area) = body_columns(body);
    let details = app.snapshot();

    frame.render_widget(Hint::widget(), hint);
    frame.render_widget(Clear, body);
    frame.render_widget(form::form_widget(&details, app.focused()), form_area);
    frame.render_widget(card::card_widget(&details), card_area);
    frame.render_widget(Footer::new().widget(footer), footer);
}

fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    let guard = TerminalGuard::new();
    guard.set_cleanup(|| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    });
    guard.install_panic_hook();

    Ok((terminal, guard))
}
