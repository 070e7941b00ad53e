pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod ui;

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

use crate::{
    app::{
        events::{AppEvent, spawn_input_task},
        state::{AppMode, AppState},
    },
    cli::Cli,
    ui::icons::IconAtlas,
};

type SignboardTerminal = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(cli: Cli) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let outcome = drive_signboard(&mut terminal, &cli).await;
    restore_terminal(&mut terminal)?;
    outcome
}

async fn drive_signboard(terminal: &mut SignboardTerminal, cli: &Cli) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(64);
    let inputs = spawn_input_task();
    tokio::pin!(inputs);

    let atlas = IconAtlas::standard();
    let mut board = AppState::new(cli);

    // Paint immediately so the panel never sits on a blank screen while the
    // first fetch is in flight.
    board.handle_event(AppEvent::Bootstrap, &tx, cli).await?;
    terminal.draw(|frame| ui::render(frame, &board, &atlas))?;

    loop {
        tokio::select! {
            Some(input) = inputs.next() => {
                board.handle_event(AppEvent::Input(input), &tx, cli).await?;
            }
            Some(event) = rx.recv() => {
                board.handle_event(event, &tx, cli).await?;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupt received, shutting down");
                break;
            }
        }

        if board.mode == AppMode::Quit {
            break;
        }

        terminal.draw(|frame| ui::render(frame, &board, &atlas))?;
    }

    Ok(())
}

fn setup_terminal() -> Result<SignboardTerminal> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut SignboardTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

// Raw mode must be dropped before the default hook prints, or the panic
// message lands on the alternate screen and vanishes with it.
fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        existing(panic);
    }));
}
