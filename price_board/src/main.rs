//! Price Board — a terminal client that mirrors a server-pushed set of symbols,
//! their USD prices and the user's favourites, and prints the resulting board
//! after every update. User actions are read from stdin, one per line.
//!
//! Usage example (CLI):
//! ```bash
//! price_board --url ws://localhost:3000
//! ```
//!
//! Commands: `search <text>`, `sort <name|price> <asc|desc>`, `fav <SYMBOL>`,
//! `show`, `quit`. See `price_board::input` for details.
//!
//! The connection is opened once. If the server goes away the board stays on
//! screen with its last state and is never refreshed again: there is no
//! reconnect.
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::Parser;
use crossbeam_channel::{Receiver, bounded, never, select, unbounded};
use log::{debug, error, info, warn};
use price_board::connection::{ConnectionManager, FrameOutcome};
use price_board::input::UserCommand;
use price_board::link::{LinkEvent, LinkSender, WsLink};
use price_common::{BoardError, Result, Symbol};
use std::io::BufRead;
use std::thread;
use std::time::Duration;

/// How long teardown waits for the server to acknowledge the close.
const CLOSE_WAIT: Duration = Duration::from_secs(2);

fn main() -> Result<(), BoardError> {
    init_logger();
    let args = Args::parse();

    let (stop_tx, stop_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Shutting down board...");
        let _ = stop_tx.try_send(());
    })
    .map_err(|e| BoardError::Signal(e.to_string()))?;

    let WsLink {
        sender,
        events,
        handle,
    } = WsLink::connect(&args.url, Duration::from_millis(args.read_timeout_ms))?;
    let commands = spawn_stdin_reader();

    let mut board = ConnectionManager::new(sender);
    println!("{}", board.render());
    let events = run_event_loop(&mut board, events, commands, stop_rx);

    if board.is_open() {
        if let Err(e) = board.close() {
            warn!("Failed to close connection: {}", e);
        } else {
            wait_for_close(&events);
        }
    }
    if handle.is_finished() && handle.join().is_err() {
        error!("Link thread panicked");
    }
    info!("Board stopped");
    Ok(())
}

/// Apply link events and user commands in arrival order until the user quits.
///
/// Returns the link receiver so teardown can wait for the close handshake.
fn run_event_loop(
    board: &mut ConnectionManager<LinkSender>,
    mut events: Receiver<LinkEvent>,
    mut commands: Receiver<Result<UserCommand>>,
    stop_rx: Receiver<()>,
) -> Receiver<LinkEvent> {
    loop {
        let mut link_gone = false;
        let mut stdin_gone = false;
        select! {
            recv(events) -> event => match event {
                Ok(LinkEvent::Frame(frame)) => match board.handle_frame(&frame) {
                    Ok(FrameOutcome::Ignored(_)) => {}
                    Ok(_) => println!("{}", board.render()),
                    Err(e) => error!("Dropped inbound frame: {}", e),
                },
                Ok(LinkEvent::Closed(reason)) => {
                    warn!("Connection closed ({:?}); the board will not be updated anymore", reason);
                    board.connection_lost();
                    link_gone = true;
                }
                Ok(LinkEvent::Failed(e)) => {
                    warn!("Connection failed ({}); the board will not be updated anymore", e);
                    board.connection_lost();
                    link_gone = true;
                }
                Err(_) => {
                    board.connection_lost();
                    link_gone = true;
                }
            },
            recv(commands) -> command => match command {
                Ok(Ok(UserCommand::Quit)) => break,
                Ok(Ok(command)) => apply_command(board, command),
                Ok(Err(e)) => warn!("{}", e),
                Err(_) => {
                    debug!("stdin closed, waiting for Ctrl+C");
                    stdin_gone = true;
                }
            },
            recv(stop_rx) -> _ => break,
        }
        if link_gone {
            events = never();
        }
        if stdin_gone {
            commands = never();
        }
    }
    events
}

fn apply_command(board: &mut ConnectionManager<LinkSender>, command: UserCommand) {
    match command {
        UserCommand::Search(term) => board.search(&term),
        UserCommand::Sort(sort) => board.sort(sort),
        UserCommand::ToggleFavourite(typed) => {
            let symbol = resolve_symbol(board, &typed);
            if let Err(e) = board.toggle_favourite(&symbol) {
                warn!("Could not toggle {}: {}", symbol, e);
            }
        }
        UserCommand::Show | UserCommand::Quit => {}
    }
    println!("{}", board.render());
}

/// Match a typed symbol against the catalog ignoring ASCII case.
fn resolve_symbol(board: &ConnectionManager<LinkSender>, typed: &Symbol) -> Symbol {
    let catalog = board.catalog();
    catalog
        .favourites()
        .iter()
        .chain(catalog.all_symbols())
        .find(|s| s.as_str().eq_ignore_ascii_case(typed.as_str()))
        .cloned()
        .unwrap_or_else(|| typed.clone())
}

fn wait_for_close(events: &Receiver<LinkEvent>) {
    loop {
        match events.recv_timeout(CLOSE_WAIT) {
            Ok(LinkEvent::Frame(_)) => continue,
            Ok(LinkEvent::Closed(_)) | Err(_) => break,
            Ok(LinkEvent::Failed(e)) => {
                debug!("Link failed while closing: {}", e);
                break;
            }
        }
    }
}

/// Read stdin line by line on a background thread.
fn spawn_stdin_reader() -> Receiver<Result<UserCommand>> {
    let (tx, rx) = unbounded();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let parsed = match line {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => line.parse::<UserCommand>(),
                Err(e) => {
                    error!("Failed to read stdin: {}", e);
                    break;
                }
            };
            if tx.send(parsed).is_err() {
                break;
            }
        }
    });
    rx
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
