//! Terminal session: applies commands to a mounted widget while at most one
//! reply is in flight.

use anyhow::Result;
use chatpane::{ChatWidget, ReplyOutcome};
use tokio::sync::mpsc;

use crate::commands::{Command, HELP};
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Channel the background dispatch reports back on.
pub fn reply_channel() -> (mpsc::Sender<ReplyOutcome>, mpsc::Receiver<ReplyOutcome>) {
    mpsc::channel(1)
}

/// Apply one command. A send records the user message and dispatches the
/// backend call on its own task; the outcome arrives on `replies`.
pub fn handle_command(
    widget: &mut ChatWidget,
    command: Command,
    replies: &mpsc::Sender<ReplyOutcome>,
) -> Result<Flow> {
    match command {
        Command::Empty => {}
        Command::Send(text) => {
            if widget.is_awaiting_reply() {
                println!("Still waiting for the previous reply");
                return Ok(Flow::Continue);
            }
            widget.set_input(text);
            if let Some(pending) = widget.begin_send() {
                if let Some(user) = widget.store().get(pending.thread_id()).and_then(|t| t.last_message()) {
                    println!("{}", render::message(user));
                }

                let backend = widget.backend();
                let replies = replies.clone();
                tokio::spawn(async move {
                    let outcome = pending.dispatch(backend.as_ref()).await;
                    if replies.send(outcome).await.is_err() {
                        tracing::debug!("Session closed before the reply arrived");
                    }
                });
            }
        }
        Command::New => {
            widget.new_chat();
            println!("{}", render::transcript(widget));
        }
        Command::List => println!("{}", render::sidebar(widget)),
        Command::Switch(n) => match widget.threads().get(n - 1).map(|t| t.id.clone()) {
            Some(id) => {
                widget.select(&id)?;
                println!("{}", render::transcript(widget));
            }
            None => println!("No chat number {}", n),
        },
        Command::Delete(n) => match widget.threads().get(n - 1).map(|t| t.id.clone()) {
            Some(id) => {
                widget.delete_chat(&id);
                println!("{}", render::sidebar(widget));
            }
            None => println!("No chat number {}", n),
        },
        Command::Help => println!("{}", HELP),
        Command::Quit => return Ok(Flow::Quit),
        Command::Invalid(raw) => println!("Unknown command: {} (try /help)", raw),
    }

    Ok(Flow::Continue)
}

/// Land a finished reply on the thread it was sent from.
pub fn handle_reply(widget: &mut ChatWidget, outcome: ReplyOutcome) {
    let thread_id = outcome.thread_id.clone();
    let Some(reply) = widget.finish_send(outcome) else {
        return;
    };

    if widget.active_thread().id == thread_id {
        println!("{}", render::message(&reply));
    } else {
        let title = widget.store().get(&thread_id).map_or("", |t| t.title.as_str());
        println!("(reply in \"{}\")", title);
    }
}
