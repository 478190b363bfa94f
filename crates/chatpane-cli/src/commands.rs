/// One line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(String),
    New,
    List,
    /// 1-based position in the sidebar
    Switch(usize),
    /// 1-based position in the sidebar
    Delete(usize),
    Help,
    Quit,
    Empty,
    Invalid(String),
}

pub const HELP: &str = "\
Type a message and press Enter to send it.
  /new          start a new chat
  /list         show all chats
  /switch <n>   open chat number n
  /delete <n>   delete chat number n
  /help         show this help
  /quit         exit";

pub fn parse(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Command::Send(line.to_string());
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    match (name, arg) {
        ("new", None) => Command::New,
        ("list", None) => Command::List,
        ("help", None) => Command::Help,
        ("quit" | "exit", None) => Command::Quit,
        ("switch", Some(n)) => index(n).map_or_else(|| invalid(line), Command::Switch),
        ("delete", Some(n)) => index(n).map_or_else(|| invalid(line), Command::Delete),
        _ => invalid(line),
    }
}

fn index(raw: &str) -> Option<usize> {
    raw.parse::<usize>().ok().filter(|n| *n >= 1)
}

fn invalid(line: &str) -> Command {
    Command::Invalid(line.to_string())
}
