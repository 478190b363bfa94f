use chatpane::{ChatWidget, Message, MessageRole};

pub fn sidebar(widget: &ChatWidget) -> String {
    widget
        .sidebar()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let marker = if entry.active { '*' } else { ' ' };
            format!("{} {:>2}. {}  ({})", marker, i + 1, entry.title, entry.updated_label)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn message(msg: &Message) -> String {
    let speaker = match msg.role {
        MessageRole::User => "you",
        MessageRole::Assistant => "assistant",
    };
    format!("{}> {}", speaker, msg.content)
}

pub fn transcript(widget: &ChatWidget) -> String {
    let mut out = format!("── {} ──", widget.title());
    for msg in widget.messages() {
        out.push('\n');
        out.push_str(&message(msg));
    }
    out
}
