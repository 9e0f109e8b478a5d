//! Line commands accepted on stdin in headless mode

use faraway_app::Message;
use faraway_core::prelude::*;
use faraway_core::ItemId;

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Feed a message straight into `update()`
    Message(Message),
    /// Answer a pending confirmation
    Answer(bool),
    /// Toggle the accordion child at this position
    Accordion(usize),
    /// Emit a state snapshot without changing anything
    Stats,
}

/// Parse one input line
///
/// Blank lines and lines starting with `#` yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "add" => {
            let (quantity, description) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| Error::invalid_command("usage: add <quantity> <description>"))?;
            Command::Message(Message::AddItem {
                description: description.trim().to_string(),
                quantity: parse_number(quantity, "quantity")?,
            })
        }
        "remove" | "rm" => Command::Message(Message::RemoveItem {
            id: ItemId::new(parse_number(rest, "item id")?),
        }),
        "toggle" | "pack" => Command::Message(Message::ToggleItem {
            id: ItemId::new(parse_number(rest, "item id")?),
        }),
        "clear" => Command::Message(Message::RequestClear),
        "yes" | "y" => Command::Answer(true),
        "no" | "n" => Command::Answer(false),
        "faq" => match rest {
            "all" => Command::Message(Message::ExpandAllFaq),
            "none" => Command::Message(Message::CollapseAllFaq),
            _ => Command::Message(Message::ToggleFaqPanel {
                id: parse_number(rest, "panel id")?,
            }),
        },
        "accordion" => Command::Accordion(parse_number(rest, "accordion position")?),
        "next" => Command::Message(Message::NextStep),
        "prev" | "previous" => Command::Message(Message::PreviousStep),
        "steps" => Command::Message(Message::ToggleSteps),
        "stats" => Command::Stats,
        "dismiss" => Command::Message(Message::DismissNotice),
        "quit" | "exit" => Command::Message(Message::Quit),
        other => return Err(Error::invalid_command(format!("unknown command '{}'", other))),
    };

    Ok(Some(command))
}

fn parse_number<T: std::str::FromStr>(raw: &str, what: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| Error::invalid_command(format!("expected {} but got '{}'", what, raw)))
}
