/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// A coordinate move such as `e2e4`, with or without a leading `move`.
    Move(String),
    Undo,
    Moves,
    Board,
    Fen,
    NewGame,
    Position(String),
    Perft(usize),
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_console_command(line: &str) -> Option<ConsoleCommand> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.is_empty() {
        return None;
    }

    let cmd = match parts[0] {
        "move" => match parts.get(1) {
            Some(mv) => ConsoleCommand::Move((*mv).to_string()),
            None => ConsoleCommand::Unknown(trimmed.to_string()),
        },
        "undo" => ConsoleCommand::Undo,
        "moves" => ConsoleCommand::Moves,
        "board" | "d" => ConsoleCommand::Board,
        "fen" => ConsoleCommand::Fen,
        "new" => ConsoleCommand::NewGame,
        "position" => ConsoleCommand::Position(parts[1..].join(" ")),
        "perft" => {
            let depth = parts.get(1).and_then(|v| v.parse::<usize>().ok()).unwrap_or(1);
            ConsoleCommand::Perft(depth)
        }
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        word if word.len() == 4 && parts.len() == 1 => ConsoleCommand::Move(word.to_string()),
        _ => ConsoleCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
