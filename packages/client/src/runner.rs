//! Interactive terminal session: read commands, dispatch them to the client.

use std::sync::Arc;

use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;

use crate::{
    api::HttpGameApi,
    client::GameClient,
    config::ClientConfig,
    error::ApiError,
    surface::TerminalSurface,
    ui::PROMPT,
};

const HELP: &str = "\
Commands:
  new              create a new game
  add <name>       add a player to the game
  start            start the game
  throw <pins>     record a throw for the current player
  refresh          reload the scoreboard
  status           show the game and the players
  help             show this help
  quit             leave
";

/// One line of user input, parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewGame,
    /// Raw name as typed; validated by the client
    AddPlayer(String),
    Start,
    /// Raw pin count as typed; validated by the client
    Throw(String),
    Refresh,
    Status,
    Help,
    Quit,
}

impl Command {
    /// Parse a command line. Unknown commands are `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "new" => Command::NewGame,
            "add" => Command::AddPlayer(rest.to_string()),
            "start" => Command::Start,
            "throw" => Command::Throw(rest.to_string()),
            "refresh" => Command::Refresh,
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

/// Run one command against the client.
///
/// Returns `false` when the session should end. Errors are already reported
/// to the user by the client, so they are not propagated.
pub async fn dispatch(client: &GameClient, command: Command) -> bool {
    match command {
        Command::NewGame => {
            client.start_new_game().await.ok();
        }
        Command::AddPlayer(name) => {
            client.register_player(&name).await.ok();
        }
        Command::Start => {
            client.begin_play().await.ok();
        }
        Command::Throw(pins) => {
            client.record_throw(&pins).await.ok();
        }
        Command::Refresh => {
            let outcome = client.refresh().await;
            tracing::debug!("Refresh outcome: {:?}", outcome);
        }
        Command::Status => client.show_status().await,
        Command::Help => print!("{}", HELP),
        Command::Quit => return false,
    }
    true
}

/// Run the interactive scoreboard client until the user quits
pub async fn run_client(config: ClientConfig) -> Result<(), ApiError> {
    let api = Arc::new(HttpGameApi::new(&config)?);
    let client = GameClient::new(api, Arc::new(TerminalSurface));

    tracing::info!("Using game service at {}", config.base_url);
    println!("\nAncient Bowling scoreboard. Type 'help' for commands, Ctrl+C to exit.\n");
    client.show_status().await;

    // Create channel for rustyline input
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();

    // Spawn a blocking thread for rustyline (synchronous readline)
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                        if input_tx.send(line.to_string()).is_err() {
                            // Channel closed, exit thread
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    while let Some(line) = input_rx.recv().await {
        let Some(command) = Command::parse(&line) else {
            println!("Unknown command: {}", line);
            print!("{}", HELP);
            continue;
        };
        if !dispatch(&client, command).await {
            break;
        }
    }

    tracing::info!("Client session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        // テスト項目: 引数の無いコマンドが解析される
        // given (前提条件) / when (操作) / then (期待する結果):
        assert_eq!(Command::parse("new"), Some(Command::NewGame));
        assert_eq!(Command::parse("START"), Some(Command::Start));
        assert_eq!(Command::parse(" refresh "), Some(Command::Refresh));
        assert_eq!(Command::parse("status"), Some(Command::Status));
        assert_eq!(Command::parse("?"), Some(Command::Help));
        assert_eq!(Command::parse("exit"), Some(Command::Quit));
    }

    #[test]
    fn test_parse_add_keeps_full_name() {
        // テスト項目: 空白を含むプレイヤー名がそのまま渡される
        // given (前提条件):
        let line = "add   Ann Lee ";

        // when (操作):
        let command = Command::parse(line);

        // then (期待する結果):
        assert_eq!(command, Some(Command::AddPlayer("Ann Lee".to_string())));
    }

    #[test]
    fn test_parse_add_without_name() {
        // テスト項目: 名前の無い add は空の名前として渡される（クライアントが警告する）
        // given (前提条件):
        let line = "add";

        // when (操作):
        let command = Command::parse(line);

        // then (期待する結果):
        assert_eq!(command, Some(Command::AddPlayer(String::new())));
    }

    #[test]
    fn test_parse_throw() {
        // テスト項目: 投球コマンドのピン数が文字列のまま渡される
        // given (前提条件):
        let line = "throw 7";

        // when (操作):
        let command = Command::parse(line);

        // then (期待する結果):
        assert_eq!(command, Some(Command::Throw("7".to_string())));
    }

    #[test]
    fn test_parse_unknown_command() {
        // テスト項目: 未知のコマンドは None になる
        // given (前提条件):
        let line = "bowl 3";

        // when (操作):
        let command = Command::parse(line);

        // then (期待する結果):
        assert_eq!(command, None);
    }
}
