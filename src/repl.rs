//! Interactive session on stdin.

use std::io::IsTerminal;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::session::{Session, Target};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate a proverb from this raw input.
    Word(String),
    /// `:share [N]`
    Share(Target),
    /// `:image [N]`
    Image(Target),
    /// `:download [PATH]`
    Download(Option<String>),
    /// `:open URL`
    Open(String),
    /// `:history`
    History,
    /// `:help`
    Help,
    /// `:quit`
    Quit,
    /// Anything else starting with `:`.
    Unknown(String),
}

const HELP: &str = "\
Введите слово, чтобы получить пословицу. Команды:
  :share [N]        скопировать ссылку (N — номер в истории)
  :image [N]        создать изображение
  :download [PATH]  сохранить изображение (по умолчанию proverb.png)
  :open URL         открыть пословицу из ссылки
  :history          показать историю
  :quit             выйти";

impl Command {
    /// Parse one input line.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix(':') else {
            return Self::Word(line.to_string());
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (rest, None),
        };

        match (name, arg) {
            ("share" | "s", arg) => {
                parse_target(arg).map_or_else(|| Self::unknown(trimmed), Self::Share)
            }
            ("image" | "i", arg) => {
                parse_target(arg).map_or_else(|| Self::unknown(trimmed), Self::Image)
            }
            ("download" | "d", arg) => Self::Download(arg.map(str::to_string)),
            ("open" | "o", Some(url)) => Self::Open(url.to_string()),
            ("history" | "h", None) => Self::History,
            ("help" | "?", None) => Self::Help,
            ("quit" | "q" | "exit", None) => Self::Quit,
            _ => Self::unknown(trimmed),
        }
    }

    fn unknown(line: &str) -> Self {
        Self::Unknown(line.to_string())
    }
}

fn parse_target(arg: Option<&str>) -> Option<Target> {
    match arg {
        None => Some(Target::Current),
        Some(n) => n.parse().ok().map(Target::History),
    }
}

/// Print queued notices to stderr.
pub fn flush_notices(session: &mut Session) {
    for notice in session.take_notices() {
        eprintln!("{notice}");
    }
}

/// Print the history, newest first, numbered from 1.
pub fn print_history(session: &Session) {
    if session.history().is_empty() {
        println!("История пуста");
        return;
    }
    println!("История генераций ({}):", session.history().len());
    for (i, record) in session.history().current().enumerate() {
        println!("{:>2}. {}", i + 1, record.text());
    }
}

/// Read commands from stdin until EOF or `:quit`.
///
/// # Errors
///
/// Returns an error only if stdin cannot be read.
pub async fn run(session: &mut Session) -> std::io::Result<()> {
    let interactive = std::io::stdin().is_terminal();
    if interactive {
        eprintln!("{HELP}");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if !dispatch(session, Command::parse(&line)).await {
            break;
        }
        flush_notices(session);
    }
    flush_notices(session);
    Ok(())
}

/// Execute one command. Returns `false` when the session should end.
async fn dispatch(session: &mut Session, command: Command) -> bool {
    match command {
        Command::Word(raw) => {
            if let Ok(record) = session.submit_word(&raw) {
                println!("«{}»", record.text());
            }
        }
        Command::Share(target) => {
            if let Ok(url) = session.share(target) {
                println!("{url}");
            }
        }
        Command::Image(target) => {
            if let Ok(url) = session.request_image(target).await {
                println!("{url}");
            }
            debug_assert!(!session.is_generating());
            tracing::debug!(state = ?session.image_state(), "image request settled");
        }
        Command::Download(path) => {
            let _ = session.download(path.as_deref()).await;
        }
        Command::Open(url) => {
            if let Ok(text) = session.open_shared(&url) {
                println!("«{text}»");
            }
        }
        Command::History => print_history(session),
        Command::Help => eprintln!("{HELP}"),
        Command::Quit => return false,
        Command::Unknown(line) => eprintln!("Неизвестная команда: {line} (:help)"),
    }
    true
}
