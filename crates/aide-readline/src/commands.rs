//! Parsing of REPL input lines.

use aide_core::{AideError, Result};
use std::path::PathBuf;

/// Slash commands, used for completion and `/help`.
pub const COMMANDS: [(&str, &str); 19] = [
    ("/login", "<name> [password]  log in (no password = guest account)"),
    ("/guest", "continue as a guest"),
    ("/logout", "log out"),
    ("/new", "start a new conversation"),
    ("/history", "[query]  list saved conversations"),
    ("/open", "<n|id>  open a saved conversation"),
    ("/delete", "<n|id>  delete a saved conversation"),
    ("/theme", "<light|dark>"),
    ("/personality", "<professional|casual|motivational|funny>"),
    ("/animation", "<particles|waves|geometric|minimal|cosmic>"),
    ("/voice", "toggle voice output"),
    ("/sound", "toggle sound effects"),
    ("/settings", "show current settings"),
    ("/upload", "<path>  upload a PDF for analysis"),
    ("/export", "[dir]  save the conversation as JSON"),
    ("/quota", "show remaining uploads"),
    ("/prompts", "[n]  list quick-start prompts, or send one"),
    ("/help", "show this list"),
    ("/quit", "exit"),
];

/// Where a conversation is referenced: by its position in the last listing
/// (1-based) or by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatRef {
    Index(usize),
    Id(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login {
        username: String,
        password: Option<String>,
    },
    Guest,
    Logout,
    New,
    History(Option<String>),
    Open(ChatRef),
    Delete(ChatRef),
    Theme(String),
    Personality(String),
    Animation(String),
    Voice,
    Sound,
    Settings,
    Upload(PathBuf),
    Export(Option<PathBuf>),
    Quota,
    Prompts(Option<usize>),
    Help,
    Quit,
    /// Plain text to send to the assistant.
    Message(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        if !line.starts_with('/') {
            return Ok(Command::Message(line.to_string()));
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let arg = (!rest.is_empty()).then(|| rest.to_string());

        let command = match name {
            "/login" => {
                let mut parts = rest.split_whitespace();
                let username = parts.next().ok_or_else(|| usage("/login"))?.to_string();
                let password = parts.next().map(str::to_string);
                Command::Login { username, password }
            }
            "/guest" => Command::Guest,
            "/logout" => Command::Logout,
            "/new" => Command::New,
            "/history" => Command::History(arg),
            "/open" => Command::Open(chat_ref(rest).ok_or_else(|| usage("/open"))?),
            "/delete" => Command::Delete(chat_ref(rest).ok_or_else(|| usage("/delete"))?),
            "/theme" => Command::Theme(arg.ok_or_else(|| usage("/theme"))?),
            "/personality" => Command::Personality(arg.ok_or_else(|| usage("/personality"))?),
            "/animation" => Command::Animation(arg.ok_or_else(|| usage("/animation"))?),
            "/voice" => Command::Voice,
            "/sound" => Command::Sound,
            "/settings" => Command::Settings,
            "/upload" => Command::Upload(arg.map(PathBuf::from).ok_or_else(|| usage("/upload"))?),
            "/export" => Command::Export(arg.map(PathBuf::from)),
            "/quota" => Command::Quota,
            "/prompts" => match arg {
                Some(n) => Command::Prompts(Some(
                    n.parse()
                        .map_err(|_| AideError::invalid_argument("prompt number expected"))?,
                )),
                None => Command::Prompts(None),
            },
            "/help" => Command::Help,
            "/quit" | "/exit" => Command::Quit,
            other => {
                return Err(AideError::invalid_argument(format!(
                    "unknown command '{}', try /help",
                    other
                )));
            }
        };
        Ok(command)
    }
}

fn chat_ref(arg: &str) -> Option<ChatRef> {
    if arg.is_empty() {
        return None;
    }
    Some(match arg.parse::<usize>() {
        Ok(n) => ChatRef::Index(n),
        Err(_) => ChatRef::Id(arg.to_string()),
    })
}

fn usage(name: &str) -> AideError {
    let hint = COMMANDS
        .iter()
        .find(|(cmd, _)| *cmd == name)
        .map(|(_, hint)| *hint)
        .unwrap_or_default();
    AideError::invalid_argument(format!("usage: {} {}", name, hint))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_a_message() {
        assert_eq!(
            Command::parse("  tell me about travel ").unwrap(),
            Command::Message("tell me about travel".to_string())
        );
    }

    #[test]
    fn test_login() {
        assert_eq!(
            Command::parse("/login ada secret").unwrap(),
            Command::Login {
                username: "ada".to_string(),
                password: Some("secret".to_string()),
            }
        );
        assert_eq!(
            Command::parse("/login ada").unwrap(),
            Command::Login {
                username: "ada".to_string(),
                password: None,
            }
        );
        assert!(Command::parse("/login").unwrap_err().to_string().contains("usage: /login"));
    }

    #[test]
    fn test_chat_refs() {
        assert_eq!(Command::parse("/open 2").unwrap(), Command::Open(ChatRef::Index(2)));
        assert_eq!(
            Command::parse("/delete abc-123").unwrap(),
            Command::Delete(ChatRef::Id("abc-123".to_string()))
        );
        assert!(Command::parse("/open").is_err());
    }

    #[test]
    fn test_optional_arguments() {
        assert_eq!(Command::parse("/history").unwrap(), Command::History(None));
        assert_eq!(
            Command::parse("/history python tips").unwrap(),
            Command::History(Some("python tips".to_string()))
        );
        assert_eq!(Command::parse("/export").unwrap(), Command::Export(None));
        assert_eq!(Command::parse("/prompts 3").unwrap(), Command::Prompts(Some(3)));
        assert!(Command::parse("/prompts x").is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert!(Command::parse("/dance").unwrap_err().is_invalid_argument());
    }
}
