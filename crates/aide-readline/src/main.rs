use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use aide_application::{AppContext, SendOutcome};
use aide_core::AideError;
use aide_core::history::ChatHistoryEntry;
use aide_core::session::QUICK_START_PROMPTS;
use aide_core::settings::{AnimationMode, PersonalityMode, ThemeMode};
use aide_infrastructure::{AidePaths, ConfigService, JsonFileStore, LocalFile};

mod commands;
mod helper;
mod logging;
mod render;

use commands::{ChatRef, Command};
use helper::CliHelper;

#[derive(Parser)]
#[command(name = "aide")]
#[command(about = "AIDE - a simulated AI chat assistant", long_about = None)]
struct Cli {
    /// Path to aide.toml (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for persisted identities and chat history
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ConfigService::load(cli.config.as_deref());
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }
    logging::init_tracing(config.log_level.as_deref());

    let data_dir = ConfigService::data_dir(&config)?;
    let store = JsonFileStore::open(&data_dir)
        .with_context(|| format!("Failed to open data directory {}", data_dir.display()))?;
    tracing::debug!("[Config] Data directory: {}", data_dir.display());
    let mut app = AppContext::bootstrap(&config, Arc::new(store))?;

    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    render::banner();
    if let Some(identity) = app.restore().await {
        render::welcome(identity);
    }
    if app.identity().is_some() {
        render::quick_starts();
    }

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                let command = match Command::parse(trimmed) {
                    Ok(command) => command,
                    Err(e) => {
                        report(&e);
                        continue;
                    }
                };
                if command == Command::Quit {
                    render::success("Goodbye!");
                    break;
                }
                if let Err(e) = execute(&mut app, command).await {
                    report(&e);
                }
            }
            Err(ReadlineError::Interrupted) => {
                render::warning("CTRL-C detected. Type '/quit' to exit.");
            }
            Err(ReadlineError::Eof) => {
                render::success("CTRL-D detected. Exiting...");
                break;
            }
            Err(err) => {
                render::error(format!("Error: {:?}", err));
                break;
            }
        }
    }

    Ok(())
}

async fn execute(app: &mut AppContext, command: Command) -> aide_core::Result<()> {
    match command {
        Command::Message(text) => send(app, &text).await?,
        Command::Login { username, password } => {
            let result = app.login(&username, password.as_deref()).await;
            if let Some(identity) = app.identity() {
                render::welcome(identity);
                render::quick_starts();
            }
            result?;
        }
        Command::Guest => {
            let identity = app.login_as_guest().await;
            render::welcome(&identity);
            render::quick_starts();
        }
        Command::Logout => {
            app.logout().await?;
            render::info("Logged out");
        }
        Command::New => {
            let result = app.chat_mut().new_chat().await;
            render::info("Started a new conversation");
            result?;
        }
        Command::History(query) => {
            let history = app.chat().history();
            let rows: Vec<(usize, &ChatHistoryEntry)> = history
                .search(query.as_deref().unwrap_or(""))
                .into_iter()
                .filter_map(|entry| {
                    history
                        .entries()
                        .iter()
                        .position(|e| e.id == entry.id)
                        .map(|i| (i + 1, entry))
                })
                .collect();
            render::history(&rows, history.current_id());
        }
        Command::Open(chat) => {
            let id = resolve(app, &chat)?;
            let entry = app
                .chat_mut()
                .open_chat(&id)
                .ok_or_else(|| AideError::not_found("conversation", id.clone()))?;
            render::info(format!("Opened \"{}\"", entry.title));
            let settings = app.settings().get();
            for message in app.chat().session().messages() {
                if message.is_user() {
                    render::success(format!("> {}", message.content));
                } else {
                    render::reply(message, &settings);
                }
            }
        }
        Command::Delete(chat) => {
            let id = resolve(app, &chat)?;
            if app.chat_mut().history_mut().delete_session(&id).await? {
                render::info("Conversation deleted");
            } else {
                render::warning("No such conversation");
            }
        }
        Command::Theme(value) => {
            app.settings_mut().set_theme(ThemeMode::parse(&value)?);
            render::settings(&app.settings().get());
        }
        Command::Personality(value) => {
            app.settings_mut()
                .set_personality(PersonalityMode::parse(&value)?);
            render::settings(&app.settings().get());
        }
        Command::Animation(value) => {
            app.settings_mut()
                .set_animation_mode(AnimationMode::parse(&value)?);
            render::settings(&app.settings().get());
        }
        Command::Voice => {
            app.settings_mut().toggle_voice();
            render::settings(&app.settings().get());
        }
        Command::Sound => {
            app.settings_mut().toggle_sound();
            render::settings(&app.settings().get());
        }
        Command::Settings => render::settings(&app.settings().get()),
        Command::Upload(path) => {
            let file = LocalFile::open(&path)?;
            render::typing();
            let outcome = app.upload(&file).await?;
            show_outcome(app, outcome);
        }
        Command::Export(dir) => {
            let dir = match dir {
                Some(dir) => dir,
                None => AidePaths::export_dir()?,
            };
            let path = app.export(&dir).await?;
            render::success(format!("Conversation saved to {}", path.display()));
        }
        Command::Quota => {
            let remaining = app.identity_store().remaining_uploads()?;
            render::info(format!("{} uploads remaining in the current 24h window", remaining));
        }
        Command::Prompts(None) => render::quick_starts(),
        Command::Prompts(Some(n)) => {
            let prompt = n
                .checked_sub(1)
                .and_then(|i| QUICK_START_PROMPTS.get(i).copied())
                .ok_or_else(|| {
                    AideError::invalid_argument(format!("no quick-start prompt {}", n))
                })?;
            render::success(format!("> {}", prompt.message));
            send(app, prompt.message).await?;
        }
        Command::Help => render::help(),
        Command::Quit => {}
    }
    Ok(())
}

/// Runs a send cycle step by step so the typing indicator can be shown.
async fn send(app: &mut AppContext, text: &str) -> aide_core::Result<()> {
    if app.identity().is_none() {
        return Err(AideError::invalid_argument(
            "log in with /login or /guest first",
        ));
    }

    let personality = app.settings().get().personality;
    let pending = app.chat_mut().begin_send(text, personality).await?;
    if app.chat().session().is_typing() {
        render::typing();
    }
    let responder = app.chat().responder();
    let reply = pending.resolve(responder.as_ref()).await;
    let outcome = app.chat_mut().complete_send(pending, reply).await;
    show_outcome(app, outcome);
    Ok(())
}

fn show_outcome(app: &AppContext, outcome: SendOutcome) {
    render::reply(&outcome.reply, &app.settings().get());
    if let Some(e) = outcome.save_error {
        render::warning(format!("Conversation not saved: {}", e));
    }
}

fn resolve(app: &AppContext, chat: &ChatRef) -> aide_core::Result<String> {
    match chat {
        ChatRef::Id(id) => Ok(id.clone()),
        ChatRef::Index(n) => n
            .checked_sub(1)
            .and_then(|i| app.chat().history().entries().get(i))
            .map(|entry| entry.id.clone())
            .ok_or_else(|| AideError::not_found("conversation", n.to_string())),
    }
}

fn report(e: &AideError) {
    if e.is_user_facing() {
        render::warning(e.to_string());
    } else {
        render::error(e.to_string());
    }
}
