//! Colored terminal output.

use aide_core::history::ChatHistoryEntry;
use aide_core::identity::Identity;
use aide_core::session::{Message, QUICK_START_PROMPTS};
use aide_core::settings::{Settings, ThemeMode};
use colored::{ColoredString, Colorize};

use crate::commands::COMMANDS;

pub fn banner() {
    println!("{}", "=== AIDE: your AI assistant ===".bright_magenta().bold());
    println!(
        "{}",
        "Log in with '/login <name> <password>' or '/guest', then just type. '/help' lists commands."
            .bright_black()
    );
    println!();
}

pub fn help() {
    for (name, hint) in COMMANDS {
        println!("  {} {}", name.bright_cyan(), hint.bright_black());
    }
}

pub fn welcome(identity: &Identity) {
    let kind = if identity.is_guest { " (guest)" } else { "" };
    println!(
        "{}",
        format!("Welcome, {}{}!", identity.display_name, kind).bright_green()
    );
}

pub fn quick_starts() {
    println!("{}", "Quick start:".bright_yellow());
    for (i, prompt) in QUICK_START_PROMPTS.iter().enumerate() {
        println!(
            "  {} {} {}",
            format!("{}.", i + 1).bright_black(),
            prompt.title.bold(),
            format!("- {}", prompt.description).bright_black()
        );
    }
}

/// Prints an assistant reply. Code fences are shown in a different color.
pub fn reply(message: &Message, settings: &Settings) {
    let mut in_code = false;
    for line in message.content.lines() {
        if line.starts_with("```") {
            in_code = !in_code;
            println!("{}", line.bright_black());
        } else if in_code {
            println!("{}", line.yellow());
        } else {
            println!("{}", prose(line, settings.theme));
        }
    }
    println!();
}

fn prose(line: &str, theme: ThemeMode) -> ColoredString {
    match theme {
        ThemeMode::Dark => line.bright_blue(),
        ThemeMode::Light => line.blue(),
    }
}

pub fn typing() {
    println!("{}", "AI is thinking...".bright_black().italic());
}

/// Lists conversations, each numbered by its position in the full history.
pub fn history(rows: &[(usize, &ChatHistoryEntry)], current_id: Option<&str>) {
    if rows.is_empty() {
        println!("{}", "No conversations found".bright_black());
        return;
    }
    for (number, entry) in rows {
        let marker = if Some(entry.id.as_str()) == current_id { "*" } else { " " };
        println!(
            "{}{} {} {}",
            marker.bright_green(),
            format!("{:>3}.", number).bright_black(),
            entry.title,
            entry
                .updated_at
                .format("(%Y-%m-%d %H:%M)")
                .to_string()
                .bright_black()
        );
    }
}

pub fn settings(settings: &Settings) {
    println!("  theme:       {}", settings.theme);
    println!("  personality: {}", settings.personality);
    println!("  animation:   {}", settings.animation_mode);
    println!("  voice:       {}", on_off(settings.voice_enabled));
    println!("  sound:       {}", on_off(settings.sound_enabled));
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

pub fn info(text: impl AsRef<str>) {
    println!("{}", text.as_ref().bright_black());
}

pub fn success(text: impl AsRef<str>) {
    println!("{}", text.as_ref().bright_green());
}

pub fn warning(text: impl AsRef<str>) {
    println!("{}", text.as_ref().yellow());
}

pub fn error(text: impl AsRef<str>) {
    eprintln!("{}", text.as_ref().red());
}
