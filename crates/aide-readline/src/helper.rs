use std::borrow::Cow;

use aide_core::settings::{AnimationMode, PersonalityMode, ThemeMode};
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use strum::IntoEnumIterator;

use crate::commands::COMMANDS;

/// Completes slash commands and the values of enum-valued settings, and hints
/// a command's usage once its name is typed.
#[derive(Clone)]
pub struct CliHelper {
    themes: Vec<String>,
    personalities: Vec<String>,
    animations: Vec<String>,
}

impl CliHelper {
    pub fn new() -> Self {
        Self {
            themes: names::<ThemeMode>(),
            personalities: names::<PersonalityMode>(),
            animations: names::<AnimationMode>(),
        }
    }

    /// Allowed values for the argument of `command`, if it takes a setting.
    fn values(&self, command: &str) -> Option<&[String]> {
        match command {
            "/theme" => Some(&self.themes),
            "/personality" => Some(&self.personalities),
            "/animation" => Some(&self.animations),
            _ => None,
        }
    }
}

fn names<T: IntoEnumIterator + AsRef<str>>() -> Vec<String> {
    T::iter().map(|v| v.as_ref().to_string()).collect()
}

fn usage(command: &str) -> Option<&'static str> {
    COMMANDS
        .iter()
        .find(|(name, _)| *name == command)
        .map(|(_, usage)| *usage)
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if !line.starts_with('/') {
            return Ok((0, Vec::new()));
        }

        let Some((command, arg)) = line.split_once(' ') else {
            let candidates = COMMANDS
                .iter()
                .filter(|(name, _)| name.starts_with(line))
                .map(|(name, usage)| Pair {
                    display: format!("{name}  {usage}"),
                    replacement: format!("{name} "),
                })
                .collect();
            return Ok((0, candidates));
        };

        let candidates = self
            .values(command)
            .unwrap_or_default()
            .iter()
            .filter(|value| value.starts_with(arg))
            .map(|value| Pair {
                display: value.clone(),
                replacement: value.clone(),
            })
            .collect();
        Ok((command.len() + 1, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !line.starts_with('/') {
            return Cow::Borrowed(line);
        }
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, format!(" {rest}")),
            None => (line, String::new()),
        };
        let command = if usage(command).is_some() {
            command.bright_cyan()
        } else {
            command.red()
        };
        Cow::Owned(format!("{command}{rest}"))
    }

    fn highlight_char(&self, line: &str, _pos: usize, _forced: bool) -> bool {
        line.starts_with('/')
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    /// Shows the usage of a command whose full name has been typed.
    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        usage(line.trim_end()).map(|usage| {
            let gap = if line.ends_with(' ') { "" } else { " " };
            format!("{gap}{usage}").bright_black().to_string()
        })
    }
}

impl Validator for CliHelper {}

#[cfg(test)]
mod tests {
    use super::*;
    use rustyline::history::DefaultHistory;

    fn complete(line: &str) -> (usize, Vec<String>) {
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);
        let (start, pairs) = CliHelper::new().complete(line, line.len(), &ctx).unwrap();
        (start, pairs.into_iter().map(|p| p.replacement).collect())
    }

    #[test]
    fn test_completes_command_names() {
        let (start, candidates) = complete("/th");
        assert_eq!(start, 0);
        assert_eq!(candidates, vec!["/theme ".to_string()]);
    }

    #[test]
    fn test_completes_setting_values() {
        let (start, candidates) = complete("/personality m");
        assert_eq!(start, "/personality ".len());
        assert_eq!(candidates, vec!["motivational".to_string()]);

        let (_, all) = complete("/animation ");
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn test_hints_usage_after_full_command() {
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);
        let helper = CliHelper::new();
        let hint = helper.hint("/open ", 6, &ctx).unwrap();
        assert!(hint.contains("<n|id>"));
        assert!(helper.hint("/op", 3, &ctx).is_none());
        assert!(helper.hint("/open 2", 7, &ctx).is_none());
    }

    #[test]
    fn test_plain_text_and_free_arguments_get_nothing() {
        assert!(complete("hello").1.is_empty());
        assert!(complete("/upload rep").1.is_empty());
    }
}
