//! Settings domain model.

use crate::error::{AideError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Colour scheme of the rendering collaborator.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Tone preset used by the response generator.
///
/// Only flavours the text (greeting, lead-in, thanks acknowledgment); it never
/// changes which response branch is taken.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PersonalityMode {
    Professional,
    Casual,
    Motivational,
    Funny,
}

/// Background animation shown behind the conversation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AnimationMode {
    Particles,
    Waves,
    Geometric,
    Minimal,
    Cosmic,
}

/// Parses a lowercase enum name, failing with `InvalidArgument` on anything
/// that is not a member.
fn parse_member<T>(kind: &str, value: &str) -> Result<T>
where
    T: FromStr + IntoEnumIterator + AsRef<str>,
{
    T::from_str(value).map_err(|_| {
        let allowed: Vec<String> = T::iter().map(|v| v.as_ref().to_string()).collect();
        AideError::invalid_argument(format!(
            "unknown {kind} '{value}' (expected one of: {})",
            allowed.join(", ")
        ))
    })
}

impl ThemeMode {
    pub fn parse(value: &str) -> Result<Self> {
        parse_member("theme", value)
    }
}

impl PersonalityMode {
    pub fn parse(value: &str) -> Result<Self> {
        parse_member("personality", value)
    }
}

impl AnimationMode {
    pub fn parse(value: &str) -> Result<Self> {
        parse_member("animation mode", value)
    }
}

/// User preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub theme: ThemeMode,
    pub personality: PersonalityMode,
    pub voice_enabled: bool,
    pub sound_enabled: bool,
    pub animation_mode: AnimationMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            personality: PersonalityMode::Professional,
            voice_enabled: false,
            sound_enabled: true,
            animation_mode: AnimationMode::Particles,
        }
    }
}
