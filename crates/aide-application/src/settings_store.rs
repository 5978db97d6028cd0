//! Volatile user preferences.

use aide_core::settings::{AnimationMode, PersonalityMode, Settings, ThemeMode};

/// Holds the settings for the duration of a run.
///
/// Every mutator replaces exactly one field. Values arriving as text are
/// parsed with the enum's `parse` first, which rejects non-members with
/// `InvalidArgument`.
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    settings: Settings,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current settings by value.
    pub fn get(&self) -> Settings {
        self.settings
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.settings.theme = theme;
    }

    pub fn set_personality(&mut self, personality: PersonalityMode) {
        self.settings.personality = personality;
    }

    pub fn set_animation_mode(&mut self, animation_mode: AnimationMode) {
        self.settings.animation_mode = animation_mode;
    }

    /// Flips voice output and returns the new value.
    pub fn toggle_voice(&mut self) -> bool {
        self.settings.voice_enabled = !self.settings.voice_enabled;
        self.settings.voice_enabled
    }

    /// Flips sound effects and returns the new value.
    pub fn toggle_sound(&mut self) -> bool {
        self.settings.sound_enabled = !self.settings.sound_enabled;
        self.settings.sound_enabled
    }
}
