use serde::{Deserialize, Serialize};

use crate::form::{Country, PersonalDetails, Pricing, SKILL_MAX};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub form: FormDefaults,
}

/// UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick interval for the event loop in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Optional prefill for the form fields.
///
/// Every field defaults to the documented initial value, so an absent
/// `[form]` section (or an absent file) yields an empty form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormDefaults {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// One of "germany", "austria", "switzerland".
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    pub mood: bool,
    /// One of "starter", "plus", "premium".
    #[serde(default)]
    pub pricing: Option<Pricing>,
    /// Skill level in [0, 10].
    #[serde(default)]
    pub skill: u8,
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Config {
    /// The starting form state described by this configuration.
    pub fn initial_details(&self) -> PersonalDetails {
        PersonalDetails {
            name: self.form.name.clone(),
            email: self.form.email.clone(),
            country: self.form.country,
            mood: self.form.mood,
            pricing: self.form.pricing,
            skill: self.form.skill.min(SKILL_MAX),
        }
    }
}
