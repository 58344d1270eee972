use crate::form::state::{Country, Pricing};
use crate::mvi::Intent;

/// One field update. Each variant carries the full new value for its field;
/// the reducer copies the other five fields unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    UpdateName(String),
    UpdateEmail(String),
    UpdateCountry(Option<Country>),
    UpdateMood(bool),
    UpdatePricing(Option<Pricing>),
    UpdateSkill(u8),
}

impl Intent for FormIntent {}
