//! The personal-details state model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::mvi::State;

/// Upper bound of the skill slider. Writes above this are clamped.
pub const SKILL_MAX: u8 = 10;

/// Country selection offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Germany,
    Austria,
    Switzerland,
}

impl Country {
    pub const ALL: [Country; 3] = [Country::Germany, Country::Austria, Country::Switzerland];

    /// Boundary string form of the value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Germany => "germany",
            Country::Austria => "austria",
            Country::Switzerland => "switzerland",
        }
    }

    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Country::Germany => "Germany",
            Country::Austria => "Austria",
            Country::Switzerland => "Switzerland",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "germany" => Ok(Country::Germany),
            "austria" => Ok(Country::Austria),
            "switzerland" => Ok(Country::Switzerland),
            _ => Err(UnknownVariant {
                field: "country",
                value: s.to_string(),
            }),
        }
    }
}

/// Pricing tier offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pricing {
    Starter,
    Plus,
    Premium,
}

impl Pricing {
    pub const ALL: [Pricing; 3] = [Pricing::Starter, Pricing::Plus, Pricing::Premium];

    /// Boundary string form of the value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pricing::Starter => "starter",
            Pricing::Plus => "plus",
            Pricing::Premium => "premium",
        }
    }

    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Pricing::Starter => "Starter Package",
            Pricing::Plus => "Plus Package",
            Pricing::Premium => "Premium Package",
        }
    }
}

impl fmt::Display for Pricing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pricing {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "starter" => Ok(Pricing::Starter),
            "plus" => Ok(Pricing::Plus),
            "premium" => Ok(Pricing::Premium),
            _ => Err(UnknownVariant {
                field: "pricing",
                value: s.to_string(),
            }),
        }
    }
}

/// Error for a boundary string outside a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {field}")]
pub struct UnknownVariant {
    pub field: &'static str,
    pub value: String,
}

/// The one live form state for a session.
///
/// Pure data: all transitions go through the reducer. `None` for
/// `country`/`pricing` means the user has not picked a value yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalDetails {
    pub name: String,
    pub email: String,
    pub country: Option<Country>,
    pub mood: bool,
    pub pricing: Option<Pricing>,
    pub skill: u8,
}

impl State for PersonalDetails {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_strings_round_trip() {
        for country in Country::ALL {
            assert_eq!(country.as_str().parse::<Country>(), Ok(country));
        }
        for pricing in Pricing::ALL {
            assert_eq!(pricing.as_str().parse::<Pricing>(), Ok(pricing));
        }
    }

    #[test]
    fn unknown_country_is_rejected() {
        let err = "france".parse::<Country>().unwrap_err();
        assert_eq!(err.field, "country");
        assert_eq!(err.value, "france");
    }

    #[test]
    fn unknown_pricing_is_rejected() {
        assert!("enterprise".parse::<Pricing>().is_err());
    }

    #[test]
    fn defaults_are_empty() {
        let details = PersonalDetails::default();
        assert_eq!(details.name, "");
        assert_eq!(details.email, "");
        assert_eq!(details.country, None);
        assert!(!details.mood);
        assert_eq!(details.pricing, None);
        assert_eq!(details.skill, 0);
    }
}
