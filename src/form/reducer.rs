use crate::form::intent::FormIntent;
use crate::form::state::PersonalDetails;
use crate::mvi::Reducer;

/// Pure transition function over [`PersonalDetails`].
///
/// The intent set is a closed enum, so the match below is checked for
/// exhaustiveness at compile time; an unknown update kind cannot exist.
pub struct FormReducer;

impl Reducer for FormReducer {
    type State = PersonalDetails;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::UpdateName(name) => PersonalDetails { name, ..state },
            FormIntent::UpdateEmail(email) => PersonalDetails { email, ..state },
            FormIntent::UpdateCountry(country) => PersonalDetails { country, ..state },
            FormIntent::UpdateMood(mood) => PersonalDetails { mood, ..state },
            FormIntent::UpdatePricing(pricing) => PersonalDetails { pricing, ..state },
            FormIntent::UpdateSkill(skill) => PersonalDetails { skill, ..state },
        }
    }
}
