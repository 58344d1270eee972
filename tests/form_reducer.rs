use formflow::form::{Country, FormIntent, FormReducer, PersonalDetails, Pricing};
use formflow::mvi::Reducer;

/// A fully populated state, so tests can see which fields a reduction touched.
fn populated() -> PersonalDetails {
    PersonalDetails {
        name: "Grace".to_string(),
        email: "grace@example.com".to_string(),
        country: Some(Country::Austria),
        mood: true,
        pricing: Some(Pricing::Premium),
        skill: 3,
    }
}

#[test]
fn default_state_matches_documented_defaults() {
    let state = PersonalDetails::default();
    assert_eq!(
        state,
        PersonalDetails {
            name: String::new(),
            email: String::new(),
            country: None,
            mood: false,
            pricing: None,
            skill: 0,
        }
    );
}

#[test]
fn update_name_changes_only_name() {
    let before = populated();
    let after = FormReducer::reduce(before.clone(), FormIntent::UpdateName("Ada".to_string()));
    assert_eq!(after.name, "Ada");
    assert_eq!(
        PersonalDetails {
            name: before.name.clone(),
            ..after
        },
        before
    );
}

#[test]
fn update_email_changes_only_email() {
    let before = populated();
    let after = FormReducer::reduce(
        before.clone(),
        FormIntent::UpdateEmail("ada@example.com".to_string()),
    );
    assert_eq!(after.email, "ada@example.com");
    assert_eq!(
        PersonalDetails {
            email: before.email.clone(),
            ..after
        },
        before
    );
}

#[test]
fn update_country_changes_only_country() {
    let before = populated();
    let after = FormReducer::reduce(
        before.clone(),
        FormIntent::UpdateCountry(Some(Country::Germany)),
    );
    assert_eq!(after.country, Some(Country::Germany));
    assert_eq!(
        PersonalDetails {
            country: before.country,
            ..after
        },
        before
    );
}

#[test]
fn update_country_can_unset() {
    let after = FormReducer::reduce(populated(), FormIntent::UpdateCountry(None));
    assert_eq!(after.country, None);
}

#[test]
fn update_mood_changes_only_mood() {
    let before = populated();
    let after = FormReducer::reduce(before.clone(), FormIntent::UpdateMood(false));
    assert!(!after.mood);
    assert_eq!(
        PersonalDetails {
            mood: before.mood,
            ..after
        },
        before
    );
}

#[test]
fn update_pricing_changes_only_pricing() {
    let before = populated();
    let after = FormReducer::reduce(
        before.clone(),
        FormIntent::UpdatePricing(Some(Pricing::Starter)),
    );
    assert_eq!(after.pricing, Some(Pricing::Starter));
    assert_eq!(
        PersonalDetails {
            pricing: before.pricing,
            ..after
        },
        before
    );
}

#[test]
fn update_skill_changes_only_skill() {
    let before = populated();
    let after = FormReducer::reduce(before.clone(), FormIntent::UpdateSkill(9));
    assert_eq!(after.skill, 9);
    assert_eq!(
        PersonalDetails {
            skill: before.skill,
            ..after
        },
        before
    );
}

#[test]
fn repeating_an_intent_is_idempotent() {
    let intent = FormIntent::UpdateName("Ada".to_string());
    let once = FormReducer::reduce(populated(), intent.clone());
    let twice = FormReducer::reduce(once.clone(), intent);
    assert_eq!(once, twice);
}

#[test]
fn same_field_updates_keep_last_write() {
    let state = FormReducer::reduce(
        PersonalDetails::default(),
        FormIntent::UpdateName("A".to_string()),
    );
    let state = FormReducer::reduce(state, FormIntent::UpdateName("B".to_string()));
    assert_eq!(state.name, "B");
}

#[test]
fn different_field_updates_commute() {
    let name = FormIntent::UpdateName("A".to_string());
    let mood = FormIntent::UpdateMood(true);

    let name_first = FormReducer::reduce(
        FormReducer::reduce(PersonalDetails::default(), name.clone()),
        mood.clone(),
    );
    let mood_first = FormReducer::reduce(FormReducer::reduce(PersonalDetails::default(), mood), name);

    assert_eq!(name_first, mood_first);
}

#[test]
fn reducer_is_deterministic() {
    let intent = FormIntent::UpdatePricing(Some(Pricing::Plus));
    assert_eq!(
        FormReducer::reduce(populated(), intent.clone()),
        FormReducer::reduce(populated(), intent)
    );
}

/// The reducer itself does not clamp; range enforcement lives at the
/// store's write surface.
#[test]
fn reducer_accepts_skill_boundaries_as_is() {
    let zero = FormReducer::reduce(populated(), FormIntent::UpdateSkill(0));
    assert_eq!(zero.skill, 0);
    let ten = FormReducer::reduce(populated(), FormIntent::UpdateSkill(10));
    assert_eq!(ten.skill, 10);
    let over = FormReducer::reduce(populated(), FormIntent::UpdateSkill(11));
    assert_eq!(over.skill, 11);
}

#[test]
fn full_scenario_from_defaults() {
    let intents = [
        FormIntent::UpdateName("Ada".to_string()),
        FormIntent::UpdateEmail("ada@example.com".to_string()),
        FormIntent::UpdateCountry(Some(Country::Germany)),
        FormIntent::UpdateMood(true),
        FormIntent::UpdatePricing(Some(Pricing::Plus)),
        FormIntent::UpdateSkill(7),
    ];

    let mut state = PersonalDetails::default();
    for intent in intents {
        state = FormReducer::reduce(state, intent);
    }

    assert_eq!(
        state,
        PersonalDetails {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            country: Some(Country::Germany),
            mood: true,
            pricing: Some(Pricing::Plus),
            skill: 7,
        }
    );
}
