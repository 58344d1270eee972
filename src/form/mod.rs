mod intent;
mod reducer;
mod state;
mod store;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{Country, PersonalDetails, Pricing, UnknownVariant, SKILL_MAX};
pub use store::FormStore;
