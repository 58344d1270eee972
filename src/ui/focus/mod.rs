mod intent;
mod reducer;
mod state;

pub use intent::FocusIntent;
pub use reducer::FocusReducer;
pub use state::{Field, FocusState};
