use crate::mvi::Reducer;
use crate::ui::focus::intent::FocusIntent;
use crate::ui::focus::state::FocusState;

pub struct FocusReducer;

impl Reducer for FocusReducer {
    type State = FocusState;
    type Intent = FocusIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FocusIntent::Next => FocusState {
                field: state.field.next(),
            },
            FocusIntent::Prev => FocusState {
                field: state.field.prev(),
            },
            FocusIntent::Jump(field) => FocusState { field },
        }
    }
}
