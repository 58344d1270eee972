use crate::mvi::Intent;
use crate::ui::focus::state::Field;

#[derive(Debug, Clone, Copy)]
pub enum FocusIntent {
    /// Move to the next form row, wrapping at the bottom.
    Next,
    /// Move to the previous form row, wrapping at the top.
    Prev,
    /// Jump directly to a row.
    Jump(Field),
}

impl Intent for FocusIntent {}
