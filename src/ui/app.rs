use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::form::{Country, FormStore, PersonalDetails, Pricing, SKILL_MAX};
use crate::mvi::Reducer;
use crate::ui::focus::{Field, FocusIntent, FocusReducer, FocusState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Focused form row (MVI pattern).
    focus: FocusState,
    /// Write surface for the form; values are read per-draw via snapshots.
    store: FormStore,
}

impl App {
    pub fn new(store: FormStore) -> Self {
        Self {
            should_quit: false,
            focus: FocusState::default(),
            store,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focused(&self) -> Field {
        self.focus.field
    }

    pub fn snapshot(&self) -> PersonalDetails {
        self.store.snapshot()
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if matches!(key.code, KeyCode::Esc) || is_ctrl_char(key, 'q') {
            self.request_quit();
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                dispatch_mvi!(self, focus, FocusReducer, FocusIntent::Next);
            }
            KeyCode::BackTab | KeyCode::Up => {
                dispatch_mvi!(self, focus, FocusReducer, FocusIntent::Prev);
            }
            _ => self.on_field_key(key),
        }
    }

    /// Route a key to the focused input control.
    fn on_field_key(&mut self, key: KeyEvent) {
        let details = self.store.snapshot();
        match self.focus.field {
            Field::Name => match key.code {
                KeyCode::Char(ch) => {
                    let mut name = details.name;
                    name.push(ch);
                    self.store.update_name(name);
                }
                KeyCode::Backspace => {
                    let mut name = details.name;
                    name.pop();
                    self.store.update_name(name);
                }
                _ => {}
            },
            Field::Email => match key.code {
                KeyCode::Char(ch) => {
                    let mut email = details.email;
                    email.push(ch);
                    self.store.update_email(email);
                }
                KeyCode::Backspace => {
                    let mut email = details.email;
                    email.pop();
                    self.store.update_email(email);
                }
                _ => {}
            },
            Field::Country => match key.code {
                KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => {
                    self.store.update_country(cycle_country(details.country, 1));
                }
                KeyCode::Left => {
                    self.store.update_country(cycle_country(details.country, -1));
                }
                _ => {}
            },
            Field::Mood => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    self.store.update_mood(!details.mood);
                }
            }
            Field::Pricing => match key.code {
                KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => {
                    self.store.update_pricing(cycle_pricing(details.pricing, 1));
                }
                KeyCode::Left => {
                    self.store.update_pricing(cycle_pricing(details.pricing, -1));
                }
                _ => {}
            },
            Field::Skill => match key.code {
                KeyCode::Right => {
                    if details.skill < SKILL_MAX {
                        self.store.update_skill(details.skill + 1);
                    }
                }
                KeyCode::Left => {
                    self.store.update_skill(details.skill.saturating_sub(1));
                }
                _ => {}
            },
        }
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Step through unset → Germany → Austria → Switzerland → unset.
fn cycle_country(current: Option<Country>, dir: i8) -> Option<Country> {
    let order = [
        None,
        Some(Country::Germany),
        Some(Country::Austria),
        Some(Country::Switzerland),
    ];
    cycle(&order, current, dir)
}

/// Step through unset → Starter → Plus → Premium → unset.
fn cycle_pricing(current: Option<Pricing>, dir: i8) -> Option<Pricing> {
    let order = [
        None,
        Some(Pricing::Starter),
        Some(Pricing::Plus),
        Some(Pricing::Premium),
    ];
    cycle(&order, current, dir)
}

fn cycle<T: Copy + PartialEq>(order: &[T], current: T, dir: i8) -> T {
    let len = order.len();
    let index = order.iter().position(|v| *v == current).unwrap_or(0);
    let next = if dir >= 0 {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    order[next]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_cycle_wraps_both_ways() {
        assert_eq!(cycle_country(None, 1), Some(Country::Germany));
        assert_eq!(cycle_country(Some(Country::Switzerland), 1), None);
        assert_eq!(cycle_country(None, -1), Some(Country::Switzerland));
    }

    #[test]
    fn pricing_cycle_wraps_both_ways() {
        assert_eq!(cycle_pricing(None, 1), Some(Pricing::Starter));
        assert_eq!(cycle_pricing(Some(Pricing::Premium), 1), None);
        assert_eq!(cycle_pricing(Some(Pricing::Starter), -1), None);
    }
}
