//! A small TUI demonstrating unidirectional data flow for form state.
//!
//! The core is [`form::FormStore`]: one live [`form::PersonalDetails`]
//! instance, a closed [`form::FormIntent`] set, and a pure
//! [`form::FormReducer`]. The `ui` module is a presentation collaborator
//! wired on top of the store.

pub mod config;
pub mod form;
pub mod logging;
pub mod mvi;
pub mod ui;
