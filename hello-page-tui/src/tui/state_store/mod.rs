mod action;
mod error;
mod state;
#[allow(clippy::module_inception)]
mod state_store;

pub use self::{
    action::Action,
    error::Error,
    state::State,
    state_store::{Exit, StateStore},
};
