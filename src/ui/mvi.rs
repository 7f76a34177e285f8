//! Model-View-Intent primitives for the UI stores.
//!
//! Unidirectional data flow: an intent goes through a reducer, which
//! produces the next state, which the view renders. The reducer is the only
//! place a state transition happens.

/// Marker for view state.
///
/// States are cloneable snapshots, comparable so change detection stays
/// cheap, and carry everything the view needs to render.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker for user actions and system events fed to a reducer.
pub trait Intent: Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`, no side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
