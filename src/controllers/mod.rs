//! Page behaviors, one controller per interactive feature.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each controller binds to its elements once through `discover` and then
//! reacts to events routed by [`crate::page::Page`]. Controllers share no
//! state with each other except [`crate::state::ViewState`], and a missing
//! element disables only the controller that needed it.

pub mod alerts;
pub mod effects;
pub mod form;
pub mod menu;
pub mod scroll;
pub mod theme;
