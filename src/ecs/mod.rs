//! Entity Component System module
//!
//! Defines the components shared by the vision core and the game host.

pub mod components;

pub use components::*;
