//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the layout math and navigation state.
//! This crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A controller that plays deferred scroll commands as tweens, one sample per frame
//! - Tween/easing primitives (optional; adapter-driven)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use tween::{Easing, Tween};
