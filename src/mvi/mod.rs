//! Model-Intent-Reducer primitives.
//!
//! Storefront state changes flow in one direction:
//!
//! ```text
//! Intent ──→ Reducer ──→ (Model, Outcome) ──→ Persistence ──→ Views
//! ```
//!
//! - **Model**: plain data describing the whole store
//! - **Intent**: a requested mutation
//! - **Reducer**: pure function from (model, intent) to the next model plus
//!   an outcome telling the caller what happened

mod intent;
mod model;
mod reducer;

pub use intent::Intent;
pub use model::Model;
pub use reducer::Reducer;
