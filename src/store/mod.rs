//! Storefront state container.
//!
//! Holds products, cart, current user, orders and theme. State only changes
//! through [`StoreIntent`]s run by [`StoreReducer`]; the [`Store`] service
//! wraps that with locking, id generation and persistence.

mod clock;
mod intent;
mod outcome;
mod reducer;
mod service;
mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use intent::StoreIntent;
pub use outcome::{Outcome, Rejection};
pub use reducer::StoreReducer;
pub use service::{Store, StoreError};
pub use state::StoreState;
