// mykart_client/src/sync/mod.rs

//! Cart-state synchronization: the typed invalidation channel and the
//! per-view controller that keeps independent views eventually consistent
//! with the server-owned cart.

pub mod bus;
pub mod controller;

pub use bus::{CartBus, CartSignal, CartSubscription};
pub use controller::{CartController, ViewState};
