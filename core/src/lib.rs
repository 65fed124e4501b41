// src/lib.rs

//! MyKart client: a headless SDK for the MyKart storefront backend.
//!
//! The crate covers the client side of the store without any rendering:
//!  - A cart gateway over `/api/cart` with a typed failure taxonomy.
//!  - Per-view cart controllers that re-fetch after every mutation, so
//!    displayed state always converges to server state.
//!  - A typed invalidation bus keeping independent views (cart page,
//!    checkout, navbar badge) eventually consistent with no shared store.
//!  - Session handling: a persisted auth record feeding a bearer header,
//!    with guest fallback when nothing is persisted.
//!  - Catalog and auth gateways, currency display helpers, and persisted
//!    wishlist/comparison lists.

// Declare modules according to the planned structure
pub mod config;
pub mod currency;
pub mod error;
pub mod gateway;
pub mod lists;
pub mod models;
pub mod session;
pub mod storage;
pub mod sync;

// --- Re-exports for the Public API ---

// Core types that users will interact with frequently
pub use crate::config::ClientConfig;
pub use crate::error::{StoreError, StoreResult};
pub use crate::models::{Cart, CartItem, Message, Product};
pub use crate::session::AuthSession;
pub use crate::storage::{keys, LocalStore};

// The gateways and the seam the controllers are generic over
pub use crate::gateway::{
  ApiClient, AuthGateway, CartApi, CartGateway, CatalogGateway, SortDirection, SortSpec,
};

// Cart synchronization: the invalidation bus and the per-view controller
pub use crate::sync::{CartBus, CartController, CartSignal, CartSubscription, ViewState};

pub use crate::lists::SavedList;

/*
    Core workflow:
    1. Load a `ClientConfig` (env or defaults) and open the `LocalStore`.
    2. Build one `ApiClient` and wrap it in a `CartGateway`.
    3. Create one `CartBus` for the process.
    4. Give every view its own `CartController::new(Arc::clone(&gateway), bus.clone())`.
    5. Mount: `controller.refresh().await`, then drive
       `controller.run_listener(bus.subscribe())` for as long as the view
       lives. Dropping the listener future is the unmount.
    6. Mutations (`add_item`, `set_quantity`, `remove_item`, `clear`)
       re-fetch on success and pulse every other view over the bus.
*/
