// mykart_client/src/sync/bus.rs

//! Typed publish/subscribe channel for cart invalidation.
//!
//! Replaces a process-wide untyped event with an explicit channel: typed
//! payloads, scoped subscription lifetimes, teardown on drop. The signal
//! carries no data; its only meaning is "your cached view may be stale,
//! reload". Because a pulse is pure invalidation, a subscriber that lags
//! behind can collapse any number of missed pulses into a single one.

use tokio::sync::broadcast;
use tracing::trace;

const DEFAULT_CAPACITY: usize = 16;

/// The signals a cart view can observe. Payload-free by design: listeners
/// re-fetch from the server, which is the single source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartSignal {
  /// The cart was mutated somewhere in the process.
  Changed,
}

/// Cheap-to-clone handle on the invalidation channel. Every view holds a
/// clone of the same bus.
#[derive(Clone)]
pub struct CartBus {
  tx: broadcast::Sender<CartSignal>,
}

impl CartBus {
  pub fn new(capacity: usize) -> Self {
    let (tx, _) = broadcast::channel(capacity);
    Self { tx }
  }

  /// Fire-and-forget broadcast. Having no live subscriber is not an error.
  pub fn publish(&self, signal: CartSignal) {
    let delivered = self.tx.send(signal).unwrap_or(0);
    trace!(?signal, delivered, "Cart signal published.");
  }

  /// Registers a new listener. The subscription deregisters itself when
  /// dropped; there is no manual unsubscribe to forget.
  pub fn subscribe(&self) -> CartSubscription {
    CartSubscription {
      rx: self.tx.subscribe(),
    }
  }

  pub fn subscriber_count(&self) -> usize {
    self.tx.receiver_count()
  }
}

impl Default for CartBus {
  fn default() -> Self {
    Self::new(DEFAULT_CAPACITY)
  }
}

/// A live listener registration. Dropping it releases the slot.
pub struct CartSubscription {
  rx: broadcast::Receiver<CartSignal>,
}

impl CartSubscription {
  /// Waits for the next pulse. Returns `None` once every bus handle is
  /// gone. A lagged receiver does not error out: missed pulses collapse
  /// into the next delivered `Changed`.
  pub async fn recv(&mut self) -> Option<CartSignal> {
    match self.rx.recv().await {
      Ok(signal) => Some(signal),
      Err(broadcast::error::RecvError::Lagged(missed)) => {
        trace!(missed, "Subscriber lagged; collapsing missed pulses.");
        Some(CartSignal::Changed)
      }
      Err(broadcast::error::RecvError::Closed) => None,
    }
  }
}
