// tests/controller_tests.rs
mod common;

use common::*;
use mykart_client::{CartBus, CartController, StoreError, ViewState};
use std::sync::Arc;

#[tokio::test]
async fn mount_refresh_moves_idle_to_loaded() {
  setup_tracing();
  let api = ScriptedCartApi::new(cart_with(vec![sample_item(7, 1, 1, 500.0)]));
  let controller = CartController::new(Arc::clone(&api), CartBus::default());

  assert_eq!(controller.state(), ViewState::Idle);
  controller.refresh().await.unwrap();

  match controller.state() {
    ViewState::Loaded(cart) => assert_eq!(cart.len(), 1),
    other => panic!("expected Loaded, got {:?}", other),
  }
  assert_eq!(controller.total_quantity(), 1);
  assert_eq!(controller.subtotal(), 500.0);
}

#[tokio::test]
async fn failed_refresh_shows_error_and_empty_items() {
  setup_tracing();
  let api = ScriptedCartApi::new(cart_with(vec![sample_item(7, 1, 1, 500.0)]));
  let controller = CartController::new(Arc::clone(&api), CartBus::default());

  controller.refresh().await.unwrap();
  assert_eq!(controller.items().len(), 1);

  api.set_fail_get(true);
  let err = controller.refresh().await.unwrap_err();
  assert!(matches!(err, StoreError::Server(_)));

  match controller.state() {
    ViewState::Error(message) => assert_eq!(message, "Server error. Please try again later."),
    other => panic!("expected Error, got {:?}", other),
  }
  // Prior (stale) items are not kept around as loaded state.
  assert!(controller.items().is_empty());
  assert_eq!(controller.total_quantity(), 0);
}

#[tokio::test]
async fn mutations_resynchronize_from_the_server() {
  setup_tracing();
  let api = ScriptedCartApi::new(cart_with(vec![sample_item(7, 1, 1, 500.0)]));
  let controller = CartController::new(Arc::clone(&api), CartBus::default());
  controller.refresh().await.unwrap();

  // The server's post-mutation truth: quantity merged to 2.
  api.serve_next(cart_with(vec![sample_item(7, 1, 2, 500.0)]));
  controller.add_item(1, 1).await.unwrap();

  assert_eq!(
    api.recorded_calls(),
    vec!["get", "add:1:1", "get"],
    "every mutation is followed by a re-fetch"
  );
  assert_eq!(controller.items()[0].quantity, 2);
}

#[tokio::test]
async fn decrementing_below_one_removes_instead_of_updating() {
  setup_tracing();
  let api = ScriptedCartApi::new(cart_with(vec![sample_item(7, 1, 1, 500.0)]));
  let controller = CartController::new(Arc::clone(&api), CartBus::default());
  controller.refresh().await.unwrap();

  api.serve_next(cart_with(vec![]));
  controller.set_quantity(7, 1, 0).await.unwrap();

  let calls = api.recorded_calls();
  assert!(calls.contains(&"remove:1".to_string()), "calls: {:?}", calls);
  assert!(
    !calls.iter().any(|c| c.starts_with("update:")),
    "no update with quantity zero, calls: {:?}",
    calls
  );
  assert!(controller.items().is_empty());
}

#[tokio::test]
async fn positive_quantities_go_through_update() {
  setup_tracing();
  let api = ScriptedCartApi::new(cart_with(vec![sample_item(7, 1, 2, 500.0)]));
  let controller = CartController::new(Arc::clone(&api), CartBus::default());
  controller.refresh().await.unwrap();

  api.serve_next(cart_with(vec![sample_item(7, 1, 3, 500.0)]));
  controller.set_quantity(7, 1, 3).await.unwrap();

  assert!(api.recorded_calls().contains(&"update:1:3".to_string()));
  assert_eq!(controller.items()[0].quantity, 3);
}

#[tokio::test]
async fn failed_mutation_leaves_prior_state_visible() {
  setup_tracing();
  let api = ScriptedCartApi::new(cart_with(vec![sample_item(7, 1, 2, 500.0)]));
  let controller = CartController::new(Arc::clone(&api), CartBus::default());
  controller.refresh().await.unwrap();

  api.set_fail_mutations(true);
  let err = controller.set_quantity(7, 1, 3).await.unwrap_err();
  assert!(matches!(err, StoreError::Server(_)));

  // No optimistic change was made, so there is nothing to roll back.
  assert_eq!(controller.items()[0].quantity, 2);
  assert!(!controller.is_item_busy(7));
}

#[tokio::test(flavor = "multi_thread")]
async fn in_flight_item_rejects_a_second_mutation() {
  setup_tracing();
  let api = ScriptedCartApi::new(cart_with(vec![sample_item(7, 1, 2, 500.0)]));
  let controller = CartController::new(Arc::clone(&api), CartBus::default());
  controller.refresh().await.unwrap();

  let release = api.hold_next_mutation();
  let background = {
    let controller = controller.clone();
    tokio::spawn(async move { controller.set_quantity(7, 1, 3).await })
  };

  assert!(wait_until(|| controller.is_item_busy(7)).await, "first mutation in flight");

  let err = controller.set_quantity(7, 1, 4).await.unwrap_err();
  assert!(matches!(err, StoreError::Validation(_)), "got {:?}", err);

  release.notify_one();
  background.await.unwrap().unwrap();
  assert!(!controller.is_item_busy(7));
}

#[tokio::test(flavor = "multi_thread")]
async fn badge_view_refetches_on_cart_signal() {
  setup_tracing();
  let api = ScriptedCartApi::new(cart_with(vec![]));
  let bus = CartBus::default();

  let cart_view = CartController::new(Arc::clone(&api), bus.clone());
  let badge_view = CartController::new(Arc::clone(&api), bus.clone());

  cart_view.refresh().await.unwrap();
  badge_view.refresh().await.unwrap();
  assert_eq!(badge_view.total_quantity(), 0);

  let listener = {
    let badge_view = badge_view.clone();
    let subscription = bus.subscribe();
    tokio::spawn(async move { badge_view.run_listener(subscription).await })
  };

  // The mutating view adds two units; the badge view hears the pulse and
  // converges on its own, with no payload handed over.
  api.serve_next(cart_with(vec![sample_item(7, 1, 2, 500.0)]));
  cart_view.add_item(1, 2).await.unwrap();

  assert!(
    wait_until(|| badge_view.total_quantity() == 2).await,
    "badge converged to the server count"
  );

  listener.abort();
}

#[tokio::test]
async fn clear_empties_and_signals() {
  setup_tracing();
  let api = ScriptedCartApi::new(cart_with(vec![sample_item(7, 1, 2, 500.0)]));
  let bus = CartBus::default();
  let controller = CartController::new(Arc::clone(&api), bus.clone());
  controller.refresh().await.unwrap();

  let mut subscription = bus.subscribe();

  api.serve_next(cart_with(vec![]));
  controller.clear().await.unwrap();

  assert!(controller.items().is_empty());
  assert!(subscription.recv().await.is_some(), "clear pulses the bus");
}

#[tokio::test]
async fn subscription_drops_deregister_cleanly() {
  setup_tracing();
  let bus = CartBus::default();
  assert_eq!(bus.subscriber_count(), 0);

  let first = bus.subscribe();
  let second = bus.subscribe();
  assert_eq!(bus.subscriber_count(), 2);

  drop(first);
  assert_eq!(bus.subscriber_count(), 1);
  drop(second);
  assert_eq!(bus.subscriber_count(), 0);

  // Publishing with nobody mounted is fire-and-forget, not an error.
  bus.publish(mykart_client::CartSignal::Changed);
}
