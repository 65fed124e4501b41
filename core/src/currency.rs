// mykart_client/src/currency.rs

//! Currency preference and display formatting.
//!
//! Prices arrive from the backend denominated in INR. Conversion uses a
//! static rate table; this is a display helper, not a financial quote.

use crate::error::StoreResult;
use crate::storage::{keys, LocalStore};
use serde::{Deserialize, Serialize};

/// Persisted currency preference, stored under `selectedCurrency`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyPref {
  pub name: String,
  pub currency: String,
  pub symbol: String,
}

impl Default for CurrencyPref {
  fn default() -> Self {
    Self {
      name: "India".to_string(),
      currency: "INR".to_string(),
      symbol: "₹".to_string(),
    }
  }
}

/// Static INR exchange rates. Unknown codes fall back to 1 (no
/// conversion), the same as the source table.
const EXCHANGE_RATES: &[(&str, f64)] = &[
  ("INR", 1.0),
  ("USD", 0.012),
  ("GBP", 0.0095),
  ("CAD", 0.016),
  ("AUD", 0.018),
  ("EUR", 0.011),
  ("JPY", 1.8),
  ("BRL", 0.060),
  ("MXN", 0.21),
];

fn rate_for(code: &str) -> f64 {
  EXCHANGE_RATES
    .iter()
    .find(|(c, _)| *c == code)
    .map(|(_, r)| *r)
    .unwrap_or(1.0)
}

/// The current preference; a missing or corrupt stored value yields the
/// INR default.
pub fn selected_currency(store: &LocalStore) -> CurrencyPref {
  store.get_json::<CurrencyPref>(keys::SELECTED_CURRENCY).unwrap_or_default()
}

pub fn set_selected_currency(store: &LocalStore, pref: &CurrencyPref) -> StoreResult<()> {
  store.set_json(keys::SELECTED_CURRENCY, pref)
}

/// Converts an INR amount into the given preference's currency.
pub fn convert_from_inr(pref: &CurrencyPref, amount_inr: f64) -> f64 {
  amount_inr * rate_for(&pref.currency)
}

/// Symbol-prefixed rendering with two decimals, e.g. `₹1299.00`.
pub fn format_amount(pref: &CurrencyPref, amount: f64) -> String {
  format!("{}{:.2}", pref.symbol, amount)
}

/// Converts from INR and formats in one step, the common display path.
pub fn display_inr(store: &LocalStore, amount_inr: f64) -> String {
  let pref = selected_currency(store);
  format_amount(&pref, convert_from_inr(&pref, amount_inr))
}
