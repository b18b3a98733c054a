//! Reconciles the several JSON shapes the dashboard documents have used
//! over time into the canonical models.

pub mod coerce;
pub mod combinadas;
pub mod historial;
pub mod partidos;
pub mod text;

pub use combinadas::{normalize_combined_bets, CombinedBetSource};
pub use historial::{normalize_history, HistorySource};
pub use partidos::normalize_matches;
pub use text::repair_mangled_text;
