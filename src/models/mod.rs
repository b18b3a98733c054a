pub mod combinada;
pub mod history;
pub mod partido;

pub use combinada::{Category, CombinedBet, Leg, Settlement};
pub use history::{HistoryEntry, Period, PeriodState};
pub use partido::{Match, MatchStats, ModelProbabilities, Pick};
