use serde::Serialize;

use super::Settlement;

/// A settled or pending combined bet in the history view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    /// Source id, or a synthesized positional id
    pub id: String,

    /// Reporting date (period end, period start, or the legacy `fecha`)
    pub date: String,

    /// Display description
    pub description: String,

    /// Combined odds
    pub total_odds: f64,

    /// Estimated probability (0 - 100)
    pub probability: f64,

    /// Canonical settlement
    pub settlement: Settlement,

    /// Reporting period, absent for legacy entries
    pub period: Option<Period>,

    /// Legs settled as correct
    pub legs_won: Option<u32>,

    /// Total legs in the bet
    pub legs_total: Option<u32>,
}

/// A reporting round ("jornada") grouping history entries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Period {
    pub label: String,
    pub start: String,
    pub end: String,
    pub state: PeriodState,
}

/// Lifecycle of a reporting period
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PeriodState {
    Pendiente,
    EnCurso,
    Finalizada,
}

impl PeriodState {
    pub fn parse(state: &str) -> Self {
        match state {
            "en_curso" => PeriodState::EnCurso,
            "finalizada" | "finalizado" => PeriodState::Finalizada,
            _ => PeriodState::Pendiente,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodState::Pendiente => "pendiente",
            PeriodState::EnCurso => "en_curso",
            PeriodState::Finalizada => "finalizada",
        }
    }
}
