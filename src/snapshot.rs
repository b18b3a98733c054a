use chrono::{DateTime, NaiveDateTime};
use serde_json::Value;
use tracing::info;

use crate::api::RawDocuments;
use crate::models::{CombinedBet, HistoryEntry};
use crate::normalize::{coerce, normalize_combined_bets, normalize_history};

/// Which optional documents were present in a load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Availability {
    pub combinadas: bool,
    pub combinadas_champions: bool,
    pub champions_data: bool,
    pub historial: bool,
}

/// Everything one dashboard render works from, normalized once per load
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Raw predictions document; match lists are read from it per view
    pub primary: Value,

    /// Raw Champions match document, when available
    pub champions: Option<Value>,

    /// Model version label from the predictions document
    pub model_version: String,

    /// When the predictions were generated
    pub generated_at: Option<NaiveDateTime>,

    pub combined_bets: Vec<CombinedBet>,
    pub champions_combined_bets: Vec<CombinedBet>,
    pub history: Vec<HistoryEntry>,

    pub availability: Availability,
}

impl Snapshot {
    pub fn from_documents(docs: RawDocuments) -> Self {
        let availability = Availability {
            combinadas: docs.combinadas.is_some(),
            combinadas_champions: docs.combinadas_champions.is_some(),
            champions_data: docs.champions_data.is_some(),
            historial: docs.historial.is_some(),
        };

        let combined_bets = normalize_combined_bets(&docs.primary, docs.combinadas.as_ref());
        // The Champions track has no legacy block to fall back to
        let champions_combined_bets =
            normalize_combined_bets(&Value::Null, docs.combinadas_champions.as_ref());
        let history = normalize_history(&docs.primary, docs.historial.as_ref());

        let model_version = coerce::as_text(docs.primary.get("modelo_version"));
        let generated_at = docs
            .primary
            .get("fecha_generacion")
            .and_then(Value::as_str)
            .and_then(parse_generated_at);

        info!(
            "Snapshot ready: {} combinadas, {} champions combinadas, {} history entries",
            combined_bets.len(),
            champions_combined_bets.len(),
            history.len()
        );

        Self {
            primary: docs.primary,
            champions: docs.champions_data,
            model_version,
            generated_at,
            combined_bets,
            champions_combined_bets,
            history,
            availability,
        }
    }
}

/// Generator timestamps are naive ISO-8601, sometimes with an offset
fn parse_generated_at(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
}
