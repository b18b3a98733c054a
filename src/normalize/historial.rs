use serde_json::Value;
use tracing::debug;

use super::coerce::{as_array, as_count, as_number, as_text, lookup, path, text_or};
use crate::models::{HistoryEntry, Period, PeriodState, Settlement};

/// Where the history entries of a load were found
#[derive(Debug, Clone, Copy)]
pub enum HistorySource<'a> {
    /// `jornadas` of `historial.json`, each holding its own `combinadas`
    Periods(&'a [Value]),
    /// `historial.combinadas` embedded in `picks_complete.json`
    Legacy(&'a [Value]),
    Missing,
}

impl<'a> HistorySource<'a> {
    pub fn resolve(primary: &'a Value, secondary: Option<&'a Value>) -> Self {
        if let Some(periods) = secondary
            .and_then(|doc| doc.get("jornadas"))
            .and_then(Value::as_array)
        {
            return HistorySource::Periods(periods);
        }

        match path(primary, &["historial", "combinadas"]).and_then(Value::as_array) {
            Some(list) => HistorySource::Legacy(list),
            None => HistorySource::Missing,
        }
    }
}

/// Normalize history from either document shape, preserving source order
pub fn normalize_history(primary: &Value, secondary: Option<&Value>) -> Vec<HistoryEntry> {
    match HistorySource::resolve(primary, secondary) {
        HistorySource::Periods(periods) => {
            let entries: Vec<HistoryEntry> = periods
                .iter()
                .enumerate()
                .flat_map(|(idx, period)| flatten_period(period, idx + 1))
                .collect();
            debug!(
                "Flattened {} history entries from {} periods",
                entries.len(),
                periods.len()
            );
            entries
        }
        HistorySource::Legacy(list) => {
            debug!("Normalizing {} legacy history entries", list.len());
            list.iter()
                .enumerate()
                .map(|(idx, raw)| normalize_legacy(raw, idx + 1))
                .collect()
        }
        HistorySource::Missing => Vec::new(),
    }
}

fn flatten_period(raw: &Value, position: usize) -> Vec<HistoryEntry> {
    let label = text_or(raw.get("jornada"), &format!("Jornada {}", position));
    let period = Period {
        label: label.clone(),
        start: as_text(raw.get("fecha_inicio")),
        end: as_text(raw.get("fecha_fin")),
        state: PeriodState::parse(&as_text(raw.get("estado"))),
    };
    let date = as_text(lookup(raw, &["fecha_fin", "fecha_inicio"]));

    as_array(raw.get("combinadas"))
        .iter()
        .enumerate()
        .map(|(idx, c)| HistoryEntry {
            id: text_or(c.get("id"), &format!("{}-{}", label, idx + 1)),
            date: date.clone(),
            description: text_or(c.get("nombre"), "Combinada"),
            total_odds: as_number(lookup(c, &["cuota_total", "cuota"])),
            probability: as_number(lookup(c, &["probabilidad", "probabilidad_estimada"])),
            settlement: Settlement::from_state(&as_text(c.get("estado"))),
            period: Some(period.clone()),
            legs_won: as_count(c.get("picks_acertados")),
            legs_total: as_count(c.get("picks_totales"))
                .or_else(|| c.get("picks").and_then(Value::as_array).map(|p| p.len() as u32)),
        })
        .collect()
}

fn normalize_legacy(raw: &Value, position: usize) -> HistoryEntry {
    HistoryEntry {
        id: text_or(raw.get("id"), &format!("hist-{}", position)),
        date: as_text(raw.get("fecha")),
        description: text_or(raw.get("descripcion"), &format!("Combinada {}", position)),
        total_odds: as_number(raw.get("cuota_total")),
        probability: as_number(lookup(raw, &["probabilidad", "probabilidad_estimada"])),
        settlement: Settlement::from_legacy_result(&as_text(raw.get("resultado"))),
        period: None,
        legs_won: as_count(raw.get("picks_acertados")),
        legs_total: as_count(raw.get("picks_totales")),
    }
}
