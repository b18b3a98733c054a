use serde_json::Value;
use tracing::debug;

use super::coerce::{as_array, as_count, as_number, as_optional_number, lookup, path, text_or};
use crate::models::{Category, CombinedBet, Leg, Settlement};

/// Where the combined bets of a load were found
#[derive(Debug, Clone, Copy)]
pub enum CombinedBetSource<'a> {
    /// Top-level `combinadas` list of `combinadas.json`
    Modern(&'a [Value]),
    /// `combinadas.apuestas` embedded in `picks_complete.json`
    Legacy(&'a [Value]),
    /// Neither document carries a usable list
    Missing,
}

impl<'a> CombinedBetSource<'a> {
    /// Resolve the source: the modern document wins outright, the legacy
    /// block is only consulted when the modern list is unusable
    pub fn resolve(primary: &'a Value, secondary: Option<&'a Value>) -> Self {
        if let Some(list) = secondary
            .and_then(|doc| doc.get("combinadas"))
            .and_then(Value::as_array)
        {
            return CombinedBetSource::Modern(list);
        }

        match path(primary, &["combinadas", "apuestas"]).and_then(Value::as_array) {
            Some(list) => CombinedBetSource::Legacy(list),
            None => CombinedBetSource::Missing,
        }
    }

    pub fn entries(&self) -> &'a [Value] {
        match *self {
            CombinedBetSource::Modern(list) | CombinedBetSource::Legacy(list) => list,
            CombinedBetSource::Missing => &[],
        }
    }
}

/// Normalize combined bets from either document shape into canonical form
pub fn normalize_combined_bets(primary: &Value, secondary: Option<&Value>) -> Vec<CombinedBet> {
    let source = CombinedBetSource::resolve(primary, secondary);
    debug!(
        "Normalizing {} combined bets from {:?} source",
        source.entries().len(),
        match source {
            CombinedBetSource::Modern(_) => "modern",
            CombinedBetSource::Legacy(_) => "legacy",
            CombinedBetSource::Missing => "missing",
        }
    );

    source
        .entries()
        .iter()
        .enumerate()
        .map(|(idx, raw)| normalize_entry(raw, idx + 1))
        .collect()
}

fn normalize_entry(raw: &Value, position: usize) -> CombinedBet {
    CombinedBet {
        id: text_or(raw.get("id"), &format!("comb-{}", position)),
        name: text_or(raw.get("nombre"), &format!("Combinada {}", position)),
        total_odds: as_number(raw.get("cuota_total")),
        probability: as_number(lookup(raw, &["probabilidad", "probabilidad_estimada"])),
        category: raw
            .get("categoria")
            .and_then(Value::as_str)
            .and_then(Category::parse),
        legs: as_array(raw.get("picks")).iter().map(normalize_leg).collect(),
        settlement: settlement_of(raw),
        payout: as_optional_number(raw.get("ganancia")),
        legs_won: as_count(raw.get("picks_acertados")),
    }
}

fn normalize_leg(raw: &Value) -> Leg {
    Leg {
        match_label: text_or(raw.get("partido"), "Partido"),
        selection: text_or(lookup(raw, &["pick", "seleccion"]), "-"),
        odds: as_number(raw.get("cuota")),
        confidence: as_number(raw.get("confianza")),
    }
}

fn settlement_of(raw: &Value) -> Option<Settlement> {
    if let Some(state) = raw.get("estado").and_then(Value::as_str) {
        return Some(Settlement::from_state(state));
    }
    raw.get("resultado")
        .and_then(Value::as_str)
        .map(Settlement::from_legacy_result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn modern_doc() -> Value {
        json!({
            "combinadas": [
                {
                    "id": "comb_001",
                    "nombre": "Value Safe - Cuota 5.2",
                    "cuota_total": 5.2,
                    "probabilidad": 41.3,
                    "categoria": "safe",
                    "estado": "pendiente",
                    "picks": [
                        {"partido": "Real Madrid vs Real Sociedad", "pick": "1X2: Victoria Real Madrid", "cuota": 1.6, "confianza": 71.2},
                        {"partido": "Girona FC vs FC Barcelona", "pick": "1X2: Victoria FC Barcelona", "cuota": 1.35, "confianza": 78.0}
                    ]
                },
                {"nombre": "Sin id", "cuota_total": "12.4", "probabilidad": 20},
                {"cuota_total": null, "picks": "broken"}
            ]
        })
    }

    #[test]
    fn test_modern_preserves_count_and_order() {
        let primary = json!({});
        let bets = normalize_combined_bets(&primary, Some(&modern_doc()));

        assert_eq!(bets.len(), 3);
        assert_eq!(bets[0].id, "comb_001");
        assert_eq!(bets[1].name, "Sin id");
        assert_eq!(bets[0].legs.len(), 2);
        assert_eq!(bets[0].legs[1].selection, "1X2: Victoria FC Barcelona");
        assert_eq!(bets[0].category, Some(Category::Value));
        assert_eq!(bets[0].settlement, Some(Settlement::Pendiente));
    }

    #[test]
    fn test_synthesized_ids_are_positional() {
        let bets = normalize_combined_bets(&json!({}), Some(&modern_doc()));

        assert_eq!(bets[1].id, "comb-2");
        assert_eq!(bets[2].id, "comb-3");
        assert_eq!(bets[2].name, "Combinada 3");
    }

    #[test]
    fn test_malformed_fields_are_zeroed() {
        let bets = normalize_combined_bets(&json!({}), Some(&modern_doc()));

        assert_eq!(bets[1].total_odds, 12.4);
        assert_eq!(bets[2].total_odds, 0.0);
        assert_eq!(bets[2].probability, 0.0);
        assert!(bets[2].legs.is_empty());
        assert_eq!(bets[2].settlement, None);
    }

    #[test]
    fn test_modern_document_wins_over_legacy() {
        let primary = json!({
            "combinadas": {"apuestas": [
                {"id": "legacy-1", "probabilidad_estimada": 10.0},
                {"id": "legacy-2", "probabilidad_estimada": 12.0}
            ]}
        });
        let bets = normalize_combined_bets(&primary, Some(&modern_doc()));

        assert_eq!(bets.len(), 3);
        assert!(bets.iter().all(|b| !b.id.starts_with("legacy")));
    }

    #[test]
    fn test_legacy_fallback() {
        let primary = json!({
            "combinadas": {"apuestas": [{
                "probabilidad_estimada": 55.2,
                "cuota_total": 3.4,
                "resultado": "cumplida",
                "picks": [{"partido": "Elche CF vs CA Osasuna", "seleccion": "Local", "cuota": 2.3}]
            }]}
        });
        let bets = normalize_combined_bets(&primary, None);

        assert_eq!(bets.len(), 1);
        assert_eq!(bets[0].id, "comb-1");
        assert_eq!(bets[0].probability, 55.2);
        assert_eq!(bets[0].legs[0].selection, "Local");
        assert_eq!(bets[0].settlement, Some(Settlement::Acertada));
    }

    #[test]
    fn test_secondary_without_list_falls_back() {
        let primary = json!({"combinadas": {"apuestas": [{"id": "a"}]}});
        let secondary = json!({"combinadas": {"not": "a list"}});
        let bets = normalize_combined_bets(&primary, Some(&secondary));

        assert_eq!(bets.len(), 1);
        assert_eq!(bets[0].id, "a");
    }

    #[test]
    fn test_nothing_available() {
        assert!(normalize_combined_bets(&json!({}), None).is_empty());
        assert!(normalize_combined_bets(&json!(null), Some(&json!([]))).is_empty());
    }
}
