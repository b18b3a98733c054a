use serde_json::Value;

use super::coerce::{
    as_array, as_number, as_optional_number, as_optional_text, as_text, lookup,
};
use crate::models::{Match, MatchStats, ModelProbabilities, Pick};

/// Convert a raw `partidos` list into typed matches; non-arrays yield nothing
pub fn normalize_matches(raw: Option<&Value>) -> Vec<Match> {
    as_array(raw).iter().map(normalize_match).collect()
}

fn normalize_match(raw: &Value) -> Match {
    Match {
        id: as_text(raw.get("id")),
        home: as_text(raw.get("local")),
        away: as_text(raw.get("visitante")),
        date: as_text(raw.get("fecha")),
        time: as_text(raw.get("hora")),
        venue: as_text(raw.get("estadio")),
        league: as_text(raw.get("liga")),
        picks: as_array(raw.get("picks")).iter().map(normalize_pick).collect(),
        stats: raw
            .get("estadisticas")
            .filter(|s| s.is_object())
            .map(normalize_stats),
    }
}

fn normalize_pick(raw: &Value) -> Pick {
    Pick {
        market: as_text(raw.get("tipo")),
        prediction: as_text(raw.get("prediccion")),
        confidence: as_number(raw.get("confianza")),
        odds: as_optional_number(raw.get("cuota_mercado")),
        // Only a literal `true` recommends a pick
        recommended: raw.get("apostar").and_then(Value::as_bool).unwrap_or(false),
        edge_percent: as_number(raw.get("edge_percent")),
        kelly_stake_percent: as_optional_number(raw.get("kelly_stake_percent")),
        reason: as_optional_text(raw.get("razon")),
        description: as_optional_text(raw.get("descripcion")),
        model: as_optional_text(raw.get("modelo")),
        probabilities: raw
            .get("probabilidades")
            .filter(|p| p.is_object())
            .map(|p| ModelProbabilities {
                home: as_number(p.get("local")),
                draw: as_number(p.get("empate")),
                away: as_number(p.get("visitante")),
            }),
    }
}

fn normalize_stats(raw: &Value) -> MatchStats {
    MatchStats {
        home_position: as_number(lookup(raw, &["local_posicion", "local_pos"])),
        away_position: as_number(lookup(raw, &["visitante_posicion", "visitante_pos"])),
        home_form: as_text(raw.get("local_forma")),
        away_form: as_text(raw.get("visitante_forma")),
        home_goals_for: as_number(raw.get("local_gf")),
        home_goals_against: as_number(raw.get("local_gc")),
        away_goals_for: as_number(raw.get("visitante_gf")),
        away_goals_against: as_number(raw.get("visitante_gc")),
        home_elo: as_number(raw.get("elo_local")),
        away_elo: as_number(raw.get("elo_visitante")),
    }
}
