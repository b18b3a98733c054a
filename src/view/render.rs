use std::fmt::Write;

use anyhow::{Context, Result};
use serde_json::Value;

use super::composer::{MatchCard, View};
use super::state::Tab;
use crate::error::LoadError;
use crate::models::{CombinedBet, HistoryEntry, Settlement};
use crate::normalize::repair_mangled_text;
use crate::snapshot::Snapshot;

/// Render a composed view as terminal text. Free text is repaired here,
/// never at normalization time.
pub fn render(view: &View, snapshot: &Snapshot) -> String {
    let mut out = String::new();

    let _ = write!(out, "ProBets AI | Modelo {}", repair_mangled_text(&snapshot.model_version));
    if let Some(generated_at) = snapshot.generated_at {
        let _ = write!(out, " | {}", generated_at.format("%Y-%m-%d %H:%M"));
    }
    out.push_str("\n\n");

    match view {
        View::Predictions {
            competition,
            edge_only,
            matches,
            summary,
        } => {
            let _ = writeln!(
                out,
                "{}{} | {} partidos | {} picks ({} recomendados, {} apostables)",
                competition,
                if *edge_only { " [solo recomendados]" } else { "" },
                summary.matches,
                summary.total_picks,
                summary.recommended_picks,
                summary.bettable_picks
            );
            if matches.is_empty() {
                out.push_str("No hay partidos para esta competición.\n");
            }
            for card in matches {
                render_match(&mut out, card);
            }
        }
        View::CombinedBets { bets, summary } => {
            let _ = writeln!(
                out,
                "Combinadas ({}) | cuota {:.2} - {:.2} | prob. media {:.1}%",
                summary.total, summary.min_odds, summary.max_odds, summary.average_probability
            );
            if bets.is_empty() {
                out.push_str("No hay combinadas disponibles.\n");
            }
            for bet in bets {
                render_combined_bet(&mut out, bet);
            }
        }
        View::History { entries, summary } => {
            let _ = writeln!(
                out,
                "Historial | Total {} | Acertadas {} | Falladas {} | Tasa {}%",
                summary.total_count,
                summary.won_count,
                summary.lost_count,
                summary.hit_rate_percent
            );
            if entries.is_empty() {
                out.push_str("No hay historial disponible.\n");
            }
            for entry in entries {
                render_history_entry(&mut out, entry);
            }
        }
        View::Unavailable { section, document } => {
            let _ = writeln!(
                out,
                "{} no disponible: añade el archivo {} para ver esta sección.",
                section_name(*section),
                document
            );
        }
    }

    out
}

/// Render a composed view as pretty JSON, with the same text repair as
/// [`render`] applied to every string value
pub fn render_json(view: &View) -> Result<String> {
    let mut value = serde_json::to_value(view).context("Failed to serialize view")?;
    repair_strings(&mut value);
    serde_json::to_string_pretty(&value).context("Failed to serialize view")
}

fn repair_strings(value: &mut Value) {
    match value {
        Value::String(text) => *text = repair_mangled_text(text).into_owned(),
        Value::Array(items) => items.iter_mut().for_each(repair_strings),
        Value::Object(fields) => fields.values_mut().for_each(repair_strings),
        _ => {}
    }
}

/// Error state for a load whose primary document failed
pub fn render_load_error(err: &LoadError) -> String {
    let LoadError::PrimaryUnavailable { path, reason } = err;

    let mut out = format!("No se pudieron cargar los datos: falta {}.\n", path);
    let _ = writeln!(out, "Detalle: {}", reason);
    out.push_str("Archivos opcionales esperados:\n");
    for doc in err.optional_documents() {
        let _ = writeln!(out, "  - {}", doc);
    }
    out
}

fn render_match(out: &mut String, card: &MatchCard) {
    let m = &card.fixture;
    let best_edge = card
        .best_edge
        .map(|e| format!("{:.1}%", e))
        .unwrap_or_else(|| "N/A".to_string());

    let _ = writeln!(
        out,
        "\n{} vs {} | {} {} | mejor edge {}",
        repair_mangled_text(&m.home),
        repair_mangled_text(&m.away),
        m.date,
        m.time,
        best_edge
    );

    if card.visible_picks.is_empty() {
        out.push_str("  Sin picks para este filtro.\n");
    }

    for pick in &card.visible_picks {
        let odds = pick
            .odds
            .map(|o| format!("{:.2}", o))
            .unwrap_or_else(|| "-".to_string());
        let marker = if pick.is_bettable() {
            "*"
        } else if pick.recommended {
            // Recommended without market odds cannot be acted on
            "~"
        } else {
            " "
        };

        let _ = writeln!(
            out,
            "  {} {:<28} {:<32} {:>5.1}% | cuota {} | edge {:.1}%",
            marker,
            repair_mangled_text(&pick.market),
            repair_mangled_text(&pick.prediction),
            pick.confidence,
            odds,
            pick.edge_percent
        );
        if let Some(reason) = &pick.reason {
            let _ = writeln!(out, "      {}", repair_mangled_text(reason));
        }
    }
}

fn render_combined_bet(out: &mut String, bet: &CombinedBet) {
    let _ = write!(
        out,
        "\n{} | cuota {:.2} | prob. {:.1}%",
        repair_mangled_text(&bet.name),
        bet.total_odds,
        bet.probability
    );
    if let Some(category) = bet.category {
        let _ = write!(out, " | {}", category.as_str());
    }
    if let Some(settlement) = bet.settlement {
        let _ = write!(out, " | {}", settlement_label(settlement));
    }
    out.push('\n');

    for leg in &bet.legs {
        let _ = writeln!(
            out,
            "  - {}: {} ({:.2})",
            repair_mangled_text(&leg.match_label),
            repair_mangled_text(&leg.selection),
            leg.odds
        );
    }
}

fn render_history_entry(out: &mut String, entry: &HistoryEntry) {
    let _ = write!(
        out,
        "{} {} | {} | cuota {:.2}",
        settlement_label(entry.settlement),
        entry.date,
        repair_mangled_text(&entry.description),
        entry.total_odds
    );
    if let (Some(won), Some(total)) = (entry.legs_won, entry.legs_total) {
        let _ = write!(out, " | {}/{} picks", won, total);
    }
    out.push('\n');
}

fn settlement_label(settlement: Settlement) -> &'static str {
    match settlement {
        Settlement::Acertada => "[acertada]",
        Settlement::Fallada => "[fallada]",
        Settlement::Pendiente => "[pendiente]",
    }
}

fn section_name(tab: Tab) -> &'static str {
    match tab {
        Tab::Picks => "Predicciones",
        Tab::Combinadas => "Combinadas",
        Tab::Historial => "Historial",
    }
}
