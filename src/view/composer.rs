use serde::Serialize;
use serde_json::Value;

use super::state::{Competition, Tab, ViewState};
use crate::api::{
    CHAMPIONS_COMBINADAS_DOCUMENT, CHAMPIONS_DATA_DOCUMENT, COMBINADAS_DOCUMENT, HISTORIAL_DOCUMENT,
};
use crate::models::{CombinedBet, HistoryEntry, Match, Pick};
use crate::normalize::{coerce::path, normalize_matches};
use crate::snapshot::Snapshot;
use crate::stats::{
    best_edge, summarize_combined_bets, summarize_history, summarize_picks, CombinedBetSummary,
    HistorySummary, PickSummary,
};

/// What a single render shows
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Predictions {
        competition: Competition,
        edge_only: bool,
        matches: Vec<MatchCard>,
        summary: PickSummary,
    },
    CombinedBets {
        bets: Vec<CombinedBet>,
        summary: CombinedBetSummary,
    },
    History {
        entries: Vec<HistoryEntry>,
        summary: HistorySummary,
    },
    /// An optional document this section depends on was not loaded
    Unavailable { section: Tab, document: &'static str },
}

/// A match as displayed, with the picks that survive the current filter
#[derive(Debug, Clone, Serialize)]
pub struct MatchCard {
    #[serde(flatten)]
    pub fixture: Match,
    pub visible_picks: Vec<Pick>,
    /// `None` for a match without picks
    pub best_edge: Option<f64>,
}

/// Compose the view for `state` from a loaded snapshot
pub fn compose(state: &ViewState, snapshot: &Snapshot) -> View {
    match state.tab {
        Tab::Picks => {
            if state.competition == Competition::Champions && !snapshot.availability.champions_data {
                return View::Unavailable {
                    section: Tab::Picks,
                    document: CHAMPIONS_DATA_DOCUMENT,
                };
            }

            let matches = filter_edge_only(select_matches(state.competition, snapshot), state.edge_only);
            let summary = summarize_picks(&matches);
            let matches = matches
                .into_iter()
                .map(|m| MatchCard {
                    visible_picks: visible_picks(&m, state.edge_only).into_iter().cloned().collect(),
                    best_edge: best_edge(&m),
                    fixture: m,
                })
                .collect();

            View::Predictions {
                competition: state.competition,
                edge_only: state.edge_only,
                matches,
                summary,
            }
        }
        Tab::Combinadas => {
            let (bets, available, document) = if state.competition == Competition::Champions {
                (
                    &snapshot.champions_combined_bets,
                    snapshot.availability.combinadas_champions,
                    CHAMPIONS_COMBINADAS_DOCUMENT,
                )
            } else {
                (
                    &snapshot.combined_bets,
                    snapshot.availability.combinadas,
                    COMBINADAS_DOCUMENT,
                )
            };

            if bets.is_empty() && !available {
                return View::Unavailable {
                    section: Tab::Combinadas,
                    document,
                };
            }

            View::CombinedBets {
                summary: summarize_combined_bets(bets),
                bets: bets.clone(),
            }
        }
        Tab::Historial => {
            if snapshot.history.is_empty() && !snapshot.availability.historial {
                return View::Unavailable {
                    section: Tab::Historial,
                    document: HISTORIAL_DOCUMENT,
                };
            }

            View::History {
                summary: summarize_history(&snapshot.history),
                entries: snapshot.history.clone(),
            }
        }
    }
}

/// Matches of a competition; a missing path yields an empty list
pub fn select_matches(competition: Competition, snapshot: &Snapshot) -> Vec<Match> {
    let primary = &snapshot.primary;
    let raw: Option<&Value> = match competition {
        Competition::Primera => path(primary, &["jornada", "primera_division", "partidos"]),
        Competition::Segunda => path(primary, &["jornada", "segunda_division", "partidos"]),
        Competition::Copa => path(primary, &["copa_del_rey", "partidos"])
            .or_else(|| path(primary, &["jornada", "copa_del_rey", "partidos"])),
        Competition::Champions => snapshot
            .champions
            .as_ref()
            .and_then(|doc| path(doc, &["partidos"])),
    };

    normalize_matches(raw)
}

/// Keep only matches with a recommended pick, preserving order
pub fn filter_edge_only(matches: Vec<Match>, edge_only: bool) -> Vec<Match> {
    if !edge_only {
        return matches;
    }
    matches.into_iter().filter(Match::has_recommended_pick).collect()
}

/// Picks shown on a match card: all of them, or under the edge filter only
/// those recommended or with a positive edge
pub fn visible_picks(m: &Match, edge_only: bool) -> Vec<&Pick> {
    m.picks
        .iter()
        .filter(|p| !edge_only || p.recommended || p.edge_percent > 0.0)
        .collect()
}
