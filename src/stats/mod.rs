use serde::Serialize;

use crate::models::{CombinedBet, HistoryEntry, Match, Settlement};

/// Hit-rate summary over history entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistorySummary {
    pub won_count: usize,
    pub lost_count: usize,
    /// All entries, pending included
    pub total_count: usize,
    /// `won / total * 100` with one decimal, "0.0" for an empty history
    pub hit_rate_percent: String,
}

/// Summarize settled outcomes; pending entries count toward the total
pub fn summarize_history(entries: &[HistoryEntry]) -> HistorySummary {
    let won_count = entries
        .iter()
        .filter(|e| e.settlement == Settlement::Acertada)
        .count();
    let lost_count = entries
        .iter()
        .filter(|e| e.settlement == Settlement::Fallada)
        .count();
    let total_count = entries.len();

    let hit_rate = if total_count > 0 {
        won_count as f64 / total_count as f64 * 100.0
    } else {
        0.0
    };

    HistorySummary {
        won_count,
        lost_count,
        total_count,
        // Ties round up, as the page's `toFixed(1)` does
        hit_rate_percent: format!("{:.1}", round_one(hit_rate)),
    }
}

/// Odds range and average probability of a set of combined bets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedBetSummary {
    pub total: usize,
    pub min_odds: f64,
    pub max_odds: f64,
    pub average_probability: f64,
    pub total_legs: usize,
}

pub fn summarize_combined_bets(bets: &[CombinedBet]) -> CombinedBetSummary {
    if bets.is_empty() {
        return CombinedBetSummary {
            total: 0,
            min_odds: 0.0,
            max_odds: 0.0,
            average_probability: 0.0,
            total_legs: 0,
        };
    }

    let min_odds = bets.iter().map(|b| b.total_odds).fold(f64::INFINITY, f64::min);
    let max_odds = bets
        .iter()
        .map(|b| b.total_odds)
        .fold(f64::NEG_INFINITY, f64::max);
    let average_probability =
        round_one(bets.iter().map(|b| b.probability).sum::<f64>() / bets.len() as f64);

    CombinedBetSummary {
        total: bets.len(),
        min_odds,
        max_odds,
        average_probability,
        total_legs: bets.iter().map(|b| b.legs.len()).sum(),
    }
}

/// Pick counts over a set of matches
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickSummary {
    pub matches: usize,
    pub total_picks: usize,
    /// Picks flagged `apostar`
    pub recommended_picks: usize,
    /// Recommended picks that also carry market odds
    pub bettable_picks: usize,
    pub average_confidence: f64,
}

pub fn summarize_picks(matches: &[Match]) -> PickSummary {
    let picks: Vec<_> = matches.iter().flat_map(|m| m.picks.iter()).collect();

    let average_confidence = if picks.is_empty() {
        0.0
    } else {
        round_one(picks.iter().map(|p| p.confidence).sum::<f64>() / picks.len() as f64)
    };

    PickSummary {
        matches: matches.len(),
        total_picks: picks.len(),
        recommended_picks: picks.iter().filter(|p| p.recommended).count(),
        bettable_picks: picks.iter().filter(|p| p.is_bettable()).count(),
        average_confidence,
    }
}

/// Highest edge across a match's picks; `None` when it has no picks
pub fn best_edge(m: &Match) -> Option<f64> {
    m.picks.iter().map(|p| p.edge_percent).reduce(f64::max)
}

fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
