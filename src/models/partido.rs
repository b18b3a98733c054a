use serde::Serialize;

/// A fixture with its model picks, as published in `picks_complete.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Match {
    /// Fixture identifier (stringified, may be empty)
    pub id: String,

    /// Home team name (may carry encoding artifacts)
    pub home: String,

    /// Away team name (may carry encoding artifacts)
    pub away: String,

    /// Kick-off date as published (e.g. "2026-02-14")
    pub date: String,

    /// Kick-off time as published (e.g. "21:00")
    pub time: String,

    /// Stadium name
    pub venue: String,

    /// League display name
    pub league: String,

    /// Market predictions for this fixture
    pub picks: Vec<Pick>,

    /// Positional and goal statistics, when published
    pub stats: Option<MatchStats>,
}

impl Match {
    /// Whether any pick on this fixture is flagged as recommended
    pub fn has_recommended_pick(&self) -> bool {
        self.picks.iter().any(|p| p.recommended)
    }
}

/// A single market prediction attached to a match
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Pick {
    /// Market type label (e.g. "Resultado Final (1X2)")
    pub market: String,

    /// Predicted outcome label
    pub prediction: String,

    /// Model confidence (0 - 100)
    pub confidence: f64,

    /// Bookmaker odds, absent when no market was found
    pub odds: Option<f64>,

    /// Whether the model recommends betting this pick
    pub recommended: bool,

    /// Expected-value advantage over the market, in percent
    pub edge_percent: f64,

    /// Suggested Kelly stake, in percent of bankroll
    pub kelly_stake_percent: Option<f64>,

    /// Rationale text
    pub reason: Option<String>,

    /// Free-text description (xG, expected totals...)
    pub description: Option<String>,

    /// Model that produced the pick
    pub model: Option<String>,

    /// 1X2 probability triple, when published
    pub probabilities: Option<ModelProbabilities>,
}

impl Pick {
    /// A pick can only be acted on when it is recommended and has market odds
    pub fn is_bettable(&self) -> bool {
        self.recommended && self.odds.is_some()
    }
}

/// Home / draw / away probabilities in percent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ModelProbabilities {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

/// Table and form statistics for both teams
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchStats {
    pub home_position: f64,
    pub away_position: f64,
    pub home_form: String,
    pub away_form: String,
    pub home_goals_for: f64,
    pub home_goals_against: f64,
    pub away_goals_for: f64,
    pub away_goals_against: f64,
    pub home_elo: f64,
    pub away_elo: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bettable_requires_odds() {
        let mut pick = Pick {
            recommended: true,
            ..Default::default()
        };
        assert!(!pick.is_bettable());

        pick.odds = Some(1.85);
        assert!(pick.is_bettable());

        pick.recommended = false;
        assert!(!pick.is_bettable());
    }

    #[test]
    fn test_has_recommended_pick() {
        let mut m = Match::default();
        assert!(!m.has_recommended_pick());

        m.picks.push(Pick::default());
        m.picks.push(Pick {
            recommended: true,
            ..Default::default()
        });
        assert!(m.has_recommended_pick());
    }
}
