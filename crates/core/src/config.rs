use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum outcomes retained per session.
    pub history_cap: usize,
    /// Accepted length band for an initial history submission.
    pub min_seed_len: usize,
    pub max_seed_len: usize,
    /// Entries scored by the sector and side-by-side heuristics.
    pub score_window: usize,
    /// Entries counted at `boost_weight` instead of 1.0 by the sector
    /// heuristic. Set `boost_weight` to 1.0 for the legacy unweighted counts.
    pub boost_window: usize,
    pub boost_weight: f64,
    /// Closed eligibility band for sector scores.
    pub sector_min_score: f64,
    pub sector_max_score: f64,
    /// Entries scanned by the sixteen-number trigger.
    pub trigger_window: usize,
    /// Index distance between the paired hits: at least `trigger_min_span`
    /// (gap of three entries), at most `trigger_max_span`.
    pub trigger_min_span: usize,
    pub trigger_max_span: usize,
    /// Attacks armed per selection.
    pub max_active: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_cap: 50,
            min_seed_len: 20,
            max_seed_len: 50,
            score_window: 20,
            boost_window: 5,
            boost_weight: 1.5,
            sector_min_score: 4.0,
            sector_max_score: 15.0,
            trigger_window: 10,
            trigger_min_span: 4,
            trigger_max_span: 6,
            max_active: 2,
        }
    }
}
