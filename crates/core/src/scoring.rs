//! Scoring heuristics. Each function is pure over a history snapshot; higher
//! scores mean a stronger signal of due numbers.

use crate::{
    AttackPattern, EngineConfig, Sector, SpinHistory, SIXTEEN_NUMBERS, WHEEL_ORDER,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredCandidate {
    pub pattern: AttackPattern,
    pub score: f64,
}

/// Weighted membership count of the scoring window in a sector. Entries in
/// the boost window count `boost_weight`, the rest 1.0.
pub fn sector_score(history: &SpinHistory, sector: &Sector, config: &EngineConfig) -> f64 {
    let mut score = 0.0;
    for (idx, number) in history.recent(config.score_window).enumerate() {
        if sector.numbers.contains(&number) {
            score += if idx < config.boost_window {
                config.boost_weight
            } else {
                1.0
            };
        }
    }
    score
}

/// Best consecutive wheel triple by recency-weighted hit count. Triples at
/// the wheel boundary are skipped, so every winner has two physical
/// neighbors without wraparound. Ties keep the first triple in wheel order.
pub fn best_side_by_side(history: &SpinHistory, config: &EngineConfig) -> Option<ScoredCandidate> {
    let recent: Vec<u8> = history.recent(config.score_window).collect();
    let mut best_score = 0u32;
    let mut best_start = None;
    for start in 1..=WHEEL_ORDER.len() - 4 {
        let triple = &WHEEL_ORDER[start..start + 3];
        let mut score = 0u32;
        for (idx, number) in recent.iter().enumerate() {
            if triple.contains(number) {
                score += (config.score_window - idx) as u32;
            }
        }
        if score > best_score {
            best_score = score;
            best_start = Some(start);
        }
    }
    let start = best_start?;
    let mut numbers = Vec::with_capacity(5);
    numbers.push(WHEEL_ORDER[start - 1]);
    numbers.extend_from_slice(&WHEEL_ORDER[start..start + 3]);
    numbers.push(WHEEL_ORDER[start + 3]);
    Some(ScoredCandidate {
        pattern: AttackPattern::side_by_side(numbers),
        score: best_score as f64,
    })
}

/// Sixteen-number trigger: two hits in the trigger window whose indices are
/// between `trigger_min_span` and `trigger_max_span` apart. The first pair
/// found scanning from the newest entry wins; score is `score_window` minus
/// the older hit's index. Zero means no trigger.
pub fn sixteen_score(history: &SpinHistory, config: &EngineConfig) -> f64 {
    let recent: Vec<u8> = history.recent(config.trigger_window).collect();
    for (idx, number) in recent.iter().enumerate() {
        if !SIXTEEN_NUMBERS.contains(number) {
            continue;
        }
        let from = idx + config.trigger_min_span;
        let to = recent.len().min(idx + config.trigger_max_span + 1);
        for later in from..to {
            if SIXTEEN_NUMBERS.contains(&recent[later]) {
                return config.score_window.saturating_sub(later) as f64;
            }
        }
    }
    0.0
}
