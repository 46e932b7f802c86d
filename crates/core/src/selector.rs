use crate::{
    best_side_by_side, sector_score, sixteen_score, AttackPattern, EngineConfig, ScoredCandidate,
    SpinHistory, SECTORS,
};

/// Ranks every eligible candidate and keeps the strongest `max_active`.
/// Candidates are gathered in catalog order and the sort is stable, so equal
/// scores fall back to declaration order.
pub fn select_attacks(history: &SpinHistory, config: &EngineConfig) -> Vec<ScoredCandidate> {
    let mut candidates = Vec::new();

    for sector in &SECTORS {
        let score = sector_score(history, sector, config);
        if score >= config.sector_min_score && score <= config.sector_max_score {
            candidates.push(ScoredCandidate {
                pattern: AttackPattern::sectoral(sector),
                score,
            });
        }
    }

    if let Some(side) = best_side_by_side(history, config) {
        candidates.push(side);
    }

    let sixteen = sixteen_score(history, config);
    if sixteen > 0.0 {
        candidates.push(ScoredCandidate {
            pattern: AttackPattern::sixteen(),
            score: sixteen,
        });
    }

    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates.truncate(config.max_active);
    candidates
}
