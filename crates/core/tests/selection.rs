use sektor_core::{
    best_side_by_side, color_of, select_attacks, sector_score, sixteen_score, static_patterns,
    AttackKind, AttackPattern, Color, EngineConfig, SpinHistory, SECTORS, SIXTEEN_NUMBERS,
    WHEEL_ORDER,
};

fn history_of(chronological: &[u8]) -> SpinHistory {
    let mut history = SpinHistory::with_cap(50);
    history.seed(chronological);
    history
}

#[test]
fn wheel_order_is_a_permutation() {
    let mut seen = [false; 37];
    for &pocket in WHEEL_ORDER.iter() {
        assert!(pocket <= 36);
        assert!(!seen[pocket as usize], "duplicate pocket {pocket}");
        seen[pocket as usize] = true;
    }
}

#[test]
fn catalog_shapes() {
    for sector in &SECTORS {
        assert!(
            sector.numbers.len() == 6 || sector.numbers.len() == 8,
            "{} has {} numbers",
            sector.label,
            sector.numbers.len()
        );
    }
    assert_eq!(SIXTEEN_NUMBERS.len(), 16);
    let patterns = static_patterns();
    assert_eq!(patterns.len(), 6);
    assert_eq!(patterns[0].label, "Left 6");
    assert_eq!(patterns[5].kind, AttackKind::SixteenNumbers);
}

#[test]
fn colors_follow_the_european_layout() {
    assert_eq!(color_of(0), Color::Green);
    assert_eq!(color_of(32), Color::Red);
    assert_eq!(color_of(26), Color::Black);
    let reds = (1..=36).filter(|&n| color_of(n) == Color::Red).count();
    assert_eq!(reds, 18);
}

macro_rules! win_limit_case {
    ($name:ident, $pattern:expr, $limit:expr) => {
        #[test]
        fn $name() {
            assert_eq!($pattern.win_limit(), $limit);
        }
    };
}

win_limit_case!(win_limit_left6, AttackPattern::sectoral(&SECTORS[0]), 11);
win_limit_case!(win_limit_right6, AttackPattern::sectoral(&SECTORS[1]), 11);
win_limit_case!(win_limit_vertical, AttackPattern::sectoral(&SECTORS[2]), 8);
win_limit_case!(win_limit_orfelins, AttackPattern::sectoral(&SECTORS[3]), 8);
win_limit_case!(win_limit_towers, AttackPattern::sectoral(&SECTORS[4]), 8);
win_limit_case!(
    win_limit_side,
    AttackPattern::side_by_side(vec![22, 18, 29, 7, 28]),
    13
);
win_limit_case!(win_limit_sixteen, AttackPattern::sixteen(), 3);

#[test]
fn sector_score_boosts_fresh_hits() {
    // Three Left 6 members land in the most recent five entries.
    let mut chronological = vec![16u8; 17];
    chronological.extend_from_slice(&[22, 18, 29]);
    let history = history_of(&chronological);
    let config = EngineConfig::default();
    let score = sector_score(&history, &SECTORS[0], &config);
    assert_eq!(score, 4.5);
}

#[test]
fn sector_score_never_drops_on_a_fresh_member() {
    let mut chronological = vec![16u8; 16];
    chronological.extend_from_slice(&[22, 18, 29, 7]);
    let mut history = history_of(&chronological);
    let config = EngineConfig::default();
    let before = sector_score(&history, &SECTORS[0], &config);
    history.record(12);
    let after = sector_score(&history, &SECTORS[0], &config);
    assert!(after >= before, "{after} < {before}");
}

#[test]
fn sector_score_unweighted_parity() {
    let config = EngineConfig {
        boost_weight: 1.0,
        ..EngineConfig::default()
    };
    let mut chronological = vec![16u8; 17];
    chronological.extend_from_slice(&[22, 18, 29]);
    let history = history_of(&chronological);
    assert_eq!(sector_score(&history, &SECTORS[0], &config), 3.0);
}

#[test]
fn side_by_side_window_has_five_adjacent_numbers() {
    // 4, 21, 2 sit side by side on the wheel.
    let mut chronological = vec![26u8; 17];
    chronological.extend_from_slice(&[2, 21, 4]);
    let history = history_of(&chronological);
    let candidate = best_side_by_side(&history, &EngineConfig::default()).expect("candidate");
    assert_eq!(candidate.pattern.numbers, vec![19, 4, 21, 2, 25]);
    assert_eq!(candidate.score, 57.0);
    // Middle three are consecutive wheel positions.
    let mid = &candidate.pattern.numbers[1..4];
    let start = WHEEL_ORDER
        .iter()
        .position(|&pocket| pocket == mid[0])
        .expect("on wheel");
    assert_eq!(&WHEEL_ORDER[start..start + 3], mid);
}

#[test]
fn side_by_side_ties_go_to_the_first_wheel_triple() {
    // 15 belongs to the triples starting at wheel positions 1 and 2; the
    // earlier one wins.
    let mut chronological = vec![26u8; 19];
    chronological.push(15);
    let history = history_of(&chronological);
    let candidate = best_side_by_side(&history, &EngineConfig::default()).expect("candidate");
    assert_eq!(candidate.pattern.numbers, vec![0, 32, 15, 19, 4]);
    assert_eq!(candidate.score, 20.0);
}

#[test]
fn side_by_side_skips_boundary_pockets() {
    // 26 and 0 only appear in triples that would need to wrap.
    let chronological: Vec<u8> = [26u8, 0].iter().copied().cycle().take(20).collect();
    let history = history_of(&chronological);
    assert!(best_side_by_side(&history, &EngineConfig::default()).is_none());
}

#[test]
fn sixteen_trigger_pairs_hits_across_the_gap() {
    // Hit at index 0 (10) pairs with the hit at index 4 (1).
    let chronological = [
        26u8, 26, 26, 26, 26, 26, 26, 26, 26, 26, 26, 26, 26, 26, 26, 1, 26, 26, 26, 10,
    ];
    let history = history_of(&chronological);
    assert_eq!(sixteen_score(&history, &EngineConfig::default()), 16.0);
}

#[test]
fn sixteen_trigger_needs_the_full_gap() {
    // Hits three apart do not qualify.
    let chronological = [
        26u8, 26, 26, 26, 26, 26, 26, 26, 26, 26, 26, 26, 26, 26, 26, 26, 1, 26, 26, 10,
    ];
    let history = history_of(&chronological);
    assert_eq!(sixteen_score(&history, &EngineConfig::default()), 0.0);
}

#[test]
fn sixteen_trigger_respects_the_span_cap() {
    // Second hit lands seven entries later, past the capped search window.
    let chronological = [
        26u8, 26, 26, 26, 26, 26, 26, 26, 26, 26, 26, 26, 2, 26, 26, 26, 26, 26, 26, 10,
    ];
    let history = history_of(&chronological);
    assert_eq!(sixteen_score(&history, &EngineConfig::default()), 0.0);
}

#[test]
fn selection_keeps_at_most_two_ranked_candidates() {
    // Right 6 arc hits plus old Right 6 members: side-by-side outranks the
    // sector, everything else stays out.
    let mut chronological = vec![15u8, 19, 4, 21];
    chronological.extend(std::iter::repeat(26u8).take(16));
    let history = history_of(&chronological);
    let selection = select_attacks(&history, &EngineConfig::default());
    assert_eq!(selection.len(), 2);
    assert_eq!(selection[0].pattern.kind, AttackKind::SideBySide);
    assert_eq!(selection[1].pattern.label, "Right 6");
    assert_eq!(selection[1].score, 4.0);
    assert!(selection[0].score >= selection[1].score);
}

#[test]
fn selection_band_rejects_overheated_sectors() {
    // Twenty Vertical members score far above the band ceiling.
    let chronological = vec![26u8; 20];
    let history = history_of(&chronological);
    let selection = select_attacks(&history, &EngineConfig::default());
    assert!(selection
        .iter()
        .all(|candidate| candidate.pattern.label != "Vertical"));
}

#[test]
fn selection_ties_fall_back_to_catalog_order() {
    // Left 6 and Right 6 both count four old members; Left 6 is declared
    // first and takes the slot behind the side-by-side leader.
    let mut chronological = vec![22u8, 18, 29, 7, 15, 19, 4, 21];
    chronological.extend(std::iter::repeat(16u8).take(12));
    let history = history_of(&chronological);
    let selection = select_attacks(&history, &EngineConfig::default());
    assert_eq!(selection.len(), 2);
    assert_eq!(selection[0].pattern.kind, AttackKind::SideBySide);
    assert_eq!(selection[1].pattern.label, "Left 6");
}
