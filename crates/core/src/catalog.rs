use serde::{Deserialize, Serialize};

/// Physical order of pockets on a European wheel, clockwise from zero.
/// Used only for adjacency lookups.
pub const WHEEL_ORDER: [u8; 37] = [
    0, 32, 15, 19, 4, 21, 2, 25, 17, 34, 6, 27, 13, 36, 11, 30, 8, 23, 10, 5,
    24, 16, 33, 1, 20, 14, 31, 9, 22, 18, 29, 7, 28, 12, 35, 3, 26,
];

pub const SIXTEEN_NUMBERS: [u8; 16] = [
    0, 1, 2, 3, 10, 11, 12, 13, 20, 21, 22, 23, 30, 31, 32, 33,
];

const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sector {
    pub label: &'static str,
    pub numbers: &'static [u8],
}

/// Sector sets in declaration order. Declaration order doubles as the
/// tie-break order during selection.
pub const SECTORS: [Sector; 5] = [
    Sector {
        label: "Left 6",
        numbers: &[22, 18, 29, 7, 28, 12],
    },
    Sector {
        label: "Right 6",
        numbers: &[15, 19, 4, 21, 2, 25],
    },
    Sector {
        label: "Vertical",
        numbers: &[0, 5, 8, 10, 23, 24, 26, 32],
    },
    Sector {
        label: "Orfelins",
        numbers: &[1, 6, 9, 14, 17, 20, 31, 34],
    },
    Sector {
        label: "Two Towers",
        numbers: &[27, 30, 36, 28, 7, 12, 11, 13],
    },
];

pub const SIDE_BY_SIDE_LABEL: &str = "3 Side by Side";
pub const SIXTEEN_LABEL: &str = "16 Numbers";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Color {
    Green,
    Red,
    Black,
}

pub fn color_of(number: u8) -> Color {
    if number == 0 {
        Color::Green
    } else if RED_NUMBERS.contains(&number) {
        Color::Red
    } else {
        Color::Black
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AttackKind {
    Sectoral,
    SideBySide,
    SixteenNumbers,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttackPattern {
    pub kind: AttackKind,
    pub label: String,
    pub numbers: Vec<u8>,
}

impl AttackPattern {
    pub fn sectoral(sector: &Sector) -> Self {
        Self {
            kind: AttackKind::Sectoral,
            label: sector.label.to_string(),
            numbers: sector.numbers.to_vec(),
        }
    }

    /// The five-number window around a wheel triple. Computed per evaluation,
    /// never part of the static catalog.
    pub fn side_by_side(numbers: Vec<u8>) -> Self {
        Self {
            kind: AttackKind::SideBySide,
            label: SIDE_BY_SIDE_LABEL.to_string(),
            numbers,
        }
    }

    pub fn sixteen() -> Self {
        Self {
            kind: AttackKind::SixteenNumbers,
            label: SIXTEEN_LABEL.to_string(),
            numbers: SIXTEEN_NUMBERS.to_vec(),
        }
    }

    pub fn contains(&self, number: u8) -> bool {
        self.numbers.contains(&number)
    }

    /// Draws allowed for a match to still count as a win.
    pub fn win_limit(&self) -> u32 {
        match self.kind {
            AttackKind::Sectoral => {
                if self.numbers.len() == 6 {
                    11
                } else {
                    8
                }
            }
            AttackKind::SideBySide => 13,
            AttackKind::SixteenNumbers => 3,
        }
    }
}

/// The fixed patterns in catalog order: the five sectors, then the
/// sixteen-number set. The side-by-side window is evaluation-time only.
pub fn static_patterns() -> Vec<AttackPattern> {
    let mut patterns: Vec<AttackPattern> = SECTORS.iter().map(AttackPattern::sectoral).collect();
    patterns.push(AttackPattern::sixteen());
    patterns
}

pub fn wheel_index(number: u8) -> Option<usize> {
    WHEEL_ORDER.iter().position(|&pocket| pocket == number)
}
