//! Dice-related types
//!
//! This module contains the die kinds the tray offers, the rule used to roll
//! each of them, and the rule used to display their results.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// All supported die kinds, in the order they appear on the tray
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DieKind {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
}

impl DieKind {
    pub const ALL: [DieKind; 7] = [
        DieKind::D4,
        DieKind::D6,
        DieKind::D8,
        DieKind::D10,
        DieKind::D12,
        DieKind::D20,
        DieKind::D100,
    ];

    pub fn sides(&self) -> u32 {
        match self {
            DieKind::D4 => 4,
            DieKind::D6 => 6,
            DieKind::D8 => 8,
            DieKind::D10 => 10,
            DieKind::D12 => 12,
            DieKind::D20 => 20,
            DieKind::D100 => 100,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DieKind::D4 => "d4",
            DieKind::D6 => "d6",
            DieKind::D8 => "d8",
            DieKind::D10 => "d10",
            DieKind::D12 => "d12",
            DieKind::D20 => "d20",
            DieKind::D100 => "d100",
        }
    }

    /// Face shown before the die has ever been rolled (and after a reset)
    pub fn default_face(&self) -> &'static str {
        match self {
            DieKind::D4 => "4",
            DieKind::D6 => "6",
            DieKind::D8 => "8",
            DieKind::D10 => "0",
            DieKind::D12 => "12",
            DieKind::D20 => "20",
            DieKind::D100 => "00",
        }
    }

    /// Position of this kind in [`DieKind::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn parse(s: &str) -> Option<DieKind> {
        match s.trim().to_lowercase().as_str() {
            "d4" => Some(DieKind::D4),
            "d6" => Some(DieKind::D6),
            "d8" => Some(DieKind::D8),
            "d10" => Some(DieKind::D10),
            "d12" => Some(DieKind::D12),
            "d20" => Some(DieKind::D20),
            "d100" | "d%" => Some(DieKind::D100),
            _ => None,
        }
    }

    /// Roll one die of this kind.
    ///
    /// The d10 reads 0-9 and the percentile die reads the tens 00-90; every
    /// other kind reads 1 through its side count.
    pub fn roll(&self, rng: &mut impl Rng) -> u32 {
        match self {
            DieKind::D10 => rng.gen_range(0..10),
            DieKind::D100 => rng.gen_range(0..10) * 10,
            other => rng.gen_range(1..=other.sides()),
        }
    }

    /// Display string for a result of this kind
    pub fn format(&self, value: u32) -> String {
        match self {
            DieKind::D100 => format!("{:02}", value),
            _ => value.to_string(),
        }
    }

    /// Accent color used for the die's button on the tray
    pub fn color(&self) -> Color {
        match self {
            DieKind::D4 => Color::srgb(0.3, 0.4, 0.9),    // Blue
            DieKind::D6 => Color::srgb(0.35, 0.35, 0.38), // Smoke
            DieKind::D8 => Color::srgb(0.6, 0.2, 0.8),    // Purple
            DieKind::D10 => Color::srgb(0.2, 0.65, 0.6),  // Teal
            DieKind::D12 => Color::srgb(0.95, 0.5, 0.1),  // Orange
            DieKind::D20 => Color::srgb(0.85, 0.7, 0.15), // Gold
            DieKind::D100 => Color::srgb(0.8, 0.25, 0.3), // Red
        }
    }
}

impl std::fmt::Display for DieKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One realized outcome for one die
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    pub kind: DieKind,
    pub value: u32,
}

impl RollResult {
    pub fn roll(kind: DieKind, rng: &mut impl Rng) -> Self {
        Self {
            kind,
            value: kind.roll(rng),
        }
    }

    pub fn formatted(&self) -> String {
        self.kind.format(self.value)
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.formatted())
    }
}
