//! Difficulty tiers
//!
//! Five named tiers keyed by cumulative score threshold. The active tier is
//! always the highest one whose threshold the score has reached; thresholds
//! are strictly increasing so the derivation is unambiguous.

use serde::{Deserialize, Serialize};

/// Static per-tier configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelConfig {
    pub name: &'static str,
    pub description: &'static str,
    /// Obstacle fall speed, pixels per tick
    pub obstacle_speed: f32,
    /// Coin fall speed, pixels per tick
    pub coin_speed: f32,
    /// Probability per tick that anything spawns
    pub spawn_rate: f32,
    /// Probability that a spawn is an obstacle rather than a coin
    pub obstacle_chance: f32,
    /// Cumulative score at which this tier becomes active
    pub score_threshold: u32,
    /// Accent color for the renderers
    pub color: &'static str,
    /// Parallax background scroll speed
    pub background_speed: f32,
}

/// The five difficulty tiers, easiest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LevelTier {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    Master,
}

/// Tier table, ordered by ascending score threshold
static LEVEL_TABLE: [LevelConfig; 5] = [
    LevelConfig {
        name: "Beginner",
        description: "Easy cruise through the neon highway",
        obstacle_speed: 2.0,
        coin_speed: 2.0,
        spawn_rate: 0.018,
        obstacle_chance: 0.35,
        score_threshold: 0,
        color: "#00ff00",
        background_speed: 1.5,
    },
    LevelConfig {
        name: "Intermediate",
        description: "Picking up speed on the cyber road",
        obstacle_speed: 3.0,
        coin_speed: 3.0,
        spawn_rate: 0.023,
        obstacle_chance: 0.45,
        score_threshold: 2500,
        color: "#ffff00",
        background_speed: 2.0,
    },
    LevelConfig {
        name: "Advanced",
        description: "High-speed synthwave racing",
        obstacle_speed: 4.0,
        coin_speed: 4.0,
        spawn_rate: 0.028,
        obstacle_chance: 0.55,
        score_threshold: 5000,
        color: "#ff8800",
        background_speed: 2.5,
    },
    LevelConfig {
        name: "Expert",
        description: "Lightning fast neon nightmare",
        obstacle_speed: 5.0,
        coin_speed: 5.0,
        spawn_rate: 0.033,
        obstacle_chance: 0.65,
        score_threshold: 8000,
        color: "#ff0066",
        background_speed: 3.0,
    },
    LevelConfig {
        name: "Master",
        description: "Ultimate synthwave challenge",
        obstacle_speed: 6.0,
        coin_speed: 6.0,
        spawn_rate: 0.04,
        obstacle_chance: 0.75,
        score_threshold: 12_000,
        color: "#8800ff",
        background_speed: 3.5,
    },
];

impl LevelTier {
    /// All tiers, easiest first
    pub const ALL: [LevelTier; 5] = [
        LevelTier::Beginner,
        LevelTier::Intermediate,
        LevelTier::Advanced,
        LevelTier::Expert,
        LevelTier::Master,
    ];

    /// Static configuration for this tier
    pub fn config(self) -> &'static LevelConfig {
        &LEVEL_TABLE[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        self.config().name
    }

    /// The tier after this one, or `None` at the top
    pub fn next(self) -> Option<LevelTier> {
        let idx = self as usize + 1;
        LevelTier::ALL.get(idx).copied()
    }

    /// The highest tier whose threshold the score has reached
    pub fn for_score(score: u32) -> LevelTier {
        LevelTier::ALL
            .iter()
            .rev()
            .copied()
            .find(|tier| score >= tier.config().score_threshold)
            .unwrap_or(LevelTier::Beginner)
    }

    /// Progress through this tier toward the next, in [0, 1]
    ///
    /// The top tier always reports 1.
    pub fn progress(self, score: u32) -> f32 {
        match self.next() {
            Some(next) => {
                let current = self.config().score_threshold;
                let range = next.config().score_threshold - current;
                let in_level = score.saturating_sub(current);
                (in_level as f32 / range as f32).clamp(0.0, 1.0)
            }
            None => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tier_from_score_matches_table() {
        assert_eq!(LevelTier::for_score(0), LevelTier::Beginner);
        assert_eq!(LevelTier::for_score(2499), LevelTier::Beginner);
        assert_eq!(LevelTier::for_score(2500), LevelTier::Intermediate);
        assert_eq!(LevelTier::for_score(4999), LevelTier::Intermediate);
        assert_eq!(LevelTier::for_score(5000), LevelTier::Advanced);
        assert_eq!(LevelTier::for_score(8000), LevelTier::Expert);
        assert_eq!(LevelTier::for_score(12_000), LevelTier::Master);
        assert_eq!(LevelTier::for_score(u32::MAX), LevelTier::Master);
    }

    #[test]
    fn test_thresholds_strictly_increasing() {
        for pair in LevelTier::ALL.windows(2) {
            assert!(pair[0].config().score_threshold < pair[1].config().score_threshold);
        }
    }

    #[test]
    fn test_progress_at_boundaries() {
        assert_eq!(LevelTier::Beginner.progress(0), 0.0);
        assert_eq!(LevelTier::Beginner.progress(1250), 0.5);
        assert_eq!(LevelTier::Beginner.progress(2500), 1.0);
        // Top tier saturates at 1
        assert_eq!(LevelTier::Master.progress(12_000), 1.0);
        assert_eq!(LevelTier::Master.progress(50_000), 1.0);
    }

    #[test]
    fn test_next_chain() {
        assert_eq!(LevelTier::Beginner.next(), Some(LevelTier::Intermediate));
        assert_eq!(LevelTier::Expert.next(), Some(LevelTier::Master));
        assert_eq!(LevelTier::Master.next(), None);
    }

    proptest! {
        #[test]
        fn prop_tier_monotonic_in_score(score in 0u32..20_000, bump in 0u32..20_000) {
            let lo = LevelTier::for_score(score) as usize;
            let hi = LevelTier::for_score(score + bump) as usize;
            prop_assert!(hi >= lo);
        }

        #[test]
        fn prop_progress_in_unit_interval(score in 0u32..100_000) {
            let tier = LevelTier::for_score(score);
            let p = tier.progress(score);
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }
}
