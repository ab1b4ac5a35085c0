use crate::schedule::Schedule;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// How the appearance-equality gate treats a schedule.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FairnessPolicy {
    /// Every player's count must equal every other player's count.
    #[default]
    Strict,
    /// Compares against player 0 only, and passes whenever player 0 never plays.
    /// Matches the player-0 gate of the older generator; its schedules are not reproduced.
    Legacy,
}

/// Equal appearances for every player.
pub fn all_good(schedule: &Schedule, n: usize) -> bool {
    is_fair(schedule, n, FairnessPolicy::Strict)
}

pub fn is_fair(schedule: &Schedule, n: usize, policy: FairnessPolicy) -> bool {
    let counts = schedule.play_counts(n);
    let counts = counts.as_slice();
    let Some(&first) = counts.first() else {
        return true;
    };

    match policy {
        FairnessPolicy::Strict => counts.iter().all(|&c| c == first),
        FairnessPolicy::Legacy => first == 0 || counts.iter().all(|&c| c == first),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_strict_rejects_uneven() {
        let s = Schedule::new(vec![vec![[0, 1, 2, 3]], vec![[0, 1, 2, 4]]]);
        assert!(!all_good(&s, 5));
    }

    #[test]
    fn test_legacy_short_circuits_on_idle_player_zero() {
        // Player 0 never plays; 1..=4 play unevenly.
        let s = Schedule::new(vec![vec![[1, 2, 3, 4]], vec![[1, 2, 3, 5]]]);
        assert!(is_fair(&s, 6, FairnessPolicy::Legacy));
        assert!(!is_fair(&s, 6, FairnessPolicy::Strict));
    }

    #[test]
    fn test_policies_agree_when_player_zero_plays() {
        let s = Schedule::new(vec![vec![[0, 1, 2, 3]], vec![[4, 5, 6, 7]]]);
        assert!(is_fair(&s, 8, FairnessPolicy::Legacy));
        assert!(is_fair(&s, 8, FairnessPolicy::Strict));

        let s = Schedule::new(vec![vec![[0, 1, 2, 3]]]);
        assert!(!is_fair(&s, 8, FairnessPolicy::Legacy));
    }

    #[test]
    fn test_policy_parses_from_str() {
        assert_eq!(
            FairnessPolicy::from_str("legacy").unwrap(),
            FairnessPolicy::Legacy
        );
        assert_eq!(FairnessPolicy::Strict.to_string(), "strict");
    }
}
