use super::evaluator::Evaluator;
use super::rank::Rank;
use super::ranking::Ranking;

/// A hand's strength: categorical tier plus the hole-card tie-break.
///
/// The derived order compares tier first and kicker second, which is
/// exactly the numeric score order: tiers sit 100 apart and the kicker
/// term never exceeds 14.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    ranking: Ranking,
    kicker: Rank,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn kicker(&self) -> Rank {
        self.kicker
    }
}

impl From<(Ranking, Rank)> for Strength {
    fn from((ranking, kicker): (Ranking, Rank)) -> Self {
        Self { ranking, kicker }
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        Self {
            ranking: evaluator.find_ranking(),
            kicker: evaluator.find_kicker(),
        }
    }
}

/// u16 injection
/// the numeric hand strength score, tier base plus tie-break, [102, 1014]
impl From<Strength> for u16 {
    fn from(s: Strength) -> u16 {
        s.ranking.base() + s.kicker.score()
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<14}{}", self.ranking, self.kicker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_base_plus_kicker() {
        let strength = Strength::from((Ranking::RoyalFlush, Rank::Ace));
        assert_eq!(u16::from(strength), 1014);
        let strength = Strength::from((Ranking::HighCard, Rank::Two));
        assert_eq!(u16::from(strength), 102);
    }

    #[test]
    fn tier_dominates_kicker() {
        let weak_tier = Strength::from((Ranking::ThreeOAK, Rank::Ace));
        let high_tier = Strength::from((Ranking::FourOAK, Rank::Two));
        assert!(high_tier > weak_tier);
        assert!(u16::from(high_tier) > u16::from(weak_tier));
    }

    #[test]
    fn order_matches_score_order() {
        let a = Strength::from((Ranking::TwoPair, Rank::Queen));
        let b = Strength::from((Ranking::TwoPair, Rank::Nine));
        assert!(a > b);
        assert!(u16::from(a) > u16::from(b));
    }
}
