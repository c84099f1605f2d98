use super::estimate::Estimate;
use super::session::Session;
use crate::cards::Deck;
use crate::cards::Evaluator;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::cards::Street;
use crate::cards::Strength;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Monte Carlo win-probability estimator.
///
/// Every call re-simulates from scratch. Each trial rebuilds a working
/// deck from the complement of the session's known cards, deals two
/// random cards to every remaining opponent, completes the board to five,
/// and scores everyone against it; the hero takes the trial when no
/// opponent strength exceeds theirs, ties included. Nothing persists
/// across calls and no state is shared, so independent call sites may run
/// estimators concurrently. The trial loop is the dominant cost of the
/// whole crate: O(trials x active players x evaluation).
#[derive(Debug)]
pub struct Estimator {
    trials: usize,
    rng: SmallRng,
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(crate::TRIALS)
    }
}

impl Estimator {
    pub fn new(trials: usize) -> Self {
        assert!(trials > 0);
        Self {
            trials,
            rng: SmallRng::from_os_rng(),
        }
    }

    /// a fixed seed reproduces the exact same sequence of deals
    pub fn seeded(trials: usize, seed: u64) -> Self {
        assert!(trials > 0);
        Self {
            trials,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Estimate the hero's probability of winning the session's hand.
    ///
    /// None while fewer than two players are active or the hero has no
    /// cards yet: an expected table state, not a fault.
    pub fn estimate(&mut self, session: &Session) -> Result<Option<Estimate>, crate::Error> {
        if session.active() < 2 {
            return Ok(None);
        }
        let Some(hole) = session.hole() else {
            return Ok(None);
        };
        let rivals = session.active() - 1;
        let board = Hand::from(session.board());
        let seen = session.seen();
        let mut wins = 0;
        for _ in 0..self.trials {
            if self.trial(hole, board, seen, rivals)? {
                wins += 1;
            }
        }
        Ok(Some(Estimate::from((wins, self.trials))))
    }

    /// one random completion of the hand, scored once
    fn trial(
        &mut self,
        hole: Hole,
        board: Hand,
        seen: Hand,
        rivals: usize,
    ) -> Result<bool, crate::Error> {
        let mut deck = Deck::from(seen.complement());
        let mut holes = Vec::with_capacity(rivals);
        for _ in 0..rivals {
            holes.push(
                deck.hole(&mut self.rng)
                    .ok_or(crate::Error::DeckUnderflow)?,
            );
        }
        let mut public = board;
        while public.size() < Street::Rive.n_observed() {
            let card = deck
                .draw(&mut self.rng)
                .ok_or(crate::Error::DeckUnderflow)?;
            public = Hand::add(public, Hand::from(card));
        }
        let hero = Strength::from(Evaluator::from((hole, public)));
        Ok(holes
            .into_iter()
            .map(|rival| Strength::from(Evaluator::from((rival, public))))
            .all(|rival| rival <= hero))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn session(hole: &str, board: &str, active: usize) -> Session {
        let mut session = Session::new();
        session.reset(active);
        session.deal(Hole::try_from(hole).unwrap()).unwrap();
        for code in board.split_whitespace() {
            session.reveal(Card::try_from(code).unwrap()).unwrap();
        }
        session
    }

    #[test]
    fn lone_player_has_no_data() {
        let session = session("Ad Ac", "", 1);
        let mut estimator = Estimator::seeded(100, 0);
        assert_eq!(estimator.estimate(&session).unwrap(), None);
    }

    #[test]
    fn empty_table_has_no_data() {
        let mut empty = Session::new();
        empty.reset(0);
        let mut estimator = Estimator::seeded(100, 0);
        assert_eq!(estimator.estimate(&empty).unwrap(), None);
    }

    #[test]
    fn undealt_hero_has_no_data() {
        let mut session = Session::new();
        session.reset(4);
        let mut estimator = Estimator::seeded(100, 0);
        assert_eq!(estimator.estimate(&session).unwrap(), None);
    }

    #[test]
    fn probability_is_bounded() {
        let session = session("7c 2d", "", 6);
        let mut estimator = Estimator::seeded(1_000, 0);
        let p = estimator.estimate(&session).unwrap().unwrap().probability();
        assert!((0.0..=1.0).contains(&p));
    }

    /// pocket aces heads-up land near 0.85; the band is wide since this
    /// is Monte Carlo, not an exact equity
    #[test]
    fn pocket_aces_heads_up() {
        let session = session("Ad Ac", "", 2);
        let mut estimator = Estimator::seeded(crate::TRIALS, 7);
        let p = estimator.estimate(&session).unwrap().unwrap().probability();
        assert!((0.78..=0.92).contains(&p), "p = {}", p);
    }

    /// a made royal flush on the river cannot lose a trial
    #[test]
    fn made_royal_never_loses() {
        let session = session("Ad Kd", "Qd Jd Td 2c 3h", 5);
        let mut estimator = Estimator::seeded(1_000, 3);
        let p = estimator.estimate(&session).unwrap().unwrap().probability();
        assert_eq!(p, 1.0);
    }

    #[test]
    fn full_ring_does_not_underflow() {
        let session = session("Ad Ac", "", 9);
        let mut estimator = Estimator::seeded(1_000, 1);
        assert!(estimator.estimate(&session).unwrap().is_some());
    }

    #[test]
    fn seeded_runs_reproduce() {
        let session = session("Ad Ac", "Kd 7s 2h", 4);
        let a = Estimator::seeded(2_000, 9).estimate(&session).unwrap();
        let b = Estimator::seeded(2_000, 9).estimate(&session).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn every_call_resimulates() {
        let session = session("Ad Ac", "", 2);
        let mut estimator = Estimator::seeded(1_000, 5);
        let a = estimator.estimate(&session).unwrap().unwrap();
        let b = estimator.estimate(&session).unwrap().unwrap();
        assert_eq!(a.trials(), b.trials());
        // the rng advances, so the tallies differ while staying close
        assert!((a.probability() - b.probability()).abs() < 0.1);
    }
}
