//! Selection policies: how a scored candidate list becomes one choice.
//!
//! - `UniformRandom`: any legal move, equally likely
//! - `Greedy`: the highest score, first one wins ties
//! - `MixedGreedy`: `Greedy` with some probability, `UniformRandom` otherwise
//!
//! Each `Difficulty` maps to one of these via `policy_for`.

use crate::core::{Difficulty, GameRng, Move};

/// A candidate with its evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

/// Policy for picking one candidate.
pub trait SelectionPolicy: Send + Sync {
    /// Index of the chosen candidate, `None` only for an empty list.
    fn choose(&self, candidates: &[ScoredMove], rng: &mut GameRng) -> Option<usize>;
}

/// Uniform random choice. Ignores scores.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRandom;

impl SelectionPolicy for UniformRandom {
    fn choose(&self, candidates: &[ScoredMove], rng: &mut GameRng) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }
        Some(rng.gen_index(candidates.len()))
    }
}

/// Highest score; ties go to the earliest candidate. Never draws from the
/// RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct Greedy;

impl SelectionPolicy for Greedy {
    fn choose(&self, candidates: &[ScoredMove], _rng: &mut GameRng) -> Option<usize> {
        best_index(candidates)
    }
}

/// Greedy with probability `best_probability`, uniform random otherwise.
#[derive(Clone, Copy, Debug)]
pub struct MixedGreedy {
    best_probability: f64,
}

impl MixedGreedy {
    /// Probability of the greedy choice at Medium difficulty.
    pub const MEDIUM: f64 = 0.7;

    /// Out-of-range probabilities are clamped to `[0, 1]`; NaN becomes 0.
    #[must_use]
    pub fn new(best_probability: f64) -> Self {
        let best_probability = if best_probability.is_nan() {
            0.0
        } else {
            best_probability.clamp(0.0, 1.0)
        };
        Self { best_probability }
    }

    /// Probability of taking the best-scoring candidate.
    #[must_use]
    pub fn best_probability(&self) -> f64 {
        self.best_probability
    }
}

impl Default for MixedGreedy {
    fn default() -> Self {
        Self::new(Self::MEDIUM)
    }
}

impl SelectionPolicy for MixedGreedy {
    fn choose(&self, candidates: &[ScoredMove], rng: &mut GameRng) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }
        if rng.gen_bool(self.best_probability) {
            Greedy.choose(candidates, rng)
        } else {
            UniformRandom.choose(candidates, rng)
        }
    }
}

/// The policy a computer player of the given strength uses.
#[must_use]
pub fn policy_for(difficulty: Difficulty) -> Box<dyn SelectionPolicy> {
    match difficulty {
        Difficulty::Easy => Box::new(UniformRandom),
        Difficulty::Medium => Box::new(MixedGreedy::default()),
        Difficulty::Hard => Box::new(Greedy),
    }
}

/// Index of the first candidate with the maximum score.
fn best_index(candidates: &[ScoredMove]) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (i, c) in candidates.iter().enumerate() {
        if best.map_or(true, |(_, score)| c.score > score) {
            best = Some((i, c.score));
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MoveKind, Position};

    fn candidates(scores: &[i32]) -> Vec<ScoredMove> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| ScoredMove {
                mv: Move::new(Position::new(i, 0), MoveKind::Normal),
                score,
            })
            .collect()
    }

    #[test]
    fn test_greedy_picks_max() {
        let mut rng = GameRng::new(1);
        assert_eq!(Greedy.choose(&candidates(&[3, 9, -4, 7]), &mut rng), Some(1));
    }

    #[test]
    fn test_greedy_tie_goes_to_first() {
        let mut rng = GameRng::new(1);
        assert_eq!(Greedy.choose(&candidates(&[5, 8, 8, 2, 8]), &mut rng), Some(1));
        assert_eq!(Greedy.choose(&candidates(&[-3, -3]), &mut rng), Some(0));
    }

    #[test]
    fn test_empty_candidates() {
        let mut rng = GameRng::new(1);
        assert_eq!(Greedy.choose(&[], &mut rng), None);
        assert_eq!(UniformRandom.choose(&[], &mut rng), None);
        assert_eq!(MixedGreedy::default().choose(&[], &mut rng), None);
    }

    #[test]
    fn test_uniform_stays_in_range() {
        let mut rng = GameRng::new(99);
        let list = candidates(&[0, 0, 0]);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let i = UniformRandom.choose(&list, &mut rng).unwrap();
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_mixed_greedy_extremes() {
        let list = candidates(&[1, 50, 2, 3]);
        let mut rng = GameRng::new(5);

        let always = MixedGreedy::new(1.0);
        for _ in 0..50 {
            assert_eq!(always.choose(&list, &mut rng), Some(1));
        }

        // Out-of-range probabilities are clamped
        assert_eq!(MixedGreedy::new(3.5).best_probability(), 1.0);
        assert_eq!(MixedGreedy::new(-1.0).best_probability(), 0.0);
    }

    #[test]
    fn test_mixed_greedy_nan_probability() {
        let policy = MixedGreedy::new(f64::NAN);
        assert_eq!(policy.best_probability(), 0.0);

        let list = candidates(&[1, 50, 2]);
        let mut rng = GameRng::new(12);
        for _ in 0..20 {
            assert!(policy.choose(&list, &mut rng).is_some());
        }
    }

    #[test]
    fn test_mixed_greedy_mostly_best() {
        let list = candidates(&[1, 2, 3, 4, 5, 6, 7, 100, 8, 9]);
        let mut rng = GameRng::new(2024);
        let policy = MixedGreedy::default();

        let best = (0..1000)
            .filter(|_| policy.choose(&list, &mut rng) == Some(7))
            .count();

        // 0.7 + 0.3 / 10 = 0.73 expected
        assert!((650..=810).contains(&best), "best chosen {best} times");
    }

    #[test]
    fn test_policy_for_difficulty() {
        let list = candidates(&[1, 40, 2]);
        let mut rng = GameRng::new(3);
        assert_eq!(policy_for(Difficulty::Hard).choose(&list, &mut rng), Some(1));
        assert!(policy_for(Difficulty::Easy).choose(&list, &mut rng).is_some());
        assert!(policy_for(Difficulty::Medium).choose(&list, &mut rng).is_some());
    }
}
