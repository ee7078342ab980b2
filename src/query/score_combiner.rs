use crate::query::Scorer;
use crate::Score;

/// Accumulates the scores of the children positioned on a disjunction's
/// current doc.
pub trait ScoreCombiner: Default + Clone + Copy {
    /// Folds the scorer's current score into the combined value.
    fn update<TScorer: Scorer>(&mut self, scorer: &mut TScorer);

    /// Resets the combiner for the next doc.
    fn clear(&mut self);

    /// Returns the combined score.
    fn score(&self) -> Score;
}

/// Sums the scores of the matching children.
#[derive(Default, Clone, Copy)]
pub struct SumCombiner {
    score: Score,
}

impl ScoreCombiner for SumCombiner {
    fn update<TScorer: Scorer>(&mut self, scorer: &mut TScorer) {
        self.score += scorer.score();
    }

    fn clear(&mut self) {
        self.score = 0f32;
    }

    fn score(&self) -> Score {
        self.score
    }
}

/// Takes the best single matching child, plus `tie_breaker` times the
/// contributions of the others.
///
/// A `tie_breaker` of 0 keeps only the best child's score; a
/// `tie_breaker` of 1 degenerates into [`SumCombiner`].
#[derive(Default, Clone, Copy)]
pub struct DisjunctionMaxCombiner {
    max: Score,
    sum: Score,
    tie_breaker: Score,
}

impl DisjunctionMaxCombiner {
    /// Creates a `DisjunctionMaxCombiner` with the given `tie_breaker`.
    pub fn with_tie_breaker(tie_breaker: Score) -> DisjunctionMaxCombiner {
        DisjunctionMaxCombiner {
            max: 0f32,
            sum: 0f32,
            tie_breaker,
        }
    }
}

impl ScoreCombiner for DisjunctionMaxCombiner {
    fn update<TScorer: Scorer>(&mut self, scorer: &mut TScorer) {
        let score = scorer.score();
        self.max = Score::max(score, self.max);
        self.sum += score;
    }

    fn clear(&mut self) {
        self.max = 0f32;
        self.sum = 0f32;
    }

    fn score(&self) -> Score {
        self.max + (self.sum - self.max) * self.tie_breaker
    }
}
