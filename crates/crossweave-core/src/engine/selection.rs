use crate::core::models::word::Word;
use crate::core::scoring::overlap::letter_overlap;
use rand::Rng;
use std::collections::HashSet;
use tracing::trace;

/// Upper bound (exclusive) of the random tie-breaker added to every candidate score.
const JITTER: f64 = 0.5;

/// Picks `count` distinct words from `pool`, favouring words that share letters
/// with those already picked.
///
/// The first word is drawn uniformly; each following pick maximizes the summed
/// letter overlap against the current selection plus a small random jitter.
/// Pools with fewer distinct words than requested are returned whole, in pool
/// order. A pool of exactly `count` words still goes through the draw, so
/// repeated calls hand the layout search different word orders. The bias only
/// makes an interlocking layout likely, it does not guarantee one.
pub fn select_words(pool: &[Word], count: usize, rng: &mut impl Rng) -> Vec<Word> {
    let mut seen = HashSet::new();
    let mut remaining: Vec<&Word> = pool
        .iter()
        .filter(|w| seen.insert(w.text()))
        .collect();

    if remaining.len() < count {
        return remaining.into_iter().cloned().collect();
    }
    if count == 0 {
        return Vec::new();
    }

    let seed = remaining.remove(rng.gen_range(0..remaining.len()));
    trace!(seed = seed.text(), "Seed word chosen.");
    let mut picked = vec![seed];

    while picked.len() < count && !remaining.is_empty() {
        let mut best_idx = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (idx, candidate) in remaining.iter().enumerate() {
            let overlap: usize = picked
                .iter()
                .map(|p| letter_overlap(candidate.text(), p.text()))
                .sum();
            let score = overlap as f64 + rng.gen_range(0.0..JITTER);
            if score > best_score {
                best_score = score;
                best_idx = idx;
            }
        }
        let choice = remaining.remove(best_idx);
        trace!(word = choice.text(), score = best_score, "Word selected.");
        picked.push(choice);
    }

    picked.into_iter().cloned().collect()
}
