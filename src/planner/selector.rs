use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{Meal, MealId};

/// Pick a meal close to `target` calories from `pool`, skipping `excluded` ids.
///
/// Candidates are ranked by absolute calorie distance and one of the
/// `top_matches` closest is drawn uniformly, so repeated calls with the same
/// target vary. Returns `None` when every candidate is excluded.
pub fn select_meal<'a, R: Rng + ?Sized>(
    pool: &[&'a Meal],
    target: f64,
    excluded: &HashSet<MealId>,
    top_matches: usize,
    rng: &mut R,
) -> Option<&'a Meal> {
    let mut candidates: Vec<&'a Meal> = pool
        .iter()
        .copied()
        .filter(|m| !excluded.contains(&m.id))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    // Stable sort keeps catalog order among equal distances.
    candidates.sort_by(|a, b| {
        a.calorie_distance(target)
            .partial_cmp(&b.calorie_distance(target))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let take = top_matches.max(1).min(candidates.len());
    candidates[..take].choose(rng).copied()
}

/// Uniform pick among pool meals not in `excluded`.
pub fn pick_random_meal<'a, R: Rng + ?Sized>(
    pool: &[&'a Meal],
    excluded: &HashSet<MealId>,
    rng: &mut R,
) -> Option<&'a Meal> {
    let available: Vec<&'a Meal> = pool
        .iter()
        .copied()
        .filter(|m| !excluded.contains(&m.id))
        .collect();

    available.choose(rng).copied()
}
