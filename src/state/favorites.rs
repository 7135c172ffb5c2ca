use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::MealCatalog;
use crate::models::{Meal, MealId};

/// Meal ids the user starred. Bookkeeping only; generation ignores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    ids: BTreeSet<MealId>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the favorite flag for a meal. Returns true when it is now a favorite.
    pub fn toggle(&mut self, id: MealId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: MealId) -> bool {
        self.ids.contains(&id)
    }

    /// Favorite meals still present in the catalog, in id order.
    pub fn meals<'a>(&self, catalog: &'a MealCatalog) -> Vec<&'a Meal> {
        self.ids.iter().filter_map(|id| catalog.get(*id)).collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
