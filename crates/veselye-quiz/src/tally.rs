//! Answer tally with first-seen ordering.

use veselye_core::enums::Category;

/// Per-category answer counts, kept in the order each category first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: Vec<(Category, usize)>,
}

impl Tally {
    /// Count a sequence of answers.
    pub fn from_answers(answers: &[Category]) -> Self {
        let mut tally = Self::default();
        for &category in answers {
            tally.record(category);
        }
        tally
    }

    pub fn record(&mut self, category: Category) {
        match self.counts.iter_mut().find(|(c, _)| *c == category) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((category, 1)),
        }
    }

    pub fn count(&self, category: Category) -> usize {
        self.counts
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0, |(_, count)| *count)
    }

    /// Category with the highest count. Equal counts go to the one seen first.
    pub fn leader(&self) -> Option<Category> {
        let mut best: Option<(Category, usize)> = None;
        for &(category, count) in &self.counts {
            // Strictly greater only, so an earlier category keeps a tie.
            let replace = match best {
                None => true,
                Some((_, top)) => count > top,
            };
            if replace {
                best = Some((category, count));
            }
        }
        best.map(|(category, _)| category)
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[(Category, usize)] {
        &self.counts
    }
}
