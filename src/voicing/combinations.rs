/// Lazy cross product over per-slot option lists.
///
/// Yields every combination which picks one option per slot, in odometer order: the last
/// slot varies fastest and the first slot slowest. The iterator keeps an index per slot
/// instead of recursing, so its depth does not grow with the slot count, and it can be
/// restarted with [`Combinations::reset`].
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    options: &'a [Vec<T>],
    indices: Vec<usize>,
    finished: bool,
}

impl<'a, T: Clone> Combinations<'a, T> {
    /// Create a new iterator. Yields nothing when there are no slots or any slot is empty.
    pub fn new(options: &'a [Vec<T>]) -> Self {
        let indices = vec![0; options.len()];
        let finished = Self::is_exhausted(options);
        Self {
            options,
            indices,
            finished,
        }
    }

    /// Restart the iteration from the first combination.
    pub fn reset(&mut self) {
        self.indices.iter_mut().for_each(|index| *index = 0);
        self.finished = Self::is_exhausted(self.options);
    }

    /// Total number of combinations.
    pub fn total(&self) -> usize {
        if Self::is_exhausted(self.options) {
            0
        } else {
            self.options.iter().map(Vec::len).product()
        }
    }

    fn is_exhausted(options: &[Vec<T>]) -> bool {
        options.is_empty() || options.iter().any(Vec::is_empty)
    }

    fn advance(&mut self) {
        for slot in (0..self.indices.len()).rev() {
            self.indices[slot] += 1;
            if self.indices[slot] < self.options[slot].len() {
                return;
            }
            self.indices[slot] = 0;
        }
        self.finished = true;
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let combination = self
            .indices
            .iter()
            .zip(self.options)
            .map(|(index, options)| options[*index].clone())
            .collect();
        self.advance();
        Some(combination)
    }
}

// --------------------------------------------------------------------------------------------------
