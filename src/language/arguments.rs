use super::Value;

/// The values supplied to a formatting call, addressed from one. Position 0
/// is a sentinel that never resolves, so `[1]` in a template names the first
/// value the caller passed.
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a> {
    values: &'a [Value],
}

impl<'a> Arguments<'a> {
    pub fn new(values: &'a [Value]) -> Arguments<'a> {
        Arguments { values }
    }

    pub fn get(&self, position: usize) -> Option<&'a Value> {
        position
            .checked_sub(1)
            .and_then(|i| self.values.get(i))
    }

    pub fn contains(&self, position: usize) -> bool {
        position >= 1 && position <= self.values.len()
    }

    pub fn len(&self) -> usize {
        self.values
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.values
            .is_empty()
    }

    /// Values strictly after the given position.
    pub fn after(&self, position: usize) -> &'a [Value] {
        let start = position.min(self.values.len());
        &self.values[start..]
    }
}
