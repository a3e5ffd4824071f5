/// Reason accumulator with set membership and stable first-seen order.
/// Two rules contributing the same reason text record it once, but each
/// still contributes its own score.
#[derive(Debug, Default)]
pub struct ReasonSet {
    entries: Vec<&'static str>,
}

impl ReasonSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, reason: &'static str) {
        if !self.entries.contains(&reason) {
            self.entries.push(reason);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.entries.into_iter().map(ToString::to_string).collect()
    }
}
