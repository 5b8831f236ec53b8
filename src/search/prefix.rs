use crate::database::models::Subcategory;

/// Subcategory ids matched by a prefix, plus the binary-search iterations spent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixMatch {
    pub ids: Vec<i64>,
    pub steps: u32,
}

/// Subcategory names lower-cased and sorted ascending, ties kept in input order
#[derive(Debug, Clone)]
pub struct NameIndex {
    entries: Vec<(String, i64)>,
}

impl NameIndex {
    pub fn build(subcategories: &[Subcategory]) -> Self {
        let mut entries: Vec<(String, i64)> = subcategories
            .iter()
            .map(|s| (s.name.to_lowercase(), s.id))
            .collect();
        // stable: equal names keep their storage order
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every id, in sorted-name order
    pub fn ids(&self) -> Vec<i64> {
        self.entries.iter().map(|(_, id)| *id).collect()
    }

    /// Binary search for the smallest index whose name starts with `prefix`.
    ///
    /// `prefix` must already be lower-cased. A hit keeps narrowing to the left,
    /// so the returned index is the leftmost match. Returns the index (if any)
    /// and the number of iterations performed.
    pub fn leftmost_match(&self, prefix: &str) -> (Option<usize>, u32) {
        let mut steps = 0u32;
        let mut first = None;
        let mut low: isize = 0;
        let mut high: isize = self.entries.len() as isize - 1;

        while low <= high {
            steps += 1;
            let mid = (low + high) / 2;
            let name = self.entries[mid as usize].0.as_str();
            if name.starts_with(prefix) {
                first = Some(mid as usize);
                high = mid - 1;
            } else if name < prefix {
                low = mid + 1;
            } else {
                high = mid - 1;
            }
        }

        (first, steps)
    }

    /// All ids whose name starts with `prefix` (lower-cased).
    ///
    /// An empty prefix matches every entry without searching. Otherwise the run
    /// is grown outward from the leftmost hit and stops at the first non-match
    /// on each side, relying on matches being contiguous in sorted order.
    pub fn prefix_run(&self, prefix: &str) -> PrefixMatch {
        if prefix.is_empty() {
            return PrefixMatch { ids: self.ids(), steps: 0 };
        }

        let (first, steps) = self.leftmost_match(prefix);
        let Some(first) = first else {
            return PrefixMatch { ids: vec![], steps };
        };

        let matches = |i: usize| self.entries[i].0.starts_with(prefix);

        let mut start = first;
        while start > 0 && matches(start - 1) {
            start -= 1;
        }
        let mut end = first + 1;
        while end < self.entries.len() && matches(end) {
            end += 1;
        }

        PrefixMatch {
            ids: self.entries[start..end].iter().map(|(_, id)| *id).collect(),
            steps,
        }
    }
}
