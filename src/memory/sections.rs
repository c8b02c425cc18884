//! Prefix-summed list of section sizes (rows or columns).

/// Sizes of consecutive sections with cached leading offsets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionList {
    sizes: Vec<f32>,
    /// `offsets[i]` is the leading edge of section `i`; one extra trailing entry
    offsets: Vec<f32>,
}

impl SectionList {
    pub fn uniform(count: usize, size: f32) -> Self {
        Self::from_sizes(vec![size.max(0.0); count])
    }

    pub fn from_sizes(sizes: Vec<f32>) -> Self {
        let mut list = Self {
            sizes,
            offsets: Vec::new(),
        };
        list.rebuild_from(0);
        list
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Size of section `index`, zero when out of range.
    pub fn size(&self, index: usize) -> f32 {
        self.sizes.get(index).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f32 {
        self.offsets.last().copied().unwrap_or(0.0)
    }

    /// Leading edge of section `index` (the total extent past the end).
    pub fn offset_of(&self, index: usize) -> f32 {
        self.offsets
            .get(index.min(self.sizes.len()))
            .copied()
            .unwrap_or(0.0)
    }

    /// Section containing `offset`, if any.
    pub fn index_at(&self, offset: f32) -> Option<usize> {
        if offset < 0.0 || offset >= self.total() {
            return None;
        }
        // First trailing edge past the offset
        let index = self.offsets[1..].partition_point(|edge| *edge <= offset);
        (index < self.sizes.len()).then_some(index)
    }

    /// Set the size of section `index`; negative sizes clamp to zero.
    pub fn resize(&mut self, index: usize, size: f32) -> bool {
        let Some(slot) = self.sizes.get_mut(index) else {
            return false;
        };
        *slot = size.max(0.0);
        self.rebuild_from(index);
        true
    }

    fn rebuild_from(&mut self, index: usize) {
        self.offsets.truncate(index + 1);
        if self.offsets.is_empty() {
            self.offsets.push(0.0);
        }
        let mut edge = self.offsets[index];
        for size in &self.sizes[index..] {
            edge += size;
            self.offsets.push(edge);
        }
    }
}
