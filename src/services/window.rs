/// The visible prefix of the filtered view, measured in whole pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page_count: usize,
    page_size: usize,
}

impl PageWindow {
    pub const DEFAULT_PAGE_SIZE: usize = 20;

    pub fn new(page_size: usize) -> Self {
        Self {
            page_count: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn capacity(&self) -> usize {
        self.page_count.saturating_mul(self.page_size)
    }

    pub fn visible_len(&self, filtered_len: usize) -> usize {
        self.capacity().min(filtered_len)
    }

    pub fn visible<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        &filtered[..self.visible_len(filtered.len())]
    }

    pub fn has_more(&self, filtered_len: usize) -> bool {
        self.visible_len(filtered_len) < filtered_len
    }

    pub fn reset(&mut self) {
        self.page_count = 1;
    }

    /// Reveal one more page, unless everything filtered is already visible.
    pub fn grow(&mut self, filtered_len: usize) -> bool {
        if !self.has_more(filtered_len) {
            return false;
        }
        self.page_count += 1;
        true
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE_SIZE)
    }
}
