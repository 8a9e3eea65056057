//! Состояние пагинации списка.

use contracts::shared::list::PageSpec;
use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: usize,
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn set_page(&mut self, index: usize) {
        self.page_index = index;
    }

    /// Смена размера страницы сбрасывает позицию на первую страницу
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page_index = 0;
    }

    /// Rows needed to pad the last page of a client-side slice to full height.
    pub fn empty_row_count(&self, total: usize) -> usize {
        if self.page_index == 0 {
            return 0;
        }
        ((self.page_index + 1) * self.page_size).saturating_sub(total)
    }

    /// Количество страниц (минимум 1, чтобы "1 / 1" показывалось и для пустого списка)
    pub fn total_pages(&self, total: usize) -> usize {
        if total == 0 {
            1
        } else {
            total.div_ceil(self.page_size)
        }
    }

    /// Границы текущей страницы при локальной нарезке уже загруженного списка
    pub fn window(&self, total: usize) -> Range<usize> {
        let start = (self.page_index * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    /// Pulls the page index back when the result shrank under it.
    /// Returns `true` if the index changed.
    pub fn clamp_to(&mut self, total: usize) -> bool {
        let last = self.total_pages(total) - 1;
        if self.page_index > last {
            self.page_index = last;
            true
        } else {
            false
        }
    }

    pub fn to_page_spec(&self) -> PageSpec {
        PageSpec::new(self.page_index, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_page_size_resets_index() {
        let mut state = PaginationState::new(5);
        state.set_page(3);
        assert_eq!(state.page_index, 3);
        state.set_page_size(10);
        assert_eq!(state.page_index, 0);
        assert_eq!(state.page_size, 10);
    }

    #[test]
    fn test_empty_row_count() {
        let state = PaginationState {
            page_index: 2,
            page_size: 10,
        };
        assert_eq!(state.empty_row_count(25), 5);
        assert_eq!(state.empty_row_count(40), 0);

        let first = PaginationState::new(10);
        assert_eq!(first.empty_row_count(3), 0);
    }

    #[test]
    fn test_total_pages() {
        let state = PaginationState::new(10);
        assert_eq!(state.total_pages(0), 1);
        assert_eq!(state.total_pages(10), 1);
        assert_eq!(state.total_pages(11), 2);
    }

    #[test]
    fn test_window() {
        let mut state = PaginationState::new(10);
        state.set_page(2);
        assert_eq!(state.window(25), 20..25);
        state.set_page(5);
        assert_eq!(state.window(25), 25..25);
    }

    #[test]
    fn test_clamp_to_shrunk_result() {
        let mut state = PaginationState::new(5);
        state.set_page(4);
        assert!(state.clamp_to(12));
        assert_eq!(state.page_index, 2);
        assert!(!state.clamp_to(12));
        assert!(state.clamp_to(0));
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let mut state = PaginationState::new(0);
        assert_eq!(state.page_size, 1);
        state.set_page_size(0);
        assert_eq!(state.to_page_spec(), PageSpec::new(0, 1));
    }
}
