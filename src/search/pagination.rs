//! Pagination bar numbers / 分页栏页码计算

use crate::error::{BoardError, Result};

/// Default number of page links in the bar / 默认分页栏长度
pub const DEFAULT_BAR_LENGTH: i64 = 5;

/// Compute the page indices to render in a paging control.
///
/// The window is centered on `current` and shifted toward either end near the
/// boundaries, so it never leaves `[0, total_pages)`. An even `bar_length`
/// puts the extra slot after `current`.
pub fn window(current: i64, total_pages: i64, bar_length: i64) -> Result<Vec<i64>> {
    if current < 0 {
        return Err(BoardError::invalid(format!("current page index must be >= 0, got {}", current)));
    }
    if total_pages < 0 {
        return Err(BoardError::invalid(format!("total pages must be >= 0, got {}", total_pages)));
    }
    if bar_length < 1 {
        return Err(BoardError::invalid(format!("bar length must be >= 1, got {}", bar_length)));
    }
    if total_pages == 0 {
        return Ok(Vec::new());
    }

    // A current index past the end collapses to the last page
    let current = current.min(total_pages - 1);
    let half = bar_length / 2;
    let start = (current - half).max(0);
    let end = start.saturating_add(bar_length - 1).min(total_pages - 1);
    let start = (end - bar_length + 1).max(0);

    Ok((start..=end).collect())
}

/// Window calculator bound to a configured bar length
#[derive(Debug, Clone, Copy)]
pub struct PaginationWindow {
    bar_length: i64,
}

impl PaginationWindow {
    pub fn new(bar_length: i64) -> Result<Self> {
        if bar_length < 1 {
            return Err(BoardError::invalid(format!("bar length must be >= 1, got {}", bar_length)));
        }
        Ok(Self { bar_length })
    }

    pub fn bar_length(&self) -> i64 {
        self.bar_length
    }

    pub fn numbers(&self, current: i64, total_pages: i64) -> Result<Vec<i64>> {
        window(current, total_pages, self.bar_length)
    }
}

impl Default for PaginationWindow {
    fn default() -> Self {
        Self { bar_length: DEFAULT_BAR_LENGTH }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_at_start() {
        assert_eq!(window(0, 20, 5).unwrap(), vec![0, 1, 2, 3, 4]);
        assert_eq!(window(1, 20, 5).unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_window_at_end() {
        assert_eq!(window(19, 20, 5).unwrap(), vec![15, 16, 17, 18, 19]);
        assert_eq!(window(18, 20, 5).unwrap(), vec![15, 16, 17, 18, 19]);
    }

    #[test]
    fn test_window_centered() {
        assert_eq!(window(10, 20, 5).unwrap(), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_window_no_pages() {
        assert!(window(0, 0, 5).unwrap().is_empty());
    }

    #[test]
    fn test_window_fewer_pages_than_bar() {
        assert_eq!(window(0, 3, 5).unwrap(), vec![0, 1, 2]);
        assert_eq!(window(2, 3, 5).unwrap(), vec![0, 1, 2]);
        assert_eq!(window(0, 1, 5).unwrap(), vec![0]);
    }

    #[test]
    fn test_window_even_bar_biases_toward_end() {
        assert_eq!(window(10, 20, 4).unwrap(), vec![8, 9, 10, 11]);
        assert_eq!(window(0, 20, 4).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(window(19, 20, 4).unwrap(), vec![16, 17, 18, 19]);
    }

    #[test]
    fn test_window_contains_current_and_stays_in_range() {
        for total in 1..=12 {
            for current in 0..total {
                for bar in 1..=7 {
                    let w = window(current, total, bar).unwrap();
                    assert!(w.contains(&current), "{} {} {}", current, total, bar);
                    assert!(w.iter().all(|p| *p >= 0 && *p < total));
                    assert_eq!(w.len() as i64, bar.min(total));
                }
            }
        }
    }

    #[test]
    fn test_window_rejects_bad_input() {
        assert!(matches!(window(-1, 20, 5), Err(BoardError::InvalidArgument(_))));
        assert!(matches!(window(0, -1, 5), Err(BoardError::InvalidArgument(_))));
        assert!(matches!(window(0, 20, 0), Err(BoardError::InvalidArgument(_))));
        assert!(PaginationWindow::new(0).is_err());
    }

    #[test]
    fn test_window_current_past_end() {
        assert_eq!(window(25, 20, 5).unwrap(), vec![15, 16, 17, 18, 19]);
        assert_eq!(window(i64::MAX, 20, 5).unwrap(), vec![15, 16, 17, 18, 19]);
        assert_eq!(window(i64::MAX, i64::MAX, 3).unwrap().len(), 3);
        assert_eq!(window(0, 4, i64::MAX).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_window_is_pure() {
        assert_eq!(window(7, 30, 5).unwrap(), window(7, 30, 5).unwrap());
        assert_eq!(PaginationWindow::default().numbers(7, 30).unwrap(), vec![5, 6, 7, 8, 9]);
    }
}
