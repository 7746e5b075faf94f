/// Move selection cursor one item up, wrapping to the last item.
pub fn select_prev(selected: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    (selected + item_count - 1) % item_count
}

/// Move selection cursor one item down, wrapping to the first item.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    (selected + 1) % item_count
}

/// Previous page, or `None` when already on the first one.
pub fn page_prev(page: u8) -> Option<u8> {
    page.checked_sub(1)
}

/// Next page, or `None` when already on the last one.
pub fn page_next(page: u8, max_pages: u8) -> Option<u8> {
    if page + 1 < max_pages {
        Some(page + 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_in_both_directions() {
        assert_eq!(select_next(3, 4), 0);
        assert_eq!(select_prev(0, 4), 3);
        assert_eq!(select_next(1, 4), 2);
        assert_eq!(select_prev(2, 4), 1);
    }

    #[test]
    fn selection_is_periodic_with_item_count() {
        for start in 0..4 {
            let mut fwd = start;
            let mut back = start;
            for step in 1..=8 {
                fwd = select_next(fwd, 4);
                back = select_prev(back, 4);
                assert_eq!(fwd, (start + step) % 4);
                assert_eq!(back, (start + 4 * 8 - step) % 4);
            }
            assert_eq!(fwd, start);
            assert_eq!(back, start);
        }
    }

    #[test]
    fn empty_list_pins_selection_to_zero() {
        assert_eq!(select_next(0, 0), 0);
        assert_eq!(select_prev(0, 0), 0);
    }

    #[test]
    fn page_bounds_are_not_crossed() {
        assert_eq!(page_prev(0), None);
        assert_eq!(page_prev(2), Some(1));
        assert_eq!(page_next(0, 3), Some(1));
        assert_eq!(page_next(2, 3), None);
        assert_eq!(page_next(0, 1), None);
    }
}
