/// Shrinks the requested bar width so `label  count bar` fits in `terminal_columns`.
/// Without a terminal the request is kept. Never returns less than 1.
pub fn fit_width(
    requested: usize,
    terminal_columns: Option<u16>,
    label_width: usize,
    count_width: usize,
) -> usize {
    let requested = requested.max(1);
    let Some(columns) = terminal_columns else {
        return requested;
    };
    let available = usize::from(columns).saturating_sub(label_width + 2 + count_width);
    requested.min(available).max(1)
}

/// Width of the terminal attached to stdout, if any.
pub fn terminal_columns() -> Option<u16> {
    console::Term::stdout().size_checked().map(|(_, cols)| cols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_terminal_keeps_request() {
        assert_eq!(fit_width(50, None, 10, 5), 50);
    }

    #[test]
    fn wide_terminal_keeps_request() {
        assert_eq!(fit_width(50, Some(200), 10, 5), 50);
    }

    #[test]
    fn narrow_terminal_caps_width() {
        // 40 - (7 + 2 + 5)
        assert_eq!(fit_width(50, Some(40), 7, 5), 26);
    }

    #[test]
    fn wide_counts_take_bar_space() {
        // 40 - (4 + 2 + 8)
        assert_eq!(fit_width(50, Some(40), 4, 8), 26);
    }

    #[test]
    fn never_below_one() {
        assert_eq!(fit_width(50, Some(5), 10, 5), 1);
        assert_eq!(fit_width(0, None, 10, 5), 1);
    }
}
