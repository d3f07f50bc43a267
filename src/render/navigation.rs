//! Link strip between the pages of one category

use super::paginate::page_name;

/// Page counts up to this are listed in full
pub const FULL_STRIP_MAX: usize = 9;

/// Pages shown at either end of a collapsed strip
const CUTOFF: usize = 5;
const HALF_CUT: usize = CUTOFF / 2;

pub const ELLIPSIS: &str = "…";

/// Separates the centered window from the ellipses around it
pub const WIDE_SPACER: &str = "&emsp;";

fn page_link(page: usize, current: usize, num_pages: usize) -> String {
    let label = page + 1;
    if page == current {
        format!("**{}**", label)
    } else {
        format!("[&nbsp;{}&nbsp;]({})", label, page_name(page, num_pages))
    }
}

/// Render the navigation strip for `current` out of `num_pages`
///
/// Small page counts list every page. Larger ones always show the first and
/// last page, a contiguous run next to whichever end the current page is
/// near, and otherwise a five-page window around the current page with
/// ellipses standing in for the skipped ranges.
pub fn render_navigation(current: usize, num_pages: usize) -> String {
    if num_pages <= FULL_STRIP_MAX {
        return (0..num_pages)
            .map(|page| page_link(page, current, num_pages))
            .collect::<Vec<_>>()
            .join(" ");
    }

    let last = num_pages - 1;
    let is_low = current < CUTOFF;
    let is_high = current > last - CUTOFF;

    let mut parts = vec![page_link(0, current, num_pages)];

    if is_low {
        parts.extend((1..=CUTOFF + 1).map(|page| page_link(page, current, num_pages)));
    } else {
        parts.push(ELLIPSIS.to_string());
    }

    if !is_low && !is_high {
        parts.push(WIDE_SPACER.to_string());
        parts.extend(
            (current - HALF_CUT..=current + HALF_CUT)
                .map(|page| page_link(page, current, num_pages)),
        );
        parts.push(WIDE_SPACER.to_string());
    }

    if is_high {
        parts.extend((last - CUTOFF - 1..last).map(|page| page_link(page, current, num_pages)));
    } else {
        parts.push(ELLIPSIS.to_string());
    }

    parts.push(page_link(last, current, num_pages));
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page() {
        assert_eq!(render_navigation(0, 1), "**1**");
    }

    #[test]
    fn test_small_strip_links_every_page() {
        let nav = render_navigation(1, 3);
        assert_eq!(
            nav,
            format!(
                "[&nbsp;1&nbsp;](index.md) **2** [&nbsp;3&nbsp;]({})",
                page_name(2, 3)
            )
        );
    }

    #[test]
    fn test_low_region_has_no_leading_ellipsis() {
        let nav = render_navigation(4, 20);
        let labels: Vec<&str> = nav.split(' ').collect();
        assert_eq!(labels[0], "[&nbsp;1&nbsp;](index.md)");
        assert_eq!(labels[4], "**5**");
        assert_eq!(labels[7], ELLIPSIS);
        assert_eq!(labels.len(), 9);
    }

    #[test]
    fn test_first_page_outside_low_region() {
        let nav = render_navigation(5, 20);
        let expected = format!("[&nbsp;1&nbsp;](index.md) {} {}", ELLIPSIS, WIDE_SPACER);
        assert!(nav.starts_with(&expected));
        assert!(nav.contains("**6**"));
        assert_eq!(nav.matches(ELLIPSIS).count(), 2);
    }

    #[test]
    fn test_high_boundary() {
        // 14 is not high for 20 pages (14 > 19 - 5 is false)
        assert_eq!(render_navigation(14, 20).matches(ELLIPSIS).count(), 2);
        assert_eq!(render_navigation(15, 20).matches(ELLIPSIS).count(), 1);
    }
}
