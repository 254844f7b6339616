//! Windowed pagination calculator
//!
//! Computes the ordered list of UI pagination controls for a given
//! (current page, total pages) pair: a fixed radius of page numbers
//! around the current page, first/last shortcuts, and ellipses where
//! pages are elided. Pure arithmetic, recomputed fresh on every render.

/// Number of pages shown on each side of the current page by default.
pub const DEFAULT_RADIUS: u64 = 2;

/// One pagination control descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageItem {
    /// Previous-page control; disabled on the first page
    Prev { enabled: bool },
    /// A concrete page number; `active` marks the current page.
    /// First/last shortcuts outside the window appear as inactive entries.
    Page { number: u64, active: bool },
    /// Marks an elided run of pages
    Ellipsis,
    /// Next-page control; disabled on the last page
    Next { enabled: bool },
}

/// Compute the pagination control window.
///
/// Precondition: `current_page` must lie within `[1, total_pages]`.
/// Out-of-range input is a caller bug; this function does not clamp.
pub fn compute_window(current_page: u64, total_pages: u64, radius: u64) -> Vec<PageItem> {
    // A single page (or none) renders no controls at all
    if total_pages <= 1 {
        return Vec::new();
    }

    let mut items = Vec::new();
    items.push(PageItem::Prev {
        enabled: current_page > 1,
    });

    // First-page shortcut, with an ellipsis when pages are elided before
    // the window
    if current_page > radius + 1 {
        items.push(PageItem::Page {
            number: 1,
            active: false,
        });
        if current_page > radius + 2 {
            items.push(PageItem::Ellipsis);
        }
    }

    let start = current_page.saturating_sub(radius).max(1);
    let end = (current_page + radius).min(total_pages);
    for number in start..=end {
        items.push(PageItem::Page {
            number,
            active: number == current_page,
        });
    }

    // Last-page shortcut, with an ellipsis when pages are elided after
    // the window
    if current_page + radius < total_pages {
        if current_page + radius + 1 < total_pages {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page {
            number: total_pages,
            active: false,
        });
    }

    items.push(PageItem::Next {
        enabled: current_page < total_pages,
    });

    items
}
