//! `page` subcommand: read one page of the local catalog
//!
//! Prints the records and, when there is more than one page, a control
//! strip computed by the pagination window calculator.

use artcat_core::errors::Result;
use artcat_core::paging::{compute_window, PageItem, DEFAULT_RADIUS};
use artcat_engine::CatalogService;
use clap::Args;

#[derive(Debug, Args)]
pub struct PageArgs {
    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: u64,

    /// Records per page
    #[arg(long, default_value_t = 20)]
    pub limit: u64,

    /// Emit the page as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(db: &str, args: PageArgs) -> Result<()> {
    let service = CatalogService::open(db)?;
    let page = service.get_page(args.page, args.limit)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&page).unwrap_or_default()
        );
        return Ok(());
    }

    for record in &page.records {
        println!(
            "{}:{}:{}  (updated {})",
            record.group_id, record.artifact_id, record.version, record.last_updated_ms
        );
    }

    let total_pages = page.total.div_ceil(args.limit);
    println!(
        "{} artifacts, page {} of {}",
        page.total,
        args.page,
        total_pages.max(1)
    );

    // The window calculator requires an in-range current page
    if total_pages > 1 && args.page >= 1 && args.page <= total_pages {
        println!(
            "{}",
            render_strip(&compute_window(args.page, total_pages, DEFAULT_RADIUS))
        );
    }

    Ok(())
}

/// Render window items the way the UI draws them: `(«) 1 … 4 [5] 6 … 10 »`
fn render_strip(items: &[PageItem]) -> String {
    let parts: Vec<String> = items
        .iter()
        .map(|item| match item {
            PageItem::Prev { enabled: true } => "«".to_string(),
            PageItem::Prev { enabled: false } => "(«)".to_string(),
            PageItem::Next { enabled: true } => "»".to_string(),
            PageItem::Next { enabled: false } => "(»)".to_string(),
            PageItem::Page {
                number,
                active: true,
            } => format!("[{number}]"),
            PageItem::Page {
                number,
                active: false,
            } => number.to_string(),
            PageItem::Ellipsis => "…".to_string(),
        })
        .collect();
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_strip_middle_window() {
        let strip = render_strip(&compute_window(5, 10, 2));
        assert_eq!(strip, "« 1 … 3 4 [5] 6 7 … 10 »");
    }

    #[test]
    fn test_render_strip_first_page() {
        let strip = render_strip(&compute_window(1, 3, 2));
        assert_eq!(strip, "(«) [1] 2 3 »");
    }
}
