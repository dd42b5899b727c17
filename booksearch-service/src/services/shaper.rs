use crate::models::catalog::CatalogItem;
use crate::models::responses::BookResult;

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const LOGIN_TO_VIEW: &str = "Login to view full description.";

/// Maps catalog items to outward records, preserving order.
///
/// `description` and `pageCount` are only exposed to authenticated callers;
/// everyone else gets the placeholder description and no page count,
/// whatever the catalog sent. `publishedDate` and `infoLink` are never gated.
pub fn shape(items: Vec<CatalogItem>, authenticated: bool) -> Vec<BookResult> {
    items
        .into_iter()
        .map(|item| shape_item(item, authenticated))
        .collect()
}

fn shape_item(item: CatalogItem, authenticated: bool) -> BookResult {
    let (description, page_count) = if authenticated {
        (
            item.description.unwrap_or_else(|| LOGIN_TO_VIEW.to_string()),
            item.page_count,
        )
    } else {
        (LOGIN_TO_VIEW.to_string(), None)
    };

    BookResult {
        title: item.title,
        authors: item
            .authors
            .unwrap_or_else(|| vec![UNKNOWN_AUTHOR.to_string()]),
        description,
        page_count,
        published_date: item.published_date,
        info_link: item.info_link,
    }
}
