use crate::api::BookResult;
use std::fmt::Write;

/// Renders a book exactly as the server sent it; redaction is the server's job.
pub fn render_book(book: &BookResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", book.title);
    let _ = writeln!(out, "  by {}", book.authors.join(", "));
    if let Some(date) = &book.published_date {
        let _ = writeln!(out, "  published: {}", date);
    }
    if let Some(pages) = book.page_count {
        let _ = writeln!(out, "  pages: {}", pages);
    }
    let _ = writeln!(out, "  {}", book.description);
    if let Some(link) = &book.info_link {
        let _ = writeln!(out, "  more: {}", link);
    }

    out
}

pub fn render_results(books: &[BookResult]) -> String {
    if books.is_empty() {
        return "No books found.\n".to_string();
    }

    books
        .iter()
        .map(render_book)
        .collect::<Vec<_>>()
        .join("\n")
}
