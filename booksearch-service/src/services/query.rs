use crate::utils::text::non_blank;

const TITLE_TAG: &str = "intitle:";
const AUTHOR_TAG: &str = "inauthor:";
const TERM_SEPARATOR: &str = "+";

/// Builds the catalog `q` value from the optional search terms.
///
/// Blank terms emit no tag. Each value is percent-encoded as a URL component
/// so reserved characters (`+`, `:`, spaces) cannot leak into the tag syntax.
/// Callers reject the both-blank case before getting here.
pub fn build_query(title: Option<&str>, author: Option<&str>) -> String {
    let mut terms = Vec::with_capacity(2);

    if let Some(title) = non_blank(title) {
        terms.push(format!("{}{}", TITLE_TAG, url_escape::encode_component(title)));
    }
    if let Some(author) = non_blank(author) {
        terms.push(format!("{}{}", AUTHOR_TAG, url_escape::encode_component(author)));
    }

    terms.join(TERM_SEPARATOR)
}
