use crate::results::{ContactInfo, Match, Meta, PageContent};
use scraper::{ElementRef, Html, Selector};

/// Maximum snippet length for keyword matches, in code points
const SNIPPET_LEN: usize = 200;

/// Parses an HTML string and extracts structured content from it
///
/// Entry point used by the acquisition strategies. The parse tree stays
/// local to this call so callers never hold it across an await point.
pub fn extract_html(html: &str, url: &str, query: Option<&str>) -> PageContent {
    let doc = Html::parse_document(html);
    extract_content(&doc, url, query)
}

/// Derives a `PageContent` from an already-parsed document
///
/// Pure traversal: missing elements and attributes degrade to empty
/// values, never errors. `query` is matched case-insensitively against
/// the trimmed text of p/li/span elements; `None` or an empty string
/// yields no matches.
pub fn extract_content(doc: &Html, url: &str, query: Option<&str>) -> PageContent {
    let mut page = PageContent::empty(url);

    page.title = select_text(doc, "title");
    page.headings = headings(doc);
    page.meta = Meta {
        description: meta_content(doc, "description"),
        keywords: meta_content(doc, "keywords"),
    };
    page.contact_info = contact_info(doc);
    page.images = attr_values(doc, "img", "src");
    page.scripts = attr_values(doc, "script", "src");
    page.schema_markup = attr_values(doc, "[itemscope][itemtype]", "itemtype");

    if let Some(keyword) = query.filter(|q| !q.is_empty()) {
        page.matches = keyword_matches(doc, url, keyword);
    }

    page
}

/// Parses an HTML string and extracts heading text only
///
/// Used by the paginated strategy, which re-reads headings from every
/// page while other fields are captured once.
pub fn headings_from_html(html: &str) -> Vec<String> {
    headings(&Html::parse_document(html))
}

/// Trimmed text of all h1-h6 elements in document order
fn headings(doc: &Html) -> Vec<String> {
    let selector = Selector::parse("h1, h2, h3, h4, h5, h6").unwrap();
    doc.select(&selector)
        .map(|el| element_text(&el).trim().to_string())
        .collect()
}

/// Concatenated text of the first element matching the selector, or ""
fn select_text(doc: &Html, selector: &str) -> String {
    let selector = Selector::parse(selector).unwrap();
    doc.select(&selector)
        .next()
        .map(|el| element_text(&el))
        .unwrap_or_default()
}

/// Content attribute of meta[name=...], or ""
fn meta_content(doc: &Html, name: &str) -> String {
    let selector = Selector::parse(&format!(r#"meta[name="{}"]"#, name)).unwrap();
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .unwrap_or_default()
        .to_string()
}

/// Collects mailto:/tel: targets from anchor hrefs, in document order
///
/// The prefix checks are independent, so an href satisfying both would
/// land in both lists. Duplicates are preserved.
fn contact_info(doc: &Html) -> ContactInfo {
    let selector = Selector::parse("a").unwrap();
    let mut info = ContactInfo::default();

    for el in doc.select(&selector) {
        let Some(href) = el.value().attr("href") else {
            continue;
        };
        if let Some(address) = href.strip_prefix("mailto:") {
            info.email.push(address.to_string());
        }
        if let Some(number) = href.strip_prefix("tel:") {
            info.phone.push(number.to_string());
        }
    }

    info
}

/// Non-empty values of an attribute over all elements matching a selector
fn attr_values(doc: &Html, selector: &str, attr: &str) -> Vec<String> {
    let selector = Selector::parse(selector).unwrap();
    doc.select(&selector)
        .filter_map(|el| el.value().attr(attr))
        .filter(|value| !value.is_empty())
        .map(|value| value.to_string())
        .collect()
}

/// Snippets of p/li/span elements whose text contains the keyword
///
/// Containment is tested case-insensitively against the trimmed text;
/// the emitted snippet keeps the original casing. An element yields at
/// most one match regardless of how often the keyword occurs in it.
fn keyword_matches(doc: &Html, url: &str, keyword: &str) -> Vec<Match> {
    let selector = Selector::parse("p, li, span").unwrap();
    let keyword = keyword.to_lowercase();

    doc.select(&selector)
        .filter_map(|el| {
            let text = element_text(&el);
            let text = text.trim();
            if text.to_lowercase().contains(&keyword) {
                Some(Match {
                    text: snippet(text),
                    link: url.to_string(),
                })
            } else {
                None
            }
        })
        .collect()
}

/// Concatenated descendant text of an element, unseparated
fn element_text(el: &ElementRef) -> String {
    el.text().collect()
}

/// First 200 code points of the text
fn snippet(text: &str) -> String {
    text.chars().take(SNIPPET_LEN).collect()
}
