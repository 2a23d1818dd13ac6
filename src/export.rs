use crate::results::PageContent;

/// Separator used when flattening list-valued fields into one cell
const LIST_SEPARATOR: &str = " | ";

/// Column headers of the delimited export, in output order
const HEADERS: [&str; 11] = [
    "URL",
    "Title",
    "Meta Description",
    "Meta Keywords",
    "Headings",
    "Emails",
    "Phones",
    "Images",
    "Scripts",
    "Schema Markup",
    "Keyword Matches",
];

/// Serializes a result sequence as pretty-printed JSON
pub fn to_json(results: &[PageContent]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

/// Renders a result sequence as delimited text
///
/// One row per record under a fixed header; list-valued fields are
/// flattened with `" | "` and match entries are reduced to their
/// snippets. Every cell is double-quoted, with embedded quotes doubled.
pub fn to_delimited(results: &[PageContent]) -> String {
    let mut rows = Vec::with_capacity(results.len() + 1);
    rows.push(HEADERS.join(","));

    for result in results {
        let snippets: Vec<&str> = result.matches.iter().map(|m| m.text.as_str()).collect();
        let cells = [
            result.url.clone(),
            result.title.clone(),
            result.meta.description.clone(),
            result.meta.keywords.clone(),
            result.headings.join(LIST_SEPARATOR),
            result.contact_info.email.join(LIST_SEPARATOR),
            result.contact_info.phone.join(LIST_SEPARATOR),
            result.images.join(LIST_SEPARATOR),
            result.scripts.join(LIST_SEPARATOR),
            result.schema_markup.join(LIST_SEPARATOR),
            snippets.join(LIST_SEPARATOR),
        ];

        let row: Vec<String> = cells.iter().map(|cell| quoted(cell)).collect();
        rows.push(row.join(","));
    }

    rows.join("\n")
}

/// Double-quotes a cell, escaping embedded quotes by doubling them
fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::Match;

    fn sample() -> PageContent {
        let mut page = PageContent::empty("https://acme.test");
        page.title = "Acme".to_string();
        page.headings = vec!["One".to_string(), "Two".to_string()];
        page.contact_info.email = vec!["a@b.com".to_string()];
        page.matches = vec![Match {
            text: "a \"quoted\" snippet".to_string(),
            link: "https://acme.test".to_string(),
        }];
        page
    }

    #[test]
    fn test_delimited_header_and_rows() {
        let output = to_delimited(&[sample()]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("URL,Title,"));
        assert!(lines[1].contains("\"One | Two\""));
        assert!(lines[1].contains("\"a@b.com\""));
        assert!(lines[1].contains("\"a \"\"quoted\"\" snippet\""));
    }

    #[test]
    fn test_failed_record_exports_as_blank_row() {
        let output = to_delimited(&[PageContent::failed("https://down.test")]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[1], "\"https://down.test\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\"");
    }

    #[test]
    fn test_json_round_trips() {
        let results = vec![sample()];
        let json = to_json(&results).unwrap();
        let parsed: Vec<PageContent> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, results);
    }
}
