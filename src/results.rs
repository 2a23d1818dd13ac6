use serde::{Deserialize, Serialize};

/// Structured content extracted from a single page
///
/// One instance is produced per input URL, whether or not acquisition
/// succeeded. Field names serialize in the camelCase wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    /// URL of the page, echoed verbatim from the request
    pub url: String,

    /// Document title ("" if absent)
    pub title: String,

    /// Meta tag content
    pub meta: Meta,

    /// Trimmed text of all h1-h6 elements in document order
    pub headings: Vec<String>,

    /// Emails and phone numbers found in mailto:/tel: links
    pub contact_info: ContactInfo,

    /// Non-empty src attributes of img elements
    pub images: Vec<String>,

    /// Non-empty src attributes of script elements
    pub scripts: Vec<String>,

    /// itemtype values of elements declaring both itemscope and itemtype
    pub schema_markup: Vec<String>,

    /// Keyword matches (empty unless a query was supplied)
    pub matches: Vec<Match>,

    /// True if acquisition or extraction failed for this URL; all other
    /// fields are empty in that case
    #[serde(default)]
    pub error: bool,
}

/// Content of the description/keywords meta tags ("" when absent)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub description: String,
    pub keywords: String,
}

/// Contact links harvested from anchors, in document order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Vec<String>,
    pub phone: Vec<String>,
}

/// A keyword match: a snippet of element text and the page it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// First 200 characters of the matching element's trimmed text
    pub text: String,

    /// URL of the page the snippet was found on
    pub link: String,
}

impl PageContent {
    /// Create an empty record for a URL (all fields blank, error unset)
    pub fn empty(url: &str) -> Self {
        Self {
            url: url.to_string(),
            title: String::new(),
            meta: Meta::default(),
            headings: Vec::new(),
            contact_info: ContactInfo::default(),
            images: Vec::new(),
            scripts: Vec::new(),
            schema_markup: Vec::new(),
            matches: Vec::new(),
            error: false,
        }
    }

    /// Create the sentinel record for a URL whose acquisition failed
    pub fn failed(url: &str) -> Self {
        Self {
            error: true,
            ..Self::empty(url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let mut page = PageContent::empty("https://example.com");
        page.schema_markup.push("https://schema.org/Article".to_string());
        page.contact_info.email.push("a@b.com".to_string());

        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("schemaMarkup").is_some());
        assert!(json.get("contactInfo").is_some());
        assert_eq!(json["contactInfo"]["email"][0], "a@b.com");
        assert_eq!(json["meta"]["description"], "");
        assert_eq!(json["error"], false);
    }

    #[test]
    fn test_failed_record_is_blank() {
        let page = PageContent::failed("https://example.com/missing");
        assert!(page.error);
        assert_eq!(page.url, "https://example.com/missing");
        assert!(page.title.is_empty());
        assert!(page.headings.is_empty());
        assert!(page.contact_info.email.is_empty());
        assert!(page.contact_info.phone.is_empty());
        assert!(page.matches.is_empty());
    }
}
