//! The optional additional-links document (`additional-links.json`)
//!
//! A flat list of named link groups shown in their own section, independent
//! of the selected game version.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalLinksDoc {
    #[serde(default)]
    pub additional_links: Vec<LinkGroup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkGroup {
    pub name: String,
    #[serde(default)]
    pub links: Vec<LinkRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkRef {
    pub title: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_document() {
        let doc: AdditionalLinksDoc = serde_json::from_str(
            r#"{
                "additionalLinks": [
                    {
                        "name": "Server",
                        "links": [
                            {"title": "Map", "url": "https://example.com/map"},
                            {"title": "Wiki", "url": "https://example.com/wiki"}
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(doc.additional_links.len(), 1);
        assert_eq!(doc.additional_links[0].name, "Server");
        assert_eq!(doc.additional_links[0].links[1].title, "Wiki");
    }

    #[test]
    fn test_empty_document() {
        let doc: AdditionalLinksDoc = serde_json::from_str("{}").unwrap();
        assert!(doc.additional_links.is_empty());
    }
}
