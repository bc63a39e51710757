//! Inline mention syntax and synthetic label format.
//!
//! A mention token looks like `Cat:/w/en/123/Cat`: a surface form, the
//! marker `:/w/`, then an entity path `language/id/title`. The entity path
//! starts on the first byte after the full marker.

use serde::{Deserialize, Serialize};

/// How synthetic labels are spelled: `<prefix><id><separator><title>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelFormat {
    pub prefix: String,
    pub separator: String,
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self {
            prefix: "t:".to_string(),
            separator: ":".to_string(),
        }
    }
}

impl LabelFormat {
    /// Format a label from an id and an already-canonical title.
    pub fn label(&self, id: &str, title: &str) -> String {
        let mut label =
            String::with_capacity(self.prefix.len() + id.len() + self.separator.len() + title.len());
        label.push_str(&self.prefix);
        label.push_str(id);
        label.push_str(&self.separator);
        label.push_str(title);
        label
    }

    /// Label for a document: interior spaces of the title become underscores.
    pub fn document_label(&self, id: &str, title: &str) -> String {
        self.label(id, &title.replace(' ', "_"))
    }
}

/// Marker and path layout of inline entity mentions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MentionSyntax {
    /// Delimiter between surface form and entity path
    pub marker: String,
    /// Separator between the entity path components
    pub separator: char,
    /// Format of resolved labels
    pub label: LabelFormat,
}

impl Default for MentionSyntax {
    fn default() -> Self {
        Self {
            marker: ":/w/".to_string(),
            separator: '/',
            label: LabelFormat::default(),
        }
    }
}

impl MentionSyntax {
    /// Split a raw token into `(surface, entity_path)`.
    ///
    /// Only the first occurrence of the marker counts, and it must start
    /// strictly after the beginning of the token.
    pub fn split<'a>(&self, token: &'a str) -> Option<(&'a str, &'a str)> {
        if self.marker.is_empty() {
            return None;
        }
        match token.find(self.marker.as_str()) {
            Some(0) | None => None,
            Some(at) => Some((&token[..at], &token[at + self.marker.len()..])),
        }
    }

    /// Parse an entity path into its components.
    pub fn parse_path<'a>(&self, path: &'a str) -> Option<EntityPath<'a>> {
        EntityPath::parse(path, self.separator)
    }

    /// Resolve an entity path to its canonical label, if it has enough parts.
    pub fn resolve(&self, path: &str) -> Option<String> {
        self.parse_path(path)
            .map(|parsed| self.label.label(parsed.id, parsed.title))
    }
}

/// The components of an entity path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityPath<'a> {
    pub language: &'a str,
    pub id: &'a str,
    /// Everything after the second separator, separators included
    pub title: &'a str,
}

impl<'a> EntityPath<'a> {
    /// Split into `language`, `id` and `title`.
    ///
    /// `None` with fewer than three parts, an id that is not an optionally
    /// negative run of ASCII digits, or an empty title.
    pub fn parse(path: &'a str, separator: char) -> Option<Self> {
        let mut parts = path.splitn(3, separator);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(language), Some(id), Some(title)) if is_numeric_id(id) && !title.is_empty() => {
                Some(Self {
                    language,
                    id,
                    title,
                })
            }
            _ => None,
        }
    }
}

fn is_numeric_id(id: &str) -> bool {
    let digits = id.strip_prefix('-').unwrap_or(id);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_boundary() {
        let syntax = MentionSyntax::default();
        assert_eq!(
            syntax.split("Cat:/w/en/123/Cat"),
            Some(("Cat", "en/123/Cat"))
        );
    }

    #[test]
    fn test_split_requires_surface() {
        let syntax = MentionSyntax::default();
        assert_eq!(syntax.split(":/w/en/123/Cat"), None);
        assert_eq!(syntax.split("plain"), None);
    }

    #[test]
    fn test_split_uses_first_marker() {
        let syntax = MentionSyntax::default();
        assert_eq!(
            syntax.split("a:/w/en/1/b:/w/x"),
            Some(("a", "en/1/b:/w/x"))
        );
    }

    #[test]
    fn test_parse_path() {
        let path = EntityPath::parse("en/123/Cat", '/').unwrap();
        assert_eq!(path.language, "en");
        assert_eq!(path.id, "123");
        assert_eq!(path.title, "Cat");
    }

    #[test]
    fn test_parse_path_title_keeps_separators() {
        let path = EntityPath::parse("en/9/AC/DC", '/').unwrap();
        assert_eq!(path.title, "AC/DC");
    }

    #[test]
    fn test_parse_path_too_short() {
        assert!(EntityPath::parse("en/123", '/').is_none());
        assert!(EntityPath::parse("en", '/').is_none());
    }

    #[test]
    fn test_parse_path_rejects_non_numeric_id() {
        assert!(EntityPath::parse("en/abc/Cat", '/').is_none());
        assert!(EntityPath::parse("en/12a/Cat", '/').is_none());
        assert!(EntityPath::parse("en/-/Cat", '/').is_none());
        assert_eq!(EntityPath::parse("en/-4/Cat", '/').unwrap().id, "-4");
    }

    #[test]
    fn test_parse_path_rejects_empty_parts() {
        assert!(EntityPath::parse("en//", '/').is_none());
        assert!(EntityPath::parse("en//Cat", '/').is_none());
        assert!(EntityPath::parse("en/12/", '/').is_none());
    }

    #[test]
    fn test_labels() {
        let format = LabelFormat::default();
        assert_eq!(format.label("123", "Cat"), "t:123:Cat");
        assert_eq!(format.document_label("5", "Dog Breeds"), "t:5:Dog_Breeds");
    }

    #[test]
    fn test_resolve() {
        let syntax = MentionSyntax::default();
        assert_eq!(syntax.resolve("en/123/Cat").as_deref(), Some("t:123:Cat"));
        assert_eq!(syntax.resolve("en/123"), None);
        assert_eq!(syntax.resolve("en/abc/Cat"), None);
        assert_eq!(syntax.resolve("en//"), None);
    }
}
