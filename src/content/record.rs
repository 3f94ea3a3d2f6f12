//! Display records shown by the detail dialog
//!
//! A record is an immutable snapshot of one portfolio item. Every field besides
//! `title` and `date` is optional, and the rendering side decides what to show
//! through the accessors here rather than by probing raw fields.

use serde::{Deserialize, Serialize};

/// Static descriptive data for one portfolio item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    pub title: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl DisplayRecord {
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            ..Self::default()
        }
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_full_description(mut self, full: impl Into<String>) -> Self {
        self.full_description = Some(full.into());
        self
    }

    pub fn with_external_link(mut self, url: impl Into<String>) -> Self {
        self.external_link = Some(url.into());
        self
    }

    pub fn with_download_link(mut self, url: impl Into<String>) -> Self {
        self.download_link = Some(url.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Body text for the detail view.
    ///
    /// `full_description` takes precedence over `description`. Blank strings
    /// count as absent so an empty long form never hides the short one.
    pub fn body(&self) -> Option<&str> {
        non_blank(&self.full_description).or_else(|| non_blank(&self.description))
    }

    /// Short text for cards and listings; the inverse preference of [`body`](Self::body).
    pub fn summary(&self) -> Option<&str> {
        non_blank(&self.description).or_else(|| non_blank(&self.full_description))
    }

    pub fn image_url(&self) -> Option<&str> {
        non_blank(&self.image_url)
    }

    pub fn location(&self) -> Option<&str> {
        non_blank(&self.location)
    }

    pub fn category(&self) -> Option<&str> {
        non_blank(&self.category)
    }

    pub fn external_link(&self) -> Option<&str> {
        non_blank(&self.external_link)
    }

    pub fn download_link(&self) -> Option<&str> {
        non_blank(&self.download_link)
    }

    /// Tags with blank labels dropped, in catalog order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str).filter(|t| !t.trim().is_empty())
    }

    pub fn has_tags(&self) -> bool {
        self.tags().next().is_some()
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}
