//! Portfolio content catalog
//!
//! The catalog is a static, ordered description of everything the page shows.
//! A built-in copy is compiled into the binary; a JSON file with the same shape
//! can replace it at startup.

mod record;

pub use record::DisplayRecord;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

/// Catalog loading errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub profile: Profile,
    #[serde(default)]
    pub timeline: Vec<TimelineYear>,
    #[serde(default)]
    pub projects: Vec<ProjectCard>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub initials: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub location: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
    pub headline: String,
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(default)]
    pub credentials: Vec<Credential>,
    #[serde(default)]
    pub focus: Vec<FocusItem>,
    /// Site the relative links of the profile are resolved against
    #[serde(default)]
    pub site_url: Option<String>,
    #[serde(default)]
    pub cv_link: Option<String>,
}

impl Profile {
    /// Absolute http(s) URL of the CV, if one can be built
    pub fn cv_url(&self) -> Option<String> {
        let link = self.cv_link.as_deref().filter(|link| !link.is_empty())?;
        let url = match Url::parse(link) {
            Ok(url) => url,
            Err(_) => Url::parse(self.site_url.as_deref()?).ok()?.join(link).ok()?,
        };
        matches!(url.scheme(), "http" | "https").then(|| url.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub title: String,
    pub subtitle: String,
}

/// One collapsible panel of the about section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusItem {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineYear {
    pub year: String,
    #[serde(default)]
    pub entries: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub title: String,
    pub description: String,
    pub category: String,
}

/// Gallery tab a project card is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryTab {
    #[default]
    Featured,
    Ongoing,
    Completed,
}

impl GalleryTab {
    pub const ALL: [GalleryTab; 3] = [GalleryTab::Featured, GalleryTab::Ongoing, GalleryTab::Completed];

    pub fn label(self) -> &'static str {
        match self {
            GalleryTab::Featured => "Featured",
            GalleryTab::Ongoing => "Ongoing",
            GalleryTab::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCard {
    #[serde(default)]
    pub tab: GalleryTab,
    #[serde(default)]
    pub collaborators: Option<u32>,
    /// Whether the card offers "View Details"
    #[serde(default = "default_true")]
    pub details: bool,
    #[serde(flatten)]
    pub record: Arc<DisplayRecord>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub journal: String,
    pub year: u16,
    pub authors: String,
    pub doi: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Publication {
    pub fn doi_url(&self) -> String {
        format!("https://doi.org/{}", self.doi)
    }

    /// Record shown when a publication is opened in the detail dialog
    pub fn to_record(&self) -> DisplayRecord {
        DisplayRecord::new(self.title.clone(), self.year.to_string())
            .with_description(format!("{}\n{}", self.journal, self.authors))
            .with_external_link(self.doi_url())
            .with_category("Publication")
            .with_tags(self.tags.iter().cloned())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub author: String,
    pub affiliation: String,
    pub quote: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub intro: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub subjects: Vec<SubjectOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub label: String,
    pub value: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectOption {
    pub value: String,
    pub label: String,
}

impl Catalog {
    /// The catalog compiled into the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        debug!("Loading catalog from: {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json(&content)
    }

    /// Load from `path` when given, otherwise fall back to the built-in catalog
    pub async fn load_or_builtin(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path).await,
            None => Self::builtin(),
        }
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.profile.name.trim().is_empty() {
            return Err(CatalogError::Invalid("profile name is empty".to_string()));
        }

        for (index, card) in self.projects.iter().enumerate() {
            check_record(&card.record, &format!("project #{}", index + 1))?;
        }

        for (index, publication) in self.publications.iter().enumerate() {
            if publication.title.trim().is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "publication #{} has an empty title",
                    index + 1
                )));
            }
        }

        let mut years = HashSet::new();
        for entry in &self.timeline {
            if !years.insert(entry.year.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "timeline year {} appears more than once",
                    entry.year
                )));
            }
        }

        Ok(())
    }

    pub fn projects_in(&self, tab: GalleryTab) -> impl Iterator<Item = (usize, &ProjectCard)> {
        self.projects
            .iter()
            .enumerate()
            .filter(move |(_, card)| card.tab == tab)
    }
}

fn check_record(record: &DisplayRecord, what: &str) -> Result<(), CatalogError> {
    if record.title.trim().is_empty() {
        return Err(CatalogError::Invalid(format!("{} has an empty title", what)));
    }
    if record.date.trim().is_empty() {
        return Err(CatalogError::Invalid(format!("{} has an empty date", what)));
    }
    Ok(())
}
