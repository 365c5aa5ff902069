use serde::Deserialize;
use std::{collections::HashSet, rc::Rc};

const EMBEDDED_CATALOG: &str = include_str!("../data/projects.json");
const GENERIC_SWATCH: &str = "slate";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("project id `{0}` appears more than once")]
    DuplicateId(String),
    #[error("project `{id}` has an empty `{field}`")]
    MissingField { id: String, field: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectType {
    Website,
    Graphic,
    Video,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [Self::Website, Self::Graphic, Self::Video];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Graphic => "graphic",
            Self::Video => "video",
        }
    }

    /// Accepts both `website` and `websites`, case-insensitively.
    pub fn from_slug(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        let singular = value.strip_suffix('s').unwrap_or(&value);

        Self::ALL
            .into_iter()
            .find(|project_type| project_type.slug() == singular)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::Graphic => "Graphic",
            Self::Video => "Video",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Self::Website => "websites",
            Self::Graphic => "graphics",
            Self::Video => "videos",
        }
    }

    pub fn listing_heading(self) -> &'static str {
        match self {
            Self::Website => "Web Development",
            Self::Graphic => "Graphics & Branding",
            Self::Video => "Motion & Video",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Website => "▭",
            Self::Graphic => "◩",
            Self::Video => "▶",
        }
    }
}

/// Where a card's artwork comes from: a URL-shaped reference, or a named swatch
/// drawn entirely by the stylesheet.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Thumbnail {
    Image(String),
    Swatch(String),
}

impl From<String> for Thumbnail {
    fn from(value: String) -> Self {
        if value.starts_with("http") || value.starts_with('/') {
            Self::Image(value)
        } else {
            Self::Swatch(value)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteDetails {
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default, alias = "githubUrl")]
    pub source_url: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphicDetails {
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    #[serde(default, alias = "videoUrl")]
    pub embed_url: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProjectKind {
    Website(WebsiteDetails),
    Graphic(GraphicDetails),
    Video(VideoDetails),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub thumbnail: Thumbnail,
    pub description: String,
    pub year: String,
    #[serde(flatten)]
    pub kind: ProjectKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardMedia {
    Image(String),
    Placeholder(String),
}

impl Project {
    pub fn project_type(&self) -> ProjectType {
        match self.kind {
            ProjectKind::Website(_) => ProjectType::Website,
            ProjectKind::Graphic(_) => ProjectType::Graphic,
            ProjectKind::Video(_) => ProjectType::Video,
        }
    }

    pub fn live_url(&self) -> Option<&str> {
        match &self.kind {
            ProjectKind::Website(details) => details.live_url.as_deref(),
            _ => None,
        }
    }

    pub fn source_url(&self) -> Option<&str> {
        match &self.kind {
            ProjectKind::Website(details) => details.source_url.as_deref(),
            _ => None,
        }
    }

    pub fn tags(&self) -> &[String] {
        match &self.kind {
            ProjectKind::Website(details) => &details.tech_stack,
            ProjectKind::Graphic(details) => &details.tools,
            ProjectKind::Video(details) => &details.tools,
        }
    }

    pub fn tags_heading(&self) -> &'static str {
        match self.kind {
            ProjectKind::Website(_) => "TECH STACK",
            _ => "TOOLS USED",
        }
    }

    pub fn placeholder_swatch(&self) -> &'static str {
        match self.id.as_str() {
            "web-1" => "emerald",
            "web-2" => "blue",
            "web-3" => "rose",
            "web-4" => "orange",
            "web-5" => "purple",
            _ => GENERIC_SWATCH,
        }
    }

    pub fn card_media(&self, image_failed: bool) -> CardMedia {
        match &self.thumbnail {
            Thumbnail::Image(url) if !image_failed => CardMedia::Image(url.clone()),
            Thumbnail::Image(_) => CardMedia::Placeholder(self.placeholder_swatch().to_string()),
            Thumbnail::Swatch(name) => CardMedia::Placeholder(name.clone()),
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::MissingField {
                id: self.title.clone(),
                field: "id",
            });
        }

        if self.title.trim().is_empty() {
            return Err(CatalogError::MissingField {
                id: self.id.clone(),
                field: "title",
            });
        }

        Ok(())
    }
}

/// Per-mount image failure latch. Once tripped it stays tripped; a card never
/// goes back to requesting the image it already lost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThumbnailState {
    failed: bool,
}

impl ThumbnailState {
    pub fn fail(&mut self) {
        self.failed = true;
    }

    pub fn has_failed(self) -> bool {
        self.failed
    }

    pub fn media(self, project: &Project) -> CardMedia {
        project.card_media(self.failed)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    projects: Vec<Rc<Project>>,
}

impl Catalog {
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let projects: Vec<Project> = serde_json::from_str(raw)?;
        let mut seen = HashSet::new();

        for project in &projects {
            project.validate()?;
            if !seen.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId(project.id.clone()));
            }
        }

        Ok(Self {
            projects: projects.into_iter().map(Rc::new).collect(),
        })
    }

    pub fn all(&self) -> &[Rc<Project>] {
        &self.projects
    }

    pub fn of_type(&self, project_type: ProjectType) -> Vec<Rc<Project>> {
        self.projects
            .iter()
            .filter(|project| project.project_type() == project_type)
            .cloned()
            .collect()
    }

    pub fn count_of(&self, project_type: ProjectType) -> usize {
        self.projects
            .iter()
            .filter(|project| project.project_type() == project_type)
            .count()
    }

    pub fn find(&self, id: &str) -> Option<Rc<Project>> {
        self.projects.iter().find(|project| project.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
