use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use chrono::NaiveDate;
use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::filter::{Category, Listable};

pub static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| load_or_empty("projects.json"));
pub static CERTIFICATES: LazyLock<Vec<Certificate>> =
    LazyLock::new(|| load_or_empty("certificates.json"));
pub static SKILLS: LazyLock<Vec<SkillGroup>> = LazyLock::new(|| load_or_empty("skills.json"));
pub static PROFILE: LazyLock<Profile> = LazyLock::new(|| {
    load("profile.json").unwrap_or_else(|e| {
        log::error!("{e}");
        Profile::default()
    })
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse {file}: {reason}")]
    ParseError { file: String, reason: String },
    #[error("Duplicate id {id} in {file}")]
    DuplicateId { file: String, id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Mobile,
    Desktop,
    Android,
    Desain,
}

impl Category for ProjectCategory {
    const ALL: &'static [Self] = &[
        Self::Web,
        Self::Mobile,
        Self::Desktop,
        Self::Android,
        Self::Desain,
    ];

    fn slug(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
            Self::Android => "android",
            Self::Desain => "desain",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Web => "Web",
            Self::Mobile => "Mobile",
            Self::Desktop => "Desktop",
            Self::Android => "Android",
            Self::Desain => "Design",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateCategory {
    Frontend,
    Fullstack,
    Cloud,
    Design,
    Data,
    Mobile,
    Other,
}

impl Category for CertificateCategory {
    const ALL: &'static [Self] = &[
        Self::Frontend,
        Self::Fullstack,
        Self::Cloud,
        Self::Design,
        Self::Data,
        Self::Mobile,
        Self::Other,
    ];

    fn slug(&self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Fullstack => "fullstack",
            Self::Cloud => "cloud",
            Self::Design => "design",
            Self::Data => "data",
            Self::Mobile => "mobile",
            Self::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Fullstack => "Full Stack",
            Self::Cloud => "Cloud",
            Self::Design => "Design",
            Self::Data => "Data",
            Self::Mobile => "Mobile",
            Self::Other => "Other",
        }
    }
}

/// Either a plain list of technologies or technologies grouped by layer
/// (e.g. "frontend", "backend").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TechStack {
    Flat(Vec<String>),
    Layered(BTreeMap<String, Vec<String>>),
}

impl Default for TechStack {
    fn default() -> Self {
        Self::Flat(Vec::new())
    }
}

impl TechStack {
    /// All technologies, layers flattened in layer-name order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            Self::Flat(v) => Box::new(v.iter().map(String::as_str)),
            Self::Layered(m) => Box::new(m.values().flatten().map(String::as_str)),
        }
    }

    pub fn layers(&self) -> Vec<(Option<&str>, &[String])> {
        match self {
            Self::Flat(v) => vec![(None, v.as_slice())],
            Self::Layered(m) => m
                .iter()
                .map(|(k, v)| (Some(k.as_str()), v.as_slice()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    #[serde(default)]
    pub tech_stack: TechStack,
    #[serde(default)]
    pub images: Vec<String>,
    pub github: Option<String>,
    pub live: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Listable for Project {
    type Category = ProjectCategory;

    fn category(&self) -> ProjectCategory {
        self.category
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn tags(&self) -> Vec<&str> {
        self.tech_stack.iter().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub category: CertificateCategory,
    #[serde(default)]
    pub skills: Vec<String>,
    pub issue_date: NaiveDate,
    pub description: String,
    #[serde(default)]
    pub featured: bool,
    pub credential_url: Option<String>,
}

impl Listable for Certificate {
    type Category = CertificateCategory;

    fn category(&self) -> CertificateCategory {
        self.category
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn tags(&self) -> Vec<&str> {
        self.skills.iter().map(String::as_str).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(default)]
    pub links: Vec<ExternalLink>,
    pub cv_path: String,
    pub cv_filename: String,
}

trait HasId {
    fn id(&self) -> &str;
}

impl HasId for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Certificate {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for SkillGroup {
    fn id(&self) -> &str {
        &self.name
    }
}

fn load<T: DeserializeOwned>(file: &str) -> Result<T, ContentError> {
    let content = Assets::get(file).ok_or_else(|| ContentError::NotFound(file.to_string()))?;
    serde_json::from_slice(&content.data).map_err(|e| ContentError::ParseError {
        file: file.to_string(),
        reason: e.to_string(),
    })
}

fn load_collection<T: DeserializeOwned + HasId>(file: &str) -> Result<Vec<T>, ContentError> {
    let items: Vec<T> = load(file)?;
    let mut seen = HashSet::new();
    for item in &items {
        if !seen.insert(item.id()) {
            return Err(ContentError::DuplicateId {
                file: file.to_string(),
                id: item.id().to_string(),
            });
        }
    }
    Ok(items)
}

fn load_or_empty<T: DeserializeOwned + HasId>(file: &str) -> Vec<T> {
    load_collection(file).unwrap_or_else(|e| {
        log::error!("{e}");
        Vec::new()
    })
}

pub fn featured_certificates() -> impl Iterator<Item = &'static Certificate> {
    CERTIFICATES.iter().filter(|c| c.featured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        assert!(load_collection::<Project>("projects.json").is_ok());
        assert!(load_collection::<Certificate>("certificates.json").is_ok());
        assert!(load_collection::<SkillGroup>("skills.json").is_ok());
        assert!(load::<Profile>("profile.json").is_ok());

        assert!(!PROJECTS.is_empty());
        assert!(!CERTIFICATES.is_empty());
        assert!(!PROFILE.name.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let res = load_collection::<Project>("nope.json");
        assert_eq!(res, Err(ContentError::NotFound("nope.json".to_string())));
    }

    #[test]
    fn test_tech_stack_shapes() {
        let flat: TechStack = serde_json::from_str(r#"["React", "Redux"]"#).unwrap();
        assert_eq!(flat.iter().collect::<Vec<_>>(), vec!["React", "Redux"]);

        let layered: TechStack = serde_json::from_str(
            r#"{"frontend": ["Vue", "Tailwind"], "backend": ["Laravel", "MySQL"]}"#,
        )
        .unwrap();
        // layers are ordered by name
        assert_eq!(
            layered.iter().collect::<Vec<_>>(),
            vec!["Laravel", "MySQL", "Vue", "Tailwind"]
        );
        let layers = layered.layers();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].0, Some("backend"));
    }

    #[test]
    fn test_project_parsing() {
        let p: Project = serde_json::from_str(
            r#"{
                "id": "kosthunt",
                "title": "KostHunt",
                "description": "Boarding house finder",
                "category": "web",
                "tech_stack": ["React", "Redux"],
                "github": "https://github.com/example/kosthunt",
                "live": null
            }"#,
        )
        .unwrap();
        assert_eq!(p.category, ProjectCategory::Web);
        assert!(p.images.is_empty());
        assert!(p.features.is_empty());
        assert_eq!(p.tags(), vec!["React", "Redux"]);
        assert_eq!(p.live, None);
    }

    #[test]
    fn test_certificate_parsing() {
        let c: Certificate = serde_json::from_str(
            r#"{
                "id": "aws-ccp",
                "title": "Cloud Practitioner",
                "issuer": "AWS",
                "category": "cloud",
                "skills": ["AWS", "IAM"],
                "issue_date": "2024-03-15",
                "description": "Foundational cloud certification"
            }"#,
        )
        .unwrap();
        assert_eq!(c.category, CertificateCategory::Cloud);
        assert_eq!(c.issue_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert!(!c.featured);
        assert_eq!(c.tags(), vec!["AWS", "IAM"]);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let res = serde_json::from_str::<ProjectCategory>(r#""games""#);
        assert!(res.is_err());
    }

    #[test]
    fn test_embedded_ids_unique() {
        let mut ids = HashSet::new();
        for p in PROJECTS.iter() {
            assert!(ids.insert(p.id.as_str()), "duplicate project id {}", p.id);
        }
        let mut ids = HashSet::new();
        for c in CERTIFICATES.iter() {
            assert!(ids.insert(c.id.as_str()), "duplicate certificate id {}", c.id);
        }
    }

    #[test]
    fn test_featured_certificates() {
        assert!(featured_certificates().all(|c| c.featured));
    }

    #[test]
    fn test_category_slugs_roundtrip_serde() {
        for c in ProjectCategory::ALL {
            let json = serde_json::to_string(c).unwrap();
            assert_eq!(json, format!("\"{}\"", c.slug()));
        }
        for c in CertificateCategory::ALL {
            let json = serde_json::to_string(c).unwrap();
            assert_eq!(json, format!("\"{}\"", c.slug()));
        }
    }
}
