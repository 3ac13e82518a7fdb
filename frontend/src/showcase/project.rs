use serde::{Deserialize, Deserializer};

/// Sentinel `src` value meaning "no screenshot, render the code-host badge".
pub const CODE_HOST_BADGE_SENTINEL: &str = "github-placeholder";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Filter-only pseudo-category; never a project's own category.
    #[default]
    All,
    Shopify,
    Webdev,
    Uiux,
    Mobile,
    Dotnet,
    Github,
    Gallery,
    External,
}

impl Category {
    /// The filters offered in the filter bar, in display order.
    pub const FILTERS: [Category; 6] = [
        Category::All,
        Category::Shopify,
        Category::Webdev,
        Category::Uiux,
        Category::Mobile,
        Category::Dotnet,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "View All",
            Category::Shopify => "Shopify",
            Category::Webdev => "Web Dev",
            Category::Uiux => "UI/UX",
            Category::Mobile => "Mobile",
            Category::Dotnet => ".NET",
            Category::Github => "GitHub",
            Category::Gallery => "Gallery",
            Category::External => "External",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectImage {
    Asset(String),
    CodeHostBadge,
}

impl<'de> Deserialize<'de> for ProjectImage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw == CODE_HOST_BADGE_SENTINEL || raw.is_empty() {
            Ok(ProjectImage::CodeHostBadge)
        } else {
            Ok(ProjectImage::Asset(raw))
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub designation: String,
    pub src: ProjectImage,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(alias = "type")]
    pub category: Category,
    #[serde(default, alias = "link")]
    pub external_link: Option<String>,
    #[serde(default, alias = "githubUrl")]
    pub code_host_url: Option<String>,
}

impl Project {
    pub fn has_gallery(&self) -> bool {
        !self.gallery.is_empty()
    }

    pub fn shows_code_host_badge(&self) -> bool {
        self.code_host_url.is_some() || self.src == ProjectImage::CodeHostBadge
    }
}

#[cfg(test)]
pub(crate) fn sample(name: &str, category: Category) -> Project {
    Project {
        name: name.to_string(),
        quote: String::new(),
        designation: String::new(),
        src: ProjectImage::Asset(format!("/images/{}.png", name)),
        gallery: Vec::new(),
        technologies: Vec::new(),
        category,
        external_link: None,
        code_host_url: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_legacy_keys() {
        let project: Project = serde_json::from_str(
            r#"{
                "name": "Chat",
                "src": "github-placeholder",
                "type": "github",
                "githubUrl": "https://github.com/example/chat",
                "link": "https://chat.example.com"
            }"#,
        )
        .unwrap();
        assert_eq!(project.category, Category::Github);
        assert_eq!(project.src, ProjectImage::CodeHostBadge);
        assert_eq!(project.code_host_url.as_deref(), Some("https://github.com/example/chat"));
        assert_eq!(project.external_link.as_deref(), Some("https://chat.example.com"));
        assert!(project.gallery.is_empty());
        assert!(project.shows_code_host_badge());
    }

    #[test]
    fn code_host_url_forces_badge_even_with_asset() {
        let mut project = sample("logo", Category::Webdev);
        assert!(!project.shows_code_host_badge());
        project.code_host_url = Some("https://github.com/example/logo".to_string());
        assert!(project.shows_code_host_badge());
    }

    #[test]
    fn filters_start_with_all() {
        assert_eq!(Category::FILTERS[0], Category::All);
        assert_eq!(Category::FILTERS.len(), 6);
        assert_eq!(Category::Dotnet.label(), ".NET");
    }
}
