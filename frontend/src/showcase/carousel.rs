use crate::utils::platform::ExternalLinks;

use super::project::{Category, Project};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CarouselState {
    active_index: usize,
    items: Vec<Project>,
    pub autoplay: bool,
}

impl CarouselState {
    pub fn new(items: Vec<Project>, autoplay: bool) -> Self {
        Self {
            active_index: 0,
            items,
            autoplay,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn items(&self) -> &[Project] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Swaps in a freshly filtered item list. The index always goes back to 0.
    pub fn replace_items(&mut self, items: Vec<Project>) {
        self.items = items;
        self.active_index = 0;
    }

    pub fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.active_index = (self.active_index + 1) % self.items.len();
    }

    pub fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let len = self.items.len();
        self.active_index = (self.active_index + len - 1) % len;
    }

    /// Returns whether the index was accepted.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            log::debug!("Ignoring out-of-range project index {}", index);
            return false;
        }
        self.active_index = index;
        true
    }

    pub fn active_project(&self) -> Option<&Project> {
        self.items.get(self.active_index)
    }

    pub fn should_autoplay(&self) -> bool {
        self.autoplay && !self.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrimaryAction {
    OpenCodeHost(String),
    VisitStore(String),
    OpenGallery,
    OpenExternal(String),
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionIcon {
    CodeHost,
    ExternalLink,
}

/// Priority: code host, store link, gallery, external link.
pub fn resolve_action(project: &Project) -> PrimaryAction {
    if let Some(url) = &project.code_host_url {
        return PrimaryAction::OpenCodeHost(url.clone());
    }
    if project.category == Category::Shopify {
        if let Some(url) = &project.external_link {
            return PrimaryAction::VisitStore(url.clone());
        }
    }
    if project.has_gallery() {
        return PrimaryAction::OpenGallery;
    }
    match &project.external_link {
        Some(url) => PrimaryAction::OpenExternal(url.clone()),
        None => PrimaryAction::None,
    }
}

impl PrimaryAction {
    pub fn label(&self) -> &'static str {
        match self {
            PrimaryAction::OpenCodeHost(_) => "View on GitHub",
            PrimaryAction::VisitStore(_) => "Visit Store",
            PrimaryAction::OpenGallery => "View Gallery",
            PrimaryAction::OpenExternal(_) | PrimaryAction::None => "View Project",
        }
    }

    pub fn icon(&self) -> ActionIcon {
        match self {
            PrimaryAction::OpenCodeHost(_) => ActionIcon::CodeHost,
            _ => ActionIcon::ExternalLink,
        }
    }

    /// Runs the action. Returns true when the caller should open the gallery.
    pub fn perform<L: ExternalLinks + ?Sized>(&self, links: &L) -> bool {
        match self {
            PrimaryAction::OpenCodeHost(url)
            | PrimaryAction::VisitStore(url)
            | PrimaryAction::OpenExternal(url) => {
                if let Err(e) = links.open_external(url) {
                    log::error!("Failed to open {}: {}", url, e);
                }
                false
            }
            PrimaryAction::OpenGallery => true,
            PrimaryAction::None => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    pub opacity: f64,
    pub scale: f64,
    pub z_index: usize,
    pub rotate_deg: i32,
}

/// Stacking pose of card `index` in a deck of `len` cards.
pub fn card_pose(index: usize, active: usize, len: usize) -> CardPose {
    if index == active {
        return CardPose {
            opacity: 1.0,
            scale: 1.0,
            z_index: 999,
            rotate_deg: 0,
        };
    }
    CardPose {
        opacity: 0.7,
        scale: 0.95,
        z_index: (len + 2).saturating_sub(index),
        rotate_deg: ((index * 7 + 3) % 21) as i32 - 10,
    }
}
