use std::rc::Rc;
use yew::Reducible;

use super::carousel::CarouselState;
use super::filter;
use super::gallery::GalleryState;
use super::project::{Category, Project};

#[derive(Clone, Debug, PartialEq)]
pub enum ShowcaseAction {
    SelectFilter(Category),
    Next,
    Previous,
    Select(usize),
    AutoplayTick,
    OpenGallery,
    CloseGallery,
    NextImage,
    PreviousImage,
    JumpToImage(usize),
}

/// Filter, carousel and gallery for the featured projects section.
#[derive(Clone, Debug, PartialEq)]
pub struct ShowcaseState {
    catalog: Rc<Vec<Project>>,
    filter: Category,
    pub carousel: CarouselState,
    pub gallery: GalleryState,
}

impl ShowcaseState {
    pub fn new(catalog: Rc<Vec<Project>>, autoplay: bool) -> Self {
        let items = filter::apply(&catalog, Category::All);
        Self {
            catalog,
            filter: Category::All,
            carousel: CarouselState::new(items, autoplay),
            gallery: GalleryState::default(),
        }
    }

    pub fn catalog(&self) -> &[Project] {
        &self.catalog
    }

    pub fn filter(&self) -> Category {
        self.filter
    }

    pub fn apply(mut self, action: ShowcaseAction) -> Self {
        match action {
            ShowcaseAction::SelectFilter(category) if category == self.filter => {
                log::debug!("Filter {:?} already selected", category);
            }
            ShowcaseAction::SelectFilter(category) => {
                log::info!("Filter changed to {:?}", category);
                self.filter = category;
                self.carousel
                    .replace_items(filter::apply(&self.catalog, category));
                self.gallery.close();
            }
            ShowcaseAction::Next => {
                self.carousel.next();
                self.gallery.close();
            }
            ShowcaseAction::Previous => {
                self.carousel.previous();
                self.gallery.close();
            }
            ShowcaseAction::Select(index) => {
                if self.carousel.select_index(index) {
                    self.gallery.close();
                }
            }
            ShowcaseAction::AutoplayTick => {
                if !self.gallery.is_open() {
                    self.carousel.next();
                }
            }
            ShowcaseAction::OpenGallery => {
                let count = self
                    .carousel
                    .active_project()
                    .map(|project| project.gallery.len())
                    .unwrap_or(0);
                if self.gallery.open(count) {
                    log::info!("Opened gallery with {} images", count);
                }
            }
            ShowcaseAction::CloseGallery => self.gallery.close(),
            ShowcaseAction::NextImage => self.gallery.next_image(),
            ShowcaseAction::PreviousImage => self.gallery.previous_image(),
            ShowcaseAction::JumpToImage(index) => {
                self.gallery.jump_to(index);
            }
        }
        self
    }

    /// Images of the active project, empty when nothing is addressable.
    pub fn active_gallery(&self) -> &[String] {
        self.carousel
            .active_project()
            .map(|project| project.gallery.as_slice())
            .unwrap_or(&[])
    }
}

impl Reducible for ShowcaseState {
    type Action = ShowcaseAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::project::sample;

    fn catalog() -> Rc<Vec<Project>> {
        let mut golf = sample("golf", Category::Mobile);
        golf.gallery = (1..=6).map(|i| format!("/images/golf/{}.png", i)).collect();
        Rc::new(vec![
            sample("shop", Category::Shopify),
            golf,
            sample("chat", Category::Webdev),
            sample("hire", Category::Mobile),
            sample("carpool", Category::Dotnet),
        ])
    }

    fn names(state: &ShowcaseState) -> Vec<&str> {
        state
            .carousel
            .items()
            .iter()
            .map(|p| p.name.as_str())
            .collect()
    }

    #[test]
    fn mobile_filter_scenario() {
        let state = ShowcaseState::new(catalog(), false)
            .apply(ShowcaseAction::SelectFilter(Category::Mobile));
        assert_eq!(names(&state), vec!["golf", "hire"]);
        assert_eq!(state.carousel.active_index(), 0);

        let state = state.apply(ShowcaseAction::Next);
        assert_eq!(state.carousel.active_index(), 1);
        let state = state.apply(ShowcaseAction::Next);
        assert_eq!(state.carousel.active_index(), 0);
    }

    #[test]
    fn filter_change_always_resets_index() {
        for start in 0..5 {
            for category in Category::FILTERS.into_iter().filter(|&c| c != Category::All) {
                let state = ShowcaseState::new(catalog(), false)
                    .apply(ShowcaseAction::Select(start))
                    .apply(ShowcaseAction::SelectFilter(category));
                assert_eq!(state.carousel.active_index(), 0);
                assert_eq!(state.filter(), category);
            }

            let state = ShowcaseState::new(catalog(), false)
                .apply(ShowcaseAction::SelectFilter(Category::Mobile))
                .apply(ShowcaseAction::Select(start % 2))
                .apply(ShowcaseAction::SelectFilter(Category::All));
            assert_eq!(state.carousel.active_index(), 0);
            assert_eq!(state.carousel.len(), 5);
        }
    }

    #[test]
    fn reselecting_current_filter_keeps_position_and_gallery() {
        let state = ShowcaseState::new(catalog(), false)
            .apply(ShowcaseAction::SelectFilter(Category::Mobile))
            .apply(ShowcaseAction::OpenGallery)
            .apply(ShowcaseAction::Next);
        assert_eq!(state.carousel.active_index(), 1);

        let state = state
            .apply(ShowcaseAction::Select(0))
            .apply(ShowcaseAction::OpenGallery)
            .apply(ShowcaseAction::NextImage)
            .apply(ShowcaseAction::SelectFilter(Category::Mobile));
        assert_eq!(state.filter(), Category::Mobile);
        assert_eq!(state.carousel.active_index(), 0);
        assert!(state.gallery.is_open());
        assert_eq!(state.gallery.current_image(), 1);

        let state = state
            .apply(ShowcaseAction::Next)
            .apply(ShowcaseAction::SelectFilter(Category::Mobile));
        assert_eq!(state.carousel.active_index(), 1);
    }

    #[test]
    fn empty_filter_is_explicit_no_items() {
        let state = ShowcaseState::new(catalog(), false)
            .apply(ShowcaseAction::Select(4))
            .apply(ShowcaseAction::SelectFilter(Category::Uiux))
            .apply(ShowcaseAction::Next)
            .apply(ShowcaseAction::Previous)
            .apply(ShowcaseAction::OpenGallery);
        assert!(state.carousel.is_empty());
        assert!(state.carousel.active_project().is_none());
        assert!(state.active_gallery().is_empty());
        assert!(!state.gallery.is_open());
    }

    #[test]
    fn gallery_scenario_wraps() {
        let mut state = ShowcaseState::new(catalog(), false)
            .apply(ShowcaseAction::Select(1))
            .apply(ShowcaseAction::OpenGallery);
        assert!(state.gallery.is_open());
        assert_eq!(state.gallery.current_image(), 0);
        for _ in 0..5 {
            state = state.apply(ShowcaseAction::NextImage);
        }
        assert_eq!(state.gallery.current_image(), 5);
        state = state.apply(ShowcaseAction::NextImage);
        assert_eq!(state.gallery.current_image(), 0);
    }

    #[test]
    fn gallery_stays_closed_without_images() {
        let state = ShowcaseState::new(catalog(), false).apply(ShowcaseAction::OpenGallery);
        assert!(!state.gallery.is_open());
    }

    #[test]
    fn moving_carousel_closes_gallery() {
        let state = ShowcaseState::new(catalog(), false)
            .apply(ShowcaseAction::Select(1))
            .apply(ShowcaseAction::OpenGallery)
            .apply(ShowcaseAction::Next);
        assert!(!state.gallery.is_open());
        assert_eq!(state.carousel.active_index(), 2);
    }

    #[test]
    fn autoplay_tick_waits_for_gallery() {
        let state = ShowcaseState::new(catalog(), true)
            .apply(ShowcaseAction::Select(1))
            .apply(ShowcaseAction::OpenGallery)
            .apply(ShowcaseAction::AutoplayTick);
        assert_eq!(state.carousel.active_index(), 1);
        assert!(state.gallery.is_open());

        let state = state
            .apply(ShowcaseAction::CloseGallery)
            .apply(ShowcaseAction::AutoplayTick);
        assert_eq!(state.carousel.active_index(), 2);
    }

    #[test]
    fn selecting_another_card_closes_gallery() {
        let state = ShowcaseState::new(catalog(), false)
            .apply(ShowcaseAction::Select(1))
            .apply(ShowcaseAction::OpenGallery)
            .apply(ShowcaseAction::Select(3));
        assert_eq!(state.carousel.active_index(), 3);
        assert!(!state.gallery.is_open());
    }

    #[test]
    fn out_of_range_select_keeps_gallery() {
        let state = ShowcaseState::new(catalog(), false)
            .apply(ShowcaseAction::Select(1))
            .apply(ShowcaseAction::OpenGallery)
            .apply(ShowcaseAction::Select(99))
            .apply(ShowcaseAction::JumpToImage(42));
        assert_eq!(state.carousel.active_index(), 1);
        assert!(state.gallery.is_open());
        assert_eq!(state.gallery.current_image(), 0);
    }

    #[test]
    fn reducer_matches_apply() {
        let state = Rc::new(ShowcaseState::new(catalog(), false));
        let reduced = state.clone().reduce(ShowcaseAction::Previous);
        assert_eq!(reduced.carousel.active_index(), 4);
        assert_eq!(state.carousel.active_index(), 0);
    }
}
