/// Lightbox position within the active project's image list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    is_open: bool,
    current_image: usize,
    image_count: usize,
}

impl GalleryState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current_image(&self) -> usize {
        self.current_image
    }

    /// Opens on the first image. Stays closed when there is nothing to show.
    pub fn open(&mut self, image_count: usize) -> bool {
        if image_count == 0 {
            log::debug!("Not opening gallery for a project without images");
            return false;
        }
        self.is_open = true;
        self.current_image = 0;
        self.image_count = image_count;
        true
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.current_image = 0;
    }

    pub fn next_image(&mut self) {
        if self.image_count == 0 {
            return;
        }
        self.current_image = (self.current_image + 1) % self.image_count;
    }

    pub fn previous_image(&mut self) {
        if self.image_count == 0 {
            return;
        }
        self.current_image = (self.current_image + self.image_count - 1) % self.image_count;
    }

    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.image_count {
            log::debug!("Ignoring out-of-range gallery image {}", index);
            return false;
        }
        self.current_image = index;
        true
    }

    /// Counter text shown under the image, e.g. `3 / 6`.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.current_image + 1, self.image_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gallery_never_opens() {
        let mut gallery = GalleryState::default();
        assert!(!gallery.open(0));
        assert!(!gallery.is_open());
        gallery.next_image();
        gallery.previous_image();
        assert_eq!(gallery.current_image(), 0);
    }

    #[test]
    fn six_images_wrap_after_sixth_next() {
        let mut gallery = GalleryState::default();
        assert!(gallery.open(6));
        assert_eq!(gallery.current_image(), 0);
        for _ in 0..5 {
            gallery.next_image();
        }
        assert_eq!(gallery.current_image(), 5);
        assert_eq!(gallery.counter(), "6 / 6");
        gallery.next_image();
        assert_eq!(gallery.current_image(), 0);
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut gallery = GalleryState::default();
        gallery.open(4);
        gallery.previous_image();
        assert_eq!(gallery.current_image(), 3);
    }

    #[test]
    fn jump_ignores_out_of_range() {
        let mut gallery = GalleryState::default();
        gallery.open(3);
        assert!(gallery.jump_to(2));
        assert!(!gallery.jump_to(3));
        assert_eq!(gallery.current_image(), 2);
    }

    #[test]
    fn reopen_starts_at_first_image() {
        let mut gallery = GalleryState::default();
        gallery.open(3);
        gallery.jump_to(2);
        gallery.close();
        assert!(!gallery.is_open());
        gallery.open(3);
        assert_eq!(gallery.current_image(), 0);
    }
}
