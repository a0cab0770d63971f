use image::RgbaImage;

pub const GALLERY_SLOTS: usize = 12;
pub const SLOTS_PER_PAGE: usize = 6;
pub const GALLERY_PAGES: usize = GALLERY_SLOTS / SLOTS_PER_PAGE;

/// A captured thumbnail.
///
/// `version` changes whenever the slot is written so that cached textures
/// can be keyed by `(slot, version)`.
#[derive(Debug, Clone)]
pub struct GalleryEntry {
    pub image: RgbaImage,
    pub version: u64,
}

/// Fixed set of thumbnail slots shown two pages at a time.
#[derive(Debug)]
pub struct Gallery {
    slots: Vec<Option<GalleryEntry>>,
    selected: Option<usize>,
    page: usize,
    next_version: u64,
}

impl Default for Gallery {
    fn default() -> Self {
        Self {
            slots: vec![None; GALLERY_SLOTS],
            selected: None,
            page: 0,
            next_version: 1,
        }
    }
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a thumbnail and return the slot it went into.
    ///
    /// The selected slot wins, then the first empty slot; a full gallery
    /// with nothing selected overwrites the first slot.
    pub fn save(&mut self, image: RgbaImage) -> usize {
        let index = self
            .selected
            .or_else(|| self.slots.iter().position(Option::is_none))
            .unwrap_or(0);

        self.slots[index] = Some(GalleryEntry {
            image,
            version: self.next_version,
        });
        self.next_version += 1;
        log::info!("Saved thumbnail to gallery slot {}", index);
        index
    }

    /// Empty the selected slot. Returns the removed thumbnail, if any.
    pub fn remove_selected(&mut self) -> Option<GalleryEntry> {
        let index = self.selected?;
        let removed = self.slots[index].take();
        if removed.is_some() {
            log::info!("Removed thumbnail from gallery slot {}", index);
        }
        removed
    }

    /// Select `index`, or deselect it if it is already selected.
    pub fn toggle_selected(&mut self, index: usize) {
        if index >= GALLERY_SLOTS {
            return;
        }
        self.selected = if self.selected == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn slot(&self, index: usize) -> Option<&GalleryEntry> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Slot indices shown on the current page
    pub fn page_slots(&self) -> std::ops::Range<usize> {
        let start = self.page * SLOTS_PER_PAGE;
        start..start + SLOTS_PER_PAGE
    }

    pub fn has_next_page(&self) -> bool {
        self.page + 1 < GALLERY_PAGES
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 0
    }

    pub fn next_page(&mut self) {
        if self.has_next_page() {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.has_previous_page() {
            self.page -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thumbnail(shade: u8) -> RgbaImage {
        RgbaImage::from_pixel(2, 2, image::Rgba([shade, shade, shade, 255]))
    }

    #[test]
    fn test_save_fills_first_empty_slot() {
        let mut gallery = Gallery::new();
        assert_eq!(gallery.save(thumbnail(1)), 0);
        assert_eq!(gallery.save(thumbnail(2)), 1);
        assert_eq!(gallery.save(thumbnail(3)), 2);
    }

    #[test]
    fn test_save_prefers_selected_slot() {
        let mut gallery = Gallery::new();
        gallery.save(thumbnail(1));
        gallery.toggle_selected(7);
        assert_eq!(gallery.save(thumbnail(2)), 7);
        assert!(gallery.slot(1).is_none());
    }

    #[test]
    fn test_full_gallery_overwrites_first_slot() {
        let mut gallery = Gallery::new();
        for shade in 0..GALLERY_SLOTS as u8 {
            gallery.save(thumbnail(shade));
        }
        let before = gallery.slot(0).map(|entry| entry.version);
        assert_eq!(gallery.save(thumbnail(200)), 0);
        assert_ne!(gallery.slot(0).map(|entry| entry.version), before);
        assert_eq!(gallery.slot(0).unwrap().image.get_pixel(0, 0).0[0], 200);
    }

    #[test]
    fn test_remove_selected() {
        let mut gallery = Gallery::new();
        gallery.save(thumbnail(1));
        assert!(gallery.remove_selected().is_none());

        gallery.toggle_selected(0);
        assert!(gallery.remove_selected().is_some());
        assert!(gallery.slot(0).is_none());

        gallery.toggle_selected(0);
        assert_eq!(gallery.selected(), None);
    }

    #[test]
    fn test_paging_is_bounded() {
        let mut gallery = Gallery::new();
        assert_eq!(gallery.page_slots(), 0..6);
        gallery.previous_page();
        assert_eq!(gallery.page(), 0);
        gallery.next_page();
        gallery.next_page();
        assert_eq!(gallery.page(), 1);
        assert_eq!(gallery.page_slots(), 6..12);
        assert!(!gallery.has_next_page());
    }
}
