use std::collections::HashMap;
use egui::{ColorImage, Context, TextureHandle, TextureOptions};
use image::RgbaImage;

use crate::gallery::GalleryEntry;

/// Caches one GPU texture per gallery slot, keyed by the slot's version
#[derive(Default)]
pub struct ThumbnailCache {
    textures: HashMap<usize, (u64, TextureHandle)>,
}

impl ThumbnailCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the texture for `slot`, uploading it again if the entry changed.
    pub fn texture_for(&mut self, ctx: &Context, slot: usize, entry: &GalleryEntry) -> TextureHandle {
        if let Some((version, handle)) = self.textures.get(&slot) {
            if *version == entry.version {
                return handle.clone();
            }
        }

        let name = format!("gallery_slot_{}_v{}", slot, entry.version);
        let handle = ctx.load_texture(name, to_color_image(&entry.image), TextureOptions::LINEAR);
        self.textures.insert(slot, (entry.version, handle.clone()));
        handle
    }

    /// Drop the cached texture of an emptied slot
    pub fn forget(&mut self, slot: usize) {
        self.textures.remove(&slot);
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

pub fn to_color_image(image: &RgbaImage) -> ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, image.as_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(version: u64) -> GalleryEntry {
        GalleryEntry {
            image: RgbaImage::from_pixel(4, 3, image::Rgba([1, 2, 3, 255])),
            version,
        }
    }

    #[test]
    fn test_reuses_texture_until_version_changes() {
        let ctx = Context::default();
        let mut cache = ThumbnailCache::new();

        let first = cache.texture_for(&ctx, 0, &entry(1));
        let again = cache.texture_for(&ctx, 0, &entry(1));
        assert_eq!(first.id(), again.id());

        let updated = cache.texture_for(&ctx, 0, &entry(2));
        assert_ne!(first.id(), updated.id());
        assert_eq!(cache.len(), 1);

        cache.forget(0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_color_image_size() {
        let image = to_color_image(&entry(1).image);
        assert_eq!(image.size, [4, 3]);
    }
}
