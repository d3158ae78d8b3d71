//! Photo gallery built from event banners.

use serde::Serialize;

use super::Event;

/// One tile in the event gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryItem {
    pub image_url: String,
    pub title: String,
    pub slug: String,
}

/// Events that carry a banner image, one tile per distinct image.
///
/// Events without a banner are skipped. When several events share the same
/// image only the first one is kept.
pub fn gallery_items<'a>(events: impl IntoIterator<Item = &'a Event>) -> Vec<GalleryItem> {
    let mut items: Vec<GalleryItem> = Vec::new();
    for event in events {
        let Some(url) = event.banner() else {
            continue;
        };
        if items.iter().any(|item| item.image_url == url) {
            continue;
        }
        items.push(GalleryItem {
            image_url: url.to_string(),
            title: event.title.clone(),
            slug: event.slug.clone(),
        });
    }
    items
}
