//! Sample data used when a provider can't be queried
//!
//! Every generator returns the same types the live API is parsed into, so
//! the rest of the pipeline can't tell the difference. URLs are
//! deterministic for a given query and index.

use crate::models::{
    PexelsPhoto, PexelsPhotoSearch, PexelsSrc, PexelsVideoSearch, PixabayImage,
    PixabayImageSearch, PixabayVideoSearch, UnsplashLinks, UnsplashPhoto, UnsplashSearch,
    UnsplashUrls, UnsplashUser,
};

const SAMPLE_PHOTOGRAPHER: &str = "Sample Photographer";

/// `count` sample Unsplash photos for `query`
pub fn unsplash(query: &str, count: u32) -> UnsplashSearch {
    let terms = query.replace(' ', ",");
    let results = (0..count)
        .map(|i| UnsplashPhoto {
            urls: UnsplashUrls {
                regular: format!("https://source.unsplash.com/800x600/?{}&sig={}", terms, i),
            },
            description: Some(format!("Sample {} image {}", query, i + 1)),
            user: UnsplashUser {
                name: SAMPLE_PHOTOGRAPHER.to_string(),
            },
            links: UnsplashLinks {
                download: format!("https://source.unsplash.com/1200x800/?{}&sig={}", terms, i),
            },
        })
        .collect();

    UnsplashSearch { results }
}

/// `count` sample Pexels photos for `query`
pub fn pexels_photos(query: &str, count: u32) -> PexelsPhotoSearch {
    let photos = (0..count)
        .map(|i| PexelsPhoto {
            src: PexelsSrc {
                large: format!("https://picsum.photos/800/600?random={}", i),
                original: format!("https://picsum.photos/1200/800?random={}", i),
            },
            alt: Some(format!("Sample {} image {}", query, i + 1)),
            photographer: SAMPLE_PHOTOGRAPHER.to_string(),
        })
        .collect();

    PexelsPhotoSearch { photos }
}

/// Pexels has no sample videos
pub fn pexels_videos() -> PexelsVideoSearch {
    PexelsVideoSearch::default()
}

/// `count` sample Pixabay images for `query`
pub fn pixabay_images(query: &str, count: u32) -> PixabayImageSearch {
    let hits = (0..count)
        .map(|i| PixabayImage {
            webformat_url: format!("https://picsum.photos/640/480?random={}", i),
            large_image_url: format!("https://picsum.photos/1280/960?random={}", i),
            tags: format!("sample, {}", query),
            user: SAMPLE_PHOTOGRAPHER.to_string(),
        })
        .collect();

    PixabayImageSearch { hits }
}

/// Pixabay has no sample videos
pub fn pixabay_videos() -> PixabayVideoSearch {
    PixabayVideoSearch::default()
}
