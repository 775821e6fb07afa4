use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use api::portfolio::PortfolioItem;

// image lookup and fallback
//
// every function here answers with some url, no matter the input.  unknown keys
// fall back to a per-family default, and anything we fail to parse is passed
// through untouched

// the one host whose urls understand the w/h/fit/q resizing parameters
pub const IMAGE_HOST: &str = "images.unsplash.com";

pub const DEFAULT_QUALITY: u8 = 80;

pub const PORTFOLIO_DEFAULT: &str =
    "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=800&q=80";
pub const DESIGNER_DEFAULT: &str =
    "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=400&q=80";
pub const HERO_DEFAULT: &str =
    "https://images.unsplash.com/photo-1558655146-9f40138edfeb?w=1920&q=80";

// scheme, host, path, query, fragment
static URL_PARTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:(https?))://([^/?#\s]+)([^?#\s]*)(?:\?([^#\s]*))?(#\S*)?$")
        .expect("url pattern is valid")
});

static IMAGE_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\.(jpe?g|png|gif|webp|svg|avif)$").expect("suffix pattern is valid")
});

fn category_images(category: &str) -> Option<&'static [&'static str]> {
    let images: &'static [&'static str] = match category {
        "Logo Design" => &[
            "https://images.unsplash.com/photo-1626785774573-4b799315345d",
            "https://images.unsplash.com/photo-1634942537034-2531766767d1",
            "https://images.unsplash.com/photo-1599305445671-ac291c95aaa9",
        ],
        "Web Design" => &[
            "https://images.unsplash.com/photo-1547658719-da2b51169166",
            "https://images.unsplash.com/photo-1467232004584-a241de8bcf5d",
        ],
        "Brand Identity" => &[
            "https://images.unsplash.com/photo-1634942536790-dad8f3c0d71b",
            "https://images.unsplash.com/photo-1586717791821-3f44a563fa4c",
        ],
        "UI/UX Design" => &[
            "https://images.unsplash.com/photo-1581291518857-4e27b48ff24e",
            "https://images.unsplash.com/photo-1559028012-481c04fa702d",
        ],
        "Print Design" => &["https://images.unsplash.com/photo-1586075010923-2dd4570fb338"],
        "Illustration" => &[
            "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe",
            "https://images.unsplash.com/photo-1579783902614-a3fb3927b6a5",
        ],
        "Packaging Design" => &["https://images.unsplash.com/photo-1605600659908-0ef719419d41"],
        "Social Media" => &["https://images.unsplash.com/photo-1611162617474-5b21e879e113"],
        _ => return None,
    };

    Some(images)
}

pub fn image_by_category(category: &str) -> String {
    image_by_category_at(category, 0)
}

// categories hold a few images so that a grid of one category does not repeat
pub fn image_by_category_at(category: &str, index: usize) -> String {
    match category_images(category) {
        Some(images) if !images.is_empty() => images[index % images.len()].to_owned(),
        _ => {
            debug!("no image for category {category:?}, using default");
            PORTFOLIO_DEFAULT.to_owned()
        }
    }
}

pub fn designer_image(name: &str) -> String {
    let url = match name {
        "Sarah Chen" => "https://images.unsplash.com/photo-1494790108377-be9c29b29330",
        "Marcus Johnson" => "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d",
        "Elena Rodriguez" => "https://images.unsplash.com/photo-1438761681033-6461ffad8d80",
        "David Kim" => "https://images.unsplash.com/photo-1500648767791-00dcc994a43e",
        "Aisha Patel" => "https://images.unsplash.com/photo-1544005313-94ddf0286df2",
        "James Wilson" => "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e",
        _ => {
            debug!("no portrait for designer {name:?}, using default");
            DESIGNER_DEFAULT
        }
    };

    url.to_owned()
}

pub fn hero_image(slide: &str) -> String {
    let url = match slide {
        "creative-studio" => "https://images.unsplash.com/photo-1558655146-d09347e92766",
        "brand-identity" => "https://images.unsplash.com/photo-1524758631624-e2822e304c36",
        "digital-experiences" => "https://images.unsplash.com/photo-1559028006-448665bd7c7f",
        _ => {
            debug!("no hero image for slide {slide:?}, using default");
            HERO_DEFAULT
        }
    };

    url.to_owned()
}

// the item's own image when it looks usable, otherwise one for its category
//
// the image host serves extensionless urls, so those count as usable too
pub fn item_image(item: &PortfolioItem) -> String {
    item_image_at(item, 0)
}

// as item_image, with the item's position in a grid picking the fallback
pub fn item_image_at(item: &PortfolioItem, index: usize) -> String {
    if is_valid_image_url(&item.image_url) || is_image_host_url(&item.image_url) {
        item.image_url.clone()
    } else {
        image_by_category_at(&item.category, index)
    }
}

fn is_image_host_url(url: &str) -> bool {
    URL_PARTS
        .captures(url)
        .is_some_and(|caps| caps[2].eq_ignore_ascii_case(IMAGE_HOST))
}

// only a syntactic check; says nothing about whether the image exists
pub fn is_valid_image_url(url: &str) -> bool {
    match URL_PARTS.captures(url.trim()) {
        Some(caps) => caps
            .get(3)
            .is_some_and(|path| IMAGE_SUFFIX.is_match(path.as_str())),
        None => false,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSize {
    Thumbnail,
    Card,
    Portrait,
    Hero,
}

impl ImageSize {
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            ImageSize::Thumbnail => (300, 225),
            ImageSize::Card => (600, 450),
            ImageSize::Portrait => (160, 160),
            ImageSize::Hero => (1920, 1080),
        }
    }
}

pub fn sized_image_url(url: &str, size: ImageSize, quality: u8) -> String {
    let (width, height) = size.dimensions();
    optimized_image_url(url, width, height, Some(quality))
}

// sets w, h, fit=crop and q on urls served by IMAGE_HOST
//
// existing values are replaced where they stand and missing ones are appended,
// so any other query parameters keep their order
pub fn optimized_image_url(url: &str, width: u32, height: u32, quality: Option<u8>) -> String {
    let caps = match URL_PARTS.captures(url) {
        Some(caps) => caps,
        None => {
            warn!("could not parse image url {url:?}, leaving it alone");
            return url.to_owned();
        }
    };

    if !caps[2].eq_ignore_ascii_case(IMAGE_HOST) {
        return url.to_owned();
    }

    let mut params: Vec<(String, String)> = caps
        .get(4)
        .map(|query| {
            query
                .as_str()
                .split('&')
                .filter(|pair| !pair.is_empty())
                .map(|pair| match pair.split_once('=') {
                    Some((k, v)) => (k.to_owned(), v.to_owned()),
                    None => (pair.to_owned(), String::new()),
                })
                .collect()
        })
        .unwrap_or_default();

    let quality = quality.unwrap_or(DEFAULT_QUALITY);
    set_param(&mut params, "w", &width.to_string());
    set_param(&mut params, "h", &height.to_string());
    set_param(&mut params, "fit", "crop");
    set_param(&mut params, "q", &quality.to_string());

    let query = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}://{}{}?{}{}",
        &caps[1],
        &caps[2],
        &caps[3],
        query,
        caps.get(5).map_or("", |m| m.as_str())
    )
}

fn set_param(params: &mut Vec<(String, String)>, key: &str, value: &str) {
    let mut seen = false;
    params.retain_mut(|(k, v)| {
        if k != key {
            return true;
        }
        if seen {
            return false;
        }
        seen = true;
        *v = value.to_owned();
        true
    });

    if !seen {
        params.push((key.to_owned(), value.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_use_family_defaults() {
        for category in ["", "Pottery", "logo design", "Logo Design "] {
            assert_eq!(image_by_category(category), PORTFOLIO_DEFAULT);
        }
        for name in ["", "Nobody", "sarah chen"] {
            assert_eq!(designer_image(name), DESIGNER_DEFAULT);
        }
        for slide in ["", "slide-9", "Brand-Identity"] {
            assert_eq!(hero_image(slide), HERO_DEFAULT);
        }
    }

    #[test]
    fn known_keys_resolve() {
        assert_ne!(image_by_category("Logo Design"), PORTFOLIO_DEFAULT);
        assert_ne!(designer_image("Sarah Chen"), DESIGNER_DEFAULT);
        assert_ne!(hero_image("brand-identity"), HERO_DEFAULT);
    }

    #[test]
    fn category_index_wraps() {
        assert_eq!(
            image_by_category_at("Web Design", 0),
            image_by_category_at("Web Design", 2)
        );
        assert_ne!(
            image_by_category_at("Web Design", 0),
            image_by_category_at("Web Design", 1)
        );
        assert_eq!(image_by_category_at("Pottery", 5), PORTFOLIO_DEFAULT);
    }

    #[test]
    fn other_hosts_pass_through() {
        for url in [
            "https://cdn.example.com/a.png?w=10",
            "http://example.com/photo.jpg",
            "not a url",
            "",
            "ftp://images.unsplash.com/photo-1",
        ] {
            assert_eq!(optimized_image_url(url, 400, 300, None), url);
        }
    }

    #[test]
    fn image_host_gets_sizing_params() {
        assert_eq!(
            optimized_image_url("https://images.unsplash.com/photo-1", 400, 300, None),
            "https://images.unsplash.com/photo-1?w=400&h=300&fit=crop&q=80"
        );
        assert_eq!(
            optimized_image_url("https://images.unsplash.com/photo-1", 400, 300, Some(55)),
            "https://images.unsplash.com/photo-1?w=400&h=300&fit=crop&q=55"
        );
    }

    #[test]
    fn existing_params_are_replaced_in_place() {
        assert_eq!(
            optimized_image_url(
                "https://images.unsplash.com/photo-1?auto=format&q=10&w=5&w=6#top",
                800,
                600,
                None
            ),
            "https://images.unsplash.com/photo-1?auto=format&q=80&w=800&h=600&fit=crop#top"
        );
    }

    #[test]
    fn image_url_validation_is_syntactic() {
        assert!(is_valid_image_url("https://cdn.example.com/a/b.PNG"));
        assert!(is_valid_image_url("http://example.com/x.jpeg?v=2"));
        assert!(is_valid_image_url("https://example.com/logo.svg#mark"));

        assert!(!is_valid_image_url("https://example.com/page.html"));
        assert!(!is_valid_image_url("ftp://example.com/a.png"));
        assert!(!is_valid_image_url("/local/a.png"));
        assert!(!is_valid_image_url("https://images.unsplash.com/photo-1"));
        assert!(!is_valid_image_url("https://example.com/a.png/"));
    }

    #[test]
    fn item_images_fall_back_to_category() {
        let mut item = PortfolioItem {
            id: "id1".into(),
            title: "Mark".into(),
            designer: "Sarah Chen".into(),
            category: "Logo Design".into(),
            image_url: "https://images.unsplash.com/photo-1".into(),
            is_liked: None,
            description: None,
            price: None,
            tags: None,
            features: None,
        };
        assert_eq!(item_image(&item), "https://images.unsplash.com/photo-1");

        item.image_url = "https://cdn.example.com/mark.webp".into();
        assert_eq!(item_image(&item), "https://cdn.example.com/mark.webp");

        item.image_url = String::new();
        assert_eq!(item_image(&item), image_by_category("Logo Design"));

        // neighbours in a grid get different fallbacks
        assert_ne!(item_image_at(&item, 0), item_image_at(&item, 1));
        assert_eq!(item_image_at(&item, 1), image_by_category_at("Logo Design", 1));
    }
}
