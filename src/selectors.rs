use once_cell::sync::Lazy;
use scraper::Selector;

pub(crate) static LD_JSON_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("script[type='application/ld+json']").expect("valid selector"));

pub(crate) static OG_IMAGE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta[property='og:image']").expect("valid selector"));

pub(crate) static ITEMPROP_IMAGE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img[itemprop='image']").expect("valid selector"));

pub(crate) static IMG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img").expect("valid selector"));
