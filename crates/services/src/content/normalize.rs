use mariecard_db::models::{
    AccountInfo, AccountSection, CalendarSection, ContentDocument, Couple, DEFAULT_GALLERY_ASPECT,
    DetailItem, DetailsSection, Footer, GalleryImageItem, GallerySection, HeroMedia, HeroSection,
    ImageItem, IntroSection, MapLink, MediaType, ShareMeta, Wedding,
};
use serde_json::Value;

static MISSING: Value = Value::Null;

/// Builds `Self` from an untrusted JSON value, taking every field that is
/// absent or of the wrong type from `base`.
trait Coerce: Sized + Clone + Default {
    fn coerce(raw: &Value, base: &Self) -> Self;
}

/// Child `key` of `raw`; anything that is not an object has no children.
fn field<'a>(raw: &'a Value, key: &str) -> &'a Value {
    raw.get(key).unwrap_or(&MISSING)
}

/// A present string wins over `base`, even when it trims to empty.
fn text(raw: &Value, key: &str, base: &str) -> String {
    match raw.get(key) {
        Some(Value::String(value)) => value.trim().to_string(),
        _ => base.to_string(),
    }
}

fn text_or(raw: &Value, key: &str) -> Option<String> {
    match raw.get(key) {
        Some(Value::String(value)) => Some(value.trim().to_string()),
        _ => None,
    }
}

/// Element `i` is coerced against `base[i]`, falling back to `base[0]` and
/// then the type default. A non-array keeps the whole base list.
fn coerce_list<T: Coerce>(raw: &Value, base: &[T]) -> Vec<T> {
    let Value::Array(items) = raw else {
        return base.to_vec();
    };

    let default = T::default();
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let template = base.get(i).or_else(|| base.first()).unwrap_or(&default);
            T::coerce(item, template)
        })
        .collect()
}

impl Coerce for ImageItem {
    fn coerce(raw: &Value, base: &Self) -> Self {
        Self {
            src: text(raw, "src", &base.src),
            alt: text(raw, "alt", &base.alt),
        }
    }
}

impl Coerce for GalleryImageItem {
    fn coerce(raw: &Value, base: &Self) -> Self {
        let base_aspect = if base.aspect.is_empty() {
            DEFAULT_GALLERY_ASPECT
        } else {
            base.aspect.as_str()
        };
        Self {
            src: text(raw, "src", &base.src),
            alt: text(raw, "alt", &base.alt),
            title: text(raw, "title", &base.title),
            aspect: text(raw, "aspect", base_aspect),
        }
    }
}

impl Coerce for MapLink {
    fn coerce(raw: &Value, base: &Self) -> Self {
        Self {
            name: text(raw, "name", &base.name),
            icon: text(raw, "icon", &base.icon),
            url: text(raw, "url", &base.url),
        }
    }
}

impl Coerce for DetailItem {
    fn coerce(raw: &Value, base: &Self) -> Self {
        Self {
            title: text(raw, "title", &base.title),
            description: text(raw, "description", &base.description),
        }
    }
}

impl Coerce for AccountInfo {
    fn coerce(raw: &Value, base: &Self) -> Self {
        Self {
            name: text(raw, "name", &base.name),
            account: text(raw, "account", &base.account),
            bank: text(raw, "bank", &base.bank),
            holder: text(raw, "holder", &base.holder),
        }
    }
}

impl Coerce for Couple {
    fn coerce(raw: &Value, base: &Self) -> Self {
        Self {
            groom_name: text(raw, "groomName", &base.groom_name),
            bride_name: text(raw, "brideName", &base.bride_name),
            display_name: text(raw, "displayName", &base.display_name),
        }
    }
}

impl Coerce for Wedding {
    fn coerce(raw: &Value, base: &Self) -> Self {
        Self {
            date_label: text(raw, "dateLabel", &base.date_label),
            header_label: text(raw, "headerLabel", &base.header_label),
        }
    }
}

impl Coerce for HeroMedia {
    fn coerce(raw: &Value, base: &Self) -> Self {
        let media_type = raw
            .get("type")
            .and_then(Value::as_str)
            .and_then(MediaType::parse)
            .unwrap_or(base.media_type);
        Self {
            media_type,
            mobile_src: text(raw, "mobileSrc", &base.mobile_src),
            desktop_src: text(raw, "desktopSrc", &base.desktop_src),
            poster: text(raw, "poster", &base.poster),
        }
    }
}

impl Coerce for HeroSection {
    fn coerce(raw: &Value, base: &Self) -> Self {
        Self {
            title: text(raw, "title", &base.title),
            images: coerce_list(field(raw, "images"), &base.images),
        }
    }
}

impl Coerce for IntroSection {
    fn coerce(raw: &Value, base: &Self) -> Self {
        Self {
            title: text(raw, "title", &base.title),
            description: text(raw, "description", &base.description),
            image: ImageItem::coerce(field(raw, "image"), &base.image),
        }
    }
}

impl Coerce for GallerySection {
    fn coerce(raw: &Value, base: &Self) -> Self {
        Self {
            title: text(raw, "title", &base.title),
            more_label: text(raw, "moreLabel", &base.more_label),
            images: coerce_list(field(raw, "images"), &base.images),
        }
    }
}

impl Coerce for CalendarSection {
    fn coerce(raw: &Value, base: &Self) -> Self {
        Self {
            title: text(raw, "title", &base.title),
            selected_date: text(raw, "selectedDate", &base.selected_date),
        }
    }
}

impl Coerce for DetailsSection {
    fn coerce(raw: &Value, base: &Self) -> Self {
        Self {
            venue_name: text(raw, "venueName", &base.venue_name),
            venue_description: text(raw, "venueDescription", &base.venue_description),
            address: text(raw, "address", &base.address),
            detail_address: text(raw, "detailAddress", &base.detail_address),
            station_description: text(raw, "stationDescription", &base.station_description),
            map_links: coerce_list(field(raw, "mapLinks"), &base.map_links),
            items: coerce_list(field(raw, "items"), &base.items),
        }
    }
}

impl Coerce for AccountSection {
    fn coerce(raw: &Value, base: &Self) -> Self {
        Self {
            title: text(raw, "title", &base.title),
            description_top: text(raw, "descriptionTop", &base.description_top),
            description_bottom: text(raw, "descriptionBottom", &base.description_bottom),
            groom_title: text(raw, "groomTitle", &base.groom_title),
            bride_title: text(raw, "brideTitle", &base.bride_title),
            groom_accounts: coerce_list(field(raw, "groomAccounts"), &base.groom_accounts),
            bride_accounts: coerce_list(field(raw, "brideAccounts"), &base.bride_accounts),
        }
    }
}

impl Coerce for ShareMeta {
    fn coerce(raw: &Value, base: &Self) -> Self {
        let og = text_or(raw, "ogImageUrl");
        let kakao = text_or(raw, "kakaoImageUrl");
        let shared = text_or(raw, "imageUrl");

        Self {
            kakao_title: text(raw, "kakaoTitle", &base.kakao_title),
            kakao_description: text(raw, "kakaoDescription", &base.kakao_description),
            og_image_url: og
                .clone()
                .or_else(|| shared.clone())
                .unwrap_or_else(|| base.og_image_url.clone()),
            kakao_image_url: kakao
                .or_else(|| shared.clone())
                .unwrap_or_else(|| base.kakao_image_url.clone()),
            image_url: shared
                .or(og)
                .unwrap_or_else(|| base.image_url.clone()),
            button_title: text(raw, "buttonTitle", &base.button_title),
        }
    }
}

impl Coerce for Footer {
    fn coerce(raw: &Value, base: &Self) -> Self {
        Self {
            tagline: text(raw, "tagline", &base.tagline),
            name_line: text(raw, "nameLine", &base.name_line),
            date_line: text(raw, "dateLine", &base.date_line),
        }
    }
}

impl Coerce for ContentDocument {
    fn coerce(raw: &Value, base: &Self) -> Self {
        Self {
            couple: Couple::coerce(field(raw, "couple"), &base.couple),
            wedding: Wedding::coerce(field(raw, "wedding"), &base.wedding),
            hero_media: HeroMedia::coerce(field(raw, "heroMedia"), &base.hero_media),
            hero_section: HeroSection::coerce(field(raw, "heroSection"), &base.hero_section),
            intro_section: IntroSection::coerce(field(raw, "introSection"), &base.intro_section),
            gallery_section: GallerySection::coerce(
                field(raw, "gallerySection"),
                &base.gallery_section,
            ),
            calendar_section: CalendarSection::coerce(
                field(raw, "calendarSection"),
                &base.calendar_section,
            ),
            details_section: DetailsSection::coerce(
                field(raw, "detailsSection"),
                &base.details_section,
            ),
            account_section: AccountSection::coerce(
                field(raw, "accountSection"),
                &base.account_section,
            ),
            share: ShareMeta::coerce(field(raw, "share"), &base.share),
            footer: Footer::coerce(field(raw, "footer"), &base.footer),
        }
    }
}

/// Coerces arbitrary JSON into a well-formed document. Never fails.
///
/// After coercion, incomplete list entries are dropped (images without a
/// source, map links missing a name or url, detail items without a title,
/// accounts without a name). A hero or gallery list left empty is replaced
/// by the base list.
pub fn normalize(raw: &Value, base: &ContentDocument) -> ContentDocument {
    let mut doc = ContentDocument::coerce(raw, base);

    doc.hero_section.images.retain(|item| !item.src.is_empty());
    doc.gallery_section.images.retain(|item| !item.src.is_empty());
    doc.details_section
        .map_links
        .retain(|link| !link.name.is_empty() && !link.url.is_empty());
    doc.details_section.items.retain(|item| !item.title.is_empty());
    doc.account_section.groom_accounts.retain(|acc| !acc.name.is_empty());
    doc.account_section.bride_accounts.retain(|acc| !acc.name.is_empty());

    if doc.hero_section.images.is_empty() {
        doc.hero_section.images = base.hero_section.images.clone();
    }
    if doc.gallery_section.images.is_empty() {
        doc.gallery_section.images = base.gallery_section.images.clone();
    }

    doc
}
