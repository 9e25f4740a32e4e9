//! The invitation content document persisted in `content_json`.
//!
//! Every list is position-significant: its order is the display order.

use serde::{Deserialize, Serialize};

pub const DEFAULT_GALLERY_ASPECT: &str = "aspect-[2/3]";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Video,
    #[default]
    Image,
}

impl MediaType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "video" => Some(MediaType::Video),
            "image" => Some(MediaType::Image),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ImageItem {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryImageItem {
    pub src: String,
    pub alt: String,
    pub title: String,
    pub aspect: String,
}

impl Default for GalleryImageItem {
    fn default() -> Self {
        Self {
            src: String::new(),
            alt: String::new(),
            title: String::new(),
            aspect: DEFAULT_GALLERY_ASPECT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MapLink {
    pub name: String,
    pub icon: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DetailItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AccountInfo {
    pub name: String,
    pub account: String,
    pub bank: String,
    pub holder: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Couple {
    pub groom_name: String,
    pub bride_name: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Wedding {
    pub date_label: String,
    pub header_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeroMedia {
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub mobile_src: String,
    pub desktop_src: String,
    pub poster: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct HeroSection {
    pub title: String,
    pub images: Vec<ImageItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct IntroSection {
    pub title: String,
    pub description: String,
    pub image: ImageItem,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GallerySection {
    pub title: String,
    pub more_label: String,
    pub images: Vec<GalleryImageItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSection {
    pub title: String,
    /// `YYYY-MM-DD`
    pub selected_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DetailsSection {
    pub venue_name: String,
    pub venue_description: String,
    pub address: String,
    pub detail_address: String,
    pub station_description: String,
    pub map_links: Vec<MapLink>,
    pub items: Vec<DetailItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountSection {
    pub title: String,
    pub description_top: String,
    pub description_bottom: String,
    pub groom_title: String,
    pub bride_title: String,
    pub groom_accounts: Vec<AccountInfo>,
    pub bride_accounts: Vec<AccountInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShareMeta {
    pub kakao_title: String,
    pub kakao_description: String,
    pub og_image_url: String,
    pub kakao_image_url: String,
    pub image_url: String,
    pub button_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub tagline: String,
    pub name_line: String,
    pub date_line: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub couple: Couple,
    pub wedding: Wedding,
    pub hero_media: HeroMedia,
    pub hero_section: HeroSection,
    pub intro_section: IntroSection,
    pub gallery_section: GallerySection,
    pub calendar_section: CalendarSection,
    pub details_section: DetailsSection,
    pub account_section: AccountSection,
    pub share: ShareMeta,
    pub footer: Footer,
}

impl ContentDocument {
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
