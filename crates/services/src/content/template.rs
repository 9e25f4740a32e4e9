use mariecard_db::models::{
    AccountInfo, AccountSection, CalendarSection, ContentDocument, Couple, DEFAULT_GALLERY_ASPECT,
    DetailItem, DetailsSection, Footer, GalleryImageItem, GallerySection, HeroMedia, HeroSection,
    ImageItem, IntroSection, MapLink, MediaType, ShareMeta, Wedding,
};

pub const PLACEHOLDER_IMAGE: &str = "/img/placeholder-gray.svg";

const HERO_IMAGE_COUNT: usize = 3;
const GALLERY_IMAGE_COUNT: usize = 12;

/// Source of the canonical blank document: the normalization fallback and
/// the seed of every new draft.
pub trait TemplateProvider: Send + Sync {
    fn blank(&self) -> ContentDocument;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTemplate;

impl TemplateProvider for DefaultTemplate {
    fn blank(&self) -> ContentDocument {
        blank_document()
    }
}

pub fn blank_document() -> ContentDocument {
    let hero_images = (1..=HERO_IMAGE_COUNT)
        .map(|n| ImageItem {
            src: PLACEHOLDER_IMAGE.to_string(),
            alt: format!("section-image-{n}"),
        })
        .collect();

    let gallery_images = (1..=GALLERY_IMAGE_COUNT)
        .map(|n| GalleryImageItem {
            src: PLACEHOLDER_IMAGE.to_string(),
            alt: format!("gallery-image-{n}"),
            title: String::new(),
            aspect: DEFAULT_GALLERY_ASPECT.to_string(),
        })
        .collect();

    ContentDocument {
        couple: Couple {
            groom_name: "Daniel Hong, son of Gildong Hong".to_string(),
            bride_name: "Sarah Lee, daughter of Minho Lee".to_string(),
            display_name: "Daniel & Sarah".to_string(),
        },
        wedding: Wedding {
            date_label: "Saturday, February 14, 2026 at 5 PM".to_string(),
            header_label: "Feb 14, 2026 · 5 PM".to_string(),
        },
        hero_media: HeroMedia {
            media_type: MediaType::Image,
            mobile_src: PLACEHOLDER_IMAGE.to_string(),
            desktop_src: PLACEHOLDER_IMAGE.to_string(),
            poster: PLACEHOLDER_IMAGE.to_string(),
        },
        hero_section: HeroSection {
            title: "Saturday, February 14, 2026 at 5 PM\nRaum Art Center".to_string(),
            images: hero_images,
        },
        intro_section: IntroSection {
            title: "After years of sharing our days,\nwe are taking our first step as a family."
                .to_string(),
            description: "We would be honored to celebrate this day with the people we love."
                .to_string(),
            image: ImageItem {
                src: PLACEHOLDER_IMAGE.to_string(),
                alt: "intro-image".to_string(),
            },
        },
        gallery_section: GallerySection {
            title: "Gallery".to_string(),
            more_label: "Show more photos".to_string(),
            images: gallery_images,
        },
        calendar_section: CalendarSection {
            title: "Save the date".to_string(),
            selected_date: "2026-02-14".to_string(),
        },
        details_section: DetailsSection {
            venue_name: "Raum Art Center".to_string(),
            venue_description: "Ceremony and dinner are held in the same hall.".to_string(),
            address: "564 Eonju-ro, Gangnam-gu, Seoul".to_string(),
            detail_address: String::new(),
            station_description: "7 minutes on foot from Seonjeongneung station, exit 4"
                .to_string(),
            map_links: vec![
                MapLink {
                    name: "Kakao Map".to_string(),
                    icon: "/icon/kakaomap.png".to_string(),
                    url: "https://map.kakao.com".to_string(),
                },
                MapLink {
                    name: "Naver Map".to_string(),
                    icon: "/icon/navermap.png".to_string(),
                    url: "https://map.naver.com".to_string(),
                },
                MapLink {
                    name: "TMAP".to_string(),
                    icon: "/icon/tmap.png".to_string(),
                    url: "https://www.tmap.co.kr".to_string(),
                },
            ],
            items: vec![
                DetailItem {
                    title: "Parking".to_string(),
                    description: "Parking is available in the building, free for 2 hours."
                        .to_string(),
                },
                DetailItem {
                    title: "Shuttle".to_string(),
                    description: "A shuttle runs every 20 minutes from an hour before."
                        .to_string(),
                },
            ],
        },
        account_section: AccountSection {
            title: "Sending your heart".to_string(),
            description_top: "For guests who cannot attend in person.".to_string(),
            description_bottom: "Thank you for your warm wishes.".to_string(),
            groom_title: "Groom's side".to_string(),
            bride_title: "Bride's side".to_string(),
            groom_accounts: vec![AccountInfo {
                name: "Groom".to_string(),
                account: "1002-123-456789".to_string(),
                bank: "Woori Bank".to_string(),
                holder: "Daniel Hong".to_string(),
            }],
            bride_accounts: vec![AccountInfo {
                name: "Bride".to_string(),
                account: "110-987-654321".to_string(),
                bank: "Shinhan Bank".to_string(),
                holder: "Sarah Lee".to_string(),
            }],
        },
        share: ShareMeta {
            kakao_title: "You're invited".to_string(),
            kakao_description: "Saturday, February 14, 2026 at 5 PM, Raum Art Center".to_string(),
            og_image_url: PLACEHOLDER_IMAGE.to_string(),
            kakao_image_url: PLACEHOLDER_IMAGE.to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            button_title: "Open invitation".to_string(),
        },
        footer: Footer {
            tagline: "Thank you for being with us.".to_string(),
            name_line: "Daniel & Sarah".to_string(),
            date_line: "2026.02.14".to_string(),
        },
    }
}
