//! The content boundary: everything coming from a client or a stored row
//! passes through [`normalize`] before the core looks at it.

pub mod legacy;
pub mod normalize;
pub mod template;
pub mod validate;

use mariecard_db::models::ContentDocument;

pub use legacy::is_legacy_empty_content;
pub use normalize::normalize;
pub use template::{DefaultTemplate, TemplateProvider};
pub use validate::validate;

/// Label for the owner dashboard: share title, display name, then the
/// couple's names.
pub fn resolve_title(doc: &ContentDocument) -> String {
    let share_title = doc.share.kakao_title.trim();
    if !share_title.is_empty() {
        return share_title.to_string();
    }
    let display_name = doc.couple.display_name.trim();
    if !display_name.is_empty() {
        return display_name.to_string();
    }
    format!("{} {}", doc.couple.groom_name, doc.couple.bride_name)
        .trim()
        .to_string()
}
