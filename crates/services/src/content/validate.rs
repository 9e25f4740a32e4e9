use mariecard_db::models::ContentDocument;

/// One message per missing required field. Empty means publishable.
pub fn validate(doc: &ContentDocument) -> Vec<String> {
    let required = [
        (doc.couple.groom_name.as_str(), "Groom name is required."),
        (doc.couple.bride_name.as_str(), "Bride name is required."),
        (doc.wedding.header_label.as_str(), "Header date label is required."),
        (doc.details_section.venue_name.as_str(), "Venue name is required."),
        (doc.details_section.address.as_str(), "Venue address is required."),
    ];

    let mut errors: Vec<String> = required
        .iter()
        .filter(|(value, _)| value.trim().is_empty())
        .map(|(_, message)| message.to_string())
        .collect();

    if doc.hero_section.images.is_empty() {
        errors.push("At least one hero image is required.".to_string());
    }
    if doc.gallery_section.images.is_empty() {
        errors.push("At least one gallery image is required.".to_string());
    }

    errors
}
