//! Best-effort family names for listing (made by FontLab https://www.fontlab.com/)

use log::warn;
use read_fonts::tables::name::NameId;
use read_fonts::{FontRef, TableProvider};
use skrifa::string::StringId;
use skrifa::{FontRef as SkrifaFontRef, MetadataProvider};

/// Shown in listings when a face has no readable family name.
pub const UNKNOWN_FAMILY: &str = "（未知）";

/// Look up the font family name (name ID 1) of a collection face.
///
/// Never fails: a missing or unreadable `name` table just yields `None`.
/// The first record that decodes to non-blank text wins; if none does,
/// skrifa's English-or-first localized string is tried before giving up.
pub fn family_name(data: &[u8], font: &FontRef, index: u32) -> Option<String> {
    let found = first_family_record(font).or_else(|| localized_family(data, index));
    if found.is_none() {
        warn!("face {index}: no readable family name");
    }
    found
}

fn first_family_record(font: &FontRef) -> Option<String> {
    let name_table = font.name().ok()?;
    let data = name_table.string_data();

    name_table
        .name_record()
        .iter()
        .filter(|record| record.name_id() == NameId::FAMILY_NAME)
        .filter_map(|record| record.string(data).ok())
        .map(|entry| entry.to_string())
        .find(|rendered| !rendered.trim().is_empty())
}

fn localized_family(data: &[u8], index: u32) -> Option<String> {
    let font = SkrifaFontRef::from_index(data, index).ok()?;
    let entry = font
        .localized_strings(StringId::FAMILY_NAME)
        .english_or_first()?;
    let rendered: String = entry.chars().collect();

    if rendered.trim().is_empty() {
        None
    } else {
        Some(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{build_collection, build_face, build_face_with_raw_name, name_table};

    fn first_face_name(face: Vec<u8>) -> Option<String> {
        let data = build_collection(&[face]);
        let font = FontRef::from_index(&data, 0).expect("face");
        family_name(&data, &font, 0)
    }

    #[test]
    fn reads_family_record() {
        assert_eq!(
            first_face_name(build_face(Some("細明體"), 1)),
            Some("細明體".to_string())
        );
    }

    #[test]
    fn missing_table_is_none() {
        assert_eq!(first_face_name(build_face(None, 1)), None);
    }

    #[test]
    fn unreadable_table_is_none() {
        assert_eq!(first_face_name(build_face_with_raw_name(&[0, 0], 1)), None);
    }

    #[test]
    fn blank_family_is_none() {
        assert_eq!(
            first_face_name(build_face_with_raw_name(&name_table("   "), 1)),
            None
        );
    }

    #[test]
    fn picks_requested_face() {
        let data = build_collection(&[build_face(Some("Alpha"), 1), build_face(Some("Beta"), 2)]);
        let font = FontRef::from_index(&data, 1).expect("face");
        assert_eq!(family_name(&data, &font, 1), Some("Beta".to_string()));
    }
}
