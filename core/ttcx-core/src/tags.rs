//! Tag helpers shared by listing and extraction (made by FontLab https://www.fontlab.com/)

use read_fonts::types::Tag;

/// Render a tag as its four ASCII characters.
pub fn tag_to_string(tag: Tag) -> String {
    String::from_utf8_lossy(&tag.to_be_bytes()).to_string()
}

/// Carry a tag read by read-fonts over to the write-fonts side.
///
/// The two crates may depend on different `font-types` releases, so the tag
/// travels through its raw bytes instead of being passed as-is.
pub fn to_write_tag(tag: Tag) -> write_fonts::types::Tag {
    write_fonts::types::Tag::new(&tag.to_be_bytes())
}
