//! In-memory fonts and collections for tests (made by FontLab https://www.fontlab.com/)
//!
//! Faces carry only `maxp` and an optional `name` table, which is all the
//! listing and extraction paths look at.

use write_fonts::types::Tag;
use write_fonts::FontBuilder;

const TTC_HEADER_LEN: usize = 12;
const SFNT_HEADER_LEN: usize = 12;
const TABLE_RECORD_LEN: usize = 16;

/// A format 0 `name` table holding one Windows Unicode BMP family record.
pub fn name_table(family: &str) -> Vec<u8> {
    let encoded: Vec<u8> = family.encode_utf16().flat_map(u16::to_be_bytes).collect();

    let mut table = Vec::new();
    table.extend(0u16.to_be_bytes()); // format
    table.extend(1u16.to_be_bytes()); // count
    table.extend(18u16.to_be_bytes()); // storage offset
    table.extend(3u16.to_be_bytes()); // platform: Windows
    table.extend(1u16.to_be_bytes()); // encoding: Unicode BMP
    table.extend(0x0409u16.to_be_bytes()); // language: en-US
    table.extend(1u16.to_be_bytes()); // name ID: font family
    table.extend((encoded.len() as u16).to_be_bytes());
    table.extend(0u16.to_be_bytes());
    table.extend(encoded);
    table
}

fn maxp_table(num_glyphs: u16) -> Vec<u8> {
    let mut table = Vec::new();
    table.extend(0x0000_5000u32.to_be_bytes());
    table.extend(num_glyphs.to_be_bytes());
    table
}

/// A standalone sfnt with `maxp` and, when `family` is given, a `name` table.
pub fn build_face(family: Option<&str>, num_glyphs: u16) -> Vec<u8> {
    let mut builder = FontBuilder::new();
    builder.add_raw(Tag::new(b"maxp"), maxp_table(num_glyphs));
    if let Some(family) = family {
        builder.add_raw(Tag::new(b"name"), name_table(family));
    }
    builder.build()
}

/// Like [`build_face`], with the `name` table bytes supplied verbatim.
pub fn build_face_with_raw_name(name: &[u8], num_glyphs: u16) -> Vec<u8> {
    let mut builder = FontBuilder::new();
    builder.add_raw(Tag::new(b"maxp"), maxp_table(num_glyphs));
    builder.add_raw(Tag::new(b"name"), name.to_vec());
    builder.build()
}

/// Wrap standalone sfnts into a version 1.0 `ttcf` collection.
///
/// Each face is copied whole and its table offsets are shifted to be
/// relative to the start of the collection.
pub fn build_collection(faces: &[Vec<u8>]) -> Vec<u8> {
    let header_len = TTC_HEADER_LEN + 4 * faces.len();

    let mut offsets = Vec::with_capacity(faces.len());
    let mut cursor = header_len;
    for face in faces {
        offsets.push(cursor);
        cursor += pad4(face.len());
    }

    let mut out = Vec::with_capacity(cursor);
    out.extend(b"ttcf");
    out.extend(0x0001_0000u32.to_be_bytes());
    out.extend((faces.len() as u32).to_be_bytes());
    for offset in &offsets {
        out.extend((*offset as u32).to_be_bytes());
    }

    for (face, base) in faces.iter().zip(offsets) {
        let mut relocated = face.clone();
        let num_tables = u16::from_be_bytes([face[4], face[5]]) as usize;
        for i in 0..num_tables {
            let at = SFNT_HEADER_LEN + i * TABLE_RECORD_LEN + 8;
            let offset = u32::from_be_bytes([face[at], face[at + 1], face[at + 2], face[at + 3]]);
            let shifted = offset + base as u32;
            relocated[at..at + 4].copy_from_slice(&shifted.to_be_bytes());
        }
        relocated.resize(pad4(relocated.len()), 0);
        out.extend(relocated);
    }

    out
}

fn pad4(len: usize) -> usize {
    (len + 3) & !3
}
