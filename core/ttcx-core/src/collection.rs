//! Opening font collections and enumerating their faces (made by FontLab https://www.fontlab.com/)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use log::debug;
use read_fonts::types::Tag;
use read_fonts::{CollectionRef, FileRef, FontRef};
use serde::Serialize;

use crate::names::{family_name, UNKNOWN_FAMILY};
use crate::tags::tag_to_string;

/// Summary of one face inside a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaceInfo {
    pub index: u32,
    pub family_name: Option<String>,
    #[serde(serialize_with = "serialize_tags")]
    pub tables: Vec<Tag>,
}

impl FaceInfo {
    /// Family name, or the placeholder when none could be read.
    pub fn display_name(&self) -> &str {
        self.family_name.as_deref().unwrap_or(UNKNOWN_FAMILY)
    }
}

/// An opened `.ttc`/`.otc` file held in memory.
#[derive(Debug, Clone)]
pub struct FontCollection {
    path: Option<PathBuf>,
    data: Vec<u8>,
    face_count: u32,
}

impl FontCollection {
    /// Read and validate the collection at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data =
            fs::read(path).with_context(|| format!("reading collection {}", path.display()))?;
        debug!("read {} bytes from {}", data.len(), path.display());

        let mut collection = Self::from_bytes(data)
            .with_context(|| format!("parsing collection {}", path.display()))?;
        collection.path = Some(path.to_path_buf());
        Ok(collection)
    }

    /// Validate an in-memory collection.
    ///
    /// Every face's table directory is parsed up front so that a truncated or
    /// corrupt file fails here rather than halfway through an extraction.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let face_count = {
            let collection = parse_collection(&data)?;
            for index in 0..collection.len() {
                collection
                    .get(index)
                    .map_err(|err| anyhow!("face {index} is malformed: {err}"))?;
            }
            collection.len()
        };
        debug!("collection holds {face_count} faces");

        Ok(Self {
            path: None,
            data,
            face_count,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> u32 {
        self.face_count
    }

    pub fn is_empty(&self) -> bool {
        self.face_count == 0
    }

    /// Borrow the face at `index`.
    pub fn face(&self, index: u32) -> Result<FontRef<'_>> {
        if index >= self.face_count {
            bail!(
                "face index {index} out of range (collection has {} faces)",
                self.face_count
            );
        }

        parse_collection(&self.data)?
            .get(index)
            .map_err(|err| anyhow!("face {index} is malformed: {err}"))
    }

    /// Describe the face at `index`.
    pub fn face_info(&self, index: u32) -> Result<FaceInfo> {
        let font = self.face(index)?;
        let tables = font
            .table_directory
            .table_records()
            .iter()
            .map(|rec| rec.tag())
            .collect();

        Ok(FaceInfo {
            index,
            family_name: family_name(&self.data, &font, index),
            tables,
        })
    }

    /// Describe every face, in collection order.
    pub fn faces(&self) -> Result<Vec<FaceInfo>> {
        (0..self.face_count)
            .map(|index| self.face_info(index))
            .collect()
    }
}

fn parse_collection(data: &[u8]) -> Result<CollectionRef<'_>> {
    match FileRef::new(data).map_err(|err| anyhow!("unreadable font data: {err}"))? {
        FileRef::Collection(collection) => Ok(collection),
        FileRef::Font(_) => Err(anyhow!(
            "not a font collection (expected a ttcf header, found a single font)"
        )),
    }
}

fn serialize_tags<S>(tags: &[Tag], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let as_strings: Vec<String> = tags.iter().copied().map(tag_to_string).collect();
    as_strings.serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{build_collection, build_face};

    fn two_faces() -> Vec<u8> {
        build_collection(&[
            build_face(Some("MingLiU"), 3),
            build_face(Some("PMingLiU"), 4),
        ])
    }

    #[test]
    fn counts_faces() {
        let collection = FontCollection::from_bytes(two_faces()).expect("open");
        assert_eq!(collection.len(), 2);
        assert!(!collection.is_empty());
        assert!(collection.path().is_none());
        assert_eq!(&collection.data()[..4], b"ttcf");
    }

    #[test]
    fn lists_faces_in_order() {
        let collection = FontCollection::from_bytes(two_faces()).expect("open");
        let faces = collection.faces().expect("faces");

        let names: Vec<&str> = faces.iter().map(FaceInfo::display_name).collect();
        assert_eq!(names, vec!["MingLiU", "PMingLiU"]);
        assert_eq!(faces[1].index, 1);
        assert!(faces[0].tables.contains(&Tag::new(b"maxp")));
    }

    #[test]
    fn rejects_standalone_font() {
        let err = FontCollection::from_bytes(build_face(Some("Solo"), 1)).unwrap_err();
        assert!(err.to_string().contains("not a font collection"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(FontCollection::from_bytes(b"definitely not a font".to_vec()).is_err());
    }

    #[test]
    fn rejects_truncated_face_directory() {
        let mut data = two_faces();
        // Keep the header and offsets, drop the second face.
        let second = u32::from_be_bytes([data[16], data[17], data[18], data[19]]) as usize;
        data.truncate(second + 4);

        assert!(FontCollection::from_bytes(data).is_err());
    }

    #[test]
    fn face_out_of_range_errors() {
        let collection = FontCollection::from_bytes(two_faces()).expect("open");
        assert!(collection.face(2).is_err());
        assert!(collection.face_info(7).is_err());
    }

    #[test]
    fn missing_name_uses_placeholder() {
        let data = build_collection(&[build_face(None, 1)]);
        let collection = FontCollection::from_bytes(data).expect("open");
        let face = collection.face_info(0).expect("face");

        assert_eq!(face.family_name, None);
        assert_eq!(face.display_name(), UNKNOWN_FAMILY);
    }

    #[test]
    fn open_reports_missing_path() {
        let err = FontCollection::open("/nonexistent/ttcx/missing.ttc").unwrap_err();
        assert!(format!("{err:#}").contains("missing.ttc"));
    }
}
