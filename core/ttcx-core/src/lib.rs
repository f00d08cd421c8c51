//! ttcx-core: pulling single faces out of font collections
//!
//! Some consumers (PDF generators in particular) only understand a plain
//! sfnt and stumble over `.ttc`/`.otc` containers. This crate opens such a
//! collection, tells you which faces live inside, and writes any one of them
//! back out as a standalone font.
//!
//! ## What it does
//!
//! - **Open**: reads a collection and checks every face's table directory
//! - **List**: reports each face's index, family name and table tags
//! - **Extract**: copies one face's tables verbatim into a fresh sfnt
//!
//! ## Example
//!
//! ```rust,no_run
//! use ttcx_core::collection::FontCollection;
//! use ttcx_core::extract::save_face;
//!
//! let collection = FontCollection::open("/Windows/Fonts/mingliu.ttc")?;
//! for face in collection.faces()? {
//!     println!("[{}] {}", face.index, face.display_name());
//! }
//!
//! save_face(&collection, 0, "assets/fonts/mingliu.ttf")?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! All font-format parsing is done by read-fonts and skrifa; serialization
//! goes through write-fonts.
//!
//! ---
//!
//! Made at FontLab https://www.fontlab.com/

pub mod collection;
pub mod extract;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
pub mod names;
pub mod output;
pub mod tags;
