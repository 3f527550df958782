//! In-memory ZIP container reading and member decoding.
//!
//! The module is organized into three components:
//!
//! - [`structures`]: records and signatures of the ZIP format
//! - [`parser`]: low-level walk over the container structures
//! - [`extractor`]: the [`unpack`] API turning archive bytes into
//!   windows-1251-decoded member texts
//!
//! A ZIP container consists of local file headers and data for each member,
//! a Central Directory with metadata for all members, and an End of Central
//! Directory record at the end. The parser reads the EOCD first, then the
//! Central Directory, then resolves each member's data through its local
//! header.
//!
//! ## Limitations
//!
//! - STORED and DEFLATE methods only
//! - No ZIP64, encryption, or multi-disk support

mod extractor;
mod parser;
mod structures;

pub use extractor::{ArchiveEntry, unpack};
pub use parser::ZipParser;
pub use structures::{CompressionMethod, ZipEntry};
