//! Low-level ZIP container parser.
//!
//! Walks ZIP structures over an in-memory byte buffer. The directory
//! archive is fetched whole before parsing, so all reads are plain slice
//! accesses with no seeking I/O.
//!
//! ## Parsing Strategy
//!
//! ZIP containers are read from the end:
//! 1. Find the End of Central Directory (EOCD) at the buffer's tail
//! 2. Read the Central Directory to get metadata for all members
//! 3. For each member, read its Local File Header to locate the data

use byteorder::{LittleEndian, ReadBytesExt};
use flate2::read::DeflateDecoder;
use std::io::{Cursor, Read};

use crate::error::{BicDirError, Result};

use super::structures::*;

/// Maximum ZIP comment size allowed by the format (65535 bytes).
///
/// This limits the search area when looking for EOCD with a comment.
const MAX_COMMENT_SIZE: usize = 65535;

/// Low-level ZIP container parser over a byte buffer.
///
/// Typically used through [`unpack`](super::unpack) rather than directly.
pub struct ZipParser<'a> {
    data: &'a [u8],
}

impl<'a> ZipParser<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Find and parse the End of Central Directory record.
    ///
    /// Handles both the simple case (no comment) and archives with
    /// trailing comments by searching backwards for the signature.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid EOCD can be found, indicating the
    /// buffer is not a valid ZIP container.
    pub fn find_eocd(&self) -> Result<EndOfCentralDirectory> {
        // Fast path: EOCD at the very end, zero-length comment.
        if self.data.len() >= EndOfCentralDirectory::SIZE {
            let tail = &self.data[self.data.len() - EndOfCentralDirectory::SIZE..];
            if &tail[0..4] == EndOfCentralDirectory::SIGNATURE && &tail[20..22] == b"\x00\x00" {
                return EndOfCentralDirectory::from_bytes(tail);
            }
        }

        // The record sits earlier when the archive carries a comment.
        // Search backwards from the end of the buffer.
        let search_size = (MAX_COMMENT_SIZE + EndOfCentralDirectory::SIZE).min(self.data.len());
        let search = &self.data[self.data.len() - search_size..];

        for i in (0..search.len().saturating_sub(EndOfCentralDirectory::SIZE)).rev() {
            if &search[i..i + 4] == EndOfCentralDirectory::SIGNATURE {
                // Candidate record - the comment length field must account
                // for every byte that follows it.
                let comment_len = u16::from_le_bytes([search[i + 20], search[i + 21]]) as usize;

                if comment_len == search.len() - i - EndOfCentralDirectory::SIZE {
                    return EndOfCentralDirectory::from_bytes(
                        &search[i..i + EndOfCentralDirectory::SIZE],
                    );
                }
            }
        }

        Err(BicDirError::ArchiveFormat {
            reason: "no end of central directory record",
        })
    }

    /// List all members of the archive in central-directory order.
    ///
    /// # Errors
    ///
    /// Returns an error if the container structures are invalid.
    pub fn entries(&self) -> Result<Vec<ZipEntry>> {
        let eocd = self.find_eocd()?;

        let start = eocd.cd_offset as usize;
        let end = start
            .checked_add(eocd.cd_size as usize)
            .filter(|&end| end <= self.data.len())
            .ok_or(BicDirError::ArchiveFormat {
                reason: "central directory out of bounds",
            })?;

        let mut cursor = Cursor::new(&self.data[start..end]);
        let mut entries = Vec::with_capacity(eocd.total_entries as usize);

        for _ in 0..eocd.total_entries {
            entries.push(self.parse_cdfh(&mut cursor)?);
        }

        Ok(entries)
    }

    /// Parse one Central Directory File Header from a cursor.
    fn parse_cdfh(&self, cursor: &mut Cursor<&[u8]>) -> Result<ZipEntry> {
        let mut sig = [0u8; 4];
        cursor.read_exact(&mut sig)?;
        if sig != CDFH_SIGNATURE {
            return Err(BicDirError::ArchiveFormat {
                reason: "invalid central directory file header",
            });
        }

        let _version_made_by = cursor.read_u16::<LittleEndian>()?;
        let _version_needed = cursor.read_u16::<LittleEndian>()?;
        let _flags = cursor.read_u16::<LittleEndian>()?;
        let compression_method = cursor.read_u16::<LittleEndian>()?;
        let _last_mod_time = cursor.read_u16::<LittleEndian>()?;
        let _last_mod_date = cursor.read_u16::<LittleEndian>()?;
        let crc32 = cursor.read_u32::<LittleEndian>()?;
        let compressed_size = cursor.read_u32::<LittleEndian>()? as u64;
        let uncompressed_size = cursor.read_u32::<LittleEndian>()? as u64;
        let file_name_length = cursor.read_u16::<LittleEndian>()?;
        let extra_field_length = cursor.read_u16::<LittleEndian>()?;
        let file_comment_length = cursor.read_u16::<LittleEndian>()?;
        let _disk_number_start = cursor.read_u16::<LittleEndian>()?;
        let _internal_attrs = cursor.read_u16::<LittleEndian>()?;
        let _external_attrs = cursor.read_u32::<LittleEndian>()?;
        let lfh_offset = cursor.read_u32::<LittleEndian>()? as u64;

        let mut file_name_bytes = vec![0u8; file_name_length as usize];
        cursor.read_exact(&mut file_name_bytes)?;
        // Lossy conversion handles non-UTF8 member names gracefully
        let name = String::from_utf8_lossy(&file_name_bytes).to_string();

        // Directory members end with '/'
        let is_directory = name.ends_with('/');

        // Extra field and comment carry nothing we consume
        cursor.set_position(
            cursor.position() + extra_field_length as u64 + file_comment_length as u64,
        );

        Ok(ZipEntry {
            name,
            compression_method: CompressionMethod::from_u16(compression_method),
            compressed_size,
            uncompressed_size,
            crc32,
            lfh_offset,
            is_directory,
        })
    }

    /// Read one member's raw bytes, inflating DEFLATE members.
    ///
    /// The Local File Header has variable-length fields (name, extra field)
    /// that may differ from the Central Directory entry, so the data offset
    /// is resolved from the LFH itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the member's header or data cannot be read; the
    /// caller decides whether that is fatal.
    pub fn member_bytes(&self, entry: &ZipEntry) -> Result<Vec<u8>> {
        let lfh_start = entry.lfh_offset as usize;
        let lfh = lfh_start
            .checked_add(LFH_SIZE)
            .and_then(|end| self.data.get(lfh_start..end))
            .ok_or(BicDirError::ArchiveFormat {
                reason: "local file header out of bounds",
            })?;

        if &lfh[0..4] != LFH_SIGNATURE {
            return Err(BicDirError::ArchiveFormat {
                reason: "invalid local file header",
            });
        }

        let file_name_length = u16::from_le_bytes([lfh[26], lfh[27]]) as usize;
        let extra_field_length = u16::from_le_bytes([lfh[28], lfh[29]]) as usize;

        // Data starts after: LFH (30 bytes) + name + extra field
        let data_start = lfh_start + LFH_SIZE + file_name_length + extra_field_length;
        let compressed = data_start
            .checked_add(entry.compressed_size as usize)
            .and_then(|end| self.data.get(data_start..end))
            .ok_or(BicDirError::ArchiveFormat {
                reason: "member data out of bounds",
            })?;

        match entry.compression_method {
            CompressionMethod::Stored => Ok(compressed.to_vec()),
            CompressionMethod::Deflate => {
                let mut decoder = DeflateDecoder::new(compressed);
                let mut out = Vec::with_capacity(entry.uncompressed_size as usize);
                decoder
                    .read_to_end(&mut out)
                    .map_err(|_| BicDirError::ArchiveFormat {
                        reason: "corrupt DEFLATE stream",
                    })?;
                Ok(out)
            }
            CompressionMethod::Unknown(_) => Err(BicDirError::ArchiveFormat {
                reason: "unsupported compression method",
            }),
        }
    }
}
