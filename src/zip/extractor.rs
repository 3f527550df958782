use encoding_rs::WINDOWS_1251;
use tracing::{debug, warn};

use crate::error::Result;

use super::parser::ZipParser;

/// One unpacked archive member: its name and windows-1251-decoded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub text: String,
}

/// Unpack a ZIP buffer into (member name, decoded text) pairs.
///
/// Members are returned in central-directory order. Directory members,
/// members with empty payloads, and members whose data cannot be produced
/// are dropped; unreadable members are logged and counted rather than
/// failing the call.
///
/// Every retained payload is decoded as windows-1251. The code page maps
/// all 256 byte values, so decoding never fails, even for binary content.
///
/// # Errors
///
/// Returns an error only when the buffer is non-empty yet cannot be opened
/// as a ZIP container.
pub fn unpack(archive: &[u8]) -> Result<Vec<ArchiveEntry>> {
    if archive.is_empty() {
        return Ok(Vec::new());
    }

    let parser = ZipParser::new(archive);
    let entries = parser.entries()?;

    let mut unpacked = Vec::with_capacity(entries.len());
    let mut skipped = 0usize;

    for entry in &entries {
        if entry.is_directory {
            continue;
        }

        match parser.member_bytes(entry) {
            Ok(bytes) if bytes.is_empty() => {
                debug!(member = %entry.name, "dropping empty archive member");
            }
            Ok(bytes) => {
                let (text, _had_errors) = WINDOWS_1251.decode_without_bom_handling(&bytes);
                unpacked.push(ArchiveEntry {
                    name: entry.name.clone(),
                    text: text.into_owned(),
                });
            }
            Err(err) => {
                skipped += 1;
                warn!(member = %entry.name, error = %err, "skipping unreadable archive member");
            }
        }
    }

    if skipped > 0 {
        debug!(skipped, "unreadable archive members skipped");
    }

    Ok(unpacked)
}

#[cfg(test)]
mod tests {
    use super::super::testzip::ZipBuilder;
    use super::*;
    use crate::error::BicDirError;

    #[test]
    fn empty_buffer_yields_empty_list() {
        assert_eq!(unpack(&[]).unwrap(), Vec::new());
    }

    #[test]
    fn unpacks_single_member() {
        let mut builder = ZipBuilder::new();
        builder.add_stored("file.txt", b"hello world");
        let result = unpack(&builder.build()).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "file.txt");
        assert_eq!(result[0].text, "hello world");
    }

    #[test]
    fn preserves_member_insertion_order() {
        let mut builder = ZipBuilder::new();
        builder.add_stored("file1.txt", b"hello");
        builder.add_stored("file2.txt", b"world");
        let result = unpack(&builder.build()).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "file1.txt");
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].name, "file2.txt");
        assert_eq!(result[1].text, "world");
    }

    #[test]
    fn decodes_binary_payload_without_loss() {
        let mut builder = ZipBuilder::new();
        builder.add_stored("file.bin", &[0x00, 0x01, 0x02, 0x03, 0x04, 0x05]);
        let result = unpack(&builder.build()).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "\u{0}\u{1}\u{2}\u{3}\u{4}\u{5}");
    }

    #[test]
    fn decodes_cyrillic_text() {
        // "Банк" in windows-1251
        let mut builder = ZipBuilder::new();
        builder.add_stored("name.txt", &[0xC1, 0xE0, 0xED, 0xEA]);
        let result = unpack(&builder.build()).unwrap();

        assert_eq!(result[0].text, "Банк");
    }

    #[test]
    fn decoding_is_total_over_all_byte_values() {
        let all_bytes: Vec<u8> = (0..=255u8).collect();
        let mut builder = ZipBuilder::new();
        builder.add_stored("all.bin", &all_bytes);
        let result = unpack(&builder.build()).unwrap();

        let text = &result[0].text;
        assert_eq!(text.chars().count(), 256);
        assert!(!text.contains('\u{FFFD}'));
    }

    #[test]
    fn skips_directory_members() {
        let mut builder = ZipBuilder::new();
        builder.add_directory("subdir/");
        builder.add_stored("subdir/file.txt", b"content");
        let result = unpack(&builder.build()).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "subdir/file.txt");
    }

    #[test]
    fn drops_empty_members() {
        let mut builder = ZipBuilder::new();
        builder.add_stored("empty.txt", b"");
        builder.add_stored("full.txt", b"data");
        let result = unpack(&builder.build()).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "full.txt");
    }

    #[test]
    fn unpacks_deflated_member() {
        let mut builder = ZipBuilder::new();
        builder.add_deflated("file.xml", "<ED807></ED807>".as_bytes());
        let result = unpack(&builder.build()).unwrap();

        assert_eq!(result[0].text, "<ED807></ED807>");
    }

    #[test]
    fn corrupt_buffer_is_fatal() {
        assert!(matches!(
            unpack(b"PK but nothing else"),
            Err(BicDirError::ArchiveFormat { .. })
        ));
    }
}
