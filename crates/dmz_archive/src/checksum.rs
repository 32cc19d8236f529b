//! Verification of the [`CHECKSUM_FILE`] carried by some archives.
//!
//! The file uses the Simple File Verification layout: one `<path> <crc32>` pair per line, with the
//! checksum written as eight hexadecimal digits and `;` starting a comment line.

use crc::{Crc, CRC_32_ISO_HDLC};
use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};
use crate::types::{Container, ContainerFile, CHECKSUM_FILE};

const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Standard CRC-32 of a buffer, as used in SFV files
pub fn crc32(data: &[u8]) -> u32 {
    CRC32.checksum(data)
}

/// An expected checksum read from the checksum file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumEntry {
    /// Path of the file, with separators normalized to `/`
    pub name: String,

    /// Expected CRC-32
    pub expected: u32,
}

/// Outcome of verifying a single [`ChecksumEntry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumStatus {
    /// The file is present and matches
    Ok,

    /// The file is present with different content
    Mismatch { actual: u32 },

    /// The file is not part of the container
    Missing,
}

/// Verification results, in the order of the checksum file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecksumReport {
    pub entries: Vec<(ChecksumEntry, ChecksumStatus)>,
}

impl ChecksumReport {
    /// Whether every listed file is present and matches
    pub fn is_valid(&self) -> bool {
        self.entries
            .iter()
            .all(|(_, status)| *status == ChecksumStatus::Ok)
    }

    /// Entries that did not verify
    pub fn failures(&self) -> impl Iterator<Item = &(ChecksumEntry, ChecksumStatus)> {
        self.entries
            .iter()
            .filter(|(_, status)| *status != ChecksumStatus::Ok)
    }
}

/// Parse the content of a checksum file
pub fn parse_sfv(text: &str) -> Result<Vec<ChecksumEntry>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut entries = Vec::new();
    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        let invalid = || Error::InvalidChecksumLine {
            line: number + 1,
            content: line.to_owned(),
        };

        let (name, checksum) = line.rsplit_once(char::is_whitespace).ok_or_else(invalid)?;
        let expected = u32::from_str_radix(checksum, 16).map_err(|_| invalid())?;

        entries.push(ChecksumEntry {
            name: name.trim().replace('\\', "/"),
            expected,
        });
    }

    Ok(entries)
}

impl Container {
    /// Look up the file a checksum line refers to, falling back to a case insensitive match
    fn checksum_target(&self, name: &str) -> Option<&ContainerFile> {
        self.get(name)
            .or_else(|| self.files().find(|f| f.name().eq_ignore_ascii_case(name)))
    }

    /// Verify the container against its [`CHECKSUM_FILE`]
    ///
    /// Returns `None` when the container carries no checksum file.
    #[instrument(skip(self), fields(container = self.name()), err)]
    pub fn verify_checksums(&self) -> Result<Option<ChecksumReport>> {
        let Some(sfv) = self.files().find(|f| f.is_checksum()) else {
            debug!("no {CHECKSUM_FILE} present");
            return Ok(None);
        };

        let entries = parse_sfv(&String::from_utf8_lossy(sfv.data()))?;

        let mut report = ChecksumReport::default();
        for entry in entries {
            let status = match self.checksum_target(&entry.name) {
                None => ChecksumStatus::Missing,
                Some(file) => {
                    let actual = crc32(file.data());
                    if actual == entry.expected {
                        ChecksumStatus::Ok
                    } else {
                        ChecksumStatus::Mismatch { actual }
                    }
                }
            };

            if status != ChecksumStatus::Ok {
                warn!(name = %entry.name, ?status, "checksum failed");
            }
            report.entries.push((entry, status));
        }

        Ok(Some(report))
    }
}
