//! # bicdir
//!
//! Fetch and parse Bank of Russia BIC directory (ED807) archives.
//!
//! The directory is distributed as a ZIP archive of XML files encoded in
//! windows-1251. This library downloads the archive, unpacks it in memory,
//! decodes each member file, and flattens the directory entries into one
//! ordered list of correspondent-account records, suitable for validating
//! an account number against a known bank.
//!
//! ## Features
//!
//! - Fetch archives from HTTP/HTTPS URLs or the local filesystem
//! - In-memory ZIP unpacking (STORED and DEFLATE members)
//! - windows-1251 text decoding, total over arbitrary binary content
//! - Structural validation of `BICDirectoryEntry` elements
//!
//! ## Example
//!
//! ```no_run
//! use bicdir::{HttpByteSource, get_accounts};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let source = HttpByteSource::new(
//!         "https://www.cbr.ru/VFS/mcirabis/BIKNew/20260801ED01OSBR.zip".to_string(),
//!     )?;
//!
//!     let accounts = get_accounts(&source).await?;
//!     for account in &accounts {
//!         println!("{} {} {}", account.bic, account.corr_account, account.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod directory;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod zip;

pub use cli::Cli;
pub use directory::{Account, extract_accounts};
pub use error::{BicDirError, Result};
pub use io::{ByteSource, HttpByteSource, LocalFileSource};
pub use pipeline::get_accounts;
pub use zip::{ArchiveEntry, unpack};
