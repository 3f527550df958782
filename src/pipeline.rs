//! Archive-to-accounts orchestration.
//!
//! Composes the full extraction sequence: acquire bytes from a
//! [`ByteSource`], unpack the archive, parse each member as XML, and
//! flatten the per-member account lists into one ordered result.

use tracing::{debug, info};

use crate::directory::{Account, extract_accounts};
use crate::error::Result;
use crate::io::ByteSource;
use crate::zip;

/// Fetch a directory archive and extract every account record it contains.
///
/// Member files are parsed on independent blocking tasks; the task handles
/// are joined in spawn order, so the final sequence follows archive member
/// order, then document order within each member, regardless of which parse
/// finishes first.
///
/// # Errors
///
/// Transport failures surface unchanged. A malformed container or a
/// structural error in any member aborts the whole call with no partial
/// result.
pub async fn get_accounts<S>(source: &S) -> Result<Vec<Account>>
where
    S: ByteSource + ?Sized,
{
    let data = source.collect().await?;
    debug!(locator = %source.locator(), bytes = data.len(), "archive fetched");

    let files = zip::unpack(&data)?;
    debug!(files = files.len(), "archive unpacked");

    let mut tasks = Vec::with_capacity(files.len());
    for entry in files {
        tasks.push(tokio::task::spawn_blocking(move || {
            let document = roxmltree::Document::parse(&entry.text)?;
            extract_accounts(&document)
        }));
    }

    let mut accounts = Vec::new();
    for task in tasks {
        accounts.extend(task.await??);
    }

    info!(
        locator = %source.locator(),
        accounts = accounts.len(),
        "directory extraction complete"
    );

    Ok(accounts)
}
