//! BIC directory entry parsing.
//!
//! An ED807 payload file carries `BICDirectoryEntry` elements, one per
//! credit institution. Each entry names the institution through a
//! `ParticipantInfo` child and lists its correspondent accounts through
//! `Accounts` children. Tag lookups match by local name so the ED807
//! default namespace does not affect them.

use roxmltree::{Document, Node};
use serde::Serialize;

use crate::error::{BicDirError, Result};

/// One correspondent-account record extracted from the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    /// Bank Identification Code of the institution.
    pub bic: String,
    /// Display name of the institution's participant record.
    pub name: String,
    /// Correspondent account number.
    pub corr_account: String,
}

/// Extract all account records from a parsed directory document.
///
/// Walks every `BICDirectoryEntry` in document order and flattens the
/// per-entry accounts into one list. An entry with no `Accounts` children
/// contributes nothing.
///
/// # Errors
///
/// Fails on the first entry that lacks a `BIC` attribute or a
/// `ParticipantInfo` child; no partial result is returned.
pub fn extract_accounts(document: &Document) -> Result<Vec<Account>> {
    let mut accounts = Vec::new();

    for entry in document
        .descendants()
        .filter(|node| is_named(node, "BICDirectoryEntry"))
    {
        push_entry_accounts(entry, &mut accounts)?;
    }

    Ok(accounts)
}

fn push_entry_accounts(entry: Node<'_, '_>, out: &mut Vec<Account>) -> Result<()> {
    let bic = entry
        .attribute("BIC")
        .ok_or(BicDirError::MissingAttribute { attribute: "BIC" })?;

    let participant = entry
        .descendants()
        .find(|node| is_named(node, "ParticipantInfo"))
        .ok_or_else(|| BicDirError::MissingElement {
            element: "ParticipantInfo",
            bic: bic.to_string(),
        })?;

    let name = participant.attribute("NameP").unwrap_or_default();

    for node in entry
        .descendants()
        .filter(|node| is_named(node, "Accounts"))
    {
        out.push(Account {
            bic: bic.to_string(),
            name: name.to_string(),
            corr_account: node.attribute("Account").unwrap_or_default().to_string(),
        });
    }

    Ok(())
}

fn is_named(node: &Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Result<Vec<Account>> {
        let document = Document::parse(xml)?;
        extract_accounts(&document)
    }

    #[test]
    fn entry_with_participant_and_accounts() {
        let accounts = parse(
            r#"<BICDirectoryEntry BIC="AAAAA">
                 <ParticipantInfo NameP="Bank A"/>
                 <Accounts Account="123456"/>
                 <Accounts Account="789012"/>
               </BICDirectoryEntry>"#,
        )
        .unwrap();

        assert_eq!(
            accounts,
            vec![
                Account {
                    bic: "AAAAA".to_string(),
                    name: "Bank A".to_string(),
                    corr_account: "123456".to_string(),
                },
                Account {
                    bic: "AAAAA".to_string(),
                    name: "Bank A".to_string(),
                    corr_account: "789012".to_string(),
                },
            ]
        );
    }

    #[test]
    fn entry_without_accounts_yields_nothing() {
        let accounts = parse(
            r#"<BICDirectoryEntry BIC="AAAAA">
                 <ParticipantInfo NameP="Bank A"/>
               </BICDirectoryEntry>"#,
        )
        .unwrap();

        assert!(accounts.is_empty());
    }

    #[test]
    fn missing_participant_info_is_fatal() {
        let err = parse(
            r#"<BICDirectoryEntry BIC="AAAAA">
                 <Accounts Account="123456"/>
               </BICDirectoryEntry>"#,
        )
        .unwrap_err();

        match err {
            BicDirError::MissingElement { element, bic } => {
                assert_eq!(element, "ParticipantInfo");
                assert_eq!(bic, "AAAAA");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_bic_attribute_is_fatal() {
        let err = parse(
            r#"<BICDirectoryEntry>
                 <ParticipantInfo NameP="Bank A"/>
                 <Accounts Account="123456"/>
               </BICDirectoryEntry>"#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            BicDirError::MissingAttribute { attribute: "BIC" }
        ));
    }

    #[test]
    fn entries_flatten_in_document_order() {
        let xml = r#"<ED807 xmlns="urn:cbr-ru:ed:v2.0">
             <BICDirectoryEntry BIC="044525225">
               <ParticipantInfo NameP="Сбербанк"/>
               <Accounts Account="30101810400000000225"/>
             </BICDirectoryEntry>
             <BICDirectoryEntry BIC="044525974">
               <ParticipantInfo NameP="Тинькофф Банк"/>
               <Accounts Account="30101810145250000974"/>
             </BICDirectoryEntry>
           </ED807>"#;

        let accounts = parse(xml).unwrap();

        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].bic, "044525225");
        assert_eq!(accounts[0].name, "Сбербанк");
        assert_eq!(accounts[1].bic, "044525974");
        assert_eq!(accounts[1].corr_account, "30101810145250000974");
    }

    #[test]
    fn parsing_is_deterministic() {
        let xml = r#"<BICDirectoryEntry BIC="AAAAA">
             <ParticipantInfo NameP="Bank A"/>
             <Accounts Account="123456"/>
             <Accounts Account="789012"/>
           </BICDirectoryEntry>"#;

        let document = Document::parse(xml).unwrap();
        let first = extract_accounts(&document).unwrap();
        let second = extract_accounts(&document).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn absent_name_attribute_reads_as_empty() {
        let accounts = parse(
            r#"<BICDirectoryEntry BIC="AAAAA">
                 <ParticipantInfo/>
                 <Accounts Account="123456"/>
               </BICDirectoryEntry>"#,
        )
        .unwrap();

        assert_eq!(accounts[0].name, "");
        assert_eq!(accounts[0].corr_account, "123456");
    }
}
