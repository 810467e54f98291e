//! Save document parsing and per-record dynasty classification.
//!
//! The save XML is a `<Root>` element carrying optional metadata attributes
//! and, somewhere in its tree, zero or more `<Player>` elements whose state is
//! stored as attributes. Everything here is best-effort: a missing attribute
//! is an unset field, never an error.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use roxmltree::Document;

use crate::archive::extract_save_xml;
use crate::error::ScanError;
use crate::rules;

/// How a player record encodes a successor dynasty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Successor state as its own top-level nation.
    Legacy,
    /// Parent nation plus a `Dynasty` attribute.
    Modern,
}

/// One `<Player>` element. All attributes are optional in the wild.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub nation: Option<String>,
    pub dynasty: Option<String>,
}

impl PlayerRecord {
    /// Classify this record against the rule table.
    ///
    /// Legacy and modern are mutually exclusive per record because the legacy
    /// nation set does not contain the parent nation.
    pub fn encoding(&self) -> Option<Encoding> {
        let nation = self.nation.as_deref()?;
        if rules::is_legacy_nation(nation) {
            return Some(Encoding::Legacy);
        }
        if nation == rules::PARENT_NATION
            && self
                .dynasty
                .as_deref()
                .is_some_and(rules::is_diadochi_dynasty)
        {
            return Some(Encoding::Modern);
        }
        None
    }
}

/// Analysis of a single save archive. Derived purely from the document;
/// never mutated after construction.
#[derive(Debug, Clone)]
pub struct SaveAnalysis {
    pub path: PathBuf,
    pub modified: Option<SystemTime>,
    pub game_id: Option<String>,
    pub game_version: Option<String>,
    pub save_date: Option<String>,
    pub players: Vec<PlayerRecord>,
    pub has_diadochi: bool,
    pub legacy_form_seen: bool,
    pub modern_form_seen: bool,
}

impl SaveAnalysis {
    /// File name component of the archive path, for report lines.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Players that match either encoding, in document order.
    pub fn diadochi_players(&self) -> impl Iterator<Item = (&PlayerRecord, Encoding)> {
        self.players
            .iter()
            .filter_map(|p| p.encoding().map(|e| (p, e)))
    }
}

/// Parse save XML into a [`SaveAnalysis`].
///
/// Root attributes `GameId`, `Version`, and `SaveDate` map to the metadata
/// fields; every `<Player>` element anywhere in the tree contributes one
/// record in document order.
pub fn analyze_document(
    path: &Path,
    modified: Option<SystemTime>,
    xml: &str,
) -> Result<SaveAnalysis, ScanError> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    let mut analysis = SaveAnalysis {
        path: path.to_path_buf(),
        modified,
        game_id: root.attribute("GameId").map(str::to_string),
        game_version: root.attribute("Version").map(str::to_string),
        save_date: root.attribute("SaveDate").map(str::to_string),
        players: Vec::new(),
        has_diadochi: false,
        legacy_form_seen: false,
        modern_form_seen: false,
    };

    for node in root.descendants().filter(|n| n.has_tag_name("Player")) {
        let record = PlayerRecord {
            id: node.attribute("ID").map(str::to_string),
            name: node.attribute("Name").map(str::to_string),
            nation: node.attribute("Nation").map(str::to_string),
            dynasty: node.attribute("Dynasty").map(str::to_string),
        };

        match record.encoding() {
            Some(Encoding::Legacy) => {
                analysis.has_diadochi = true;
                analysis.legacy_form_seen = true;
            }
            Some(Encoding::Modern) => {
                analysis.has_diadochi = true;
                analysis.modern_form_seen = true;
            }
            None => {}
        }

        analysis.players.push(record);
    }

    tracing::debug!(
        archive = %path.display(),
        players = analysis.players.len(),
        diadochi = analysis.has_diadochi,
        "analyzed save document"
    );

    Ok(analysis)
}

/// Open one save archive, extract its document, and analyze it.
pub fn analyze_save(path: &Path) -> Result<SaveAnalysis, ScanError> {
    let modified = path.metadata().and_then(|m| m.modified()).ok();
    let xml = extract_save_xml(path)?;
    analyze_document(path, modified, &xml)
}
