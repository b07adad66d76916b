//! TOML catalog files.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    domain::{color::HexColor, group::Group, message::Message},
    infra::{
        error::{AppError, CatalogError},
        store::{CatalogEntry, InMemoryGroupStore},
    },
};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    groups: Vec<FileGroup>,
}

#[derive(Debug, Deserialize)]
struct FileGroup {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    member_count: u32,
    #[serde(default)]
    is_joined: bool,
    color: String,
    #[serde(default)]
    messages: Vec<FileMessage>,
}

#[derive(Debug, Deserialize)]
struct FileMessage {
    id: String,
    sender: String,
    text: String,
    /// How long before store construction the message was sent.
    #[serde(default)]
    age_secs: u32,
}

impl FileGroup {
    fn into_entry(self, seeded_at_ms: i64) -> Result<CatalogEntry, CatalogError> {
        let color = HexColor::parse(&self.color).map_err(|source| CatalogError::InvalidColor {
            group_id: self.id.clone(),
            source,
        })?;

        let messages = self
            .messages
            .into_iter()
            .map(|message| {
                Message::from_sender(
                    message.id,
                    message.sender,
                    message.text,
                    seeded_at_ms.saturating_sub(i64::from(message.age_secs) * 1000),
                )
            })
            .collect();

        Ok(CatalogEntry {
            group: Group {
                id: self.id,
                title: self.title,
                description: self.description,
                member_count: self.member_count,
                is_joined: self.is_joined,
                color,
            },
            messages,
        })
    }
}

/// Parses catalog TOML into entries without validating cross-entry rules.
fn parse_catalog(
    raw: &str,
    seeded_at_ms: i64,
    path: &Path,
) -> Result<Vec<CatalogEntry>, AppError> {
    let file: CatalogFile = toml::from_str(raw).map_err(|source| AppError::CatalogParse {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = file
        .groups
        .into_iter()
        .map(|group| group.into_entry(seeded_at_ms))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(entries)
}

/// Reads and validates a catalog file into a store.
pub fn load_catalog(path: &Path, seeded_at_ms: i64) -> Result<InMemoryGroupStore, AppError> {
    let raw = fs::read_to_string(path).map_err(|source| AppError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_catalog(&raw, seeded_at_ms, path)?;
    let store = InMemoryGroupStore::from_entries(entries)?;

    tracing::info!(path = %path.display(), groups = store.len(), "catalog file loaded");
    Ok(store)
}
