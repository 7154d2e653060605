//! File catalog types.

use serde::Serialize;
use utoipa::ToSchema;

use crate::error::Result;
use crate::instance::InstanceIdentity;

/// Number of records in the fixed catalog.
pub const CATALOG_SIZE: u16 = 3;

/// A single file descriptor.
///
/// Field order is part of the wire format: records serialize as
/// `{"id":..,"path":..,"name":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FileRecord {
    /// Opaque identifier, `FILE-NNN`.
    #[schema(example = "FILE-001")]
    pub id: String,
    /// Slash-rooted virtual path.
    #[schema(example = "/files/001")]
    pub path: String,
    /// File name.
    #[schema(example = "file_0001.txt")]
    pub name: String,
}

impl FileRecord {
    /// Build the record for sequence number `n`.
    pub fn numbered(n: u16) -> Self {
        Self {
            id: format!("FILE-{n:03}"),
            path: format!("/files/{n:03}"),
            name: format!("file_{n:04}.txt"),
        }
    }
}

/// Ordered, immutable list of file records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<FileRecord>,
}

impl Catalog {
    /// The three-entry catalog every instance serves.
    pub fn fixed() -> Self {
        Self {
            records: (1..=CATALOG_SIZE).map(FileRecord::numbered).collect(),
        }
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }
}

/// Body of `GET /files`.
///
/// `instance` is only present for the instance-aware variant and always
/// serializes ahead of `files`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FilesResponse {
    /// Instance identity (instance-aware variant only).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Instance-2")]
    pub instance: Option<String>,
    /// The catalog, in fixed order.
    pub files: Vec<FileRecord>,
}

impl FilesResponse {
    /// Build the response body for a catalog and optional instance identity.
    pub fn new(catalog: &Catalog, identity: Option<&InstanceIdentity>) -> Self {
        Self {
            instance: identity.map(|i| i.as_str().to_string()),
            files: catalog.records().to_vec(),
        }
    }

    /// Pretty-printed body, as printed by the `catalog` command.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
