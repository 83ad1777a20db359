//! Blob operations for worksheet storage.
//!
//! Each worksheet is stored as a single JSON blob in the root tree. The
//! format carries a little metadata next to the cell grid so a blob can be
//! checked against the file name it was found under.

use serde::{Deserialize, Serialize};

use crate::sheet::{Grid, SheetName};
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::types::BlobId;

/// a worksheet with its storage metadata
///
/// The internal format stored in Git:
/// ```text
/// {
///   "_sheet": "Championship Tracker",
///   "_version": 3,
///   "_created_at": "xxxx-xx-xxT00:00:00Z",
///   "_updated_at": "xxxx-xx-xxT00:00:00Z",
///   "rows": [["Title", "Champion"], ...]
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SheetBlob {
    pub name: SheetName,
    /// bumped on every committed write
    pub version: u64,
    pub created_at: String,
    pub updated_at: String,
    pub grid: Grid,
}

impl SheetBlob {
    /// A fresh sheet at version 1.
    pub fn new(name: SheetName, grid: Grid) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            name,
            version: 1,
            created_at: now.clone(),
            updated_at: now,
            grid,
        }
    }

    /// The next version of this sheet with `grid` as its content.
    pub fn with_update(self, grid: Grid) -> Self {
        Self {
            name: self.name,
            version: self.version + 1,
            created_at: self.created_at,
            updated_at: chrono::Utc::now().to_rfc3339(),
            grid,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct SheetJson {
    #[serde(rename = "_sheet")]
    sheet: String,
    #[serde(rename = "_version")]
    version: u64,
    #[serde(rename = "_created_at")]
    created_at: String,
    #[serde(rename = "_updated_at")]
    updated_at: String,
    #[serde(flatten)]
    grid: Grid,
}

pub fn serialize_sheet(sheet: &SheetBlob) -> StorageResult<Vec<u8>> {
    let json = SheetJson {
        sheet: sheet.name.as_str().to_string(),
        version: sheet.version,
        created_at: sheet.created_at.clone(),
        updated_at: sheet.updated_at.clone(),
        grid: sheet.grid.clone(),
    };

    Ok(serde_json::to_vec_pretty(&json)?)
}

/// deserialize a sheet from JSON bytes
///
/// validates that the sheet name in the JSON matches the expected name
pub fn deserialize_sheet(bytes: &[u8], expected: &SheetName) -> StorageResult<SheetBlob> {
    let json: SheetJson = serde_json::from_slice(bytes)?;

    if json.sheet != expected.as_str() {
        return Err(StorageError::CorruptedData {
            path: format!("{}.json", expected).into(),
            reason: format!(
                "sheet name mismatch: file name suggests '{}' but content has '{}'",
                expected, json.sheet
            ),
        });
    }

    Ok(SheetBlob {
        name: expected.clone(),
        version: json.version,
        created_at: json.created_at,
        updated_at: json.updated_at,
        grid: json.grid,
    })
}

/// write a sheet as a blob to the repository
pub fn write_blob(repo: &git2::Repository, sheet: &SheetBlob) -> StorageResult<BlobId> {
    let bytes = serialize_sheet(sheet)?;
    let oid = repo.blob(&bytes)?;
    Ok(BlobId::new(oid))
}

/// read a blob's content from the repository
pub fn read_blob(repo: &git2::Repository, blob_id: BlobId) -> StorageResult<Vec<u8>> {
    let blob = repo.find_blob(blob_id.raw())?;
    Ok(blob.content().to_vec())
}
