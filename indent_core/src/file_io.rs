//! # File I/O Module
//!
//! Handles request and export files:
//! - **Atomic writes**: Write to .tmp, sync, rename to prevent half-written files
//! - **Version validation**: Ensure request schema compatibility
//!
//! ## File Format
//!
//! Requests are saved as JSON (conventionally `*.indent.json`). Exports are
//! whatever bytes the chosen exporter produced.
//!
//! ## Example
//!
//! ```rust,no_run
//! use indent_core::calculations::{ProductConfiguration, ProductType};
//! use indent_core::file_io::{load_request, save_request};
//! use indent_core::indent::IndentRequest;
//! use std::path::Path;
//!
//! let request = IndentRequest::new(ProductConfiguration::default_for(ProductType::Cuplock), 200);
//! let path = Path::new("order.indent.json");
//!
//! save_request(&request, path)?;
//! let loaded = load_request(path)?;
//! assert_eq!(loaded.quantity, 200);
//! # Ok::<(), indent_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::errors::{CalcError, CalcResult};
use crate::indent::{IndentRequest, SCHEMA_VERSION};

/// Write bytes to `path` with atomic write semantics.
///
/// 1. Write to a sibling temporary file (`<name>.tmp`)
/// 2. Sync to disk (fsync)
/// 3. Rename over the final path
pub fn write_atomic(path: &Path, bytes: &[u8]) -> CalcResult<()> {
    let tmp_path = tmp_path_for(path);

    let result = write_synced(&tmp_path, bytes).and_then(|()| {
        fs::rename(&tmp_path, path).map_err(|e| {
            CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
        })
    });
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result?;

    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

fn write_synced(tmp_path: &Path, bytes: &[u8]) -> CalcResult<()> {
    let mut tmp_file = File::create(tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })
}

/// Temp path next to the target: `indent.xlsx` -> `indent.xlsx.tmp`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Save a request as pretty-printed JSON.
///
/// # Example
///
/// ```rust,no_run
/// use indent_core::calculations::{ProductConfiguration, ProductType};
/// use indent_core::file_io::save_request;
/// use indent_core::indent::IndentRequest;
/// use std::path::Path;
///
/// let request = IndentRequest::new(ProductConfiguration::default_for(ProductType::Prop), 50);
/// save_request(&request, Path::new("props.indent.json"))?;
/// # Ok::<(), indent_core::errors::CalcError>(())
/// ```
pub fn save_request(request: &IndentRequest, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(request)?;
    write_atomic(path, json.as_bytes())
}

/// Load a request from a file.
///
/// # Returns
///
/// * `Ok(IndentRequest)` - Successfully loaded request
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON or unknown product tag
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_request(path: &Path) -> CalcResult<IndentRequest> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let request = parse_request(&contents).map_err(|e| match e {
        CalcError::SerializationError { reason } => CalcError::SerializationError {
            reason: format!("Invalid request in {}: {}", path.display(), reason),
        },
        other => other,
    })?;

    log::debug!(
        "loaded request {} ({} x {})",
        path.display(),
        request.product.product_type(),
        request.quantity
    );
    Ok(request)
}

/// Parse a request from a JSON string and check its schema version.
pub fn parse_request(json: &str) -> CalcResult<IndentRequest> {
    let request: IndentRequest = serde_json::from_str(json)?;
    validate_version(&request.meta.version)?;
    Ok(request)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // 0.x: a newer minor may carry breaking changes
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{ProductConfiguration, ProductType};
    use std::env::temp_dir;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("indent_test_{}", name))
    }

    #[test]
    fn test_tmp_path_generation() {
        let tmp = tmp_path_for(Path::new("/out/Aditya_Indent_Cuplock.xlsx"));
        assert_eq!(tmp, Path::new("/out/Aditya_Indent_Cuplock.xlsx.tmp"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip.indent.json");

        let request = IndentRequest::new(ProductConfiguration::default_for(ProductType::Plate), 75)
            .with_reference("PO-7");
        save_request(&request, &path).unwrap();

        let loaded = load_request(&path).unwrap();
        assert_eq!(loaded.quantity, 75);
        assert_eq!(loaded.meta.reference, "PO-7");
        assert_eq!(loaded.product, request.product);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_write_leaves_no_tmp_file() {
        let path = temp_path("atomic.bin");
        write_atomic(&path, b"indent").unwrap();

        assert!(!tmp_path_for(&path).exists());
        assert_eq!(fs::read(&path).unwrap(), b"indent");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_failed_write_removes_tmp_file() {
        let dir = temp_path("atomic_target_dir");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("keep"), b"x").unwrap();

        let err = write_atomic(&dir, b"indent").unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert!(!tmp_path_for(&dir).exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_request(&temp_path("does_not_exist.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_unknown_product_tag_rejected() {
        let json = r#"{
            "meta": { "version": "0.1.0", "created": "2025-01-01T00:00:00Z" },
            "product": { "type": "Scaffold" },
            "quantity": 10
        }"#;
        let err = parse_request(json).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_newer_file_rejected() {
        let json = r#"{
            "meta": { "version": "0.9.0", "created": "2025-01-01T00:00:00Z" },
            "product": { "type": "Span" },
            "quantity": 10
        }"#;
        assert!(matches!(parse_request(json), Err(CalcError::VersionMismatch { .. })));
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("0.0.3").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("abc").is_err());
    }
}
