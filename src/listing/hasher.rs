//! Content identifier computation for file bytes
//!
//! Digests are SHA2-256, wrapped in a multihash and encoded as a CID. Version 0
//! is the bare base58btc multihash; version 1 uses the `raw` codec and base32.

use crate::error::HashError;
use crate::listing::entry::CidVersion;
use cid::Cid;
use multihash::Multihash;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, ErrorKind};
use std::path::Path;

/// Multicodec code for SHA2-256
pub const SHA2_256: u64 = 0x12;

/// Multicodec code for raw binary content
pub const RAW: u64 = 0x55;

/// Compute the CID of a file's content
///
/// The file is streamed through the hasher, so large files are never held in
/// memory. Open failures are mapped to the two access errors the listing
/// reports specially.
pub fn compute_cid(path: &Path, version: CidVersion) -> Result<String, HashError> {
    let mut file = File::open(path).map_err(map_open_error)?;

    if file.metadata()?.is_dir() {
        return Err(HashError::IsDirectory);
    }

    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    let digest = hasher.finalize();

    cid_from_digest(&digest, version)
}

/// Compute the CID of an in-memory buffer
pub fn cid_for_bytes(content: &[u8], version: CidVersion) -> Result<String, HashError> {
    let digest = Sha256::digest(content);
    cid_from_digest(&digest, version)
}

/// Wrap a SHA2-256 digest in a CID of the requested version
pub fn cid_from_digest(digest: &[u8], version: CidVersion) -> Result<String, HashError> {
    let hash = Multihash::<64>::wrap(SHA2_256, digest)
        .map_err(|e| HashError::Multihash(e.to_string()))?;

    let cid = match version {
        CidVersion::V0 => Cid::new_v0(hash).map_err(|e| HashError::Multihash(e.to_string()))?,
        CidVersion::V1 => Cid::new_v1(RAW, hash),
    };

    Ok(cid.to_string())
}

fn map_open_error(err: io::Error) -> HashError {
    match err.kind() {
        ErrorKind::PermissionDenied => HashError::InsufficientPermissions,
        ErrorKind::NotFound => HashError::NoSuchFile,
        _ => HashError::Io(err),
    }
}
