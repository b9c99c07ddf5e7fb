//! CID Verification Tests
//!
//! Checks that printed content identifiers match an independent SHA2-256
//! computation of each file's bytes.

use cid::{Cid, Version};
use cidls::listing::fanout::collect_sorted;
use cidls::listing::hasher::{self, RAW, SHA2_256};
use cidls::listing::palette::Palette;
use cidls::listing::walker::read_listing;
use cidls::listing::CidVersion;
use sha2::{Digest, Sha256};
use std::fs;
use tempfile::TempDir;

/// Multicodec code implied by every CIDv0
const DAG_PB: u64 = 0x70;

fn assert_cid_matches(cid: &str, content: &[u8], version: CidVersion) {
    let decoded = Cid::try_from(cid).unwrap();
    match version {
        CidVersion::V0 => {
            assert_eq!(decoded.version(), Version::V0);
            assert_eq!(decoded.codec(), DAG_PB);
        }
        CidVersion::V1 => {
            assert_eq!(decoded.version(), Version::V1);
            assert_eq!(decoded.codec(), RAW);
        }
    }
    assert_eq!(decoded.hash().code(), SHA2_256);
    assert_eq!(decoded.hash().size(), 32);
    assert_eq!(decoded.hash().digest(), Sha256::digest(content).as_slice());
}

#[test]
fn test_listing_cids_match_independent_digest() {
    let temp_dir = TempDir::new().unwrap();
    let files: Vec<(&str, Vec<u8>)> = vec![
        ("empty", Vec::new()),
        ("hello.txt", b"hello world\n".to_vec()),
        ("binary.bin", (0..=255u8).cycle().take(70_000).collect()),
        (".dotfile", b"dot".to_vec()),
    ];
    for (name, content) in &files {
        fs::write(temp_dir.path().join(name), content).unwrap();
    }

    let listing = read_listing(temp_dir.path()).unwrap();
    for version in [CidVersion::V0, CidVersion::V1] {
        let results = collect_sorted(&listing, version, &Palette::plain()).unwrap();
        assert_eq!(results.len(), files.len());

        for result in &results {
            let (_, content) = files
                .iter()
                .find(|(name, _)| *name == result.entry.name)
                .unwrap();
            let cid = result.outcome.cid().unwrap();
            assert_cid_matches(cid, content, version);
            assert!(result.line.ends_with(cid));
        }
    }
}

#[test]
fn test_v0_and_v1_share_the_digest() {
    let content = b"same bytes, two encodings";
    let v0 = hasher::cid_for_bytes(content, CidVersion::V0).unwrap();
    let v1 = hasher::cid_for_bytes(content, CidVersion::V1).unwrap();
    let v0 = Cid::try_from(v0.as_str()).unwrap();
    let v1 = Cid::try_from(v1.as_str()).unwrap();

    assert_eq!(v0.hash().digest(), v1.hash().digest());
    assert_ne!(v0.to_string(), v1.to_string());
}

#[test]
fn test_known_empty_file_cid() {
    let temp_dir = TempDir::new().unwrap();
    let empty = temp_dir.path().join("empty");
    fs::write(&empty, b"").unwrap();

    assert_eq!(
        hasher::compute_cid(&empty, CidVersion::V1).unwrap(),
        "bafkreihdwdcefgh4dqkjv67uzcmw7ojee6xedzdetojuzjevtenxquvyku"
    );
}

#[test]
fn test_cid_tracks_content_changes() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("note.txt");

    fs::write(&file, "first").unwrap();
    let first = hasher::compute_cid(&file, CidVersion::V1).unwrap();
    fs::write(&file, "second").unwrap();
    let second = hasher::compute_cid(&file, CidVersion::V1).unwrap();
    fs::write(&file, "first").unwrap();
    let third = hasher::compute_cid(&file, CidVersion::V1).unwrap();

    assert_ne!(first, second);
    assert_eq!(first, third);
}
