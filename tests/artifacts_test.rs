use std::{fs, path::Path};
use tempfile::TempDir;
use yieldeth::{artifacts::ArtifactStore, error::Error};

const YIELD_MANAGER: &str = r#"{
  "_format": "hh-sol-artifact-1",
  "contractName": "YieldManager",
  "sourceName": "contracts/YieldManager.sol",
  "abi": [
    {
      "inputs": [{ "internalType": "string", "name": "_name", "type": "string" }],
      "stateMutability": "nonpayable",
      "type": "constructor"
    }
  ],
  "bytecode": "0x6080604052348015600f57600080fd5b50603f80601d6000396000f3fe6080604052600080fdfea164736f6c6343000807000a",
  "deployedBytecode": "0x6080604052600080fdfea164736f6c6343000807000a",
  "linkReferences": {},
  "deployedLinkReferences": {}
}"#;

fn write(root: &Path, rel: &str, body: &str) {
  let path = root.join(rel);
  fs::create_dir_all(path.parent().unwrap()).unwrap();
  fs::write(path, body).unwrap();
}

fn hardhat_layout() -> TempDir {
  let dir = TempDir::new().unwrap();
  write(
    dir.path(),
    "contracts/YieldManager.sol/YieldManager.json",
    YIELD_MANAGER,
  );
  write(
    dir.path(),
    "contracts/YieldManager.sol/YieldManager.dbg.json",
    r#"{"_format": "hh-sol-dbg-1", "buildInfo": "../../build-info/abc.json"}"#,
  );
  write(dir.path(), "build-info/YieldManager.json", "{}");
  dir
}

#[test]
fn resolves_bare_name() {
  let dir = hardhat_layout();
  let store = ArtifactStore::new(dir.path());
  let path = store.resolve("YieldManager").unwrap();
  assert_eq!(
    path,
    dir.path().join("contracts/YieldManager.sol/YieldManager.json")
  );
}

#[test]
fn resolves_fully_qualified_name() {
  let dir = hardhat_layout();
  let store = ArtifactStore::new(dir.path());
  let path = store
    .resolve("contracts/YieldManager.sol:YieldManager")
    .unwrap();
  assert!(path.ends_with("contracts/YieldManager.sol/YieldManager.json"));
}

#[test]
fn missing_artifact_is_not_found() {
  let dir = hardhat_layout();
  let store = ArtifactStore::new(dir.path());
  assert!(matches!(
    store.resolve("Vault"),
    Err(Error::ArtifactNotFound { .. })
  ));
  assert!(matches!(
    store.resolve("contracts/Vault.sol:Vault"),
    Err(Error::ArtifactNotFound { .. })
  ));
}

#[test]
fn missing_root_is_not_found() {
  let store = ArtifactStore::new("/nonexistent/artifacts");
  assert!(matches!(
    store.resolve("YieldManager"),
    Err(Error::ArtifactNotFound { .. })
  ));
}

#[test]
fn duplicate_names_are_ambiguous() {
  let dir = hardhat_layout();
  write(
    dir.path(),
    "contracts/legacy/YieldManager.sol/YieldManager.json",
    YIELD_MANAGER,
  );
  let store = ArtifactStore::new(dir.path());
  match store.resolve("YieldManager") {
    Err(Error::AmbiguousArtifact { candidates, .. }) => assert_eq!(candidates.len(), 2),
    other => panic!("expected ambiguity, got {:?}", other),
  }
  // a fully qualified name still picks one
  assert!(store
    .resolve("contracts/legacy/YieldManager.sol:YieldManager")
    .is_ok());
}

#[test]
fn loads_hardhat_artifact() {
  let dir = hardhat_layout();
  let store = ArtifactStore::new(dir.path());
  let contract = store.load("YieldManager").unwrap();
  assert_eq!(contract.name, "YieldManager");
}

#[test]
fn rejects_mismatched_contract_name() {
  let dir = TempDir::new().unwrap();
  write(
    dir.path(),
    "contracts/Other.sol/YieldManager.json",
    &YIELD_MANAGER.replace("\"contractName\": \"YieldManager\"", "\"contractName\": \"Other\""),
  );
  let store = ArtifactStore::new(dir.path());
  assert!(matches!(
    store.load("YieldManager"),
    Err(Error::ArtifactMismatch { .. })
  ));
}

#[test]
fn rejects_malformed_json() {
  let dir = TempDir::new().unwrap();
  write(
    dir.path(),
    "contracts/YieldManager.sol/YieldManager.json",
    "not json",
  );
  let store = ArtifactStore::new(dir.path());
  assert!(matches!(
    store.load("YieldManager"),
    Err(Error::InvalidArtifact(_))
  ));
}

#[cfg(unix)]
#[test]
fn symlink_cycle_does_not_recurse() {
  let dir = hardhat_layout();
  std::os::unix::fs::symlink(
    dir.path().join("contracts"),
    dir.path().join("contracts/YieldManager.sol/loop"),
  )
  .unwrap();
  let store = ArtifactStore::new(dir.path());
  let path = store.resolve("YieldManager").unwrap();
  assert!(path.ends_with("contracts/YieldManager.sol/YieldManager.json"));
}

#[test]
fn debug_files_are_never_resolved() {
  let dir = hardhat_layout();
  let store = ArtifactStore::new(dir.path());
  assert!(matches!(
    store.resolve("YieldManager.dbg"),
    Err(Error::ArtifactNotFound { .. })
  ));
}

#[test]
fn build_info_is_skipped() {
  let dir = TempDir::new().unwrap();
  write(dir.path(), "build-info/YieldManager.json", "{}");
  let store = ArtifactStore::new(dir.path());
  assert!(matches!(
    store.resolve("YieldManager"),
    Err(Error::ArtifactNotFound { .. })
  ));
}
