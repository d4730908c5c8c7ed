// Copyright 2021-2022 Semantic Network Ltd.
// This file is part of yieldeth.

// yieldeth is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// yieldeth is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with yieldeth.  If not, see <http://www.gnu.org/licenses/>.

use crate::{error::Error, Result};
use ethcontract_common::Contract;
use std::{
  fs,
  path::{Path, PathBuf},
};
use walkdir::{DirEntry, WalkDir};

const BUILD_INFO_DIR: &str = "build-info";
const DEBUG_SUFFIX: &str = ".dbg.json";

/// Compiled hardhat artifacts, laid out as `<root>/<source>.sol/<Name>.json`.
#[derive(Clone, Debug)]
pub struct ArtifactStore {
  root: PathBuf,
}

impl ArtifactStore {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Accepts either a bare contract name or a fully qualified
  /// `contracts/Source.sol:Name`.
  pub fn resolve(&self, name: &str) -> Result<PathBuf> {
    if let Some((source, contract)) = name.rsplit_once(':') {
      let path = self.root.join(source).join(format!("{}.json", contract));
      if path.is_file() {
        return Ok(path);
      }
      return Err(self.not_found(name));
    }

    let file_name = format!("{}.json", name);
    let mut candidates = collect(&self.root, &file_name)?;
    candidates.sort();
    match candidates.len() {
      0 => Err(self.not_found(name)),
      1 => Ok(candidates.remove(0)),
      _ => Err(Error::AmbiguousArtifact {
        name: name.to_string(),
        candidates,
      }),
    }
  }

  pub fn load(&self, name: &str) -> Result<Contract> {
    let path = self.resolve(name)?;
    log::debug!("loading artifact {}", path.display());
    let json = fs::read_to_string(&path)?;
    let contract: Contract = serde_json::from_str(&json)?;

    let expected = name.rsplit(':').next().unwrap_or(name);
    if contract.name != expected {
      return Err(Error::ArtifactMismatch {
        path,
        expected: expected.to_string(),
        found: contract.name,
      });
    }
    Ok(contract)
  }

  fn not_found(&self, name: &str) -> Error {
    Error::ArtifactNotFound {
      name: name.to_string(),
      dir: self.root.clone(),
    }
  }
}

fn is_build_info(entry: &DirEntry) -> bool {
  entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == BUILD_INFO_DIR
}

// symlinks are not followed, so a link cycle under the root cannot recurse
fn collect(root: &Path, file_name: &str) -> Result<Vec<PathBuf>> {
  if !root.is_dir() {
    return Ok(vec![]);
  }
  let mut found = vec![];
  for entry in WalkDir::new(root).into_iter().filter_entry(|e| !is_build_info(e)) {
    let entry = entry.map_err(std::io::Error::from)?;
    let name = entry.file_name().to_string_lossy();
    let matches =
      entry.file_type().is_file() && name == file_name && !name.ends_with(DEBUG_SUFFIX);
    if matches {
      found.push(entry.into_path());
    }
  }
  Ok(found)
}
