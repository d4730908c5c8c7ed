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

use ethcontract::H160;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("web3 error: {0}")]
  Web3Error(#[from] ethcontract::web3::Error),
  #[error("deployment error: {0}")]
  DeployError(#[from] ethcontract::errors::DeployError),
  #[error("artifact for {name} not found in {}", dir.display())]
  ArtifactNotFound { name: String, dir: PathBuf },
  #[error("multiple artifacts for {name}, use a fully qualified name: {candidates:?}")]
  AmbiguousArtifact {
    name: String,
    candidates: Vec<PathBuf>,
  },
  #[error("artifact {} contains {found}, expected {expected}", path.display())]
  ArtifactMismatch {
    path: PathBuf,
    expected: String,
    found: String,
  },
  #[error("invalid artifact: {0}")]
  InvalidArtifact(#[from] serde_json::Error),
  #[error("io error: {0}")]
  IoError(#[from] std::io::Error),
  #[error("config error: {0}")]
  ConfigError(#[from] ::config::ConfigError),
  #[error("hex error: {0}")]
  CHexError(#[from] rustc_hex::FromHexError),
  #[error("invalid private key")]
  InvalidPrivateKey,
  #[error("node has no unlocked accounts")]
  NoAccounts,
  #[error("no ETH balance on {0:?} to pay for deployment gas")]
  InsufficientBalance(H160),
}
