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

use crate::{
  error::Error,
  framework::{ContractFactory, ContractFramework, PendingContract},
  utils,
};
use ethcontract::Address;
use std::{error::Error as StdError, io::Write};

pub const CONTRACT_NAME: &str = "YieldManager";
pub const CONSTRUCTOR_ARG: &str = "";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentResult {
  pub contract_name: String,
  pub address: Address,
}

impl DeploymentResult {
  // a result only exists once the address is known
  pub fn success(&self) -> bool {
    true
  }
}

#[derive(Debug, thiserror::Error)]
#[error("{contract} deployment failed: {source}")]
pub struct DeploymentFailure {
  pub contract: String,
  #[source]
  pub source: Error,
}

impl DeploymentFailure {
  fn new(source: impl Into<Error>) -> Self {
    Self {
      contract: CONTRACT_NAME.to_string(),
      source: source.into(),
    }
  }
}

/// Deploys `YieldManager` with an empty constructor argument and writes the
/// confirmation line to `out`.
pub async fn run<F, W>(
  framework: &F,
  out: &mut W,
) -> Result<DeploymentResult, DeploymentFailure>
where
  F: ContractFramework,
  W: Write,
{
  let factory = framework
    .contract_factory(CONTRACT_NAME)
    .await
    .map_err(DeploymentFailure::new)?;
  let pending = factory
    .deploy(CONSTRUCTOR_ARG)
    .await
    .map_err(DeploymentFailure::new)?;
  let deployed = pending.deployed().await.map_err(DeploymentFailure::new)?;

  writeln!(
    out,
    "{} deployed to: {}",
    CONTRACT_NAME,
    utils::to_checksum(&deployed.address)
  )
  .map_err(DeploymentFailure::new)?;

  Ok(DeploymentResult {
    contract_name: CONTRACT_NAME.to_string(),
    address: deployed.address,
  })
}

/// Writes a failure and each cause not already part of its message to `err`;
/// returns the exit code.
pub fn report<W: Write>(
  outcome: &Result<DeploymentResult, DeploymentFailure>,
  err: &mut W,
) -> i32 {
  match outcome {
    Ok(_) => 0,
    Err(failure) => {
      let mut printed = failure.to_string();
      let _ = writeln!(err, "{}", printed);
      // wrapped errors usually embed their source in their own message
      let mut cause = failure.source();
      while let Some(c) = cause {
        let text = c.to_string();
        if !printed.contains(&text) {
          let _ = writeln!(err, "  caused by: {}", text);
          printed.push_str(&text);
        }
        cause = c.source();
      }
      1
    }
  }
}
