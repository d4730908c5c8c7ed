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

//! The narrow surface the runner needs from a contract framework: resolve a
//! factory by contract name, submit a deployment, wait for it to be mined.

use crate::Result;
use async_trait::async_trait;
use ethcontract::Address;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeployedContract {
  pub address: Address,
}

#[async_trait(?Send)]
pub trait ContractFramework {
  type Factory: ContractFactory;

  async fn contract_factory(&self, name: &str) -> Result<Self::Factory>;
}

#[async_trait(?Send)]
pub trait ContractFactory {
  type Pending: PendingContract;

  /// Prepares a deployment with a single constructor argument.
  async fn deploy(&self, arg: &str) -> Result<Self::Pending>;
}

#[async_trait(?Send)]
pub trait PendingContract: Sized {
  /// Resolves once the deployment transaction is confirmed.
  async fn deployed(self) -> Result<DeployedContract>;
}
