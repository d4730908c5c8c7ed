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
  artifacts::ArtifactStore,
  config::Config,
  framework::{ContractFactory, ContractFramework, DeployedContract, PendingContract},
  Result,
};
use async_trait::async_trait;
use ethcontract::{
  contract::{DeployBuilder, Instance},
  errors::DeployError,
  transport::DynTransport,
  Account, Web3, U256,
};
use ethcontract_common::Contract;

/// Deploys hardhat artifacts through ethcontract.
#[derive(Clone)]
pub struct EthFramework {
  web3: Web3<DynTransport>,
  account: Account<DynTransport>,
  artifacts: ArtifactStore,
  confirmations: usize,
  gas: Option<U256>,
}

impl EthFramework {
  pub fn new(
    web3: &Web3<DynTransport>,
    account: Account<DynTransport>,
    artifacts: ArtifactStore,
  ) -> Self {
    Self {
      web3: web3.clone(),
      account,
      artifacts,
      confirmations: 0,
      gas: None,
    }
  }

  pub fn from_config(
    web3: &Web3<DynTransport>,
    account: Account<DynTransport>,
    conf: &Config,
  ) -> Self {
    let mut framework = Self::new(web3, account, ArtifactStore::new(&conf.artifacts_dir))
      .confirmations(conf.confirmations);
    if let Some(gas) = conf.gas {
      framework = framework.gas(gas.into());
    }
    framework
  }

  pub fn confirmations(mut self, confirmations: usize) -> Self {
    self.confirmations = confirmations;
    self
  }

  pub fn gas(mut self, gas: U256) -> Self {
    self.gas = Some(gas);
    self
  }
}

#[async_trait(?Send)]
impl ContractFramework for EthFramework {
  type Factory = ArtifactFactory;

  async fn contract_factory(&self, name: &str) -> Result<ArtifactFactory> {
    let contract = self.artifacts.load(name)?;
    log::info!("resolved artifact for {}", contract.name);
    Ok(ArtifactFactory {
      web3: self.web3.clone(),
      account: self.account.clone(),
      contract,
      confirmations: self.confirmations,
      gas: self.gas,
    })
  }
}

pub struct ArtifactFactory {
  web3: Web3<DynTransport>,
  account: Account<DynTransport>,
  contract: Contract,
  confirmations: usize,
  gas: Option<U256>,
}

#[async_trait(?Send)]
impl ContractFactory for ArtifactFactory {
  type Pending = PendingDeployment;

  async fn deploy(&self, arg: &str) -> Result<PendingDeployment> {
    // link and encode before touching the node
    let params = (arg.to_string(),);
    let builder = Instance::builder(self.web3.clone(), self.contract.clone(), params)
      .map_err(DeployError::from)?;
    let nonce = self
      .web3
      .eth()
      .transaction_count(self.account.address(), None)
      .await?;
    let mut builder = builder
      .from(self.account.clone())
      .nonce(nonce)
      .confirmations(self.confirmations);
    if let Some(gas) = self.gas {
      builder = builder.gas(gas);
    }
    Ok(PendingDeployment {
      name: self.contract.name.clone(),
      builder,
    })
  }
}

pub struct PendingDeployment {
  name: String,
  builder: DeployBuilder<DynTransport, Instance<DynTransport>>,
}

#[async_trait(?Send)]
impl PendingContract for PendingDeployment {
  async fn deployed(self) -> Result<DeployedContract> {
    log::info!("submitting {} deployment", self.name);
    let instance = self.builder.deploy().await?;
    log::info!("{} deployment confirmed", self.name);
    Ok(DeployedContract {
      address: instance.address(),
    })
  }
}
