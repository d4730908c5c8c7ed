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

use crate::{error::Error, utils, Result};
use ethcontract::{transport::DynTransport, Account, Http, PrivateKey, Web3};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_NETWORK: &str = "localhost";

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
  pub chain_id: u64,
  pub eth_url: String,
  pub private_key: Option<String>,
  // node-managed account to deploy from when no private key is set
  pub from: Option<String>,
  pub artifacts_dir: String,
  pub confirmations: usize,
  pub gas: Option<u64>,
  pub check_balance: bool,
}

// selected the same way hardhat's --network flag would be
pub fn network() -> String {
  std::env::var("NETWORK").unwrap_or_else(|_| DEFAULT_NETWORK.to_string())
}

fn defaults() -> Result<::config::Config> {
  let mut settings = ::config::Config::default();
  settings.set_default("chain_id", 1337_i64)?;
  settings.set_default("eth_url", "http://localhost:8545")?;
  settings.set_default("artifacts_dir", "artifacts")?;
  settings.set_default("confirmations", 0_i64)?;
  settings.set_default("check_balance", true)?;
  Ok(settings)
}

/// Loads `config/config.<network>.json` on top of the defaults, then applies
/// `DEPLOY_*` environment overrides. The file is optional.
pub fn load_config(network: &str) -> Result<Config> {
  load_config_from(&format!("config/config.{}.json", network))
}

pub fn load_config_from(path: &str) -> Result<Config> {
  let mut settings = defaults()?;
  settings.merge(::config::File::with_name(path).required(false))?;
  settings.merge(::config::Environment::with_prefix("DEPLOY"))?;
  Ok(settings.try_into::<Config>()?)
}

async fn select_account(
  web3: &Web3<DynTransport>,
  conf: &Config,
) -> Result<Account<DynTransport>> {
  if let Some(key) = conf.private_key.as_deref().filter(|k| !k.is_empty()) {
    let priv_key = PrivateKey::from_str(key).map_err(|_| Error::InvalidPrivateKey)?;
    return Ok(Account::Offline(priv_key, Some(conf.chain_id)));
  }
  if let Some(from) = conf.from.as_deref() {
    return Ok(Account::Local(utils::parse_address(from)?, None));
  }
  // same fallback as hardhat: the node's first unlocked account
  let accounts = web3.eth().accounts().await?;
  let first = accounts.first().copied().ok_or(Error::NoAccounts)?;
  Ok(Account::Local(first, None))
}

pub async fn init_web3(conf: &Config) -> Result<(Web3<DynTransport>, Account<DynTransport>)> {
  let transport = Http::new(conf.eth_url.as_str())?;
  let web3 = Web3::new(DynTransport::new(transport));
  let account = select_account(&web3, conf).await?;
  log::info!("deploying from {:?} via {}", account.address(), conf.eth_url);

  if conf.check_balance {
    let balance = web3.eth().balance(account.address(), None).await?;
    log::debug!("deployer balance {}", balance);
    if balance.is_zero() {
      return Err(Error::InsufficientBalance(account.address()));
    }
  }
  Ok((web3, account))
}
