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

use dotenv::dotenv;
use yieldeth::{config, deployer::EthFramework, error::Error, runner};

async fn deploy() -> Result<runner::DeploymentResult, runner::DeploymentFailure> {
  let setup = async {
    let net = config::network();
    log::info!("network {}", net);
    let conf = config::load_config(net.as_str())?;
    let (web3, account) = config::init_web3(&conf).await?;
    Ok::<_, Error>(EthFramework::from_config(&web3, account, &conf))
  };
  let framework = setup.await.map_err(|source| runner::DeploymentFailure {
    contract: runner::CONTRACT_NAME.to_string(),
    source,
  })?;
  runner::run(&framework, &mut std::io::stdout()).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
  dotenv().ok();
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let outcome = deploy().await;
  let code = runner::report(&outcome, &mut std::io::stderr());
  std::process::exit(code);
}
