use anyhow::{anyhow, Result};
use core_contracts::clients::{CommonClient, RequestContext};
use core_contracts::config::{ClientConfig, Service};

use crate::argsets::PingArgs;

pub fn ping(args: PingArgs) -> Result<()> {
    let service: Service = args.service.parse()?;
    let config = ClientConfig::from_env()?;
    let client = CommonClient::for_service(&config, service)?;

    let ctx = RequestContext::new();
    log::info!("Pinging {} at {}", service, config.url_for(service));
    let response = client
        .ping(&ctx)
        .map_err(|e| anyhow!("{} did not answer: {}", service, e.message_chain()))?;
    println!("{} {}", service, response.timestamp);
    Ok(())
}
