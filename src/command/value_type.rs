use anyhow::{anyhow, Result};
use core_contracts::models::normalize_value_type;

use crate::argsets::ValueTypeArgs;

pub fn value_type(args: ValueTypeArgs) -> Result<()> {
    let canonical = normalize_value_type(&args.token).map_err(|e| anyhow!(e.message_chain()))?;
    println!("{}", canonical);
    Ok(())
}
