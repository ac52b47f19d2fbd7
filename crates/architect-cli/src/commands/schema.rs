//! Customization schema command.

use anyhow::Result;

use architect_core::Customization;

pub fn execute() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&Customization::json_schema())?);
    Ok(())
}
