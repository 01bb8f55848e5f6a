use schemars::schema_for;
use serde_json::json;

use crate::model::{ErrorEnvelope, PriceSnapshot};

/// Print the JSON Schema of both wire payloads (for dashboard clients).
pub fn run() -> anyhow::Result<()> {
    let schemas = json!({
        "priceSnapshot": schema_for!(PriceSnapshot),
        "errorEnvelope": schema_for!(ErrorEnvelope),
    });
    println!("{}", serde_json::to_string_pretty(&schemas)?);
    Ok(())
}
