//! List the registered provider sheet layouts.

use crate::baseball::registry::SCHEMAS;
use crate::error::Result;

pub fn handle_schemas() -> Result<()> {
    for schema in SCHEMAS {
        println!(
            "{} {}: {} columns",
            schema.provider,
            schema.position,
            schema.fields.len()
        );
    }
    Ok(())
}
