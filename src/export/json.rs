//! JSON Export functionality

use std::io::Write;

use serde::Serialize;

use crate::error::{SmartBudgetError, SmartBudgetResult};

/// Serialize report records as pretty-printed JSON
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> SmartBudgetResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| SmartBudgetError::Export(format!("Failed to serialize report: {}", e)))
}

/// Write report records as pretty-printed JSON followed by a newline
pub fn export_json<T, W>(value: &T, mut writer: W) -> SmartBudgetResult<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    let json = to_json_string(value)?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
