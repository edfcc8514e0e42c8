use crate::error::CliError;
use serde::Serialize;

pub fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String, CliError> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}

pub fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<(), CliError> {
    let json = to_json(value, compact)?;
    println!("{json}");
    Ok(())
}
