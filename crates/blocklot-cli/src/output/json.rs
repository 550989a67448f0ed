use blocklot_core::error::GuideError;
use serde::Serialize;
use std::path::Path;

pub fn write<T: Serialize + ?Sized>(value: &T, out: Option<&Path>) -> Result<(), GuideError> {
    let json = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}
