//! `sanitize` command: filter a JSON object read from stdin.

use std::io::{self, Read};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::sanitize::{Filtered, Select, Source, filter};

/// Sanitize a JSON document, optionally keeping only `keys`.
pub fn sanitize_json(input: &str, keys: Option<&[String]>) -> Result<Filtered> {
    let value: Value = serde_json::from_str(input).context("stdin is not valid JSON")?;
    let keys: Vec<&str> = keys.unwrap_or_default().iter().map(String::as_str).collect();

    let select = match keys.as_slice() {
        [] => Select::All,
        [key] => Select::One(key),
        many => Select::Many(many),
    };
    Ok(filter(Source::Direct(&value), select)?)
}

/// Read stdin, sanitize and print the result as JSON.
pub fn run(keys: Option<&[String]>, pretty: bool) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;

    let result = sanitize_json(&input, keys)?;
    let output = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{output}");
    Ok(())
}
