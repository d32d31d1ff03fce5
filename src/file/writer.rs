//! Rendering of seek results.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Output syntax for a rendered value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Renders any serializable value as YAML or JSON, without a trailing newline.
///
/// `pretty` only affects JSON; YAML is always block-formatted.
///
/// # Example
///
/// ```
/// use datadig::file::writer::{render, OutputFormat};
/// use serde_json::json;
///
/// let value = json!({"a": [1, 2]});
/// assert_eq!(render(&value, OutputFormat::Json, false).unwrap(), r#"{"a":[1,2]}"#);
/// assert_eq!(render(&value, OutputFormat::Yaml, false).unwrap(), "a:\n- 1\n- 2");
/// ```
pub fn render<V: Serialize + ?Sized>(value: &V, format: OutputFormat, pretty: bool) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json if pretty => {
            serde_json::to_string_pretty(value).context("Failed to render JSON")?
        }
        OutputFormat::Json => serde_json::to_string(value).context("Failed to render JSON")?,
        OutputFormat::Yaml => serde_yaml::to_string(value).context("Failed to render YAML")?,
    };

    Ok(rendered.trim_end_matches('\n').to_string())
}
