//! Handler functions for CLI commands.
//!
//! Each handler returns the text to print rather than printing it, so the
//! binary stays a thin shell and the handlers can be tested directly.

use serde_json::{Value, json};
use soarep_client::{ClientConfig, Params, ResourceDescriptor, ResourceRegistry};

use crate::cli::{Cli, Command, ConfigAction, to_params};
use crate::config::{self, Overrides};
use crate::error::{Error, Result};

// ============================================================================
// Command dispatch
// ============================================================================

/// Run a parsed command line and return its output.
pub async fn run(cli: Cli) -> Result<String> {
    let overrides = Overrides {
        base_url: cli.base_url.clone(),
        timeout_secs: cli.timeout,
    };
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Resources { json } => cmd_resources(json),
        Command::Query {
            resource,
            params,
            compact,
        } => {
            let config = config::load(config_path, &overrides)?;
            let registry = ResourceRegistry::from_config(&config)?;
            cmd_query(&registry, &resource, &to_params(&params), compact).await
        }
        Command::Url { resource, params } => {
            let config = config::load(config_path, &overrides)?;
            let registry = ResourceRegistry::from_config(&config)?;
            cmd_url(&registry, &resource, &to_params(&params))
        }
        Command::Config { action } => match action {
            ConfigAction::Path => cmd_config_path(config_path),
            ConfigAction::Show => {
                let config = config::load(config_path, &overrides)?;
                cmd_config_show(&config)
            }
            ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force),
        },
    }
}

// ============================================================================
// Resource commands
// ============================================================================

/// List every registered resource as a table or as JSON.
pub fn cmd_resources(as_json: bool) -> Result<String> {
    let descriptors: Vec<&ResourceDescriptor> = ResourceRegistry::descriptors().collect();

    if as_json {
        let list: Vec<Value> = descriptors.iter().map(|d| describe(d)).collect();
        return Ok(serde_json::to_string_pretty(&list)?);
    }

    let mut lines = vec![format!(
        "{:<16} {:<34} {:<22} {}",
        "NAME", "TEMPLATE", "DEFAULTS", "SHAPE"
    )];
    for descriptor in descriptors {
        let defaults = format_defaults(descriptor);
        let shape = descriptor.query()?.shape;
        lines.push(format!(
            "{:<16} {:<34} {:<22} {}",
            descriptor.name,
            descriptor.url_template,
            if defaults.is_empty() { "-" } else { defaults.as_str() },
            shape
        ));
    }
    Ok(lines.join("\n"))
}

fn format_defaults(descriptor: &ResourceDescriptor) -> String {
    descriptor
        .default_params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn describe(descriptor: &ResourceDescriptor) -> Value {
    let defaults: serde_json::Map<String, Value> = descriptor
        .default_params
        .iter()
        .map(|(key, value)| (key.to_string(), Value::from(*value)))
        .collect();
    let operations: Vec<Value> = descriptor
        .operations
        .iter()
        .map(|op| {
            json!({
                "name": op.name,
                "method": op.verb.to_string(),
                "isArray": op.shape.is_array(),
            })
        })
        .collect();
    json!({
        "name": descriptor.name,
        "urlTemplate": descriptor.url_template,
        "defaultParams": defaults,
        "operations": operations,
    })
}

/// Query a resource and render the decoded body.
pub async fn cmd_query(
    registry: &ResourceRegistry,
    resource: &str,
    params: &Params,
    compact: bool,
) -> Result<String> {
    let handle = registry.resource(resource)?;
    let result = handle.query(params).await?;
    tracing::info!(resource = handle.name(), items = result.len(), "Query complete");

    let value = result.into_value();
    let rendered = if compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    Ok(rendered)
}

/// Resolve the URL a query would request.
pub fn cmd_url(registry: &ResourceRegistry, resource: &str, params: &Params) -> Result<String> {
    let handle = registry.resource(resource)?;
    Ok(handle.url(params)?.to_string())
}

// ============================================================================
// Config commands
// ============================================================================

/// Show the resolved config file path, noting when it does not exist.
pub fn cmd_config_path(explicit: Option<&str>) -> Result<String> {
    let path = config::resolve_config_path(explicit)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))?;
    if path.exists() {
        Ok(path.display().to_string())
    } else {
        Ok(format!(
            "{} (does not exist; run `{} config init` to create it)",
            path.display(),
            config::PROJECT_NAME
        ))
    }
}

/// Render the effective configuration as TOML.
pub fn cmd_config_show(config: &ClientConfig) -> Result<String> {
    Ok(config.to_toml_string()?)
}

/// Create a default configuration file.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<String> {
    let path = config::init_file(file, force)?;
    Ok(format!("Config file created at {}", path.display()))
}

// ============================================================================
// Tests
// ============================================================================
