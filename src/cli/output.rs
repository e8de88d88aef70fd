use serde_json::{json, Value};

use super::Cli;
use crate::database::Department;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub fn output_success(output_format: &OutputFormat, message: &str) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "success": true,
                    "message": message
                }))?
            );
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

pub fn output_departments(
    output_format: &OutputFormat,
    workspace_id: &str,
    departments: &[Department],
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(departments)?);
        }
        OutputFormat::Text if departments.is_empty() => {
            println!("No active departments in workspace '{}'", workspace_id);
        }
        OutputFormat::Text => {
            for department in departments {
                match &department.description {
                    Some(description) => println!("{}  {}  - {}", department.id, department.name, description),
                    None => println!("{}  {}", department.id, department.name),
                }
            }
        }
    }
    Ok(())
}

pub fn output_health(output_format: &OutputFormat, health: &Value) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(health)?);
        }
        OutputFormat::Text => {
            let status = health.get("status").and_then(Value::as_str).unwrap_or("unknown");
            let database = health.get("database").and_then(Value::as_str).unwrap_or("unknown");
            println!("Status: {} (database: {})", status, database);
        }
    }
    Ok(())
}
