//! petcheck CLI - validate captured Pet Store responses against the schema DB

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indexmap::IndexMap;
use serde::Deserialize;

use petcheck_core::{ApiResponse, Config, NO_MISMATCH, Validator, generate_db_schema};

#[derive(Parser)]
#[command(name = "petcheck")]
#[command(about = "Schema validation for captured Pet Store API responses")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize config file (petcheck.toml)
    Init,

    /// Validate a captured response file against the schema database
    Check {
        /// Resource name, e.g. "pet"
        resource: String,

        /// Endpoint template, e.g. "/v2/pet"
        endpoint: String,

        /// HTTP method, e.g. "POST"
        method: String,

        /// Captured response JSON: {"status": ..., "headers": {...}, "body": ...}
        file: PathBuf,

        /// Flag body keys not declared in the schema database
        #[arg(long)]
        body_strict: bool,

        /// Flag headers not declared in the schema database
        #[arg(long)]
        headers_strict: bool,

        /// Schema database path (default: from config)
        #[arg(long)]
        schema_db: Option<PathBuf>,
    },

    /// Export JSON Schema for the schema database document format
    Schema,
}

/// Captured response file format, as written by the client's request logs or
/// by hand while authoring schema entries.
#[derive(Debug, Deserialize)]
struct CapturedResponse {
    status: u16,
    #[serde(default)]
    headers: IndexMap<String, String>,
    /// Either a JSON value (kept verbatim) or a raw string body.
    #[serde(default)]
    body: serde_json::Value,
}

impl CapturedResponse {
    fn into_api_response(self) -> ApiResponse {
        let body = match self.body {
            serde_json::Value::String(text) => text,
            other => other.to_string(),
        };
        ApiResponse::new(self.status, body, self.headers)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Init => {
            let path = std::path::Path::new("petcheck.toml");
            if path.exists() {
                eprintln!("petcheck.toml already exists, leaving it alone");
                return Ok(0);
            }
            std::fs::write(path, Config::example()).context("write petcheck.toml")?;
            eprintln!("Wrote petcheck.toml");
            Ok(0)
        }

        Commands::Check {
            resource,
            endpoint,
            method,
            file,
            body_strict,
            headers_strict,
            schema_db,
        } => {
            let db_path = match schema_db {
                Some(path) => path,
                None => Config::load_default()?.schema_db,
            };
            let (result, code) = run_check(
                &resource,
                &endpoint,
                &method,
                &file,
                body_strict,
                headers_strict,
                db_path,
            )?;
            println!("{result}");
            Ok(code)
        }

        Commands::Schema => {
            println!("{}", generate_db_schema());
            Ok(0)
        }
    }
}

/// Validate one captured-response file; returns the rendered report and the
/// exit code (0 clean, 1 mismatches).
#[allow(clippy::too_many_arguments)]
fn run_check(
    resource: &str,
    endpoint: &str,
    method: &str,
    file: &std::path::Path,
    body_strict: bool,
    headers_strict: bool,
    db_path: PathBuf,
) -> Result<(String, i32)> {
    let content =
        std::fs::read_to_string(file).with_context(|| format!("read {}", file.display()))?;
    let captured: CapturedResponse =
        serde_json::from_str(&content).with_context(|| format!("parse {}", file.display()))?;
    let response = captured.into_api_response();

    let result = Validator::new(db_path).validate(
        resource,
        endpoint,
        &method.to_uppercase(),
        Some(&response),
        body_strict,
        headers_strict,
    )?;

    let code = i32::from(result != NO_MISMATCH);
    Ok((result, code))
}
