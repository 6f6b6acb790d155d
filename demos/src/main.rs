// SPDX-License-Identifier: Apache-2.0

//! Demo driver: parse a project manifest and print its interesting fields.
//!
//! Expects the fixed shape under a `project` root key: `name`, `version`,
//! `dependencies` (name → `{version, features[]}`) and `contributors`
//! (array of `{name, email}`). Any parse or lookup failure prints the
//! error and exits nonzero.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::debug;

/// Print a summary of a JSON project manifest.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON file to inspect.
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("input: {}", args.input.display());

    let doc = domjson::parse_file(&args.input)
        .with_context(|| format!("failed to parse `{}`", args.input.display()))?;
    println!("Parsed JSON from file successfully.");

    let project = doc.get("project")?;
    println!("Project name: {}", project.get("name")?.as_str()?);
    println!("Project version: {}", project.get("version")?.as_str()?);

    println!("Dependencies:");
    for (name, dependency) in project.get("dependencies")?.as_object()? {
        println!(" - {}: version {}", name, dependency.get("version")?.as_str()?);
        println!("   Features:");
        for feature in dependency.get("features")?.as_array()? {
            println!("     - {}", feature.as_str()?);
        }
    }

    println!("Contributors:");
    for contributor in project.get("contributors")?.as_array()? {
        println!(" - Name: {}", contributor.get("name")?.as_str()?);
        println!("   Email: {}", contributor.get("email")?.as_str()?);
    }

    println!("Serialized JSON: {}", doc.serialize());
    Ok(())
}
