// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::info;

use gitops_janitor::cli::{exit_code, init_tracing};
use gitops_janitor::config::ConvertArgs;
use gitops_janitor::convert::convert_collection;

fn main() -> ExitCode {
    let args = ConvertArgs::parse();
    init_tracing();
    exit_code(run(args))
}

fn run(args: ConvertArgs) -> Result<()> {
    info!("Converting Argo Applications to Flux Kustomizations...");
    args.validate()?;
    convert_collection(&args.collection_dir, &args.dir)?;
    Ok(())
}
