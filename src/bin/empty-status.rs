// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use gitops_janitor::cli::{exit_code, init_tracing};
use gitops_janitor::config::EmptyStatusArgs;
use gitops_janitor::kubernetes::create_client;
use gitops_janitor::patch::empty_kustomization_status;

#[tokio::main]
async fn main() -> ExitCode {
    let args = EmptyStatusArgs::parse();
    init_tracing();
    exit_code(run(args).await)
}

async fn run(args: EmptyStatusArgs) -> Result<()> {
    args.validate()?;
    let client = create_client().await?;
    empty_kustomization_status(&client, &args.namespace).await?;
    Ok(())
}
