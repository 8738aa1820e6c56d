// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use gitops_janitor::backup::run_backup;
use gitops_janitor::cli::{exit_code, init_tracing};
use gitops_janitor::config::BackupArgs;
use gitops_janitor::kubernetes::create_client;

#[tokio::main]
async fn main() -> ExitCode {
    let args = BackupArgs::parse();
    init_tracing();
    exit_code(run(args).await)
}

async fn run(args: BackupArgs) -> Result<()> {
    let client = create_client().await?;
    run_backup(&client, &args.output_dir).await?;
    Ok(())
}
