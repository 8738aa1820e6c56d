// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use gitops_janitor::cli::{exit_code, init_tracing};
use gitops_janitor::config::StarboardFinalizerArgs;
use gitops_janitor::kubernetes::create_client;
use gitops_janitor::patch::{remove_finalizers, FailurePolicy};
use gitops_janitor::schemas::argo_flux_and_starboard;

#[tokio::main]
async fn main() -> ExitCode {
    let args = StarboardFinalizerArgs::parse();
    init_tracing();
    exit_code(run(args).await)
}

async fn run(args: StarboardFinalizerArgs) -> Result<()> {
    args.namespace.validate()?;
    let client = create_client().await?;
    remove_finalizers(
        &client,
        &argo_flux_and_starboard(),
        Some(args.namespace.namespace.as_str()),
        FailurePolicy::Abort,
    )
    .await?;
    Ok(())
}
