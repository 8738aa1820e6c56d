// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use std::process::ExitCode;

use gitops_janitor::cli::{exit_code, init_tracing};
use gitops_janitor::kubernetes::create_client;
use gitops_janitor::patch::{remove_finalizers, FailurePolicy};
use gitops_janitor::schemas::FLUX;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    exit_code(run().await)
}

async fn run() -> Result<()> {
    let client = create_client().await?;
    remove_finalizers(&client, FLUX, None, FailurePolicy::Abort).await?;
    Ok(())
}
