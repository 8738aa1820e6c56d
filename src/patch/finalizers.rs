// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Finalizer removal for resources stuck terminating after their controller is gone.

use super::{apply_patch, replace_patch, PatchSummary, PatchTarget};
use crate::constants::paths;
use crate::error::Result;
use crate::kubernetes::{list_objects, object_ref};
use crate::schemas::ResourceSchema;
use kube::{api::DynamicObject, Client};
use tracing::{error, info, instrument, warn};

/// What to do when listing or patching a collection fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Return the error immediately
    Abort,
    /// Log the error and carry on with the next object or collection
    Continue,
}

/// Progress line for a patched object, prefixed with the kind when continuing past failures
fn progress_line(schema: &ResourceSchema, obj: &DynamicObject, policy: FailurePolicy) -> String {
    match policy {
        FailurePolicy::Continue => format!("  {}: {}", schema.kind, object_ref(obj)),
        FailurePolicy::Abort => format!("  {}", object_ref(obj)),
    }
}

/// Replace `metadata.finalizers` with an empty list on every object of the given collections
#[instrument(skip(client, schemas), fields(collections = schemas.len()))]
pub async fn remove_finalizers(
    client: &Client,
    schemas: &[ResourceSchema],
    namespace: Option<&str>,
    policy: FailurePolicy,
) -> Result<PatchSummary> {
    let patch = replace_patch(paths::FINALIZERS, serde_json::json!([]));
    let mut summary = PatchSummary::default();

    for schema in schemas {
        let objects = match list_objects(client, schema, namespace).await {
            Ok(objects) => objects,
            Err(e) if policy == FailurePolicy::Continue => {
                warn!("Failed to list {}: {}", schema, e);
                summary.failed += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        let ar = schema.api_resource();
        for obj in &objects {
            match apply_patch(client, &ar, obj, &patch, PatchTarget::Object).await {
                Ok(_) => {
                    summary.patched += 1;
                    info!("{}", progress_line(schema, obj, policy));
                }
                Err(e) if policy == FailurePolicy::Continue => {
                    error!("{}", e);
                    summary.failed += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    Ok(summary)
}
