// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! JSON patches applied to listed custom resources.

pub mod finalizers;
pub mod status;
pub mod sync_policy;

pub use finalizers::{remove_finalizers, FailurePolicy};
pub use status::empty_kustomization_status;
pub use sync_policy::pause_applications;

use crate::error::{JanitorError, Result};
use crate::kubernetes::{object_api, object_ref};
use crate::schemas::ResourceSchema;
use kube::{
    api::{ApiResource, DynamicObject, Patch, PatchParams},
    Client, ResourceExt,
};
use serde_json::Value;
use tracing::info;

/// Endpoint a patch is sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchTarget {
    Object,
    Status,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PatchSummary {
    pub patched: usize,
    pub failed: usize,
}

/// Build a single-operation RFC 6902 document replacing the value at `path`
pub fn replace_patch(path: &str, value: Value) -> Value {
    serde_json::json!([{
        "op": "replace",
        "path": path,
        "value": value,
    }])
}

/// Send a JSON patch for one listed object
pub async fn apply_patch(
    client: &Client,
    ar: &ApiResource,
    obj: &DynamicObject,
    patch: &Value,
    target: PatchTarget,
) -> Result<DynamicObject> {
    let api = object_api(client, ar, obj);
    let name = obj.name_any();
    let params = PatchParams::default();
    let patch = Patch::Json::<()>(serde_json::from_value(patch.clone())?);

    let result = match target {
        PatchTarget::Object => api.patch(&name, &params, &patch).await,
        PatchTarget::Status => api.patch_status(&name, &params, &patch).await,
    };

    result.map_err(|source| JanitorError::PatchError {
        target: format!("{} {}", ar.kind, object_ref(obj)),
        source,
    })
}

/// Apply the same patch to every listed object of a collection, stopping at the first failure
pub async fn patch_all(
    client: &Client,
    schema: &ResourceSchema,
    objects: &[DynamicObject],
    patch: &Value,
    target: PatchTarget,
) -> Result<usize> {
    let ar = schema.api_resource();

    for obj in objects {
        apply_patch(client, &ar, obj, patch, target).await?;
        info!("  {}", object_ref(obj));
    }

    Ok(objects.len())
}
