// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Untyped list access to custom resource collections

use crate::error::Result;
use crate::schemas::ResourceSchema;
use kube::{
    api::{ApiResource, DynamicObject, ListParams},
    core::TypeMeta,
    Api, Client, ResourceExt,
};
use tracing::{debug, instrument};

/// List every object of a collection, cluster-wide when no namespace is given.
/// Cluster-scoped collections ignore the namespace.
///
/// Items missing `apiVersion`/`kind` get them filled in from the schema so
/// they can be serialized as standalone manifests.
#[instrument(skip(client, schema), fields(schema = %schema))]
pub async fn list_objects(
    client: &Client,
    schema: &ResourceSchema,
    namespace: Option<&str>,
) -> Result<Vec<DynamicObject>> {
    let ar = schema.api_resource();
    let api: Api<DynamicObject> = match namespace.filter(|_| schema.namespaced) {
        Some(ns) => Api::namespaced_with(client.clone(), ns, &ar),
        None => Api::all_with(client.clone(), &ar),
    };

    let list = api.list(&ListParams::default()).await?;
    debug!("Listed {} objects", list.items.len());

    Ok(list
        .items
        .into_iter()
        .map(|mut obj| {
            obj.types.get_or_insert_with(|| TypeMeta {
                api_version: ar.api_version.clone(),
                kind: ar.kind.clone(),
            });
            obj
        })
        .collect())
}

/// API handle addressing a single listed object, scoped to its namespace if it has one
pub fn object_api(client: &Client, ar: &ApiResource, obj: &DynamicObject) -> Api<DynamicObject> {
    match obj.namespace() {
        Some(ns) => Api::namespaced_with(client.clone(), &ns, ar),
        None => Api::all_with(client.clone(), ar),
    }
}

/// `namespace/name` of an object, as printed in progress logs
pub fn object_ref(obj: &DynamicObject) -> String {
    format!("{}/{}", obj.namespace().unwrap_or_default(), obj.name_any())
}
