// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Reset the status of Flux Kustomizations through the status subresource.

use super::{patch_all, replace_patch, PatchTarget};
use crate::constants::paths;
use crate::error::Result;
use crate::kubernetes::list_objects;
use crate::schemas::FLUX_KUSTOMIZATION;
use kube::Client;
use tracing::{info, instrument};

#[instrument(skip(client))]
pub async fn empty_kustomization_status(client: &Client, namespace: &str) -> Result<usize> {
    let kustomizations = list_objects(client, &FLUX_KUSTOMIZATION, Some(namespace)).await?;
    info!(
        "Clearing status in {} Flux Kustomizations...",
        kustomizations.len()
    );

    let patch = replace_patch(paths::STATUS, serde_json::json!({}));
    patch_all(
        client,
        &FLUX_KUSTOMIZATION,
        &kustomizations,
        &patch,
        PatchTarget::Status,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{dynamic_object, list_json, MockService};

    #[tokio::test]
    async fn test_empty_kustomization_status_uses_status_endpoint() {
        let ks = |name: &str, uid: &str| {
            dynamic_object(&FLUX_KUSTOMIZATION, "flux-giantswarm", name, uid)
        };
        let mock = MockService::new()
            .on_get(
                "/apis/kustomize.toolkit.fluxcd.io/v1beta2/namespaces/flux-giantswarm/kustomizations",
                200,
                &list_json(&FLUX_KUSTOMIZATION, vec![ks("flux", "u1"), ks("apps", "u2")]),
            )
            .on_patch(
                "/apis/kustomize.toolkit.fluxcd.io/v1beta2/namespaces/flux-giantswarm/kustomizations/",
                200,
                &ks("flux", "u1").to_string(),
            );
        let client = mock.clone().into_client();

        let count = empty_kustomization_status(&client, "flux-giantswarm")
            .await
            .unwrap();

        assert_eq!(count, 2);
        let patches = mock.patches();
        let paths: Vec<_> = patches.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/apis/kustomize.toolkit.fluxcd.io/v1beta2/namespaces/flux-giantswarm/kustomizations/flux/status",
                "/apis/kustomize.toolkit.fluxcd.io/v1beta2/namespaces/flux-giantswarm/kustomizations/apps/status",
            ]
        );
        assert_eq!(
            patches[0].body,
            Some(serde_json::json!([{"op": "replace", "path": "/status", "value": {}}]))
        );
    }
}
