// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource tables for the Argo CD, Flux, and Starboard custom resources.
//!
//! Tables that list several versions of the same kind are ordered from the
//! newest API version to the oldest. Backups rely on this: an object served
//! under multiple versions is kept only the first time it is seen.

use kube::api::{ApiResource, GroupVersionKind};
use std::fmt;

/// One served collection of a custom resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSchema {
    pub group: &'static str,
    pub version: &'static str,
    pub kind: &'static str,
    pub plural: &'static str,
    /// False for cluster-scoped kinds, which are always listed cluster-wide
    pub namespaced: bool,
}

impl ResourceSchema {
    pub const fn new(
        group: &'static str,
        version: &'static str,
        kind: &'static str,
        plural: &'static str,
    ) -> Self {
        Self {
            group,
            version,
            kind,
            plural,
            namespaced: true,
        }
    }

    /// Mark the collection as cluster-scoped
    pub const fn cluster_scoped(self) -> Self {
        Self {
            namespaced: false,
            ..self
        }
    }

    /// `group/version` as used in the `apiVersion` field
    pub fn api_version(&self) -> String {
        format!("{}/{}", self.group, self.version)
    }

    pub fn gvk(&self) -> GroupVersionKind {
        GroupVersionKind::gvk(self.group, self.version, self.kind)
    }

    pub fn api_resource(&self) -> ApiResource {
        ApiResource::from_gvk_with_plural(&self.gvk(), self.plural)
    }

    /// File name holding the backup of this collection
    pub fn backup_file_name(&self) -> String {
        format!(
            "{}.{}.{}.yaml",
            self.group,
            self.version,
            self.kind.to_lowercase()
        )
    }
}

impl fmt::Display for ResourceSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {}", self.group, self.version, self.kind)
    }
}

pub const ARGO: &[ResourceSchema] = &[
    ResourceSchema::new("argoproj.io", "v1alpha1", "Application", "applications"),
    ResourceSchema::new("argoproj.io", "v1alpha1", "AppProject", "appprojects"),
];

pub const FLUX: &[ResourceSchema] = &[
    ResourceSchema::new("helm.toolkit.fluxcd.io", "v2beta1", "HelmRelease", "helmreleases"),
    ResourceSchema::new("image.toolkit.fluxcd.io", "v1beta1", "ImagePolicy", "imagepolicies"),
    ResourceSchema::new("image.toolkit.fluxcd.io", "v1alpha2", "ImagePolicy", "imagepolicies"),
    ResourceSchema::new("image.toolkit.fluxcd.io", "v1alpha1", "ImagePolicy", "imagepolicies"),
    ResourceSchema::new("image.toolkit.fluxcd.io", "v1beta1", "ImageRepository", "imagerepositories"),
    ResourceSchema::new("image.toolkit.fluxcd.io", "v1alpha2", "ImageRepository", "imagerepositories"),
    ResourceSchema::new("image.toolkit.fluxcd.io", "v1alpha1", "ImageRepository", "imagerepositories"),
    ResourceSchema::new("image.toolkit.fluxcd.io", "v1beta1", "ImageUpdateAutomation", "imageupdateautomations"),
    ResourceSchema::new("image.toolkit.fluxcd.io", "v1alpha2", "ImageUpdateAutomation", "imageupdateautomations"),
    ResourceSchema::new("image.toolkit.fluxcd.io", "v1alpha1", "ImageUpdateAutomation", "imageupdateautomations"),
    ResourceSchema::new("kustomize.toolkit.fluxcd.io", "v1beta2", "Kustomization", "kustomizations"),
    ResourceSchema::new("kustomize.toolkit.fluxcd.io", "v1beta1", "Kustomization", "kustomizations"),
    ResourceSchema::new("notification.toolkit.fluxcd.io", "v1beta1", "Alert", "alerts"),
    ResourceSchema::new("notification.toolkit.fluxcd.io", "v1beta1", "Provider", "providers"),
    ResourceSchema::new("notification.toolkit.fluxcd.io", "v1beta1", "Receiver", "receivers"),
    ResourceSchema::new("source.toolkit.fluxcd.io", "v1beta1", "Bucket", "buckets"),
    ResourceSchema::new("source.toolkit.fluxcd.io", "v1beta1", "GitRepository", "gitrepositories"),
    ResourceSchema::new("source.toolkit.fluxcd.io", "v1beta1", "HelmChart", "helmcharts"),
    ResourceSchema::new("source.toolkit.fluxcd.io", "v1beta1", "HelmRepository", "helmrepositories"),
];

pub const STARBOARD: &[ResourceSchema] = &[
    ResourceSchema::new("aquasecurity.github.io", "v1alpha1", "CISKubeBenchReport", "ciskubebenchreports")
        .cluster_scoped(),
    ResourceSchema::new("aquasecurity.github.io", "v1alpha1", "ClusterConfigAuditReport", "clusterconfigauditreports")
        .cluster_scoped(),
    ResourceSchema::new("aquasecurity.github.io", "v1alpha1", "ClusterVulnerabilityReport", "clustervulnerabilityreports")
        .cluster_scoped(),
    ResourceSchema::new("aquasecurity.github.io", "v1alpha1", "ConfigAuditReport", "configauditreports"),
    ResourceSchema::new("aquasecurity.github.io", "v1alpha1", "VulnerabilityReport", "vulnerabilityreports"),
];

/// The Argo CD Application collection
pub const ARGO_APPLICATION: ResourceSchema = ARGO[0];

/// The Flux Kustomization collection whose status gets reset
pub const FLUX_KUSTOMIZATION: ResourceSchema = FLUX[10];

pub fn argo_and_flux() -> Vec<ResourceSchema> {
    ARGO.iter().chain(FLUX).copied().collect()
}

pub fn argo_flux_and_starboard() -> Vec<ResourceSchema> {
    ARGO.iter().chain(FLUX).chain(STARBOARD).copied().collect()
}
