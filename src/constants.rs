// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Backup output directories, relative to the output root
pub mod backup {
    pub const ARGO_DIR: &str = "argo-backup";
    pub const FLUX_DIR: &str = "flux-backup";

    /// Marker written after every serialized document
    pub const DOCUMENT_SEPARATOR: &str = "---\n";

    /// Metadata fields managed by the API server that must not be restored
    pub const VOLATILE_METADATA: [&str; 4] =
        ["creationTimestamp", "resourceVersion", "selfLink", "uid"];
}

/// JSON pointers targeted by the patch utilities
pub mod paths {
    pub const FINALIZERS: &str = "/metadata/finalizers";
    pub const SELF_HEAL: &str = "/spec/syncPolicy/automated/selfHeal";
    pub const STATUS: &str = "/status";
}

/// Namespace holding the Flux Kustomizations whose status is reset by default
pub const DEFAULT_FLUX_NAMESPACE: &str = "flux-giantswarm";

/// Konfigure generator output
pub mod konfigure {
    pub const API_VERSION: &str = "generators.giantswarm.io/v1";
    pub const KIND: &str = "Konfigure";
    pub const FUNCTION_ANNOTATION: &str = "config.kubernetes.io/function";
    pub const FUNCTION_EXEC: &str = "exec:\n  path: /plugins/konfigure";

    pub const SOURCE_DIR: &str = "manifests";
    pub const DEFAULT_OUTPUT_DIR: &str = "manifests";
    pub const KUSTOMIZATION_FILE: &str = "kustomization.yaml";

    /// Argo CD plugin environment keys understood by the converter
    pub mod settings {
        pub const APP_NAME: &str = "KONFIGURE_APP_NAME";
        pub const APP_VERSION: &str = "KONFIGURE_APP_VERSION";
        pub const APP_CATALOG: &str = "KONFIGURE_APP_CATALOG";
    }
}
