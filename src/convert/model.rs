// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Input and output manifests of the collection converter.

use crate::constants::konfigure::{API_VERSION, FUNCTION_ANNOTATION, FUNCTION_EXEC, KIND};
use kube::api::ObjectMeta;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The parts of an Argo CD Application the converter reads
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ArgoApplication {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: ApplicationSpec,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSpec {
    pub destination: Option<ApplicationDestination>,
    pub source: Option<ApplicationSource>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ApplicationDestination {
    pub namespace: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ApplicationSource {
    pub plugin: Option<PluginSource>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PluginSource {
    pub env: Option<Vec<PluginSetting>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PluginSetting {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl ArgoApplication {
    pub fn destination_namespace(&self) -> Option<&str> {
        self.spec.destination.as_ref()?.namespace.as_deref()
    }

    pub fn plugin_settings(&self) -> Option<&[PluginSetting]> {
        self.spec.source.as_ref()?.plugin.as_ref()?.env.as_deref()
    }
}

/// Konfigure generator consumed by kustomize as an exec function
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Konfigure {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub metadata: KonfigureMeta,

    pub app_catalog: String,
    pub app_destination_namespace: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub app_disable_force_update: bool,
    pub app_name: String,
    pub app_version: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct KonfigureMeta {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

impl Konfigure {
    /// Empty generator named `name`, wired to the konfigure exec plugin
    pub fn new(name: &str) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: KIND.to_string(),
            metadata: KonfigureMeta {
                name: name.to_string(),
                annotations: BTreeMap::from([(
                    FUNCTION_ANNOTATION.to_string(),
                    FUNCTION_EXEC.to_string(),
                )]),
            },
            app_catalog: String::new(),
            app_destination_namespace: String::new(),
            app_disable_force_update: false,
            app_name: String::new(),
            app_version: String::new(),
            name: String::new(),
        }
    }
}

/// kustomization.yaml listing the generated files
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Kustomization {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generators: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_accessors() {
        let app: ArgoApplication = serde_yaml::from_str(
            r#"
apiVersion: argoproj.io/v1alpha1
kind: Application
metadata:
  name: hello
spec:
  destination:
    namespace: ns1
  source:
    plugin:
      env:
        - name: KONFIGURE_APP_NAME
          value: hello
"#,
        )
        .unwrap();

        assert_eq!(app.metadata.name.as_deref(), Some("hello"));
        assert_eq!(app.destination_namespace(), Some("ns1"));
        assert_eq!(
            app.plugin_settings().unwrap(),
            &[PluginSetting {
                name: "KONFIGURE_APP_NAME".to_string(),
                value: "hello".to_string(),
            }]
        );
    }

    #[test]
    fn test_application_without_plugin() {
        let app: ArgoApplication =
            serde_yaml::from_str("metadata:\n  name: hello\nspec:\n  source:\n    path: x\n").unwrap();

        assert!(app.destination_namespace().is_none());
        assert!(app.plugin_settings().is_none());
    }

    #[test]
    fn test_konfigure_omits_disabled_force_update() {
        let generator = Konfigure::new("hello");

        let yaml = serde_yaml::to_string(&generator).unwrap();

        assert!(!yaml.contains("app_disable_force_update"));
        assert!(yaml.contains("apiVersion: generators.giantswarm.io/v1"));
    }

    #[test]
    fn test_konfigure_uses_manifest_api_version_key() {
        let value = serde_json::to_value(Konfigure::new("hello")).unwrap();

        assert_eq!(value["apiVersion"], API_VERSION);
        assert!(value.get("api_version").is_none());
        assert_eq!(value["kind"], KIND);
    }

    #[test]
    fn test_empty_kustomization_omits_generators() {
        let yaml = serde_yaml::to_string(&Kustomization::default()).unwrap();

        assert_eq!(yaml.trim(), "{}");
    }
}
