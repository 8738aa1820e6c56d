// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Conversion of a collection of Argo CD Applications into Konfigure generators
//! for Flux, plus the kustomization.yaml that lists them.

pub mod model;

pub use model::{ArgoApplication, Konfigure, Kustomization, PluginSetting};

use crate::constants::konfigure::{settings, KUSTOMIZATION_FILE, SOURCE_DIR};
use crate::error::{JanitorError, Result};
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

/// Build the generator equivalent of an Argo CD Application.
///
/// `file` only names the source manifest in errors.
pub fn convert_application(app: &ArgoApplication, file: &str) -> Result<Konfigure> {
    let mut generator = Konfigure::new(app.metadata.name.as_deref().unwrap_or_default());

    generator.app_destination_namespace = app
        .destination_namespace()
        .ok_or_else(|| JanitorError::MissingField {
            field: "Destination namespace",
            file: file.to_string(),
        })?
        .to_string();

    let plugin_settings = app
        .plugin_settings()
        .ok_or_else(|| JanitorError::MissingField {
            field: "Plugin configuration",
            file: file.to_string(),
        })?;

    for setting in plugin_settings {
        match setting.name.as_str() {
            settings::APP_NAME => {
                generator.app_name = setting.value.clone();
                generator.name = setting.value.clone();
            }
            settings::APP_VERSION => generator.app_version = setting.value.clone(),
            settings::APP_CATALOG => generator.app_catalog = setting.value.clone(),
            _ => {
                return Err(JanitorError::UnexpectedPluginSetting {
                    name: setting.name.clone(),
                    file: file.to_string(),
                })
            }
        }
    }

    Ok(generator)
}

/// Convert one manifest file, writing the generator under the same file name in `output_dir`
pub fn convert_file(source_dir: &Path, output_dir: &Path, file: &str) -> Result<()> {
    let content = fs::read_to_string(source_dir.join(file))?;
    let app: ArgoApplication = serde_yaml::from_str(&content)?;

    let generator = convert_application(&app, file)?;

    fs::write(output_dir.join(file), serde_yaml::to_string(&generator)?)?;
    Ok(())
}

/// YAML manifests directly inside `dir`, sorted by file name
fn yaml_files(dir: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".yaml") {
            files.push(name);
        }
    }
    files.sort();
    Ok(files)
}

/// Convert every Application in `<collection_dir>/manifests` into `<collection_dir>/<output_dir>`.
///
/// Returns the converted file names, in the order listed in kustomization.yaml.
#[instrument(skip(collection_dir), fields(collection = %collection_dir.display()))]
pub fn convert_collection(collection_dir: &Path, output_dir: &str) -> Result<Vec<String>> {
    if output_dir.is_empty() {
        return Err(JanitorError::InvalidArgument(
            "output directory cannot be empty".to_string(),
        ));
    }

    let source_dir = collection_dir.join(SOURCE_DIR);
    let target_dir = collection_dir.join(output_dir);

    let files = yaml_files(&source_dir)?;
    fs::create_dir_all(&target_dir)?;

    let mut kustomization = Kustomization::default();
    for file in files {
        info!("{}", file);
        convert_file(&source_dir, &target_dir, &file)?;
        kustomization.generators.push(file);
    }

    fs::write(
        target_dir.join(KUSTOMIZATION_FILE),
        serde_yaml::to_string(&kustomization)?,
    )?;

    Ok(kustomization.generators)
}
