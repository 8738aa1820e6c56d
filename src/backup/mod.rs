// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Backup of Argo CD and Flux custom resources to YAML files.
//!
//! Each collection is written to its own file. Objects served under several
//! API versions are emitted once, from the first (newest) version listed.

use crate::constants::backup::{ARGO_DIR, DOCUMENT_SEPARATOR, FLUX_DIR, VOLATILE_METADATA};
use crate::error::{JanitorError, Result};
use crate::kubernetes::list_objects;
use crate::schemas::{ResourceSchema, ARGO, FLUX};
use kube::{api::DynamicObject, Client, ResourceExt};
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// UIDs already written during one backup run
#[derive(Debug, Default)]
pub struct SeenUids(HashSet<String>);

impl SeenUids {
    /// Record a UID, returning false if it was already seen
    pub fn insert(&mut self, uid: &str) -> bool {
        self.0.insert(uid.to_string())
    }

    #[cfg(test)]
    fn contains(&self, uid: &str) -> bool {
        self.0.contains(uid)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Rendered backup of a single collection
#[derive(Debug, Default)]
pub struct KindBackup {
    pub document: String,
    pub count: usize,
    pub duplicates: usize,
}

#[derive(Debug, Default)]
pub struct BackupSummary {
    pub files: Vec<PathBuf>,
    pub objects: usize,
    pub duplicates: usize,
}

/// Remove server-managed metadata and the status subresource from a manifest
pub fn strip_volatile_fields(manifest: &mut Value) {
    let Some(obj) = manifest.as_object_mut() else {
        return;
    };
    if let Some(Value::Object(metadata)) = obj.get_mut("metadata") {
        for field in VOLATILE_METADATA {
            metadata.remove(field);
        }
    }
    obj.remove("status");
}

/// Render every not yet seen object of a collection into one multi-document YAML string
pub fn backup_kind(
    schema: &ResourceSchema,
    objects: Vec<DynamicObject>,
    seen: &mut SeenUids,
) -> Result<KindBackup> {
    let mut backup = KindBackup::default();

    for obj in objects {
        let Some(uid) = obj.uid() else {
            return Err(JanitorError::MissingUid {
                schema: schema.to_string(),
                name: obj.name_any(),
            });
        };

        if !seen.insert(&uid) {
            debug!("Skipping {} already backed up", uid);
            backup.duplicates += 1;
            continue;
        }

        let mut manifest = serde_json::to_value(&obj)?;
        strip_volatile_fields(&mut manifest);

        backup.document.push_str(&serde_yaml::to_string(&manifest)?);
        backup.document.push_str(DOCUMENT_SEPARATOR);
        backup.count += 1;
    }

    Ok(backup)
}

/// Back up the given collections into `dir`, sharing one seen-set across all of them
#[instrument(skip(client, dir, schemas), fields(dir = %dir.display()))]
pub async fn backup_resources(
    client: &Client,
    dir: &Path,
    schemas: &[ResourceSchema],
) -> Result<BackupSummary> {
    let mut seen = SeenUids::default();
    let mut summary = BackupSummary::default();

    for schema in schemas {
        let objects = list_objects(client, schema, None).await?;
        let backup = backup_kind(schema, objects, &mut seen)?;
        summary.duplicates += backup.duplicates;

        if backup.count == 0 {
            continue;
        }

        let path = dir.join(schema.backup_file_name());
        tokio::fs::write(&path, backup.document).await?;
        info!(
            "Backed up {} {}/{} {}",
            backup.count, schema.group, schema.version, schema.kind
        );

        summary.objects += backup.count;
        summary.files.push(path);
    }

    Ok(summary)
}

/// Back up Argo and Flux resources into `argo-backup/` and `flux-backup/` under `output_root`
pub async fn run_backup(client: &Client, output_root: &Path) -> Result<()> {
    let argo_dir = output_root.join(ARGO_DIR);
    let flux_dir = output_root.join(FLUX_DIR);
    tokio::fs::create_dir_all(&flux_dir).await?;
    tokio::fs::create_dir_all(&argo_dir).await?;

    info!("Backing up Argo resources...");
    backup_resources(client, &argo_dir, ARGO).await?;

    info!("Backing up Flux resources...");
    backup_resources(client, &flux_dir, FLUX).await?;

    Ok(())
}
