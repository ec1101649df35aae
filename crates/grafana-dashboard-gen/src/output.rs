// Numan Thabit 2025
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::{
    builder::DashboardBuilder,
    config::GeneratorConfig,
    error::{DashboardError, Result},
    model::Dashboard,
};

/// Render the dashboard as indented JSON, keys in declaration order.
pub fn serialize(dashboard: &Dashboard) -> Result<Vec<u8>> {
    let bytes = serde_json::to_vec_pretty(dashboard)?;
    debug!(bytes = bytes.len(), "serialized dashboard");
    Ok(bytes)
}

/// Replace `path` with `bytes`, creating parent directories as needed.
///
/// The bytes land in a sibling temp file which is renamed over `path` once
/// fully synced, so readers see either the old file or the complete new one.
pub fn write_atomic(bytes: &[u8], path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .map_err(|err| DashboardError::output_write("create directory", dir, err))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|err| DashboardError::output_write("create temp file in", dir, err))?;
    let write_err = |err| DashboardError::output_write("write", path, err);
    tmp.write_all(bytes).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    // Temp files start at 0600; provisioned dashboards must stay world-readable.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(write_err)?;
    }
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path)
        .map_err(|err| DashboardError::output_write("persist", path, err.error))?;
    Ok(())
}

/// Build, serialize and write the dashboard described by `config`.
pub fn generate(config: &GeneratorConfig) -> Result<PathBuf> {
    let dashboard = DashboardBuilder::new(&config.datasource).build_root();
    debug!(
        panels = dashboard.panels.len(),
        datasource_uid = %config.datasource.uid,
        "built dashboard"
    );
    let bytes = serialize(&dashboard)?;
    write_atomic(&bytes, &config.output_path)?;
    info!(path = %config.output_path.display(), "wrote grafana dashboard");
    Ok(config.output_path.clone())
}
