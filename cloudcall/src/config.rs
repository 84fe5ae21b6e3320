use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub artifact_registry: Option<ImagesReport>,
    pub bigquery_transfer: Option<TransferReport>,
}

/// Lists container images under one repository.
#[derive(Deserialize, Clone, Debug)]
pub struct ImagesReport {
    /// Repository resource name, e.g.
    /// `projects/demo/locations/us/repositories/containers`.
    pub parent: String,
    #[serde(default)]
    pub client: cloudcall_artifact_registry::config::Config,
}

/// Lists transfer configurations and their latest runs under one project.
#[derive(Deserialize, Clone, Debug)]
pub struct TransferReport {
    /// Project resource name, e.g. `projects/demo/locations/us`.
    pub parent: String,
    #[serde(default)]
    pub client: cloudcall_bigquery_transfer::config::Config,
}
