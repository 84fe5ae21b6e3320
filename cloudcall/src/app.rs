use crate::config::{AppConfig, ImagesReport, TransferReport};
use cloudcall_artifact_registry::artifactregistry;
use cloudcall_bigquery_transfer::datatransfer;
use cloudcall_bigquery_transfer::datatransfer::v1::list_transfer_runs_request::RunAttempt;
use config::{Config, File};
use std::path::PathBuf;
use tokio_stream::StreamExt;
use tracing::{event, Level};

/// Errors that can occur while running a report.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("There was an error connecting the service channel.")]
    Service(#[source] cloudcall_core::service::Error),
    #[error("There was an error building the artifact registry client.")]
    ArtifactRegistry(#[source] cloudcall_artifact_registry::client::Error),
    #[error("There was an error building the data transfer client.")]
    BigQueryTransfer(#[source] cloudcall_bigquery_transfer::client::Error),
    #[error("There was an error with RPC call")]
    Call(#[source] cloudcall_core::error::Error),
}

/// Runs the listing reports named by the loaded configuration, one service
/// at a time, and logs what it finds.
pub struct App {
    pub config: AppConfig,
}

impl App {
    pub async fn run(self) -> Result<(), Error> {
        if let Some(report) = &self.config.artifact_registry {
            self.report_docker_images(report).await?;
        }
        if let Some(report) = &self.config.bigquery_transfer {
            self.report_transfers(report).await?;
        }
        Ok(())
    }

    async fn report_docker_images(&self, report: &ImagesReport) -> Result<(), Error> {
        let endpoint = report
            .client
            .endpoint
            .clone()
            .unwrap_or_else(|| artifactregistry::ENDPOINT.to_string());
        let service = cloudcall_core::service::Builder::new()
            .with_endpoint(endpoint)
            .build()
            .map_err(Error::Service)?
            .connect()
            .await
            .map_err(Error::Service)?;
        let client = cloudcall_artifact_registry::client::Builder::new()
            .with_service(service)
            .with_config(report.client.clone())
            .build()
            .map_err(Error::ArtifactRegistry)?;

        let pager = client
            .list_docker_images(artifactregistry::v1beta2::ListDockerImagesRequest {
                parent: report.parent.clone(),
                ..Default::default()
            })
            .await
            .map_err(Error::Call)?;

        let mut count = 0usize;
        let images = pager.items();
        tokio::pin!(images);
        while let Some(image) = images.next().await {
            let image = image.map_err(Error::Call)?;
            let uploaded = image
                .upload_time
                .as_ref()
                .and_then(|time| chrono::DateTime::from_timestamp(time.seconds, time.nanos as u32))
                .map(|time| time.to_rfc3339())
                .unwrap_or_default();
            event!(
                Level::INFO,
                name = %image.name,
                tags = image.tags.len(),
                size_bytes = image.image_size_bytes,
                %uploaded,
                "docker image"
            );
            count += 1;
        }
        event!(Level::INFO, parent = %report.parent, count, "listed docker images");
        Ok(())
    }

    async fn report_transfers(&self, report: &TransferReport) -> Result<(), Error> {
        let endpoint = report
            .client
            .endpoint
            .clone()
            .unwrap_or_else(|| datatransfer::ENDPOINT.to_string());
        let service = cloudcall_core::service::Builder::new()
            .with_endpoint(endpoint)
            .build()
            .map_err(Error::Service)?
            .connect()
            .await
            .map_err(Error::Service)?;
        let client = cloudcall_bigquery_transfer::client::Builder::new()
            .with_service(service)
            .with_config(report.client.clone())
            .build()
            .map_err(Error::BigQueryTransfer)?;

        let pager = client
            .list_transfer_configs(datatransfer::v1::ListTransferConfigsRequest {
                parent: report.parent.clone(),
                ..Default::default()
            })
            .await
            .map_err(Error::Call)?;

        let configs = pager.items();
        tokio::pin!(configs);
        while let Some(transfer_config) = configs.next().await {
            let transfer_config = transfer_config.map_err(Error::Call)?;
            event!(
                Level::INFO,
                name = %transfer_config.name,
                display_name = %transfer_config.display_name,
                data_source = %transfer_config.data_source_id,
                schedule = %transfer_config.schedule,
                state = transfer_config.state().as_str_name(),
                "transfer config"
            );

            let runs = client
                .list_transfer_runs(datatransfer::v1::ListTransferRunsRequest {
                    parent: transfer_config.name.clone(),
                    run_attempt: RunAttempt::Latest as i32,
                    ..Default::default()
                })
                .await
                .map_err(Error::Call)?;
            for run in runs.response().transfer_runs.iter() {
                event!(
                    Level::INFO,
                    name = %run.name,
                    state = run.state().as_str_name(),
                    "latest transfer run"
                );
            }
        }
        Ok(())
    }
}

/// Loads the application config from a file and builds the App.
pub struct Builder {
    config_path: PathBuf,
}

impl Builder {
    pub fn new(config_path: PathBuf) -> Builder {
        Builder { config_path }
    }

    pub fn build(&self) -> Result<App, Error> {
        let config = Config::builder()
            .add_source(File::from(self.config_path.clone()))
            .build()?
            .try_deserialize::<AppConfig>()?;
        Ok(App { config })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("report.toml");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_build_from_config_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
            [artifact_registry]
            parent = "projects/demo/locations/us/repositories/containers"

            [artifact_registry.client]
            page_size = 50

            [bigquery_transfer]
            parent = "projects/demo/locations/us"
            "#,
        );

        let app = Builder::new(path).build().unwrap();
        let images = app.config.artifact_registry.unwrap();
        assert_eq!(
            images.parent,
            "projects/demo/locations/us/repositories/containers"
        );
        assert_eq!(images.client.page_size, Some(50));
        assert!(app.config.bigquery_transfer.is_some());
    }

    #[test]
    fn test_build_missing_config_file() {
        let dir = TempDir::new().unwrap();
        let result = Builder::new(dir.path().join("absent.toml")).build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_run_with_empty_config() {
        let app = App {
            config: AppConfig {
                artifact_registry: None,
                bigquery_transfer: None,
            },
        };
        assert!(app.run().await.is_ok());
    }
}
