use crate::datatransfer::v1::{
    CheckValidCredsRequest, CheckValidCredsResponse, CreateTransferConfigRequest, DataSource,
    DeleteTransferConfigRequest, DeleteTransferRunRequest, GetDataSourceRequest,
    GetTransferConfigRequest, GetTransferRunRequest, ListDataSourcesRequest,
    ListDataSourcesResponse, ListTransferConfigsRequest, ListTransferConfigsResponse,
    ListTransferLogsRequest, ListTransferLogsResponse, ListTransferRunsRequest,
    ListTransferRunsResponse, ScheduleTransferRunsRequest, ScheduleTransferRunsResponse,
    StartManualTransferRunsRequest, StartManualTransferRunsResponse, TransferConfig,
    TransferMessage, TransferRun, UpdateTransferConfigRequest,
};
use cloudcall_core::error;
use cloudcall_core::method::Method;
use cloudcall_core::options::{CallOptions, IntoCallRequest};
use cloudcall_core::paging::{Page, PageableRequest, Pager};
use cloudcall_core::stub::{unary, CallRpc, GrpcStub};
use std::time::Duration;

pub const SERVICE: &str = "google.cloud.bigquery.datatransfer.v1.DataTransferService";

pub const GET_DATA_SOURCE: Method = Method::unary(SERVICE, "GetDataSource");
pub const LIST_DATA_SOURCES: Method = Method::unary(SERVICE, "ListDataSources");
pub const CREATE_TRANSFER_CONFIG: Method = Method::unary(SERVICE, "CreateTransferConfig");
pub const UPDATE_TRANSFER_CONFIG: Method = Method::unary(SERVICE, "UpdateTransferConfig");
pub const DELETE_TRANSFER_CONFIG: Method = Method::unary(SERVICE, "DeleteTransferConfig");
pub const GET_TRANSFER_CONFIG: Method = Method::unary(SERVICE, "GetTransferConfig");
pub const LIST_TRANSFER_CONFIGS: Method = Method::unary(SERVICE, "ListTransferConfigs");
pub const SCHEDULE_TRANSFER_RUNS: Method = Method::unary(SERVICE, "ScheduleTransferRuns");
pub const START_MANUAL_TRANSFER_RUNS: Method = Method::unary(SERVICE, "StartManualTransferRuns");
pub const GET_TRANSFER_RUN: Method = Method::unary(SERVICE, "GetTransferRun");
pub const DELETE_TRANSFER_RUN: Method = Method::unary(SERVICE, "DeleteTransferRun");
pub const LIST_TRANSFER_RUNS: Method = Method::unary(SERVICE, "ListTransferRuns");
pub const LIST_TRANSFER_LOGS: Method = Method::unary(SERVICE, "ListTransferLogs");
pub const CHECK_VALID_CREDS: Method = Method::unary(SERVICE, "CheckValidCreds");

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Service is missing")]
    ServiceMissing(),
    #[error("Service channel is missing")]
    ServiceChannelMissing(),
    #[error("There was an error configuring the client runtime.")]
    Runtime(#[source] error::Error),
}

impl Page for ListDataSourcesResponse {
    type Item = DataSource;

    fn next_page_token(&self) -> &str {
        &self.next_page_token
    }

    fn into_items(self) -> Vec<DataSource> {
        self.data_sources
    }
}

impl Page for ListTransferConfigsResponse {
    type Item = TransferConfig;

    fn next_page_token(&self) -> &str {
        &self.next_page_token
    }

    fn into_items(self) -> Vec<TransferConfig> {
        self.transfer_configs
    }
}

impl Page for ListTransferRunsResponse {
    type Item = TransferRun;

    fn next_page_token(&self) -> &str {
        &self.next_page_token
    }

    fn into_items(self) -> Vec<TransferRun> {
        self.transfer_runs
    }
}

impl Page for ListTransferLogsResponse {
    type Item = TransferMessage;

    fn next_page_token(&self) -> &str {
        &self.next_page_token
    }

    fn into_items(self) -> Vec<TransferMessage> {
        self.transfer_messages
    }
}

impl PageableRequest for ListDataSourcesRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

impl PageableRequest for ListTransferConfigsRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

impl PageableRequest for ListTransferRunsRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

impl PageableRequest for ListTransferLogsRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

/// Typed entry points for the BigQuery Data Transfer API.
///
/// One method per RPC; list methods hand back a restartable pager. Holds
/// only the stub and immutable defaults, so a clone can be shared across
/// tasks.
#[derive(Debug, Clone)]
pub struct Client<S = GrpcStub> {
    stub: S,
    defaults: CallOptions,
    page_size: Option<i32>,
}

impl<S> Client<S>
where
    S: CallRpc + Clone,
{
    /// Wraps an existing stub; used directly by tests.
    pub fn with_stub(stub: S) -> Client<S> {
        Client {
            stub,
            defaults: CallOptions::default(),
            page_size: None,
        }
    }

    pub fn with_defaults(mut self, defaults: CallOptions) -> Client<S> {
        self.defaults = defaults;
        self
    }

    pub fn with_page_size(mut self, page_size: i32) -> Client<S> {
        self.page_size = Some(page_size);
        self
    }

    fn options_for(&self, options: CallOptions, routing: String) -> CallOptions {
        options
            .with_metadata("x-goog-request-params", routing)
            .merge_over(&self.defaults)
    }

    async fn list<R, P>(
        &self,
        method: Method,
        mut message: R,
        options: CallOptions,
        routing: String,
    ) -> Result<Pager<S, R, P>, error::Error>
    where
        R: PageableRequest + PageSized,
        P: Page,
    {
        if let Some(page_size) = self.page_size {
            message.apply_default_page_size(page_size);
        }
        let options = self.options_for(options, routing);
        let first: P = unary(&self.stub, method, message.clone(), options.clone()).await?;
        Ok(Pager::new(self.stub.clone(), method, message, options, first))
    }

    /// Retrieves a supported data source and returns its settings.
    pub async fn get_data_source(
        &self,
        request: impl IntoCallRequest<GetDataSourceRequest>,
    ) -> Result<DataSource, error::Error> {
        let call = request.into_call_request();
        let message = call.message;
        if message.name.is_empty() {
            return Err(error::Error::missing_field("name"));
        }
        let options = self.options_for(call.options, format!("name={}", message.name));
        unary(&self.stub, GET_DATA_SOURCE, message, options).await
    }

    /// Lists supported data sources and returns their settings.
    pub async fn list_data_sources(
        &self,
        request: impl IntoCallRequest<ListDataSourcesRequest>,
    ) -> Result<Pager<S, ListDataSourcesRequest, ListDataSourcesResponse>, error::Error> {
        let call = request.into_call_request();
        let message = call.message;
        if message.parent.is_empty() {
            return Err(error::Error::missing_field("parent"));
        }
        let routing = format!("parent={}", message.parent);
        self.list(LIST_DATA_SOURCES, message, call.options, routing)
            .await
    }

    /// Creates a new data transfer configuration.
    pub async fn create_transfer_config(
        &self,
        request: impl IntoCallRequest<CreateTransferConfigRequest>,
    ) -> Result<TransferConfig, error::Error> {
        let call = request.into_call_request();
        let message = call.message;
        if message.parent.is_empty() {
            return Err(error::Error::missing_field("parent"));
        }
        if message.transfer_config.is_none() {
            return Err(error::Error::missing_field("transfer_config"));
        }
        let options = self.options_for(call.options, format!("parent={}", message.parent));
        unary(&self.stub, CREATE_TRANSFER_CONFIG, message, options).await
    }

    /// Updates a data transfer configuration. All fields must be set, even if
    /// they are not updated.
    pub async fn update_transfer_config(
        &self,
        request: impl IntoCallRequest<UpdateTransferConfigRequest>,
    ) -> Result<TransferConfig, error::Error> {
        let call = request.into_call_request();
        let message = call.message;
        let Some(transfer_config) = message.transfer_config.as_ref() else {
            return Err(error::Error::missing_field("transfer_config"));
        };
        if message.update_mask.is_none() {
            return Err(error::Error::missing_field("update_mask"));
        }
        let routing = format!("transfer_config.name={}", transfer_config.name);
        let options = self.options_for(call.options, routing);
        unary(&self.stub, UPDATE_TRANSFER_CONFIG, message, options).await
    }

    /// Deletes a data transfer configuration, including any associated
    /// transfer runs and logs.
    pub async fn delete_transfer_config(
        &self,
        request: impl IntoCallRequest<DeleteTransferConfigRequest>,
    ) -> Result<(), error::Error> {
        let call = request.into_call_request();
        let message = call.message;
        if message.name.is_empty() {
            return Err(error::Error::missing_field("name"));
        }
        let options = self.options_for(call.options, format!("name={}", message.name));
        unary(&self.stub, DELETE_TRANSFER_CONFIG, message, options).await
    }

    /// Returns information about a data transfer config.
    pub async fn get_transfer_config(
        &self,
        request: impl IntoCallRequest<GetTransferConfigRequest>,
    ) -> Result<TransferConfig, error::Error> {
        let call = request.into_call_request();
        let message = call.message;
        if message.name.is_empty() {
            return Err(error::Error::missing_field("name"));
        }
        let options = self.options_for(call.options, format!("name={}", message.name));
        unary(&self.stub, GET_TRANSFER_CONFIG, message, options).await
    }

    /// Returns information about all transfer configs owned by a project in
    /// the specified location.
    pub async fn list_transfer_configs(
        &self,
        request: impl IntoCallRequest<ListTransferConfigsRequest>,
    ) -> Result<Pager<S, ListTransferConfigsRequest, ListTransferConfigsResponse>, error::Error>
    {
        let call = request.into_call_request();
        let message = call.message;
        if message.parent.is_empty() {
            return Err(error::Error::missing_field("parent"));
        }
        let routing = format!("parent={}", message.parent);
        self.list(LIST_TRANSFER_CONFIGS, message, call.options, routing)
            .await
    }

    /// Creates transfer runs for a time range \[start_time, end_time\].
    /// For each date - or whatever granularity the data source supports - in
    /// the range, one transfer run is created.
    pub async fn schedule_transfer_runs(
        &self,
        request: impl IntoCallRequest<ScheduleTransferRunsRequest>,
    ) -> Result<ScheduleTransferRunsResponse, error::Error> {
        let call = request.into_call_request();
        let message = call.message;
        if message.parent.is_empty() {
            return Err(error::Error::missing_field("parent"));
        }
        if message.start_time.is_none() {
            return Err(error::Error::missing_field("start_time"));
        }
        if message.end_time.is_none() {
            return Err(error::Error::missing_field("end_time"));
        }
        let options = self.options_for(call.options, format!("parent={}", message.parent));
        unary(&self.stub, SCHEDULE_TRANSFER_RUNS, message, options).await
    }

    /// Manually initiates transfer runs, for a time range or for a specific
    /// run time.
    pub async fn start_manual_transfer_runs(
        &self,
        request: impl IntoCallRequest<StartManualTransferRunsRequest>,
    ) -> Result<StartManualTransferRunsResponse, error::Error> {
        let call = request.into_call_request();
        let message = call.message;
        if message.parent.is_empty() {
            return Err(error::Error::missing_field("parent"));
        }
        let options = self.options_for(call.options, format!("parent={}", message.parent));
        unary(&self.stub, START_MANUAL_TRANSFER_RUNS, message, options).await
    }

    /// Returns information about the particular transfer run.
    pub async fn get_transfer_run(
        &self,
        request: impl IntoCallRequest<GetTransferRunRequest>,
    ) -> Result<TransferRun, error::Error> {
        let call = request.into_call_request();
        let message = call.message;
        if message.name.is_empty() {
            return Err(error::Error::missing_field("name"));
        }
        let options = self.options_for(call.options, format!("name={}", message.name));
        unary(&self.stub, GET_TRANSFER_RUN, message, options).await
    }

    /// Deletes the specified transfer run.
    pub async fn delete_transfer_run(
        &self,
        request: impl IntoCallRequest<DeleteTransferRunRequest>,
    ) -> Result<(), error::Error> {
        let call = request.into_call_request();
        let message = call.message;
        if message.name.is_empty() {
            return Err(error::Error::missing_field("name"));
        }
        let options = self.options_for(call.options, format!("name={}", message.name));
        unary(&self.stub, DELETE_TRANSFER_RUN, message, options).await
    }

    /// Returns information about running and completed transfer runs.
    pub async fn list_transfer_runs(
        &self,
        request: impl IntoCallRequest<ListTransferRunsRequest>,
    ) -> Result<Pager<S, ListTransferRunsRequest, ListTransferRunsResponse>, error::Error> {
        let call = request.into_call_request();
        let message = call.message;
        if message.parent.is_empty() {
            return Err(error::Error::missing_field("parent"));
        }
        let routing = format!("parent={}", message.parent);
        self.list(LIST_TRANSFER_RUNS, message, call.options, routing)
            .await
    }

    /// Returns log messages for the transfer run.
    pub async fn list_transfer_logs(
        &self,
        request: impl IntoCallRequest<ListTransferLogsRequest>,
    ) -> Result<Pager<S, ListTransferLogsRequest, ListTransferLogsResponse>, error::Error> {
        let call = request.into_call_request();
        let message = call.message;
        if message.parent.is_empty() {
            return Err(error::Error::missing_field("parent"));
        }
        let routing = format!("parent={}", message.parent);
        self.list(LIST_TRANSFER_LOGS, message, call.options, routing)
            .await
    }

    /// Returns true if valid credentials exist for the given data source and
    /// requesting user.
    pub async fn check_valid_creds(
        &self,
        request: impl IntoCallRequest<CheckValidCredsRequest>,
    ) -> Result<CheckValidCredsResponse, error::Error> {
        let call = request.into_call_request();
        let message = call.message;
        if message.name.is_empty() {
            return Err(error::Error::missing_field("name"));
        }
        let options = self.options_for(call.options, format!("name={}", message.name));
        unary(&self.stub, CHECK_VALID_CREDS, message, options).await
    }
}

/// List requests that honor a client-level default page size.
trait PageSized {
    fn apply_default_page_size(&mut self, page_size: i32);
}

macro_rules! page_sized {
    ($($request:ty),* $(,)?) => {
        $(impl PageSized for $request {
            fn apply_default_page_size(&mut self, page_size: i32) {
                if self.page_size == 0 {
                    self.page_size = page_size;
                }
            }
        })*
    };
}

page_sized!(
    ListDataSourcesRequest,
    ListTransferConfigsRequest,
    ListTransferRunsRequest,
    ListTransferLogsRequest,
);

/// Used to configure and connect a Client.
#[derive(Default)]
pub struct Builder {
    service: Option<cloudcall_core::service::Service>,
    config: Option<crate::config::Config>,
}

impl Builder {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> Builder {
        Builder {
            ..Default::default()
        }
    }

    /// Pass the connected service endpoint.
    pub fn with_service(&mut self, service: cloudcall_core::service::Service) -> &mut Builder {
        self.service = Some(service);
        self
    }

    pub fn with_config(&mut self, config: crate::config::Config) -> &mut Builder {
        self.config = Some(config);
        self
    }

    /// Generates a new Client over the service channel.
    pub fn build(&mut self) -> Result<Client<GrpcStub>, Error> {
        let config = self.config.take().unwrap_or_default();
        let service = self.service.take().ok_or_else(Error::ServiceMissing)?;
        let channel = service.channel.ok_or_else(Error::ServiceChannelMissing)?;

        let mut stub = GrpcStub::new(channel);
        if let Some(token) = &config.access_token {
            stub = stub.with_bearer_token(token).map_err(Error::Runtime)?;
        }

        let mut defaults = CallOptions::default();
        if let Some(timeout_ms) = config.timeout_ms {
            defaults = defaults.with_timeout(Duration::from_millis(timeout_ms));
        }
        if let Some(retry) = config.retry {
            defaults = defaults.with_retry(retry);
        }

        Ok(Client {
            stub,
            defaults,
            page_size: config.page_size,
        })
    }
}
