use crate::artifactregistry::v1beta2::{
    DockerImage, ListDockerImagesRequest, ListDockerImagesResponse,
};
use cloudcall_core::error;
use cloudcall_core::method::Method;
use cloudcall_core::options::{CallOptions, IntoCallRequest};
use cloudcall_core::paging::{Page, PageableRequest, Pager};
use cloudcall_core::stub::{unary, CallRpc, GrpcStub};
use std::time::Duration;

pub const SERVICE: &str = "google.devtools.artifactregistry.v1beta2.ArtifactRegistry";

pub const LIST_DOCKER_IMAGES: Method = Method::unary(SERVICE, "ListDockerImages");

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Service is missing")]
    ServiceMissing(),
    #[error("Service channel is missing")]
    ServiceChannelMissing(),
    #[error("There was an error configuring the client runtime.")]
    Runtime(#[source] error::Error),
}

impl Page for ListDockerImagesResponse {
    type Item = DockerImage;

    fn next_page_token(&self) -> &str {
        &self.next_page_token
    }

    fn into_items(self) -> Vec<DockerImage> {
        self.docker_images
    }
}

impl PageableRequest for ListDockerImagesRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

/// Typed entry points for the Artifact Registry image-listing API.
///
/// Holds only the stub and immutable defaults, so a clone can be shared
/// across tasks.
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

    /// Lists docker images under `parent` as a restartable pager over the
    /// first page.
    pub async fn list_docker_images(
        &self,
        request: impl IntoCallRequest<ListDockerImagesRequest>,
    ) -> Result<Pager<S, ListDockerImagesRequest, ListDockerImagesResponse>, error::Error> {
        let call = request.into_call_request();
        let mut message = call.message;
        if message.parent.is_empty() {
            return Err(error::Error::missing_field("parent"));
        }
        if message.page_size == 0 {
            message.page_size = self.page_size.unwrap_or(0);
        }
        let options = call
            .options
            .with_metadata("x-goog-request-params", format!("parent={}", message.parent))
            .merge_over(&self.defaults);

        let first: ListDockerImagesResponse = unary(
            &self.stub,
            LIST_DOCKER_IMAGES,
            message.clone(),
            options.clone(),
        )
        .await?;
        Ok(Pager::new(
            self.stub.clone(),
            LIST_DOCKER_IMAGES,
            message,
            options,
            first,
        ))
    }
}

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

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use cloudcall_core::options::CallRequest;
    use cloudcall_core::stub::{CallMetadata, Reply};
    use futures_util::StreamExt;
    use prost::Message;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingStub {
        script: Arc<Mutex<VecDeque<Bytes>>>,
        fallback: Option<Bytes>,
        calls: Arc<Mutex<Vec<(Method, Bytes, CallOptions)>>>,
    }

    impl RecordingStub {
        /// Always answers with the same canned response.
        fn repeating<P: Message>(response: &P) -> RecordingStub {
            RecordingStub {
                fallback: Some(Bytes::from(response.encode_to_vec())),
                ..Default::default()
            }
        }

        /// Answers with the canned responses in order.
        fn sequence<P: Message>(responses: &[P]) -> RecordingStub {
            let script = responses
                .iter()
                .map(|response| Bytes::from(response.encode_to_vec()))
                .collect();
            RecordingStub {
                script: Arc::new(Mutex::new(script)),
                ..Default::default()
            }
        }

        fn recorded(&self) -> Vec<(Method, Bytes, CallOptions)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl CallRpc for RecordingStub {
        fn call(
            &self,
            method: Method,
            request: Bytes,
            options: CallOptions,
        ) -> impl std::future::Future<Output = Result<Reply, cloudcall_core::error::Error>> + Send
        {
            let script = Arc::clone(&self.script);
            let fallback = self.fallback.clone();
            let calls = Arc::clone(&self.calls);
            async move {
                calls.lock().unwrap().push((method, request, options));
                let message = script
                    .lock()
                    .unwrap()
                    .pop_front()
                    .or(fallback)
                    .expect("no canned response left");
                Ok(Reply {
                    message,
                    metadata: CallMetadata::default(),
                })
            }
        }
    }

    fn image(name: &str) -> DockerImage {
        DockerImage {
            name: name.to_string(),
            uri: format!("us-docker.pkg.dev/{name}"),
            tags: vec!["latest".to_string()],
            image_size_bytes: 128,
            upload_time: Some(::prost_types::Timestamp {
                seconds: 1_700_000_000,
                nanos: 0,
            }),
            media_type: "application/vnd.docker.distribution.manifest.v2+json".to_string(),
        }
    }

    fn list_request() -> ListDockerImagesRequest {
        ListDockerImagesRequest {
            parent: "projects/demo/locations/us/repositories/repo".to_string(),
            page_size: 42,
            page_token: "tok".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_docker_images_invocation_styles() {
        let canned = ListDockerImagesResponse {
            docker_images: vec![image("projects/demo/dockerImages/img")],
            next_page_token: String::new(),
        };
        let stub = RecordingStub::repeating(&canned);
        let client = Client::with_stub(stub.clone());
        let request = list_request();
        let options = CallOptions::new().with_timeout(Duration::from_secs(5));

        // Every invocation style must produce the identical wire request and
        // hand back the canned response unmodified.
        let pager = client.list_docker_images(request.clone()).await.unwrap();
        assert_eq!(pager.response(), &canned);
        let pager = client
            .list_docker_images((request.clone(), CallOptions::new()))
            .await
            .unwrap();
        assert_eq!(pager.response(), &canned);
        let pager = client
            .list_docker_images((request.clone(), options.clone()))
            .await
            .unwrap();
        assert_eq!(pager.response(), &canned);
        let pager = client
            .list_docker_images(CallRequest::new(request.clone()))
            .await
            .unwrap();
        assert_eq!(pager.response(), &canned);
        let pager = client
            .list_docker_images(CallRequest::with_options(request.clone(), options))
            .await
            .unwrap();
        assert_eq!(pager.response(), &canned);

        let calls = stub.recorded();
        assert_eq!(calls.len(), 5);
        for (method, wire, options) in &calls {
            assert_eq!(*method, LIST_DOCKER_IMAGES);
            assert_eq!(wire, &calls[0].1);
            let sent = ListDockerImagesRequest::decode(wire.clone()).unwrap();
            assert_eq!(sent, request);
            assert!(options.metadata.iter().any(|(key, value)| {
                key == "x-goog-request-params"
                    && value == "parent=projects/demo/locations/us/repositories/repo"
            }));
        }
    }

    #[tokio::test]
    async fn test_list_docker_images_pagination() {
        let pages = [
            ListDockerImagesResponse {
                docker_images: vec![image("a")],
                next_page_token: "t1".to_string(),
            },
            ListDockerImagesResponse {
                docker_images: vec![image("b")],
                next_page_token: "t2".to_string(),
            },
            ListDockerImagesResponse {
                docker_images: vec![image("c")],
                next_page_token: String::new(),
            },
        ];
        let stub = RecordingStub::sequence(&pages);
        let client = Client::with_stub(stub.clone());

        let pager = client
            .list_docker_images(ListDockerImagesRequest {
                parent: "projects/demo/locations/us/repositories/repo".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(pager.response(), &pages[0]);

        let names: Vec<String> = pager
            .items()
            .map(|item| item.unwrap().name)
            .collect::<Vec<_>>()
            .await;
        assert_eq!(names, vec!["a", "b", "c"]);

        // First page plus exactly one follow-up per continuation token.
        let calls = stub.recorded();
        assert_eq!(calls.len(), 3);
        let follow_up = ListDockerImagesRequest::decode(calls[1].1.clone()).unwrap();
        assert_eq!(follow_up.page_token, "t1");
        let follow_up = ListDockerImagesRequest::decode(calls[2].1.clone()).unwrap();
        assert_eq!(follow_up.page_token, "t2");
    }

    #[tokio::test]
    async fn test_missing_parent_fails_before_the_wire() {
        let stub = RecordingStub::repeating(&ListDockerImagesResponse::default());
        let client = Client::with_stub(stub.clone());

        let result = client
            .list_docker_images(ListDockerImagesRequest::default())
            .await;
        assert!(matches!(
            result,
            Err(cloudcall_core::error::Error::InvalidArgument(_))
        ));
        assert!(stub.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_default_page_size_applied() {
        let stub = RecordingStub::repeating(&ListDockerImagesResponse::default());
        let client = Client::with_stub(stub.clone()).with_page_size(25);

        client
            .list_docker_images(ListDockerImagesRequest {
                parent: "projects/demo/locations/us/repositories/repo".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let sent = ListDockerImagesRequest::decode(stub.recorded()[0].1.clone()).unwrap();
        assert_eq!(sent.page_size, 25);

        // An explicit page size wins over the client default.
        client
            .list_docker_images(ListDockerImagesRequest {
                parent: "projects/demo/locations/us/repositories/repo".to_string(),
                page_size: 7,
                ..Default::default()
            })
            .await
            .unwrap();
        let sent = ListDockerImagesRequest::decode(stub.recorded()[1].1.clone()).unwrap();
        assert_eq!(sent.page_size, 7);
    }

    #[tokio::test]
    async fn test_per_call_options_override_defaults() {
        let stub = RecordingStub::repeating(&ListDockerImagesResponse::default());
        let client = Client::with_stub(stub.clone())
            .with_defaults(CallOptions::new().with_timeout(Duration::from_secs(30)));

        client
            .list_docker_images((
                list_request(),
                CallOptions::new().with_timeout(Duration::from_secs(2)),
            ))
            .await
            .unwrap();
        client.list_docker_images(list_request()).await.unwrap();

        let calls = stub.recorded();
        assert_eq!(calls[0].2.timeout, Some(Duration::from_secs(2)));
        assert_eq!(calls[1].2.timeout, Some(Duration::from_secs(30)));
    }
}
