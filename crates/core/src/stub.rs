use crate::codec::IdentityCodec;
use crate::error::Error;
use crate::method::Method;
use crate::options::CallOptions;
use crate::retry::RetryConfig;
use bytes::Bytes;
use tonic::metadata::{AsciiMetadataKey, AsciiMetadataValue};
use tracing::{event, Level};

/// Call metadata surfaced alongside the decoded payload.
#[derive(Debug, Clone, Default)]
pub struct CallMetadata {
    pub method: Option<Method>,
    pub headers: tonic::metadata::MetadataMap,
}

/// The raw outcome of one wire exchange.
#[derive(Debug, Clone)]
pub struct Reply {
    pub message: Bytes,
    pub metadata: CallMetadata,
}

/// The service-stub seam.
///
/// Everything above this trait is typed; everything below it is bytes. Tests
/// substitute a recording implementation with canned responses.
pub trait CallRpc: Send + Sync {
    fn call(
        &self,
        method: Method,
        request: Bytes,
        options: CallOptions,
    ) -> impl std::future::Future<Output = Result<Reply, Error>> + Send;
}

/// Encode `request`, issue the unary exchange, decode the declared response.
pub async fn unary<S, Req, Resp>(
    stub: &S,
    method: Method,
    request: Req,
    options: CallOptions,
) -> Result<Resp, Error>
where
    S: CallRpc,
    Req: prost::Message,
    Resp: prost::Message + Default,
{
    let payload = Bytes::from(request.encode_to_vec());
    let reply = stub.call(method, payload, options).await?;
    Resp::decode(reply.message).map_err(Error::Decode)
}

/// `CallRpc` over a shared tonic channel.
///
/// Applies bearer-token and per-call metadata, the call timeout, and the
/// retry policy from the merged options. The channel is cheap to clone, so
/// one stub instance may be shared across tasks.
#[derive(Debug, Clone)]
pub struct GrpcStub {
    inner: tonic::client::Grpc<tonic::transport::Channel>,
    bearer: Option<AsciiMetadataValue>,
}

impl GrpcStub {
    pub fn new(channel: tonic::transport::Channel) -> GrpcStub {
        GrpcStub {
            inner: tonic::client::Grpc::new(channel),
            bearer: None,
        }
    }

    /// Attach a pre-acquired access token sent as `authorization: Bearer`.
    pub fn with_bearer_token(mut self, token: &str) -> Result<GrpcStub, Error> {
        let value = format!("Bearer {token}")
            .parse()
            .map_err(Error::InvalidMetadataValue)?;
        self.bearer = Some(value);
        Ok(self)
    }

    async fn attempt(
        &self,
        method: Method,
        payload: Bytes,
        options: &CallOptions,
    ) -> Result<Reply, Error> {
        let mut grpc = self.inner.clone();
        grpc.ready().await.map_err(Error::Transport)?;

        let mut request = tonic::Request::new(payload);
        if let Some(timeout) = options.timeout {
            request.set_timeout(timeout);
        }
        if let Some(bearer) = &self.bearer {
            request.metadata_mut().insert("authorization", bearer.clone());
        }
        for (key, value) in &options.metadata {
            let key: AsciiMetadataKey = key
                .parse()
                .map_err(|_| Error::InvalidArgument(format!("invalid metadata key `{key}`")))?;
            let value: AsciiMetadataValue = value.parse().map_err(Error::InvalidMetadataValue)?;
            request.metadata_mut().insert(key, value);
        }

        let path = tonic::codegen::http::uri::PathAndQuery::from_maybe_shared(method.path())
            .map_err(|_| Error::InvalidArgument(format!("invalid rpc path `{}`", method.path())))?;

        let fut = grpc.unary(request, path, IdentityCodec);
        let response = match options.timeout {
            Some(limit) => tokio::time::timeout(limit, fut)
                .await
                .map_err(|_| Error::DeadlineExceeded(limit))?
                .map_err(Error::Rpc)?,
            None => fut.await.map_err(Error::Rpc)?,
        };

        let (headers, message, _extensions) = response.into_parts();
        Ok(Reply {
            message,
            metadata: CallMetadata {
                method: Some(method),
                headers,
            },
        })
    }
}

impl CallRpc for GrpcStub {
    fn call(
        &self,
        method: Method,
        request: Bytes,
        options: CallOptions,
    ) -> impl std::future::Future<Output = Result<Reply, Error>> + Send {
        async move {
            let mut backoff = options.retry.as_ref().map(|retry| retry.strategy());
            loop {
                match self.attempt(method, request.clone(), &options).await {
                    Ok(reply) => return Ok(reply),
                    Err(error) => {
                        let delay = match (&error, backoff.as_mut()) {
                            (Error::Rpc(status), Some(strategy))
                                if RetryConfig::is_retryable(status.code()) =>
                            {
                                strategy.next()
                            }
                            _ => None,
                        };
                        match delay {
                            Some(delay) => {
                                event!(
                                    Level::DEBUG,
                                    method = method.name,
                                    ?delay,
                                    "retrying failed call"
                                );
                                tokio::time::sleep(delay).await;
                            }
                            None => return Err(error),
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, PartialEq, ::prost::Message)]
    struct Echo {
        #[prost(string, tag = "1")]
        text: String,
    }

    #[derive(Clone, Default)]
    struct CannedStub {
        response: Bytes,
        calls: Arc<Mutex<Vec<(Method, Bytes, CallOptions)>>>,
    }

    impl CallRpc for CannedStub {
        fn call(
            &self,
            method: Method,
            request: Bytes,
            options: CallOptions,
        ) -> impl std::future::Future<Output = Result<Reply, Error>> + Send {
            let response = self.response.clone();
            let calls = Arc::clone(&self.calls);
            async move {
                calls.lock().unwrap().push((method, request, options));
                Ok(Reply {
                    message: response,
                    metadata: CallMetadata::default(),
                })
            }
        }
    }

    const ECHO: Method = Method::unary("acme.v1.EchoService", "Echo");

    #[tokio::test]
    async fn test_unary_round_trip() {
        let canned = Echo {
            text: "hello world".to_string(),
        };
        let stub = CannedStub {
            response: Bytes::from(prost::Message::encode_to_vec(&canned)),
            ..Default::default()
        };

        let request = Echo {
            text: "hello world".to_string(),
        };
        let response: Echo = unary(&stub, ECHO, request.clone(), CallOptions::new())
            .await
            .unwrap();
        assert_eq!(response, canned);

        let calls = stub.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, ECHO);
        let sent = Echo::decode(calls[0].1.clone()).unwrap();
        assert_eq!(sent, request);
    }

    #[tokio::test]
    async fn test_unary_decode_failure() {
        let stub = CannedStub {
            // Field 1 declared as a varint, which does not match Echo.
            response: Bytes::from_static(&[0x08, 0x01]),
            ..Default::default()
        };

        let result: Result<Echo, Error> = unary(
            &stub,
            ECHO,
            Echo {
                text: "x".to_string(),
            },
            CallOptions::new(),
        )
        .await;
        assert!(matches!(result, Err(Error::Decode(_))));
    }
}
