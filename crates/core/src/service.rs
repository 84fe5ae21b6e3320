const USER_AGENT: &str = concat!("cloudcall/", env!("CARGO_PKG_VERSION"));

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("An error resulting from a failed attempt to construct a URI")]
    InvalidUri(#[source] tonic::codegen::http::uri::InvalidUri),
    #[error("Error that originate from the client or server")]
    Transport(#[source] tonic::transport::Error),
}

/// A connected (or not yet connected) service endpoint.
///
/// The channel is TLS by default; Google API endpoints only speak https.
#[derive(Debug, Clone)]
pub struct Service {
    endpoint: Option<String>,
    pub channel: Option<tonic::transport::Channel>,
}

impl Service {
    pub async fn connect(mut self) -> Result<Self, Error> {
        if let Some(endpoint) = self.endpoint.take() {
            let tls_config = tonic::transport::ClientTlsConfig::new();
            let channel = tonic::transport::Channel::from_shared(endpoint)
                .map_err(Error::InvalidUri)?
                .user_agent(USER_AGENT)
                .map_err(Error::Transport)?
                .tls_config(tls_config)
                .map_err(Error::Transport)?
                .connect()
                .await
                .map_err(Error::Transport)?;
            self.channel = Some(channel);
        }
        Ok(self)
    }
}

#[derive(Default)]
pub struct Builder {
    endpoint: Option<String>,
}

impl Builder {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> Self {
        Builder {
            ..Default::default()
        }
    }

    pub fn with_endpoint(&mut self, endpoint: String) -> &mut Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn build(&mut self) -> Result<Service, Error> {
        Ok(Service {
            endpoint: self.endpoint.take(),
            channel: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_without_endpoint_is_noop() {
        let service = Builder::new().build().unwrap().connect().await.unwrap();
        assert!(service.channel.is_none());
    }

    #[tokio::test]
    async fn test_connect_rejects_invalid_uri() {
        let result = Builder::new()
            .with_endpoint("not a uri".to_string())
            .build()
            .unwrap()
            .connect()
            .await;
        assert!(matches!(result, Err(Error::InvalidUri(_))));
    }
}
