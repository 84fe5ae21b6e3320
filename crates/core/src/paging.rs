use crate::error::Error;
use crate::method::Method;
use crate::options::CallOptions;
use crate::stub::{unary, CallRpc};
use futures_util::stream::{self, Stream, TryStreamExt};

/// A single page of a list response.
pub trait Page: prost::Message + Default {
    type Item;

    /// Continuation token; empty means no further pages.
    fn next_page_token(&self) -> &str;

    fn into_items(self) -> Vec<Self::Item>;
}

/// A list request that can carry a continuation token.
pub trait PageableRequest: prost::Message + Clone {
    fn set_page_token(&mut self, token: String);
}

/// Lazy, restartable sequence over a paginated list RPC.
///
/// Wraps the first response together with the originating request and
/// options; follow-up pages are fetched on demand by reissuing the request
/// with the continuation token substituted. The original request is never
/// mutated, so the pager can be consumed and rebuilt from the same inputs.
pub struct Pager<S, R, P> {
    stub: S,
    method: Method,
    request: R,
    options: CallOptions,
    first: P,
}

enum Step<P> {
    Yield(P),
    Fetch(String),
    Done,
}

impl<S, R, P> Pager<S, R, P>
where
    S: CallRpc,
    R: PageableRequest,
    P: Page,
{
    pub fn new(stub: S, method: Method, request: R, options: CallOptions, first: P) -> Self {
        Pager {
            stub,
            method,
            request,
            options,
            first,
        }
    }

    /// The response the wrapper was built from, unmodified.
    pub fn response(&self) -> &P {
        &self.first
    }

    pub fn into_response(self) -> P {
        self.first
    }

    /// Stream of pages, starting with the wrapped first response.
    ///
    /// Issues exactly one follow-up call per page until a page with an empty
    /// token is received; nothing is fetched until the stream is polled past
    /// the current page.
    pub fn pages(self) -> impl Stream<Item = Result<P, Error>> {
        let Pager {
            stub,
            method,
            request,
            options,
            first,
        } = self;

        stream::try_unfold(
            (stub, request, options, Step::Yield(first)),
            move |(stub, request, options, step)| async move {
                let page = match step {
                    Step::Done => return Ok(None),
                    Step::Yield(page) => page,
                    Step::Fetch(token) => {
                        let mut follow_up = request.clone();
                        follow_up.set_page_token(token);
                        unary(&stub, method, follow_up, options.clone()).await?
                    }
                };
                let next = match page.next_page_token() {
                    "" => Step::Done,
                    token => Step::Fetch(token.to_string()),
                };
                Ok(Some((page, (stub, request, options, next))))
            },
        )
    }

    /// Stream of individual items across all pages.
    pub fn items(self) -> impl Stream<Item = Result<P::Item, Error>> {
        self.pages()
            .map_ok(|page| stream::iter(page.into_items().into_iter().map(Ok::<_, Error>)))
            .try_flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub::{CallMetadata, Reply};
    use bytes::Bytes;
    use futures_util::StreamExt;
    use prost::Message;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, PartialEq, ::prost::Message)]
    struct ListWidgetsRequest {
        #[prost(string, tag = "1")]
        parent: String,
        #[prost(string, tag = "2")]
        page_token: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    struct ListWidgetsResponse {
        #[prost(string, repeated, tag = "1")]
        widgets: Vec<String>,
        #[prost(string, tag = "2")]
        next_page_token: String,
    }

    impl Page for ListWidgetsResponse {
        type Item = String;

        fn next_page_token(&self) -> &str {
            &self.next_page_token
        }

        fn into_items(self) -> Vec<String> {
            self.widgets
        }
    }

    impl PageableRequest for ListWidgetsRequest {
        fn set_page_token(&mut self, token: String) {
            self.page_token = token;
        }
    }

    #[derive(Clone, Default)]
    struct ScriptedStub {
        script: Arc<Mutex<VecDeque<Bytes>>>,
        calls: Arc<Mutex<Vec<Bytes>>>,
    }

    impl ScriptedStub {
        fn new(pages: &[ListWidgetsResponse]) -> ScriptedStub {
            let script = pages
                .iter()
                .map(|page| Bytes::from(page.encode_to_vec()))
                .collect();
            ScriptedStub {
                script: Arc::new(Mutex::new(script)),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl CallRpc for ScriptedStub {
        fn call(
            &self,
            _method: Method,
            request: Bytes,
            _options: CallOptions,
        ) -> impl std::future::Future<Output = Result<Reply, Error>> + Send {
            let script = Arc::clone(&self.script);
            let calls = Arc::clone(&self.calls);
            async move {
                calls.lock().unwrap().push(request);
                let message = script
                    .lock()
                    .unwrap()
                    .pop_front()
                    .expect("no canned page left");
                Ok(Reply {
                    message,
                    metadata: CallMetadata::default(),
                })
            }
        }
    }

    const LIST_WIDGETS: Method = Method::unary("acme.v1.WidgetService", "ListWidgets");

    fn page(widgets: &[&str], token: &str) -> ListWidgetsResponse {
        ListWidgetsResponse {
            widgets: widgets.iter().map(|w| w.to_string()).collect(),
            next_page_token: token.to_string(),
        }
    }

    fn pager(
        stub: &ScriptedStub,
        first: ListWidgetsResponse,
    ) -> Pager<ScriptedStub, ListWidgetsRequest, ListWidgetsResponse> {
        let request = ListWidgetsRequest {
            parent: "shelves/1".to_string(),
            page_token: String::new(),
        };
        Pager::new(
            stub.clone(),
            LIST_WIDGETS,
            request,
            CallOptions::new(),
            first,
        )
    }

    #[tokio::test]
    async fn test_items_walk_all_pages() {
        let stub = ScriptedStub::new(&[page(&["b"], "t2"), page(&["c"], "")]);
        let pager = pager(&stub, page(&["a"], "t1"));

        let items: Vec<String> = pager
            .items()
            .map(|item| item.unwrap())
            .collect::<Vec<_>>()
            .await;
        assert_eq!(items, vec!["a", "b", "c"]);

        // One follow-up call per continuation token, each carrying it.
        let calls = stub.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        let follow_up = ListWidgetsRequest::decode(calls[0].clone()).unwrap();
        assert_eq!(follow_up.parent, "shelves/1");
        assert_eq!(follow_up.page_token, "t1");
        let follow_up = ListWidgetsRequest::decode(calls[1].clone()).unwrap();
        assert_eq!(follow_up.page_token, "t2");
    }

    #[tokio::test]
    async fn test_single_page_issues_no_calls() {
        let stub = ScriptedStub::new(&[]);
        let pager = pager(&stub, page(&["only"], ""));

        assert_eq!(pager.response(), &page(&["only"], ""));
        let pages: Vec<_> = pager.pages().collect::<Vec<_>>().await;
        assert_eq!(pages.len(), 1);
        assert!(stub.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_pages_are_fetched_lazily() {
        let stub = ScriptedStub::new(&[page(&["b"], "")]);
        let pager = pager(&stub, page(&["a"], "t1"));

        let stream = pager.pages();
        futures_util::pin_mut!(stream);
        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(first.widgets, vec!["a"]);
        // The follow-up only goes out once the stream is polled again.
        assert!(stub.calls.lock().unwrap().is_empty());

        let second = stream.next().await.unwrap().unwrap();
        assert_eq!(second.widgets, vec!["b"]);
        assert_eq!(stub.calls.lock().unwrap().len(), 1);
    }
}
