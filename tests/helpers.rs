/*
 * Copyright (c) 2025 Amplifr Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use amplifr::v1::{AmplifrError, ApiRequest, Client, ClientConfig, QueryEncoding, Transport};
use futures::future::{Ready, ready};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub(crate) const ACCESS_TOKEN: &str = "t0k3n";
pub(crate) const PROJECT_ID: &str = "1337";

// Canned outcome of one request
pub(crate) enum Reply {
    Body(Value),
    // Stands in for a body the transport could not decode
    Malformed(&'static str),
}

// Replays canned replies and remembers every request it was handed
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    responses: Arc<Mutex<VecDeque<Reply>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub(crate) fn replying(responses: Vec<Value>) -> Self {
        Self::with_replies(responses.into_iter().map(Reply::Body).collect())
    }

    pub(crate) fn with_replies(replies: Vec<Reply>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(replies.into())),
            ..Default::default()
        }
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn only_request(&self) -> ApiRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl Transport for MockTransport {
    #[allow(refining_impl_trait)]
    fn send(&self, request: ApiRequest) -> Ready<Result<Value, AmplifrError>> {
        self.requests.lock().unwrap().push(request);
        let reply = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Reply::Body(json!({"ok": true, "result": {}})));
        ready(match reply {
            Reply::Body(body) => Ok(body),
            Reply::Malformed(raw) => serde_json::from_str::<Value>(raw).map_err(AmplifrError::from),
        })
    }
}

#[allow(dead_code)]
pub(crate) fn mocked_client(responses: Vec<Value>) -> (Client<MockTransport>, MockTransport) {
    mocked_client_with(QueryEncoding::Encoded, responses)
}

#[allow(dead_code)]
pub(crate) fn mocked_client_with(
    encoding: QueryEncoding,
    responses: Vec<Value>,
) -> (Client<MockTransport>, MockTransport) {
    let transport = MockTransport::replying(responses);
    let config = ClientConfig::new(ACCESS_TOKEN, PROJECT_ID).with_query_encoding(encoding);
    (Client::with_transport(config, transport.clone()), transport)
}

#[allow(dead_code)]
pub(crate) fn failing_client(raw_body: &'static str) -> (Client<MockTransport>, MockTransport) {
    let transport = MockTransport::with_replies(vec![Reply::Malformed(raw_body)]);
    let config = ClientConfig::new(ACCESS_TOKEN, PROJECT_ID);
    (Client::with_transport(config, transport.clone()), transport)
}

#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub(crate) fn live_client() -> anyhow::Result<Client> {
    let access_token = std::env::var("AMPLIFR_ACCESS_TOKEN")?;
    let project_id = std::env::var("AMPLIFR_PROJECT_ID")?;
    Ok(Client::new(&access_token, &project_id))
}
