//! In-memory transport for unit tests.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;
use std::time::Duration;

use crate::error::TransportError;
use crate::transport::{Params, Transport};

enum Reply {
    Json(Value),
    Fail,
}

struct Route {
    url: Option<String>,
    params: Vec<(String, String)>,
    reply: Reply,
    delay: Option<Duration>,
}

impl Route {
    fn matches(&self, url: &str, params: &Params) -> bool {
        self.url.as_deref().is_none_or(|u| u == url)
            && self
                .params
                .iter()
                .all(|(k, v)| params.get(k).is_some_and(|p| p == v))
    }
}

/// Transport answering from a fixed route table.
///
/// Routes are checked in insertion order; unmatched requests fail as if
/// the host returned 404.
#[derive(Default)]
pub(crate) struct MockTransport {
    routes: Vec<Route>,
    calls: Mutex<Vec<(String, Params)>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answers any request to `url`.
    pub(crate) fn respond(mut self, url: &str, body: Value) -> Self {
        self.routes.push(Route {
            url: Some(url.to_string()),
            params: Vec::new(),
            reply: Reply::Json(body),
            delay: None,
        });
        self
    }

    /// Answers requests whose params include every pair in `params`.
    pub(crate) fn respond_to(mut self, params: &[(&str, &str)], body: Value) -> Self {
        self.routes.push(Route {
            url: None,
            params: own(params),
            reply: Reply::Json(body),
            delay: None,
        });
        self
    }

    /// Like [`MockTransport::respond_to`], but answers after `delay`.
    pub(crate) fn respond_later(
        mut self,
        params: &[(&str, &str)],
        body: Value,
        delay: Duration,
    ) -> Self {
        self.routes.push(Route {
            url: None,
            params: own(params),
            reply: Reply::Json(body),
            delay: Some(delay),
        });
        self
    }

    /// Fails requests whose params include every pair in `params`.
    pub(crate) fn fail_on(mut self, params: &[(&str, &str)]) -> Self {
        self.routes.push(Route {
            url: None,
            params: own(params),
            reply: Reply::Fail,
            delay: None,
        });
        self
    }

    /// Returns every request made so far.
    pub(crate) fn calls(&self) -> Vec<(String, Params)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str, params: &Params) -> Result<Value, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), params.clone()));

        let Some(route) = self.routes.iter().find(|r| r.matches(url, params)) else {
            return Err(TransportError::Status {
                status: 404,
                url: url.to_string(),
            });
        };

        if let Some(delay) = route.delay {
            tokio::time::sleep(delay).await;
        }

        match &route.reply {
            Reply::Json(body) => Ok(body.clone()),
            Reply::Fail => Err(TransportError::Status {
                status: 500,
                url: url.to_string(),
            }),
        }
    }
}

fn own(params: &[(&str, &str)]) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}
