use gloo_net::http::Request;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::error::FetchError;
use crate::page::Page;
use crate::state::{FetchKey, PageAction};

pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Body served for either page. Other keys the backend sends are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PageContent {
    pub brand: String,
    pub content: String,
}

/// One GET, fully described.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRequest {
    pub page: Page,
    pub url: String,
    pub api_key: Option<String>,
}

impl ContentRequest {
    pub fn for_page(page: Page, config: &AppConfig) -> Self {
        Self {
            page,
            url: page.url(&config.api_base),
            api_key: config.api_key.clone(),
        }
    }

    /// Headers sent with the request, at most the API key.
    pub fn headers(&self) -> Vec<(&'static str, &str)> {
        self.api_key
            .as_deref()
            .map(|key| vec![(API_KEY_HEADER, key)])
            .unwrap_or_default()
    }
}

/// Where page content comes from. Swapped for a scripted source in tests.
#[allow(async_fn_in_trait)]
pub trait ContentClient {
    async fn fetch(&self, request: &ContentRequest) -> Result<PageContent, FetchError>;
}

/// Browser `fetch` through gloo-net.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HttpContentClient;

impl ContentClient for HttpContentClient {
    async fn fetch(&self, request: &ContentRequest) -> Result<PageContent, FetchError> {
        let mut builder = Request::get(&request.url);
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        // Status is not checked: any body that parses is used.
        if !response.ok() {
            log::debug!("{} answered HTTP {}", request.url, response.status());
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        decode_body(&body)
    }
}

pub fn decode_body(body: &str) -> Result<PageContent, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// Runs one fetch and turns the outcome into the action for `generation`.
/// Failures are logged here and never reach the view.
pub async fn load_page<C: ContentClient>(
    client: &C,
    request: &ContentRequest,
    generation: u64,
) -> PageAction {
    log::info!("Fetching {:?} page from {}", request.page, request.url);

    match client.fetch(request).await {
        Ok(content) => PageAction::Loaded {
            generation,
            content,
        },
        Err(error) => {
            log::error!("{} ({})", error, request.url);
            PageAction::Failed { generation, error }
        }
    }
}

/// The fetch an effect fires for `key`: request for that page, tagged with
/// that generation.
pub async fn fetch_for_key<C: ContentClient>(
    client: &C,
    config: &AppConfig,
    (page, generation): FetchKey,
) -> PageAction {
    let request = ContentRequest::for_page(page, config);
    load_page(client, &request, generation).await
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use super::*;

    /// Answers requests from a queue and records every URL it was asked for.
    /// Clones share the queue and the record.
    #[derive(Clone, Default)]
    pub struct ScriptedClient {
        pub responses: Rc<RefCell<VecDeque<Result<String, FetchError>>>>,
        pub requests: Rc<RefCell<Vec<ContentRequest>>>,
    }

    impl PartialEq for ScriptedClient {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.requests, &other.requests)
        }
    }

    impl ScriptedClient {
        pub fn with(responses: Vec<Result<&str, FetchError>>) -> Self {
            Self {
                responses: Rc::new(RefCell::new(
                    responses
                        .into_iter()
                        .map(|r| r.map(str::to_string))
                        .collect(),
                )),
                requests: Rc::default(),
            }
        }

        pub fn urls(&self) -> Vec<String> {
            self.requests.borrow().iter().map(|r| r.url.clone()).collect()
        }
    }

    impl ContentClient for ScriptedClient {
        async fn fetch(&self, request: &ContentRequest) -> Result<PageContent, FetchError> {
            self.requests.borrow_mut().push(request.clone());
            let next = self
                .responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::Request("no scripted response".into())));
            decode_body(&next?)
        }
    }
}
