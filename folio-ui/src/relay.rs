//! `fetch`-backed [`FormRelay`] and the avatar lookup.

use folio_core::contact::{FormRelay, RelayError, Submission};
use folio_core::profile::{Avatar, profile_api_url};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

fn network(err: JsValue) -> RelayError {
    RelayError::Network(
        err.as_string()
            .unwrap_or_else(|| format!("{err:?}")),
    )
}

async fn send(request: &Request) -> Result<Response, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response = JsFuture::from(window.fetch_with_request(request)).await?;
    response.dyn_into::<Response>()
}

/// Posts JSON to a form relay over `fetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRelay {
    endpoint: String,
}

impl FetchRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    fn request(&self, body: &str) -> Result<Request, JsValue> {
        let headers = Headers::new()?;
        headers.set("Content-Type", "application/json")?;
        headers.set("Accept", "application/json")?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(body));
        Request::new_with_str_and_init(&self.endpoint, &init)
    }
}

impl FormRelay for FetchRelay {
    async fn post(&self, submission: &Submission) -> Result<u16, RelayError> {
        let body = submission.to_json()?;
        let request = self.request(&body).map_err(network)?;
        let response = send(&request).await.map_err(network)?;
        tracing::debug!(status = response.status(), endpoint = %self.endpoint, "relay answered");
        Ok(response.status())
    }
}

/// Fetch the public profile and pick the avatar. Never fails: every error
/// path ends in the placeholder.
pub async fn fetch_avatar(api_user: &str, display_name: &str) -> Avatar {
    let url = profile_api_url(api_user);
    let body = async {
        let request = Request::new_with_str(&url)?;
        let response = send(&request).await?;
        if !response.ok() {
            return Err(JsValue::from_str(&format!("HTTP {}", response.status())));
        }
        let text = JsFuture::from(response.text()?).await?;
        Ok::<_, JsValue>(text.as_string().unwrap_or_default())
    }
    .await;

    match body {
        Ok(body) => Avatar::from_response(&body, display_name),
        Err(err) => {
            tracing::warn!(?err, url = %url, "profile lookup failed, using placeholder");
            Avatar::placeholder(display_name)
        }
    }
}
