use std::io::Read;
use std::time::Duration;

use flate2::read::GzDecoder;
use hyper::client::HttpConnector;
use hyper::header::{ACCEPT, ACCEPT_ENCODING, CONTENT_ENCODING, USER_AGENT};
use hyper::{body, Body, Client, Method, Request, StatusCode, Uri};
use hyper_tls::HttpsConnector;
use tracing::{debug, warn};

use crate::error::{CovidError, Result};

pub type HttpsClient = Client<HttpsConnector<HttpConnector>, Body>;

const AGENT: &str = concat!("dxy_covid/", env!("CARGO_PKG_VERSION"));

pub fn https_client() -> HttpsClient {
    Client::builder().build::<_, Body>(HttpsConnector::new())
}

/// GET `url` and return the body as text, inflating gzip responses.
pub async fn fetch_page(client: &HttpsClient, url: &str) -> Result<String> {
    let uri: Uri = url
        .parse()
        .map_err(|e| CovidError::Network(format!("invalid URL {url}: {e}")))?;

    debug!("GET {}", uri);

    let request = Request::builder()
        .uri(uri)
        .method(Method::GET)
        .header(USER_AGENT, AGENT)
        .header(ACCEPT, "text/html")
        .header(ACCEPT_ENCODING, "gzip")
        .body(Body::empty())?;

    let resp = client.request(request).await?;

    let status = resp.status();
    if status != StatusCode::OK {
        warn!("GET {} answered {}", url, status);
        return Err(CovidError::Network(format!("unexpected status {status} from {url}")));
    }

    let gzipped = resp
        .headers()
        .get(CONTENT_ENCODING)
        .map(|value| value.as_bytes().eq_ignore_ascii_case(b"gzip"))
        .unwrap_or(false);

    let bytes = body::to_bytes(resp.into_body()).await?;
    debug!("Received {} bytes (gzip: {})", bytes.len(), gzipped);

    let decoded = if gzipped {
        let mut gz = GzDecoder::new(&*bytes);
        let mut decoded_bytes: Vec<u8> = vec![];
        gz.read_to_end(&mut decoded_bytes)
            .map_err(|e| CovidError::Network(format!("corrupt gzip body from {url}: {e}")))?;
        decoded_bytes
    } else {
        bytes.to_vec()
    };

    Ok(String::from_utf8_lossy(&decoded).into_owned())
}

/// Check that `url` answers 200 within `timeout`.
pub async fn check_connectivity(client: &HttpsClient, url: &str, timeout: Duration) -> Result<()> {
    let uri: Uri = url
        .parse()
        .map_err(|e| CovidError::Network(format!("invalid URL {url}: {e}")))?;

    let request = Request::builder()
        .uri(uri)
        .method(Method::GET)
        .header(USER_AGENT, AGENT)
        .body(Body::empty())?;

    let resp = tokio::time::timeout(timeout, client.request(request))
        .await
        .map_err(|_| CovidError::Network(format!("{url} did not answer within {timeout:?}")))??;

    match resp.status() {
        StatusCode::OK => Ok(()),
        status => Err(CovidError::Network(format!("connectivity check got {status} from {url}"))),
    }
}
