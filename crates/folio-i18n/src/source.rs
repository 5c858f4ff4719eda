//! Content sources
//!
//! A [`ContentSource`] returns the raw text of a content file such as
//! `about.json` or `echoes.json`. Parsing and caching happen above it.

use crate::error::ContentError;
use async_trait::async_trait;
use folio_common::{FolioError, FolioResult};
use folio_config::schema::ContentConfig;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{debug, instrument};
use url::Url;

/// Fetches content files by relative path.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait ContentSource {
    /// Raw text of the file at `path`.
    async fn fetch(&self, path: &str) -> Result<String, ContentError>;
}

/// Monotonically increasing cache-busting token.
///
/// Seeded from the clock so tokens also differ across page loads.
#[derive(Debug)]
pub struct CacheBuster {
    next: Cell<u64>,
}

impl CacheBuster {
    /// Starts counting at `seed`.
    pub const fn starting_at(seed: u64) -> Self {
        Self {
            next: Cell::new(seed),
        }
    }

    /// Seeds from the current time in milliseconds.
    pub fn from_clock() -> Self {
        Self::starting_at(now_millis())
    }

    /// Returns a fresh token.
    pub fn next_token(&self) -> u64 {
        let token = self.next.get();
        self.next.set(token.wrapping_add(1));
        token
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

/// HTTP content source.
#[derive(Debug)]
pub struct HttpContentSource {
    client: Client,
    base: Url,
    bypass_cache: bool,
    buster: CacheBuster,
}

impl HttpContentSource {
    /// Creates a source resolving paths against `base`.
    pub fn new(base: Url, bypass_cache: bool) -> Self {
        Self {
            client: Client::new(),
            base,
            bypass_cache,
            buster: CacheBuster::from_clock(),
        }
    }

    /// Creates a source from configuration, resolving a relative base against `page_url`.
    pub fn from_config(config: &ContentConfig, page_url: &str) -> FolioResult<Self> {
        let page = Url::parse(page_url)
            .map_err(|e| FolioError::config_with_source(format!("Invalid page URL: {page_url}"), e))?;

        // A base without a trailing slash would replace its last segment on join.
        let mut base_url = config.base_url.clone();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let base = page.join(&base_url).map_err(|e| {
            FolioError::config_with_source(format!("Invalid content base URL: {}", config.base_url), e)
        })?;

        Ok(Self::new(base, config.bypass_cache))
    }

    /// Replaces the token generator.
    #[must_use]
    pub fn with_cache_buster(mut self, buster: CacheBuster) -> Self {
        self.buster = buster;
        self
    }

    /// Base URL content paths are resolved against.
    pub const fn base(&self) -> &Url {
        &self.base
    }

    /// Absolute URL for `path`, carrying a fresh `v` token when bypassing caches.
    pub fn request_url(&self, path: &str) -> Result<Url, ContentError> {
        let mut url = self.base.join(path).map_err(|e| ContentError::InvalidPath {
            path: path.to_string(),
            message: e.to_string(),
        })?;

        if self.bypass_cache {
            url.query_pairs_mut()
                .append_pair("v", &self.buster.next_token().to_string());
        }

        Ok(url)
    }
}

#[async_trait(?Send)]
impl ContentSource for HttpContentSource {
    #[instrument(skip(self), fields(path = %path))]
    async fn fetch(&self, path: &str) -> Result<String, ContentError> {
        let url = self.request_url(path)?;
        debug!("Fetching content from: {}", url);

        let mut request = self.client.get(url);
        if self.bypass_cache {
            request = request.header(CACHE_CONTROL, "no-cache").header(PRAGMA, "no-cache");
        }

        let response = request.send().await.map_err(|e| ContentError::Fetch {
            path: path.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| ContentError::Fetch {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

/// Content source reading from a local directory.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileContentSource {
    root: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileContentSource {
    /// Reads files below `root`.
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl ContentSource for FileContentSource {
    async fn fetch(&self, path: &str) -> Result<String, ContentError> {
        let full_path = self.root.join(path);
        debug!("Reading content file: {}", full_path.display());

        tokio::fs::read_to_string(&full_path)
            .await
            .map_err(|source| ContentError::Io {
                path: path.to_string(),
                source,
            })
    }
}

#[derive(Debug, Default)]
struct MemoryFiles {
    files: HashMap<String, String>,
    requests: Vec<String>,
}

/// In-memory content source that records every request.
///
/// Clones share files and the request log. Missing paths answer with status 404.
#[derive(Debug, Clone, Default)]
pub struct MemoryContentSource {
    inner: Rc<RefCell<MemoryFiles>>,
}

impl MemoryContentSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a file.
    #[must_use]
    pub fn with_file(self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(path, body);
        self
    }

    /// Adds or replaces a file.
    pub fn insert(&self, path: impl Into<String>, body: impl Into<String>) {
        self.inner.borrow_mut().files.insert(path.into(), body.into());
    }

    /// Every requested path, in order.
    pub fn requests(&self) -> Vec<String> {
        self.inner.borrow().requests.clone()
    }

    /// Number of requests for `path`.
    pub fn request_count(&self, path: &str) -> usize {
        self.inner
            .borrow()
            .requests
            .iter()
            .filter(|requested| requested.as_str() == path)
            .count()
    }
}

#[async_trait(?Send)]
impl ContentSource for MemoryContentSource {
    async fn fetch(&self, path: &str) -> Result<String, ContentError> {
        let mut inner = self.inner.borrow_mut();
        inner.requests.push(path.to_string());
        inner.files.get(path).cloned().ok_or_else(|| ContentError::Status {
            path: path.to_string(),
            status: 404,
        })
    }
}
