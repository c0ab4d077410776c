use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use anyhow::Context as _;
use reqwest::Client;

use crate::assets::catalog::{
    AssetCatalog, AssetKey, AssetLocation, DDRAGON_VERSIONS_URL, FALLBACK_DDRAGON_VERSION,
};
use crate::foundation::error::{LaneError, LaneResult};

/// Fetches raw asset bytes.
///
/// Failures are reported but never fatal to compositing: the banner drops the element.
pub trait AssetLoader: Send + Sync {
    fn load(&self, key: &AssetKey) -> impl Future<Output = LaneResult<Vec<u8>>> + Send;
}

/// Content type the image proxy reports for `url`.
pub fn content_type_for_url(url: &str) -> &'static str {
    if url.ends_with(".svg") {
        "image/svg+xml"
    } else {
        "image/png"
    }
}

/// Fetch-by-URL image proxy.
#[derive(Clone, Debug)]
pub struct HttpLoader {
    client: Client,
    timeout: Duration,
}

impl HttpLoader {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new(timeout: Duration) -> LaneResult<Self> {
        let client = Client::builder()
            .user_agent("Mozilla/5.0")
            .build()
            .map_err(|e| LaneError::asset_load(format!("build image http client: {e}")))?;
        Ok(Self { client, timeout })
    }

    pub async fn fetch(&self, url: &str) -> LaneResult<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| LaneError::asset_load(format!("GET {url}: {e}")))?;
        let response = response
            .error_for_status()
            .map_err(|e| LaneError::asset_load(format!("GET {url}: {e}")))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| LaneError::asset_load(format!("read body of {url}: {e}")))?;
        Ok(bytes.to_vec())
    }

    async fn ddragon_versions(&self) -> LaneResult<Vec<String>> {
        let bytes = self.fetch(DDRAGON_VERSIONS_URL).await?;
        let versions = serde_json::from_slice(&bytes).context("parse ddragon versions")?;
        Ok(versions)
    }

    /// Newest Data Dragon version, or [`FALLBACK_DDRAGON_VERSION`] when unavailable.
    pub async fn latest_ddragon_version(&self) -> String {
        match self.ddragon_versions().await {
            Ok(versions) if !versions.is_empty() => versions[0].clone(),
            Ok(_) => FALLBACK_DDRAGON_VERSION.to_string(),
            Err(err) => {
                tracing::warn!(%err, "ddragon version lookup failed; using fallback");
                FALLBACK_DDRAGON_VERSION.to_string()
            }
        }
    }
}

/// Reads the locally stored assets (role icons, emblems, fonts) under the catalog's directory.
#[derive(Clone, Debug)]
pub struct DirLoader {
    catalog: AssetCatalog,
}

impl DirLoader {
    pub fn new(catalog: AssetCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }
}

impl AssetLoader for DirLoader {
    async fn load(&self, key: &AssetKey) -> LaneResult<Vec<u8>> {
        match self.catalog.locate(key) {
            AssetLocation::Local(path) => tokio::fs::read(&path)
                .await
                .map_err(|e| LaneError::asset_load(format!("read '{}': {e}", path.display()))),
            AssetLocation::Remote(url) => Err(LaneError::asset_load(format!(
                "{key} is remote ({url}); not served from disk"
            ))),
        }
    }
}

/// Production loader: champion portraits over HTTP, everything else from the assets directory.
#[derive(Clone, Debug)]
pub struct BannerAssets {
    dir: DirLoader,
    http: HttpLoader,
}

impl BannerAssets {
    pub fn new(catalog: AssetCatalog, http: HttpLoader) -> Self {
        Self {
            dir: DirLoader::new(catalog),
            http,
        }
    }

    pub fn catalog(&self) -> &AssetCatalog {
        self.dir.catalog()
    }
}

impl AssetLoader for BannerAssets {
    async fn load(&self, key: &AssetKey) -> LaneResult<Vec<u8>> {
        match self.catalog().locate(key) {
            AssetLocation::Remote(url) => self.http.fetch(&url).await,
            AssetLocation::Local(_) => self.dir.load(key).await,
        }
    }
}

/// Loader answering from an in-memory table; unknown keys fail.
#[derive(Clone, Debug, Default)]
pub struct MemoryLoader {
    entries: HashMap<AssetKey, Vec<u8>>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: AssetKey, bytes: impl Into<Vec<u8>>) -> Self {
        self.entries.insert(key, bytes.into());
        self
    }

    pub fn insert(&mut self, key: AssetKey, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(key, bytes.into());
    }
}

impl AssetLoader for MemoryLoader {
    async fn load(&self, key: &AssetKey) -> LaneResult<Vec<u8>> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| LaneError::asset_load(format!("no bytes for {key}")))
    }
}
