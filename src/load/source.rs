use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

/// Where a dataset comes from. Implementations must be shareable across the loader threads.
pub trait DataSource: Sync {
    /// Human-readable location, used in logs and error messages.
    fn describe(&self) -> String;

    /// Fetch the whole resource. A non-success response is an error.
    fn fetch(&self) -> Result<Vec<u8>>;
}

/// A dataset on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

impl DataSource for FileSource {
    fn describe(&self) -> String { self.path.display().to_string() }

    fn fetch(&self) -> Result<Vec<u8>> {
        std::fs::read(&self.path).with_context(|| format!("Failed to read {}", self.path.display()))
    }
}

/// A dataset served over http(s).
#[cfg(feature = "download")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "download")]
impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("turnoutmap/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(std::time::Duration::from_secs(60))
            .build()?;
        Ok(Self { url: url.into(), client })
    }
}

#[cfg(feature = "download")]
impl DataSource for HttpSource {
    fn describe(&self) -> String { self.url.clone() }

    fn fetch(&self) -> Result<Vec<u8>> {
        let resp = self.client.get(&self.url)
            .send()
            .with_context(|| format!("GET {}", self.url))?
            .error_for_status()
            .with_context(|| format!("GET {} returned error status", self.url))?;

        let bytes = resp.bytes().with_context(|| format!("read body of {}", self.url))?;
        Ok(bytes.to_vec())
    }
}

/// Bytes already in memory, or a canned failure. Used when the host fetched the resource itself.
#[derive(Debug, Clone)]
pub struct StaticSource {
    label: String,
    outcome: std::result::Result<Vec<u8>, String>,
}

impl StaticSource {
    pub fn new(label: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self { label: label.into(), outcome: Ok(bytes.into()) }
    }

    pub fn failing(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self { label: label.into(), outcome: Err(message.into()) }
    }
}

impl DataSource for StaticSource {
    fn describe(&self) -> String { self.label.clone() }

    fn fetch(&self) -> Result<Vec<u8>> {
        self.outcome.clone().map_err(|message| anyhow!("{}: {message}", self.label))
    }
}

/// Pick a source for `location`: http(s) URLs are fetched over the network, anything else is a file path.
pub fn source_for(location: &str) -> Result<Box<dyn DataSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        #[cfg(feature = "download")]
        return Ok(Box::new(HttpSource::new(location)?));

        #[cfg(not(feature = "download"))]
        anyhow::bail!("Cannot fetch {location}: built without the \"download\" feature");
    }
    Ok(Box::new(FileSource::new(location)))
}
