//! Blocking downloads from remote Maven repositories.

use modpath_api::{ArtifactCoordinate, DependencyResolutionError, RemoteRepository, ResolutionResult};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::path::Path;
use std::time::Duration;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .user_agent(concat!("modpath/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Downloads `relative` from `repository` into `dest`.
    ///
    /// Returns `Ok(false)` when the repository does not have the file.
    pub fn fetch(
        &self,
        coordinate: &ArtifactCoordinate,
        repository: &RemoteRepository,
        relative: &str,
        dest: &Path,
    ) -> ResolutionResult<bool> {
        let url = format!("{}/{}", repository.url.trim_end_matches('/'), relative);
        tracing::debug!("Downloading {} from {}", coordinate, url);

        let transport = |message: String| DependencyResolutionError::Transport {
            coordinate: coordinate.to_string(),
            repository: repository.id.clone(),
            message,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| transport(e.to_string()))?;
        match response.status() {
            StatusCode::NOT_FOUND => return Ok(false),
            status if !status.is_success() => {
                return Err(transport(format!("{} returned {}", url, status)));
            }
            _ => {}
        }
        let body = response.bytes().map_err(|e| transport(e.to_string()))?;

        let io = |source: std::io::Error| DependencyResolutionError::Io {
            coordinate: coordinate.to_string(),
            source,
        };
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent).map_err(io)?;
        }
        // Write next to the target and rename, so a partial download is never picked up
        let part = dest.with_extension("jar.part");
        std::fs::write(&part, &body).map_err(io)?;
        std::fs::rename(&part, dest).map_err(io)?;

        tracing::debug!("Stored {} to {}", coordinate, dest.display());
        Ok(true)
    }
}
