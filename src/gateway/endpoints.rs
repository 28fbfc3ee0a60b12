//! REST routes of the asset backend and URL construction.

use crate::error::GatewayError;
use reqwest::Url;

/// Backend routes; `:name` segments are filled from route parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Maps,
    MapModels,
    MapModel,
    MapImage,
    Models,
    ModelTextures,
    File,
    Directories,
    DirectoriesInfo,
}

impl Endpoint {
    pub fn template(self) -> &'static str {
        match self {
            Endpoint::Maps => "/api/maps",
            Endpoint::MapModels => "/api/maps/:map/models",
            Endpoint::MapModel => "/api/maps/:map/models/:model",
            Endpoint::MapImage => "/api/maps/:map/preview.png",
            Endpoint::Models => "/api/models",
            Endpoint::ModelTextures => "/api/models/textures",
            Endpoint::File => "/api/file",
            Endpoint::Directories => "/api/directories",
            Endpoint::DirectoriesInfo => "/api/directories/os-info",
        }
    }

    /// Resolve this route against `base`, percent-encoding every parameter
    pub fn url(
        self,
        base: &Url,
        params: &[(&str, &str)],
        query: &[(&str, &str)],
    ) -> Result<Url, GatewayError> {
        let mut url = base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                GatewayError::Config(format!("Backend URL cannot carry a path: {}", base))
            })?;
            segments.pop_if_empty();
            for segment in self.template().split('/').filter(|s| !s.is_empty()) {
                match segment.strip_prefix(':') {
                    Some(key) => {
                        let value = params
                            .iter()
                            .find(|(name, _)| *name == key)
                            .map(|(_, value)| *value)
                            .ok_or_else(|| {
                                GatewayError::Config(format!(
                                    "Missing route parameter '{}' for {}",
                                    key,
                                    self.template()
                                ))
                            })?;
                        segments.push(value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter().copied());
        }
        Ok(url)
    }
}
