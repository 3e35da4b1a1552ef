//! Route catalogs: the set of routes a caller loads and queries against.

use crate::error::CatalogError;
use crate::models::{NodeId, Route, RouteNode};
use crate::validate::ValidationOptions;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// On-disk encodings a catalog can be read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Toml,
    Json,
}

impl CatalogFormat {
    pub fn detect(path: &Path) -> Result<Self, CatalogError> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yml") | Some("yaml") => Ok(CatalogFormat::Yaml),
            Some("toml") => Ok(CatalogFormat::Toml),
            Some("json") => Ok(CatalogFormat::Json),
            _ => Err(CatalogError::UnknownFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteCatalog {
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl RouteCatalog {
    pub fn new(routes: Vec<Route>) -> Self {
        let mut catalog = Self { routes };
        catalog.normalize();
        catalog
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let format = CatalogFormat::detect(path)?;
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse_with_path(&content, format, path.to_str())?;
        debug!(path = %path.display(), routes = catalog.routes.len(), "loaded route catalog");
        Ok(catalog)
    }

    pub fn parse(content: &str, format: CatalogFormat) -> Result<Self, CatalogError> {
        Self::parse_with_path(content, format, None)
    }

    fn parse_with_path(
        content: &str,
        format: CatalogFormat,
        path: Option<&str>,
    ) -> Result<Self, CatalogError> {
        let parsed: std::result::Result<Self, String> = match format {
            CatalogFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            CatalogFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            CatalogFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        };
        let mut catalog = parsed.map_err(|message| CatalogError::Parse {
            location: path.map(|p| format!(" in {}", p)).unwrap_or_default(),
            message,
        })?;
        catalog.normalize();
        Ok(catalog)
    }

    /// Puts every route's nodes in position order.
    pub fn normalize(&mut self) {
        for route in &mut self.routes {
            route.sort_nodes();
        }
    }

    /// Looks a route up by numeric id, then by case-insensitive name.
    pub fn route(&self, key: &str) -> Option<&Route> {
        let key = key.trim();
        if let Ok(id) = key.parse::<u64>() {
            if let Some(route) = self.routes.iter().find(|r| r.id == id) {
                return Some(route);
            }
        }
        self.routes
            .iter()
            .find(|r| r.name.trim().eq_ignore_ascii_case(key))
    }

    /// Finds a stop by id in any route.
    pub fn node(&self, id: NodeId) -> Option<(&Route, &RouteNode)> {
        self.routes
            .iter()
            .find_map(|route| route.node(id).map(|node| (route, node)))
    }

    /// Every stop of every route, in catalog order.
    pub fn all_nodes(&self) -> impl Iterator<Item = (&Route, &RouteNode)> {
        self.routes
            .iter()
            .flat_map(|route| route.nodes.iter().map(move |node| (route, node)))
    }

    /// Checks each route, unique route names and node ids unique across routes.
    pub fn validate(&self, options: &ValidationOptions) -> Result<(), CatalogError> {
        let mut names: HashMap<String, &str> = HashMap::new();
        let mut owners: HashMap<NodeId, &str> = HashMap::new();

        for route in &self.routes {
            if names
                .insert(route.name.trim().to_lowercase(), &route.name)
                .is_some()
            {
                return Err(CatalogError::DuplicateRouteName(route.name.clone()));
            }

            route
                .validate(options)
                .map_err(|source| CatalogError::InvalidRoute {
                    route: route.name.clone(),
                    source,
                })?;

            for node in &route.nodes {
                if let Some(first) = owners.insert(node.id, &route.name) {
                    return Err(CatalogError::SharedNodeId {
                        node: node.id,
                        first: first.to_string(),
                        second: route.name.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
