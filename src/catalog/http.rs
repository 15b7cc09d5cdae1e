//! PokeAPI catalog client.
//!
//! [`HttpCatalog`] implements [`CatalogSource`] over plain HTTP GET requests
//! against the PokeAPI v2 endpoints:
//!
//! - `GET {base}/pokemon?limit=&offset=`: paginated listing
//! - `GET {base}/type/{category}`: every member of one type, paged client-side
//! - `GET {base}/pokemon/{key}`: single record lookup
//! - `GET {base}/type?limit=100`: category names

use crate::catalog::backend::CatalogSource;
use crate::catalog::models::{PageRecord, PokemonRecord, TypeRecord};
use crate::domain::{Batch, ExplorerError, Item, Result};
use crate::Config;
use futures_util::future::BoxFuture;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Upper bound on category names requested from the type listing.
const CATEGORY_LIMIT: usize = 100;

/// HTTP implementation of [`CatalogSource`].
///
/// Cheap to clone; every request future owns its own handle to the shared
/// connection pool.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base: Url,
}

impl HttpCatalog {
    /// Builds a client for the configured API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Config`] if `api_url` is not an absolute
    /// http(s) URL or the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let base = Url::parse(&config.api_url)
            .map_err(|e| ExplorerError::Config(format!("invalid api_url {:?}: {e}", config.api_url)))?;
        if base.cannot_be_a_base() {
            return Err(ExplorerError::Config(format!("api_url {:?} cannot be used as a base", config.api_url)));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("pokedex-explorer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ExplorerError::Config(format!("building http client: {e}")))?;

        tracing::debug!(base = %base, "catalog client ready");
        Ok(Self { client, base })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// Catalog names and ids are lowercase ASCII letters, digits and hyphens.
///
/// Anything else cannot name an entry, and segments like `..` would be
/// normalized away by the URL path and hit a different endpoint.
fn is_catalog_name(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Issues one GET and decodes the JSON body.
///
/// A 404 maps to `NotFound(missing)`; any other non-success status, transport
/// error or decode error maps to `Unreachable`.
async fn get_json<T: DeserializeOwned>(client: Client, url: Url, missing: String) -> Result<T> {
    tracing::debug!(url = %url, "catalog request");

    let response = client.get(url.clone()).send().await?;
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Err(ExplorerError::NotFound(missing));
    }
    if !status.is_success() {
        return Err(ExplorerError::Unreachable(format!("{url} returned {status}")));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ExplorerError::Unreachable(format!("decoding {url}: {e}")))
}

impl CatalogSource for HttpCatalog {
    fn fetch_page(&self, offset: usize, limit: usize, category: Option<&str>) -> BoxFuture<'static, Result<Batch>> {
        let client = self.client.clone();

        match category {
            Some(category) if !is_catalog_name(category) => {
                let missing = category.to_string();
                Box::pin(async move { Err::<Batch, _>(ExplorerError::NotFound(missing)) })
            }
            Some(category) => {
                let url = self.endpoint(&["type", category]);
                let missing = category.to_string();
                Box::pin(async move {
                    let record: TypeRecord = get_json(client, url, missing).await?;
                    Ok(record.into_batch(offset, limit))
                })
            }
            None => {
                let mut url = self.endpoint(&["pokemon"]);
                url.query_pairs_mut()
                    .append_pair("limit", &limit.to_string())
                    .append_pair("offset", &offset.to_string());
                Box::pin(async move {
                    let record: PageRecord = get_json(client, url, "pokemon".to_string()).await?;
                    Ok(record.into_batch())
                })
            }
        }
    }

    fn fetch_by_key(&self, key: &str) -> BoxFuture<'static, Result<Item>> {
        let key = key.trim().to_lowercase();
        if !is_catalog_name(&key) {
            tracing::debug!(key = %key, "not a catalog name, skipping request");
            return Box::pin(async move { Err::<Item, _>(ExplorerError::NotFound(key)) });
        }

        let client = self.client.clone();
        let url = self.endpoint(&["pokemon", &key]);

        Box::pin(async move {
            let record: PokemonRecord = get_json(client, url, key).await?;
            Ok(record.into_item())
        })
    }

    fn fetch_categories(&self) -> BoxFuture<'static, Result<Vec<String>>> {
        let client = self.client.clone();
        let mut url = self.endpoint(&["type"]);
        url.query_pairs_mut().append_pair("limit", &CATEGORY_LIMIT.to_string());

        Box::pin(async move {
            let record: PageRecord = get_json(client, url, "type".to_string()).await?;
            Ok(record.into_names())
        })
    }
}
