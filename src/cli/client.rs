use anyhow::{anyhow, Context};
use reqwest::{StatusCode, Url};
use serde_json::Value;

use crate::api::format::SearchResponse;

/// Thin HTTP client for a Catalog API server
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl AsRef<str>) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url.as_ref())
            .with_context(|| format!("invalid server URL: {}", base_url.as_ref()))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn search_url(&self, query: Option<&str>, page: i64, per_page: Option<i64>) -> anyhow::Result<Url> {
        let mut url = self.base_url.join("/products/search-by-subcategory-binary")?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(q) = query {
                pairs.append_pair("query", q);
            }
            pairs.append_pair("page", &page.to_string());
            if let Some(n) = per_page {
                pairs.append_pair("per_page", &n.to_string());
            }
        }
        Ok(url)
    }

    pub async fn search(&self, query: Option<&str>, page: i64, per_page: Option<i64>) -> anyhow::Result<SearchResponse> {
        let url = self.search_url(query, page, per_page)?;
        let res = self.http.get(url).send().await?;
        let status = res.status();
        let body: Value = res.json().await.context("server returned a non-JSON body")?;

        if !status.is_success() {
            let message = body["message"].as_str().unwrap_or("request failed");
            return Err(anyhow!("{} ({})", message, status));
        }

        Ok(serde_json::from_value(body)?)
    }

    /// Raw `/health` response; a 503 is a valid answer here, not an error
    pub async fn health(&self) -> anyhow::Result<(StatusCode, Value)> {
        let res = self.http.get(self.base_url.join("/health")?).send().await?;
        let status = res.status();
        Ok((status, res.json().await?))
    }

    pub async fn info(&self) -> anyhow::Result<Value> {
        let res = self.http.get(self.base_url.clone()).send().await?.error_for_status()?;
        Ok(res.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_search_url_with_encoded_query() {
        let client = ApiClient::new("http://localhost:3000").unwrap();
        let url = client.search_url(Some("t shirt&co"), 2, Some(10)).unwrap();
        assert_eq!(url.path(), "/products/search-by-subcategory-binary");
        assert_eq!(url.query(), Some("query=t+shirt%26co&page=2&per_page=10"));
    }

    #[test]
    fn omits_optional_parameters() {
        let client = ApiClient::new("http://localhost:3000/").unwrap();
        let url = client.search_url(None, 1, None).unwrap();
        assert_eq!(url.query(), Some("page=1"));
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(ApiClient::new("not a url").is_err());
    }
}
