//! Firestore REST client for the `projects` collection.
//!
//! Firestore wraps every field in a typed value (`{"stringValue": "..."}`,
//! `{"arrayValue": {"values": [...]}}`). [`decode_documents`] flattens those
//! into plain JSON and deserializes [`Project`] from the result, with the
//! document id taken from the last segment of the document name.

use reqwest::Url;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::{Project, ProjectSource};
use crate::config::SiteConfig;
use crate::error::{PortfolioError, PortfolioResult};

const COLLECTION: &str = "projects";
const PAGE_SIZE: &str = "100";

/// Upper bound on pages followed in one fetch.
const MAX_PAGES: usize = 50;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    #[serde(default)]
    documents: Vec<Document>,
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Document {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

/// Project source backed by the Firestore REST API.
#[derive(Clone, Debug)]
pub struct FirestoreSource {
    http: reqwest::Client,
    base_url: String,
    project_id: String,
}

impl FirestoreSource {
    pub fn new(config: &SiteConfig) -> PortfolioResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.store_url.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
        })
    }

    /// List endpoint of the projects collection.
    pub fn collection_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents/{}",
            self.base_url, self.project_id, COLLECTION
        )
    }

    async fn fetch_page(&self, page_token: Option<&str>) -> PortfolioResult<ListResponse> {
        let mut url = Url::parse(&self.collection_url())
            .map_err(|e| PortfolioError::Config(format!("invalid store URL: {}", e)))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("pageSize", PAGE_SIZE);
            if let Some(token) = page_token {
                query.append_pair("pageToken", token);
            }
        }

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PortfolioError::RemoteStatus {
                status: status.as_u16(),
                body,
            });
        }

        let raw = resp.bytes().await?;
        Ok(serde_json::from_slice(&raw)?)
    }
}

impl ProjectSource for FirestoreSource {
    async fn fetch_projects(&self) -> PortfolioResult<Vec<Project>> {
        let mut projects = Vec::new();
        let mut token: Option<String> = None;

        for page in 0..MAX_PAGES {
            let resp = self.fetch_page(token.as_deref()).await?;
            tracing::debug!(page, documents = resp.documents.len(), "Fetched project page");
            projects.extend(decode_list(resp.documents));

            match resp.next_page_token {
                Some(next) if !next.is_empty() => token = Some(next),
                _ => return Ok(projects),
            }
        }

        tracing::warn!(pages = MAX_PAGES, "Stopped following project pages");
        Ok(projects)
    }
}

/// Decode a Firestore list response body into projects.
///
/// Only an unreadable body is an error. Documents that do not fit the
/// project shape are logged and skipped.
pub fn decode_documents(body: &str) -> PortfolioResult<Vec<Project>> {
    let resp: ListResponse = serde_json::from_str(body)?;
    Ok(decode_list(resp.documents))
}

fn decode_list(documents: Vec<Document>) -> Vec<Project> {
    documents
        .into_iter()
        .filter_map(|doc| match decode_document(doc) {
            Ok(project) => Some(project),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed project document");
                None
            }
        })
        .collect()
}

fn decode_document(doc: Document) -> PortfolioResult<Project> {
    let id = doc
        .name
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| PortfolioError::MalformedDocument(format!("no id in {:?}", doc.name)))?
        .to_string();

    let mut plain = Map::new();
    for (key, typed) in &doc.fields {
        let value = plain_value(typed);
        // Null fields fall back to the struct defaults.
        if !value.is_null() {
            plain.insert(key.clone(), value);
        }
    }
    plain.insert("id".to_string(), Value::String(id.clone()));

    serde_json::from_value(Value::Object(plain))
        .map_err(|e| PortfolioError::MalformedDocument(format!("{}: {}", id, e)))
}

/// Flatten a Firestore typed value into plain JSON.
fn plain_value(typed: &Value) -> Value {
    let Some((kind, inner)) = typed.as_object().and_then(|obj| obj.iter().next()) else {
        return Value::Null;
    };

    match kind.as_str() {
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => inner.clone(),
        "booleanValue" => inner.clone(),
        "doubleValue" => inner.clone(),
        // int64 travels as a decimal string
        "integerValue" => inner
            .as_str()
            .and_then(|s| s.parse::<i64>().ok())
            .map(Value::from)
            .unwrap_or_else(|| inner.clone()),
        "arrayValue" => Value::Array(
            inner
                .get("values")
                .and_then(Value::as_array)
                .map(|values| values.iter().map(plain_value).collect())
                .unwrap_or_default(),
        ),
        "mapValue" => Value::Object(
            inner
                .get("fields")
                .and_then(Value::as_object)
                .map(|fields| {
                    fields
                        .iter()
                        .map(|(k, v)| (k.clone(), plain_value(v)))
                        .collect()
                })
                .unwrap_or_default(),
        ),
        _ => Value::Null,
    }
}
