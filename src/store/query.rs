use std::{fmt::Display, time::Duration};

use reqwest::{header::HeaderValue, Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::config::StoreSettings;
use crate::errors::RepoErr;

const REST_PREFIX: &str = "rest/v1/";
const RETURN_ROWS: &str = "return=representation";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// HTTP client for the store's table API.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    base: Url,
    key: String,
}

impl RestClient {
    pub fn new(settings: &StoreSettings, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base: settings.url.clone(),
            key: settings.key.clone(),
        })
    }

    pub fn table(&self, name: &str) -> TableQuery<'_> {
        TableQuery {
            client: self,
            table: name.to_string(),
            filters: Vec::new(),
            order: None,
        }
    }
}

/// One request against a table: `eq` filters and ordering, finished by one
/// of the terminal verbs. Rows always come back with every column.
#[derive(Debug)]
pub struct TableQuery<'a> {
    client: &'a RestClient,
    table: String,
    filters: Vec<(String, String)>,
    order: Option<(String, Direction)>,
}

impl TableQuery<'_> {
    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.filters.push((column.to_string(), format!("eq.{value}")));
        self
    }

    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        self.order = Some((column.to_string(), direction));
        self
    }

    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, RepoErr> {
        let req = self.prepare(Method::GET)?;
        send(req).await
    }

    pub async fn insert<B, T>(self, body: &B) -> Result<Vec<T>, RepoErr>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.prepare(Method::POST)?.json(body);
        send(req).await
    }

    pub async fn update<B, T>(self, body: &B) -> Result<Vec<T>, RepoErr>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.prepare(Method::PATCH)?.json(body);
        send(req).await
    }

    pub async fn delete<T: DeserializeOwned>(self) -> Result<Vec<T>, RepoErr> {
        let req = self.prepare(Method::DELETE)?;
        send(req).await
    }

    fn prepare(&self, method: Method) -> Result<RequestBuilder, RepoErr> {
        let url = self
            .client
            .base
            .join(REST_PREFIX)
            .and_then(|u| u.join(&self.table))
            .map_err(|e| RepoErr::Transport(format!("invalid table url: {e}")))?;

        let mut params: Vec<(String, String)> = vec![("select".into(), "*".into())];
        params.extend(self.filters.iter().cloned());
        if let Some((column, direction)) = &self.order {
            params.push(("order".into(), format!("{column}.{}", direction.as_str())));
        }

        debug!(%method, table = %self.table, ?params, "store request");

        let mut req = self
            .client
            .http
            .request(method.clone(), url)
            .query(&params)
            .header("apikey", &self.client.key)
            .bearer_auth(&self.client.key);
        if method != Method::GET {
            req = req.header("Prefer", HeaderValue::from_static(RETURN_ROWS));
        }
        Ok(req)
    }
}

#[derive(Deserialize)]
struct StoreErrorBody {
    message: String,
}

async fn send<T: DeserializeOwned>(req: RequestBuilder) -> Result<Vec<T>, RepoErr> {
    let resp = req
        .send()
        .await
        .map_err(|e| RepoErr::Transport(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp
            .text()
            .await
            .map_err(|e| RepoErr::Transport(e.to_string()))?;
        return Err(RepoErr::Rejected {
            status: status.as_u16(),
            message: rejection_message(&body),
        });
    }

    resp.json::<Vec<T>>()
        .await
        .map_err(|e| RepoErr::Decode(e.to_string()))
}

fn rejection_message(body: &str) -> String {
    serde_json::from_str::<StoreErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.trim().to_string())
}
