use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::{Error, MealsResponse, RemoteMeal, RemoteMealDetails, Result};

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1/";
const USER_AGENT: &str = concat!("nutriplan/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct MealDbClient {
    http: Client,
    base_url: Url,
}

impl MealDbClient {
    pub fn new(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self> {
        let mut base_url = base_url.as_ref().to_owned();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: Url::parse(&base_url)?,
        })
    }

    /// Meals whose name matches `term`. No match is an empty list.
    pub async fn search(&self, term: impl AsRef<str>) -> Result<Vec<RemoteMeal>> {
        let response: MealsResponse<RemoteMeal> =
            self.get("search.php", ("s", term.as_ref())).await?;

        Ok(response.into_meals())
    }

    pub async fn lookup(&self, id: impl AsRef<str>) -> Result<Option<RemoteMealDetails>> {
        let response: MealsResponse<RemoteMealDetails> =
            self.get("lookup.php", ("i", id.as_ref())).await?;

        Ok(response.into_meals().into_iter().next())
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        (key, value): (&str, &str),
    ) -> Result<T> {
        let mut url = self.base_url.join(endpoint)?;
        url.query_pairs_mut().append_pair(key, value);

        tracing::debug!(url = %url, "querying meal service");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), endpoint, "meal service request failed");
            return Err(Error::Status(status.as_u16()));
        }

        let body = response.bytes().await?;

        Ok(serde_json::from_slice(&body)?)
    }
}
