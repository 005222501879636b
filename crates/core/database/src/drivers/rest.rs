use std::time::Duration;

use pawtrack_models::v0::AuthUser;
use reqwest::{Client, Request, RequestBuilder, Result, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

database_derived!(
    /// Hosted REST backend implementation
    pub struct RestDb {
        client: Client,
        url: String,
        anon_key: String,
    }
);

impl RestDb {
    /// Create a client for the backend at the given URL
    pub fn new(url: &str, anon_key: &str) -> Result<RestDb> {
        let client = Client::builder()
            .user_agent(concat!("pawtrack/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        Ok(RestDb {
            client,
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    /// Attach the project key, authorising as the given user if any
    fn authorise(&self, request: RequestBuilder, access_token: Option<&str>) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token.unwrap_or(&self.anon_key))
    }

    /// Get the URL of a table
    fn table(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.url)
    }

    /// Insert one row into a table
    pub async fn insert_one<T: Serialize + ?Sized>(
        &self,
        table: &'static str,
        row: &T,
    ) -> Result<()> {
        self.authorise(self.client.post(self.table(table)), None)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?
            .error_for_status()
            .map(|_| ())
    }

    /// Build a request inserting one row as the given user, asking for the stored row back
    pub fn insert_request<T: Serialize + ?Sized>(
        &self,
        table: &'static str,
        row: &T,
        access_token: Option<&str>,
    ) -> Result<Request> {
        self.authorise(self.client.post(self.table(table)), access_token)
            .header("Prefer", "return=representation")
            .json(row)
            .build()
    }

    /// Insert one row as the given user, returning the rows the backend stored
    pub async fn insert_returning<T: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        table: &'static str,
        row: &T,
        access_token: Option<&str>,
    ) -> Result<Vec<R>> {
        self.client
            .execute(self.insert_request(table, row, access_token)?)
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Find rows in a table matching the given filters
    pub async fn find<T: DeserializeOwned>(
        &self,
        table: &'static str,
        filters: &[(&str, String)],
    ) -> Result<Vec<T>> {
        self.authorise(self.client.get(self.table(table)), None)
            .query(filters)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Fetch the user an access token belongs to
    pub async fn fetch_user(&self, access_token: &str) -> Result<Option<AuthUser>> {
        let response = self
            .authorise(
                self.client.get(format!("{}/auth/v1/user", self.url)),
                Some(access_token),
            )
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            _ => response.error_for_status()?.json().await.map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::RestDb;
    use crate::NewContentReport;

    fn body(request: &reqwest::Request) -> serde_json::Value {
        let bytes = request
            .body()
            .and_then(|body| body.as_bytes())
            .expect("buffered body");
        serde_json::from_slice(bytes).unwrap()
    }

    #[test]
    fn report_insert_sends_row_as_the_user() {
        let db = RestDb::new("https://demo.example.co/", "anon").unwrap();
        let row = NewContentReport {
            reporter_id: Some("user_01".to_string()),
            pet_id: "pet_01".to_string(),
            reason: "Listing is a scam".to_string(),
            details: None,
        };

        let request = db
            .insert_request("content_reports", &row, Some("user_token"))
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://demo.example.co/rest/v1/content_reports"
        );
        assert_eq!(request.headers()["apikey"], "anon");
        assert_eq!(request.headers()["authorization"], "Bearer user_token");
        assert_eq!(request.headers()["prefer"], "return=representation");
        assert_eq!(
            body(&request),
            json!({
                "reporter_id": "user_01",
                "pet_id": "pet_01",
                "reason": "Listing is a scam",
                "details": null
            })
        );

        let request = db.insert_request("content_reports", &row, None).unwrap();
        assert_eq!(request.headers()["authorization"], "Bearer anon");
    }
}
