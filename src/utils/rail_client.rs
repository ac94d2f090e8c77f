use std::time::Duration;

use serde_json::Value;

pub const HUXLEY_HOST: &str = "https://huxley2.azurewebsites.net";

/// CRS station codes for the boards we serve.
pub const WEST_HORNDON: &str = "WHR";
pub const FENCHURCH_STREET: &str = "FST";
pub const SOUTHEND_CENTRAL: &str = "SOC";

const RESULT_COUNT: u8 = 10;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct RailClient {
    host: String,
    client: reqwest::Client,
}

impl RailClient {
    pub fn new(host: String) -> Self {
        let request_client = reqwest::Client::new();

        RailClient {
            host,
            client: request_client,
        }
    }

    /// Fetches the departure board for a station from the Huxley 2 API.
    ///
    /// The upstream schema is not ours, so the body is kept as a loose JSON
    /// value and callers only inspect the fields they need. Non-2xx statuses
    /// and timeouts surface as errors.
    pub async fn fetch_departures(&self, crs: &str) -> Result<Value, reqwest::Error> {
        self.client
            .get(format!(
                "{}/departures/{}/{}?expand=true",
                self.host, crs, RESULT_COUNT
            ))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await
    }
}
