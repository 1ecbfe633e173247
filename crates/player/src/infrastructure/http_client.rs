//! HTTP lookup client for the character-sheet backend

use std::time::Duration;

use async_trait::async_trait;
use charsheet_shared::LookupRequest;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::ports::outbound::{LookupError, LookupPort};

/// Extra time the transport allows past the lookup timeout, so an expired
/// lookup is reported by the caller as a timeout
const TRANSPORT_GRACE: Duration = Duration::from_secs(1);

/// Transport timeout for a given lookup timeout
pub fn transport_timeout(lookup_timeout: Duration) -> Duration {
    lookup_timeout.saturating_add(TRANSPORT_GRACE)
}

/// Issues one GET per lookup against `<base>/api/...`
#[derive(Clone)]
pub struct HttpLookupClient {
    client: Client,
    base_url: Url,
}

impl HttpLookupClient {
    pub fn new(base_url: Url, lookup_timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(transport_timeout(lookup_timeout))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, base_url }
    }

    /// Full URL of a request, base path preserved
    pub fn endpoint_url(&self, request: &LookupRequest) -> Url {
        let mut url = self.base_url.clone();
        let path = format!(
            "{}{}",
            url.path().trim_end_matches('/'),
            request.resource.path()
        );
        url.set_path(&path);
        url.set_query(None);
        url.query_pairs_mut().extend_pairs(
            request
                .params
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str())),
        );
        url
    }
}

#[async_trait]
impl LookupPort for HttpLookupClient {
    async fn fetch(&self, request: &LookupRequest) -> Result<Value, LookupError> {
        let url = self.endpoint_url(request);
        tracing::debug!(resource = %request.resource, url = %url, "Sending lookup");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| LookupError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charsheet_domain::DieSize;
    use charsheet_shared::Resource;

    fn client(base: &str) -> HttpLookupClient {
        HttpLookupClient::new(Url::parse(base).unwrap(), Duration::from_secs(1))
    }

    #[test]
    fn endpoint_url_encodes_parameters() {
        let url = client("http://localhost:8000")
            .endpoint_url(&LookupRequest::by_name(Resource::WeaponData, "Light Crossbow"));
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/weapondata?weaponInput=Light+Crossbow"
        );
    }

    #[test]
    fn transport_outlives_lookup_timeout() {
        let lookup = Duration::from_millis(300);
        assert!(transport_timeout(lookup) > lookup);
        assert_eq!(transport_timeout(Duration::MAX), Duration::MAX);
    }

    #[test]
    fn endpoint_url_keeps_base_path() {
        let url = client("http://example.com/sheet/")
            .endpoint_url(&LookupRequest::dice_roll(DieSize::D20, 2));
        assert_eq!(
            url.as_str(),
            "http://example.com/sheet/api/rollingdice?diceInput=d20&numDice=2"
        );
    }
}
