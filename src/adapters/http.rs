use crate::domain::login::{LoginRequest, LoginResponse};
use crate::domain::ports::{ConfigProvider, LoginGateway};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// 以 reqwest 呼叫 `POST {base_url}/api/login`
pub struct HttpLoginGateway<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpLoginGateway<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { config, client })
    }

    pub fn login_url(&self) -> String {
        format!("{}/api/login", self.config.api_base_url().trim_end_matches('/'))
    }
}

#[async_trait]
impl<C: ConfigProvider> LoginGateway for HttpLoginGateway<C> {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        let url = self.login_url();
        tracing::debug!("Making login request to: {}", url);

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        tracing::debug!("Login response status: {}", status);

        let body = response.text().await?;
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|json| json.get("message")?.as_str().map(str::to_string));

        Ok(LoginResponse {
            status: status.as_u16(),
            message,
        })
    }
}
