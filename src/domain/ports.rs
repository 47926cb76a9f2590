use crate::domain::login::{LoginRequest, LoginResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}

#[async_trait]
pub trait LoginGateway: Send + Sync {
    /// 只有傳輸或解碼失敗才回傳 `Err`；非 2xx 仍是 `Ok`
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse>;
}
