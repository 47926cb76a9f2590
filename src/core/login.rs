use crate::domain::login::{LoginOutcome, LoginRequest, Role};
use crate::domain::ports::LoginGateway;
use crate::utils::error::Result;
use crate::utils::validation::{validate_email, validate_non_empty_string, Validate};

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl LoginForm {
    pub fn new(email: &str, password: &str, role: Role) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            role,
        }
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: self.role,
        }
    }
}

impl Validate for LoginForm {
    fn validate(&self) -> Result<()> {
        validate_email("Email", &self.email)?;
        validate_non_empty_string("Password", &self.password)?;
        Ok(())
    }
}

/// 送出登入表單。每次呼叫只送一次請求，錯誤全部轉成顯示用訊息。
pub async fn submit_login<G>(gateway: &G, form: &LoginForm) -> LoginOutcome
where
    G: LoginGateway + ?Sized,
{
    if let Err(e) = form.validate() {
        tracing::debug!("Login form rejected before sending: {}", e);
        return LoginOutcome::Rejected {
            message: e.user_friendly_message(),
        };
    }

    let request = form.to_request();
    tracing::info!("🔐 Signing in as {}", request.role);

    match gateway.login(&request).await {
        Ok(response) if response.is_success() => {
            let route = request.role.landing_route().to_string();
            tracing::info!("✅ Login succeeded, redirecting to {}", route);
            LoginOutcome::Redirect { route }
        }
        Ok(response) => {
            tracing::warn!("❌ Login rejected with status {}", response.status);
            LoginOutcome::Rejected {
                message: response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string()),
            }
        }
        Err(e) => {
            tracing::error!("❌ Login request failed: {}", e);
            LoginOutcome::Rejected {
                message: GENERIC_ERROR_MESSAGE.to_string(),
            }
        }
    }
}
