use std::borrow::Cow;

use reqwest::header::{HeaderMap, InvalidHeaderValue};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    pub expires_in: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct PowerSchoolCredentials<'a> {
    pub client_id: Cow<'a, str>,
    pub client_secret: Cow<'a, str>,
}

pub struct PowerSchoolClient<'a> {
    http: reqwest::Client,
    base_url: String,
    credentials: Option<PowerSchoolCredentials<'a>>,

    token: Option<Cow<'a, str>>,
}

#[derive(Error, Debug)]
pub enum PowerSchoolError {
    #[error("Failed to request")]
    ReqwestError(#[from] reqwest::Error),
    #[error("Failed to parse header")]
    InvalidHeaderError(#[from] InvalidHeaderValue),
    #[error("Failed to authenticate")]
    AuthenticationError,
    #[error("Failed to decode response: {0}")]
    DecodeError(#[from] serde_json::Error),
    #[error("Unexpected response status: {0}")]
    StatusError(StatusCode),
}
pub type PowerSchoolResult<T> = Result<T, PowerSchoolError>;

impl<'a> PowerSchoolClient<'a> {
    pub fn new(base_url: impl Into<String>) -> PowerSchoolResult<Self> {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self {
            http: reqwest::Client::builder().build()?,
            base_url,
            credentials: None,
            token: None,
        })
    }

    pub fn with_credentials(mut self, credentials: PowerSchoolCredentials<'a>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Exchanges the client id/secret pair for a bearer token via the
    /// OAuth client-credentials grant.
    pub async fn login(&mut self) -> PowerSchoolResult<()> {
        let Some(credentials) = self.credentials.as_ref() else {
            return Err(PowerSchoolError::AuthenticationError);
        };

        let response = self
            .http
            .post(format!("{}/oauth/access_token", self.base_url))
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!("Token request rejected with {}", response.status());
            return Err(PowerSchoolError::AuthenticationError);
        }

        let token = response.json::<AccessTokenResponse>().await?;

        tracing::info!("Obtained PowerSchool access token");
        self.token = Some(token.access_token.into());

        Ok(())
    }

    async fn authorized_get(&self, path: &str) -> PowerSchoolResult<reqwest::Response> {
        let token = self
            .token
            .as_ref()
            .ok_or(PowerSchoolError::AuthenticationError)?;

        let mut headers = HeaderMap::new();

        headers.insert("Authorization", format!("Bearer {token}").parse()?);
        headers.insert("Accept", "application/json".parse()?);

        Ok(self
            .http
            .get(format!("{}{}", self.base_url, path))
            .headers(headers)
            .send()
            .await?)
    }

    pub async fn request<T: serde::de::DeserializeOwned>(
        &mut self,
        path: &str,
    ) -> PowerSchoolResult<T> {
        if self.token.is_none() {
            self.login().await?;
        }

        tracing::debug!("GET {path}");
        let mut response = self.authorized_get(path).await?;

        // A stored token may have expired; re-authenticate once.
        if response.status() == StatusCode::UNAUTHORIZED {
            self.login().await?;
            response = self.authorized_get(path).await?;
        }

        if !response.status().is_success() {
            return Err(PowerSchoolError::StatusError(response.status()));
        }

        let body = response.bytes().await?;

        Ok(serde_json::from_slice(&body)?)
    }
}
