use reqwest::{Client, Response};
use tracing::debug;

use crate::models::{DetailBody, Directory, MessageBody};

pub const DEFAULT_URL: &str = "http://127.0.0.1:8000";

/// Shown when a failed response carries no `detail`.
const GENERIC_FAILURE: &str = "An error occurred";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{detail}")]
    Rejected { status: u16, detail: String },
}

pub type Result<T> = core::result::Result<T, ClientError>;

/// HTTP client for the activities API.
pub struct ActivitiesClient {
    client: Client,
    base_url: String,
}

impl ActivitiesClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn activity_url(&self, activity: &str) -> String {
        format!(
            "{}/activities/{}",
            self.base_url,
            urlencoding::encode(activity)
        )
    }

    /// Fetch the full directory snapshot
    pub async fn list_activities(&self) -> Result<Directory> {
        let url = format!("{}/activities", self.base_url);
        let resp = self.client.get(&url).send().await?;
        let resp = check_status(resp).await?;
        let activities: Directory = resp.json().await?;
        debug!("Fetched {} activities", activities.len());
        Ok(activities)
    }

    /// Sign `email` up for `activity`. Empty inputs fail before any request is sent.
    pub async fn sign_up(&self, activity: &str, email: &str) -> Result<String> {
        validate_form(activity, email)?;

        let url = format!("{}/signup", self.activity_url(activity));
        let resp = self
            .client
            .post(&url)
            .query(&[("email", email)])
            .send()
            .await?;
        let body: MessageBody = check_status(resp).await?.json().await?;
        Ok(body.message)
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> Result<String> {
        validate_form(activity, email)?;

        let url = format!(
            "{}/participants/{}",
            self.activity_url(activity),
            urlencoding::encode(email)
        );
        let resp = self.client.delete(&url).send().await?;
        let body: MessageBody = check_status(resp).await?.json().await?;
        Ok(body.message)
    }
}

fn validate_form(activity: &str, email: &str) -> Result<()> {
    if activity.trim().is_empty() {
        return Err(ClientError::Validation("Please select an activity"));
    }
    if email.trim().is_empty() {
        return Err(ClientError::Validation("Please enter an email address"));
    }
    Ok(())
}

async fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let text = resp.text().await?;
    debug!("Request failed (status {}): {}", status, text);
    Err(ClientError::Rejected {
        status: status.as_u16(),
        detail: detail_or_fallback(&text),
    })
}

fn detail_or_fallback(text: &str) -> String {
    serde_json::from_str::<DetailBody>(text)
        .map(|b| b.detail)
        .unwrap_or_else(|_| GENERIC_FAILURE.to_string())
}
