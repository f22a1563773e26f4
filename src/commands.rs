use anyhow::{bail, Result};
use tracing::{error, info, warn};

use crate::client::{ActivitiesClient, ClientError};
use crate::views;

const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";
const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";

/// Fetch the directory and print it. A failed fetch prints a notice instead of
/// erroring out, and is not retried.
pub async fn run_list(client: &ActivitiesClient) -> Result<()> {
    match client.list_activities().await {
        Ok(activities) => print!("{}", views::render_directory(&activities)),
        Err(e) => {
            error!("Error fetching activities: {:#}", e);
            println!("{LOAD_FAILED}");
        }
    }
    Ok(())
}

pub async fn run_signup(client: &ActivitiesClient, activity: &str, email: &str) -> Result<()> {
    match client.sign_up(activity, email).await {
        Ok(message) => {
            info!("{}", message);
            println!("{message}");
        }
        Err(e) => bail!(failure_message(e, SIGNUP_FAILED)),
    }
    // Always reload from the server rather than patching the local view.
    run_list(client).await
}

pub async fn run_unregister(client: &ActivitiesClient, activity: &str, email: &str) -> Result<()> {
    match client.unregister(activity, email).await {
        Ok(message) => {
            info!("{}", message);
            println!("{message}");
        }
        Err(e) => bail!(failure_message(e, UNREGISTER_FAILED)),
    }
    run_list(client).await
}

fn failure_message(err: ClientError, transport_fallback: &str) -> String {
    match err {
        ClientError::Validation(msg) => msg.to_string(),
        ClientError::Rejected { status, detail } => {
            warn!("Server rejected request (status {}): {}", status, detail);
            detail
        }
        ClientError::Transport(e) => {
            error!("Request failed: {:#}", e);
            transport_fallback.to_string()
        }
    }
}
