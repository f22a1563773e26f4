pub mod activities;
pub mod error;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::response::Redirect;
use axum::routing::{delete, get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::models::Config;
use crate::store::{ActivityRepository, InMemoryDirectory};

const INDEX_PATH: &str = "/static/index.html";

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) directory: Arc<dyn ActivityRepository>,
}

pub(crate) fn router(directory: Arc<dyn ActivityRepository>, static_dir: &Path) -> Router {
    let state = AppState { directory };

    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .route("/activities", get(activities::list_activities))
        .route(
            "/activities/{activity_name}/signup",
            post(activities::sign_up),
        )
        .route(
            "/activities/{activity_name}/participants/{email}",
            delete(activities::unregister),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(config: Config) -> Result<()> {
    info!("Seeded {} activities", config.activities.len());
    let directory: Arc<dyn ActivityRepository> =
        Arc::new(InMemoryDirectory::new(config.activities));
    let static_dir = Path::new(&config.server.static_dir);
    if !static_dir.is_dir() {
        warn!(
            "Static directory {} not found, the web page will not load",
            static_dir.display()
        );
    }

    let app = router(directory, static_dir);

    let addr = &config.server.addr;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Activities server listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::path::Path;
    use std::sync::Arc;

    use tokio::net::TcpListener;

    use crate::models::{Activity, Directory};
    use crate::store::InMemoryDirectory;

    pub(crate) fn sample_directory() -> Directory {
        let mut activities = Directory::new();
        activities.insert(
            "Chess Club".to_string(),
            Activity {
                description: "Learn strategies and compete in chess tournaments".to_string(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: 12,
                participants: vec![
                    "michael@mergington.edu".to_string(),
                    "daniel@mergington.edu".to_string(),
                ],
            },
        );
        activities.insert(
            "Programming Class".to_string(),
            Activity {
                description: "Learn programming fundamentals and build software projects"
                    .to_string(),
                schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM".to_string(),
                max_participants: 20,
                participants: vec![
                    "emma@mergington.edu".to_string(),
                    "sophia@mergington.edu".to_string(),
                ],
            },
        );
        activities
    }

    pub(crate) fn app() -> axum::Router {
        let static_dir = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static"));
        super::router(
            Arc::new(InMemoryDirectory::new(sample_directory())),
            static_dir,
        )
    }

    /// Serve the sample directory on an ephemeral port; returns the base URL.
    pub(crate) async fn spawn_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app()).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// A base URL nothing listens on.
    pub(crate) async fn unreachable_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }
}
