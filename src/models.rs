use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Activity name -> record. Ordered so listings are stable between calls.
pub type Directory = BTreeMap<String, Activity>;

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub activities: Directory,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Emails in signup order.
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DetailBody {
    pub detail: String,
}
