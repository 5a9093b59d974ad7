//! Dedicated server API (`/dedicated/server/*`)

use crate::client::OvhClient;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Dedicated server operations used by ovhflow
///
/// `name` is the provider's service name and is used verbatim as a path segment.
#[async_trait]
pub trait DedicatedServerApi: Send + Sync {
    /// `GET /dedicated/server/{name}`
    async fn server(&self, name: &str) -> Result<DedicatedServer>;

    /// `GET /dedicated/server/{name}/install/status`
    async fn install_status(&self, name: &str) -> Result<InstallStatus>;

    /// `POST /dedicated/server/{name}/install/start`
    async fn start_install(&self, name: &str, request: &InstallRequest) -> Result<()>;
}

#[async_trait]
impl DedicatedServerApi for OvhClient {
    async fn server(&self, name: &str) -> Result<DedicatedServer> {
        self.get(&format!("/dedicated/server/{}", name)).await
    }

    async fn install_status(&self, name: &str) -> Result<InstallStatus> {
        self.get(&format!("/dedicated/server/{}/install/status", name))
            .await
    }

    async fn start_install(&self, name: &str, request: &InstallRequest) -> Result<()> {
        tracing::info!(server = name, template = %request.template_name, "Starting installation");
        self.post(&format!("/dedicated/server/{}/install/start", name), request)
            .await
    }
}

/// Subset of `dedicated.server.Dedicated`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DedicatedServer {
    pub name: String,
    pub state: String,
    pub datacenter: String,
}

/// Progress of a running installation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallStatus {
    /// Seconds since the installation started
    pub elapsed_time: i64,
    #[serde(default)]
    pub progress: Vec<InstallProgress>,
}

/// One installation step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallProgress {
    pub status: String,
    pub comment: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `install/start`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallRequest {
    pub template_name: String,
    pub details: InstallDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallDetails {
    pub custom_hostname: String,
    pub language: String,
    pub ssh_key_name: String,
    pub use_distrib_kernel: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_installation_script_link: Option<String>,
}
