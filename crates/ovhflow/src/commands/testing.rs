//! コマンドのテスト用ヘルパー

use async_trait::async_trait;
use ovhflow_cloud_ovh::{
    DedicatedServer, DedicatedServerApi, InstallProgress, InstallRequest, InstallStatus, OvhError,
    Result,
};
use ovhflow_config::{Config, ServerEntry};
use std::collections::HashSet;
use std::sync::Mutex;

/// 記録されたAPI呼び出し
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Server(String),
    InstallStatus(String),
    StartInstall(String, InstallRequest),
}

/// 呼び出しを記録するだけのAPI
#[derive(Default)]
pub struct MockApi {
    failing: HashSet<String>,
    calls: Mutex<Vec<Call>>,
}

impl MockApi {
    pub fn new() -> Self {
        plain_output();
        Self::default()
    }

    /// 指定サーバーへの呼び出しを失敗させる
    pub fn failing(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call, name: &str) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing.contains(name) {
            return Err(OvhError::Api {
                status: 404,
                message: format!("The requested object ({}) does not exist", name),
                class: Some("Client::NotFound".to_string()),
                query_id: None,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DedicatedServerApi for MockApi {
    async fn server(&self, name: &str) -> Result<DedicatedServer> {
        self.record(Call::Server(name.to_string()), name)?;
        Ok(DedicatedServer {
            name: name.to_string(),
            state: "ok".to_string(),
            datacenter: "gra2".to_string(),
        })
    }

    async fn install_status(&self, name: &str) -> Result<InstallStatus> {
        self.record(Call::InstallStatus(name.to_string()), name)?;
        Ok(InstallStatus {
            elapsed_time: 95,
            progress: vec![
                InstallProgress {
                    status: "done".to_string(),
                    comment: "Preparing installation".to_string(),
                    error: None,
                },
                InstallProgress {
                    status: "doing".to_string(),
                    comment: "Partitioning disk".to_string(),
                    error: Some("disk busy".to_string()),
                },
            ],
        })
    }

    async fn start_install(&self, name: &str, request: &InstallRequest) -> Result<()> {
        self.record(
            Call::StartInstall(name.to_string(), request.clone()),
            name,
        )
    }
}

/// (name, image) の組から設定を作る
pub fn config(servers: &[(&str, &str)]) -> Config {
    Config {
        servers: servers
            .iter()
            .map(|(name, image)| ServerEntry::new(*name, *image))
            .collect(),
    }
}

/// 色付けを無効化する
pub fn plain_output() {
    colored::control::set_override(false);
}

/// 書き込まれた出力を文字列にする
pub fn output(out: Vec<u8>) -> String {
    String::from_utf8(out).unwrap()
}
