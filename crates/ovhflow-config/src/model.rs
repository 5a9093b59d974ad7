//! サーバー定義のデータモデル

use serde::Deserialize;

/// MIS (Managed Infrastructure) 用テンプレート
pub const MIS_TEMPLATE: &str = "debian9-64bits-singlepart-RAID1";

/// MDS (Managed Distribution + Plesk) 用テンプレート
pub const MDS_TEMPLATE: &str = "debian9-plesk17_64";

/// 設定ファイル全体
///
/// `servers` はファイルに記述された順序を保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub servers: Vec<ServerEntry>,
}

impl Config {
    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }
}

/// 操作対象の専用サーバー
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerEntry {
    /// プロバイダー側のサーバー名（例: ns123456.ip-1-2-3.eu）
    pub name: String,

    /// テンプレート指定（"mds" / "mis"）
    #[serde(default)]
    pub image: String,

    /// 現在は未使用
    #[serde(default)]
    pub options: String,
}

impl ServerEntry {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            options: String::new(),
        }
    }

    /// `image` から適用するテンプレートを決定
    pub fn template(&self) -> Template {
        Template::from_image(&self.image)
    }
}

/// インストール時に適用するOSテンプレート
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Managed Infrastructure
    ManagedInfra,
    /// Managed Distribution + コントロールパネル
    ManagedDistro,
}

impl Template {
    /// 論理名からテンプレートを解決する。未知の値は ManagedInfra 扱い。
    pub fn from_image(image: &str) -> Self {
        match image {
            "mds" => Template::ManagedDistro,
            _ => Template::ManagedInfra,
        }
    }

    /// プロバイダーのテンプレート名
    pub fn name(&self) -> &'static str {
        match self {
            Template::ManagedInfra => MIS_TEMPLATE,
            Template::ManagedDistro => MDS_TEMPLATE,
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
