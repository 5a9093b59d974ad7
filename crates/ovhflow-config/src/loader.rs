//! 設定ファイルローダー
//!
//! YAMLファイルを読み込んで [`Config`] を生成する。
//! 読み込み・パースのいずれかに失敗した場合は部分的な結果を返さずにエラーとする。

use crate::error::{ConfigError, Result};
use crate::model::Config;
use std::path::Path;
use tracing::{debug, info, instrument};

/// 設定ファイルをロード
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<Config> {
    debug!("Reading config file");
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_config(&content).map_err(|e| match e {
        ConfigError::Parse { source, .. } => ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    info!(servers = config.len(), "Config loaded");
    Ok(config)
}

/// YAML文字列から [`Config`] を生成
///
/// 空のドキュメントはサーバー0台の設定として扱う。
pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
        path: Default::default(),
        source,
    })?;

    if let Some(index) = config.servers.iter().position(|s| s.name.is_empty()) {
        return Err(ConfigError::InvalidServer { index });
    }

    Ok(config)
}
