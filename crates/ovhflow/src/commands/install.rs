use super::print_error;
use colored::Colorize;
use ovhflow_cloud_ovh::{DedicatedServerApi, InstallDetails, InstallRequest};
use ovhflow_config::{Config, ServerEntry};
use std::io::Write;

/// インストール時の言語
pub const INSTALL_LANGUAGE: &str = "fr";

/// インストール時に登録するSSH鍵の名前
pub const SSH_KEY_NAME: &str = "mykey";

/// サーバーエントリからインストール要求を組み立てる
pub fn build_request(entry: &ServerEntry) -> InstallRequest {
    InstallRequest {
        template_name: entry.template().name().to_string(),
        details: InstallDetails {
            custom_hostname: entry.name.clone(),
            language: INSTALL_LANGUAGE.to_string(),
            ssh_key_name: SSH_KEY_NAME.to_string(),
            use_distrib_kernel: true,
            post_installation_script_link: None,
        },
    }
}

/// 各サーバーのインストールを開始する
///
/// 最初に失敗したサーバーでエラーを表示し、残りのサーバーは処理しない。
pub async fn handle(
    api: &dyn DedicatedServerApi,
    config: &Config,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    for entry in &config.servers {
        let request = build_request(entry);

        if let Err(e) = api.start_install(&entry.name, &request).await {
            tracing::debug!(server = %entry.name, error = %e, "Install start failed");
            print_error(out, &e)?;
            return Ok(());
        }

        writeln!(
            out,
            "{} {}",
            "インストールを開始しました:".green(),
            entry.name.cyan()
        )?;
    }

    Ok(())
}
