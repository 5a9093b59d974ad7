use super::print_error;
use colored::Colorize;
use ovhflow_cloud_ovh::{DedicatedServerApi, InstallStatus};
use ovhflow_config::Config;
use std::io::Write;

/// 各サーバーのインストール進捗を表示する
///
/// 失敗したサーバーはエラーを表示して次のサーバーへ進む。
pub async fn handle(
    api: &dyn DedicatedServerApi,
    config: &Config,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    for entry in &config.servers {
        writeln!(out, "-- {} --", entry.name.cyan())?;

        match api.install_status(&entry.name).await {
            Ok(status) => print_status(out, &status)?,
            Err(e) => {
                tracing::debug!(server = %entry.name, error = %e, "Install status query failed");
                print_error(out, &e)?;
            }
        }
    }

    Ok(())
}

fn print_status(out: &mut dyn Write, status: &InstallStatus) -> std::io::Result<()> {
    writeln!(out, "経過時間: {}秒", status.elapsed_time)?;

    for step in &status.progress {
        writeln!(out, "  コメント: {}", step.comment)?;
        writeln!(out, "  ステータス: {}", step.status)?;
        match step.error.as_deref() {
            Some(error) if !error.is_empty() => writeln!(out, "  エラー: {}", error.red())?,
            _ => writeln!(out, "  エラー: {}", "-".dimmed())?,
        }
    }

    Ok(())
}
