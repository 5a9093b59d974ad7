use super::print_error;
use colored::Colorize;
use ovhflow_cloud_ovh::DedicatedServerApi;
use ovhflow_config::Config;
use std::io::Write;

/// 各サーバーの状態を表示する
///
/// 最初に失敗したサーバーでエラーを表示し、残りのサーバーは処理しない。
pub async fn handle(
    api: &dyn DedicatedServerApi,
    config: &Config,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    for entry in &config.servers {
        let server = match api.server(&entry.name).await {
            Ok(server) => server,
            Err(e) => {
                tracing::debug!(server = %entry.name, error = %e, "Status query failed");
                print_error(out, &e)?;
                return Ok(());
            }
        };

        let state = if server.state == "ok" {
            server.state.green()
        } else {
            server.state.yellow()
        };

        writeln!(
            out,
            "{} {} {} {}",
            "server:".bold(),
            server.name.cyan(),
            state,
            server.datacenter
        )?;
    }

    Ok(())
}
