mod commands;

use clap::Parser;
use commands::Command;
use ovhflow_cloud_ovh::OvhClient;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ovhflow", version)]
#[command(about = "OVH専用サーバーのインストールと状態確認", long_about = None)]
struct Cli {
    /// YAML設定ファイル
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// サーバーをインストール
    #[arg(short = 'i', long)]
    install: bool,

    /// インストールの進捗を表示
    #[arg(short = 's', long = "install-status")]
    install_status: bool,

    /// サーバーの状態を確認（-i / -s より優先）
    #[arg(short = 'v', long)]
    verify: bool,

    /// APIエンドポイント (ovh-eu, ovh-ca, ovh-us, ...)
    #[arg(short = 'e', long, env = "OVH_ENDPOINT")]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 設定ファイル未指定の場合は何もせずに終了
    let Some(config_path) = cli.config.filter(|c| !c.is_empty()).map(PathBuf::from) else {
        return Ok(());
    };

    // ログはstderrへ（stdoutは結果表示用）
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = ovhflow_config::load_config(&config_path)?;

    let Some(command) = Command::from_flags(cli.verify, cli.install, cli.install_status) else {
        return Ok(());
    };

    // 対象サーバーがなければ認証情報も不要
    if config.is_empty() {
        return Ok(());
    }

    let mut out = std::io::stdout();
    let client = match OvhClient::from_env(cli.endpoint.as_deref()) {
        Ok(client) => client,
        Err(e) => {
            commands::print_error(&mut out, &e)?;
            return Ok(());
        }
    };

    commands::dispatch(command, &client, &config, &mut out).await
}
