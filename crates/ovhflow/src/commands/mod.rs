pub mod install;
pub mod install_status;
pub mod status;

#[cfg(test)]
mod testing;

use colored::Colorize;
use ovhflow_cloud_ovh::DedicatedServerApi;
use ovhflow_config::Config;
use std::io::Write;

/// 1回の実行で行う操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// サーバーの状態確認 (-v)
    Status,
    /// インストール開始 (-i)
    Install,
    /// インストール進捗の確認 (-s)
    InstallStatus,
}

impl Command {
    /// フラグから操作を決定する
    ///
    /// 優先順位は -v > -i > -s。どれも指定されていなければ `None`。
    pub fn from_flags(verify: bool, install: bool, install_status: bool) -> Option<Self> {
        if verify {
            Some(Command::Status)
        } else if install {
            Some(Command::Install)
        } else if install_status {
            Some(Command::InstallStatus)
        } else {
            None
        }
    }
}

/// コマンドディスパッチ
pub async fn dispatch(
    command: Command,
    api: &dyn DedicatedServerApi,
    config: &Config,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    tracing::debug!(?command, servers = config.len(), "Dispatching");

    match command {
        Command::Status => status::handle(api, config, out).await,
        Command::Install => install::handle(api, config, out).await,
        Command::InstallStatus => install_status::handle(api, config, out).await,
    }
}

/// API呼び出しの失敗を表示
pub fn print_error(out: &mut dyn Write, error: &dyn std::fmt::Display) -> std::io::Result<()> {
    writeln!(out, "{} {}", "Error:".red().bold(), error)
}

#[cfg(test)]
mod tests {
    use super::testing::{Call, MockApi, config, output, plain_output};
    use super::*;

    #[test]
    fn test_from_flags_precedence() {
        assert_eq!(Command::from_flags(true, true, true), Some(Command::Status));
        assert_eq!(Command::from_flags(true, false, true), Some(Command::Status));
        assert_eq!(Command::from_flags(false, true, true), Some(Command::Install));
        assert_eq!(
            Command::from_flags(false, false, true),
            Some(Command::InstallStatus)
        );
        assert_eq!(Command::from_flags(false, false, false), None);
    }

    #[tokio::test]
    async fn test_verify_wins_over_install() {
        let api = MockApi::new();
        let config = config(&[("s1", "mds")]);
        let mut out = Vec::new();

        let command = Command::from_flags(true, true, false).unwrap();
        dispatch(command, &api, &config, &mut out).await.unwrap();

        assert_eq!(api.calls(), vec![Call::Server("s1".to_string())]);
        assert!(!output(out).contains("インストールを開始しました"));
    }

    #[tokio::test]
    async fn test_empty_config_is_noop() {
        let config = Config::default();

        for command in [Command::Status, Command::Install, Command::InstallStatus] {
            let api = MockApi::new();
            let mut out = Vec::new();
            dispatch(command, &api, &config, &mut out).await.unwrap();

            assert!(api.calls().is_empty(), "{:?}", command);
            assert!(out.is_empty(), "{:?}", command);
        }
    }

    #[test]
    fn test_print_error() {
        plain_output();
        let mut out = Vec::new();
        print_error(&mut out, &"boom").unwrap();
        let text = output(out);
        assert_eq!(text, "Error: boom\n");
    }
}
