use clap::Parser;
use maritime_performance_toolbox::{
    app,
    cli::Cli,
    config::{self, ConfigOrigin},
    logging,
};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 명령을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let (cfg, origin) = config::load_or_create(&cli.config)?;
    // 로그 레벨이 설정에 있으므로 구독자는 로드 직후에 설치하고, 로드 결과는 그 뒤에 남긴다.
    logging::init(Some(cfg.log_level.as_str()));
    match origin {
        ConfigOrigin::Loaded => tracing::debug!(path = %cli.config.display(), "config loaded"),
        ConfigOrigin::Created => {
            tracing::info!(path = %cli.config.display(), "default config created")
        }
    }
    app::run(cli, &cfg, origin)?;
    Ok(())
}
