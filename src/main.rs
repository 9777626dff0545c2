//! Pressroom - 作者 / 杂志 / 文章报表工具
//!
//! 用法: `pressroom [--config FILE] [SEED.toml]`
//! 命令行中的种子路径优先于配置中的 `seed.path`

use std::path::PathBuf;

use clap::Parser;
use pressroom::application::{
    import_seed, BuildCatalogReport, CatalogQueryHandler, QueryHandler, SeedData,
};
use pressroom::config::{load_config_from_path, print_config, LogConfig, ReportFormat};
use pressroom::domain::Catalog;

#[derive(Debug, Parser)]
#[command(
    name = "pressroom",
    version,
    about = "Build an author / magazine / article catalog from a seed file and print a report"
)]
struct Cli {
    /// Seed TOML file (overrides `seed.path` from configuration).
    seed: Option<PathBuf>,

    /// Configuration file; defaults to `pressroom.toml` / `pressroom.local.toml` if present.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config_from_path(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);
    print_config(&config);

    let seed_path = cli.seed.or_else(|| config.seed.path.clone());

    // Catalog 生命周期与进程一致
    let mut catalog = Catalog::new();
    match &seed_path {
        Some(path) => {
            let seed = SeedData::from_path(path)?;
            import_seed(&mut catalog, &seed)?;
        }
        None => tracing::warn!("No seed configured, reporting an empty catalog"),
    }

    let report = CatalogQueryHandler::new(&catalog).handle(BuildCatalogReport)?;

    let output = match config.report.format {
        ReportFormat::Json if config.report.pretty => serde_json::to_string_pretty(&report)?,
        ReportFormat::Json => serde_json::to_string(&report)?,
        ReportFormat::Text => report.render_text(),
    };
    println!("{}", output);

    Ok(())
}

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("warn,pressroom={}", log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    // 日志写到 stderr，stdout 只输出报表
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
