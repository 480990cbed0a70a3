// ============================================================================
// Schema-i18n - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 初始化全局配置并分发命令
//
// ============================================================================

use schema_i18n::cli::run_cli;
use schema_i18n::models::config::Config;
use schema_i18n::utils::logger::Logger;

fn main() {
    if let Err(e) = Config::initialize().and_then(|_| run_cli()) {
        Logger::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
