use anyhow::{bail, Context};
use clap::Parser;
use std::path::{Path, PathBuf};
use record_cleaner::io::{DefaultDocumentReader, DefaultDocumentWriter};
use record_cleaner::{
    create_backup, CleanerConfig, EditReport, RecordEditor, RecordMatching, ReplaceStrategy,
    DEFAULT_DOCUMENT_PATH,
};

#[derive(Parser)]
#[command(name = "record_cleaner")]
#[command(about = "去掉 AzkarItem 记录中 text/reference 字段末尾的句点")]
#[command(version = "0.1.0")]
struct Cli {
    /// 输入文件路径（默认 lib/azkar_page.dart）
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 输出文件路径（默认原地覆盖）
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 按括号深度确定记录边界（默认在第一个右括号处结束）
    #[arg(long)]
    balanced: bool,

    /// 按值区间替换（默认按字面量替换）
    #[arg(long)]
    span_replace: bool,

    /// 写入前备份原文件
    #[arg(long)]
    backup: bool,

    /// 预览模式：只显示变更，不写回文件
    #[arg(long)]
    dry_run: bool,

    /// 变更报告 JSON 输出路径
    #[arg(long)]
    report: Option<PathBuf>,

    /// 静默模式(仅输出错误)
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let input = cli
        .input
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCUMENT_PATH));

    validate_input(&input)?;

    if config.dry_run {
        return handle_dry_run(&cli, &config, &input);
    }

    handle_cleanup(&cli, &config, &input)
}

/// 加载配置文件并应用命令行覆盖
fn load_config(cli: &Cli) -> anyhow::Result<CleanerConfig> {
    let mut config = match &cli.config {
        Some(path) => CleanerConfig::load(path)
            .with_context(|| format!("加载配置文件失败: {:?}", path))?,
        None => CleanerConfig::default(),
    };

    if cli.balanced {
        config.matching = RecordMatching::Balanced;
    }
    if cli.span_replace {
        config.replace = ReplaceStrategy::Span;
    }
    config.backup |= cli.backup;
    config.dry_run |= cli.dry_run;

    log::debug!("effective config: {:?}", config);
    Ok(config)
}

/// 验证输入文件
fn validate_input(input: &Path) -> anyhow::Result<()> {
    if !input.exists() {
        bail!("输入文件不存在: {:?}", input);
    }
    if !input.is_file() {
        bail!("输入路径不是文件: {:?}", input);
    }
    Ok(())
}

/// 处理预览模式
fn handle_dry_run(cli: &Cli, config: &CleanerConfig, input: &Path) -> anyhow::Result<()> {
    let editor = RecordEditor::from_config(config);
    let report = editor
        .edit_file(&DefaultDocumentReader, input)
        .with_context(|| format!("读取文件失败: {:?}", input))?;

    if !cli.quiet {
        println!("预览模式：不会写回 {:?}", input);
        print_change_summary(&report);
    }

    if let Some(report_path) = &cli.report {
        save_report(&report, report_path)?;
    }

    Ok(())
}

/// 处理清理并写回
fn handle_cleanup(cli: &Cli, config: &CleanerConfig, input: &Path) -> anyhow::Result<()> {
    if config.backup {
        let backup_path = create_backup(input)
            .with_context(|| format!("创建备份失败: {:?}", input))?;
        if !cli.quiet {
            println!("已备份原文件到: {:?}", backup_path);
        }
    }

    let output = cli.output.clone().unwrap_or_else(|| input.to_path_buf());
    let editor = RecordEditor::from_config(config);
    let report = editor
        .clean_file(&DefaultDocumentReader, &DefaultDocumentWriter, input, &output)
        .with_context(|| format!("清理文件失败: {:?} -> {:?}", input, output))?;

    if let Some(report_path) = &cli.report {
        save_report(&report, report_path)?;
    }

    if !cli.quiet {
        print_change_summary(&report);
        println!("清理完成，结果已写入: {:?}", output);
    }

    Ok(())
}

/// 保存变更报告
fn save_report(report: &EditReport, report_path: &Path) -> anyhow::Result<()> {
    let json_output = report.to_json().context("序列化变更报告失败")?;
    std::fs::write(report_path, json_output)
        .with_context(|| format!("写入变更报告失败: {:?}", report_path))
}

/// 打印变更摘要
fn print_change_summary(report: &EditReport) {
    println!("{}", report.summary());

    if report.is_unchanged() {
        return;
    }

    println!("\n样例变更:");
    for (i, change) in report.changes.iter().take(3).enumerate() {
        println!("{}. {}", i + 1, change);
    }
    if report.changes.len() > 3 {
        println!("... 还有 {} 处变更", report.changes.len() - 3);
    }
}
