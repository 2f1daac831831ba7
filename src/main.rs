//! CLI chainkv
//!
//! Читает сценарий команд (`put`, `get`, `delete`) из файла или stdin и
//! выполняет его над хеш-таблицей с фиксированным числом бакетов. Ответы
//! `get`/`delete` печатаются в stdout, логи пишутся в stderr.

use std::{
    io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chainkv::{config::Settings, driver, logging, KeyValueStore};
use clap::Parser;
use tracing::debug;

/// Аргументы командной строки
#[derive(Parser, Debug)]
#[command(name = "chainkv")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "chainkv - fixed-size chained hash table driven by a command script", long_about = None)]
struct Cli {
    /// Файл со сценарием
    #[arg(help = "Файл со сценарием; stdin, если не указан или равен '-'")]
    input: Option<PathBuf>,
    /// Число бакетов (перекрывает CHAINKV_BUCKETS)
    #[arg(short, long, help = "Число бакетов таблицы")]
    buckets: Option<usize>,
    /// Включить подробный вывод (debug)
    #[arg(short, long, help = "Включить подробный вывод для отладки")]
    verbose: bool,
    /// Подавить логирование полностью
    #[arg(short = 'q', long, conflicts_with = "verbose", help = "Отключить логирование")]
    quiet: bool,
}

/// Точка входа
fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = resolve_settings(cli)?;

    logging::init_logging(cli.verbose, cli.quiet, &settings.log_level)?;
    debug!("Настройки: {settings:?}");

    let mut store = KeyValueStore::with_buckets(settings.bucket_count()?);

    let input = driver::open_input(cli.input.as_deref()).with_context(|| {
        format!(
            "Не удалось открыть файл сценария {}",
            cli.input.as_deref().unwrap_or(Path::new("-")).display()
        )
    })?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    driver::run(input, &mut out, &mut store)?;

    let stats = store.stats();
    debug!(
        entries = stats.entries,
        occupied_buckets = stats.occupied_buckets,
        longest_chain = stats.longest_chain,
        load_factor = stats.load_factor,
        "Состояние таблицы"
    );

    Ok(())
}

/// Настройки из окружения с учётом флагов командной строки
fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load().context("Не удалось загрузить настройки")?;

    if let Some(buckets) = cli.buckets {
        settings.buckets = buckets;
    }
    settings.validate()?;

    Ok(settings)
}
