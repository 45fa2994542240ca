use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use clap::{Args, Parser, Subcommand};
use log::{error, info, LevelFilter};
use svcsig_cli::{
    commands, ConsolePrompt, CopyConfig, RenameConfig, ShowConfig, ShowFormat, SlotSelection,
};

#[derive(Parser, Debug)]
#[command(
    name = "svcsig",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rename, copy and inspect SVC SIG spectroradiometer files",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Тихий режим (только ошибки)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Скопировать файл под именем из ячеек памяти
    Rename(RenameArgs),
    /// Пересохранить файл через writer
    Copy(CopyArgs),
    /// Отладочный дамп заголовков и данных
    Show(ShowArgs),
}

#[derive(Args, Debug)]
struct RenameArgs {
    /// Добавить исходное имя файла как префикс
    #[arg(short, long)]
    append: bool,
    /// Переименовать также <FILE>.jpg, если он есть
    #[arg(short, long)]
    image: bool,
    /// Не спрашивать перед перезаписью
    #[arg(short, long)]
    overwrite: bool,
    /// Только ячейка опорного скана
    #[arg(short, long, conflicts_with = "target")]
    reference: bool,
    /// Только ячейка целевого скана
    #[arg(short, long)]
    target: bool,
    /// Подробный вывод
    #[arg(short, long)]
    verbose: bool,
    /// Исходный .sig файл
    file: PathBuf,
}

#[derive(Args, Debug)]
struct CopyArgs {
    /// Путь результата (по умолчанию <reference>_<target>.sig)
    #[arg(short, long, conflicts_with = "dir")]
    output: Option<PathBuf>,
    /// Каталог результата
    #[arg(short, long)]
    dir: Option<PathBuf>,
    /// Не спрашивать перед перезаписью
    #[arg(short, long)]
    force: bool,
    /// Исходный .sig файл
    file: PathBuf,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Только заголовки, без таблицы данных
    #[arg(long)]
    headers_only: bool,
    /// Вывод в JSON
    #[arg(long)]
    json: bool,
    file: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let verbose = matches!(&cli.command, Command::Rename(args) if args.verbose);
    let level = if cli.quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_secs()
        .init();

    let mut prompt = ConsolePrompt::new(io::stdin().lock(), io::stdout());

    let result = match cli.command {
        Command::Rename(args) => {
            let slots = match SlotSelection::from_flags(args.reference, args.target) {
                Ok(s) => s,
                Err(e) => {
                    error!("{e}");
                    std::process::exit(1);
                }
            };
            let config = RenameConfig {
                input: args.file,
                append_base_name: args.append,
                copy_image: args.image,
                overwrite_protection: !args.overwrite,
                slots,
            };

            commands::rename(&config, &mut prompt).map(|outcome| {
                info!("Renamed to {}", outcome.sig.display());
            })
        }
        Command::Copy(args) => {
            let config = CopyConfig {
                input: args.file,
                output: args.output,
                dir: args.dir,
                overwrite_protection: !args.force,
            };

            commands::copy(&config, &mut prompt).map(|dest| {
                info!("Written {}", dest.display());
            })
        }
        Command::Show(args) => {
            let config = ShowConfig {
                input: args.file,
                format: if args.json {
                    ShowFormat::Json
                } else {
                    ShowFormat::Text
                },
                headers_only: args.headers_only,
            };

            let mut out = BufWriter::new(io::stdout().lock());
            commands::show(&config, &mut out).and_then(|()| out.flush().map_err(Into::into))
        }
    };

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}
