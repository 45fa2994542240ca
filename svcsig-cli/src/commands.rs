use std::{
    fs,
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use serde::Serialize;
use svcsig_core::{read_sig_file, write_sig_file, SigReader};
use svcsig_types::{CommonHeader, SigError, SigRecord, SpectraHeader};

use crate::{
    config::{CopyConfig, RenameConfig, ShowConfig, ShowFormat},
    error::{CliError, CliResult},
    naming::{copy_file_name, image_path, rename_destination},
};

/// Подтверждение перезаписи существующего файла.
pub trait OverwritePrompt {
    /// `true`, если файл `path` можно перезаписать.
    fn confirm_overwrite(
        &mut self,
        path: &Path,
    ) -> CliResult<bool>;
}

/// Интерактивный запрос `overwrite? [y/n]` через произвольные потоки.
pub struct ConsolePrompt<R: BufRead, W: Write> {
    input: R,
    output: W,
}

/// Результат переименования.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOutcome {
    pub sig: PathBuf,
    pub image: Option<PathBuf>,
}

/// Только заголовки записи, для JSON дампа без таблицы.
#[derive(Serialize)]
struct HeadersView<'a> {
    common: &'a CommonHeader,
    reference: &'a SpectraHeader,
    target: &'a SpectraHeader,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(
        input: R,
        output: W,
    ) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> OverwritePrompt for ConsolePrompt<R, W> {
    fn confirm_overwrite(
        &mut self,
        path: &Path,
    ) -> CliResult<bool> {
        writeln!(
            self.output,
            "WARNING The file '{}' already exists",
            path.display()
        )?;

        let mut answer = String::new();
        loop {
            writeln!(self.output, "overwrite? [y/n]:")?;
            self.output.flush()?;

            answer.clear();
            // EOF означает отказ
            if self.input.read_line(&mut answer)? == 0 {
                return Ok(false);
            }

            match answer.trim() {
                "y" | "Y" => return Ok(true),
                "n" | "N" => return Ok(false),
                _ => writeln!(self.output, "Invalid option")?,
            }
        }
    }
}

/// Проверяет `dest` перед записью; отказ пользователя даёт [`CliError::Aborted`].
fn ensure_writable(
    dest: &Path,
    overwrite_protection: bool,
    prompt: &mut dyn OverwritePrompt,
) -> CliResult<()> {
    if overwrite_protection && dest.exists() && !prompt.confirm_overwrite(dest)? {
        return Err(CliError::Aborted {
            path: dest.to_path_buf(),
        });
    }
    Ok(())
}

fn same_file(
    a: &Path,
    b: &Path,
) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Копирует SIG файл под именем из ячеек памяти.
///
/// Файл разбирается до вычисления имени: нечитаемый файл не трогает
/// файловую систему.
pub fn rename(
    config: &RenameConfig,
    prompt: &mut dyn OverwritePrompt,
) -> CliResult<RenameOutcome> {
    let record = read_sig_file(&config.input)?;
    let slots = record.memory_slots();
    let dest = rename_destination(&config.input, slots, config.slots, config.append_base_name);

    debug!(
        "{}: reference slot {}, target slot {} -> {}",
        config.input.display(),
        slots.0,
        slots.1,
        dest.display()
    );

    if same_file(&config.input, &dest) {
        info!("{} already has its slot name", dest.display());
    } else {
        ensure_writable(&dest, config.overwrite_protection, prompt)?;
        fs::copy(&config.input, &dest)?;
        info!("{} -> {}", config.input.display(), dest.display());
    }

    let mut image = None;
    if config.copy_image {
        let src = image_path(&config.input);
        if src.is_file() {
            let dst = image_path(&dest);
            if !same_file(&src, &dst) {
                ensure_writable(&dst, config.overwrite_protection, prompt)?;
                fs::copy(&src, &dst)?;
                info!("{} -> {}", src.display(), dst.display());
            }
            image = Some(dst);
        } else {
            debug!("no image at {}", src.display());
        }
    }

    Ok(RenameOutcome { sig: dest, image })
}

/// Путь результата команды `copy`.
pub fn copy_destination(
    config: &CopyConfig,
    record: &SigRecord,
) -> PathBuf {
    if let Some(output) = &config.output {
        return output.clone();
    }

    let name = copy_file_name(record.memory_slots());
    match &config.dir {
        Some(dir) => dir.join(name),
        None => config.input.with_file_name(name),
    }
}

/// Пересохраняет SIG файл через writer под именем `<reference>_<target>.sig`.
pub fn copy(
    config: &CopyConfig,
    prompt: &mut dyn OverwritePrompt,
) -> CliResult<PathBuf> {
    if config.output.is_some() && config.dir.is_some() {
        return Err(CliError::InvalidArgs(
            "--output and --dir are mutually exclusive".to_string(),
        ));
    }

    let record = read_sig_file(&config.input)?;
    let dest = copy_destination(config, &record);

    ensure_writable(&dest, config.overwrite_protection, prompt)?;
    write_sig_file(&record, &dest)?;
    info!(
        "{} -> {} ({} bands)",
        config.input.display(),
        dest.display(),
        record.len()
    );

    Ok(dest)
}

/// Печатает отладочный дамп записи в `out`.
pub fn show<W: Write>(
    config: &ShowConfig,
    out: &mut W,
) -> CliResult<()> {
    let file = fs::File::open(&config.input).map_err(|e| {
        SigError::not_sig_file(format!("{}: {e}", config.input.display()))
    })?;
    let (record, report) = SigReader::new(file)?.read_record()?;

    for w in report.warnings() {
        warn!("{}: {w}", config.input.display());
    }

    match (config.format, config.headers_only) {
        (ShowFormat::Text, true) => writeln!(out, "{}", record.headers())?,
        (ShowFormat::Text, false) => writeln!(out, "{record}")?,
        (ShowFormat::Json, true) => {
            let view = HeadersView {
                common: &record.common,
                reference: &record.reference,
                target: &record.target,
            };
            serde_json::to_writer_pretty(&mut *out, &view)?;
            writeln!(out)?;
        }
        (ShowFormat::Json, false) => {
            serde_json::to_writer_pretty(&mut *out, &record)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
