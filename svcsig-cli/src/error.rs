use std::path::PathBuf;

use thiserror::Error;

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Ошибка формата SIG (файл не прочитан)
    #[error("SIG error: {0}")]
    Sig(#[from] svcsig_types::SigError),

    /// Ошибка копирования/записи файла
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка JSON дампа
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Пользователь отказался перезаписывать существующий файл
    #[error("Not overwriting existing file {}", .path.display())]
    Aborted { path: PathBuf },

    /// Некорректная комбинация аргументов
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),
}
