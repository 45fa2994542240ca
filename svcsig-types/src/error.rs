use thiserror::Error;

/// Результат для операций SIG
pub type SigResult<T> = std::result::Result<T, SigError>;

/// Типы ошибок формата SVC SIG.
#[derive(Debug, Error)]
pub enum SigError {
    /// Первая строка не совпадает с сигнатурой, либо файл не открывается
    #[error("Not an SVC sig file: {0}")]
    NotSigFile(String),

    /// В значении заголовка нет ожидаемого разделителя
    #[error("Missing delimiter {delimiter:?} in {input:?}{}", line_suffix(.line))]
    MissingDelimiter {
        delimiter: char,
        input: String,
        line: Option<usize>,
    },

    /// Неизвестный ключ заголовка (не фатально)
    #[error("Unrecognized header key {key:?} at line {line}")]
    UnrecognizedKey { key: String, line: usize },

    /// Некорректная долгота/широта/GPS-время
    #[error("Malformed {field} {value:?}: {reason}")]
    MalformedGeodeticField {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// Некорректная метка времени скана
    #[error("Malformed scan time {value:?}: {reason}")]
    MalformedTimestamp { value: String, reason: String },

    /// Столбцы данных разной длины
    #[error("Column length mismatch: wavelength={wavelength}, reference={reference}, target={target}, reflectance={reflectance}")]
    ColumnLengthMismatch {
        wavelength: usize,
        reference: usize,
        target: usize,
        reflectance: usize,
    },

    /// Ошибки ввода/вывода (автоконвертируются из std::io::Error)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SigError {
    /// Удобные конструкторы
    pub fn not_sig_file<S: Into<String>>(s: S) -> Self {
        Self::NotSigFile(s.into())
    }

    pub fn missing_delimiter<S: Into<String>>(
        delimiter: char,
        input: S,
    ) -> Self {
        Self::MissingDelimiter {
            delimiter,
            input: input.into(),
            line: None,
        }
    }

    pub fn malformed_geodetic<V: Into<String>, R: Into<String>>(
        field: &'static str,
        value: V,
        reason: R,
    ) -> Self {
        Self::MalformedGeodeticField {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Привязывает ошибку разбора к номеру строки файла (1-based).
    ///
    /// Номер уже выставленной строки не перезаписывается.
    pub fn at_line(
        self,
        n: usize,
    ) -> Self {
        match self {
            Self::MissingDelimiter {
                delimiter,
                input,
                line: None,
            } => Self::MissingDelimiter {
                delimiter,
                input,
                line: Some(n),
            },
            other => other,
        }
    }

    /// `true` для ошибок, после которых чтение файла прерывается.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::UnrecognizedKey { .. }
                | Self::MalformedGeodeticField { .. }
                | Self::MalformedTimestamp { .. }
        )
    }
}

fn line_suffix(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!(" at line {n}"),
        None => String::new(),
    }
}
