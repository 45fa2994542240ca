use std::path::PathBuf;

/// Какие ячейки памяти входят в новое имя файла.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlotSelection {
    /// `<target>_<reference>`
    #[default]
    Both,
    /// Только ячейка опорного скана.
    ReferenceOnly,
    /// Только ячейка целевого скана.
    TargetOnly,
}

/// Формат вывода команды `show`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShowFormat {
    #[default]
    Text,
    Json,
}

/// Конфигурация переименования SIG файла.
#[derive(Debug, Clone)]
pub struct RenameConfig {
    /// Исходный .sig файл
    pub input: PathBuf,
    /// Префикс `<base>__` из исходного имени
    pub append_base_name: bool,
    /// Копировать также `<input>.jpg`
    pub copy_image: bool,
    /// Спрашивать перед перезаписью существующего файла
    pub overwrite_protection: bool,
    pub slots: SlotSelection,
}

/// Конфигурация пересохранения SIG файла через writer.
#[derive(Debug, Clone)]
pub struct CopyConfig {
    pub input: PathBuf,
    /// Явный путь результата; иначе `<reference>_<target>.sig`
    pub output: Option<PathBuf>,
    /// Каталог результата (по умолчанию каталог исходного файла)
    pub dir: Option<PathBuf>,
    pub overwrite_protection: bool,
}

/// Конфигурация отладочного дампа.
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    pub input: PathBuf,
    pub format: ShowFormat,
    /// Без таблицы данных
    pub headers_only: bool,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl SlotSelection {
    /// Выбор по флагам `-r` / `-t`; оба флага сразу недопустимы.
    pub fn from_flags(
        reference_only: bool,
        target_only: bool,
    ) -> Result<Self, String> {
        match (reference_only, target_only) {
            (false, false) => Ok(SlotSelection::Both),
            (true, false) => Ok(SlotSelection::ReferenceOnly),
            (false, true) => Ok(SlotSelection::TargetOnly),
            (true, true) => Err("-r and -t are mutually exclusive".to_string()),
        }
    }

    pub fn uses_reference(&self) -> bool {
        !matches!(self, SlotSelection::TargetOnly)
    }

    pub fn uses_target(&self) -> bool {
        !matches!(self, SlotSelection::ReferenceOnly)
    }
}

impl RenameConfig {
    pub fn new<P: Into<PathBuf>>(input: P) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов
////////////////////////////////////////////////////////////////////////////////

impl std::fmt::Display for SlotSelection {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            SlotSelection::Both => write!(f, "both"),
            SlotSelection::ReferenceOnly => write!(f, "reference"),
            SlotSelection::TargetOnly => write!(f, "target"),
        }
    }
}

impl std::str::FromStr for SlotSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "both" | "all" => Ok(SlotSelection::Both),
            "reference" | "ref" | "r" => Ok(SlotSelection::ReferenceOnly),
            "target" | "tgt" | "t" => Ok(SlotSelection::TargetOnly),
            _ => Err(format!(
                "Unknown slot selection: '{s}'. Use: both, reference, target"
            )),
        }
    }
}

impl std::fmt::Display for ShowFormat {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ShowFormat::Text => write!(f, "text"),
            ShowFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ShowFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ShowFormat::Text),
            "json" => Ok(ShowFormat::Json),
            _ => Err(format!("Unknown output format: '{s}'. Use: text, json")),
        }
    }
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            append_base_name: false,
            copy_image: false,
            overwrite_protection: true,
            slots: SlotSelection::Both,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
