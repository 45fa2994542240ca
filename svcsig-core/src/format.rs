//! Спецификация текстового формата SVC SIG
//!
//! Файл состоит из строки-сигнатуры, блока заголовка `key= value[, value...]`
//! и таблицы данных после строки `data=`. Значения, относящиеся к двум
//! сканам, записываются через запятую: сначала опорный скан, затем целевой.

/// Сигнатура в первой строке файла
pub const SIG_SIGNATURE: &str = "/*** Spectra Vista SIG Data ***/";

/// Разделитель ключа и значения
pub const KEY_DELIMITER: char = '=';

/// Разделитель полей значения
pub const FIELD_DELIMITER: char = ',';

/// Разделитель полей при записи
pub const FIELD_SEPARATOR: &str = ", ";

/// Разделитель столбцов таблицы данных при записи
pub const DATA_SEPARATOR: &str = "  ";

/// Расширение SIG файлов
pub const SIG_EXTENSION: &str = "sig";

/// Ключ строки заголовка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderKey {
    Name,
    Instrument,
    Integration,
    ScanMethod,
    ScanCoadds,
    ScanTime,
    ScanSettings,
    ExternalDataSet1,
    ExternalDataSet2,
    ExternalDataDark,
    ExternalDataMask,
    Optic,
    Temp,
    Battery,
    Error,
    Units,
    Time,
    Longitude,
    Latitude,
    GpsTime,
    Comm,
    MemorySlot,
    Factors,
    /// Конец заголовка, начало таблицы данных
    Data,
}

impl HeaderKey {
    /// Все ключи в порядке записи
    pub const ALL: [HeaderKey; 24] = [
        HeaderKey::Name,
        HeaderKey::Instrument,
        HeaderKey::Integration,
        HeaderKey::ScanMethod,
        HeaderKey::ScanCoadds,
        HeaderKey::ScanTime,
        HeaderKey::ScanSettings,
        HeaderKey::ExternalDataSet1,
        HeaderKey::ExternalDataSet2,
        HeaderKey::ExternalDataDark,
        HeaderKey::ExternalDataMask,
        HeaderKey::Optic,
        HeaderKey::Temp,
        HeaderKey::Battery,
        HeaderKey::Error,
        HeaderKey::Units,
        HeaderKey::Time,
        HeaderKey::Longitude,
        HeaderKey::Latitude,
        HeaderKey::GpsTime,
        HeaderKey::Comm,
        HeaderKey::MemorySlot,
        HeaderKey::Factors,
        HeaderKey::Data,
    ];

    /// Текст ключа в файле (регистр значим)
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderKey::Name => "name",
            HeaderKey::Instrument => "instrument",
            HeaderKey::Integration => "integration",
            HeaderKey::ScanMethod => "scan method",
            HeaderKey::ScanCoadds => "scan coadds",
            HeaderKey::ScanTime => "scan time",
            HeaderKey::ScanSettings => "scan settings",
            HeaderKey::ExternalDataSet1 => "external data set1",
            HeaderKey::ExternalDataSet2 => "external data set2",
            HeaderKey::ExternalDataDark => "external data dark",
            HeaderKey::ExternalDataMask => "external data mask",
            HeaderKey::Optic => "optic",
            HeaderKey::Temp => "temp",
            HeaderKey::Battery => "battery",
            HeaderKey::Error => "error",
            HeaderKey::Units => "units",
            HeaderKey::Time => "time",
            HeaderKey::Longitude => "longitude",
            HeaderKey::Latitude => "latitude",
            HeaderKey::GpsTime => "gpstime",
            HeaderKey::Comm => "comm",
            HeaderKey::MemorySlot => "memory slot",
            HeaderKey::Factors => "factors",
            HeaderKey::Data => "data",
        }
    }
}

impl std::fmt::Display for HeaderKey {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HeaderKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeaderKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("Unknown header key: '{s}'"))
    }
}
