use serde::{Deserialize, Serialize};

use crate::EXTERNAL_CHANNELS;

/// Идентификация прибора: `"<model>: <serial> (<common name>)"`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    /// Номер модели (часть до двоеточия)
    pub model_number: String,
    /// Расширенный серийный номер
    pub extended_serial_number: String,
    /// Общепринятое имя прибора (в скобках, может отсутствовать)
    pub common_name: String,
}

/// Коэффициенты согласования детекторов и комментарий к ним
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Factors {
    pub reference: f32,
    pub target: f32,
    pub reflectance: f32,
    /// Комментарий в квадратных скобках (пустой, если его нет)
    pub comment: String,
}

/// Поля заголовка, общие для всего файла.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommonHeader {
    /// Произвольное имя сессии
    pub name: String,
    pub instrument: Instrument,
    /// Последние значения тёмного канала
    pub external_data_dark: [i16; EXTERNAL_CHANNELS],
    /// Битовая маска активных каналов
    pub external_data_mask: u8,
    /// Пользовательский комментарий
    pub comm: String,
    pub factors: Factors,
    /// Строки заголовка с неизвестными ключами: (ключ, значение) в порядке
    /// появления. Записываются обратно при сериализации.
    pub extra: Vec<(String, String)>,
}

impl Instrument {
    pub fn new<M, S, C>(
        model_number: M,
        extended_serial_number: S,
        common_name: C,
    ) -> Self
    where
        M: Into<String>,
        S: Into<String>,
        C: Into<String>,
    {
        Self {
            model_number: model_number.into(),
            extended_serial_number: extended_serial_number.into(),
            common_name: common_name.into(),
        }
    }
}

impl Factors {
    /// Три коэффициента в порядке записи: reference, target, reflectance.
    pub fn values(&self) -> [f32; 3] {
        [self.reference, self.target, self.reflectance]
    }
}

impl CommonHeader {
    /// Дополнительное (неизвестное) поле по ключу.
    pub fn extra_value(
        &self,
        key: &str,
    ) -> Option<&str> {
        self.extra
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}: {}", self.model_number, self.extended_serial_number)?;
        if !self.common_name.is_empty() {
            write!(f, " ({})", self.common_name)?;
        }
        Ok(())
    }
}
