use serde::{Deserialize, Serialize};

/// Количество детекторов прибора (Si, InGaAs1, InGaAs2)
pub const DETECTOR_COUNT: usize = 3;

/// Количество каналов внешних данных
pub const EXTERNAL_CHANNELS: usize = 8;

/// Детектор спектрорадиометра
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Detector {
    /// Кремниевый детектор (видимый + ближний ИК)
    Si = 0,
    /// Первый InGaAs детектор
    InGaAs1 = 1,
    /// Второй InGaAs детектор
    InGaAs2 = 2,
}

impl Detector {
    /// Все детекторы в порядке следования в файле
    pub const ALL: [Detector; DETECTOR_COUNT] =
        [Detector::Si, Detector::InGaAs1, Detector::InGaAs2];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Detector::Si => "Si",
            Detector::InGaAs1 => "InGaAs1",
            Detector::InGaAs2 => "InGaAs2",
        }
    }
}

impl std::fmt::Display for Detector {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
