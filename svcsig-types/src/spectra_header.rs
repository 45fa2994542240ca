use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
    geodetic::{decimal_degrees, decimal_gps_hours, parse_sexagesimal, Axis, Sexagesimal},
    Detector, SigError, SigResult, DETECTOR_COUNT, EXTERNAL_CHANNELS,
};

/// Формат поля `time`: `mm/dd/yyyy HH:MM:SS AM|PM`
pub const SCAN_TIME_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

/// Поля заголовка одного скана (опорного или целевого).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpectraHeader {
    /// Время интегрирования по детекторам, мс
    pub integration: [f32; DETECTOR_COUNT],
    /// "Time-based" | "Coadd-based"
    pub scan_method: String,
    /// Число накоплений по детекторам
    pub scan_coadds: [f32; DETECTOR_COUNT],
    /// Длительность скана, с
    pub scan_time: f32,
    /// "AI" | "FI" | "UI"
    pub scan_settings: String,
    /// Внешние датчики, набор 1 (нули, если отключены)
    pub external_data_set1: [i16; EXTERNAL_CHANNELS],
    /// Внешние датчики, набор 2
    pub external_data_set2: [i16; EXTERNAL_CHANNELS],
    /// Насадочная оптика
    pub optic: String,
    /// Температура детекторов, °C
    pub temp: [f32; DETECTOR_COUNT],
    /// Напряжение батареи, В
    pub battery: f32,
    /// Код ошибки прибора (0 = нет)
    pub error: u32,
    /// "Radiance" | "Irradiance" | "Counts"
    pub units: String,
    /// `mm/dd/yyyy HH:MM:SS AM|PM`
    pub time: String,
    /// `DDDmm.mmmmC`
    pub longitude: String,
    /// `DDmm.mmmmC`
    pub latitude: String,
    /// `HHmmSS.SSS`
    pub gpstime: String,
    /// Номер ячейки памяти прибора
    pub memory_slot: u32,
}

impl SpectraHeader {
    pub fn integration_for(
        &self,
        detector: Detector,
    ) -> f32 {
        self.integration[detector.index()]
    }

    pub fn coadds_for(
        &self,
        detector: Detector,
    ) -> f32 {
        self.scan_coadds[detector.index()]
    }

    pub fn temp_for(
        &self,
        detector: Detector,
    ) -> f32 {
        self.temp[detector.index()]
    }

    /// Долгота в десятичных градусах (восток положительный).
    pub fn decimal_longitude(&self) -> SigResult<f64> {
        decimal_degrees(&self.longitude, Axis::Longitude)
    }

    /// Широта в десятичных градусах (север положительный).
    pub fn decimal_latitude(&self) -> SigResult<f64> {
        decimal_degrees(&self.latitude, Axis::Latitude)
    }

    pub fn longitude_dms(&self) -> SigResult<Sexagesimal> {
        parse_sexagesimal(&self.longitude, Axis::Longitude)
    }

    pub fn latitude_dms(&self) -> SigResult<Sexagesimal> {
        parse_sexagesimal(&self.latitude, Axis::Latitude)
    }

    /// GPS-время в десятичных часах.
    pub fn decimal_gps_time(&self) -> SigResult<f64> {
        decimal_gps_hours(&self.gpstime)
    }

    /// Время скана по часам прибора.
    pub fn timestamp(&self) -> SigResult<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.time.trim(), SCAN_TIME_FORMAT).map_err(|e| {
            SigError::MalformedTimestamp {
                value: self.time.clone(),
                reason: e.to_string(),
            }
        })
    }
}
