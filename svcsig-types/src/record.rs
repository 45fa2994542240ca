use serde::{Deserialize, Serialize};

use crate::{CommonHeader, SigError, SigResult, SpectraHeader};

/// Одна строка таблицы данных
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DataRow {
    /// Длина волны, нм
    pub wavelength: f32,
    pub reference_radiance: f32,
    pub target_radiance: f32,
    /// Коэффициент отражения цели, %
    pub target_reflectance: f32,
}

/// Таблица спектральных данных: четыре столбца одинаковой длины.
///
/// Строки добавляются только целиком, поэтому длины столбцов всегда равны.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpectralData {
    wavelength: Vec<f32>,
    reference_radiance: Vec<f32>,
    target_radiance: Vec<f32>,
    target_reflectance: Vec<f32>,
}

/// Разобранный SIG файл.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SigRecord {
    pub common: CommonHeader,
    /// Заголовок опорного скана (белая панель)
    pub reference: SpectraHeader,
    /// Заголовок целевого скана
    pub target: SpectraHeader,
    pub data: SpectralData,
}

impl DataRow {
    pub fn new(
        wavelength: f32,
        reference_radiance: f32,
        target_radiance: f32,
        target_reflectance: f32,
    ) -> Self {
        Self {
            wavelength,
            reference_radiance,
            target_radiance,
            target_reflectance,
        }
    }
}

impl SpectralData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Собирает таблицу из готовых столбцов, проверяя равенство длин.
    pub fn from_columns(
        wavelength: Vec<f32>,
        reference_radiance: Vec<f32>,
        target_radiance: Vec<f32>,
        target_reflectance: Vec<f32>,
    ) -> SigResult<Self> {
        let n = wavelength.len();
        if reference_radiance.len() != n
            || target_radiance.len() != n
            || target_reflectance.len() != n
        {
            return Err(SigError::ColumnLengthMismatch {
                wavelength: n,
                reference: reference_radiance.len(),
                target: target_radiance.len(),
                reflectance: target_reflectance.len(),
            });
        }

        Ok(Self {
            wavelength,
            reference_radiance,
            target_radiance,
            target_reflectance,
        })
    }

    pub fn push(
        &mut self,
        row: DataRow,
    ) {
        self.wavelength.push(row.wavelength);
        self.reference_radiance.push(row.reference_radiance);
        self.target_radiance.push(row.target_radiance);
        self.target_reflectance.push(row.target_reflectance);
    }

    pub fn len(&self) -> usize {
        self.wavelength.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelength.is_empty()
    }

    pub fn wavelength(&self) -> &[f32] {
        &self.wavelength
    }

    pub fn reference_radiance(&self) -> &[f32] {
        &self.reference_radiance
    }

    pub fn target_radiance(&self) -> &[f32] {
        &self.target_radiance
    }

    pub fn target_reflectance(&self) -> &[f32] {
        &self.target_reflectance
    }

    /// Строка `i`, если она существует.
    pub fn row(
        &self,
        i: usize,
    ) -> Option<DataRow> {
        Some(DataRow {
            wavelength: *self.wavelength.get(i)?,
            reference_radiance: self.reference_radiance[i],
            target_radiance: self.target_radiance[i],
            target_reflectance: self.target_reflectance[i],
        })
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = DataRow> + '_ {
        (0..self.len()).map(move |i| DataRow {
            wavelength: self.wavelength[i],
            reference_radiance: self.reference_radiance[i],
            target_radiance: self.target_radiance[i],
            target_reflectance: self.target_reflectance[i],
        })
    }
}

impl FromIterator<DataRow> for SpectralData {
    fn from_iter<I: IntoIterator<Item = DataRow>>(iter: I) -> Self {
        let mut data = SpectralData::new();
        for row in iter {
            data.push(row);
        }
        data
    }
}

impl SigRecord {
    pub fn new(
        common: CommonHeader,
        reference: SpectraHeader,
        target: SpectraHeader,
        data: SpectralData,
    ) -> Self {
        Self {
            common,
            reference,
            target,
            data,
        }
    }

    /// Количество спектральных отсчётов.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn wavelength(&self) -> &[f32] {
        self.data.wavelength()
    }

    pub fn reference_radiance(&self) -> &[f32] {
        self.data.reference_radiance()
    }

    pub fn target_radiance(&self) -> &[f32] {
        self.data.target_radiance()
    }

    pub fn target_reflectance(&self) -> &[f32] {
        self.data.target_reflectance()
    }

    /// Ячейки памяти (reference, target).
    pub fn memory_slots(&self) -> (u32, u32) {
        (self.reference.memory_slot, self.target.memory_slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<DataRow> {
        (0..n)
            .map(|i| {
                let wl = 350.0 + i as f32 * 1.5;
                DataRow::new(wl, 1000.0 + i as f32, 800.0 + i as f32, 80.0)
            })
            .collect()
    }

    #[test]
    fn test_push_keeps_columns_aligned() {
        let mut data = SpectralData::new();
        for r in rows(5) {
            data.push(r);
        }

        assert_eq!(data.len(), 5);
        assert_eq!(data.wavelength().len(), 5);
        assert_eq!(data.reference_radiance().len(), 5);
        assert_eq!(data.target_radiance().len(), 5);
        assert_eq!(data.target_reflectance().len(), 5);
        assert_eq!(data.row(4), Some(rows(5)[4]));
        assert_eq!(data.row(5), None);
    }

    #[test]
    fn test_from_columns_rejects_mismatch() {
        let err = SpectralData::from_columns(vec![1.0, 2.0], vec![1.0], vec![1.0, 2.0], vec![
            1.0, 2.0,
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            SigError::ColumnLengthMismatch {
                wavelength: 2,
                reference: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_rows_iterator_matches_columns() {
        let data: SpectralData = rows(3).into_iter().collect();
        let back: Vec<DataRow> = data.rows().collect();
        assert_eq!(back, rows(3));
        assert_eq!(data.rows().len(), 3);
    }

    #[test]
    fn test_record_clone_is_independent() {
        let mut a = SigRecord::default();
        a.reference.memory_slot = 3;
        a.target.memory_slot = 4;
        a.data = rows(2).into_iter().collect();

        let mut b = a.clone();
        b.target.memory_slot = 99;
        b.data.push(DataRow::default());

        assert_eq!(a.memory_slots(), (3, 4));
        assert_eq!(b.memory_slots(), (3, 99));
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn test_default_record_is_empty() {
        let r = SigRecord::default();
        assert!(r.is_empty());
        assert_eq!(r.memory_slots(), (0, 0));
    }

    #[test]
    fn test_record_serializes_columns() {
        let mut r = SigRecord::default();
        r.target.memory_slot = 8;
        r.data = rows(2).into_iter().collect();

        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["target"]["memory_slot"], 8);
        assert_eq!(v["data"]["wavelength"].as_array().unwrap().len(), 2);
        assert_eq!(v["data"]["target_reflectance"][1], 80.0);
    }
}
