//! Текстовые дампы заголовков и таблицы данных для отладки.
//!
//! Формат дампа не является форматом файла и не разбирается обратно.

use std::fmt::{self, Display, Formatter};

use crate::{CommonHeader, SigRecord, SpectraHeader, SpectralData};

/// Заголовок скана с подписью ("Reference", "Target").
pub struct LabeledHeader<'a> {
    label: &'a str,
    header: &'a SpectraHeader,
}

/// Таблица данных с фиксированной шириной столбцов.
pub struct DataTable<'a> {
    data: &'a SpectralData,
}

/// Все три заголовка записи без таблицы данных.
pub struct HeadersDump<'a> {
    record: &'a SigRecord,
}

impl SpectraHeader {
    pub fn display_as<'a>(
        &'a self,
        label: &'a str,
    ) -> LabeledHeader<'a> {
        LabeledHeader {
            label,
            header: self,
        }
    }
}

impl SpectralData {
    pub fn table(&self) -> DataTable<'_> {
        DataTable { data: self }
    }
}

impl SigRecord {
    pub fn headers(&self) -> HeadersDump<'_> {
        HeadersDump { record: self }
    }
}

fn write_list<T: Display>(
    f: &mut Formatter<'_>,
    values: &[T],
) -> fmt::Result {
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, " {v}")?;
    }
    writeln!(f)
}

impl Display for CommonHeader {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Common Header:")?;
        writeln!(f, "\tName: {}", self.name)?;
        writeln!(f, "\tInstrument: {}", self.instrument)?;
        write!(f, "\tExternal Dark Data:")?;
        write_list(f, &self.external_data_dark)?;
        writeln!(f, "\tExternal Dark Mask: {}", self.external_data_mask)?;
        writeln!(f, "\tComm: {}", self.comm)?;
        write!(f, "\tFactors:")?;
        write_list(f, &self.factors.values())?;
        writeln!(f, "\tFactors Comment: {}", self.factors.comment)?;
        for (key, value) in &self.extra {
            writeln!(f, "\t[{key}]: {value}")?;
        }
        write!(f, "End of Common Header")
    }
}

impl Display for LabeledHeader<'_> {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        let h = self.header;

        writeln!(f, "{} Spectra Header:", self.label)?;
        write!(f, "\tIntegration:")?;
        write_list(f, &h.integration)?;
        writeln!(f, "\tScan Method: {}", h.scan_method)?;
        write!(f, "\tScan Coadds:")?;
        write_list(f, &h.scan_coadds)?;
        writeln!(f, "\tScan Time: {}", h.scan_time)?;
        writeln!(f, "\tScan Settings: {}", h.scan_settings)?;
        write!(f, "\tExternal Data Set 1:")?;
        write_list(f, &h.external_data_set1)?;
        write!(f, "\tExternal Data Set 2:")?;
        write_list(f, &h.external_data_set2)?;
        writeln!(f, "\tOptic: {}", h.optic)?;
        write!(f, "\tTemp:")?;
        write_list(f, &h.temp)?;
        writeln!(f, "\tBattery: {}", h.battery)?;
        writeln!(f, "\tError: {}", h.error)?;
        writeln!(f, "\tUnits: {}", h.units)?;
        writeln!(f, "\tTime: {}", h.time)?;
        writeln!(f, "\tLongitude: {}", h.longitude)?;
        writeln!(f, "\tLatitude: {}", h.latitude)?;
        writeln!(f, "\tGPS Time: {}", h.gpstime)?;
        writeln!(f, "\tMemory Slot: {}", h.memory_slot)?;
        write!(f, "End of {} Spectra Header", self.label)
    }
}

impl Display for SpectraHeader {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        self.display_as("Undefined").fmt(f)
    }
}

impl Display for DataTable<'_> {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "Wavelength  Reference   Target      Reflectance")?;
        for row in self.data.rows() {
            write!(
                f,
                "\n{:>12.2}{:>12.3}{:>12.3}{:>12.3}",
                row.wavelength, row.reference_radiance, row.target_radiance, row.target_reflectance
            )?;
        }
        Ok(())
    }
}

impl Display for HeadersDump<'_> {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        let r = self.record;
        write!(
            f,
            "{}\n\n{}\n\n{}",
            r.common,
            r.reference.display_as("Reference"),
            r.target.display_as("Target")
        )
    }
}

impl Display for SigRecord {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}\n\n\n{}", self.headers(), self.data.table())
    }
}
