use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::debug;
use svcsig_types::{SigError, SigRecord, SigResult};

use crate::format::{HeaderKey, DATA_SEPARATOR, FIELD_SEPARATOR, SIG_SIGNATURE};

/// Потоковый писатель SIG файлов.
pub struct SigWriter<W: Write> {
    writer: BufWriter<W>,
    records_written: u64,
}

impl<W: Write> SigWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::new(inner),
            records_written: 0,
        }
    }

    /// Записывает запись целиком: сигнатуру, заголовок, `data=` и таблицу.
    pub fn write_record(
        &mut self,
        record: &SigRecord,
    ) -> SigResult<()> {
        let w = &mut self.writer;
        let common = &record.common;
        let (r, t) = (&record.reference, &record.target);

        writeln!(w, "{SIG_SIGNATURE}")?;

        for key in HeaderKey::ALL {
            match key {
                HeaderKey::Name => write_line(w, key, [&common.name])?,
                HeaderKey::Instrument => write_line(w, key, [&common.instrument])?,
                HeaderKey::Integration => {
                    write_line(w, key, r.integration.iter().chain(&t.integration))?
                }
                HeaderKey::ScanMethod => write_line(w, key, [&r.scan_method, &t.scan_method])?,
                HeaderKey::ScanCoadds => {
                    write_line(w, key, r.scan_coadds.iter().chain(&t.scan_coadds))?
                }
                HeaderKey::ScanTime => write_line(w, key, [r.scan_time, t.scan_time])?,
                HeaderKey::ScanSettings => {
                    write_line(w, key, [&r.scan_settings, &t.scan_settings])?
                }
                HeaderKey::ExternalDataSet1 => write_line(
                    w,
                    key,
                    r.external_data_set1.iter().chain(&t.external_data_set1),
                )?,
                HeaderKey::ExternalDataSet2 => write_line(
                    w,
                    key,
                    r.external_data_set2.iter().chain(&t.external_data_set2),
                )?,
                HeaderKey::ExternalDataDark => write_line(w, key, &common.external_data_dark)?,
                HeaderKey::ExternalDataMask => write_line(w, key, [common.external_data_mask])?,
                HeaderKey::Optic => write_line(w, key, [&r.optic, &t.optic])?,
                HeaderKey::Temp => write_line(w, key, r.temp.iter().chain(&t.temp))?,
                HeaderKey::Battery => write_line(w, key, [r.battery, t.battery])?,
                HeaderKey::Error => write_line(w, key, [r.error, t.error])?,
                HeaderKey::Units => write_line(w, key, [&r.units, &t.units])?,
                HeaderKey::Time => write_line(w, key, [&r.time, &t.time])?,
                HeaderKey::Longitude => write_line(w, key, [&r.longitude, &t.longitude])?,
                HeaderKey::Latitude => write_line(w, key, [&r.latitude, &t.latitude])?,
                HeaderKey::GpsTime => write_line(w, key, [&r.gpstime, &t.gpstime])?,
                HeaderKey::Comm => write_line(w, key, [&common.comm])?,
                HeaderKey::MemorySlot => write_line(w, key, [r.memory_slot, t.memory_slot])?,
                HeaderKey::Factors => {
                    write!(w, "{key}=")?;
                    write_values(w, common.factors.values())?;
                    if !common.factors.comment.is_empty() {
                        write!(w, " [{}]", common.factors.comment)?;
                    }
                    writeln!(w)?;
                }
                // Неизвестные ключи идут перед `data=` в порядке чтения
                HeaderKey::Data => {
                    for (extra_key, value) in &common.extra {
                        writeln!(w, "{extra_key}= {value}")?;
                    }
                    writeln!(w, "{key}=")?;
                }
            }
        }

        for row in record.data.rows() {
            writeln!(
                w,
                "{}{DATA_SEPARATOR}{}{DATA_SEPARATOR}{}{DATA_SEPARATOR}{}",
                row.wavelength, row.reference_radiance, row.target_radiance, row.target_reflectance
            )?;
        }

        self.records_written += 1;
        debug!(
            "sig written: {} extra keys, {} data rows",
            common.extra.len(),
            record.len()
        );

        Ok(())
    }

    /// Количество записанных записей.
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Сбрасывает буфер и возвращает внутренний поток.
    pub fn finish(self) -> SigResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| SigError::Io(e.into_error()))
    }
}

/// `key= v1, v2, ...`
fn write_line<W, I>(
    w: &mut W,
    key: HeaderKey,
    values: I,
) -> SigResult<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    write!(w, "{key}=")?;
    write_values(w, values)?;
    writeln!(w)?;
    Ok(())
}

fn write_values<W, I>(
    w: &mut W,
    values: I,
) -> SigResult<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    for (i, v) in values.into_iter().enumerate() {
        if i == 0 {
            write!(w, " {v}")?;
        } else {
            write!(w, "{FIELD_SEPARATOR}{v}")?;
        }
    }
    Ok(())
}

/// Convenience: записывает одну запись в поток.
pub fn write_sig<W: Write>(
    record: &SigRecord,
    inner: W,
) -> SigResult<()> {
    let mut writer = SigWriter::new(inner);
    writer.write_record(record)?;
    writer.finish()?.flush()?;
    Ok(())
}

/// Создаёт (или перезаписывает) файл по `path`.
pub fn write_sig_file<P: AsRef<Path>>(
    record: &SigRecord,
    path: P,
) -> SigResult<()> {
    let file = File::create(path)?;
    write_sig(record, file)
}

pub fn to_sig_string(record: &SigRecord) -> SigResult<String> {
    let mut buf = Vec::new();
    write_sig(record, &mut buf)?;
    // Все поля записи уже строки UTF-8
    String::from_utf8(buf)
        .map_err(|e| SigError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
