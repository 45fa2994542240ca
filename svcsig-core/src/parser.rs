use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use log::{debug, warn};
use svcsig_types::{
    CommonHeader, Instrument, SigError, SigRecord, SigResult, SpectraHeader, SpectralData,
    DETECTOR_COUNT, EXTERNAL_CHANNELS,
};

use crate::{
    format::{HeaderKey, KEY_DELIMITER, SIG_SIGNATURE},
    text::{
        lenient_f32, lenient_i16, lenient_u32, lenient_u8, parse_data_row, split_bracketed,
        split_fields, split_on_first, trim,
    },
};

/// Потоковый читатель SIG файлов.
///
/// Сигнатура проверяется при создании, остальной файл читается целиком
/// в [`SigReader::read_record`].
pub struct SigReader<R: Read> {
    reader: BufReader<R>,
    line_no: usize,
    report: ParseReport,
}

/// Сводка, накопленная [`SigReader`] в процессе чтения.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParseReport {
    /// Непустых строк заголовка, включая `data=`.
    pub header_lines: usize,
    /// Прочитанных строк таблицы данных.
    pub data_rows: usize,
    /// Встретилась ли строка `data=`.
    pub saw_data_marker: bool,
    /// Пропущенные неизвестные ключи в порядке появления.
    pub unrecognized: Vec<UnrecognizedKey>,
}

/// Неизвестный ключ заголовка и номер его строки (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedKey {
    pub line: usize,
    pub key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    ReadingHeader,
    ReadingData,
    Done,
}

/// Поля записи, собираемые до конца файла.
#[derive(Default)]
struct RecordParts {
    common: CommonHeader,
    reference: SpectraHeader,
    target: SpectraHeader,
    data: SpectralData,
}

impl ParseReport {
    /// `true`, если все ключи заголовка были распознаны.
    pub fn is_clean(&self) -> bool {
        self.unrecognized.is_empty()
    }

    /// Неизвестные ключи в виде нефатальных ошибок.
    pub fn warnings(&self) -> impl Iterator<Item = SigError> + '_ {
        self.unrecognized.iter().map(|u| SigError::UnrecognizedKey {
            key: u.key.clone(),
            line: u.line,
        })
    }
}

impl<R: Read> SigReader<R> {
    /// Создаёт читатель, проверяя первую строку на сигнатуру SIG.
    ///
    /// Поток, из которого не читается первая строка, тоже не SIG файл.
    pub fn new(inner: R) -> SigResult<Self> {
        let mut reader = BufReader::new(inner);
        let mut buf = Vec::new();

        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| SigError::not_sig_file(format!("cannot read input: {e}")))?;
        if n == 0 {
            return Err(SigError::not_sig_file("empty input"));
        }

        let first = String::from_utf8_lossy(&buf);
        let first = trim(&first);
        if first != SIG_SIGNATURE {
            return Err(SigError::not_sig_file(format!(
                "unexpected first line {first:?}"
            )));
        }

        Ok(Self {
            reader,
            line_no: 1,
            report: ParseReport::default(),
        })
    }

    /// Читает заголовок и таблицу данных до конца потока.
    ///
    /// Пустые строки пропускаются. Ошибка разделителя прерывает чтение,
    /// частично собранная запись при этом отбрасывается.
    pub fn read_record(mut self) -> SigResult<(SigRecord, ParseReport)> {
        let mut parts = RecordParts::default();
        let mut state = ParseState::ReadingHeader;
        let mut buf = Vec::new();

        while state != ParseState::Done {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                state = ParseState::Done;
                continue;
            }
            self.line_no += 1;
            let line_no = self.line_no;

            let text = String::from_utf8_lossy(&buf);
            let line = trim(&text);
            if line.is_empty() {
                continue;
            }

            state = match state {
                ParseState::ReadingHeader => {
                    self.report.header_lines += 1;
                    self.header_line(line, &mut parts)
                        .map_err(|e| e.at_line(line_no))?
                }
                ParseState::ReadingData => {
                    let row = parse_data_row(line).map_err(|e| e.at_line(line_no))?;
                    parts.data.push(row);
                    self.report.data_rows += 1;
                    ParseState::ReadingData
                }
                ParseState::Done => ParseState::Done,
            };
        }

        debug!(
            "sig parsed: {} header lines, {} data rows, {} unrecognized keys",
            self.report.header_lines,
            self.report.data_rows,
            self.report.unrecognized.len()
        );

        let record = SigRecord::new(parts.common, parts.reference, parts.target, parts.data);
        Ok((record, self.report))
    }

    /// Разбирает одну строку заголовка и возвращает следующее состояние.
    fn header_line(
        &mut self,
        line: &str,
        parts: &mut RecordParts,
    ) -> SigResult<ParseState> {
        let (key_text, value) = split_on_first(line, KEY_DELIMITER)?;

        let key = match key_text.parse::<HeaderKey>() {
            Ok(key) => key,
            Err(_) => {
                warn!(
                    "line {}: unrecognized header key {:?}, kept as extra",
                    self.line_no, key_text
                );
                self.report.unrecognized.push(UnrecognizedKey {
                    line: self.line_no,
                    key: key_text.to_string(),
                });
                parts
                    .common
                    .extra
                    .push((key_text.to_string(), value.to_string()));
                return Ok(ParseState::ReadingHeader);
            }
        };

        let RecordParts {
            common,
            reference,
            target,
            ..
        } = parts;

        match key {
            HeaderKey::Name => common.name = value.to_string(),
            HeaderKey::Instrument => common.instrument = parse_instrument(value)?,
            HeaderKey::Integration => {
                (reference.integration, target.integration) = detector_pair(value)?;
            }
            HeaderKey::ScanMethod => {
                let [r, t] = split_fields::<2>(value)?;
                reference.scan_method = r.to_string();
                target.scan_method = t.to_string();
            }
            HeaderKey::ScanCoadds => {
                (reference.scan_coadds, target.scan_coadds) = detector_pair(value)?;
            }
            HeaderKey::ScanTime => {
                let [r, t] = split_fields::<2>(value)?;
                reference.scan_time = lenient_f32(r);
                target.scan_time = lenient_f32(t);
            }
            HeaderKey::ScanSettings => {
                let [r, t] = split_fields::<2>(value)?;
                reference.scan_settings = r.to_string();
                target.scan_settings = t.to_string();
            }
            HeaderKey::ExternalDataSet1 => {
                (reference.external_data_set1, target.external_data_set1) = channel_pair(value)?;
            }
            HeaderKey::ExternalDataSet2 => {
                (reference.external_data_set2, target.external_data_set2) = channel_pair(value)?;
            }
            HeaderKey::ExternalDataDark => {
                let f = split_fields::<EXTERNAL_CHANNELS>(value)?;
                common.external_data_dark = std::array::from_fn(|i| lenient_i16(f[i]));
            }
            HeaderKey::ExternalDataMask => common.external_data_mask = lenient_u8(value),
            HeaderKey::Optic => {
                let [r, t] = split_fields::<2>(value)?;
                reference.optic = r.to_string();
                target.optic = t.to_string();
            }
            HeaderKey::Temp => {
                (reference.temp, target.temp) = detector_pair(value)?;
            }
            HeaderKey::Battery => {
                let [r, t] = split_fields::<2>(value)?;
                reference.battery = lenient_f32(r);
                target.battery = lenient_f32(t);
            }
            HeaderKey::Error => {
                let [r, t] = split_fields::<2>(value)?;
                reference.error = lenient_u32(r);
                target.error = lenient_u32(t);
            }
            HeaderKey::Units => {
                let [r, t] = split_fields::<2>(value)?;
                reference.units = r.to_string();
                target.units = t.to_string();
            }
            HeaderKey::Time => {
                let [r, t] = split_fields::<2>(value)?;
                reference.time = r.to_string();
                target.time = t.to_string();
            }
            HeaderKey::Longitude => {
                let [r, t] = split_fields::<2>(value)?;
                reference.longitude = r.to_string();
                target.longitude = t.to_string();
            }
            HeaderKey::Latitude => {
                let [r, t] = split_fields::<2>(value)?;
                reference.latitude = r.to_string();
                target.latitude = t.to_string();
            }
            HeaderKey::GpsTime => {
                let [r, t] = split_fields::<2>(value)?;
                reference.gpstime = r.to_string();
                target.gpstime = t.to_string();
            }
            HeaderKey::Comm => common.comm = value.to_string(),
            HeaderKey::MemorySlot => {
                let [r, t] = split_fields::<2>(value)?;
                reference.memory_slot = lenient_u32(r);
                target.memory_slot = lenient_u32(t);
            }
            HeaderKey::Factors => {
                let (values, comment) = split_bracketed(value, '[', ']');
                let [r, t, refl] = split_fields::<3>(values)?;
                common.factors.reference = lenient_f32(r);
                common.factors.target = lenient_f32(t);
                common.factors.reflectance = lenient_f32(refl);
                common.factors.comment = comment.to_string();
            }
            HeaderKey::Data => {
                self.report.saw_data_marker = true;
                return Ok(ParseState::ReadingData);
            }
        }

        Ok(ParseState::ReadingHeader)
    }
}

/// `model: serial (common name)`; скобки необязательны.
fn parse_instrument(value: &str) -> SigResult<Instrument> {
    let (model, rest) = split_on_first(value, ':')?;
    let (serial, common_name) = split_bracketed(rest, '(', ')');
    Ok(Instrument::new(model, trim(serial), common_name))
}

/// Три значения опорного скана, затем три значения целевого.
fn detector_pair(value: &str) -> SigResult<([f32; DETECTOR_COUNT], [f32; DETECTOR_COUNT])> {
    let f = split_fields::<{ 2 * DETECTOR_COUNT }>(value)?;
    Ok((
        std::array::from_fn(|i| lenient_f32(f[i])),
        std::array::from_fn(|i| lenient_f32(f[DETECTOR_COUNT + i])),
    ))
}

/// Восемь каналов опорного скана, затем восемь целевого.
fn channel_pair(value: &str) -> SigResult<([i16; EXTERNAL_CHANNELS], [i16; EXTERNAL_CHANNELS])> {
    let f = split_fields::<{ 2 * EXTERNAL_CHANNELS }>(value)?;
    Ok((
        std::array::from_fn(|i| lenient_i16(f[i])),
        std::array::from_fn(|i| lenient_i16(f[EXTERNAL_CHANNELS + i])),
    ))
}

/// Convenience: читает запись целиком, отбрасывая сводку.
pub fn read_sig<R: Read>(inner: R) -> SigResult<SigRecord> {
    SigReader::new(inner)?
        .read_record()
        .map(|(record, _)| record)
}

/// Читает SIG файл с диска.
///
/// Файл, который не удалось открыть, считается не-SIG файлом.
pub fn read_sig_file<P: AsRef<Path>>(path: P) -> SigResult<SigRecord> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| SigError::not_sig_file(format!("{}: {e}", path.display())))?;

    read_sig(file)
}

/// Разбирает SIG текст из памяти.
pub fn parse_sig_str(text: &str) -> SigResult<SigRecord> {
    read_sig(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use super::*;

    /// Поток, который открылся, но не читается.
    struct Unreadable;

    impl Read for Unreadable {
        fn read(
            &mut self,
            _buf: &mut [u8],
        ) -> io::Result<usize> {
            Err(io::Error::other("device gone"))
        }
    }

    const MINIMAL: &str = "/*** Spectra Vista SIG Data ***/\n\
        name= gr062113_000\n\
        instrument= HI: 1012113 (HR-1024i)\n\
        memory slot= 10, 11\n\
        data=\n\
        350.0  1000.0  800.0  80.0\n\
        351.5  1001.0  801.0  80.5\n";

    #[test]
    fn test_reader_minimal_file() {
        let (record, report) = SigReader::new(Cursor::new(MINIMAL))
            .unwrap()
            .read_record()
            .unwrap();

        assert_eq!(record.common.name, "gr062113_000");
        assert_eq!(record.common.instrument.model_number, "HI");
        assert_eq!(record.common.instrument.extended_serial_number, "1012113");
        assert_eq!(record.common.instrument.common_name, "HR-1024i");
        assert_eq!(record.memory_slots(), (10, 11));
        assert_eq!(record.len(), 2);
        assert_eq!(record.wavelength(), [350.0f32, 351.5].as_slice());

        assert_eq!(report.header_lines, 4);
        assert_eq!(report.data_rows, 2);
        assert!(report.saw_data_marker);
        assert!(report.is_clean());
    }

    #[test]
    fn test_signature_checked_on_open() {
        let result = SigReader::new(Cursor::new("name= x\ndata=\n"));
        assert!(matches!(result, Err(SigError::NotSigFile(_))));

        let result = SigReader::new(Cursor::new(""));
        assert!(matches!(result, Err(SigError::NotSigFile(_))));
    }

    #[test]
    fn test_signature_tolerates_crlf_and_padding() {
        let text = "  /*** Spectra Vista SIG Data ***/ \r\nname= a\r\ndata=\r\n1 2 3 4\r\n";
        let record = parse_sig_str(text).unwrap();
        assert_eq!(record.common.name, "a");
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_missing_equals_is_fatal_with_line() {
        let text = "/*** Spectra Vista SIG Data ***/\nname= a\n\nthis line has no delimiter\n";
        match parse_sig_str(text) {
            Err(SigError::MissingDelimiter {
                delimiter, line, ..
            }) => {
                assert_eq!(delimiter, '=');
                assert_eq!(line, Some(4));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_too_few_fields_is_fatal() {
        let text = "/*** Spectra Vista SIG Data ***/\nintegration= 1, 2, 3\n";
        assert!(matches!(
            parse_sig_str(text),
            Err(SigError::MissingDelimiter {
                delimiter: ',',
                line: Some(2),
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_key_kept_and_reported() {
        let text = "/*** Spectra Vista SIG Data ***/\n\
            name= a\n\
            firmware= 1.2.3\n\
            comm= field day\n\
            data=\n";
        let (record, report) = SigReader::new(text.as_bytes())
            .unwrap()
            .read_record()
            .unwrap();

        assert_eq!(record.common.name, "a");
        assert_eq!(record.common.comm, "field day");
        assert_eq!(record.common.extra_value("firmware"), Some("1.2.3"));
        assert_eq!(
            report.unrecognized,
            vec![UnrecognizedKey {
                line: 3,
                key: "firmware".into()
            }]
        );

        let warnings: Vec<SigError> = report.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert!(!warnings[0].is_fatal());
    }

    #[test]
    fn test_instrument_without_common_name() {
        let i = parse_instrument("PSR: 1234").unwrap();
        assert_eq!(i, Instrument::new("PSR", "1234", ""));
        assert!(parse_instrument("no colon").is_err());
    }

    #[test]
    fn test_no_data_marker_gives_empty_table() {
        let text = "/*** Spectra Vista SIG Data ***/\nname= a\n";
        let (record, report) = SigReader::new(text.as_bytes())
            .unwrap()
            .read_record()
            .unwrap();
        assert!(record.is_empty());
        assert!(!report.saw_data_marker);
    }

    #[test]
    fn test_read_sig_file_missing_is_not_sig() {
        let result = read_sig_file("/nonexistent/dir/file.sig");
        assert!(matches!(result, Err(SigError::NotSigFile(_))));
    }

    #[test]
    fn test_unreadable_stream_is_not_sig() {
        assert!(matches!(
            SigReader::new(Unreadable),
            Err(SigError::NotSigFile(_))
        ));
    }
}
