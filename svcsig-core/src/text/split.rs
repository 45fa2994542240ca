use svcsig_types::{DataRow, SigError, SigResult};

use super::number::lenient_f32;
use crate::format::FIELD_DELIMITER;

/// Символы, которые срезаются по краям полей
pub const TRIM_CHARS: [char; 4] = [' ', '\t', '\r', '\n'];

/// Срезает пробелы, табуляции, CR и LF по краям строки.
pub fn trim(s: &str) -> &str {
    s.trim_matches(&TRIM_CHARS[..])
}

/// Делит строку по первому вхождению `delimiter`, обе части обрезаются.
///
/// Возвращает [`SigError::MissingDelimiter`], если разделителя нет.
pub fn split_on_first(
    s: &str,
    delimiter: char,
) -> SigResult<(&str, &str)> {
    s.split_once(delimiter)
        .map(|(left, right)| (trim(left), trim(right)))
        .ok_or_else(|| SigError::missing_delimiter(delimiter, s))
}

/// Делит строку по первому пробелу или табуляции.
pub fn split_whitespace_first(s: &str) -> SigResult<(&str, &str)> {
    match s.find([' ', '\t']) {
        Some(loc) => Ok((trim(&s[..loc]), trim(&s[loc + 1..]))),
        None => Err(SigError::missing_delimiter(' ', s)),
    }
}

/// Извлекает текст между `open` и первым `close` после него.
///
/// Возвращает `(outside, inside)`, где `outside` это обрезанный текст до
/// `open`. Если какой-либо скобки нет, возвращает `(s, "")`: комментарий в
/// скобках необязателен.
pub fn split_bracketed(
    s: &str,
    open: char,
    close: char,
) -> (&str, &str) {
    let Some(loc_open) = s.find(open) else {
        return (s, "");
    };
    let inner_start = loc_open + open.len_utf8();
    let Some(rel_close) = s[inner_start..].find(close) else {
        return (s, "");
    };

    let inside = &s[inner_start..inner_start + rel_close];
    (trim(&s[..loc_open]), trim(inside))
}

/// Делит значение на `N` полей по [`FIELD_DELIMITER`].
///
/// Первые `N - 1` полей отделяются по первой запятой, последнее поле
/// забирает остаток строки целиком.
pub fn split_fields<const N: usize>(s: &str) -> SigResult<[&str; N]> {
    let mut out = [""; N];
    let mut rest = trim(s);

    if N == 0 {
        return Ok(out);
    }

    for slot in out.iter_mut().take(N - 1) {
        let (field, tail) = split_on_first(rest, FIELD_DELIMITER)?;
        *slot = field;
        rest = tail;
    }
    out[N - 1] = rest;

    Ok(out)
}

/// Разбирает строку таблицы данных: четыре числа через пробельные символы.
///
/// Нечисловые токены дают `0`.
pub fn parse_data_row(s: &str) -> SigResult<DataRow> {
    let line = trim(s);
    let (wavelength, rest) = split_whitespace_first(line)?;
    let (reference, rest) = split_whitespace_first(rest)?;
    let (target, reflectance) = split_whitespace_first(rest)?;

    Ok(DataRow::new(
        lenient_f32(wavelength),
        lenient_f32(reference),
        lenient_f32(target),
        lenient_f32(reflectance),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim() {
        assert_eq!(trim("  a b \t\r\n"), "a b");
        assert_eq!(trim("\t\t"), "");
        assert_eq!(trim(""), "");
        assert_eq!(trim("x"), "x");
    }

    #[test]
    fn test_split_on_first() {
        assert_eq!(split_on_first("name= gr062113", '=').unwrap(), ("name", "gr062113"));
        assert_eq!(split_on_first("a=b=c", '=').unwrap(), ("a", "b=c"));
        assert_eq!(split_on_first("data=", '=').unwrap(), ("data", ""));
    }

    #[test]
    fn test_split_on_first_missing() {
        match split_on_first("no delimiter here", ',') {
            Err(SigError::MissingDelimiter {
                delimiter, input, ..
            }) => {
                assert_eq!(delimiter, ',');
                assert_eq!(input, "no delimiter here");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_split_bracketed() {
        let (outside, inside) = split_bracketed("1.0, 2.0, 3.0 [note]", '[', ']');
        assert_eq!(outside, "1.0, 2.0, 3.0");
        assert_eq!(inside, "note");

        let (outside, inside) = split_bracketed("1012113 (HR-1024i)", '(', ')');
        assert_eq!(outside, "1012113");
        assert_eq!(inside, "HR-1024i");
    }

    #[test]
    fn test_split_bracketed_absent_is_noop() {
        assert_eq!(split_bracketed("1.0, 2.0, 3.0", '[', ']'), ("1.0, 2.0, 3.0", ""));
        assert_eq!(split_bracketed("1.0 [unterminated", '[', ']'), ("1.0 [unterminated", ""));
        assert_eq!(split_bracketed("1.0 ] [", '[', ']'), ("1.0 ] [", ""));
    }

    #[test]
    fn test_split_bracketed_comment_with_commas() {
        let (outside, inside) = split_bracketed(
            "1.000000, 1.000000, 1.000000 [Detector: Si,Overlap: 0,0]",
            '[',
            ']',
        );
        assert_eq!(outside, "1.000000, 1.000000, 1.000000");
        assert_eq!(inside, "Detector: Si,Overlap: 0,0");
    }

    #[test]
    fn test_split_fields_order() {
        let [a, b, c, d, e, f] = split_fields::<6>("10,20, 30 ,40,50,60").unwrap();
        assert_eq!([a, b, c, d, e, f], ["10", "20", "30", "40", "50", "60"]);
    }

    #[test]
    fn test_split_fields_last_takes_remainder() {
        let [a, b] = split_fields::<2>("AI, FI, extra").unwrap();
        assert_eq!(a, "AI");
        assert_eq!(b, "FI, extra");
    }

    #[test]
    fn test_split_fields_too_few() {
        assert!(split_fields::<3>("1, 2").is_err());
        assert!(split_fields::<2>("alone").is_err());
        assert_eq!(split_fields::<1>("alone").unwrap(), ["alone"]);
    }

    #[test]
    fn test_parse_data_row() {
        let row = parse_data_row("338.5  1234.56  987.65  80.01").unwrap();
        assert_eq!(row.wavelength, 338.5);
        assert_eq!(row.reference_radiance, 1234.56);
        assert_eq!(row.target_radiance, 987.65);
        assert_eq!(row.target_reflectance, 80.01);
    }

    #[test]
    fn test_parse_data_row_tabs_and_garbage() {
        let row = parse_data_row("\t400.0\t1.0 \t xyz  2.5\r\n").unwrap();
        assert_eq!(row.wavelength, 400.0);
        assert_eq!(row.reference_radiance, 1.0);
        assert_eq!(row.target_radiance, 0.0);
        assert_eq!(row.target_reflectance, 2.5);
    }

    #[test]
    fn test_parse_data_row_too_few_columns() {
        assert!(matches!(
            parse_data_row("400.0 1.0 2.0"),
            Err(SigError::MissingDelimiter { .. })
        ));
        assert!(parse_data_row("400.0").is_err());
    }
}
