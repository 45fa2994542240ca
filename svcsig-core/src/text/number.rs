//! Снисходительный разбор чисел.
//!
//! Берётся самый длинный числовой префикс токена; если числа нет, результат
//! равен нулю. Значения вне диапазона целевого типа насыщаются. Для
//! вещественных чисел принимаются также `inf`, `infinity` и `nan` в любом
//! регистре, как у `atof`.

/// Длина числового префикса `[+-]digits[.digits][(e|E)[+-]digits]`.
fn float_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let mut i = 0;

    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        i = j;
    }

    if digits == 0 {
        return 0;
    }

    // Экспонента учитывается только если за ней есть цифры
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

/// Длина префикса `[+-]digits`.
fn int_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let mut i = 0;

    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }

    if i == start {
        0
    } else {
        i
    }
}

/// `[+-](inf|infinity|nan)` без учёта регистра; хвост после слова игнорируется.
fn special_f32(s: &str) -> Option<f32> {
    let (negative, body) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let starts_with =
        |word: &str| body.get(..word.len()).is_some_and(|h| h.eq_ignore_ascii_case(word));

    let value = if starts_with("inf") {
        f32::INFINITY
    } else if starts_with("nan") {
        f32::NAN
    } else {
        return None;
    };

    Some(if negative { -value } else { value })
}

pub fn lenient_f32(s: &str) -> f32 {
    let s = s.trim_start();
    if let Some(v) = special_f32(s) {
        return v;
    }

    let n = float_prefix_len(s);
    if n == 0 {
        return 0.0;
    }
    // "5." и ".5" Rust тоже разбирает
    s[..n].parse().unwrap_or(0.0)
}

pub fn lenient_int(s: &str) -> i64 {
    let s = s.trim_start();
    let n = int_prefix_len(s);
    if n == 0 {
        return 0;
    }

    match s[..n].parse::<i64>() {
        Ok(v) => v,
        // Переполнение: насыщаем по знаку
        Err(_) if s.starts_with('-') => i64::MIN,
        Err(_) => i64::MAX,
    }
}

pub fn lenient_i16(s: &str) -> i16 {
    lenient_int(s).clamp(i16::MIN as i64, i16::MAX as i64) as i16
}

pub fn lenient_u8(s: &str) -> u8 {
    lenient_int(s).clamp(0, u8::MAX as i64) as u8
}

pub fn lenient_u32(s: &str) -> u32 {
    lenient_int(s).clamp(0, u32::MAX as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_f32() {
        assert_eq!(lenient_f32("1.5"), 1.5);
        assert_eq!(lenient_f32("  -2.25"), -2.25);
        assert_eq!(lenient_f32("+3"), 3.0);
        assert_eq!(lenient_f32("1e3"), 1000.0);
        assert_eq!(lenient_f32("2.5E-1"), 0.25);
        assert_eq!(lenient_f32(".5"), 0.5);
        assert_eq!(lenient_f32("5."), 5.0);
    }

    #[test]
    fn test_lenient_f32_prefix_and_garbage() {
        assert_eq!(lenient_f32("12.5abc"), 12.5);
        assert_eq!(lenient_f32("7e"), 7.0);
        assert_eq!(lenient_f32("7e+"), 7.0);
        assert_eq!(lenient_f32("abc"), 0.0);
        assert_eq!(lenient_f32(""), 0.0);
        assert_eq!(lenient_f32("-"), 0.0);
        assert_eq!(lenient_f32("."), 0.0);
    }

    #[test]
    fn test_lenient_f32_special_tokens() {
        assert_eq!(lenient_f32("inf"), f32::INFINITY);
        assert_eq!(lenient_f32("-inf"), f32::NEG_INFINITY);
        assert_eq!(lenient_f32("+Infinity"), f32::INFINITY);
        assert_eq!(lenient_f32("INFx"), f32::INFINITY);
        assert!(lenient_f32("nan").is_nan());
        assert!(lenient_f32(" -NaN").is_nan());
        assert_eq!(lenient_f32("in"), 0.0);
        assert_eq!(lenient_f32("na"), 0.0);
    }

    #[test]
    fn test_lenient_f32_overflow_is_infinite() {
        assert_eq!(lenient_f32("1e39"), f32::INFINITY);
        assert_eq!(lenient_f32("-1e39"), f32::NEG_INFINITY);
        // То, что пишет `Display`, читается обратно тем же значением
        assert_eq!(lenient_f32(&f32::INFINITY.to_string()), f32::INFINITY);
        assert_eq!(lenient_f32(&f32::NEG_INFINITY.to_string()), f32::NEG_INFINITY);
        assert!(lenient_f32(&f32::NAN.to_string()).is_nan());
    }

    #[test]
    fn test_lenient_int() {
        assert_eq!(lenient_int("42"), 42);
        assert_eq!(lenient_int(" -7"), -7);
        assert_eq!(lenient_int("12.9"), 12);
        assert_eq!(lenient_int("x1"), 0);
        assert_eq!(lenient_int("99999999999999999999999"), i64::MAX);
        assert_eq!(lenient_int("-99999999999999999999999"), i64::MIN);
    }

    #[test]
    fn test_narrowing_saturates() {
        assert_eq!(lenient_i16("40000"), i16::MAX);
        assert_eq!(lenient_i16("-40000"), i16::MIN);
        assert_eq!(lenient_i16("-12"), -12);
        assert_eq!(lenient_u8("255"), 255);
        assert_eq!(lenient_u8("300"), 255);
        assert_eq!(lenient_u8("-1"), 0);
        assert_eq!(lenient_u32("-5"), 0);
        assert_eq!(lenient_u32("4294967296"), u32::MAX);
        assert_eq!(lenient_u32("17"), 17);
    }
}
