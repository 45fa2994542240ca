//! Разбор координат и GPS-времени из заголовка SIG.
//!
//! Прибор пишет координаты как `DDDmm.mmmmC`: градусы, две цифры целых минут,
//! дробная часть минут и буква квадранта (`E`/`W` для долготы, `N`/`S` для
//! широты). Пробелы между частями допускаются. GPS-время имеет вид
//! `HHmmSS.SSS`.

use serde::{Deserialize, Serialize};

use crate::{SigError, SigResult};

/// Какая координата разбирается
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Longitude,
    Latitude,
}

/// Буква квадранта в конце координаты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quadrant {
    North,
    South,
    East,
    West,
}

/// Координата, разложенная на градусы, минуты и секунды.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sexagesimal {
    pub quadrant: Quadrant,
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl Axis {
    pub fn field_name(&self) -> &'static str {
        match self {
            Axis::Longitude => "longitude",
            Axis::Latitude => "latitude",
        }
    }

    fn max_degrees(&self) -> u32 {
        match self {
            Axis::Longitude => 180,
            Axis::Latitude => 90,
        }
    }
}

impl Quadrant {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Quadrant::North),
            'S' => Some(Quadrant::South),
            'E' => Some(Quadrant::East),
            'W' => Some(Quadrant::West),
            _ => None,
        }
    }

    /// +1 для `N`/`E`, −1 для `S`/`W`
    pub fn sign(&self) -> f64 {
        match self {
            Quadrant::North | Quadrant::East => 1.0,
            Quadrant::South | Quadrant::West => -1.0,
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            Quadrant::North | Quadrant::South => Axis::Latitude,
            Quadrant::East | Quadrant::West => Axis::Longitude,
        }
    }
}

impl Sexagesimal {
    /// Десятичные градусы со знаком квадранта.
    pub fn to_decimal(&self) -> f64 {
        let magnitude =
            self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0;
        self.quadrant.sign() * magnitude
    }
}

/// Разбирает координату `DDDmm.mmmmC`.
pub fn parse_sexagesimal(
    value: &str,
    axis: Axis,
) -> SigResult<Sexagesimal> {
    let field = axis.field_name();
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();

    let quadrant_char = compact
        .chars()
        .last()
        .ok_or_else(|| SigError::malformed_geodetic(field, value, "empty value"))?;

    let quadrant = Quadrant::from_char(quadrant_char).ok_or_else(|| {
        SigError::malformed_geodetic(
            field,
            value,
            format!("unknown quadrant {quadrant_char:?}"),
        )
    })?;

    if quadrant.axis() != axis {
        return Err(SigError::malformed_geodetic(
            field,
            value,
            format!("quadrant {quadrant_char:?} does not belong to {field}"),
        ));
    }

    let numeric = &compact[..compact.len() - quadrant_char.len_utf8()];
    let (whole, fraction) = numeric.split_once('.').unwrap_or((numeric, ""));

    if whole.len() < 2 {
        return Err(SigError::malformed_geodetic(
            field,
            value,
            "need at least two digits of whole minutes",
        ));
    }
    if !is_digits(whole) || !is_digits(fraction) {
        return Err(SigError::malformed_geodetic(
            field,
            value,
            "non-digit characters in numeric part",
        ));
    }

    let (deg_str, min_str) = whole.split_at(whole.len() - 2);
    let degrees: u32 = if deg_str.is_empty() {
        0
    } else {
        deg_str.parse().map_err(|e| {
            SigError::malformed_geodetic(field, value, format!("degrees: {e}"))
        })?
    };
    let minutes: u32 = min_str.parse().map_err(|e| {
        SigError::malformed_geodetic(field, value, format!("minutes: {e}"))
    })?;

    if minutes >= 60 {
        return Err(SigError::malformed_geodetic(
            field,
            value,
            format!("minutes out of range: {minutes}"),
        ));
    }
    if degrees > axis.max_degrees() {
        return Err(SigError::malformed_geodetic(
            field,
            value,
            format!("degrees out of range: {degrees}"),
        ));
    }

    Ok(Sexagesimal {
        quadrant,
        degrees,
        minutes,
        seconds: fraction_of(fraction) * 60.0,
    })
}

/// Десятичные градусы со знаком (`E`/`N` положительные, `W`/`S` отрицательные).
pub fn decimal_degrees(
    value: &str,
    axis: Axis,
) -> SigResult<f64> {
    parse_sexagesimal(value, axis).map(|s| s.to_decimal())
}

/// GPS-время `HHmmSS.SSS` в десятичных часах.
pub fn decimal_gps_hours(value: &str) -> SigResult<f64> {
    const FIELD: &str = "gpstime";

    let v = value.trim();
    if v.is_empty() {
        return Err(SigError::malformed_geodetic(FIELD, value, "empty value"));
    }

    let (whole, fraction) = v.split_once('.').unwrap_or((v, ""));
    if whole.len() < 6 {
        return Err(SigError::malformed_geodetic(
            FIELD,
            value,
            "expected HHmmSS digits",
        ));
    }
    if !is_digits(whole) || !is_digits(fraction) {
        return Err(SigError::malformed_geodetic(
            FIELD,
            value,
            "non-digit characters",
        ));
    }

    let (hh, rest) = whole.split_at(whole.len() - 4);
    let (mm, ss) = rest.split_at(2);

    let hours: f64 = hh
        .parse()
        .map_err(|e| SigError::malformed_geodetic(FIELD, value, format!("hours: {e}")))?;
    let minutes: f64 = mm
        .parse()
        .map_err(|e| SigError::malformed_geodetic(FIELD, value, format!("minutes: {e}")))?;
    let seconds: f64 = ss
        .parse::<f64>()
        .map_err(|e| SigError::malformed_geodetic(FIELD, value, format!("seconds: {e}")))?
        + fraction_of(fraction);

    if hours >= 24.0 || minutes >= 60.0 || seconds >= 60.0 {
        return Err(SigError::malformed_geodetic(
            FIELD,
            value,
            "time of day out of range",
        ));
    }

    Ok(hours + minutes / 60.0 + seconds / 3600.0)
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// `"1234"` -> 0.1234
fn fraction_of(digits: &str) -> f64 {
    if digits.is_empty() {
        return 0.0;
    }
    format!("0.{digits}").parse().unwrap_or(0.0)
}
