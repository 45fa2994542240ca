//! Лексический уровень формата SIG: обрезка, разбиение по разделителям,
//! разбор строк таблицы данных и снисходительный разбор чисел.

pub mod number;
pub mod split;

pub use number::*;
pub use split::*;
