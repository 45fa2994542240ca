//! Библиотека текстового формата SVC SIG
//!
//! Разбор и запись файлов спектрорадиометров Spectra Vista (HR-1024i,
//! HR-768i): сигнатура, заголовок `key= value`, таблица данных.
//!
//! # Быстрый старт
//!
//! ```no_run
//! use svcsig_core::{read_sig_file, write_sig_file};
//!
//! let record = read_sig_file("gr062113_000.sig")?;
//! println!("slots: {:?}, bands: {}", record.memory_slots(), record.len());
//!
//! write_sig_file(&record, "copy.sig")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod format;
pub mod parser;
pub mod text;
pub mod writer;

pub use format::*;
pub use parser::*;
pub use writer::*;

/// Версия библиотеки.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        assert_eq!(SIG_SIGNATURE, "/*** Spectra Vista SIG Data ***/");
        assert_eq!(HeaderKey::ALL.len(), 24);
        assert!(!VERSION.is_empty());
    }
}
