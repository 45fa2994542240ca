//! Пример: запись SIG файла через SigWriter
//!
//! Демонстрирует:
//! - заполнение заголовков опорного и целевого сканов
//! - генерацию синтетического спектра белой панели
//! - запись файла и подсчёт строк

use std::fs::File;

use svcsig_core::SigWriter;
use svcsig_types::{DataRow, Instrument, SigRecord};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_path = "svcsig-core/test_output.sig";

    // --- Заголовки ---
    let mut record = SigRecord::default();
    record.common.name = "synthetic_000".into();
    record.common.instrument = Instrument::new("HI", "1012113", "HR-1024i");
    record.common.factors.reference = 1.0;
    record.common.factors.target = 1.0;
    record.common.factors.reflectance = 1.0;

    for (header, slot) in [(&mut record.reference, 10), (&mut record.target, 11)] {
        header.integration = [10.0, 20.0, 20.0];
        header.scan_coadds = [50.0, 10.0, 10.0];
        header.units = "Radiance".into();
        header.time = "06/21/2013 11:23:41 AM".into();
        header.longitude = "07739.1234W".into();
        header.latitude = "3858.5678N".into();
        header.gpstime = "152341.000".into();
        header.memory_slot = slot;
    }

    // --- Синтетический спектр: 350..2500 нм, шаг 2 нм ---
    record.data = (0..1076)
        .map(|i| {
            let wl = 350.0 + i as f32 * 2.0;
            let reference = 3000.0 * (-((wl - 700.0) / 600.0).powi(2)).exp();
            let target = reference * 0.42;
            DataRow::new(wl, reference, target, 100.0 * target / reference)
        })
        .collect();

    // --- SigWriter ---
    let file = File::create(output_path)?;
    let mut writer = SigWriter::new(file);
    writer.write_record(&record)?;
    writer.finish()?;

    println!("✓ Записано: {output_path}");
    println!("  Slots : {:?}", record.memory_slots());
    println!("  Bands : {}", record.len());

    Ok(())
}
