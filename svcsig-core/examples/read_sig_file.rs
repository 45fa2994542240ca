//! Пример: чтение SIG файла через SigReader
//!
//! Демонстрирует:
//! - проверку сигнатуры при открытии
//! - сводку разбора (неизвестные ключи, число строк)
//! - десятичные координаты и GPS-время

use std::fs::File;

use svcsig_core::SigReader;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "svcsig-core/test_output.sig".to_string());

    // --- SigReader проверяет сигнатуру при открытии ---
    let file = File::open(&input_path)?;
    let reader = match SigReader::new(file) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("✗ Signature check failed: {e}");
            return Err(Box::new(e));
        }
    };

    let (record, report) = reader.read_record()?;

    println!("✓ Parsed {input_path}");
    println!("  Name         : {}", record.common.name);
    println!("  Instrument   : {}", record.common.instrument);
    println!("  Memory slots : {:?}", record.memory_slots());
    println!("  Header lines : {}", report.header_lines);
    println!("  Data rows    : {}", report.data_rows);

    for u in &report.unrecognized {
        println!("  ? line {}: {}", u.line, u.key);
    }

    // --- Производные поля вычисляются по запросу ---
    let r = &record.reference;
    match (r.decimal_longitude(), r.decimal_latitude()) {
        (Ok(lon), Ok(lat)) => println!("  Position     : {lat:.6}, {lon:.6}"),
        (Err(e), _) | (_, Err(e)) => println!("  Position     : ✗ {e}"),
    }
    match r.decimal_gps_time() {
        Ok(h) => println!("  GPS time     : {h:.5} h"),
        Err(e) => println!("  GPS time     : ✗ {e}"),
    }

    // --- Первые строки таблицы ---
    println!();
    for line in record.data.table().to_string().lines().take(4) {
        println!("{line}");
    }

    Ok(())
}
