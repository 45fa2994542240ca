pub mod common_header;
pub mod detector;
pub mod display;
pub mod error;
pub mod geodetic;
pub mod record;
pub mod spectra_header;

pub use common_header::*;
pub use detector::*;
pub use display::*;
pub use error::*;
pub use geodetic::*;
pub use record::*;
pub use spectra_header::*;
