pub mod complex_spectrum;
pub mod transform;


// 재수출
pub use complex_spectrum::{ComplexSpectrum, SpectrumOrder};
pub use transform::{normalize_to_u8, spectrum_info, SpectrumInfo, SpectrumTransform};
