pub mod stats;
pub mod metrics;
pub mod report;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

// 재수출
pub use stats::{describe, Stats};
pub use metrics::{
    difference_map, frequency_energy, mse, psnr, psnr_from_mse, simplified_similarity,
    spectral_energy_retained, FrequencyEnergy, SSIM_C1, SSIM_C2,
};
pub use report::{CompressionStats, PsnrGrade, QualityReport, SsimGrade};
