//! 원본/파생 그리드 간 오차 및 유사도 지표
//!
//! 모든 지표는 두 그리드의 형태가 같아야 하며, 다르면 DimensionMismatch를 반환한다.
//! 자동 리사이즈는 하지 않는다.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::spectrum::SpectrumTransform;
use crate::core::types::{GrayscaleGrid, PIXEL_MAX};

/// SSIM 안정화 상수 C1 = (0.01·255)²
pub const SSIM_C1: f64 = (0.01 * PIXEL_MAX) * (0.01 * PIXEL_MAX);
/// SSIM 안정화 상수 C2 = (0.03·255)²
pub const SSIM_C2: f64 = (0.03 * PIXEL_MAX) * (0.03 * PIXEL_MAX);

/// 주파수 에너지 비교 결과
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyEnergy {
    /// 원본 스펙트럼 크기의 총합
    pub original: f64,
    /// 파생 스펙트럼 크기의 총합
    pub derived: f64,
    /// derived / original × 100
    pub retained_percent: f64,
}

/// 평균 제곱 오차 (f64 누적)
pub fn mse(a: &GrayscaleGrid, b: &GrayscaleGrid) -> Result<f64> {
    a.ensure_same_shape(b)?;
    let sum: f64 = a.iter().zip(b.iter()).map(|(&x, &y)| (x - y) * (x - y)).sum();
    Ok(sum / a.len() as f64)
}

/// 20·log10(255 / sqrt(MSE)). MSE가 정확히 0이면 +∞.
pub fn psnr(a: &GrayscaleGrid, b: &GrayscaleGrid) -> Result<f64> {
    Ok(psnr_from_mse(mse(a, b)?))
}

pub fn psnr_from_mse(mse: f64) -> f64 {
    if mse == 0.0 {
        return f64::INFINITY;
    }
    20.0 * (PIXEL_MAX / mse.sqrt()).log10()
}

/// 전역 단일 윈도우 SSIM 근사
///
/// 이미지 전체를 하나의 윈도우로 보고 평균/분산/공분산을 계산한다.
/// 표준 SSIM(국소 가우시안 윈도우의 평균)과는 다른 값이며 대체물이 아니다.
/// C1, C2 덕분에 상수 그리드에서도 유한한 값을 낸다.
pub fn simplified_similarity(a: &GrayscaleGrid, b: &GrayscaleGrid) -> Result<f64> {
    a.ensure_same_shape(b)?;
    let n = a.len() as f64;
    let mu_a = a.iter().sum::<f64>() / n;
    let mu_b = b.iter().sum::<f64>() / n;

    let (mut var_a, mut var_b, mut cov) = (0.0, 0.0, 0.0);
    for (&x, &y) in a.iter().zip(b.iter()) {
        let dx = x - mu_a;
        let dy = y - mu_b;
        var_a += dx * dx;
        var_b += dy * dy;
        cov += dx * dy;
    }
    var_a /= n;
    var_b /= n;
    cov /= n;

    let numerator = (2.0 * mu_a * mu_b + SSIM_C1) * (2.0 * cov + SSIM_C2);
    let denominator = (mu_a * mu_a + mu_b * mu_b + SSIM_C1) * (var_a + var_b + SSIM_C2);
    Ok(numerator / denominator)
}

/// 원시(비로그) 스펙트럼 크기 총합 비교
pub fn frequency_energy(a: &GrayscaleGrid, b: &GrayscaleGrid) -> Result<FrequencyEnergy> {
    a.ensure_same_shape(b)?;
    let mut transform = SpectrumTransform::new();
    let original = transform.forward(a).total_magnitude();
    let derived = transform.forward(b).total_magnitude();

    let retained_percent = if original > 0.0 {
        derived / original * 100.0
    } else if derived == 0.0 {
        100.0
    } else {
        warn!("reference spectrum has zero energy, derived energy {derived:.4e}");
        f64::INFINITY
    };
    Ok(FrequencyEnergy { original, derived, retained_percent })
}

/// 스펙트럼 에너지 보존율 (%)
pub fn spectral_energy_retained(a: &GrayscaleGrid, b: &GrayscaleGrid) -> Result<f64> {
    Ok(frequency_energy(a, b)?.retained_percent)
}

/// 샘플별 |a − b|
pub fn difference_map(a: &GrayscaleGrid, b: &GrayscaleGrid) -> Result<GrayscaleGrid> {
    a.ensure_same_shape(b)?;
    let diff = (a.as_array() - b.as_array()).mapv(f64::abs);
    Ok(GrayscaleGrid::wrap(diff))
}
