//! 2D 이산 푸리에 변환 (행-열 분리)

use log::debug;
use ndarray::Array2;
use rustfft::{num_complex::Complex, FftPlanner};
use serde::{Deserialize, Serialize};

use super::complex_spectrum::{ComplexSpectrum, SpectrumOrder};
use crate::core::error::Result;
use crate::core::types::{GrayscaleGrid, PIXEL_MAX};

/// 정/역 2D DFT 계산기
///
/// 플래너는 같은 길이의 FFT 계획을 재사용하기 위해 변환기가 소유한다.
/// 호출 간에 공유되는 상태는 계획 캐시뿐이며 결과는 항상 새로 할당된다.
pub struct SpectrumTransform {
    planner: FftPlanner<f64>,
}

/// 스펙트럼 요약 정보 (중앙 정렬 기준)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumInfo {
    pub height: usize,
    pub width: usize,
    pub log_magnitude_min: f64,
    pub log_magnitude_max: f64,
    pub phase_min: f64,
    pub phase_max: f64,
}

impl Default for SpectrumTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectrumTransform {
    pub fn new() -> Self {
        Self { planner: FftPlanner::new() }
    }

    /// 정방향 2D DFT (자연 배치)
    pub fn forward(&mut self, grid: &GrayscaleGrid) -> ComplexSpectrum {
        let (rows, cols) = grid.shape();
        let mut data: Vec<Complex<f64>> = grid.iter().map(|&x| Complex::new(x, 0.0)).collect();
        self.perform_2d_fft(&mut data, rows, cols, false);
        debug!("forward DFT {}x{}", rows, cols);
        ComplexSpectrum::from_parts(to_array(data, rows, cols), SpectrumOrder::Natural)
    }

    /// 역방향 2D DFT 후 각 샘플의 크기 |z|
    ///
    /// 부동소수점 오차로 남는 허수부는 버린다. [0,255] 클램핑은 하지 않는다.
    pub fn inverse(&mut self, spectrum: &ComplexSpectrum) -> GrayscaleGrid {
        let natural = spectrum.uncentered();
        let (rows, cols) = natural.shape();
        let mut data: Vec<Complex<f64>> = natural.as_array().iter().copied().collect();
        self.perform_2d_fft(&mut data, rows, cols, true);

        let scale = 1.0 / (rows * cols) as f64;
        let magnitudes: Vec<f64> = data.iter().map(|z| z.norm() * scale).collect();
        debug!("inverse DFT {}x{}", rows, cols);
        GrayscaleGrid::wrap(to_array(magnitudes, rows, cols))
    }

    /// 그리드와 형태를 확인한 뒤 역변환
    pub fn inverse_for(&mut self, grid: &GrayscaleGrid, spectrum: &ComplexSpectrum) -> Result<GrayscaleGrid> {
        spectrum.ensure_shape(grid.shape())?;
        Ok(self.inverse(spectrum))
    }

    /// 짝을 이루는 그리드와 형태를 확인한 뒤 중앙 정렬
    pub fn center_for(&self, grid: &GrayscaleGrid, spectrum: &ComplexSpectrum) -> Result<ComplexSpectrum> {
        spectrum.ensure_shape(grid.shape())?;
        Ok(spectrum.centered())
    }

    /// 짝을 이루는 그리드와 형태를 확인한 뒤 중앙 정렬 해제
    pub fn uncenter_for(&self, grid: &GrayscaleGrid, spectrum: &ComplexSpectrum) -> Result<ComplexSpectrum> {
        spectrum.ensure_shape(grid.shape())?;
        Ok(spectrum.uncentered())
    }

    /// 행별 FFT → 전치 → 열별 FFT → 다시 전치
    fn perform_2d_fft(&mut self, data: &mut [Complex<f64>], rows: usize, cols: usize, inverse: bool) {
        let row_fft = if inverse {
            self.planner.plan_fft_inverse(cols)
        } else {
            self.planner.plan_fft_forward(cols)
        };
        row_fft.process(data);

        let mut transposed = vec![Complex::new(0.0, 0.0); rows * cols];
        for i in 0..rows {
            for j in 0..cols {
                transposed[j * rows + i] = data[i * cols + j];
            }
        }

        let col_fft = if inverse {
            self.planner.plan_fft_inverse(rows)
        } else {
            self.planner.plan_fft_forward(rows)
        };
        col_fft.process(&mut transposed);

        for i in 0..rows {
            for j in 0..cols {
                data[i * cols + j] = transposed[j * rows + i];
            }
        }
    }
}

/// 중앙 정렬된 로그 크기와 위상의 범위
pub fn spectrum_info(spectrum: &ComplexSpectrum) -> SpectrumInfo {
    let centered = spectrum.centered();
    let (height, width) = centered.shape();
    let (log_magnitude_min, log_magnitude_max) = min_max(&centered.log_magnitude());
    let (phase_min, phase_max) = min_max(&centered.phase());
    SpectrumInfo {
        height,
        width,
        log_magnitude_min,
        log_magnitude_max,
        phase_min,
        phase_max,
    }
}

/// 최소-최대 정규화로 [0,255] 8비트 표시용 값 생성 (행 우선)
///
/// 모든 값이 같으면 0으로 채운다.
pub fn normalize_to_u8(view: &GrayscaleGrid) -> Vec<u8> {
    let (lo, hi) = min_max(view);
    let range = hi - lo;
    if range <= 0.0 || !range.is_finite() {
        return vec![0; view.len()];
    }
    view.iter()
        .map(|&v| ((v - lo) / range * PIXEL_MAX).round().clamp(0.0, PIXEL_MAX) as u8)
        .collect()
}

fn min_max(grid: &GrayscaleGrid) -> (f64, f64) {
    grid.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

fn to_array<T: Copy>(data: Vec<T>, rows: usize, cols: usize) -> Array2<T> {
    Array2::from_shape_fn((rows, cols), |(r, c)| data[r * cols + c])
}
