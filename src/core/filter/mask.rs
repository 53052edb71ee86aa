//! 거리장 기반 주파수 마스크

use log::debug;
use ndarray::Array2;

use super::params::{Band, FilterParams};
use crate::core::error::{Result, SpectralError};

/// Butterworth 고역 통과에서 d = 0을 대체하는 값
pub const BUTTERWORTH_CENTER_EPSILON: f64 = 1e-2;

/// 중앙 정렬 스펙트럼에 곱하는 [0,1] 실수 배수 그리드
#[derive(Debug, Clone, PartialEq)]
pub struct FilterMask {
    data: Array2<f64>,
}

impl FilterMask {
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get((row, col)).copied()
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn into_array(self) -> Array2<f64> {
        self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.data.iter()
    }
}

/// 각 셀의 (H/2, W/2)로부터의 유클리드 거리
pub fn distance_field(height: usize, width: usize) -> Array2<f64> {
    let center_row = (height / 2) as f64;
    let center_col = (width / 2) as f64;
    Array2::from_shape_fn((height, width), |(r, c)| {
        let dr = r as f64 - center_row;
        let dc = c as f64 - center_col;
        (dr * dr + dc * dc).sqrt()
    })
}

/// 파라미터와 격자 형태로부터 마스크 생성
pub fn build_mask(height: usize, width: usize, params: &FilterParams) -> Result<FilterMask> {
    if height == 0 || width == 0 {
        return Err(SpectralError::EmptyGrid { height, width, len: 0 });
    }
    debug!("build mask {}x{} {:?}", height, width, params);

    let distance = distance_field(height, width);
    let data = match *params {
        FilterParams::Ideal(p) => {
            let radius = p.radius();
            distance.mapv(|d| {
                let inside = d <= radius;
                match p.band() {
                    Band::LowPass => if inside { 1.0 } else { 0.0 },
                    Band::HighPass => if inside { 0.0 } else { 1.0 },
                }
            })
        }
        FilterParams::Gaussian(p) => {
            let two_sigma_sq = 2.0 * p.sigma() * p.sigma();
            distance.mapv(|d| {
                let low = (-(d * d) / two_sigma_sq).exp();
                match p.band() {
                    Band::LowPass => low,
                    Band::HighPass => 1.0 - low,
                }
            })
        }
        FilterParams::Butterworth(p) => {
            let radius = p.radius();
            let exponent = 2.0 * p.order() as f64;
            distance.mapv(|d| match p.band() {
                Band::LowPass => 1.0 / (1.0 + (d / radius).powf(exponent)),
                Band::HighPass => {
                    let d = if d == 0.0 { BUTTERWORTH_CENTER_EPSILON } else { d };
                    1.0 / (1.0 + (radius / d).powf(exponent))
                }
            })
        }
    };

    Ok(FilterMask { data })
}
