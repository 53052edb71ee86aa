//! 복소 스펙트럼 값 객체

use ndarray::Array2;
use rustfft::num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SpectralError};
use crate::core::types::GrayscaleGrid;

/// 스펙트럼의 인덱스 배치
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpectrumOrder {
    /// DC 항이 [0,0]
    Natural,
    /// DC 항이 [H/2, W/2] (사분면 교환)
    Centered,
}

/// 2D DFT 결과. 변환 호출이 만들고 필터/복원 단계가 소비한다.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexSpectrum {
    data: Array2<Complex<f64>>,
    order: SpectrumOrder,
}

impl ComplexSpectrum {
    pub(crate) fn from_parts(data: Array2<Complex<f64>>, order: SpectrumOrder) -> Self {
        Self { data, order }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn order(&self) -> SpectrumOrder {
        self.order
    }

    pub fn is_centered(&self) -> bool {
        self.order == SpectrumOrder::Centered
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Complex<f64>> {
        self.data.get((row, col)).copied()
    }

    pub fn as_array(&self) -> &Array2<Complex<f64>> {
        &self.data
    }

    pub fn into_array(self) -> Array2<Complex<f64>> {
        self.data
    }

    /// 짝을 이루는 그리드와 형태가 같은지 검사
    pub fn ensure_shape(&self, shape: (usize, usize)) -> Result<()> {
        SpectralError::ensure_same_shape(shape, self.shape())
    }

    /// DC 항을 (H/2, W/2)로 옮긴 스펙트럼. 이미 중앙 정렬이면 그대로 복사한다.
    pub fn centered(&self) -> ComplexSpectrum {
        match self.order {
            SpectrumOrder::Centered => self.clone(),
            SpectrumOrder::Natural => {
                let (h, w) = self.shape();
                Self::from_parts(roll(&self.data, h / 2, w / 2), SpectrumOrder::Centered)
            }
        }
    }

    /// `centered`의 정확한 역연산
    pub fn uncentered(&self) -> ComplexSpectrum {
        match self.order {
            SpectrumOrder::Natural => self.clone(),
            SpectrumOrder::Centered => {
                let (h, w) = self.shape();
                Self::from_parts(roll(&self.data, h - h / 2, w - w / 2), SpectrumOrder::Natural)
            }
        }
    }

    /// 실수 배수 그리드를 원소별로 곱한 새 스펙트럼 (배치 유지)
    pub(crate) fn scaled_by(&self, factors: &Array2<f64>) -> Result<ComplexSpectrum> {
        SpectralError::ensure_same_shape(self.shape(), factors.dim())?;
        let mut data = self.data.clone();
        data.zip_mut_with(factors, |z, &m| *z *= m);
        Ok(Self::from_parts(data, self.order))
    }

    /// 원시 크기 |z|
    pub fn magnitude(&self) -> GrayscaleGrid {
        GrayscaleGrid::wrap(self.data.mapv(|z| z.norm()))
    }

    /// 표시용 로그 압축 크기 log(1 + |z|)
    pub fn log_magnitude(&self) -> GrayscaleGrid {
        GrayscaleGrid::wrap(self.data.mapv(|z| z.norm().ln_1p()))
    }

    /// 위상 atan2(im, re)
    pub fn phase(&self) -> GrayscaleGrid {
        GrayscaleGrid::wrap(self.data.mapv(|z| z.im.atan2(z.re)))
    }

    /// 원시 크기의 총합 (스펙트럼 에너지)
    pub fn total_magnitude(&self) -> f64 {
        self.data.iter().map(|z| z.norm()).sum()
    }
}

/// out[(r + dr) % h][(c + dc) % w] = input[r][c]
fn roll<T: Copy>(input: &Array2<T>, dr: usize, dc: usize) -> Array2<T> {
    let (h, w) = input.dim();
    Array2::from_shape_fn((h, w), |(r, c)| input[((r + h - dr % h) % h, (c + w - dc % w) % w)])
}
