//! 단일 채널 강도 그리드

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::error::{Result, SpectralError};

/// 8비트 강도 범위의 최댓값
pub const PIXEL_MAX: f64 = 255.0;

/// 단일 채널 강도 그리드 (H×W, H,W > 0)
///
/// 샘플은 저장 시 [0,255] 정수 의미를 갖지만 모든 변환 연산을 위해
/// `f64`로 승격되어 보관된다. 생성 후에는 불변이며 모든 변환은 새 그리드를
/// 반환한다. 클램핑은 [`GrayscaleGrid::clamped`]/[`GrayscaleGrid::to_u8`]에서만 일어난다.
/// 역직렬화도 `from_array` 검증을 거친다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<f64>", into = "Array2<f64>")]
pub struct GrayscaleGrid {
    data: Array2<f64>,
}

impl GrayscaleGrid {
    /// 행 우선(row-major) 샘플로 그리드 생성
    pub fn new(height: usize, width: usize, samples: Vec<f64>) -> Result<Self> {
        let len = samples.len();
        if height == 0 || width == 0 || len != height * width {
            return Err(SpectralError::EmptyGrid { height, width, len });
        }
        let data = Array2::from_shape_vec((height, width), samples)
            .map_err(|_| SpectralError::EmptyGrid { height, width, len })?;
        Ok(Self { data })
    }

    /// 8비트 샘플로부터 생성 (f64 승격)
    pub fn from_u8(height: usize, width: usize, samples: &[u8]) -> Result<Self> {
        Self::new(height, width, samples.iter().map(|&v| v as f64).collect())
    }

    pub fn from_array(data: Array2<f64>) -> Result<Self> {
        let (height, width) = data.dim();
        if height == 0 || width == 0 {
            return Err(SpectralError::EmptyGrid { height, width, len: data.len() });
        }
        Ok(Self { data })
    }

    /// 모든 샘플이 `value`인 그리드
    pub fn filled(height: usize, width: usize, value: f64) -> Result<Self> {
        Self::new(height, width, vec![value; height * width])
    }

    /// (row, col) 좌표 함수로 그리드 생성
    pub fn from_fn<F>(height: usize, width: usize, f: F) -> Result<Self>
    where
        F: FnMut((usize, usize)) -> f64,
    {
        if height == 0 || width == 0 {
            return Err(SpectralError::EmptyGrid { height, width, len: 0 });
        }
        Ok(Self { data: Array2::from_shape_fn((height, width), f) })
    }

    /// 내부 연산 결과처럼 형태가 이미 보장된 배열을 감싼다
    pub(crate) fn wrap(data: Array2<f64>) -> Self {
        debug_assert!(data.nrows() > 0 && data.ncols() > 0);
        Self { data }
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    /// (height, width)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
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

    /// 행 우선 순서의 샘플 복사본
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.iter().copied().collect()
    }

    /// 샘플별 함수 적용 결과
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self { data: self.data.mapv(f) }
    }

    /// [0,255]로 클램핑한 새 그리드
    pub fn clamped(&self) -> Self {
        self.map(|v| v.clamp(0.0, PIXEL_MAX))
    }

    /// 클램핑 후 반올림한 8비트 샘플 (행 우선)
    pub fn to_u8(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&v| v.clamp(0.0, PIXEL_MAX).round() as u8)
            .collect()
    }

    /// 다른 그리드와 형태가 같은지 검사
    pub fn ensure_same_shape(&self, other: &GrayscaleGrid) -> Result<()> {
        SpectralError::ensure_same_shape(self.shape(), other.shape())
    }
}

impl TryFrom<Array2<f64>> for GrayscaleGrid {
    type Error = SpectralError;

    fn try_from(data: Array2<f64>) -> Result<Self> {
        Self::from_array(data)
    }
}

impl From<GrayscaleGrid> for Array2<f64> {
    fn from(grid: GrayscaleGrid) -> Self {
        grid.data
    }
}
