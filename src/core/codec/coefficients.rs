//! 블록 단위 DCT 계수 그리드

use ndarray::{s, Array2, ArrayView2};
use serde::Serialize;

use crate::core::types::GrayscaleGrid;

/// block_size×block_size 타일로 나뉜 DCT 계수 그리드
///
/// 형태는 패딩된 공간 그리드와 같다. 가지치기는 계수를 0으로 만들 뿐
/// 크기를 바꾸지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockCoefficientGrid {
    data: Array2<f64>,
    block_size: usize,
}

impl BlockCoefficientGrid {
    pub(crate) fn from_parts(data: Array2<f64>, block_size: usize) -> Self {
        debug_assert!(data.nrows() % block_size == 0 && data.ncols() % block_size == 0);
        Self { data, block_size }
    }

    pub(crate) fn data_mut(&mut self) -> &mut Array2<f64> {
        &mut self.data
    }

    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// (타일 행 수, 타일 열 수)
    pub fn tile_counts(&self) -> (usize, usize) {
        (self.data.nrows() / self.block_size, self.data.ncols() / self.block_size)
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

    /// (tile_row, tile_col) 타일의 계수 뷰
    pub fn tile(&self, tile_row: usize, tile_col: usize) -> Option<ArrayView2<'_, f64>> {
        let (tiles_r, tiles_c) = self.tile_counts();
        if tile_row >= tiles_r || tile_col >= tiles_c {
            return None;
        }
        let b = self.block_size;
        let (r, c) = (tile_row * b, tile_col * b);
        Some(self.data.slice(s![r..r + b, c..c + b]))
    }

    pub fn zero_count(&self) -> usize {
        self.data.iter().filter(|&&v| v == 0.0).count()
    }

    /// 0인 계수의 비율 (%)
    pub fn zero_percent(&self) -> f64 {
        self.zero_count() as f64 / self.len() as f64 * 100.0
    }

    /// 표시용 log(1 + |c|)
    pub fn log_magnitude(&self) -> GrayscaleGrid {
        GrayscaleGrid::wrap(self.data.mapv(|c| c.abs().ln_1p()))
    }
}
