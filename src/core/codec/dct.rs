//! 직교 정규화된 2D DCT-II / DCT-III

use std::sync::Arc;

use ndarray::Array2;
use rustdct::{DctPlanner, TransformType2And3};
use serde::{Deserialize, Serialize};

use crate::core::types::GrayscaleGrid;

/// rows×cols 행 우선 버퍼에 대한 분리형 2D DCT
///
/// rustdct의 DCT-II는 정규화되지 않으므로 직교 정규화 계수를 곱한다.
/// 이 스케일에서 첫 기저 함수는 상수이고 DC 계수는 블록 평균 × sqrt(rows·cols)이다.
#[derive(Clone)]
pub struct Dct2d {
    rows: usize,
    cols: usize,
    row_dct: Arc<dyn TransformType2And3<f64>>,
    col_dct: Arc<dyn TransformType2And3<f64>>,
}

impl Dct2d {
    pub fn new(planner: &mut DctPlanner<f64>, rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            row_dct: planner.plan_dct2(cols),
            col_dct: planner.plan_dct2(rows),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// 정방향 (DCT-II), 제자리 연산
    pub fn forward(&self, data: &mut [f64]) {
        self.separable(data, true);
    }

    /// 역방향 (DCT-III), 제자리 연산
    pub fn inverse(&self, data: &mut [f64]) {
        self.separable(data, false);
    }

    fn separable(&self, data: &mut [f64], forward: bool) {
        debug_assert_eq!(data.len(), self.rows * self.cols);
        let (rows, cols) = (self.rows, self.cols);

        for row in data.chunks_exact_mut(cols) {
            apply_1d(self.row_dct.as_ref(), row, forward);
        }

        let mut transposed = vec![0.0; rows * cols];
        for i in 0..rows {
            for j in 0..cols {
                transposed[j * rows + i] = data[i * cols + j];
            }
        }
        for col in transposed.chunks_exact_mut(rows) {
            apply_1d(self.col_dct.as_ref(), col, forward);
        }
        for i in 0..rows {
            for j in 0..cols {
                data[i * cols + j] = transposed[j * rows + i];
            }
        }
    }
}

fn apply_1d(dct: &dyn TransformType2And3<f64>, v: &mut [f64], forward: bool) {
    let n = v.len() as f64;
    if forward {
        dct.process_dct2(v);
        let dc = (1.0 / n).sqrt();
        let ac = (2.0 / n).sqrt();
        v[0] *= dc;
        for x in v[1..].iter_mut() {
            *x *= ac;
        }
    } else {
        // 직교 계수 → rustdct 원시 계수, DCT-III 후 2/N 보정
        v[0] *= n.sqrt();
        let ac = (n / 2.0).sqrt();
        for x in v[1..].iter_mut() {
            *x *= ac;
        }
        dct.process_dct3(v);
        let scale = 2.0 / n;
        for x in v.iter_mut() {
            *x *= scale;
        }
    }
}

/// 이미지 전체에 대한 2D DCT (블록 분할 없음)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WholeImageDct {
    coefficients: Array2<f64>,
}

/// DCT 계수 요약
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientSummary {
    pub height: usize,
    pub width: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std: f64,
}

impl WholeImageDct {
    pub fn forward(grid: &GrayscaleGrid) -> Self {
        let (rows, cols) = grid.shape();
        let mut planner = DctPlanner::new();
        let dct = Dct2d::new(&mut planner, rows, cols);
        let mut data = grid.to_vec();
        dct.forward(&mut data);
        Self {
            coefficients: Array2::from_shape_fn((rows, cols), |(r, c)| data[r * cols + c]),
        }
    }

    pub fn coefficients(&self) -> &Array2<f64> {
        &self.coefficients
    }

    /// 역변환 (클램핑 없음)
    pub fn inverse(&self) -> GrayscaleGrid {
        let (rows, cols) = self.coefficients.dim();
        let mut planner = DctPlanner::new();
        let dct = Dct2d::new(&mut planner, rows, cols);
        let mut data: Vec<f64> = self.coefficients.iter().copied().collect();
        dct.inverse(&mut data);
        GrayscaleGrid::wrap(Array2::from_shape_fn((rows, cols), |(r, c)| data[r * cols + c]))
    }

    /// 표시용 log(1 + |c|)
    pub fn log_magnitude(&self) -> GrayscaleGrid {
        GrayscaleGrid::wrap(self.coefficients.mapv(|c| c.abs().ln_1p()))
    }

    pub fn summary(&self) -> CoefficientSummary {
        let (height, width) = self.coefficients.dim();
        let n = self.coefficients.len() as f64;
        let mean = self.coefficients.sum() / n;
        let variance = self.coefficients.iter().map(|&c| (c - mean).powi(2)).sum::<f64>() / n;
        let (min, max) = self
            .coefficients
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &c| (lo.min(c), hi.max(c)));
        CoefficientSummary { height, width, min, max, mean, std: variance.sqrt() }
    }
}
