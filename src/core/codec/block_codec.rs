//! 블록 변환 부호화 (패딩 → 블록 DCT → 계수 가지치기 → 역변환 → 크롭)

use log::{debug, info};
use ndarray::{s, Array2};
use rayon::prelude::*;
use rustdct::DctPlanner;
use serde::Serialize;

use super::coefficients::BlockCoefficientGrid;
use super::dct::Dct2d;
use super::retention::{retention_mask, RetentionPattern};
use crate::core::config::{
    validate_block_size, validate_coefficients_per_block, validate_keep_percent, CodecConfig,
};
use crate::core::error::{Result, SpectralError};
use crate::core::types::{GrayscaleGrid, PIXEL_MAX};

/// 압축 한 번의 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompressionReport {
    /// 원본 H×W로 크롭된 복원 그리드
    pub reconstructed: GrayscaleGrid,
    /// 0이 된 계수 비율 (%)
    pub compression_ratio: f64,
    /// 가지치기된 계수 그리드 (시각화용)
    pub coefficients: BlockCoefficientGrid,
}

/// 블록 DCT 코덱
///
/// 타일끼리는 상태를 공유하지 않으므로 정/역 변환은 rayon으로 타일 단위 병렬 처리한다.
#[derive(Clone)]
pub struct BlockTransformCodec {
    block_size: usize,
    retention: RetentionPattern,
    dct: Dct2d,
}

impl BlockTransformCodec {
    pub fn new(block_size: usize) -> Result<Self> {
        validate_block_size(block_size)?;
        let mut planner = DctPlanner::new();
        Ok(Self {
            block_size,
            retention: RetentionPattern::default(),
            dct: Dct2d::new(&mut planner, block_size, block_size),
        })
    }

    pub fn from_config(config: &CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.block_size)?.with_retention(config.retention))
    }

    pub fn with_retention(mut self, retention: RetentionPattern) -> Self {
        self.retention = retention;
        self
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn retention(&self) -> RetentionPattern {
        self.retention
    }

    /// 아래/오른쪽 가장자리를 복제하여 block_size의 배수로 패딩
    pub fn prepare(&self, grid: &GrayscaleGrid) -> GrayscaleGrid {
        let (h, w) = grid.shape();
        let padded_h = h + padding_for(h, self.block_size);
        let padded_w = w + padding_for(w, self.block_size);
        if (padded_h, padded_w) == (h, w) {
            return grid.clone();
        }
        let source = grid.as_array();
        let padded = Array2::from_shape_fn((padded_h, padded_w), |(r, c)| source[(r.min(h - 1), c.min(w - 1))]);
        debug!("padded {}x{} -> {}x{}", h, w, padded_h, padded_w);
        GrayscaleGrid::wrap(padded)
    }

    /// 타일마다 독립적으로 2D DCT-II
    pub fn forward_blocks(&self, padded: &GrayscaleGrid) -> Result<BlockCoefficientGrid> {
        self.ensure_tiled(padded.shape())?;
        let dct = &self.dct;
        let data = self.map_tiles(padded.as_array(), |tile| dct.forward(tile));
        Ok(BlockCoefficientGrid::from_parts(data, self.block_size))
    }

    /// 전체 그리드 기준 |c|의 (100 − keep_percent) 백분위수 미만 계수를 0으로
    ///
    /// 반환 비율은 가지치기 후 0인 계수의 백분율이다.
    pub fn compress_by_magnitude_threshold(
        &self,
        coefficients: &BlockCoefficientGrid,
        keep_percent: f64,
    ) -> Result<(BlockCoefficientGrid, f64)> {
        validate_keep_percent(keep_percent)?;
        self.ensure_same_block_size(coefficients)?;

        let mut magnitudes: Vec<f64> = coefficients.as_array().iter().map(|c| c.abs()).collect();
        let cutoff = percentile(&mut magnitudes, 100.0 - keep_percent);

        let mut pruned = coefficients.clone();
        pruned.data_mut().mapv_inplace(|c| if c.abs() < cutoff { 0.0 } else { c });
        let ratio = pruned.zero_percent();
        debug!("magnitude threshold: keep={}% cutoff={:.4} ratio={:.2}%", keep_percent, cutoff, ratio);
        Ok((pruned, ratio))
    }

    /// 모든 타일에 같은 저주파 유지 마스크 적용. 비율은 내용과 무관하게 (1 − N/b²)·100.
    pub fn compress_by_frequency_retention(
        &self,
        coefficients: &BlockCoefficientGrid,
        coefficients_per_block: usize,
    ) -> Result<(BlockCoefficientGrid, f64)> {
        validate_coefficients_per_block(coefficients_per_block, self.block_size)?;
        self.ensure_same_block_size(coefficients)?;

        let b = self.block_size;
        let mask = retention_mask(b, coefficients_per_block, self.retention);
        let mut pruned = coefficients.clone();
        pruned
            .data_mut()
            .indexed_iter_mut()
            .for_each(|((r, c), v)| {
                if !mask[(r % b, c % b)] {
                    *v = 0.0;
                }
            });

        let ratio = (1.0 - coefficients_per_block as f64 / (b * b) as f64) * 100.0;
        debug!("frequency retention: n={} pattern={:?} ratio={:.2}%", coefficients_per_block, self.retention, ratio);
        Ok((pruned, ratio))
    }

    /// 타일마다 역 DCT 후 [0,255]로 클램핑
    pub fn inverse_blocks(&self, coefficients: &BlockCoefficientGrid) -> Result<GrayscaleGrid> {
        self.ensure_same_block_size(coefficients)?;
        let dct = &self.dct;
        let mut data = self.map_tiles(coefficients.as_array(), |tile| dct.inverse(tile));
        data.mapv_inplace(|v| v.clamp(0.0, PIXEL_MAX));
        Ok(GrayscaleGrid::wrap(data))
    }

    /// `prepare`가 추가한 패딩 제거
    pub fn crop(&self, padded: &GrayscaleGrid, height: usize, width: usize) -> Result<GrayscaleGrid> {
        let (ph, pw) = padded.shape();
        if height == 0 || width == 0 || height > ph || width > pw {
            return Err(SpectralError::DimensionMismatch { expected: (height, width), actual: (ph, pw) });
        }
        if (height, width) == (ph, pw) {
            return Ok(padded.clone());
        }
        Ok(GrayscaleGrid::wrap(padded.as_array().slice(s![..height, ..width]).to_owned()))
    }

    /// 크기 임계값 방식 전체 파이프라인
    pub fn compress_threshold(&self, grid: &GrayscaleGrid, keep_percent: f64) -> Result<CompressionReport> {
        validate_keep_percent(keep_percent)?;
        let coefficients = self.forward_blocks(&self.prepare(grid))?;
        let (pruned, ratio) = self.compress_by_magnitude_threshold(&coefficients, keep_percent)?;
        self.finish(grid, pruned, ratio)
    }

    /// 주파수 유지 방식 전체 파이프라인
    pub fn compress_frequency(&self, grid: &GrayscaleGrid, coefficients_per_block: usize) -> Result<CompressionReport> {
        validate_coefficients_per_block(coefficients_per_block, self.block_size)?;
        let coefficients = self.forward_blocks(&self.prepare(grid))?;
        let (pruned, ratio) = self.compress_by_frequency_retention(&coefficients, coefficients_per_block)?;
        self.finish(grid, pruned, ratio)
    }

    fn finish(&self, grid: &GrayscaleGrid, pruned: BlockCoefficientGrid, ratio: f64) -> Result<CompressionReport> {
        let padded = self.inverse_blocks(&pruned)?;
        let (h, w) = grid.shape();
        let reconstructed = self.crop(&padded, h, w)?;
        info!("block codec {}x{} (block {}): compression {:.2}%", h, w, self.block_size, ratio);
        Ok(CompressionReport { reconstructed, compression_ratio: ratio, coefficients: pruned })
    }

    fn ensure_tiled(&self, shape: (usize, usize)) -> Result<()> {
        let (h, w) = shape;
        let expected = (h + padding_for(h, self.block_size), w + padding_for(w, self.block_size));
        SpectralError::ensure_same_shape(expected, shape)
    }

    fn ensure_same_block_size(&self, coefficients: &BlockCoefficientGrid) -> Result<()> {
        if coefficients.block_size() != self.block_size {
            return Err(SpectralError::invalid(
                "block_size",
                format!("coefficient grid uses {}, codec uses {}", coefficients.block_size(), self.block_size),
            ));
        }
        Ok(())
    }

    /// 타일 좌표를 병렬로 처리한 뒤 단일 스레드로 이어 붙인다
    fn map_tiles<F>(&self, source: &Array2<f64>, f: F) -> Array2<f64>
    where
        F: Fn(&mut [f64]) + Sync,
    {
        let b = self.block_size;
        let (h, w) = source.dim();
        let tiles: Vec<(usize, usize)> = (0..h)
            .step_by(b)
            .flat_map(|r| (0..w).step_by(b).map(move |c| (r, c)))
            .collect();

        let processed: Vec<((usize, usize), Vec<f64>)> = tiles
            .into_par_iter()
            .map(|(r, c)| {
                let mut tile: Vec<f64> = source.slice(s![r..r + b, c..c + b]).iter().copied().collect();
                f(&mut tile);
                ((r, c), tile)
            })
            .collect();

        let mut out = Array2::zeros((h, w));
        for ((r, c), tile) in processed {
            for (k, v) in tile.into_iter().enumerate() {
                out[(r + k / b, c + k % b)] = v;
            }
        }
        out
    }
}

/// 한 축의 패딩 양 (b − dim % b) % b
pub fn padding_for(dim: usize, block_size: usize) -> usize {
    (block_size - dim % block_size) % block_size
}

/// 선형 보간 백분위수 (q ∈ [0,100]). 입력 순서를 바꾼다.
pub fn percentile(values: &mut [f64], q: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_unstable_by(|a, b| a.total_cmp(b));
    let rank = (q / 100.0).clamp(0.0, 1.0) * (values.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    values[lo] + (values[hi] - values[lo]) * (rank - lo as f64)
}
