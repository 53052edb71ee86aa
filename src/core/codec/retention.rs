//! 블록 내 저주파 계수 유지 마스크

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// 블록당 N개 계수를 고르는 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetentionPattern {
    /// 지그재그 스캔 순서의 앞쪽 N개 (정확히 N개 유지)
    #[default]
    ZigZag,
    /// i + j < ceil(sqrt(2N)) 삼각형 근사. N개보다 많거나 적게 남을 수 있다.
    Diagonal,
}

/// block_size×block_size 블록의 지그재그 스캔 순서 (row, col)
///
/// 8×8에서 JPEG 표준 순서와 같다.
pub fn zigzag_order(block_size: usize) -> Vec<(usize, usize)> {
    let mut order = Vec::with_capacity(block_size * block_size);
    if block_size == 0 {
        return order;
    }
    for s in 0..(2 * block_size - 1) {
        let lo = s.saturating_sub(block_size - 1);
        let hi = s.min(block_size - 1);
        if s % 2 == 0 {
            for i in (lo..=hi).rev() {
                order.push((i, s - i));
            }
        } else {
            for i in lo..=hi {
                order.push((i, s - i));
            }
        }
    }
    order
}

/// 삼각형 근사의 대각선 한계 k = ceil(sqrt(2N))
pub fn diagonal_limit(coefficients_per_block: usize) -> usize {
    ((2 * coefficients_per_block) as f64).sqrt().ceil() as usize
}

/// 모든 블록에 공통으로 적용할 유지 마스크 (true = 유지)
pub fn retention_mask(block_size: usize, coefficients_per_block: usize, pattern: RetentionPattern) -> Array2<bool> {
    let mut mask = Array2::from_elem((block_size, block_size), false);
    match pattern {
        RetentionPattern::ZigZag => {
            for (r, c) in zigzag_order(block_size).into_iter().take(coefficients_per_block) {
                mask[(r, c)] = true;
            }
        }
        RetentionPattern::Diagonal => {
            let k = diagonal_limit(coefficients_per_block);
            mask.indexed_iter_mut().for_each(|((r, c), keep)| *keep = r + c < k);
        }
    }
    mask
}
