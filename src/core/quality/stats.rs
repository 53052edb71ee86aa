//! 기술 통계

use serde::{Deserialize, Serialize};

use crate::core::types::GrayscaleGrid;

/// 그리드 하나의 기술 통계 (모분산 기준)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub mean: f64,
    pub std: f64,
    pub variance: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

pub fn describe(grid: &GrayscaleGrid) -> Stats {
    let n = grid.len() as f64;
    let mean = grid.iter().sum::<f64>() / n;
    let variance = grid.iter().map(|&v| (v - mean) * (v - mean)).sum::<f64>() / n;

    let mut sorted = grid.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    Stats {
        mean,
        std: variance.sqrt(),
        variance,
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        median,
    }
}
