//! 주파수 변환 서브시스템의 에러 타입

use thiserror::Error;

/// 필터/코덱/품질 분석 과정에서 발생하는 에러
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpectralError {
    /// 범위를 벗어난 파라미터 (radius, sigma, order, block_size 등).
    /// 배열 연산을 시작하기 전에 거부된다.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    /// 짝을 이루는 연산 간 형태 불일치 (마스크/스펙트럼/그리드)
    #[error("dimension mismatch: expected {}x{}, got {}x{}", expected.0, expected.1, actual.0, actual.1)]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// 높이나 너비가 0이거나 샘플 수가 형태와 맞지 않는 그리드
    #[error("empty or malformed grid: {height}x{width} with {len} samples")]
    EmptyGrid {
        height: usize,
        width: usize,
        len: usize,
    },
}

impl SpectralError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SpectralError::InvalidParameter { name, reason: reason.into() }
    }

    /// 두 형태가 다르면 DimensionMismatch
    pub(crate) fn ensure_same_shape(expected: (usize, usize), actual: (usize, usize)) -> Result<()> {
        if expected != actual {
            return Err(SpectralError::DimensionMismatch { expected, actual });
        }
        Ok(())
    }
}

pub type Result<T> = std::result::Result<T, SpectralError>;
