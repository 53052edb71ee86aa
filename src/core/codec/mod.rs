pub mod dct;
pub mod coefficients;
pub mod retention;
pub mod block_codec;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

// 재수출
pub use dct::{CoefficientSummary, Dct2d, WholeImageDct};
pub use coefficients::BlockCoefficientGrid;
pub use retention::{diagonal_limit, retention_mask, zigzag_order, RetentionPattern};
pub use block_codec::{padding_for, percentile, BlockTransformCodec, CompressionReport};
