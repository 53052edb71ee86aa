//! # 주파수 영역 이미지 변환 핵심 모듈
//!
//! 스펙트럼 변환, 주파수 마스크 필터, 블록 DCT 코덱, 품질 분석의 구성 요소들

pub mod error;
pub mod types;
pub mod config;
pub mod spectrum;
pub mod filter;
pub mod codec;
pub mod quality;


// 주요 타입들 재수출
pub use error::{Result, SpectralError};
pub use types::{GrayscaleGrid, PIXEL_MAX};
pub use config::{CodecConfig, FilterConfig};
pub use spectrum::*;
pub use filter::*;
pub use codec::*;
pub use quality::*;
