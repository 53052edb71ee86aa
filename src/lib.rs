//! 주파수 영역 이미지 변환 라이브러리
//!
//! 단일 채널 강도 그리드에 대한 2D DFT 필터링(이상/가우시안/Butterworth 저역·고역 통과),
//! 8×8 블록 DCT 압축(크기 임계값/저주파 유지), 그리고 MSE·PSNR·단순 SSIM·스펙트럼
//! 에너지 보존율 같은 품질 지표를 제공한다.

pub mod core;

// 핵심 모듈들 재수출
pub use crate::core::{
    // 데이터 구조
    GrayscaleGrid, ComplexSpectrum, SpectrumOrder, FilterMask, BlockCoefficientGrid,
    CompressionReport,
    // 변환기
    SpectrumTransform, BlockTransformCodec, WholeImageDct,
    // 필터 파라미터
    Band, FilterKind, FilterParams,
    // 구성 및 에러
    CodecConfig, FilterConfig, SpectralError, Result,
    // 품질 분석
    QualityReport, Stats,
};
