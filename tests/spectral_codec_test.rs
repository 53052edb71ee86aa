//! 공개 API 통합 테스트

use spectral_codec::core::filter::build_mask;
use spectral_codec::core::quality::{mse, psnr, simplified_similarity};
use spectral_codec::{
    Band, BlockTransformCodec, CodecConfig, FilterParams, GrayscaleGrid, QualityReport,
    SpectralError, SpectrumTransform,
};

fn 그라디언트(height: usize, width: usize) -> GrayscaleGrid {
    let samples: Vec<u8> = (0..height * width)
        .map(|i| ((i / width) * 255 / height.max(1)) as u8)
        .collect();
    GrayscaleGrid::from_u8(height, width, &samples).unwrap()
}

#[test]
fn 공개_API_필터_왕복_테스트() {
    let grid = 그라디언트(40, 30);
    let mut transform = SpectrumTransform::new();
    let spectrum = transform.forward(&grid);
    let restored = transform.inverse(&spectrum);
    assert_eq!(restored.to_u8(), grid.to_u8());
    println!("✅ 40x30 DFT 왕복 후 8비트 샘플 일치");
}

#[test]
fn 공개_API_코덱_8비트_왕복_테스트() {
    let grid = 그라디언트(21, 34);
    let codec = BlockTransformCodec::from_config(&CodecConfig::default()).unwrap();
    let report = codec.compress_frequency(&grid, 64).unwrap();
    assert_eq!(report.reconstructed.to_u8(), grid.to_u8());
    assert_eq!(mse(&grid, &report.reconstructed.map(f64::round)).unwrap(), 0.0);
    assert_eq!(psnr(&grid, &grid).unwrap(), f64::INFINITY);
    println!("✅ 21x34 전체 유지 압축: 비율 {:.2}%", report.compression_ratio);
}

#[test]
fn 공개_API_에러_테스트() {
    assert!(matches!(
        GrayscaleGrid::new(0, 4, vec![]),
        Err(SpectralError::EmptyGrid { .. })
    ));
    assert!(matches!(
        GrayscaleGrid::new(2, 2, vec![1.0; 3]),
        Err(SpectralError::EmptyGrid { .. })
    ));
    assert!(matches!(
        FilterParams::gaussian(-1.0, Band::LowPass),
        Err(SpectralError::InvalidParameter { .. })
    ));

    let a = 그라디언트(8, 8);
    let b = 그라디언트(8, 16);
    assert!(matches!(simplified_similarity(&a, &b), Err(SpectralError::DimensionMismatch { .. })));
    assert!(QualityReport::build(&a, &b).is_err());

    let err = SpectralError::DimensionMismatch { expected: (8, 8), actual: (8, 16) };
    assert_eq!(err.to_string(), "dimension mismatch: expected 8x8, got 8x16");
}

#[test]
fn 공개_API_마스크_시각화_테스트() {
    let params = FilterParams::butterworth(5.0, 2, Band::HighPass).unwrap();
    let mask = build_mask(16, 16, &params).unwrap();
    let visual: Vec<u8> = mask.iter().map(|&m| (m * 255.0).round() as u8).collect();
    assert_eq!(visual.len(), 256);
    assert_eq!(visual[8 * 16 + 8], 0);
    assert!(visual[0] > 200);
    println!("✅ 고역 Butterworth 마스크: 중심 {}, 모서리 {}", visual[8 * 16 + 8], visual[0]);
}

#[test]
fn 클램핑_변환_테스트() {
    let grid = GrayscaleGrid::new(1, 4, vec![-3.2, 12.6, 255.4, 300.0]).unwrap();
    assert_eq!(grid.to_u8(), vec![0, 13, 255, 255]);
    assert_eq!(grid.clamped().to_vec(), vec![0.0, 12.6, 255.0, 255.0]);
}

#[test]
fn 빈_그리드_역직렬화_거부_테스트() {
    let empty = serde_json::from_str::<GrayscaleGrid>(r#"{"v":1,"dim":[0,0],"data":[]}"#);
    assert!(empty.is_err());
    let no_columns = serde_json::from_str::<GrayscaleGrid>(r#"{"v":1,"dim":[3,0],"data":[]}"#);
    assert!(no_columns.is_err());

    let grid = GrayscaleGrid::new(2, 3, vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0]).unwrap();
    let json = serde_json::to_string(&grid).unwrap();
    let restored: GrayscaleGrid = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, grid);
    assert_eq!(spectral_codec::core::quality::describe(&restored).max, 50.0);
    println!("✅ 빈 그리드 역직렬화 거부, 정상 그리드 {}", json);
}
