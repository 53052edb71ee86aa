use std::fs;
use std::process;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use spectral_codec::core::quality::CompressionStats;
use spectral_codec::core::spectrum::spectrum_info;
use spectral_codec::{
    BlockTransformCodec, CodecConfig, FilterConfig, GrayscaleGrid, QualityReport, SpectrumTransform,
};

/// `--config` JSON 파일 형식
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct ReportConfig {
    filter: FilterConfig,
    codec: CodecConfig,
}

#[derive(Debug, Serialize)]
struct ReportOutput {
    height: usize,
    width: usize,
    filter: FilterConfig,
    filter_quality: QualityReport,
    codec: CodecConfig,
    threshold: CompressionStats,
    frequency: CompressionStats,
}

fn main() {
    env_logger::init();

    let matches = Command::new("spectral_report")
        .version("0.1.0")
        .about("합성 그레이스케일 이미지에 대한 주파수 필터/블록 DCT 압축 보고서")
        .arg(
            Arg::new("size")
                .long("size")
                .short('s')
                .value_name("PIXELS")
                .help("합성 이미지 한 변 크기")
                .default_value("128"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("노이즈 시드")
                .default_value("42"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("필터/코덱 구성 JSON 파일"),
        )
        .arg(
            Arg::new("filter")
                .long("filter")
                .value_name("KIND")
                .value_parser(["ideal", "gaussian", "butterworth"])
                .help("필터 종류"),
        )
        .arg(
            Arg::new("high-pass")
                .long("high-pass")
                .action(ArgAction::SetTrue)
                .help("고역 통과 필터 사용"),
        )
        .arg(
            Arg::new("cutoff")
                .long("cutoff")
                .value_name("VALUE")
                .help("차단 반경 또는 가우시안 시그마"),
        )
        .arg(
            Arg::new("block-size")
                .long("block-size")
                .value_name("SIZE")
                .help("DCT 블록 크기"),
        )
        .arg(
            Arg::new("keep")
                .long("keep")
                .value_name("PERCENT")
                .help("임계값 압축에서 유지할 계수 비율"),
        )
        .arg(
            Arg::new("coefficients")
                .long("coefficients")
                .short('n')
                .value_name("N")
                .help("주파수 유지 압축에서 블록당 계수 수"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("JSON으로 출력"),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("❌ {e:#}");
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let size: usize = parse_arg(matches, "size")?.unwrap_or(128);
    let seed: u64 = parse_arg(matches, "seed")?.unwrap_or(42);
    let mut config = load_config(matches)?;

    if let Some(kind) = matches.get_one::<String>("filter") {
        config.filter.kind = serde_json::from_value(serde_json::Value::String(kind.clone()))
            .with_context(|| format!("unknown filter kind {kind}"))?;
    }
    if matches.get_flag("high-pass") {
        config.filter.band = spectral_codec::Band::HighPass;
    }
    if let Some(cutoff) = parse_arg::<f64>(matches, "cutoff")? {
        config.filter.radius = cutoff;
        config.filter.sigma = cutoff;
    }
    if let Some(block_size) = parse_arg(matches, "block-size")? {
        config.codec.block_size = block_size;
    }
    if let Some(keep) = parse_arg(matches, "keep")? {
        config.codec.keep_percent = keep;
    }
    if let Some(n) = parse_arg(matches, "coefficients")? {
        config.codec.coefficients_per_block = n;
    }
    config.codec.validate().context("invalid codec configuration")?;
    let params = config.filter.to_params().context("invalid filter configuration")?;

    let image = synthetic_image(size, seed)?;
    info!("synthetic image {}x{} (seed {})", size, size, seed);

    let (filtered, _mask) = spectral_codec::core::filter::filter_grid(&image, &params)?;
    let filter_quality = QualityReport::build(&image, &filtered)?;

    let codec = BlockTransformCodec::from_config(&config.codec)?;
    let threshold_report = codec.compress_threshold(&image, config.codec.keep_percent)?;
    let threshold = CompressionStats::measure(&image, &threshold_report)?;
    let frequency_report = codec.compress_frequency(&image, config.codec.coefficients_per_block)?;
    let frequency = CompressionStats::measure(&image, &frequency_report)?;

    if matches.get_flag("json") {
        let output = ReportOutput {
            height: size,
            width: size,
            filter: config.filter,
            filter_quality,
            codec: config.codec,
            threshold,
            frequency,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let info = spectrum_info(&SpectrumTransform::new().forward(&image));
    println!(
        "🔍 spectrum: {}x{}, log magnitude [{:.2}, {:.2}], phase [{:.3}, {:.3}]",
        info.height, info.width, info.log_magnitude_min, info.log_magnitude_max, info.phase_min, info.phase_max
    );
    println!();
    println!("{:?} {:?} filter", config.filter.kind, config.filter.band);
    println!("{filter_quality}");
    println!();
    println!("📦 block DCT ({}x{})", config.codec.block_size, config.codec.block_size);
    print_compression(&format!("threshold keep {}%", config.codec.keep_percent), &threshold);
    print_compression(&format!("retain {} per block", config.codec.coefficients_per_block), &frequency);
    Ok(())
}

fn print_compression(label: &str, stats: &CompressionStats) {
    println!(
        "  {:<28} ratio {:>6.2}%  mse {:>9.4}  psnr {:>6.2} dB",
        label, stats.compression_ratio, stats.mse, stats.psnr
    );
}

fn parse_arg<T>(matches: &ArgMatches, name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    matches
        .get_one::<String>(name)
        .map(|raw| raw.parse::<T>().with_context(|| format!("invalid --{name} value {raw}")))
        .transpose()
}

fn load_config(matches: &ArgMatches) -> Result<ReportConfig> {
    let Some(path) = matches.get_one::<String>("config") else {
        return Ok(ReportConfig::default());
    };
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {path}"))
}

/// 수평 그라디언트 + 16픽셀 체커보드 + 균등 노이즈
fn synthetic_image(size: usize, seed: u64) -> Result<GrayscaleGrid> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise: Vec<f64> = (0..size * size).map(|_| rng.gen_range(-12.0..12.0)).collect();
    let span = size.saturating_sub(1).max(1) as f64;
    let grid = GrayscaleGrid::from_fn(size, size, |(r, c)| {
        let gradient = 160.0 * c as f64 / span;
        let checker = if (r / 16 + c / 16) % 2 == 0 { 60.0 } else { 0.0 };
        (gradient + checker + noise[r * size + c] + 20.0).clamp(0.0, 255.0)
    })?;
    Ok(grid)
}
