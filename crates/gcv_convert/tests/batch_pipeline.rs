//! crates/gcv_convert/tests/batch_pipeline.rs
//!
//! 批量转换端到端测试
//!
//! 覆盖：
//! - 文件读入 -> 批量转换 -> 写出的完整流程
//! - 正向结果再做逆向转换能还原原始坐标
//! - 结构错误与行数超限整批拒绝

use gcv_convert::io::{default_output_path, read_dataset, write_dataset};
use gcv_convert::{
    BatchConfig, BatchConversionPipeline, CellValue, ConversionDirection, ConvertErrorKind,
    CsvOptions, TabularDataset,
};

// ============================================================
// 测试辅助设施
// ============================================================

const POINTS_CSV: &str = "nombre,latitud,longitud\n\
Madrid,40.4168,-3.7038\n\
Sydney,-33.9,151\n\
Roto,abc,-3.7038\n\
Polo,90,0\n\
Fuera,91,0\n\
Antimeridiano,0,180\n";

fn number(ds: &TabularDataset, row: usize, column: &str) -> f64 {
    match ds.get(row, column) {
        Some(CellValue::Number(v)) => *v,
        Some(CellValue::Integer(v)) => *v as f64,
        other => panic!("row {row} column {column}: expected number, got {other:?}"),
    }
}

fn text<'a>(ds: &'a TabularDataset, row: usize, column: &str) -> &'a str {
    match ds.get(row, column) {
        Some(CellValue::Text(s)) => s.as_str(),
        other => panic!("row {row} column {column}: expected text, got {other:?}"),
    }
}

// ============================================================
// 测试
// ============================================================

#[test]
fn test_csv_forward_then_inverse() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("puntos.csv");
    std::fs::write(&input, POINTS_CSV).unwrap();

    let options = CsvOptions::default();
    let pipeline = BatchConversionPipeline::default();

    // 正向
    let ds = read_dataset(&input, &options).unwrap();
    let forward = pipeline.run(ConversionDirection::ToUtm, ds).unwrap();
    assert_eq!(forward.report.total, 6);
    assert_eq!(forward.report.failed, 2);

    let utm_path = default_output_path(&input, ConversionDirection::ToUtm);
    assert_eq!(utm_path.file_name().unwrap(), "utm_puntos.csv");
    write_dataset(&utm_path, &forward.dataset, &options).unwrap();

    // 写出再读回
    let utm = read_dataset(&utm_path, &options).unwrap();
    assert_eq!(
        utm.columns(),
        ["nombre", "latitud", "longitud", "este", "norte", "huso", "hemisferio"]
    );
    assert_eq!(text(&utm, 0, "nombre"), "Madrid");
    assert_eq!(number(&utm, 0, "huso"), 30.0);
    assert_eq!(text(&utm, 1, "hemisferio"), "S");
    assert_eq!(number(&utm, 1, "huso"), 56.0);
    assert_eq!(text(&utm, 2, "este"), "ERROR");
    assert!(text(&utm, 2, "norte").contains("latitud"));
    assert_eq!(text(&utm, 4, "este"), "ERROR");
    assert_eq!(number(&utm, 5, "huso"), 60.0);

    // 逆向：失败行的 este 是标记文本，逆向时同样失败
    let inverse = pipeline.run(ConversionDirection::ToGeographic, utm).unwrap();
    let geo = &inverse.dataset;
    assert_eq!(geo.len(), 6);
    assert_eq!(inverse.report.failed, 2);

    for (row, lat, lon) in [(0, 40.4168, -3.7038), (1, -33.9, 151.0)] {
        let got_lat = number(geo, row, "latitud");
        let got_lon = number(geo, row, "longitud");
        assert!(
            (got_lat - lat).abs() < 1e-6 && (got_lon - lon).abs() < 1e-6,
            "row {row}: ({got_lat}, {got_lon}) != ({lat}, {lon})"
        );
    }
    assert_eq!(text(geo, 2, "latitud"), "ERROR");
    assert!(text(geo, 2, "longitud").contains("este"));
    assert!((number(geo, 3, "latitud") - 90.0).abs() < 1e-9);
    // 带 60 中央子午线 177°，180° 在带内
    assert!((number(geo, 5, "longitud").abs() - 180.0).abs() < 1e-9);
}

#[test]
fn test_json_inverse() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("utm.json");
    std::fs::write(
        &input,
        r#"[
            {"este": 500000, "norte": 0, "huso": 31, "hemisferio": "N"},
            {"este": 500000, "norte": 0, "huso": 31, "hemisferio": " N"},
            {"este": 500000, "norte": 0, "huso": 31.5, "hemisferio": "N"}
        ]"#,
    )
    .unwrap();

    let ds = read_dataset(&input, &CsvOptions::default()).unwrap();
    let out = BatchConversionPipeline::default().run_inverse(ds).unwrap();

    assert!(number(&out.dataset, 0, "latitud").abs() < 1e-12);
    assert!((number(&out.dataset, 0, "longitud") - 3.0).abs() < 1e-12);
    // 半球标识不去空白
    assert!(text(&out.dataset, 1, "longitud").contains("半球"));
    assert!(text(&out.dataset, 2, "longitud").contains("huso"));
}

#[test]
fn test_structural_error_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("incompleto.csv");
    std::fs::write(&input, "latitud,otro\n40,1\n").unwrap();

    let ds = read_dataset(&input, &CsvOptions::default()).unwrap();
    let err = BatchConversionPipeline::default().run_forward(ds).unwrap_err();
    assert_eq!(err.kind(), ConvertErrorKind::Structural);
    assert!(err.is_batch_fatal());

    let err = BatchConversionPipeline::default()
        .run_inverse(TabularDataset::new(["este", "norte"]))
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("huso") && msg.contains("hemisferio"), "{msg}");
}

#[test]
fn test_config_file_drives_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("batch.json");
    std::fs::write(&config_path, r#"{"max_rows": 3, "error_marker": "FALLO"}"#).unwrap();

    let config = BatchConfig::from_file(&config_path).unwrap();
    let pipeline = BatchConversionPipeline::new(config);

    let rows = (0..4)
        .map(|i| vec![CellValue::Number(f64::from(i)), CellValue::Number(0.0)])
        .collect();
    let ds = TabularDataset::from_rows(["latitud", "longitud"], rows).unwrap();
    let err = pipeline.run_forward(ds).unwrap_err();
    assert_eq!(err.kind(), ConvertErrorKind::RowLimit);

    let ds = TabularDataset::from_rows(
        ["latitud", "longitud"],
        vec![vec![CellValue::Empty, CellValue::Number(0.0)]],
    )
    .unwrap();
    let out = pipeline.run_forward(ds).unwrap();
    assert_eq!(text(&out.dataset, 0, "este"), "FALLO");
}
