// crates/gcv_convert/src/io/table_csv.rs

//! CSV 数据集读写
//!
//! 第一行必须是表头，列名即字段名。每个单元格按内容推断类型
//! （见 [`CellValue::parse_inferred`]）。短行用空单元格补齐，
//! 超出表头宽度的行视为解析错误。
//!
//! # 使用示例
//!
//! ```
//! use gcv_convert::config::CsvOptions;
//! use gcv_convert::io::table_csv::{parse_csv_string, write_csv_string};
//!
//! let ds = parse_csv_string("latitud,longitud\n40.4168,-3.7038\n", &CsvOptions::default())?;
//! assert_eq!(ds.len(), 1);
//! assert_eq!(write_csv_string(&ds, &CsvOptions::default())?, "latitud,longitud\n40.4168,-3.7038\n");
//! # Ok::<(), gcv_convert::io::IoError>(())
//! ```

use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use super::error::{IoError, IoResult};
use crate::config::CsvOptions;
use crate::dataset::{CellValue, TabularDataset};

/// 从 CSV 文件加载数据集
pub fn read_csv(path: &Path, options: &CsvOptions) -> IoResult<TabularDataset> {
    let file = std::fs::File::open(path)?;
    parse_csv_reader(file, options, &path.to_string_lossy())
}

/// 从字符串解析 CSV 数据集
pub fn parse_csv_string(content: &str, options: &CsvOptions) -> IoResult<TabularDataset> {
    parse_csv_reader(content.as_bytes(), options, "<string>")
}

fn parse_csv_reader<R: Read>(reader: R, options: &CsvOptions, source: &str) -> IoResult<TabularDataset> {
    options.validate()?;

    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter_byte()?)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if columns.is_empty() {
        return Err(IoError::parse(source, 1, "缺少表头"));
    }
    let width = columns.len();
    let mut dataset = TabularDataset::new(columns);

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        // 表头是第 1 行
        let line = record.position().map_or(index + 2, |p| p.line() as usize);

        if record.len() > width {
            return Err(IoError::parse(
                source,
                line,
                format!("字段数 {} 超过表头列数 {}", record.len(), width),
            ));
        }

        let mut row: Vec<CellValue> = record.iter().map(CellValue::parse_inferred).collect();
        row.resize(width, CellValue::Empty);
        dataset.push_row(row)?;
    }

    tracing::debug!("Loaded {} rows from {}", dataset.len(), source);
    Ok(dataset)
}

/// 写出 CSV 文件
pub fn write_csv(path: &Path, dataset: &TabularDataset, options: &CsvOptions) -> IoResult<()> {
    let file = std::fs::File::create(path)?;
    write_csv_to(file, dataset, options)
}

/// 写出为 CSV 字符串
pub fn write_csv_string(dataset: &TabularDataset, options: &CsvOptions) -> IoResult<String> {
    let mut buf = Vec::new();
    write_csv_to(&mut buf, dataset, options)?;
    String::from_utf8(buf).map_err(|e| IoError::parse("<string>", 0, e.to_string()))
}

fn write_csv_to<W: Write>(writer: W, dataset: &TabularDataset, options: &CsvOptions) -> IoResult<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(options.delimiter_byte()?)
        .from_writer(writer);

    writer.write_record(dataset.columns())?;
    for row in dataset.rows() {
        writer.write_record(row.iter().map(CellValue::to_field_string))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_types() {
        let content = "id,este,norte,huso,hemisferio\n\
                       1,440290.458,4474257.382,30,N\n\
                       2,,abc,31,s\n";
        let ds = parse_csv_string(content, &CsvOptions::default()).unwrap();

        assert_eq!(ds.columns(), ["id", "este", "norte", "huso", "hemisferio"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.get(0, "este"), Some(&CellValue::Number(440_290.458)));
        assert_eq!(ds.get(0, "huso"), Some(&CellValue::Integer(30)));
        assert_eq!(ds.get(0, "hemisferio"), Some(&CellValue::Text("N".into())));
        assert_eq!(ds.get(1, "este"), Some(&CellValue::Empty));
        assert_eq!(ds.get(1, "norte"), Some(&CellValue::Text("abc".into())));
    }

    #[test]
    fn test_short_row_padded() {
        let ds = parse_csv_string("a,b,c\n1\n", &CsvOptions::default()).unwrap();
        assert_eq!(ds.row(0).unwrap(), [CellValue::Integer(1), CellValue::Empty, CellValue::Empty]);
    }

    #[test]
    fn test_long_row_rejected() {
        let err = parse_csv_string("a,b\n1,2\n1,2,3\n", &CsvOptions::default()).unwrap_err();
        match err {
            IoError::ParseError { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_semicolon_delimiter() {
        let options = CsvOptions::semicolon_separated();
        let ds = parse_csv_string("latitud;longitud\n40,5;-3\n", &options).unwrap();
        // 逗号小数不被识别为数值
        assert_eq!(ds.get(0, "latitud"), Some(&CellValue::Text("40,5".into())));
        assert_eq!(write_csv_string(&ds, &options).unwrap(), "latitud;longitud\n40,5;-3\n");
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("puntos.csv");
        std::fs::write(&path, "nombre,latitud,longitud\nMadrid,40.4168,-3.7038\n").unwrap();

        let ds = read_csv(&path, &CsvOptions::default()).unwrap();
        let out = dir.path().join("copia.csv");
        write_csv(&out, &ds, &CsvOptions::default()).unwrap();
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "nombre,latitud,longitud\nMadrid,40.4168,-3.7038\n"
        );
    }

    #[test]
    fn test_missing_file() {
        let err = read_csv(Path::new("/nonexistent/puntos.csv"), &CsvOptions::default()).unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }
}
