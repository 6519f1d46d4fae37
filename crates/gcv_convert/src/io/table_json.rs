// crates/gcv_convert/src/io/table_json.rs

//! JSON 记录数据集读写
//!
//! 格式为对象数组，每个对象是一行：
//!
//! ```json
//! [
//!   {"latitud": 40.4168, "longitud": -3.7038},
//!   {"latitud": "abc", "longitud": -3.7038}
//! ]
//! ```
//!
//! 列顺序按字段首次出现的顺序，缺失的字段为空单元格。

use std::path::Path;

use serde_json::{Map, Value};

use super::error::{IoError, IoResult};
use crate::dataset::{CellValue, TabularDataset};

/// 从 JSON 文件加载数据集
pub fn read_json(path: &Path) -> IoResult<TabularDataset> {
    let content = std::fs::read_to_string(path)?;
    records_from_str(&content, &path.to_string_lossy())
}

/// 从字符串解析 JSON 数据集
pub fn parse_json_string(content: &str) -> IoResult<TabularDataset> {
    records_from_str(content, "<string>")
}

/// 从 JSON 值构造数据集
pub fn dataset_from_value(value: &Value) -> IoResult<TabularDataset> {
    dataset_from_records(value, "<value>")
}

fn records_from_str(content: &str, source: &str) -> IoResult<TabularDataset> {
    let value: Value = serde_json::from_str(content)?;
    dataset_from_records(&value, source)
}

fn dataset_from_records(value: &Value, source: &str) -> IoResult<TabularDataset> {
    let records = value
        .as_array()
        .ok_or_else(|| IoError::parse(source, 0, "顶层必须是对象数组"))?;

    let mut objects: Vec<&Map<String, Value>> = Vec::with_capacity(records.len());
    let mut columns: Vec<String> = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let object = record
            .as_object()
            .ok_or_else(|| IoError::parse(source, index + 1, "记录必须是对象"))?;
        for key in object.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
        objects.push(object);
    }

    let mut dataset = TabularDataset::new(columns.iter().cloned());
    for object in objects {
        let row = columns
            .iter()
            .map(|c| object.get(c).map_or(CellValue::Empty, cell_from_json))
            .collect();
        dataset.push_row(row)?;
    }

    tracing::debug!("Loaded {} records from {}", dataset.len(), source);
    Ok(dataset)
}

fn cell_from_json(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Empty,
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => CellValue::Integer(i),
            (None, Some(f)) => CellValue::Number(f),
            (None, None) => CellValue::Text(n.to_string()),
        },
        Value::String(s) => CellValue::Text(s.clone()),
        other => CellValue::Text(other.to_string()),
    }
}

fn cell_to_json(cell: &CellValue) -> Value {
    match cell {
        CellValue::Empty => Value::Null,
        CellValue::Integer(i) => Value::from(*i),
        CellValue::Number(f) => serde_json::Number::from_f64(*f).map_or(Value::Null, Value::Number),
        CellValue::Text(s) => Value::String(s.clone()),
    }
}

/// 数据集转为 JSON 对象数组
pub fn dataset_to_value(dataset: &TabularDataset) -> Value {
    let records = dataset
        .rows()
        .iter()
        .map(|row| {
            let object: Map<String, Value> = dataset
                .columns()
                .iter()
                .zip(row)
                .map(|(column, cell)| (column.clone(), cell_to_json(cell)))
                .collect();
            Value::Object(object)
        })
        .collect();
    Value::Array(records)
}

/// 写出 JSON 文件
pub fn write_json(path: &Path, dataset: &TabularDataset) -> IoResult<()> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(file), &dataset_to_value(dataset))?;
    Ok(())
}
