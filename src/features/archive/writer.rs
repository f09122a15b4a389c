//! 内存 zip 压缩包构建
//!
//! 每个有效输入条目写一个 deflate 压缩的 zip 条目。
//! 条目名不去重（zip 格式允许同名条目），缺少载荷的条目静默跳过。

use std::io::{Cursor, Write};

use serde::Deserialize;
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use crate::{error::AppError, payload};

/// 条目名缺省值
const DEFAULT_ENTRY_NAME: &str = "file";

/// 待压缩的单个文件条目
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ArchiveEntry {
    /// 条目名（缺省为 "file"）
    #[serde(default)]
    pub name: Option<String>,
    /// 文件内容（base64，可带 data-URI 前缀）；缺失或为空时跳过该条目
    #[serde(default)]
    pub data_base64: Option<String>,
}

/// 把条目列表打成一个内存 zip。
///
/// 条目顺序与输入一致；`data_base64` 缺失或为空的条目不写入。
pub fn build_archive(entries: &[ArchiveEntry]) -> Result<Vec<u8>, AppError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in entries {
        let Some(data_base64) = entry.data_base64.as_deref().filter(|s| !s.is_empty()) else {
            continue;
        };
        let data = payload::decode_payload(data_base64)?;

        let name = entry.name.as_deref().unwrap_or(DEFAULT_ENTRY_NAME);
        writer.start_file(name, options)?;
        writer.write_all(&data)?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}
