//! 宽松数值反序列化工具
//!
//! 服务端对同一字段时而返回数字、时而返回字符串（`"2015"` / `2015`），
//! 这里统一接受两种形式：
//! - `id`: 数字或数字字符串 -> `i64`，缺失或 `null` 视为 `0`
//! - 文本字段: 字符串或数字 -> `Option<String>`
//! - 数量/价格: 数字或数字字符串 -> `Option<i64>` / `Option<f64>`

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    String(String),
    I64(i64),
    F64(f64),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Self::String(s) => s,
            Self::I64(n) => n.to_string(),
            Self::F64(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

/// `id`：缺失、`null` 或空字符串都视为 `0`（走组合键查询）
pub fn id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(0),
        Some(Scalar::I64(n)) => Ok(n),
        #[allow(clippy::cast_possible_truncation)]
        Some(Scalar::F64(n)) => Ok(n as i64),
        Some(Scalar::String(s)) if s.trim().is_empty() => Ok(0),
        Some(Scalar::String(s)) => s
            .trim()
            .parse()
            .map_err(|e| Error::custom(format!("Invalid id {s:?}: {e}"))),
        Some(Scalar::Bool(b)) => Err(Error::custom(format!("Invalid id: {b}"))),
    }
}

/// 文本字段：字符串或数字
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_text))
}

/// 整数字段：数字或数字字符串，无法解析时视为缺失
pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::I64(n)) => Some(n),
        #[allow(clippy::cast_possible_truncation)]
        Some(Scalar::F64(n)) => Some(n as i64),
        Some(Scalar::String(s)) => s.trim().parse().ok(),
        Some(Scalar::Bool(_)) | None => None,
    })
}

/// 金额字段：数字或数字字符串（允许 `$` 前缀和千分位逗号）
#[allow(clippy::cast_precision_loss)]
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::I64(n)) => Some(n as f64),
        Some(Scalar::F64(n)) => Some(n),
        Some(Scalar::String(s)) => s
            .trim()
            .trim_start_matches('$')
            .replace(',', "")
            .trim()
            .parse()
            .ok(),
        Some(Scalar::Bool(_)) | None => None,
    })
}
