//! Wire types for the parts service.
//!
//! Field names follow the service's JSON (Spanish, mixed case); Rust-side
//! names are kept identical where practical so that a payload reads the same
//! in logs and in code.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::lenient;

// ============ Catalog ============

/// One row of `GET /marcasymodelos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandModelPair {
    /// Brand name (e.g. `TOYOTA`).
    pub marca: String,
    /// Model name (e.g. `COROLLA`).
    pub modelo: String,
}

// ============ Search ============

/// Query parameters of `GET /parte`.
///
/// Values are sent exactly as given; normalization is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartQuery {
    pub marca: String,
    pub modelo: String,
    pub parte: String,
}

/// A lightweight search row.
///
/// `id <= 0` means the row has no direct detail endpoint and must be resolved
/// through the composite inventory key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartResult {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub descripcion: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub modelo: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub ano: Option<String>,
    #[serde(
        rename = "nombreEmpresa",
        default,
        deserialize_with = "lenient::opt_text"
    )]
    pub nombre_empresa: Option<String>,

    // 组合键字段（仅 id <= 0 时使用）
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub empresa: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub vehiculo: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub categoria: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub parte: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub codigo_inventario: Option<String>,

    // 部分搜索结果已带有扩展字段
    #[serde(
        default,
        deserialize_with = "lenient::opt_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub cantidad: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub venta: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub observaciones: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub equivalencias: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub foto: Option<String>,

    /// Vendor block, when the search endpoint already embeds it.
    #[serde(
        rename = "datosEmpresa",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub datos_empresa: Option<VendorContact>,

    /// Fields not modelled above, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PartResult {
    /// Whether the row can be resolved through `GET /usados/{id}`.
    pub fn has_direct_id(&self) -> bool {
        self.id > 0
    }

    /// Composite key for `GET /inventarios`. Absent components are sent empty.
    pub fn inventory_key(&self) -> InventoryKey {
        let field = |v: &Option<String>| v.clone().unwrap_or_default();
        InventoryKey {
            empresa: field(&self.empresa),
            vehiculo: field(&self.vehiculo),
            categoria: field(&self.categoria),
            parte: field(&self.parte),
            cod_inventario: field(&self.codigo_inventario),
        }
    }
}

// ============ Detail ============

/// Query parameters of `GET /inventarios`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryKey {
    pub empresa: String,
    pub vehiculo: String,
    pub categoria: String,
    pub parte: String,
    pub cod_inventario: String,
}

/// Vendor contact block (`datosEmpresa`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorContact {
    #[serde(
        rename = "nombreEmpresa",
        default,
        deserialize_with = "lenient::opt_text"
    )]
    pub nombre_empresa: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub direccion: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub mapa: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub telefono: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub wa1: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub wa2: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub logourl: Option<String>,
}

/// Full detail record returned by either detail endpoint.
///
/// Every field is optional: the service may answer `{}` when it has nothing
/// beyond the search row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailRecord {
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub descripcion: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub modelo: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub ano: Option<String>,
    #[serde(
        rename = "nombreEmpresa",
        default,
        deserialize_with = "lenient::opt_text"
    )]
    pub nombre_empresa: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub empresa: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub vehiculo: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub categoria: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub parte: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub codigo_inventario: Option<String>,

    // 扩展字段
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub cantidad: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub venta: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub observaciones: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub equivalencias: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub foto: Option<String>,
    #[serde(rename = "datosEmpresa", default)]
    pub datos_empresa: Option<VendorContact>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DetailRecord {
    /// `true` when the payload carried no field at all (`{}`).
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
