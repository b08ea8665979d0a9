//! 合并后的配件详情

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use autoparts_provider::{DetailRecord, PartResult, VendorContact};

/// Placeholder shown for a missing text field.
pub const NOT_AVAILABLE: &str = "No disponible";

/// A search row merged with whatever detail the service returned.
///
/// Fields stay optional here; defaults are applied only by the display
/// accessors so that the stored record keeps every original value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPart {
    pub id: i64,
    pub descripcion: Option<String>,
    pub modelo: Option<String>,
    pub ano: Option<String>,
    pub nombre_empresa: Option<String>,
    pub empresa: Option<String>,
    pub vehiculo: Option<String>,
    pub categoria: Option<String>,
    pub parte: Option<String>,
    pub codigo_inventario: Option<String>,
    pub cantidad: Option<i64>,
    pub venta: Option<f64>,
    pub observaciones: Option<String>,
    pub equivalencias: Option<String>,
    pub foto: Option<String>,
    pub datos_empresa: Option<VendorContact>,
    pub extra: Map<String, Value>,
}

/// A way to reach the vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum ContactChannel {
    Phone(String),
    WhatsApp(String),
    Map(String),
}

impl From<PartResult> for ResolvedPart {
    fn from(item: PartResult) -> Self {
        Self {
            id: item.id,
            descripcion: item.descripcion,
            modelo: item.modelo,
            ano: item.ano,
            nombre_empresa: item.nombre_empresa,
            empresa: item.empresa,
            vehiculo: item.vehiculo,
            categoria: item.categoria,
            parte: item.parte,
            codigo_inventario: item.codigo_inventario,
            cantidad: item.cantidad,
            venta: item.venta,
            observaciones: item.observaciones,
            equivalencias: item.equivalencias,
            foto: item.foto,
            datos_empresa: item.datos_empresa,
            extra: item.extra,
        }
    }
}

impl ResolvedPart {
    /// Lays `detail` over `item`. Detail values win where both are present;
    /// anything the detail lacks is kept from the row.
    #[must_use]
    pub fn merge(item: PartResult, detail: DetailRecord) -> Self {
        let mut extra = item.extra;
        extra.extend(detail.extra);

        Self {
            id: detail.id.unwrap_or(item.id),
            descripcion: detail.descripcion.or(item.descripcion),
            modelo: detail.modelo.or(item.modelo),
            ano: detail.ano.or(item.ano),
            nombre_empresa: detail.nombre_empresa.or(item.nombre_empresa),
            empresa: detail.empresa.or(item.empresa),
            vehiculo: detail.vehiculo.or(item.vehiculo),
            categoria: detail.categoria.or(item.categoria),
            parte: detail.parte.or(item.parte),
            codigo_inventario: detail.codigo_inventario.or(item.codigo_inventario),
            cantidad: detail.cantidad.or(item.cantidad),
            venta: detail.venta.or(item.venta),
            observaciones: detail.observaciones.or(item.observaciones),
            equivalencias: detail.equivalencias.or(item.equivalencias),
            foto: detail.foto.or(item.foto),
            datos_empresa: detail.datos_empresa.or(item.datos_empresa),
            extra,
        }
    }

    pub fn descripcion_text(&self) -> &str {
        text_or_default(self.descripcion.as_deref())
    }

    pub fn modelo_text(&self) -> &str {
        text_or_default(self.modelo.as_deref())
    }

    pub fn ano_text(&self) -> &str {
        text_or_default(self.ano.as_deref())
    }

    pub fn observaciones_text(&self) -> &str {
        text_or_default(self.observaciones.as_deref())
    }

    pub fn equivalencias_text(&self) -> &str {
        text_or_default(self.equivalencias.as_deref())
    }

    /// Vendor name from the row, then from the contact block.
    pub fn vendor_text(&self) -> &str {
        let from_contact = self
            .datos_empresa
            .as_ref()
            .and_then(|c| c.nombre_empresa.as_deref());
        text_or_default(non_blank(self.nombre_empresa.as_deref()).or(from_contact))
    }

    pub fn cantidad_or_zero(&self) -> i64 {
        self.cantidad.unwrap_or(0)
    }

    pub fn venta_or_zero(&self) -> f64 {
        self.venta.unwrap_or(0.0)
    }

    /// Photo URL, if the part has a usable one.
    pub fn photo_url(&self) -> Option<&str> {
        non_blank(self.foto.as_deref())
    }

    pub fn direccion_text(&self) -> &str {
        self.contact_field(|c| c.direccion.as_deref())
    }

    pub fn telefono_text(&self) -> &str {
        self.contact_field(|c| c.telefono.as_deref())
    }

    pub fn logo_url(&self) -> Option<&str> {
        self.datos_empresa
            .as_ref()
            .and_then(|c| non_blank(c.logourl.as_deref()))
    }

    /// Every non-blank contact channel, phone first.
    pub fn contact_channels(&self) -> Vec<ContactChannel> {
        let Some(contact) = &self.datos_empresa else {
            return Vec::new();
        };

        let mut channels = Vec::new();
        if let Some(phone) = non_blank(contact.telefono.as_deref()) {
            channels.push(ContactChannel::Phone(phone.to_string()));
        }
        for wa in [&contact.wa1, &contact.wa2] {
            if let Some(number) = non_blank(wa.as_deref()) {
                channels.push(ContactChannel::WhatsApp(number.to_string()));
            }
        }
        if let Some(map) = non_blank(contact.mapa.as_deref()) {
            channels.push(ContactChannel::Map(map.to_string()));
        }
        channels
    }

    fn contact_field<'a>(&'a self, pick: impl Fn(&'a VendorContact) -> Option<&'a str>) -> &'a str {
        self.datos_empresa
            .as_ref()
            .and_then(|c| non_blank(pick(c)))
            .unwrap_or("")
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn text_or_default(value: Option<&str>) -> &str {
    non_blank(value).unwrap_or(NOT_AVAILABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> PartResult {
        let mut extra = Map::new();
        extra.insert("estado".to_string(), Value::from("usado"));
        PartResult {
            id: 42,
            descripcion: Some("Filtro de aire".to_string()),
            modelo: Some("COROLLA".to_string()),
            ano: Some("2012".to_string()),
            nombre_empresa: Some("Pana Autoparts".to_string()),
            extra,
            ..PartResult::default()
        }
    }

    #[test]
    fn base_conversion_keeps_every_row_field() {
        let resolved = ResolvedPart::from(row());
        assert_eq!(resolved.id, 42);
        assert_eq!(resolved.descripcion_text(), "Filtro de aire");
        assert_eq!(resolved.extra.get("estado"), Some(&Value::from("usado")));
        assert!(resolved.datos_empresa.is_none());
    }

    #[test]
    fn detail_wins_and_row_fills_gaps() {
        let mut detail_extra = Map::new();
        detail_extra.insert("estado".to_string(), Value::from("reparado"));
        detail_extra.insert("garantia".to_string(), Value::from("30 dias"));
        let detail = DetailRecord {
            descripcion: Some("Filtro de aire original".to_string()),
            cantidad: Some(3),
            venta: Some(25.5),
            extra: detail_extra,
            ..DetailRecord::default()
        };

        let merged = ResolvedPart::merge(row(), detail);

        assert_eq!(merged.id, 42);
        assert_eq!(merged.descripcion_text(), "Filtro de aire original");
        assert_eq!(merged.modelo_text(), "COROLLA");
        assert_eq!(merged.ano_text(), "2012");
        assert_eq!(merged.cantidad_or_zero(), 3);
        assert_eq!(merged.extra.get("estado"), Some(&Value::from("reparado")));
        assert_eq!(merged.extra.get("garantia"), Some(&Value::from("30 dias")));
    }

    #[test]
    fn extended_row_fields_survive_a_sparse_detail() {
        let item = PartResult {
            foto: Some("https://img/42.jpg".to_string()),
            cantidad: Some(3),
            venta: Some(25.0),
            ..row()
        };
        assert_eq!(ResolvedPart::from(item.clone()).photo_url(), Some("https://img/42.jpg"));

        let detail = DetailRecord {
            observaciones: Some("Sin golpes".to_string()),
            ..DetailRecord::default()
        };
        let merged = ResolvedPart::merge(item, detail);

        assert_eq!(merged.photo_url(), Some("https://img/42.jpg"));
        assert_eq!(merged.cantidad_or_zero(), 3);
        assert!((merged.venta_or_zero() - 25.0).abs() < f64::EPSILON);
        assert_eq!(merged.observaciones_text(), "Sin golpes");
    }

    #[test]
    fn merging_empty_detail_equals_base() {
        let merged = ResolvedPart::merge(row(), DetailRecord::default());
        assert_eq!(merged, ResolvedPart::from(row()));
    }

    #[test]
    fn display_defaults_for_missing_fields() {
        let resolved = ResolvedPart::default();
        assert_eq!(resolved.descripcion_text(), NOT_AVAILABLE);
        assert_eq!(resolved.observaciones_text(), NOT_AVAILABLE);
        assert_eq!(resolved.vendor_text(), NOT_AVAILABLE);
        assert_eq!(resolved.cantidad_or_zero(), 0);
        assert!(resolved.venta_or_zero().abs() < f64::EPSILON);
        assert_eq!(resolved.direccion_text(), "");
        assert_eq!(resolved.telefono_text(), "");
        assert!(resolved.photo_url().is_none());
        assert!(resolved.contact_channels().is_empty());
        // 默认值只影响展示
        assert!(resolved.descripcion.is_none());
    }

    #[test]
    fn vendor_name_falls_back_to_contact_block() {
        let resolved = ResolvedPart {
            nombre_empresa: Some(String::new()),
            datos_empresa: Some(VendorContact {
                nombre_empresa: Some("Rivas Autoparts".to_string()),
                ..VendorContact::default()
            }),
            ..ResolvedPart::default()
        };
        assert_eq!(resolved.vendor_text(), "Rivas Autoparts");
    }

    #[test]
    fn contact_channels_skip_blank_entries() {
        let resolved = ResolvedPart {
            datos_empresa: Some(VendorContact {
                telefono: Some("22736000".to_string()),
                wa1: Some(String::new()),
                wa2: Some("70001111".to_string()),
                mapa: Some("https://maps.example/rivas".to_string()),
                ..VendorContact::default()
            }),
            ..ResolvedPart::default()
        };

        assert_eq!(
            resolved.contact_channels(),
            vec![
                ContactChannel::Phone("22736000".to_string()),
                ContactChannel::WhatsApp("70001111".to_string()),
                ContactChannel::Map("https://maps.example/rivas".to_string()),
            ]
        );
    }
}
