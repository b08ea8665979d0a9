//! Plain-text rendering of the engine's view values.

use std::fmt::Write as _;

use autoparts_core::types::{ContactChannel, ResolvedPart};
use autoparts_core::{Catalog, NavigationState, VendorGroup, ViewSnapshot};
use autoparts_provider::PartResult;

const NO_RESULTS: &str = "No se encontraron resultados.";

/// Brands, or the models of one brand.
pub fn catalog(catalog: &Catalog, brand: Option<&str>) -> String {
    let mut out = String::new();
    match brand {
        Some(brand) => {
            let models = catalog.models(brand);
            if models.is_empty() {
                let _ = writeln!(out, "Marca desconocida: {brand}");
            } else {
                let _ = writeln!(out, "{brand}:");
                for model in models {
                    let _ = writeln!(out, "  {model}");
                }
            }
        }
        None => {
            for entry in catalog.entries() {
                let _ = writeln!(out, "{} ({} modelos)", entry.marca, entry.modelos.len());
            }
        }
    }
    out
}

/// Numbered vendor list.
pub fn vendor_list(groups: &[VendorGroup]) -> String {
    if groups.is_empty() {
        return format!("{NO_RESULTS}\n");
    }

    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {} - {} resultado(s)",
            i + 1,
            group.vendor_name,
            group.len()
        );
        if let Some(logo) = group.logo_url() {
            let _ = writeln!(out, "    logo: {logo}");
        }
    }
    out
}

/// Numbered items of one vendor.
pub fn vendor_items(vendor: &str, items: &[PartResult]) -> String {
    let mut out = format!("{vendor}\n");
    if items.is_empty() {
        let _ = writeln!(out, "{NO_RESULTS}");
        return out;
    }
    for (i, item) in items.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {} | {} {}",
            i + 1,
            item.descripcion.as_deref().unwrap_or("-"),
            item.modelo.as_deref().unwrap_or_default(),
            item.ano.as_deref().unwrap_or_default(),
        );
    }
    out
}

/// Detail card of a resolved part.
pub fn part_detail(part: &ResolvedPart, image_zoom: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", part.descripcion_text());
    let _ = writeln!(out, "  Modelo:        {}", part.modelo_text());
    let _ = writeln!(out, "  Año:           {}", part.ano_text());
    let _ = writeln!(out, "  Cantidad:      {}", part.cantidad_or_zero());
    let _ = writeln!(out, "  Precio:        ${:.2}", part.venta_or_zero());
    let _ = writeln!(out, "  Observaciones: {}", part.observaciones_text());
    let _ = writeln!(out, "  Equivalencias: {}", part.equivalencias_text());
    let _ = writeln!(out, "  Empresa:       {}", part.vendor_text());
    let _ = writeln!(out, "  Dirección:     {}", part.direccion_text());

    for channel in part.contact_channels() {
        let _ = match channel {
            ContactChannel::Phone(number) => writeln!(out, "  Teléfono:      {number}"),
            ContactChannel::WhatsApp(number) => writeln!(out, "  WhatsApp:      {number}"),
            ContactChannel::Map(url) => writeln!(out, "  Mapa:          {url}"),
        };
    }

    match (part.photo_url(), image_zoom) {
        (Some(url), true) => {
            let _ = writeln!(out, "\n[imagen ampliada] {url}");
        }
        (Some(url), false) => {
            let _ = writeln!(out, "  Foto:          {url}");
        }
        (None, _) => {
            let _ = writeln!(out, "  Foto:          (sin imagen)");
        }
    }
    out
}

/// Whole screen for a snapshot: current view, then loading line and notice.
pub fn view(snapshot: &ViewSnapshot) -> String {
    let mut out = match &snapshot.state {
        NavigationState::VendorList => vendor_list(&snapshot.groups),
        NavigationState::VendorDetail { vendor } => {
            vendor_items(vendor, snapshot.current_items())
        }
        NavigationState::PartDetail {
            part, image_zoom, ..
        } => part_detail(part, *image_zoom),
    };

    if snapshot.loading {
        out.push_str("Cargando...\n");
    }
    if let Some(kind) = snapshot.last_error {
        let label = if kind.is_recoverable() { "Aviso" } else { "Error" };
        let _ = writeln!(out, "{label}: {}", kind.message());
    }
    out
}
