//! 品牌/车型目录

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use autoparts_provider::BrandModelPair;

/// How the flat catalog listing is folded into a [`Catalog`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogOptions {
    /// Drop repeated models within a brand. Off by default: the service does
    /// not promise unique pairs, so duplicates are shown as received.
    pub dedupe_models: bool,
}

/// One brand and its models, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandEntry {
    pub marca: String,
    pub modelos: Vec<String>,
}

/// Brand → models mapping used to seed the search form.
///
/// Built in one go from the service listing and never patched afterwards; a
/// reload produces a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    brands: Vec<BrandEntry>,
}

impl Catalog {
    /// Folds `{marca, modelo}` pairs into a catalog.
    ///
    /// Brands keep the order of their first appearance, models the order in
    /// which they were listed. Pairs with a blank brand or model are skipped.
    pub fn from_pairs<I>(pairs: I, options: CatalogOptions) -> Self
    where
        I: IntoIterator<Item = BrandModelPair>,
    {
        let mut brands: Vec<BrandEntry> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for BrandModelPair { marca, modelo } in pairs {
            if marca.trim().is_empty() || modelo.trim().is_empty() {
                continue;
            }

            let slot = match index.get(&marca) {
                Some(&i) => i,
                None => {
                    index.insert(marca.clone(), brands.len());
                    brands.push(BrandEntry {
                        marca,
                        modelos: Vec::new(),
                    });
                    brands.len() - 1
                }
            };

            let modelos = &mut brands[slot].modelos;
            if options.dedupe_models && modelos.contains(&modelo) {
                continue;
            }
            modelos.push(modelo);
        }

        Self { brands }
    }

    /// Brand names in display order.
    pub fn brands(&self) -> impl Iterator<Item = &str> {
        self.brands.iter().map(|b| b.marca.as_str())
    }

    /// Models of `marca`; empty for an unknown brand.
    pub fn models(&self, marca: &str) -> &[String] {
        self.brands
            .iter()
            .find(|b| b.marca == marca)
            .map(|b| b.modelos.as_slice())
            .unwrap_or_default()
    }

    pub fn contains(&self, marca: &str, modelo: &str) -> bool {
        self.models(marca).iter().any(|m| m == modelo)
    }

    pub fn entries(&self) -> &[BrandEntry] {
        &self.brands
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }

    /// Number of brands.
    pub fn len(&self) -> usize {
        self.brands.len()
    }
}
