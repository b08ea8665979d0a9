//! 搜索条件与按商家分组的结果

use serde::{Deserialize, Serialize};

use autoparts_provider::PartResult;

/// What the user typed into the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub brand: String,
    pub model: String,
    pub part_query: String,
}

impl SearchCriteria {
    #[must_use]
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        part_query: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            part_query: part_query.into(),
        }
    }
}

/// Search rows sharing one vendor name, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorGroup {
    pub vendor_name: String,
    pub items: Vec<PartResult>,
}

impl VendorGroup {
    /// Logo of the first row whose vendor block carries one.
    pub fn logo_url(&self) -> Option<&str> {
        self.items.iter().find_map(|item| {
            item.datos_empresa
                .as_ref()
                .and_then(|c| c.logourl.as_deref())
                .filter(|url| !url.trim().is_empty())
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
