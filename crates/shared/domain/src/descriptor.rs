use crate::product::Product;
use serde::{Deserialize, Serialize};

/// A partial product query. Absent fields act as wildcards, but a descriptor
/// with no fields at all matches nothing.
///
/// Unknown keys are ignored, so a full serialized product is a valid descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ProductDescriptor {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self { class: None, name: Some(name.into()) }
    }

    pub fn by_class(class: impl Into<String>) -> Self {
        Self { class: Some(class.into()), name: None }
    }

    pub fn exact(class: impl Into<String>, name: impl Into<String>) -> Self {
        Self { class: Some(class.into()), name: Some(name.into()) }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.class.is_none() && self.name.is_none()
    }

    /// Whether `product` satisfies every field this descriptor specifies.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if self.is_empty() {
            return false;
        }
        let name_ok = self.name.as_deref().is_none_or(|name| name == product.name());
        let class_ok = self.class.as_deref().is_none_or(|class| class == product.class());
        name_ok && class_ok
    }
}

/// Order request document: `{"order": [descriptor, ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub order: Vec<ProductDescriptor>,
}
