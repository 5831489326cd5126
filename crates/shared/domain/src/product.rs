use crate::flags::ProductFlags;
use crate::kind::ProductKind;
use crate::number::compact_float;
use crate::state::ProductState;
use serde::{Deserialize, Serialize, Serializer};

/// A stored or in-transit product.
///
/// Immutable after construction: the kind fixes the flags, only name and size vary.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    size: f64,
    kind: ProductKind,
}

impl Product {
    /// Creates a product without validating its size; intake goes through the registry.
    pub fn new(kind: ProductKind, name: impl Into<String>, size: f64) -> Self {
        Self { name: name.into(), size, kind }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn size(&self) -> f64 {
        self.size
    }

    #[must_use]
    pub const fn kind(&self) -> ProductKind {
        self.kind
    }

    #[must_use]
    pub const fn flags(&self) -> ProductFlags {
        self.kind.flags()
    }

    /// Wire tag of the product kind.
    #[must_use]
    pub fn class(&self) -> &'static str {
        self.kind.tag()
    }

    /// Full wire form of the product: class, flags, name and size.
    #[must_use]
    pub fn to_state(&self) -> ProductState {
        ProductState {
            class: self.class().to_owned(),
            flags: self.flags(),
            name: self.name.clone(),
            size: self.size,
        }
    }
}

impl Serialize for Product {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_state().serialize(serializer)
    }
}

/// Delivery entry as it arrives on the wire: `{"class","name","size"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSpec {
    pub class: String,
    pub name: String,
    #[serde(with = "compact_float")]
    pub size: f64,
}

impl ProductSpec {
    pub fn new(class: impl Into<String>, name: impl Into<String>, size: f64) -> Self {
        Self { class: class.into(), name: name.into(), size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_sorted_keys() {
        let tv = Product::new(ProductKind::Tv, "Sony Bravia", 50.0);
        let json = serde_json::to_string(&tv).expect("serialize product");
        assert_eq!(
            json,
            r#"{"class":"TV","flags":["fragile","keepDry"],"name":"Sony Bravia","size":50}"#
        );
    }

    #[test]
    fn flags_follow_kind() {
        let barrel = Product::new(ProductKind::AcetoneBarrel, "Acetone Barrel", 200.0);
        assert!(barrel.flags().contains(ProductFlags::FIRE_HAZARDOUS));
        assert!(barrel.flags().contains(ProductFlags::ESD_SENSITIVE));
        assert!(!barrel.flags().contains(ProductFlags::KEEP_DRY));
        assert_eq!(barrel.class(), "AcetoneBarrel");
    }

    #[test]
    fn spec_reads_delivery_entries() {
        let spec: ProductSpec =
            serde_json::from_str(r#"{"class":"GlassWare","name":"Wine Glass","size":0.2}"#)
                .expect("deserialize spec");
        assert_eq!(spec, ProductSpec::new("GlassWare", "Wine Glass", 0.2));
    }
}
