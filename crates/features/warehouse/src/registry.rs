use crate::error::WarehouseError;
use depot_domain::state::ProductState;
use depot_domain::{Product, ProductKind, ProductSpec};
use fxhash::FxHashMap;
use strum::IntoEnumIterator;

/// Builds a product from its name and size.
pub type Constructor = fn(String, f64) -> Product;

/// Maps product tags to constructors. Used at delivery intake and when restoring snapshots.
#[derive(Debug, Clone, Default)]
pub struct ProductRegistry {
    constructors: FxHashMap<&'static str, Constructor>,
}

impl ProductRegistry {
    /// An empty registry; every tag is unknown until registered.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry holding every built-in product kind under its wire tag.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for kind in ProductKind::iter() {
            registry.register(kind.tag(), constructor_for(kind));
        }
        registry
    }

    /// Registers or replaces the constructor for `tag`.
    pub fn register(&mut self, tag: &'static str, constructor: Constructor) -> &mut Self {
        self.constructors.insert(tag, constructor);
        self
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.constructors.contains_key(tag)
    }

    /// Registered tags, sorted.
    #[must_use]
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.constructors.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    /// Creates a product of the kind registered under `tag`.
    ///
    /// # Errors
    /// * [`WarehouseError::UnknownProductKind`] if nothing is registered for `tag`.
    /// * [`WarehouseError::InvalidProduct`] if `size` is negative or not finite.
    pub fn construct(
        &self,
        tag: &str,
        name: impl Into<String>,
        size: f64,
    ) -> Result<Product, WarehouseError> {
        let constructor = self
            .constructors
            .get(tag)
            .ok_or_else(|| WarehouseError::UnknownProductKind { tag: tag.to_owned(), context: None })?;

        let name = name.into();
        if !size.is_finite() || size < 0.0 {
            return Err(WarehouseError::InvalidProduct {
                name,
                reason: format!("size must be a finite non-negative number, got {size}").into(),
                context: None,
            });
        }

        Ok(constructor(name, size))
    }

    /// Builds a whole delivery, stopping at the first bad entry.
    ///
    /// # Errors
    /// Propagates the first [`ProductRegistry::construct`] failure.
    pub fn construct_all(&self, specs: &[ProductSpec]) -> Result<Vec<Product>, WarehouseError> {
        specs.iter().map(|spec| self.construct(&spec.class, spec.name.as_str(), spec.size)).collect()
    }

    /// Rebuilds a stored product from its snapshot form; `flags` are recomputed from the kind.
    ///
    /// # Errors
    /// Same as [`ProductRegistry::construct`].
    pub fn from_state(&self, state: &ProductState) -> Result<Product, WarehouseError> {
        self.construct(&state.class, state.name.as_str(), state.size)
    }
}

macro_rules! constructor {
    ($kind:ident) => {{
        fn build(name: String, size: f64) -> Product {
            Product::new(ProductKind::$kind, name, size)
        }
        build as Constructor
    }};
}

fn constructor_for(kind: ProductKind) -> Constructor {
    match kind {
        ProductKind::AcetoneBarrel => constructor!(AcetoneBarrel),
        ProductKind::AstronautsIceCream => constructor!(AstronautsIceCream),
        ProductKind::ElectronicParts => constructor!(ElectronicParts),
        ProductKind::ExplosiveBarrel => constructor!(ExplosiveBarrel),
        ProductKind::GlassWare => constructor!(GlassWare),
        ProductKind::IndustrialServerRack => constructor!(IndustrialServerRack),
        ProductKind::Tv => constructor!(Tv),
    }
}
