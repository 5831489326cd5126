use bitflags::bitflags;
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Handling requirements declared by a product.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ProductFlags: u8 {
        const FIRE_HAZARDOUS = 1 << 0;
        const EXPLOSIVES = 1 << 1;
        const FRAGILE = 1 << 2;
        const UP_WARD = 1 << 3;
        const KEEP_DRY = 1 << 4;
        const HANDLE_WITH_CARE = 1 << 5;
        const KEEP_FROZEN = 1 << 6;
        const ESD_SENSITIVE = 1 << 7;
    }
}

/// Wire labels in ascending bit order.
const LABELS: [(ProductFlags, &str); 8] = [
    (ProductFlags::FIRE_HAZARDOUS, "fireHazardous"),
    (ProductFlags::EXPLOSIVES, "explosives"),
    (ProductFlags::FRAGILE, "fragile"),
    (ProductFlags::UP_WARD, "upWard"),
    (ProductFlags::KEEP_DRY, "keepDry"),
    (ProductFlags::HANDLE_WITH_CARE, "handleWithCare"),
    (ProductFlags::KEEP_FROZEN, "keepFrozen"),
    (ProductFlags::ESD_SENSITIVE, "esdSensitive"),
];

impl ProductFlags {
    /// Labels of the set bits, lowest bit first.
    pub fn labels(self) -> impl Iterator<Item = &'static str> {
        LABELS.iter().filter(move |(flag, _)| self.contains(*flag)).map(|(_, label)| *label)
    }

    /// Looks up a single flag by its wire label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        LABELS.iter().find(|(_, l)| *l == label).map(|(flag, _)| *flag)
    }
}

impl Default for ProductFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for ProductFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            f.write_str(label)?;
        }
        Ok(())
    }
}

impl Serialize for ProductFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.labels().count()))?;
        for label in self.labels() {
            seq.serialize_element(label)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for ProductFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LabelsVisitor;

        impl<'de> Visitor<'de> for LabelsVisitor {
            type Value = ProductFlags;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an array of product flag labels")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                // Unknown labels are skipped; a product's flags always come from its kind.
                let mut flags = ProductFlags::empty();
                while let Some(label) = seq.next_element::<String>()? {
                    flags |= ProductFlags::from_label(&label).unwrap_or_default();
                }
                Ok(flags)
            }
        }

        deserializer.deserialize_seq(LabelsVisitor)
    }
}
