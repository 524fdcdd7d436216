use derive_more::Display;
use phf::phf_map;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum Category {
    #[display(fmt = "Major")]
    Major,
    #[display(fmt = "P1")]
    P1,
    #[display(fmt = "P2")]
    P2,
    #[display(fmt = "DPF1000")]
    Dpf1000,
    #[display(fmt = "Special")]
    Special,
    #[display(fmt = "Lunar Ligaen")]
    LunarLigaen,
    #[display(fmt = "{}", _0)]
    Other(String),
}

static KNOWN_CATEGORIES: phf::Map<&'static str, Category> = phf_map! {
    "Major" => Category::Major,
    "P1" => Category::P1,
    "P2" => Category::P2,
    "DPF1000" => Category::Dpf1000,
    "Special" => Category::Special,
    "Lunar Ligaen" => Category::LunarLigaen,
};

/// Palette entry a category is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Swatch {
    Red,
    Blue,
    Green,
    Crimson,
    Orange,
    Magenta,
    Neutral,
}

impl Category {
    /// Known categories in legend order.
    pub const LEGEND: &'static [Category] = &[
        Category::Major,
        Category::P1,
        Category::P2,
        Category::Dpf1000,
        Category::Special,
        Category::LunarLigaen,
    ];

    pub fn swatch(&self) -> Swatch {
        match self {
            Category::Major => Swatch::Red,
            Category::P1 => Swatch::Blue,
            Category::P2 => Swatch::Green,
            Category::Dpf1000 => Swatch::Crimson,
            Category::Special => Swatch::Orange,
            Category::LunarLigaen => Swatch::Magenta,
            Category::Other(_) => Swatch::Neutral,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        KNOWN_CATEGORIES
            .get(label.trim())
            .cloned()
            .unwrap_or_else(|| Category::Other(label.to_owned()))
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from(label.as_str())
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other(String::new())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Category::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels() {
        assert_eq!(Category::from("Major").swatch(), Swatch::Red);
        assert_eq!(Category::from("P1").swatch(), Swatch::Blue);
        assert_eq!(Category::from("P2").swatch(), Swatch::Green);
        assert_eq!(Category::from("DPF1000").swatch(), Swatch::Crimson);
        assert_eq!(Category::from("Special").swatch(), Swatch::Orange);
        assert_eq!(Category::from("Lunar Ligaen").swatch(), Swatch::Magenta);
    }

    #[test]
    fn unknown_labels_fall_back_to_neutral() {
        for label in &["", "p1", "Challenger", "DPF 1000", "🎾"] {
            let category = Category::from(*label);
            assert!(!category.is_known());
            assert_eq!(category.swatch(), Swatch::Neutral);
        }
    }

    #[test]
    fn other_keeps_its_label() {
        assert_eq!(Category::from("Challenger").to_string(), "Challenger");
        assert_eq!(Category::LunarLigaen.to_string(), "Lunar Ligaen");
    }

    #[test]
    fn legend_lists_every_known_category_once() {
        for category in Category::LEGEND {
            assert_eq!(&Category::from(category.to_string()), category);
        }
        assert_eq!(Category::LEGEND.len(), KNOWN_CATEGORIES.len());
    }
}
