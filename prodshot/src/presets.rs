//! Preset catalog: human labels mapped to ready-made scene descriptions,
//! partitioned into background scenes and human models.

/// A selectable preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub label: &'static str,
    pub value: &'static str,
}

/// Background scene presets.
pub const BACKGROUND_PRESETS: &[Preset] = &[
    Preset {
        label: "Nền trắng",
        value: "Professional studio white background, pure white environment, clean minimalist aesthetic, high-end commercial photography, soft natural shadows beneath the product.",
    },
    Preset {
        label: "Xuân Tết",
        value: "Traditional Vietnamese Lunar New Year (Tết) festive background, elegant red and gold color palette, decorated with peach blossoms (hoa đào) and apricot flowers (hoa mai), traditional motifs, soft warm bokeh lighting, premium commercial advertising style.",
    },
    Preset {
        label: "Phòng khách",
        value: "Modern luxury living room background, soft bokeh, warm interior lighting, high-end lifestyle setting.",
    },
    Preset {
        label: "Thiên nhiên",
        value: "Natural outdoor setting, soft morning sunlight, blurred green forest background, organic aesthetic.",
    },
    Preset {
        label: "Gỗ mộc",
        value: "Rustic dark wood table surface, warm atmospheric lighting, cozy cafe mood, shallow depth of field.",
    },
];

/// Human model presets.
pub const MODEL_PRESETS: &[Preset] = &[
    Preset {
        label: "Người mẫu Nam",
        value: "A handsome, young, and attractive professional Asian male model posing naturally with the product, elegant attire, blurred studio background, high-end commercial fashion photography.",
    },
    Preset {
        label: "Người mẫu Nữ",
        value: "A beautiful, young, and attractive professional Asian female model holding the product, elegant attire, blurred background, high-end commercial lifestyle photography.",
    },
    Preset {
        label: "Bé Trai",
        value: "A cute and professional young Asian boy model posing cheerfully with the product, stylish kids clothing, soft natural lighting, high-end commercial look.",
    },
    Preset {
        label: "Bé Gái",
        value: "A beautiful and professional young Asian girl model posing elegantly with the product, stylish kids clothing, cheerful expression, soft natural lighting, high-end commercial aesthetic.",
    },
];

/// Look a preset up by label across both groups.
#[must_use]
pub fn find(label: &str) -> Option<&'static Preset> {
    BACKGROUND_PRESETS
        .iter()
        .chain(MODEL_PRESETS.iter())
        .find(|preset| preset.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_both_partitions() {
        assert_eq!(BACKGROUND_PRESETS.len(), 5);
        assert_eq!(MODEL_PRESETS.len(), 4);
    }

    #[test]
    fn find_resolves_labels_from_either_group() {
        assert!(find("Nền trắng").unwrap().value.contains("white background"));
        assert!(find("Bé Gái").unwrap().value.contains("girl model"));
        assert!(find("unknown").is_none());
    }

    #[test]
    fn labels_are_unique() {
        let labels: Vec<_> = BACKGROUND_PRESETS
            .iter()
            .chain(MODEL_PRESETS.iter())
            .map(|preset| preset.label)
            .collect();
        let mut deduped = labels.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(labels.len(), deduped.len());
    }
}
