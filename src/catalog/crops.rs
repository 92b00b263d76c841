//! Crop enumeration and bilingual display metadata
//!
//! Enumeration order is significant: the heuristic ranker breaks score ties
//! by position in `Crop::all()`.

use super::LocalizedText;
use serde::Serialize;

/// The six crops known to the offline ranker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Crop {
    Rice,
    Wheat,
    Maize,
    Cotton,
    Sugarcane,
    Pulses,
}

/// Display metadata for a crop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropInfo {
    pub hindi_name: &'static str,
    pub explanation: LocalizedText,
}

/// Explanation used for crops outside the enumeration (remote results may name any crop)
pub const GENERIC_EXPLANATION: LocalizedText = LocalizedText::new(
    "Good match for your soil, weather and rainfall pattern.",
    "आपकी मिट्टी, मौसम और वर्षा के अनुसार यह फसल उपयुक्त है।",
);

impl Crop {
    /// All crops in tie-break order
    pub fn all() -> &'static [Crop] {
        &[
            Crop::Rice,
            Crop::Wheat,
            Crop::Maize,
            Crop::Cotton,
            Crop::Sugarcane,
            Crop::Pulses,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Crop::Rice => "Rice",
            Crop::Wheat => "Wheat",
            Crop::Maize => "Maize",
            Crop::Cotton => "Cotton",
            Crop::Sugarcane => "Sugarcane",
            Crop::Pulses => "Pulses",
        }
    }

    /// Case-insensitive lookup by English name
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Crop::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    pub fn info(&self) -> CropInfo {
        match self {
            Crop::Rice => CropInfo {
                hindi_name: "चावल",
                explanation: LocalizedText::new(
                    "Prefers warm weather, standing water and heavier soils.",
                    "गरम मौसम, अधिक नमी और पानी रोकने वाली मिट्टी में अच्छा रहता है।",
                ),
            },
            Crop::Wheat => CropInfo {
                hindi_name: "गेहूँ",
                explanation: LocalizedText::new(
                    "Good for cool to warm climates with medium fertility.",
                    "ठंडे से मध्यम तापमान और मध्यम खाद वाली मिट्टी के लिए उपयुक्त।",
                ),
            },
            Crop::Maize => CropInfo {
                hindi_name: "मक्का",
                explanation: LocalizedText::new(
                    "Does well in warm areas with moderate rainfall.",
                    "मध्यम वर्षा और गर्म क्षेत्रों में अच्छी पैदावार देता है।",
                ),
            },
            Crop::Cotton => CropInfo {
                hindi_name: "कपास",
                explanation: LocalizedText::new(
                    "Likes hot climates, well-drained soil and medium rainfall.",
                    "गर्म मौसम, पानी आसानी से निकलने वाली मिट्टी और मध्यम वर्षा पसंद करता है।",
                ),
            },
            Crop::Sugarcane => CropInfo {
                hindi_name: "गन्ना",
                explanation: LocalizedText::new(
                    "Needs high water, warm temperature and fertile soil.",
                    "अधिक पानी, गर्म तापमान और उपजाऊ मिट्टी की आवश्यकता होती है।",
                ),
            },
            Crop::Pulses => CropInfo {
                hindi_name: "दालें",
                explanation: LocalizedText::new(
                    "Fit for low fertilizer use and lighter soils.",
                    "कम खाद और हल्की मिट्टी में अच्छी तरह उगती हैं।",
                ),
            },
        }
    }
}
