//! Property-type classification
//!
//! Determines the premises class from the job description and address
//! combined. Commercial, industrial and agricultural indicators are
//! checked before residential; unresolved jobs fall back through a few
//! description-only heuristics and finally default to Residential.

use super::keywords::KeywordSet;
use serde::{Deserialize, Serialize};

/// Premises classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Commercial,
    Industrial,
    Agricultural,
    Residential,
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyType::Commercial => write!(f, "Commercial"),
            PropertyType::Industrial => write!(f, "Industrial"),
            PropertyType::Agricultural => write!(f, "Agricultural"),
            PropertyType::Residential => write!(f, "Residential"),
        }
    }
}

/// Keyword lists for property-type detection, in priority order
#[derive(Debug, Clone)]
pub struct PropertyRules {
    pub commercial: KeywordSet,
    pub industrial: KeywordSet,
    pub agricultural: KeywordSet,
    pub residential: KeywordSet,
}

impl PropertyRules {
    pub fn standard() -> Self {
        Self {
            commercial: KeywordSet::patterns(&[
                "qml", "histology", "laboratory", "lab", "medical", "hospital", "clinic",
                "office", "commercial", "business", "shop", "store", "retail", "restaurant",
                "hotel", "motel", "church", "school", "university", "college", "bank",
                "warehouse", "factory", "workshop", "dealership", "salon", "pharmacy",
                "dental", "veterinary", "vet", "gym", "fitness", "centre", "center",
                "plaza", "mall", "building", "complex", "facility", "premises",
                "tissue sample", "blood bank", "pathology", "radiology", "x-ray",
                "consulting room", "consultation room", "reception", "waiting room",
                "boardroom", "conference", "meeting room", "office block", "tower",
                "industrial estate", "business park", "showroom", "garage door.*roller",
                "commercial kitchen", "cool room", "freezer room", "food prep",
            ]),
            industrial: KeywordSet::literal(&[
                "factory", "plant", "mill", "foundry", "manufacturing", "production",
                "assembly", "processing", "refinery", "smelter", "quarry", "mine",
                "depot", "distribution", "logistics", "freight", "transport",
                "heavy machinery", "crane", "conveyor", "pump station", "compressor",
                "generator", "transformer", "substation", "switchyard", "control room",
                "boiler", "furnace", "kiln", "press", "industrial shed", "loading dock",
                "chemical", "pharmaceutical", "textile", "automotive", "aerospace",
                "steel", "aluminium", "concrete", "cement", "oil", "gas", "petroleum",
            ]),
            agricultural: KeywordSet::patterns(&[
                "farm", "farming", "agricultural", "agriculture", "rural", "pastoral",
                "property.*acres", "property.*hectares", "station", "ranch", "orchard",
                "vineyard", "winery", "dairy", "cattle", "sheep", "pig", "poultry",
                "chicken", "turkey", "duck", "goose", "livestock", "animal", "stable",
                "barn", "silo", "grain", "wheat", "corn", "barley", "oats", "rice",
                "cotton", "sugar", "fruit", "vegetable", "crop", "harvest", "irrigation",
                "bore", "pump.*water", "tank.*water", "trough", "paddock", "pasture",
                "field", "acreage", "rural property", "country property", "farming operation",
                "milking", "shearing", "feedlot", "greenhouse", "nursery.*plants",
            ]),
            residential: KeywordSet::patterns(&[
                "residence", "home", "house", "unit", "apartment", "villa", "townhouse",
                "bathroom", "bedroom", "kitchen", "living room", "lounge", "dining",
                "laundry", "ensuite", "toilet", "family room", "study", "garage",
                "shed.*home", "domestic", "private", "personal", "family", "couple",
                "husband", "wife", "parkinson", "elderly", "disabled", "wheelchair",
                "hot water.*home", "pool", "spa", "deck", "patio", "verandah",
                "driveway", "garden", "backyard", "front yard", "fence", "gate",
                "carport", "granny flat", "studio", "cottage", "cabin", "duplex",
                "street", "road", "avenue", "court", "close", "place", "drive",
                "circuit", "crescent", "lane", "way",
            ]),
        }
    }
}

// Description-only fallback heuristics
const SHED_QUALIFIERS: &[&str] = &["industrial", "commercial", "business"];
const MEDICAL_TERMS: &[&str] = &["qml", "medical", "hospital", "clinic", "lab"];
const RESIDENTIAL_TERMS: &[&str] = &["home", "house", "residence"];

/// Classify the premises type of a job
///
/// # Arguments
/// * `description` - free-text job description
/// * `address` - job address, when present; searched together with the
///   description for the primary lists
pub fn classify_property_type(
    description: &str,
    address: Option<&str>,
    rules: &PropertyRules,
) -> PropertyType {
    let desc_lower = description.to_lowercase();
    let address_lower = address.unwrap_or_default().to_lowercase();
    let combined = format!("{} {}", desc_lower, address_lower);

    if rules.commercial.matches(&combined) {
        return PropertyType::Commercial;
    }

    if rules.industrial.matches(&combined) {
        return PropertyType::Industrial;
    }

    if rules.agricultural.matches(&combined) {
        return PropertyType::Agricultural;
    }

    if rules.residential.matches(&combined) {
        return PropertyType::Residential;
    }

    // Shed work is residential unless qualified otherwise
    if desc_lower.contains("shed") && !SHED_QUALIFIERS.iter().any(|w| desc_lower.contains(w)) {
        return PropertyType::Residential;
    }

    // Medical-adjacent work is commercial
    if MEDICAL_TERMS.iter().any(|w| desc_lower.contains(w)) {
        return PropertyType::Commercial;
    }

    // Home-assist program jobs are residential
    if desc_lower.contains("home assist") {
        return PropertyType::Residential;
    }

    // Make-safe work at a dwelling is residential
    if desc_lower.contains("make safe")
        && RESIDENTIAL_TERMS.iter().any(|w| desc_lower.contains(w))
    {
        return PropertyType::Residential;
    }

    // Everything unresolved is treated as residential
    PropertyType::Residential
}
