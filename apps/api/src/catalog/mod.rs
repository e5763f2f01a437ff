//! Template Catalog: the static mapping from project category to the
//! ordered section list of a bankable DPR.
//!
//! Lookup is total: unknown or unclassifiable input always resolves to the
//! default template rather than failing.

mod data;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The closed set of business categories a brief can be classified into.
///
/// `Default` is the catch-all: `Category::parse` maps anything it does not
/// recognize onto it, so parsing untrusted classifier output never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    AgroProcessing,
    TextileManufacturing,
    SolarEnergy,
    WindEnergy,
    FoodPackaging,
    WasteManagement,
    ElectricVehicleCharging,
    BatteryManufacturing,
    Pharmaceuticals,
    HealthcareClinic,
    ItServices,
    ConstructionMaterials,
    HospitalityResort,
    EducationInstitute,
    CloudKitchen,
    Boutique,
    RealEstate,
    PhotoStudio,
    Bakery,
    Supermarket,
    IceCream,
    OrganicFarm,
    CarGarage,
    FitnessWellness,
    SportsFacility,
    Default,
}

impl Category {
    pub const ALL: [Category; 26] = [
        Category::AgroProcessing,
        Category::TextileManufacturing,
        Category::SolarEnergy,
        Category::WindEnergy,
        Category::FoodPackaging,
        Category::WasteManagement,
        Category::ElectricVehicleCharging,
        Category::BatteryManufacturing,
        Category::Pharmaceuticals,
        Category::HealthcareClinic,
        Category::ItServices,
        Category::ConstructionMaterials,
        Category::HospitalityResort,
        Category::EducationInstitute,
        Category::CloudKitchen,
        Category::Boutique,
        Category::RealEstate,
        Category::PhotoStudio,
        Category::Bakery,
        Category::Supermarket,
        Category::IceCream,
        Category::OrganicFarm,
        Category::CarGarage,
        Category::FitnessWellness,
        Category::SportsFacility,
        Category::Default,
    ];

    /// The wire key used in classification prompts and API responses.
    pub fn key(&self) -> &'static str {
        match self {
            Category::AgroProcessing => "agro_processing",
            Category::TextileManufacturing => "textile_manufacturing",
            Category::SolarEnergy => "solar_energy",
            Category::WindEnergy => "wind_energy",
            Category::FoodPackaging => "food_packaging",
            Category::WasteManagement => "waste_management",
            Category::ElectricVehicleCharging => "electric_vehicle_charging",
            Category::BatteryManufacturing => "battery_manufacturing",
            Category::Pharmaceuticals => "pharmaceuticals",
            Category::HealthcareClinic => "healthcare_clinic",
            Category::ItServices => "it_services",
            Category::ConstructionMaterials => "construction_materials",
            Category::HospitalityResort => "hospitality_resort",
            Category::EducationInstitute => "education_institute",
            Category::CloudKitchen => "cloud_kitchen",
            Category::Boutique => "boutique",
            Category::RealEstate => "real_estate",
            Category::PhotoStudio => "photo_studio",
            Category::Bakery => "bakery",
            Category::Supermarket => "supermarket",
            Category::IceCream => "ice_cream",
            Category::OrganicFarm => "organic_farm",
            Category::CarGarage => "car_garage",
            Category::FitnessWellness => "fitness_wellness",
            Category::SportsFacility => "sports_facility",
            Category::Default => "default",
        }
    }

    /// Total parse of untrusted classifier output. Trims whitespace and
    /// compares case-insensitively against the wire keys; anything else
    /// falls back to `Default`.
    pub fn parse(input: &str) -> Category {
        let key = input.trim().trim_matches('"').to_ascii_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.key() == key)
            .unwrap_or(Category::Default)
    }
}

/// A report template: display name plus the ordered section titles that
/// define the document structure for one category.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    pub sections: &'static [&'static str],
}

/// Immutable catalog of built-in templates, constructed once at startup.
pub struct TemplateCatalog {
    templates: HashMap<Category, Template>,
    fallback: Template,
}

impl TemplateCatalog {
    pub fn builtin() -> Self {
        let templates: HashMap<Category, Template> =
            data::BUILTIN_TEMPLATES.iter().copied().collect();
        TemplateCatalog {
            templates,
            fallback: data::DEFAULT_TEMPLATE,
        }
    }

    /// Resolves a category to its template. Absence falls back to the
    /// default template: there is no error path.
    pub fn get(&self, category: Category) -> Template {
        self.templates
            .get(&category)
            .copied()
            .unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_keys() {
        assert_eq!(Category::parse("bakery"), Category::Bakery);
        assert_eq!(Category::parse("  Solar_Energy \n"), Category::SolarEnergy);
        assert_eq!(Category::parse("\"it_services\""), Category::ItServices);
    }

    #[test]
    fn test_parse_is_total() {
        assert_eq!(Category::parse(""), Category::Default);
        assert_eq!(Category::parse("bakery."), Category::Default);
        assert_eq!(
            Category::parse("I think this is a bakery project"),
            Category::Default
        );
    }

    #[test]
    fn test_every_category_has_a_template() {
        let catalog = TemplateCatalog::builtin();
        for category in Category::ALL {
            let template = catalog.get(category);
            assert!(
                !template.sections.is_empty(),
                "category {:?} has an empty section list",
                category
            );
            assert!(!template.name.is_empty());
        }
    }

    #[test]
    fn test_templates_start_with_executive_summary() {
        let catalog = TemplateCatalog::builtin();
        for category in Category::ALL {
            assert_eq!(catalog.get(category).sections[0], "Executive Summary");
        }
    }

    #[test]
    fn test_serde_keys_match_wire_keys() {
        for category in Category::ALL {
            let serialized = serde_json::to_string(&category).expect("serialize");
            assert_eq!(serialized, format!("\"{}\"", category.key()));
        }
    }
}
