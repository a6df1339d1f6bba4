use serde::{Deserialize, Serialize};

/// The raw coverage columns that make up a Total Insured Value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TotalInsuredValue {
    pub building_value: String,
    pub business_personal_property: String,
    pub business_income: String,
    pub misc_real_property: String,
}

impl TotalInsuredValue {
    pub fn new(
        building_value: impl Into<String>,
        business_personal_property: impl Into<String>,
        business_income: impl Into<String>,
        misc_real_property: impl Into<String>,
    ) -> Self {
        Self {
            building_value: building_value.into(),
            business_personal_property: business_personal_property.into(),
            business_income: business_income.into(),
            misc_real_property: misc_real_property.into(),
        }
    }

    /// Coverage columns in form order.
    pub fn parts(&self) -> [&str; 4] {
        [
            &self.building_value,
            &self.business_personal_property,
            &self.business_income,
            &self.misc_real_property,
        ]
    }
}
