use std::str::FromStr;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde_derive::Serialize,
    serde_derive::Deserialize,
)]
pub enum FuelType {
    Diesel,
    Gasoline,
}

impl FuelType {
    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Diesel => "Diesel",
            FuelType::Gasoline => "Gasoline",
        }
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for FuelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "diesel" => Ok(FuelType::Diesel),
            "gasoline" | "gas" => Ok(FuelType::Gasoline),
            other => Err(other.to_string()),
        }
    }
}
