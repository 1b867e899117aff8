use garde::Validate;
use serde::{Deserialize, Serialize};

/// Attributes of an automotive part used to build a generation prompt.
///
/// All fields are caller-supplied; only `product_category` is gated (at the
/// submit route) before generation is allowed. Empty strings are legal at
/// this layer and simply produce thinner prompts.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductAttributes {
    #[serde(default)]
    #[garde(length(max = 64))]
    pub part_number: String,

    #[serde(default)]
    #[garde(length(max = 200))]
    pub product_category: String,

    #[serde(default)]
    #[garde(length(max = 200))]
    pub brand: String,

    #[serde(default)]
    #[garde(length(max = 200))]
    pub part_type: String,

    #[serde(default)]
    #[garde(inner(length(max = 200)))]
    pub engine_application: Option<String>,

    #[serde(default)]
    #[garde(inner(length(max = 200)))]
    pub material: Option<String>,

    #[serde(default)]
    #[garde(inner(length(max = 500)))]
    pub fitment: Option<String>,
}

/// A row from the example `parts` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PartRecord {
    pub part_number: String,
    pub product_category: String,
    pub brand: String,
    pub part_type: String,
    pub engine_application: Option<String>,
    pub material: Option<String>,
    pub fitment: Option<String>,
}

impl From<PartRecord> for ProductAttributes {
    fn from(part: PartRecord) -> Self {
        Self {
            part_number: part.part_number,
            product_category: part.product_category,
            brand: part.brand,
            part_type: part.part_type,
            engine_application: part.engine_application,
            material: part.material,
            fitment: part.fitment,
        }
    }
}
