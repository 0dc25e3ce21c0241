use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// Totals per category name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PieChartDto {
    #[schema(value_type = BTreeMap<String, f64>)]
    pub categorias: BTreeMap<String, Decimal>,
}

/// Totals per month, in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BarChartDto {
    /// Serialized as an object keyed by labels like `janeiro 2024`.
    #[serde(serialize_with = "serialize_pairs_as_map")]
    #[schema(value_type = BTreeMap<String, f64>)]
    pub dados_mensais: Vec<(String, Decimal)>,
}

fn serialize_pairs_as_map<S>(pairs: &[(String, Decimal)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(pairs.len()))?;
    for (label, total) in pairs {
        map.serialize_entry(label, total)?;
    }
    map.end()
}
