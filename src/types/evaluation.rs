use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The six fixed evaluation domains, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    #[serde(rename = "técnico")]
    Technical,
    #[serde(rename = "táctico")]
    Tactical,
    #[serde(rename = "físico")]
    Physical,
    #[serde(rename = "cognitivo")]
    Cognitive,
    #[serde(rename = "psicológico")]
    Psychological,
    #[serde(rename = "biomédico")]
    Biomedical,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Technical,
        Category::Tactical,
        Category::Physical,
        Category::Cognitive,
        Category::Psychological,
        Category::Biomedical,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Category::Technical => "técnico",
            Category::Tactical => "táctico",
            Category::Physical => "físico",
            Category::Cognitive => "cognitivo",
            Category::Psychological => "psicológico",
            Category::Biomedical => "biomédico",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Technical => "Técnico",
            Category::Tactical => "Táctico",
            Category::Physical => "Físico",
            Category::Cognitive => "Cognitivo",
            Category::Psychological => "Psicológico",
            Category::Biomedical => "Biomédico",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|category| category.tag() == tag)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DataType {
    #[serde(rename = "scale_1_5")]
    Scale1To5,
    #[serde(rename = "scale_1_10")]
    Scale1To10,
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "percentage")]
    Percentage,
    #[serde(rename = "index")]
    Index,
    #[serde(rename = "coordinate")]
    Coordinate,
    /// Any tag outside the known set; inert like `index`.
    #[default]
    #[serde(rename = "unknown")]
    #[serde(other)]
    Unknown,
}

impl DataType {
    pub fn is_scored(self) -> bool {
        matches!(
            self,
            DataType::Scale1To5 | DataType::Scale1To10 | DataType::Numeric | DataType::Percentage
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationItem {
    /// Opaque category tag; items whose tag is not one of [`Category::ALL`] are never scored.
    #[serde(default, deserialize_with = "lenient_tag")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_tag")]
    pub item_name: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default, deserialize_with = "lenient_data_type")]
    pub data_type: DataType,
}

impl EvaluationItem {
    pub fn new(category: Category, item_name: &str, value: Value, data_type: DataType) -> Self {
        Self {
            category: category.tag().to_string(),
            item_name: item_name.to_string(),
            value,
            data_type,
        }
    }

    pub fn is_in(&self, category: Category) -> bool {
        Category::from_tag(&self.category) == Some(category)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub player_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub evaluator_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub evaluation_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub notes: Option<String>,
    #[serde(default)]
    pub items: Vec<EvaluationItem>,
}

impl Evaluation {
    pub fn with_items(items: Vec<EvaluationItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }
}

// Identifiers arrive as strings or numbers depending on the API endpoint.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}

// Labels and tags sent as null or a non-string read as empty.
fn lenient_tag<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.unwrap_or_default())
}

fn lenient_data_type<'de, D>(deserializer: D) -> Result<DataType, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(tag @ Value::String(_)) => serde_json::from_value(tag).unwrap_or_default(),
        _ => DataType::Unknown,
    })
}
