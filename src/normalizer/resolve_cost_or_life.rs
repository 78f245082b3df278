use crate::config::labels::LabelConfig;
use crate::normalizer::extract_integer::extract_integer;
use crate::normalizer::label_to_integer::label_to_integer;
use crate::normalizer::normalize_whitespace::normalize_whitespace;

/// The shared cost/life slot, split by card type. Exactly one side is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostOrLife {
    pub cost: Option<i64>,
    pub life: Option<i64>,
}

impl CostOrLife {
    /// The side that applies to this card.
    pub fn value(&self) -> i64 {
        self.life.or(self.cost).unwrap_or(0)
    }
}

/// Reads `Vie 5` / `Coût 4` style text. Leaders expose the value as life,
/// every other type as cost; a missing value becomes 0 on the exposed side.
pub fn resolve_cost_or_life(
    text: Option<&str>,
    card_type: Option<&str>,
    labels: &LabelConfig,
) -> CostOrLife {
    let value = normalize_whitespace(text).and_then(|text| {
        if text.starts_with(labels.life.as_str()) {
            label_to_integer(Some(text.as_str()), &labels.life)
        } else if text.starts_with(labels.cost.as_str()) {
            label_to_integer(Some(text.as_str()), &labels.cost)
        } else {
            extract_integer(Some(text.as_str()))
        }
    });

    let value = value.unwrap_or(0);

    if card_type == Some(labels.leader_type.as_str()) {
        CostOrLife {
            cost: None,
            life: Some(value),
        }
    } else {
        CostOrLife {
            cost: Some(value),
            life: None,
        }
    }
}
