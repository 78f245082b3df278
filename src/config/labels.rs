use serde::Deserialize;

/// Label words the card list prints in front of each value.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelConfig {
    #[serde(default = "default_life")]
    pub life: String,
    #[serde(default = "default_cost")]
    pub cost: String,
    #[serde(default = "default_power")]
    pub power: String,
    #[serde(default = "default_counter")]
    pub counter: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_block")]
    pub block: String,
    #[serde(default = "default_feature")]
    pub feature: String,
    #[serde(default = "default_effect")]
    pub effect: String,
    /// Card type whose cost slot holds a life value.
    #[serde(default = "default_leader_type")]
    pub leader_type: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        LabelConfig {
            life: default_life(),
            cost: default_cost(),
            power: default_power(),
            counter: default_counter(),
            color: default_color(),
            block: default_block(),
            feature: default_feature(),
            effect: default_effect(),
            leader_type: default_leader_type(),
        }
    }
}

fn default_life() -> String {
    "Vie".to_string()
}

fn default_cost() -> String {
    "Coût".to_string()
}

fn default_power() -> String {
    "Puissance".to_string()
}

fn default_counter() -> String {
    "Contre".to_string()
}

fn default_color() -> String {
    "Couleur".to_string()
}

fn default_block() -> String {
    "Numéro de bloc".to_string()
}

fn default_feature() -> String {
    "Type".to_string()
}

fn default_effect() -> String {
    "Effet".to_string()
}

fn default_leader_type() -> String {
    "LEADER".to_string()
}

/// Numeric fields that share the label-then-integer layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Power,
    Counter,
    Block,
}

impl NumericField {
    pub fn label<'a>(&self, labels: &'a LabelConfig) -> &'a str {
        match self {
            NumericField::Power => &labels.power,
            NumericField::Counter => &labels.counter,
            NumericField::Block => &labels.block,
        }
    }

    /// Value used when the field is absent or carries no digits.
    pub fn fallback(&self) -> Option<i64> {
        match self {
            NumericField::Power => Some(0),
            NumericField::Counter | NumericField::Block => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_fields_pick_their_label() {
        let labels = LabelConfig::default();

        assert_eq!(NumericField::Power.label(&labels), "Puissance");
        assert_eq!(NumericField::Counter.label(&labels), "Contre");
        assert_eq!(NumericField::Block.label(&labels), "Numéro de bloc");
    }

    #[test]
    fn only_power_falls_back_to_zero() {
        assert_eq!(NumericField::Power.fallback(), Some(0));
        assert_eq!(NumericField::Counter.fallback(), None);
        assert_eq!(NumericField::Block.fallback(), None);
    }
}
