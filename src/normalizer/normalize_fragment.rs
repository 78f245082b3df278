use crate::config::labels::{LabelConfig, NumericField};
use crate::models::normalized_card_record::{NormalizedCardRecord, LEGAL_STATUS};
use crate::models::raw_card_fragment::RawCardFragment;
use crate::normalizer::build_illustration_url::build_illustration_url;
use crate::normalizer::label_to_integer::label_to_integer;
use crate::normalizer::normalize_whitespace::normalize_whitespace;
use crate::normalizer::resolve_cost_or_life::resolve_cost_or_life;
use crate::normalizer::resolve_text_fields::{resolve_color, resolve_effect, resolve_feature};
use crate::normalizer::split_identifier::split_identifier;

/// Everything a fragment needs besides its own text.
#[derive(Debug, Clone)]
pub struct NormalizeContext<'a> {
    /// Hyphenated set code written into every record, e.g. `OP-09`.
    pub set_code: &'a str,
    /// Identifier prefix a fragment must carry to belong to the set, e.g. `OP09`.
    pub set_prefix: &'a str,
    pub base_url: &'a str,
    pub labels: &'a LabelConfig,
}

fn numeric_field(text: Option<&str>, field: NumericField, labels: &LabelConfig) -> Option<i64> {
    label_to_integer(text, field.label(labels)).or(field.fallback())
}

/// Builds the record for one fragment, or `None` when it belongs to another set.
pub fn normalize_fragment(
    fragment: &RawCardFragment,
    context: &NormalizeContext,
) -> Option<NormalizedCardRecord> {
    let (code, variant) = split_identifier(&fragment.identifier, context.set_prefix)?;
    let labels = context.labels;

    let card_type = normalize_whitespace(fragment.type_raw.as_deref());
    let cost_or_life = resolve_cost_or_life(
        fragment.cost_or_life_raw.as_deref(),
        card_type.as_deref(),
        labels,
    );

    Some(NormalizedCardRecord {
        set: context.set_code.to_string(),
        code,
        variant,
        name: normalize_whitespace(fragment.name_raw.as_deref()),
        rarity: normalize_whitespace(fragment.rarity_raw.as_deref()),
        card_type,
        color: resolve_color(fragment.color_raw.as_deref(), &labels.color),
        cost_or_life: cost_or_life.value(),
        cost: cost_or_life.cost,
        life: cost_or_life.life,
        power: numeric_field(fragment.power_raw.as_deref(), NumericField::Power, labels)
            .unwrap_or(0),
        counter: numeric_field(fragment.counter_raw.as_deref(), NumericField::Counter, labels),
        block: numeric_field(fragment.block_raw.as_deref(), NumericField::Block, labels),
        feature: resolve_feature(fragment.feature_raw.as_deref(), &labels.feature),
        text: resolve_effect(fragment.effect_raw.as_deref(), &labels.effect),
        illustration_url: build_illustration_url(
            context.base_url,
            fragment.image_relative_path.as_deref(),
        ),
        status: LEGAL_STATUS.to_string(),
    })
}
