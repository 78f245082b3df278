pub mod build_illustration_url;
pub mod extract_integer;
pub mod label_to_integer;
pub mod normalize_fragment;
pub mod normalize_fragments;
pub mod normalize_whitespace;
pub mod resolve_cost_or_life;
pub mod resolve_text_fields;
pub mod split_identifier;
pub mod strip_label;
