pub mod normalized_card_record;
pub mod raw_card_fragment;
