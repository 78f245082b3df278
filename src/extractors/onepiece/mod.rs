pub mod extract_card_fragments;
pub mod fetch_cardlist;
