pub mod write_cards_json;
