use colored::Colorize;
use scraper::{ElementRef, Html, Selector};

use crate::models::raw_card_fragment::RawCardFragment;

/// Text of the first match, with its text nodes trimmed and joined by a space.
fn select_text(element: ElementRef, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(joined_text)
}

fn joined_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reads every `dl.modalCol` card entry of a card list page, in page order.
pub fn extract_card_fragments(html_content: &str) -> Vec<RawCardFragment> {
    let document = Html::parse_document(html_content);
    let entry_selector = Selector::parse("dl.modalCol").unwrap();
    let name_selector = Selector::parse(".cardName").unwrap();
    let info_selector = Selector::parse(".infoCol span").unwrap();
    let back_selector = Selector::parse(".backCol").unwrap();
    let cost_selector = Selector::parse(".cost").unwrap();
    let power_selector = Selector::parse(".power").unwrap();
    let counter_selector = Selector::parse(".counter").unwrap();
    let color_selector = Selector::parse(".color").unwrap();
    let block_selector = Selector::parse(".block").unwrap();
    let feature_selector = Selector::parse(".feature").unwrap();
    let effect_selector = Selector::parse(".text").unwrap();
    let image_selector = Selector::parse(".frontCol img[data-src]").unwrap();

    let mut fragments = Vec::new();

    for entry in document.select(&entry_selector) {
        let Some(identifier) = entry.value().attr("id") else {
            continue;
        };

        let Some(back) = entry.select(&back_selector).next() else {
            println!("{}", format!("No card details found for {}", identifier).yellow());
            continue;
        };

        let info: Vec<String> = entry.select(&info_selector).map(joined_text).collect();

        fragments.push(RawCardFragment {
            identifier: identifier.to_string(),
            name_raw: select_text(entry, &name_selector),
            rarity_raw: info.get(1).cloned(),
            type_raw: info.get(2).cloned(),
            cost_or_life_raw: select_text(back, &cost_selector),
            power_raw: select_text(back, &power_selector),
            counter_raw: select_text(back, &counter_selector),
            color_raw: select_text(back, &color_selector),
            block_raw: select_text(back, &block_selector),
            feature_raw: select_text(back, &feature_selector),
            effect_raw: select_text(back, &effect_selector),
            image_relative_path: entry
                .select(&image_selector)
                .next()
                .and_then(|img| img.value().attr("data-src"))
                .map(str::to_string),
        });
    }

    fragments
}
