/// Text pulled out of one `<dl class="modalCol">` entry, before any cleanup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCardFragment {
    /// `id` attribute of the entry, e.g. `OP09-001_p1`.
    pub identifier: String,
    pub name_raw: Option<String>,
    pub rarity_raw: Option<String>,
    pub type_raw: Option<String>,
    pub cost_or_life_raw: Option<String>,
    pub power_raw: Option<String>,
    pub counter_raw: Option<String>,
    pub color_raw: Option<String>,
    pub block_raw: Option<String>,
    pub feature_raw: Option<String>,
    pub effect_raw: Option<String>,
    /// `data-src` of the front image, relative to the card list page.
    pub image_relative_path: Option<String>,
}
