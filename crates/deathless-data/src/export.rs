//! JSON export of the documented subset of a config.

use serde::Serialize;

use crate::{Card, Config, Consumable, Relic, Result, Unit};

/// Everything the docs are generated from, after filtering.
#[derive(Debug, Serialize)]
pub struct VisibleData<'a> {
    pub heroes: Vec<&'a Unit>,
    pub relics: Vec<&'a Relic>,
    pub consumables: Vec<&'a Consumable>,
    pub cards: Vec<&'a Card>,
}

impl<'a> VisibleData<'a> {
    pub fn from_config(config: &'a Config) -> Self {
        Self {
            heroes: config.only_real_heroes(),
            relics: config.visible_relics(),
            consumables: config.visible_consumables(),
            cards: config.playable_cards(),
        }
    }
}

/// Serialize the visible records of `config` as pretty-printed JSON.
pub fn to_json(config: &Config) -> Result<String> {
    Ok(serde_json::to_string_pretty(&VisibleData::from_config(config))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json() {
        let config = Config::parse(
            r#"<config>
                <unit key="HERO_KNIGHT"><type><hero/></type></unit>
                <relic key="RELIC_AXE"><quality>4</quality><source>1</source></relic>
                <relic key="RELIC_GONE"><hidden_flag/></relic>
                <card key="CARD_STRIKE"><type>1</type><cost>1</cost></card>
            </config>"#,
        )
        .unwrap();

        let json: serde_json::Value = serde_json::from_str(&to_json(&config).unwrap()).unwrap();
        assert_eq!(json["heroes"][0]["key"], "HERO_KNIGHT");
        assert_eq!(json["relics"].as_array().unwrap().len(), 1);
        assert_eq!(json["relics"][0]["key"], "RELIC_AXE");
        assert_eq!(json["relics"][0]["kind"], "relic");
        assert_eq!(json["relics"][0]["quality"], 4);
        assert_eq!(json["cards"][0]["cost"], 1);
        assert_eq!(json["consumables"].as_array().unwrap().len(), 0);
    }
}
