//! Card records.

use deathless_xml::{get_int, get_text, has, XmlElement};

use crate::item::{ItemKind, Playable, PlayableItem};
use crate::{Error, Result};

/// Key marker used by the game for monster deck cards.
pub const MOB_MARKER: &str = "_MOB_";

/// Card categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(i32)]
pub enum CardType {
    Attack = 1,
    Skill = 2,
    Power = 3,
    Status = 4,
    Curse = 5,
}

impl CardType {
    pub fn from_ordinal(value: i32) -> Option<Self> {
        match value {
            1 => Some(CardType::Attack),
            2 => Some(CardType::Skill),
            3 => Some(CardType::Power),
            4 => Some(CardType::Status),
            5 => Some(CardType::Curse),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CardType::Attack => "ATTACK",
            CardType::Skill => "SKILL",
            CardType::Power => "POWER",
            CardType::Status => "STATUS",
            CardType::Curse => "CURSE",
        }
    }
}

/// A player or monster card.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Card {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub item: PlayableItem,
    /// Energy cost.
    pub cost: Option<i32>,
    /// Key of the upgraded version of this card.
    pub upgrade: Option<String>,
    /// Raw [`CardType`] ordinal as found in the config.
    pub card_type: Option<i32>,
    /// Damage of the first damage effect, for description templates.
    pub damage: Option<String>,
    /// Armor of the first armor effect, for description templates.
    pub armor: Option<String>,
    /// Whether this card belongs to a monster deck.
    pub is_mob: bool,
}

impl Card {
    pub fn from_element(element: &XmlElement) -> Result<Self> {
        let item = PlayableItem::from_element(ItemKind::Card, element)?;
        let is_mob = has(element, ".//visual//intention") || item.key().contains(MOB_MARKER);

        Ok(Self {
            cost: get_int(element, ".//cost")?,
            upgrade: get_text(element, ".//upgrade").map(str::to_string),
            card_type: get_int(element, ".//type")?,
            damage: get_text(element, ".//damage").map(str::to_string),
            armor: get_text(element, ".//add_armor").map(str::to_string),
            is_mob,
            item,
        })
    }

    #[inline]
    pub fn key(&self) -> &str {
        self.item.key()
    }

    /// The card's type, or an error if the ordinal is not one this version knows.
    pub fn card_type(&self) -> Result<Option<CardType>> {
        self.card_type
            .map(|value| {
                CardType::from_ordinal(value).ok_or_else(|| Error::UnknownCardType {
                    key: self.key().to_string(),
                    value,
                })
            })
            .transpose()
    }

    /// Locale key of the type label, e.g. `CARD_TYPE_ATTACK`.
    pub fn card_type_name(&self) -> Result<Option<String>> {
        Ok(self
            .card_type()?
            .map(|t| format!("{}_{}", ItemKind::Card.type_tag(), t.name())))
    }
}

impl Playable for Card {
    #[inline]
    fn playable(&self) -> &PlayableItem {
        &self.item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Card {
        Card::from_element(&deathless_xml::parse_str(xml).unwrap()).unwrap()
    }

    #[test]
    fn test_from_element() {
        let card = parse(
            r#"<card key="CARD_KNIGHT_STRIKE">
                <data>
                    <visual><name>STRIKE_NAME</name><desc>STRIKE_DESC</desc></visual>
                    <cost>1</cost>
                    <type>1</type>
                    <quality>0</quality>
                    <upgrade>CARD_KNIGHT_STRIKE_PLUS</upgrade>
                    <related_hero>HERO_KNIGHT</related_hero>
                    <effects>
                        <damage>6</damage>
                        <add_armor>3</add_armor>
                    </effects>
                </data>
            </card>"#,
        );

        assert_eq!(card.key(), "CARD_KNIGHT_STRIKE");
        assert_eq!(card.cost, Some(1));
        assert_eq!(card.upgrade.as_deref(), Some("CARD_KNIGHT_STRIKE_PLUS"));
        assert_eq!(card.card_type().unwrap(), Some(CardType::Attack));
        assert_eq!(card.damage.as_deref(), Some("6"));
        assert_eq!(card.armor.as_deref(), Some("3"));
        assert_eq!(card.item.related_hero(), Some("HERO_KNIGHT"));
        assert!(!card.is_mob);
    }

    #[test]
    fn test_card_type_name() {
        let card = parse(r#"<card key="C"><type>1</type></card>"#);
        assert_eq!(card.card_type_name().unwrap().as_deref(), Some("CARD_TYPE_ATTACK"));

        let card = parse(r#"<card key="C"><type>5</type></card>"#);
        assert_eq!(card.card_type_name().unwrap().as_deref(), Some("CARD_TYPE_CURSE"));

        let card = parse(r#"<card key="C"/>"#);
        assert_eq!(card.card_type_name().unwrap(), None);
    }

    #[test]
    fn test_unknown_card_type() {
        let card = parse(r#"<card key="CARD_NEW"><type>6</type></card>"#);
        assert!(matches!(
            card.card_type_name(),
            Err(Error::UnknownCardType { value: 6, .. })
        ));
    }

    #[test]
    fn test_mob_detection() {
        let by_intention = parse(r#"<card key="CARD_BITE"><visual><intention>attack</intention></visual></card>"#);
        assert!(by_intention.is_mob);

        let by_key = parse(r#"<card key="CARD_MOB_BITE"/>"#);
        assert!(by_key.is_mob);

        let player = parse(r#"<card key="CARD_MOBILITY"/>"#);
        assert!(!player.is_mob);
    }
}
