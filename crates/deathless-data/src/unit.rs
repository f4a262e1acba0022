//! Unit records: heroes and monsters.

use deathless_xml::{get_int, get_text, has, XmlElement};

use crate::item::BaseItem;
use crate::Result;

/// Key of the placeholder hero used by the game's own tests.
pub const DUMMY_HERO_KEY: &str = "HERO_DUMMY_UNIT_TEST";

/// Key marker for test-only units.
pub const TEST_MARKER: &str = "_TEST";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Unit {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub base: BaseItem,
    pub hp: Option<i32>,
    pub attack: Option<i32>,
    pub armor: Option<i32>,
    /// Locale key of the unit's nickname.
    pub nickname: Option<String>,
    /// Whether the unit is a playable hero.
    pub is_hero: bool,
}

impl Unit {
    pub fn from_element(element: &XmlElement) -> Result<Self> {
        Ok(Self {
            base: BaseItem::from_element(element)?,
            hp: get_int(element, ".//hp")?,
            attack: get_int(element, ".//attack")?,
            armor: get_int(element, ".//armor")?,
            nickname: get_text(element, ".//visual//nickname").map(str::to_string),
            is_hero: has(element, ".//type//hero"),
        })
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.base.key
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.base.name.as_deref()
    }

    /// A hero that players can actually pick: not the dummy, not a test unit.
    pub fn is_real_hero(&self) -> bool {
        self.is_hero && self.key() != DUMMY_HERO_KEY && !self.key().contains(TEST_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(key: &str) -> Unit {
        Unit::from_element(
            &XmlElement::new("unit")
                .attr("key", key)
                .child(XmlElement::new("type").child(XmlElement::new("hero"))),
        )
        .unwrap()
    }

    #[test]
    fn test_from_element() {
        let unit = Unit::from_element(
            &deathless_xml::parse_str(
                r#"<unit key="HERO_KNIGHT">
                    <stats><hp>80</hp><attack>2</attack><armor>0</armor></stats>
                    <visual><name>KNIGHT_NAME</name><nickname>KNIGHT_NICK</nickname></visual>
                    <type><hero/></type>
                </unit>"#,
            )
            .unwrap(),
        )
        .unwrap();

        assert_eq!(unit.key(), "HERO_KNIGHT");
        assert_eq!(unit.hp, Some(80));
        assert_eq!(unit.attack, Some(2));
        assert_eq!(unit.armor, Some(0));
        assert_eq!(unit.name(), Some("KNIGHT_NAME"));
        assert_eq!(unit.nickname.as_deref(), Some("KNIGHT_NICK"));
        assert!(unit.is_hero);
    }

    #[test]
    fn test_monster_is_not_hero() {
        let unit = Unit::from_element(&XmlElement::new("unit").attr("key", "MOB_WOLF")).unwrap();
        assert!(!unit.is_hero);
        assert!(!unit.is_real_hero());
    }

    #[test]
    fn test_real_hero() {
        assert!(hero("HERO_KNIGHT").is_real_hero());
        assert!(!hero(DUMMY_HERO_KEY).is_real_hero());
        assert!(!hero("HERO_KNIGHT_TEST").is_real_hero());
        assert!(!hero("HERO_TEST_ARCHER").is_real_hero());
    }

    #[test]
    fn test_malformed_hp() {
        let element = XmlElement::new("unit")
            .attr("key", "MOB_WOLF")
            .child(XmlElement::new("hp").text("lots"));
        assert!(Unit::from_element(&element).is_err());
    }
}
