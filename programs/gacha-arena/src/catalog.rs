//! Static fighter roster and the gacha shop table. Loaded into the binary
//! at compile time; accounts reference fighters by roster index.

use crate::constants::{SEASON_POWER_DEN, SEASON_POWER_NUM};
use crate::season::Theme;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Global draw weight. Common 50, rare 30, epic 15, legendary 5.
    pub fn weight(&self) -> u64 {
        match self {
            Rarity::Common => 50,
            Rarity::Rare => 30,
            Rarity::Epic => 15,
            Rarity::Legendary => 5,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Universe {
    StarRail,
    Genshin,
    HonkaiImpact,
    Zenless,
    Seasonal,
}

pub struct Fighter {
    pub name: &'static str,
    pub universe: Universe,
    pub power: u16,
    pub rarity: Rarity,
    /// Themes under which this fighter's power is boosted.
    pub boost: &'static [Theme],
    /// A seasonal exclusive only enters draws while its theme is active.
    pub exclusive_to: Option<Theme>,
}

impl Fighter {
    pub fn available(&self, theme: Theme) -> bool {
        match self.exclusive_to {
            Some(t) => t == theme,
            None => true,
        }
    }

    /// Power after the seasonal boost: floor(base * 1.15) when one of the
    /// fighter's boost themes is active.
    pub fn effective_power(&self, theme: Theme) -> u16 {
        if self.boost.contains(&theme) {
            (self.power as u64 * SEASON_POWER_NUM / SEASON_POWER_DEN) as u16
        } else {
            self.power
        }
    }
}

const fn plain(name: &'static str, universe: Universe, power: u16, rarity: Rarity) -> Fighter {
    Fighter { name, universe, power, rarity, boost: &[], exclusive_to: None }
}

const fn boosted(
    name: &'static str,
    universe: Universe,
    power: u16,
    rarity: Rarity,
    boost: &'static [Theme],
) -> Fighter {
    Fighter { name, universe, power, rarity, boost, exclusive_to: None }
}

const fn seasonal(
    name: &'static str,
    universe: Universe,
    power: u16,
    rarity: Rarity,
    boost: &'static [Theme],
    theme: Theme,
) -> Fighter {
    Fighter { name, universe, power, rarity, boost, exclusive_to: Some(theme) }
}

const DRAGONS: &[Theme] = &[Theme::Dragons];

pub const ROSTER: &[Fighter] = &[
    // Honkai: Star Rail
    plain("Kafka", Universe::StarRail, 88, Rarity::Epic),
    plain("Blade", Universe::StarRail, 87, Rarity::Epic),
    boosted("Dan Heng", Universe::StarRail, 82, Rarity::Rare, DRAGONS),
    plain("Silver Wolf", Universe::StarRail, 85, Rarity::Epic),
    plain("Clara", Universe::StarRail, 80, Rarity::Rare),
    boosted("Seele", Universe::StarRail, 81, Rarity::Rare, &[Theme::Shadows]),
    plain("Welt", Universe::StarRail, 90, Rarity::Legendary),
    plain("Gepard", Universe::StarRail, 84, Rarity::Epic),
    plain("Yanqing", Universe::StarRail, 79, Rarity::Common),
    plain("Jingliu", Universe::StarRail, 83, Rarity::Epic),
    plain("Himeko", Universe::StarRail, 86, Rarity::Epic),
    plain("Herta", Universe::StarRail, 75, Rarity::Common),
    plain("Luocha", Universe::StarRail, 82, Rarity::Rare),
    plain("Tingyun", Universe::StarRail, 81, Rarity::Rare),
    plain("Sushang", Universe::StarRail, 78, Rarity::Common),
    plain("Fu Xuan", Universe::StarRail, 87, Rarity::Epic),
    plain("Jing Yuan", Universe::StarRail, 89, Rarity::Epic),
    plain("Yukong", Universe::StarRail, 83, Rarity::Rare),
    boosted("Argenti", Universe::StarRail, 91, Rarity::Legendary, &[Theme::Stars]),
    plain("Dr. Ratio", Universe::StarRail, 85, Rarity::Epic),
    // Genshin Impact
    boosted("Raiden Shogun", Universe::Genshin, 95, Rarity::Legendary, &[Theme::Storm]),
    plain("Zhongli", Universe::Genshin, 94, Rarity::Legendary),
    plain("Diluc", Universe::Genshin, 88, Rarity::Epic),
    plain("Ganyu", Universe::Genshin, 90, Rarity::Epic),
    boosted("Nahida", Universe::Genshin, 92, Rarity::Legendary, &[Theme::Harvest]),
    boosted("Venti", Universe::Genshin, 89, Rarity::Epic, &[Theme::Wind]),
    plain("Eula", Universe::Genshin, 86, Rarity::Epic),
    plain("Keqing", Universe::Genshin, 83, Rarity::Rare),
    boosted("Hu Tao", Universe::Genshin, 91, Rarity::Epic, &[Theme::Ghosts]),
    boosted("Ayaka", Universe::Genshin, 89, Rarity::Epic, &[Theme::Ice]),
    boosted("Kokomi", Universe::Genshin, 87, Rarity::Epic, &[Theme::Water]),
    plain("Albedo", Universe::Genshin, 84, Rarity::Rare),
    boosted("Klee", Universe::Genshin, 82, Rarity::Rare, &[Theme::Blossom]),
    plain("Mona", Universe::Genshin, 85, Rarity::Epic),
    plain("Tartaglia", Universe::Genshin, 90, Rarity::Epic),
    plain("Ayato", Universe::Genshin, 88, Rarity::Epic),
    boosted("Yoimiya", Universe::Genshin, 86, Rarity::Epic, &[Theme::Fire]),
    plain("Shenhe", Universe::Genshin, 87, Rarity::Epic),
    plain("Yae Miko", Universe::Genshin, 89, Rarity::Epic),
    plain("Cyno", Universe::Genshin, 85, Rarity::Epic),
    // Honkai Impact 3rd
    plain("Kiana", Universe::HonkaiImpact, 96, Rarity::Legendary),
    plain("Mei", Universe::HonkaiImpact, 92, Rarity::Epic),
    plain("Bronya", Universe::HonkaiImpact, 89, Rarity::Epic),
    plain("Theresa", Universe::HonkaiImpact, 87, Rarity::Epic),
    plain("Fu Hua", Universe::HonkaiImpact, 91, Rarity::Epic),
    plain("Sirin", Universe::HonkaiImpact, 94, Rarity::Legendary),
    plain("Durandal", Universe::HonkaiImpact, 84, Rarity::Rare),
    plain("Rita", Universe::HonkaiImpact, 88, Rarity::Epic),
    plain("Liliya", Universe::HonkaiImpact, 83, Rarity::Rare),
    plain("Rozaliya", Universe::HonkaiImpact, 82, Rarity::Rare),
    plain("Ai-chan", Universe::HonkaiImpact, 90, Rarity::Epic),
    plain("Raven", Universe::HonkaiImpact, 85, Rarity::Epic),
    plain("Griseo", Universe::HonkaiImpact, 81, Rarity::Rare),
    plain("Pardofelis", Universe::HonkaiImpact, 80, Rarity::Rare),
    plain("Vill-V", Universe::HonkaiImpact, 86, Rarity::Epic),
    plain("Otto", Universe::HonkaiImpact, 93, Rarity::Legendary),
    plain("Kevin", Universe::HonkaiImpact, 95, Rarity::Legendary),
    plain("Su", Universe::HonkaiImpact, 88, Rarity::Epic),
    plain("Elysia", Universe::HonkaiImpact, 89, Rarity::Epic),
    plain("Aponia", Universe::HonkaiImpact, 92, Rarity::Epic),
    // Zenless Zone Zero
    plain("Billy", Universe::Zenless, 79, Rarity::Common),
    plain("Nicole", Universe::Zenless, 78, Rarity::Common),
    plain("Lycaon", Universe::Zenless, 84, Rarity::Rare),
    plain("Anton", Universe::Zenless, 80, Rarity::Common),
    plain("Ben", Universe::Zenless, 77, Rarity::Common),
    plain("Corin", Universe::Zenless, 76, Rarity::Common),
    plain("Ellen", Universe::Zenless, 82, Rarity::Rare),
    plain("Lucy", Universe::Zenless, 79, Rarity::Common),
    plain("Piper", Universe::Zenless, 78, Rarity::Common),
    plain("Koleda", Universe::Zenless, 83, Rarity::Rare),
    plain("Seth", Universe::Zenless, 77, Rarity::Common),
    plain("Soukaku", Universe::Zenless, 81, Rarity::Rare),
    plain("Pulchra", Universe::Zenless, 76, Rarity::Common),
    plain("Harumasa", Universe::Zenless, 82, Rarity::Rare),
    plain("Jane", Universe::Zenless, 79, Rarity::Common),
    plain("Anby", Universe::Zenless, 85, Rarity::Epic),
    plain("Grace", Universe::Zenless, 84, Rarity::Epic),
    boosted("Zhu Yuan", Universe::Zenless, 86, Rarity::Epic, &[Theme::Light]),
    plain("Nekomata", Universe::Zenless, 87, Rarity::Epic),
    plain("Rina", Universe::Zenless, 83, Rarity::Rare),
    // Season of Dragons exclusives
    seasonal(
        "Dan Heng: Imbibitor Lunae",
        Universe::StarRail,
        94,
        Rarity::Legendary,
        DRAGONS,
        Theme::Dragons,
    ),
    seasonal(
        "Dan Heng: Permansor Terrae",
        Universe::StarRail,
        96,
        Rarity::Legendary,
        DRAGONS,
        Theme::Dragons,
    ),
    seasonal("Dragon Sovereign", Universe::Seasonal, 98, Rarity::Legendary, DRAGONS, Theme::Dragons),
    seasonal("Elder Wyrm", Universe::Seasonal, 92, Rarity::Epic, DRAGONS, Theme::Dragons),
];

pub fn get(id: u16) -> &'static Fighter {
    &ROSTER[id as usize]
}

/// Roster indexes of fighters that can appear in draws this season.
pub fn available_ids(theme: Theme) -> Vec<u16> {
    ROSTER
        .iter()
        .enumerate()
        .filter(|(_, f)| f.available(theme))
        .map(|(i, _)| i as u16)
        .collect()
}

pub struct BoxItem {
    pub name: &'static str,
    pub price: u64,
    pub pool: &'static [Rarity],
    /// All rarity weights are multiplied by 1.3 for this item.
    pub season_boost: bool,
    /// Theme-locked item: only purchasable while the theme is active, and
    /// fighters tagged for the theme get 3x weight in the fighter draw.
    pub theme: Option<Theme>,
}

impl BoxItem {
    pub fn available(&self, active: Theme) -> bool {
        match self.theme {
            Some(t) => t == active,
            None => true,
        }
    }
}

pub const SHOP: &[BoxItem] = &[
    BoxItem {
        name: "Basic Box",
        price: 100,
        pool: &[Rarity::Common, Rarity::Rare],
        season_boost: false,
        theme: None,
    },
    BoxItem {
        name: "Premium Box",
        price: 300,
        pool: &[Rarity::Common, Rarity::Rare, Rarity::Epic],
        season_boost: false,
        theme: None,
    },
    BoxItem {
        name: "Legendary Box",
        price: 800,
        pool: &[Rarity::Epic, Rarity::Legendary],
        season_boost: false,
        theme: None,
    },
    BoxItem {
        name: "Dragon Box",
        price: 600,
        pool: &[Rarity::Rare, Rarity::Epic, Rarity::Legendary],
        season_boost: true,
        theme: Some(Theme::Dragons),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_names_are_unique() {
        for (i, a) in ROSTER.iter().enumerate() {
            for b in &ROSTER[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn powers_stay_in_range() {
        for f in ROSTER {
            assert!(f.power >= 1 && f.power <= 100, "{} power {}", f.name, f.power);
        }
    }

    #[test]
    fn every_rarity_is_always_drawable() {
        // Even outside the dragon season, each rarity must have candidates.
        for rarity in [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary] {
            let n = available_ids(Theme::Ice)
                .iter()
                .filter(|&&id| get(id).rarity == rarity)
                .count();
            assert!(n > 0, "no {:?} fighters outside dragon season", rarity);
        }
    }

    #[test]
    fn seasonal_exclusives_gated_by_theme() {
        let dragons = available_ids(Theme::Dragons);
        let ice = available_ids(Theme::Ice);
        assert_eq!(dragons.len(), ROSTER.len());
        assert_eq!(ice.len(), ROSTER.len() - 4);
        assert!(ice.iter().all(|&id| get(id).exclusive_to.is_none()));
    }

    #[test]
    fn seasonal_boost_applies_floor() {
        let dan_heng = ROSTER.iter().find(|f| f.name == "Dan Heng").unwrap();
        // floor(82 * 1.15) = 94
        assert_eq!(dan_heng.effective_power(Theme::Dragons), 94);
        assert_eq!(dan_heng.effective_power(Theme::Ice), 82);
        let kafka = ROSTER.iter().find(|f| f.name == "Kafka").unwrap();
        assert_eq!(kafka.effective_power(Theme::Dragons), 88);
    }

    #[test]
    fn shop_items_gated_by_theme() {
        let dragon_box = &SHOP[3];
        assert!(dragon_box.available(Theme::Dragons));
        assert!(!dragon_box.available(Theme::Water));
        assert!(SHOP[0].available(Theme::Water));
    }
}
