use anchor_lang::prelude::*;

/// Monthly season themes. One theme per calendar month, cycling every year.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum Theme {
    Dragons,
    Blossom,
    Wind,
    Fire,
    Water,
    Light,
    Shadows,
    Storm,
    Harvest,
    Ghosts,
    Ice,
    Stars,
}

impl Theme {
    pub const ALL: [Theme; 12] = [
        Theme::Dragons,
        Theme::Blossom,
        Theme::Wind,
        Theme::Fire,
        Theme::Water,
        Theme::Light,
        Theme::Shadows,
        Theme::Storm,
        Theme::Harvest,
        Theme::Ghosts,
        Theme::Ice,
        Theme::Stars,
    ];

    /// Theme for a 1-based calendar month.
    pub fn for_month(month: u32) -> Theme {
        Theme::ALL[(month as usize - 1) % 12]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Dragons => "Season of Dragons",
            Theme::Blossom => "Season of Blossom",
            Theme::Wind => "Season of Wind",
            Theme::Fire => "Season of Fire",
            Theme::Water => "Season of Water",
            Theme::Light => "Season of Light",
            Theme::Shadows => "Season of Shadows",
            Theme::Storm => "Season of Storm",
            Theme::Harvest => "Season of Harvest",
            Theme::Ghosts => "Season of Ghosts",
            Theme::Ice => "Season of Ice",
            Theme::Stars => "Season of Stars",
        }
    }
}

/// Active theme for a unix timestamp (UTC).
pub fn active_theme(unix_ts: i64) -> Theme {
    Theme::for_month(month_of(unix_ts))
}

/// Calendar month (1-12) of a unix timestamp, proleptic Gregorian.
/// Days-to-civil conversion per Howard Hinnant's algorithm.
pub fn month_of(unix_ts: i64) -> u32 {
    let days = unix_ts.div_euclid(86_400);
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = (z - era * 146_097) as u64;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    m as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_of_known_timestamps() {
        assert_eq!(month_of(0), 1); // 1970-01-01
        assert_eq!(month_of(1_735_689_600), 1); // 2025-01-01
        assert_eq!(month_of(1_738_368_000), 2); // 2025-02-01
        assert_eq!(month_of(1_751_328_000), 7); // 2025-07-01
        assert_eq!(month_of(1_767_225_599), 12); // 2025-12-31 23:59:59
    }

    #[test]
    fn themes_cycle_with_months() {
        assert_eq!(active_theme(0), Theme::Dragons);
        assert_eq!(active_theme(0).name(), "Season of Dragons");
        assert_eq!(active_theme(1_738_368_000), Theme::Blossom);
        assert_eq!(active_theme(1_767_225_599), Theme::Stars);
    }

    #[test]
    fn every_month_has_a_distinct_theme() {
        for m in 1..=12u32 {
            for n in (m + 1)..=12 {
                assert_ne!(Theme::for_month(m), Theme::for_month(n));
            }
        }
    }
}
