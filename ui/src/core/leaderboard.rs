//! Sample ladder shown in the hero preview. Illustrative data only.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Master,
    Diamond,
    Emerald,
    Platinum,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Master => "Master",
            Tier::Diamond => "Diamond",
            Tier::Emerald => "Emerald",
            Tier::Platinum => "Platinum",
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Tier::Master => "tier--master",
            Tier::Diamond => "tier--diamond",
            Tier::Emerald => "tier--emerald",
            Tier::Platinum => "tier--platinum",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: &'static str,
    /// League points.
    pub lp: u32,
    pub wins: u32,
    pub losses: u32,
    pub tier: Tier,
    /// Points earned under the server's weekly rules.
    pub points: u32,
}

impl LeaderboardEntry {
    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }

    /// Win percentage in `[0, 100]`, rounded; 0 when no games were played.
    pub fn win_rate(&self) -> u8 {
        match self.games() {
            0 => 0,
            games => ((self.wins as f64 / games as f64) * 100.0).round() as u8,
        }
    }

    /// `"42/28"` style record.
    pub fn record(&self) -> String {
        format!("{}/{}", self.wins, self.losses)
    }
}

pub const SAMPLE_LADDER: [LeaderboardEntry; 4] = [
    LeaderboardEntry {
        rank: 1,
        name: "NamiMains",
        lp: 820,
        wins: 42,
        losses: 28,
        tier: Tier::Master,
        points: 120,
    },
    LeaderboardEntry {
        rank: 2,
        name: "BaronSoul",
        lp: 780,
        wins: 39,
        losses: 25,
        tier: Tier::Diamond,
        points: 112,
    },
    LeaderboardEntry {
        rank: 3,
        name: "SplitPush",
        lp: 740,
        wins: 37,
        losses: 24,
        tier: Tier::Diamond,
        points: 108,
    },
    LeaderboardEntry {
        rank: 4,
        name: "JungleDiff",
        lp: 710,
        wins: 35,
        losses: 26,
        tier: Tier::Emerald,
        points: 101,
    },
];
