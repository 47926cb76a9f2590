use serde::Serialize;

/// 管理後台總覽卡片，目前為固定數字
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminStats {
    pub total_artworks: u64,
    pub pending_approvals: u64,
    pub total_artists: u64,
    pub total_views: String,
}

impl Default for AdminStats {
    fn default() -> Self {
        Self {
            total_artworks: 156,
            pending_approvals: 23,
            total_artists: 89,
            total_views: "12.5K".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyStat {
    pub month: &'static str,
    pub views: u64,
    pub likes: u64,
}

pub fn monthly_stats() -> Vec<MonthlyStat> {
    [
        ("Jan", 1200, 45),
        ("Feb", 1500, 52),
        ("Mar", 1800, 63),
        ("Apr", 2200, 78),
        ("May", 2500, 85),
        ("Jun", 2800, 92),
    ]
    .into_iter()
    .map(|(month, views, likes)| MonthlyStat { month, views, likes })
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatTotals {
    pub views: u64,
    pub likes: u64,
}

pub fn totals(stats: &[MonthlyStat]) -> StatTotals {
    StatTotals {
        views: stats.iter().map(|s| s.views).sum(),
        likes: stats.iter().map(|s| s.likes).sum(),
    }
}
