pub struct FetchSettings {
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub api_base_url: &'static str,
    pub stats_base_url: &'static str,
    pub roster_base_url: &'static str,
    pub site_base_url: &'static str,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            timeout_secs: 15,
            api_base_url: "https://api-web.nhle.com/v1",
            stats_base_url: "https://api.nhle.com/stats/rest/en",
            roster_base_url: "https://www.dailyfaceoff.com",
            site_base_url: "https://www.nhl.com",
        }
    }
}

pub struct ScheduleSettings {
    pub horizon_days: u32,
    pub broadcast_country: &'static str,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            horizon_days: 60,
            broadcast_country: "US",
        }
    }
}

pub struct RosterSettings {
    pub injuries_marker: &'static str,
    /// Characters scanned after the injuries marker
    pub injury_window: usize,
    /// Characters scanned after a player's first mention for a status keyword
    pub status_window: usize,
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            injuries_marker: ">Injuries<",
            injury_window: 10_000,
            status_window: 500,
        }
    }
}

pub struct TemplateSettings {
    pub logo_hosts: Vec<&'static str>,
    pub expected_logos: usize,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            logo_hosts: vec!["invisioncic.com", "blueshirtsbrotherhood.com"],
            expected_logos: 4,
        }
    }
}

#[derive(Default)]
pub struct AppConfig {
    pub fetch: FetchSettings,
    pub schedule: ScheduleSettings,
    pub roster: RosterSettings,
    pub template: TemplateSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
