use std::collections::HashMap;

use crate::domain::TeamIdentity;

const LOGO_HOST: &str = "//media.invisioncic.com/c316106";

/// Radio line shown in the header when the primary team is the Rangers
const NYR_RADIO: &str = "98.7 FM, 107.1 FM, 710 AM, Sirius XM";

/// (code, display name, roster-page slug, logo path under the logo host)
const TEAMS: &[(&str, &str, &str, &str)] = &[
    ("ANA", "Anaheim Ducks", "anaheim-ducks", "monthly_2024_10/ANA.png.e205426d6dd0c0e62a8ca45f4285a848.png"),
    ("ARI", "Arizona Coyotes", "arizona-coyotes", ""),
    ("BOS", "Boston Bruins", "boston-bruins", "monthly_2021_09/gdt-logos-bos.png.9245743e69b7ab2a6fa56f66373a9417.png"),
    ("BUF", "Buffalo Sabres", "buffalo-sabres", "monthly_2021_09/gdt-logos-buf.png.74b16b6cea5f0178680004507f29d0eb.png"),
    ("CGY", "Calgary Flames", "calgary-flames", "monthly_2021_09/gdt-logos-cgy.png.a6a381a09391cff7eaf233cfe8eccbe8.png"),
    ("CAR", "Carolina Hurricanes", "carolina-hurricanes", "monthly_2021_09/gdt-logos-car.png.9275f196cd692cf0401852115615f87b.png"),
    ("CHI", "Chicago Blackhawks", "chicago-blackhawks", "monthly_2021_09/gdt-logos-chi.png.edec18d1a7e150d08338c7a66e8312e6.png"),
    ("COL", "Colorado Avalanche", "colorado-avalanche", "monthly_2021_09/gdt-logos-col.png.922f5df84a60dc71e5a4489a25c304d1.png"),
    ("CBJ", "Columbus Blue Jackets", "columbus-blue-jackets", "monthly_2021_09/gdt-logos-cbj.png.0019056d85e2d1a7b9fed8ccbfc08ab5.png"),
    ("DAL", "Dallas Stars", "dallas-stars", "monthly_2021_09/gdt-logos-dal.png.4a83ae6b7cc3f2457dae3ffe380d7513.png"),
    ("DET", "Detroit Red Wings", "detroit-red-wings", "monthly_2021_09/gdt-logos-det.png.a69165f4270e6f15fa6860e115e37720.png"),
    ("EDM", "Edmonton Oilers", "edmonton-oilers", "monthly_2021_09/gdt-logos-edm.png.7bb6a5835c8fab1e96eacd930be2b112.png"),
    ("FLA", "Florida Panthers", "florida-panthers", "monthly_2021_09/gdt-logos-fla.png.d9422e531543403ed33e88b10cc48af6.png"),
    ("LAK", "Los Angeles Kings", "los-angeles-kings", "monthly_2025_03/gdt-logos-lak.png.94aa50efd13cf820f39951f595ff2fff.png"),
    ("MIN", "Minnesota Wild", "minnesota-wild", "monthly_2021_09/gdt-logos-min.png.5d3e06f2ddf7bfda4207af327a93b09e.png"),
    ("MTL", "Montreal Canadiens", "montreal-canadiens", "monthly_2021_09/gdt-logos-mtl.png.76ee659aed4e8a8a3c9a45717773e7a1.png"),
    ("NSH", "Nashville Predators", "nashville-predators", "monthly_2021_09/gdt-logos-nsh.png.263531c037486a4a0775475e2c666696.png"),
    ("NJD", "New Jersey Devils", "new-jersey-devils", "monthly_2021_09/gdt-logos-njd.png.995541c7bd89e48ab72a5b888a62c32f.png"),
    ("NYI", "New York Islanders", "new-york-islanders", "monthly_2021_09/gdt-logos-nyi.png.3558ca3bb0b5ff4bfbc066e65b9d8079.png"),
    ("NYR", "New York Rangers", "new-york-rangers", "monthly_2021_09/gdt-logos-nyr.png.361dbab7a8ecf15de4e4b3a41c339331.png"),
    ("OTT", "Ottawa Senators", "ottawa-senators", "monthly_2021_09/gdt-logos-ott.png.30279696b5a596d2471e77be9b32c3c3.png"),
    ("PHI", "Philadelphia Flyers", "philadelphia-flyers", "monthly_2021_09/gdt-logos-phi.png.1d82a65c8446787bf7437b955ff134b7.png"),
    ("PIT", "Pittsburgh Penguins", "pittsburgh-penguins", "monthly_2021_09/gdt-logos-pit.png.cc1de7bfb6706e84d860f54e886b3911.png"),
    ("SJS", "San Jose Sharks", "san-jose-sharks", "monthly_2021_09/gdt-logos-sjs.png.5aec12c85fc975e9b51615fbb48eafef.png"),
    ("SEA", "Seattle Kraken", "seattle-kraken", "monthly_2021_09/gdt-logos-sea.png.e0dc5b9394fafc197ac47c346d4d271a.png"),
    ("STL", "St. Louis Blues", "st-louis-blues", "monthly_2021_09/gdt-logos-stl.png.be1ee6e3201adb94164ca1be4194a331.png"),
    ("TBL", "Tampa Bay Lightning", "tampa-bay-lightning", "monthly_2021_09/gdt-logos-tbl.png.c002d0a6ddc76500f0088b5bbd848f25.png"),
    ("TOR", "Toronto Maple Leafs", "toronto-maple-leafs", "monthly_2021_09/gdt-logos-tor.png.4277ed0b6abaa8a22da800e1c7e44074.png"),
    ("UTA", "Utah Hockey Club", "utah-hockey-club", "monthly_2026_01/Utah_Mam.png.51f6ebab37070cd7c4de6552f2fdf246.png"),
    ("VAN", "Vancouver Canucks", "vancouver-canucks", "monthly_2021_09/gdt-logos-van.png.193f6d61e70c3faa37823d822d085b19.png"),
    ("VGK", "Vegas Golden Knights", "vegas-golden-knights", "monthly_2021_09/gdt-logos-vgk.png.6e5a8a5dcfe130477f1ed83a60e445fd.png"),
    ("WSH", "Washington Capitals", "washington-capitals", "monthly_2021_09/gdt-logos-wsh.png.9e2e91c1b04fee71e9afc923cfc83973.png"),
    ("WPG", "Winnipeg Jets", "winnipeg-jets", "monthly_2021_09/gdt-logos-wpg.png.ba967dfc0e637107ef9c46436cc6d7c7.png"),
];

/// Free-text names and nicknames, lower case
const ALIASES: &[(&str, &str)] = &[
    // Metropolitan
    ("carolina hurricanes", "CAR"), ("hurricanes", "CAR"), ("canes", "CAR"),
    ("columbus blue jackets", "CBJ"), ("blue jackets", "CBJ"), ("jackets", "CBJ"),
    ("new jersey devils", "NJD"), ("devils", "NJD"),
    ("new york islanders", "NYI"), ("islanders", "NYI"), ("isles", "NYI"),
    ("new york rangers", "NYR"), ("rangers", "NYR"), ("nyr", "NYR"),
    ("philadelphia flyers", "PHI"), ("flyers", "PHI"),
    ("pittsburgh penguins", "PIT"), ("penguins", "PIT"), ("pens", "PIT"),
    ("washington capitals", "WSH"), ("capitals", "WSH"), ("caps", "WSH"),
    // Atlantic
    ("boston bruins", "BOS"), ("bruins", "BOS"),
    ("buffalo sabres", "BUF"), ("sabres", "BUF"),
    ("detroit red wings", "DET"), ("red wings", "DET"), ("wings", "DET"),
    ("florida panthers", "FLA"), ("panthers", "FLA"), ("cats", "FLA"),
    ("montreal canadiens", "MTL"), ("canadiens", "MTL"), ("habs", "MTL"),
    ("ottawa senators", "OTT"), ("senators", "OTT"), ("sens", "OTT"),
    ("tampa bay lightning", "TBL"), ("lightning", "TBL"), ("bolts", "TBL"),
    ("toronto maple leafs", "TOR"), ("maple leafs", "TOR"), ("leafs", "TOR"),
    // Central
    ("arizona coyotes", "ARI"), ("coyotes", "ARI"), ("yotes", "ARI"),
    ("chicago blackhawks", "CHI"), ("blackhawks", "CHI"), ("hawks", "CHI"),
    ("colorado avalanche", "COL"), ("avalanche", "COL"), ("avs", "COL"),
    ("dallas stars", "DAL"), ("stars", "DAL"),
    ("minnesota wild", "MIN"), ("wild", "MIN"),
    ("nashville predators", "NSH"), ("predators", "NSH"), ("preds", "NSH"),
    ("st. louis blues", "STL"), ("st louis blues", "STL"), ("blues", "STL"),
    ("winnipeg jets", "WPG"), ("jets", "WPG"),
    ("utah hockey club", "UTA"), ("utah", "UTA"),
    // Pacific
    ("anaheim ducks", "ANA"), ("ducks", "ANA"),
    ("calgary flames", "CGY"), ("flames", "CGY"),
    ("edmonton oilers", "EDM"), ("oilers", "EDM"), ("oil", "EDM"),
    ("los angeles kings", "LAK"), ("kings", "LAK"),
    ("san jose sharks", "SJS"), ("sharks", "SJS"),
    ("seattle kraken", "SEA"), ("kraken", "SEA"),
    ("vancouver canucks", "VAN"), ("canucks", "VAN"), ("nucks", "VAN"),
    ("vegas golden knights", "VGK"), ("golden knights", "VGK"), ("knights", "VGK"),
];

/// Immutable lookup of every team the tool knows about.
///
/// Built once at startup and handed to the components that need it.
#[derive(Debug, Clone)]
pub struct TeamDirectory {
    teams: Vec<TeamIdentity>,
    aliases: HashMap<String, String>,
}

impl TeamDirectory {
    pub fn new(teams: Vec<TeamIdentity>, aliases: HashMap<String, String>) -> Self {
        Self { teams, aliases }
    }

    /// The league table shipped with the tool
    pub fn standard() -> Self {
        let teams = TEAMS
            .iter()
            .map(|(code, name, slug, logo)| Self::build_identity(code, name, slug, logo))
            .collect();
        let aliases = ALIASES
            .iter()
            .map(|(alias, code)| (alias.to_string(), code.to_string()))
            .collect();

        Self::new(teams, aliases)
    }

    /// Resolve free text ("leafs", " Toronto Maple Leafs ", "tor") to a team code
    pub fn resolve(&self, text: &str) -> Option<&str> {
        let normalized = text.trim().to_lowercase();

        if let Some(code) = self.aliases.get(&normalized) {
            return Some(code.as_str());
        }

        let upper = normalized.to_uppercase();
        self.get(&upper).map(|team| team.code.as_str())
    }

    pub fn get(&self, code: &str) -> Option<&TeamIdentity> {
        self.teams.iter().find(|team| team.code == code)
    }

    /// Every team except `excluded`, sorted by display name
    pub fn opponents_of(&self, excluded: &str) -> Vec<&TeamIdentity> {
        let mut teams: Vec<&TeamIdentity> = self
            .teams
            .iter()
            .filter(|team| team.code != excluded)
            .collect();
        teams.sort_by(|a, b| a.name.cmp(&b.name));
        teams
    }

    // --- Construction Helpers ---

    fn build_identity(code: &str, name: &str, slug: &str, logo: &str) -> TeamIdentity {
        TeamIdentity {
            code: code.to_string(),
            name: name.to_string(),
            logo_url: Self::logo_url(logo),
            roster_slug: slug.to_string(),
            radio: Self::radio_for(code),
        }
    }

    fn logo_url(path: &str) -> Option<String> {
        if path.is_empty() {
            None
        } else {
            Some(format!("{}/{}", LOGO_HOST, path))
        }
    }

    fn radio_for(code: &str) -> Option<String> {
        match code {
            "NYR" => Some(NYR_RADIO.to_string()),
            _ => None,
        }
    }
}
