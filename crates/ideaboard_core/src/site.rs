//! Static page copy.

pub const SITE_TITLE: &str = "SendAI";
pub const SITE_TAGLINE: &str = "accelerating the solana ai ecosystem";
pub const SITE_URL: &str = "https://sendai.fun";
pub const HACKATHON_URL: &str = "https://solanaaihackathon.com";

pub const IDEAS_HEADER: &str = "Solana AI Hackathon";
pub const IDEAS_SUBTITLE: &str = "global • 15 days • build ai agents";

pub const HERO_HEADING: &str = "Explore Ideas";
pub const HERO_BLURB: &str =
    "Browse through our curated list of AI agent ideas and find your next project.";

pub const RESOURCES_HEADING: &str = "sponsor resources";
pub const RESOURCES_BLURB: &str =
    "explore resources provided by our sponsors to help you build your project";

/// Label of the "no track selected" filter.
pub const ALL_TRACKS_LABEL: &str = "All Tracks";
pub const ALL_SPONSORS_LABEL: &str = "all sponsors";
