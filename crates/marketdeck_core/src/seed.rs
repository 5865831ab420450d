//! Static seed data loaded into a fresh store.
//!
//! Campaign dates are relative to a caller-supplied day so calendar lookups
//! stay meaningful whenever the store is built.

use crate::model::asset::{Asset, AssetKind};
use crate::model::audience::{Audience, AudienceType};
use crate::model::business::{BusinessEntity, BusinessStatus, MemberStatus, TeamMember, TeamRole};
use crate::model::campaign::{Campaign, CampaignStatus};
use crate::model::lead::{Lead, LeadStatus};
use crate::model::notification::{Notification, NotificationKind};
use crate::model::profile::{
    BrandProfile, Presence, SocialLinks, Theme, UserPreferences, UserProfile,
};
use crate::model::rule::{AutomationRule, RuleAction, RuleStatus, TriggerMetric, TriggerOperator};
use crate::model::saved_ad::SavedAd;
use crate::model::Platform;
use chrono::{Local, NaiveDate, TimeDelta};

/// Initial contents for every store collection and singleton.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedData {
    pub businesses: Vec<BusinessEntity>,
    pub team_members: Vec<TeamMember>,
    pub audiences: Vec<Audience>,
    pub notifications: Vec<Notification>,
    pub campaigns: Vec<Campaign>,
    pub saved_ads: Vec<SavedAd>,
    pub assets: Vec<Asset>,
    pub rules: Vec<AutomationRule>,
    pub leads: Vec<Lead>,
    pub user_profile: UserProfile,
    pub brand_profile: BrandProfile,
}

impl SeedData {
    /// Seed with campaign dates anchored on the local calendar day.
    pub fn current() -> Self {
        Self::relative_to(Local::now().date_naive())
    }

    pub fn relative_to(today: NaiveDate) -> Self {
        Self {
            businesses: businesses(),
            team_members: team_members(),
            audiences: audiences(),
            notifications: notifications(),
            campaigns: campaigns(today),
            saved_ads: Vec::new(),
            assets: assets(),
            rules: rules(),
            leads: leads(),
            user_profile: default_user_profile(),
            brand_profile: default_brand_profile(),
        }
    }

    /// Empty collections with the default profiles.
    pub fn empty() -> Self {
        Self {
            businesses: Vec::new(),
            team_members: Vec::new(),
            audiences: Vec::new(),
            notifications: Vec::new(),
            campaigns: Vec::new(),
            saved_ads: Vec::new(),
            assets: Vec::new(),
            rules: Vec::new(),
            leads: Vec::new(),
            user_profile: default_user_profile(),
            brand_profile: default_brand_profile(),
        }
    }
}

/// Saturates at the calendar bounds instead of overflowing.
fn offset(today: NaiveDate, days: i64) -> NaiveDate {
    let delta = TimeDelta::days(days);
    today.checked_add_signed(delta).unwrap_or(if days < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    })
}

#[allow(clippy::too_many_arguments)]
fn campaign(
    id: &str,
    name: &str,
    status: CampaignStatus,
    spend: f64,
    reach: u64,
    roas: f64,
    platform: Platform,
    ctr: f64,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Campaign {
    Campaign {
        id: id.to_string(),
        name: name.to_string(),
        status,
        spend,
        reach,
        roas,
        platform,
        ctr,
        start_date,
        end_date,
    }
}

#[rustfmt::skip]
fn campaigns(today: NaiveDate) -> Vec<Campaign> {
    let day = |days| offset(today, days);
    vec![
        campaign("c1", "Summer Sale Retargeting", CampaignStatus::Active, 1250.0, 45_000, 3.2, Platform::Instagram, 2.1, day(-5), day(10)),
        campaign("c2", "Brand Awareness Q3", CampaignStatus::Active, 8500.0, 210_000, 1.8, Platform::Facebook, 1.5, day(-15), day(15)),
        campaign("c3", "New Collection Launch", CampaignStatus::Review, 0.0, 0, 0.0, Platform::Instagram, 0.0, day(2), day(20)),
        campaign("c4", "Lead Gen Webinar", CampaignStatus::Paused, 450.0, 12_000, 2.1, Platform::Facebook, 3.4, day(-20), day(-2)),
        campaign("c5", "Holiday Special", CampaignStatus::Draft, 0.0, 0, 0.0, Platform::WhatsApp, 0.0, day(10), day(30)),
    ]
}

fn business(
    id: &str,
    name: &str,
    verified: bool,
    ad_accounts: u32,
    pages: u32,
    status: BusinessStatus,
) -> BusinessEntity {
    BusinessEntity {
        id: id.to_string(),
        name: name.to_string(),
        verified,
        ad_accounts,
        pages,
        page_entities: None,
        assigned_members: None,
        status,
        pixel_id: None,
        domain: None,
        spending_limit: None,
    }
}

fn businesses() -> Vec<BusinessEntity> {
    vec![
        BusinessEntity {
            pixel_id: Some("PIXEL-84920".to_string()),
            domain: Some("stellar.io".to_string()),
            spending_limit: Some(5000.0),
            ..business("1", "Stellar Innovations", true, 2, 3, BusinessStatus::Active)
        },
        BusinessEntity {
            pixel_id: Some("PIXEL-11204".to_string()),
            domain: Some("nebula.shop".to_string()),
            ..business("2", "Nebula Retail Group", true, 5, 12, BusinessStatus::Active)
        },
        BusinessEntity {
            domain: Some("quantum.coffee".to_string()),
            ..business("3", "Quantum Coffee", false, 1, 1, BusinessStatus::Pending)
        },
        BusinessEntity {
            pixel_id: Some("PIXEL-00000".to_string()),
            spending_limit: Some(0.0),
            ..business("4", "Hyperion Tech", true, 0, 1, BusinessStatus::Restricted)
        },
    ]
}

fn member(
    id: &str,
    name: &str,
    email: &str,
    role: TeamRole,
    status: MemberStatus,
    last_active: &str,
) -> TeamMember {
    TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        last_active: last_active.to_string(),
    }
}

#[rustfmt::skip]
fn team_members() -> Vec<TeamMember> {
    vec![
        member("t1", "Alex Rivera", "alex.r@nexus.com", TeamRole::Admin, MemberStatus::Active, "Now"),
        member("t2", "Sarah Chen", "sarah.c@nexus.com", TeamRole::Editor, MemberStatus::Active, "2h ago"),
        member("t3", "Mike Johnson", "mike.j@nexus.com", TeamRole::Analyst, MemberStatus::Pending, "-"),
    ]
}

fn audience(
    id: &str,
    name: &str,
    size: u64,
    kind: AudienceType,
    platforms: &[Platform],
    match_rate: Option<f64>,
    last_updated: &str,
) -> Audience {
    Audience {
        id: id.to_string(),
        name: name.to_string(),
        size,
        kind,
        platforms: platforms.to_vec(),
        match_rate,
        last_updated: last_updated.to_string(),
        description: None,
        interests: None,
    }
}

#[rustfmt::skip]
fn audiences() -> Vec<Audience> {
    use Platform::{Facebook, Instagram};
    vec![
        audience("a1", "Past Purchasers (30d)", 12_500, AudienceType::Custom, &[Facebook, Instagram], Some(95.0), "2h ago"),
        audience("a2", "Top 5% LTV Lookalike", 2_500_000, AudienceType::Lookalike, &[Facebook], Some(100.0), "1d ago"),
        audience("a3", "Tech Enthusiasts CA", 450_000, AudienceType::Saved, &[Instagram], None, "5d ago"),
        audience("a4", "Newsletter Subscribers", 8_500, AudienceType::Custom, &[Facebook, Instagram], Some(88.0), "12m ago"),
    ]
}

fn notification(
    id: &str,
    title: &str,
    message: &str,
    time: &str,
    read: bool,
    kind: NotificationKind,
) -> Notification {
    Notification {
        id: id.to_string(),
        title: title.to_string(),
        message: message.to_string(),
        time: time.to_string(),
        read,
        kind,
    }
}

#[rustfmt::skip]
fn notifications() -> Vec<Notification> {
    vec![
        notification("n1", "Ad Account Restricted", "Hyperion Tech ad account has been flagged.", "20m ago", false, NotificationKind::Alert),
        notification("n2", "Campaign Approved", "Summer Sale Retargeting is now active.", "1h ago", false, NotificationKind::Success),
        notification("n3", "New Feature Available", "Try the new AI Audience builder.", "2d ago", true, NotificationKind::Info),
    ]
}

fn asset(
    id: &str,
    name: &str,
    kind: AssetKind,
    size: &str,
    dimensions: &str,
    tags: &[&str],
    created_at: &str,
) -> Asset {
    Asset {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        url: String::new(),
        size: size.to_string(),
        dimensions: Some(dimensions.to_string()),
        tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
        created_at: created_at.to_string(),
    }
}

#[rustfmt::skip]
fn assets() -> Vec<Asset> {
    use AssetKind::{Image, Video};
    vec![
        asset("ast1", "Summer Campaign Hero", Image, "2.4 MB", "1080x1080", &["Summer", "Lifestyle", "Outdoor"], "2024-10-10"),
        asset("ast2", "Product Demo Reel", Video, "15.2 MB", "1080x1920", &["Product", "Reel", "Tutorial"], "2024-10-12"),
        asset("ast3", "Logo Transparent", Image, "0.5 MB", "500x500", &["Branding", "Logo"], "2024-09-01"),
        asset("ast4", "Office Interior", Image, "3.1 MB", "1920x1080", &["Office", "Team", "Culture"], "2024-09-15"),
        asset("ast5", "Customer Testimonial", Video, "24 MB", "1080x1080", &["Social Proof", "Interview"], "2024-10-05"),
    ]
}

fn rules() -> Vec<AutomationRule> {
    vec![
        AutomationRule {
            id: "r1".to_string(),
            name: "Pause Losers".to_string(),
            status: RuleStatus::Active,
            trigger_metric: TriggerMetric::Roas,
            trigger_operator: TriggerOperator::LessThan,
            trigger_value: 1.5,
            timeframe: "Last 3 Days".to_string(),
            action: RuleAction::PauseCampaign,
            action_value: None,
            last_run: Some("2h ago".to_string()),
        },
        AutomationRule {
            id: "r2".to_string(),
            name: "Scale Winners".to_string(),
            status: RuleStatus::Active,
            trigger_metric: TriggerMetric::Roas,
            trigger_operator: TriggerOperator::GreaterThan,
            trigger_value: 3.0,
            timeframe: "Last 7 Days".to_string(),
            action: RuleAction::IncreaseBudget,
            action_value: Some(20.0),
            last_run: Some("1d ago".to_string()),
        },
        AutomationRule {
            id: "r3".to_string(),
            name: "CTR Watchdog".to_string(),
            status: RuleStatus::Paused,
            trigger_metric: TriggerMetric::Ctr,
            trigger_operator: TriggerOperator::LessThan,
            trigger_value: 0.8,
            timeframe: "Last 3 Days".to_string(),
            action: RuleAction::Notify,
            action_value: None,
            last_run: Some("-".to_string()),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn lead(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    source: &str,
    platform: Platform,
    status: LeadStatus,
    quality_score: u8,
    created_at: &str,
) -> Lead {
    Lead {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: Some(phone.to_string()),
        source: source.to_string(),
        platform,
        status,
        quality_score,
        created_at: created_at.to_string(),
        notes: None,
    }
}

#[rustfmt::skip]
fn leads() -> Vec<Lead> {
    use Platform::{Facebook, Instagram};
    vec![
        lead("ld1", "Marcus Thorne", "m.thorne@corp.com", "+1 555 0102", "Enterprise Webinar Form", Facebook, LeadStatus::New, 88, "10m ago"),
        lead("ld2", "Elena Rodriguez", "elena.r@gmail.com", "+1 555 0199", "Summer Sale Popup", Instagram, LeadStatus::Contacted, 65, "2h ago"),
        lead("ld3", "Tech Startups Inc", "info@techstart.io", "+1 555 0222", "Lead Gen Campaign V2", Facebook, LeadStatus::Qualified, 94, "1d ago"),
        lead("ld4", "John Smith", "jsmith1990@yahoo.com", "", "Newsletter Signup", Instagram, LeadStatus::Lost, 32, "3d ago"),
    ]
}

pub fn default_user_profile() -> UserProfile {
    UserProfile {
        first_name: "Saiful".to_string(),
        last_name: "Alam Rafi".to_string(),
        email: "admin@sarindustries.com".to_string(),
        role: "Enterprise Admin".to_string(),
        job_title: Some("Chief Operations Officer".to_string()),
        department: Some("Sar Industries Global".to_string()),
        location: Some("New York, USA".to_string()),
        bio: Some("Lead developer and strategist at Sar Industries.".to_string()),
        phone: Some("+1 (555) 123-4567".to_string()),
        language: Some("English (US)".to_string()),
        timezone: Some("America/New_York".to_string()),
        avatar: None,
        cover_image: None,
        status: Some(Presence::Online),
        social_links: Some(SocialLinks {
            linkedin: Some("linkedin.com/in/saifulalamrafi".to_string()),
            twitter: Some("@sar_ind".to_string()),
            website: Some("sarindustries.com".to_string()),
        }),
        preferences: Some(UserPreferences {
            theme: Theme::Dark,
            compact_mode: false,
            reduce_motion: false,
            high_contrast: false,
        }),
    }
}

pub fn default_brand_profile() -> BrandProfile {
    BrandProfile {
        name: "Sar Industries".to_string(),
        tagline: "Innovating the Future".to_string(),
        description: "A global technology conglomerate pioneering solutions in AI, infrastructure, and digital ecosystems.".to_string(),
        voice: "Authoritative, Visionary, and Sophisticated".to_string(),
        keywords: ["Innovation", "Leadership", "Future", "Industrial"]
            .iter()
            .map(|keyword| (*keyword).to_string())
            .collect(),
        primary_color: "#3b82f6".to_string(),
        target_audience: "Global Enterprises and Government Sectors".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::SeedData;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    #[test]
    fn campaign_dates_follow_the_anchor_day() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let seed = SeedData::relative_to(today);
        let c1 = seed.campaigns.iter().find(|c| c.id == "c1").unwrap();
        assert_eq!(c1.start_date, NaiveDate::from_ymd_opt(2024, 6, 26).unwrap());
        assert_eq!(c1.end_date, NaiveDate::from_ymd_opt(2024, 7, 11).unwrap());
    }

    #[test]
    fn seed_ids_are_unique_per_collection() {
        let seed = SeedData::relative_to(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let campaign_ids: HashSet<_> = seed.campaigns.iter().map(|c| c.id.as_str()).collect();
        let lead_ids: HashSet<_> = seed.leads.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(campaign_ids.len(), seed.campaigns.len());
        assert_eq!(lead_ids.len(), seed.leads.len());
        assert!(seed.saved_ads.is_empty());
    }

    #[test]
    fn anchor_near_calendar_end_saturates() {
        let seed = SeedData::relative_to(NaiveDate::MAX);
        let c5 = seed.campaigns.iter().find(|c| c.id == "c5").unwrap();
        assert_eq!(c5.end_date, NaiveDate::MAX);
        assert!(c5.start_date <= c5.end_date);
    }
}
