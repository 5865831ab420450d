use chrono::NaiveDate;
use marketdeck_core::gateway::types::LeadScore;
use marketdeck_core::model::asset::{Asset, AssetKind};
use marketdeck_core::model::audience::{Audience, AudienceType};
use marketdeck_core::model::business::{
    BusinessEntity, BusinessStatus, MemberStatus, TeamMember, TeamRole,
};
use marketdeck_core::model::campaign::{Campaign, CampaignPatch, CampaignStatus};
use marketdeck_core::model::lead::LeadStatus;
use marketdeck_core::model::notification::{NotificationKind, ToastKind};
use marketdeck_core::model::profile::{BrandProfilePatch, UserProfilePatch};
use marketdeck_core::model::rule::{
    AutomationRule, RuleAction, RulePatch, RuleStatus, TriggerMetric, TriggerOperator,
};
use marketdeck_core::model::saved_ad::{AdReviewStatus, GeneratedContent, SavedAd};
use marketdeck_core::model::{AdFormat, Platform};
use marketdeck_core::{AppConfig, AppStore, Collection, SeedData, StoreEvent};
use tokio::sync::broadcast::error::TryRecvError;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
}

fn store() -> AppStore {
    AppStore::new(&AppConfig::default(), SeedData::relative_to(today()))
}

fn last_toast(store: &AppStore) -> (String, ToastKind) {
    let toast = store.toasts().pop().unwrap();
    (toast.title, toast.kind)
}

fn rule(id: &str) -> AutomationRule {
    AutomationRule {
        id: id.to_string(),
        name: "Cap CPM".to_string(),
        status: RuleStatus::Active,
        trigger_metric: TriggerMetric::Cpm,
        trigger_operator: TriggerOperator::GreaterThan,
        trigger_value: 20.0,
        timeframe: "Last 24 hours".to_string(),
        action: RuleAction::Notify,
        action_value: None,
        last_run: None,
    }
}

fn saved_ad(id: &str) -> SavedAd {
    SavedAd {
        id: id.to_string(),
        content: GeneratedContent {
            headline: "Run Further".to_string(),
            body: "Light shoes for long trails.".to_string(),
            call_to_action: "Shop Now".to_string(),
            ..GeneratedContent::default()
        },
        created_at: "2026-03-10".to_string(),
        platform: Platform::Instagram,
        format: AdFormat::Reel,
        product_name: "Trail Shoes".to_string(),
        status: AdReviewStatus::Draft,
        notes: None,
    }
}

#[test]
fn add_campaign_prepends_a_single_draft() {
    let mut store = store();
    let before = store.campaigns().len();

    store.add_campaign(Campaign::draft("c99", "Test", Platform::Facebook, today(), today()));

    assert_eq!(store.campaigns().len(), before + 1);
    let matching: Vec<_> = store.campaigns().iter().filter(|c| c.id == "c99").collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].status, CampaignStatus::Draft);
    assert_eq!(matching[0].spend, 0.0);
    assert_eq!(matching[0].roas, 0.0);
    assert_eq!(store.campaigns().as_slice()[0].id, "c99");

    let toasts = store.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Success);
    assert_eq!(toasts[0].title, "Campaign Draft Created");
}

#[test]
fn update_campaign_changes_only_patched_fields() {
    let mut store = store();
    let original = store.campaigns().get("c1").unwrap().clone();

    assert!(store.update_campaign("c1", CampaignPatch::status(CampaignStatus::Paused)));

    let updated = store.campaigns().get("c1").unwrap();
    assert_eq!(updated.status, CampaignStatus::Paused);
    assert_eq!(
        Campaign {
            status: original.status,
            ..updated.clone()
        },
        original
    );
}

#[test]
fn delete_lead_removes_exactly_one() {
    let mut store = store();
    let before = store.leads().len();

    assert!(store.delete_lead("ld4"));

    assert_eq!(store.leads().len(), before - 1);
    assert!(!store.leads().contains("ld4"));
}

#[test]
fn unknown_ids_are_silent_noops() {
    let mut store = store();
    let campaigns = store.campaigns().clone();
    let leads = store.leads().clone();
    let mut events = store.subscribe();

    assert!(!store.update_campaign("missing", CampaignPatch::status(CampaignStatus::Active)));
    assert!(!store.delete_campaign("missing"));
    assert!(!store.delete_lead("missing"));
    assert!(!store.update_lead_status("missing", LeadStatus::Converted));
    assert_eq!(store.toggle_campaign_status("missing"), None);
    assert_eq!(store.duplicate_campaign("missing", today()), None);

    assert_eq!(store.campaigns(), &campaigns);
    assert_eq!(store.leads(), &leads);
    assert!(store.toasts().is_empty());
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
}

#[test]
fn mutations_publish_change_events() {
    let mut store = store();
    let mut events = store.subscribe();

    store.delete_lead("ld1");
    assert_eq!(events.try_recv(), Ok(StoreEvent::Changed(Collection::Leads)));

    store.update_brand_profile(BrandProfilePatch {
        tagline: Some("Built to last".to_string()),
        ..BrandProfilePatch::default()
    });
    assert_eq!(
        events.try_recv(),
        Ok(StoreEvent::Changed(Collection::BrandProfile))
    );
    assert_eq!(events.try_recv(), Ok(StoreEvent::Changed(Collection::Toasts)));
    assert_eq!(store.brand_profile().tagline, "Built to last");
    assert_eq!(store.brand_profile().name, "Sar Industries");
}

#[test]
fn toggle_flips_between_active_and_paused() {
    let mut store = store();

    assert_eq!(store.toggle_campaign_status("c1"), Some(CampaignStatus::Paused));
    assert_eq!(store.toggle_campaign_status("c1"), Some(CampaignStatus::Active));
    assert_eq!(store.toggle_campaign_status("c5"), Some(CampaignStatus::Active));
    assert_eq!(store.toasts().len(), 3);
}

#[test]
fn duplicate_creates_a_fresh_draft() {
    let mut store = store();
    let source = store.campaigns().get("c2").unwrap().clone();

    let new_id = store.duplicate_campaign("c2", today()).unwrap();

    let copy = store.campaigns().get(&new_id).unwrap();
    assert_ne!(new_id, "c2");
    assert_eq!(copy.name, format!("{} (Copy)", source.name));
    assert_eq!(copy.status, CampaignStatus::Draft);
    assert_eq!(copy.spend, 0.0);
    assert_eq!(copy.platform, source.platform);
    assert_eq!(copy.start_date, today());
    assert_eq!(copy.end_date, NaiveDate::from_ymd_opt(2026, 4, 9).unwrap());
}

#[test]
fn bulk_operations_report_actual_counts() {
    let mut store = store();

    let updated = store.bulk_set_campaign_status(&["c3", "c4", "nope"], CampaignStatus::Active);
    assert_eq!(updated, 2);
    assert_eq!(store.campaigns().get("c4").unwrap().status, CampaignStatus::Active);

    let removed = store.bulk_delete_campaigns(&["c1", "c2", "nope"]);
    assert_eq!(removed, 2);
    assert_eq!(store.campaigns().len(), 3);
    assert_eq!(store.toasts().len(), 2);
}

#[test]
fn lead_score_is_rounded_and_clamped() {
    let mut store = store();

    let score = LeadScore {
        score: 140.0,
        reason: "Enterprise domain".to_string(),
    };
    assert!(store.apply_lead_score("ld2", &score));
    assert_eq!(store.leads().get("ld2").unwrap().quality_score, 100);

    let score = LeadScore {
        score: 71.6,
        reason: "Engaged".to_string(),
    };
    assert!(store.apply_lead_score("ld2", &score));
    assert_eq!(store.leads().get("ld2").unwrap().quality_score, 72);
}

#[test]
fn notifications_can_be_marked_read() {
    let mut store = store();
    assert!(store.unread_notification_count() > 0);

    store.mark_all_notifications_read();

    assert_eq!(store.unread_notification_count(), 0);
}

#[test]
fn deleting_a_campaign_does_not_touch_leads() {
    let mut store = store();
    let leads = store.leads().clone();

    assert!(store.delete_campaign("c1"));

    assert_eq!(store.leads(), &leads);
}

#[test]
fn duplicate_near_calendar_end_saturates() {
    let mut store = store();

    let new_id = store.duplicate_campaign("c1", NaiveDate::MAX).unwrap();

    let copy = store.campaigns().get(&new_id).unwrap();
    assert_eq!(copy.start_date, NaiveDate::MAX);
    assert_eq!(copy.end_date, NaiveDate::MAX);
}

#[test]
fn rule_status_patch_shows_matching_toast() {
    let mut store = store();

    assert!(store.update_rule("r1", RulePatch::status(RuleStatus::Paused)));
    assert_eq!(store.rules().get("r1").unwrap().status, RuleStatus::Paused);
    assert_eq!(last_toast(&store), ("Rule Paused".to_string(), ToastKind::Warning));

    assert!(store.update_rule("r3", RulePatch::status(RuleStatus::Active)));
    assert_eq!(last_toast(&store), ("Rule Active".to_string(), ToastKind::Success));
    assert_eq!(store.toasts().len(), 2);
}

#[test]
fn rule_patch_without_status_is_silent() {
    let mut store = store();

    let patch = RulePatch {
        name: Some("Pause Big Losers".to_string()),
        ..RulePatch::default()
    };
    assert!(store.update_rule("r1", patch));

    let updated = store.rules().get("r1").unwrap();
    assert_eq!(updated.name, "Pause Big Losers");
    assert_eq!(updated.status, RuleStatus::Active);
    assert!(store.toasts().is_empty());
}

#[test]
fn add_business_appends_with_toast_and_notification() {
    let mut store = store();
    let businesses = store.businesses().len();
    let notifications = store.notifications().len();
    let unread = store.unread_notification_count();

    store.add_business(BusinessEntity {
        id: "b_new".to_string(),
        name: "Orbit Labs".to_string(),
        verified: false,
        ad_accounts: 1,
        pages: 0,
        page_entities: None,
        assigned_members: None,
        status: BusinessStatus::Pending,
        pixel_id: None,
        domain: None,
        spending_limit: None,
    });

    assert_eq!(store.businesses().len(), businesses + 1);
    assert_eq!(store.businesses().as_slice().last().unwrap().id, "b_new");
    assert_eq!(
        last_toast(&store),
        ("Business Connected".to_string(), ToastKind::Success)
    );
    assert_eq!(store.notifications().len(), notifications + 1);
    assert_eq!(store.unread_notification_count(), unread + 1);
    let feed = &store.notifications().as_slice()[0];
    assert_eq!(feed.title, "Portfolio Connected");
    assert_eq!(feed.kind, NotificationKind::Success);
    assert!(feed.message.contains("Orbit Labs"));
}

#[test]
fn add_order_depends_on_collection() {
    let mut store = store();

    store.add_audience(Audience {
        id: "a_new".to_string(),
        name: "Trail Runners".to_string(),
        size: 40_000,
        kind: AudienceType::Saved,
        platforms: vec![Platform::Instagram],
        match_rate: None,
        last_updated: "Just now".to_string(),
        description: None,
        interests: None,
    });
    assert_eq!(store.audiences().as_slice()[0].id, "a_new");
    assert_eq!(last_toast(&store), ("Audience Created".to_string(), ToastKind::Success));

    store.add_asset(Asset {
        id: "ast_new".to_string(),
        name: "Trail Hero".to_string(),
        kind: AssetKind::Image,
        url: "https://cdn.example.com/trail.png".to_string(),
        size: "1.2 MB".to_string(),
        dimensions: None,
        tags: vec!["Outdoor".to_string()],
        created_at: "2026-03-10".to_string(),
    });
    assert_eq!(store.assets().as_slice()[0].id, "ast_new");
    assert_eq!(last_toast(&store), ("Upload Complete".to_string(), ToastKind::Success));

    store.add_rule(rule("r_new"));
    assert_eq!(store.rules().as_slice()[0].id, "r_new");
    assert_eq!(last_toast(&store), ("Rule Active".to_string(), ToastKind::Success));

    store.add_team_member(TeamMember {
        id: "t_new".to_string(),
        name: "Priya Das".to_string(),
        email: "priya.d@nexus.com".to_string(),
        role: TeamRole::Analyst,
        status: MemberStatus::Pending,
        last_active: "-".to_string(),
    });
    assert_eq!(store.team_members().as_slice().last().unwrap().id, "t_new");
    assert_eq!(last_toast(&store), ("Invite Sent".to_string(), ToastKind::Success));
    assert_eq!(store.toasts().len(), 4);
}

#[test]
fn saved_ad_lifecycle() {
    let mut store = store();
    assert!(store.saved_ads().is_empty());

    store.save_ad(saved_ad("ad1"));
    store.save_ad(saved_ad("ad2"));
    assert_eq!(store.saved_ads().as_slice()[0].id, "ad2");
    assert_eq!(last_toast(&store), ("Creative Saved".to_string(), ToastKind::Success));

    let toasts = store.toasts().len();
    assert!(store.update_ad_status("ad1", AdReviewStatus::Approved));
    assert_eq!(
        store.saved_ads().get("ad1").unwrap().status,
        AdReviewStatus::Approved
    );
    assert_eq!(store.toasts().len(), toasts);

    assert!(store.delete_ad("ad1"));
    assert!(!store.saved_ads().contains("ad1"));
    assert_eq!(store.saved_ads().len(), 1);
    assert_eq!(last_toast(&store), ("Ad Deleted".to_string(), ToastKind::Info));
    assert!(!store.delete_ad("ad1"));
}

#[test]
fn user_profile_update_is_a_shallow_merge() {
    let mut store = store();
    let before = store.user_profile().clone();

    store.update_user_profile(UserProfilePatch {
        job_title: Some("Growth Lead".to_string()),
        ..UserProfilePatch::default()
    });

    let after = store.user_profile();
    assert_eq!(after.job_title.as_deref(), Some("Growth Lead"));
    assert_eq!(after.first_name, before.first_name);
    assert_eq!(after.email, before.email);
    assert_eq!(after.preferences, before.preferences);
    assert_eq!(last_toast(&store), ("Profile Updated".to_string(), ToastKind::Success));
}
