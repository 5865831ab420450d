//! In-memory application store.
//!
//! # Responsibility
//! - CRUD over the campaign, lead, audience, business, team, asset, rule,
//!   saved-ad and notification collections.
//! - Shallow-merge updates of the user and brand profiles.
//! - Toast side effects and change events for every visible mutation.
//!
//! # Invariants
//! - `add_*` never validates id uniqueness.
//! - `update_*`/`delete_*` on an absent id change nothing, show no toast and
//!   publish no event.
//! - Deleting a record never cascades into other collections.

use crate::config::AppConfig;
use crate::gateway::types::LeadScore;
use crate::model::asset::{Asset, AssetPatch};
use crate::model::audience::{Audience, AudiencePatch};
use crate::model::business::{BusinessEntity, BusinessPatch, TeamMember, TeamMemberPatch};
use crate::model::campaign::{Campaign, CampaignPatch, CampaignStatus};
use crate::model::lead::{Lead, LeadPatch, LeadStatus, MAX_QUALITY_SCORE};
use crate::model::notification::{
    Notification, NotificationKind, Toast, ToastDuration, ToastId, ToastRequest,
};
use crate::model::profile::{BrandProfile, BrandProfilePatch, UserProfile, UserProfilePatch};
use crate::model::rule::{AutomationRule, RulePatch, RuleStatus};
use crate::model::saved_ad::{AdReviewStatus, SavedAd};
use crate::repo::EntityCollection;
use crate::seed::SeedData;
use crate::service::events::{Collection, StoreEvent, EVENT_CHANNEL_CAPACITY};
use crate::toast::ToastCenter;
use chrono::{NaiveDate, TimeDelta};
use log::{debug, info};
use tokio::sync::broadcast;
use uuid::Uuid;

const STATUS_TOGGLE_TOAST_MS: u64 = 2_000;
const DUPLICATE_RUN_DAYS: i64 = 30;

/// Single source of truth for one dashboard session.
pub struct AppStore {
    campaigns: EntityCollection<Campaign>,
    leads: EntityCollection<Lead>,
    audiences: EntityCollection<Audience>,
    businesses: EntityCollection<BusinessEntity>,
    team_members: EntityCollection<TeamMember>,
    assets: EntityCollection<Asset>,
    rules: EntityCollection<AutomationRule>,
    saved_ads: EntityCollection<SavedAd>,
    notifications: EntityCollection<Notification>,
    user_profile: UserProfile,
    brand_profile: BrandProfile,
    toasts: ToastCenter,
    events: broadcast::Sender<StoreEvent>,
}

impl AppStore {
    pub fn new(config: &AppConfig, seed: SeedData) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let toasts = ToastCenter::new(config.toast.default_duration(), events.clone());
        info!(
            "event=store_init module=store status=ok campaigns={} leads={} audiences={} businesses={}",
            seed.campaigns.len(),
            seed.leads.len(),
            seed.audiences.len(),
            seed.businesses.len()
        );
        Self {
            campaigns: seed.campaigns.into(),
            leads: seed.leads.into(),
            audiences: seed.audiences.into(),
            businesses: seed.businesses.into(),
            team_members: seed.team_members.into(),
            assets: seed.assets.into(),
            rules: seed.rules.into(),
            saved_ads: seed.saved_ads.into(),
            notifications: seed.notifications.into(),
            user_profile: seed.user_profile,
            brand_profile: seed.brand_profile,
            toasts,
            events,
        }
    }

    /// Store seeded with the static demo data, dated from today.
    pub fn seeded(config: &AppConfig) -> Self {
        Self::new(config, SeedData::current())
    }

    /// Receives one [`StoreEvent`] per state change from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    fn publish(&self, collection: Collection) {
        let _ = self.events.send(StoreEvent::Changed(collection));
    }

    fn noop(&self, op: &str, id: &str) {
        debug!("event={op} module=store status=noop reason=not_found id={id}");
    }

    // Campaigns

    pub fn campaigns(&self) -> &EntityCollection<Campaign> {
        &self.campaigns
    }

    pub fn add_campaign(&mut self, campaign: Campaign) {
        info!("event=campaign_add module=store status=ok id={}", campaign.id);
        let toast = ToastRequest::success("Campaign Draft Created")
            .with_message(format!("{} has been created.", campaign.name));
        self.campaigns.prepend(campaign);
        self.publish(Collection::Campaigns);
        self.toasts.show(toast);
    }

    pub fn update_campaign(&mut self, id: &str, patch: CampaignPatch) -> bool {
        if !self.campaigns.update_with(id, |campaign| patch.apply(campaign)) {
            self.noop("campaign_update", id);
            return false;
        }
        info!("event=campaign_update module=store status=ok id={id}");
        self.publish(Collection::Campaigns);
        true
    }

    pub fn delete_campaign(&mut self, id: &str) -> bool {
        if self.campaigns.remove(id).is_none() {
            self.noop("campaign_delete", id);
            return false;
        }
        info!("event=campaign_delete module=store status=ok id={id}");
        self.publish(Collection::Campaigns);
        self.toasts.show(ToastRequest::info("Campaign Deleted"));
        true
    }

    /// Active becomes Paused; every other status becomes Active.
    pub fn toggle_campaign_status(&mut self, id: &str) -> Option<CampaignStatus> {
        let current = self.campaigns.get(id)?.status;
        let next = if current == CampaignStatus::Active {
            CampaignStatus::Paused
        } else {
            CampaignStatus::Active
        };
        self.update_campaign(id, CampaignPatch::status(next));
        let toast = if next == CampaignStatus::Active {
            ToastRequest::success(format!("Campaign {next}"))
        } else {
            ToastRequest::info(format!("Campaign {next}"))
        };
        self.toasts
            .show(toast.with_duration(ToastDuration::Millis(STATUS_TOGGLE_TOAST_MS)));
        Some(next)
    }

    /// Adds a draft copy running for 30 days from `today`; returns the new id.
    pub fn duplicate_campaign(&mut self, id: &str, today: NaiveDate) -> Option<String> {
        let Some(source) = self.campaigns.get(id) else {
            self.noop("campaign_duplicate", id);
            return None;
        };
        let copy = Campaign {
            id: format!("c_{}", Uuid::new_v4().simple()),
            name: format!("{} (Copy)", source.name),
            status: CampaignStatus::Draft,
            spend: 0.0,
            reach: 0,
            start_date: today,
            end_date: today
                .checked_add_signed(TimeDelta::days(DUPLICATE_RUN_DAYS))
                .unwrap_or(NaiveDate::MAX),
            ..source.clone()
        };
        let new_id = copy.id.clone();
        self.add_campaign(copy);
        Some(new_id)
    }

    /// Deletes every listed campaign and shows one summary toast.
    pub fn bulk_delete_campaigns<S: AsRef<str>>(&mut self, ids: &[S]) -> usize {
        let removed = ids
            .iter()
            .filter(|id| self.campaigns.remove(id.as_ref()).is_some())
            .count();
        info!(
            "event=campaign_bulk_delete module=store status=ok requested={} removed={removed}",
            ids.len()
        );
        if removed > 0 {
            self.publish(Collection::Campaigns);
        }
        self.toasts.show(
            ToastRequest::success("Bulk Delete Complete")
                .with_message(format!("Removed {removed} campaigns.")),
        );
        removed
    }

    /// Sets one status on every listed campaign and shows one summary toast.
    pub fn bulk_set_campaign_status<S: AsRef<str>>(
        &mut self,
        ids: &[S],
        status: CampaignStatus,
    ) -> usize {
        let updated = ids
            .iter()
            .filter(|id| {
                self.campaigns
                    .update_with(id.as_ref(), |campaign| campaign.status = status)
            })
            .count();
        info!(
            "event=campaign_bulk_status module=store status=ok target={status} updated={updated}"
        );
        if updated > 0 {
            self.publish(Collection::Campaigns);
        }
        self.toasts.show(
            ToastRequest::success("Status Updated")
                .with_message(format!("{status} {updated} campaigns.")),
        );
        updated
    }

    // Leads

    pub fn leads(&self) -> &EntityCollection<Lead> {
        &self.leads
    }

    pub fn add_lead(&mut self, lead: Lead) {
        info!("event=lead_add module=store status=ok id={}", lead.id);
        self.leads.prepend(lead);
        self.publish(Collection::Leads);
    }

    pub fn update_lead(&mut self, id: &str, patch: LeadPatch) -> bool {
        if !self.leads.update_with(id, |lead| patch.apply(lead)) {
            self.noop("lead_update", id);
            return false;
        }
        info!("event=lead_update module=store status=ok id={id}");
        self.publish(Collection::Leads);
        true
    }

    pub fn update_lead_status(&mut self, id: &str, status: LeadStatus) -> bool {
        if !self.leads.update_with(id, |lead| lead.status = status) {
            self.noop("lead_status", id);
            return false;
        }
        info!("event=lead_status module=store status=ok id={id} lead_status={status}");
        self.publish(Collection::Leads);
        self.toasts.show(
            ToastRequest::info("Lead Status Updated").with_message(format!("Moved to {status}")),
        );
        true
    }

    pub fn delete_lead(&mut self, id: &str) -> bool {
        if self.leads.remove(id).is_none() {
            self.noop("lead_delete", id);
            return false;
        }
        info!("event=lead_delete module=store status=ok id={id}");
        self.publish(Collection::Leads);
        true
    }

    /// Stores a gateway score as the lead's quality score, clamped to 0..=100.
    pub fn apply_lead_score(&mut self, id: &str, score: &LeadScore) -> bool {
        let quality = score.score.round().clamp(0.0, f64::from(MAX_QUALITY_SCORE)) as u8;
        if !self.leads.update_with(id, |lead| lead.quality_score = quality) {
            self.noop("lead_score", id);
            return false;
        }
        info!("event=lead_score module=store status=ok id={id} score={quality}");
        self.publish(Collection::Leads);
        true
    }

    // Audiences

    pub fn audiences(&self) -> &EntityCollection<Audience> {
        &self.audiences
    }

    pub fn add_audience(&mut self, audience: Audience) {
        info!("event=audience_add module=store status=ok id={}", audience.id);
        let toast = ToastRequest::success("Audience Created")
            .with_message(format!("{} is ready for targeting.", audience.name));
        self.audiences.prepend(audience);
        self.publish(Collection::Audiences);
        self.toasts.show(toast);
    }

    pub fn update_audience(&mut self, id: &str, patch: AudiencePatch) -> bool {
        if !self.audiences.update_with(id, |audience| patch.apply(audience)) {
            self.noop("audience_update", id);
            return false;
        }
        self.publish(Collection::Audiences);
        true
    }

    pub fn delete_audience(&mut self, id: &str) -> bool {
        if self.audiences.remove(id).is_none() {
            self.noop("audience_delete", id);
            return false;
        }
        info!("event=audience_delete module=store status=ok id={id}");
        self.publish(Collection::Audiences);
        true
    }

    // Businesses

    pub fn businesses(&self) -> &EntityCollection<BusinessEntity> {
        &self.businesses
    }

    /// Appends a portfolio and records both a toast and a feed notification.
    pub fn add_business(&mut self, business: BusinessEntity) {
        info!("event=business_add module=store status=ok id={}", business.id);
        let toast = ToastRequest::success("Business Connected")
            .with_message(format!("{} has been imported successfully.", business.name));
        let notification = Notification::just_now(
            NotificationKind::Success,
            "Portfolio Connected",
            format!("{} has been successfully added.", business.name),
        );
        self.businesses.append(business);
        self.publish(Collection::Businesses);
        self.toasts.show(toast);
        self.add_notification(notification);
    }

    pub fn update_business(&mut self, id: &str, patch: BusinessPatch) -> bool {
        if !self.businesses.update_with(id, |business| patch.apply(business)) {
            self.noop("business_update", id);
            return false;
        }
        self.publish(Collection::Businesses);
        true
    }

    pub fn delete_business(&mut self, id: &str) -> bool {
        if self.businesses.remove(id).is_none() {
            self.noop("business_delete", id);
            return false;
        }
        info!("event=business_delete module=store status=ok id={id}");
        self.publish(Collection::Businesses);
        true
    }

    // Team

    pub fn team_members(&self) -> &EntityCollection<TeamMember> {
        &self.team_members
    }

    pub fn add_team_member(&mut self, member: TeamMember) {
        info!("event=team_invite module=store status=ok id={}", member.id);
        let toast = ToastRequest::success("Invite Sent")
            .with_message(format!("Invitation sent to {}.", member.email));
        self.team_members.append(member);
        self.publish(Collection::TeamMembers);
        self.toasts.show(toast);
    }

    pub fn update_team_member(&mut self, id: &str, patch: TeamMemberPatch) -> bool {
        if !self.team_members.update_with(id, |member| patch.apply(member)) {
            self.noop("team_update", id);
            return false;
        }
        self.publish(Collection::TeamMembers);
        true
    }

    pub fn delete_team_member(&mut self, id: &str) -> bool {
        if self.team_members.remove(id).is_none() {
            self.noop("team_delete", id);
            return false;
        }
        info!("event=team_delete module=store status=ok id={id}");
        self.publish(Collection::TeamMembers);
        true
    }

    // Assets

    pub fn assets(&self) -> &EntityCollection<Asset> {
        &self.assets
    }

    pub fn add_asset(&mut self, asset: Asset) {
        info!("event=asset_add module=store status=ok id={}", asset.id);
        let toast = ToastRequest::success("Upload Complete")
            .with_message(format!("{} added to assets.", asset.name));
        self.assets.prepend(asset);
        self.publish(Collection::Assets);
        self.toasts.show(toast);
    }

    pub fn update_asset(&mut self, id: &str, patch: AssetPatch) -> bool {
        if !self.assets.update_with(id, |asset| patch.apply(asset)) {
            self.noop("asset_update", id);
            return false;
        }
        self.publish(Collection::Assets);
        true
    }

    pub fn delete_asset(&mut self, id: &str) -> bool {
        if self.assets.remove(id).is_none() {
            self.noop("asset_delete", id);
            return false;
        }
        info!("event=asset_delete module=store status=ok id={id}");
        self.publish(Collection::Assets);
        self.toasts.show(ToastRequest::info("Asset Removed"));
        true
    }

    // Automation rules

    pub fn rules(&self) -> &EntityCollection<AutomationRule> {
        &self.rules
    }

    pub fn add_rule(&mut self, rule: AutomationRule) {
        info!("event=rule_add module=store status=ok id={}", rule.id);
        let toast = ToastRequest::success("Rule Active")
            .with_message(format!("Automation \"{}\" is now running.", rule.name));
        self.rules.prepend(rule);
        self.publish(Collection::Rules);
        self.toasts.show(toast);
    }

    /// Shows a status toast only when the patch changes `status`.
    pub fn update_rule(&mut self, id: &str, patch: RulePatch) -> bool {
        let status = patch.status;
        if !self.rules.update_with(id, |rule| patch.apply(rule)) {
            self.noop("rule_update", id);
            return false;
        }
        info!("event=rule_update module=store status=ok id={id}");
        self.publish(Collection::Rules);
        if let Some(status) = status {
            let title = format!("Rule {status}");
            self.toasts.show(match status {
                RuleStatus::Active => ToastRequest::success(title),
                RuleStatus::Paused => ToastRequest::warning(title),
            });
        }
        true
    }

    pub fn delete_rule(&mut self, id: &str) -> bool {
        if self.rules.remove(id).is_none() {
            self.noop("rule_delete", id);
            return false;
        }
        info!("event=rule_delete module=store status=ok id={id}");
        self.publish(Collection::Rules);
        self.toasts.show(ToastRequest::info("Rule Deleted"));
        true
    }

    // Saved ads

    pub fn saved_ads(&self) -> &EntityCollection<SavedAd> {
        &self.saved_ads
    }

    pub fn save_ad(&mut self, ad: SavedAd) {
        info!("event=ad_save module=store status=ok id={}", ad.id);
        self.saved_ads.prepend(ad);
        self.publish(Collection::SavedAds);
        self.toasts.show(
            ToastRequest::success("Creative Saved")
                .with_message("Asset saved to library successfully."),
        );
    }

    pub fn update_ad_status(&mut self, id: &str, status: AdReviewStatus) -> bool {
        if !self.saved_ads.update_with(id, |ad| ad.status = status) {
            self.noop("ad_status", id);
            return false;
        }
        self.publish(Collection::SavedAds);
        true
    }

    pub fn delete_ad(&mut self, id: &str) -> bool {
        if self.saved_ads.remove(id).is_none() {
            self.noop("ad_delete", id);
            return false;
        }
        info!("event=ad_delete module=store status=ok id={id}");
        self.publish(Collection::SavedAds);
        self.toasts.show(ToastRequest::info("Ad Deleted"));
        true
    }

    // Notifications

    pub fn notifications(&self) -> &EntityCollection<Notification> {
        &self.notifications
    }

    pub fn add_notification(&mut self, notification: Notification) {
        self.notifications.prepend(notification);
        self.publish(Collection::Notifications);
    }

    pub fn mark_all_notifications_read(&mut self) {
        self.notifications
            .update_all(|notification| notification.read = true);
        self.publish(Collection::Notifications);
    }

    pub fn unread_notification_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    // Profiles

    pub fn user_profile(&self) -> &UserProfile {
        &self.user_profile
    }

    pub fn update_user_profile(&mut self, patch: UserProfilePatch) {
        patch.apply(&mut self.user_profile);
        info!("event=user_profile_update module=store status=ok");
        self.publish(Collection::UserProfile);
        self.toasts.show(ToastRequest::success("Profile Updated"));
    }

    pub fn brand_profile(&self) -> &BrandProfile {
        &self.brand_profile
    }

    pub fn update_brand_profile(&mut self, patch: BrandProfilePatch) {
        patch.apply(&mut self.brand_profile);
        info!("event=brand_profile_update module=store status=ok");
        self.publish(Collection::BrandProfile);
        self.toasts.show(ToastRequest::success("Brand Identity Saved"));
    }

    // Toasts

    pub fn show_toast(&self, request: ToastRequest) -> ToastId {
        self.toasts.show(request)
    }

    pub fn remove_toast(&self, id: ToastId) -> bool {
        self.toasts.dismiss(id)
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.snapshot()
    }

    pub fn toast_center(&self) -> &ToastCenter {
        &self.toasts
    }
}
