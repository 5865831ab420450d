//! Change notifications published by the store.

/// State slices a subscriber may need to re-read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Campaigns,
    Leads,
    Audiences,
    Businesses,
    TeamMembers,
    Assets,
    Rules,
    SavedAds,
    Notifications,
    Toasts,
    UserProfile,
    BrandProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// The named slice changed; subscribers re-read it from the store.
    Changed(Collection),
}

/// Broadcast buffer size; slow subscribers see `Lagged` and should re-read.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;
