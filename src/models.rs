use crate::duration::Duration;
use crate::offset::Offset;
use crate::uri::Uri;
use serde::{Deserialize, Serialize};

/// Represents a VAST document (Video Ad Serving Template)
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Vast {
    /// The VAST version (e.g., "2.0", "3.0", "4.0", etc.)
    pub version: String,

    /// The Ad elements, in ad-pod playback order
    pub ads: Vec<Ad>,
}

/// Represents an Ad within a VAST document.
///
/// A well-formed Ad carries exactly one of `inline` or `wrapper`;
/// the decoder does not enforce that, so callers deciding between
/// the two should treat anything else as malformed.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Ad {
    /// The ad ID
    pub id: Option<String>,

    /// The ad sequence number (for ad pods)
    pub sequence: Option<u32>,

    /// The in-line ad details
    pub inline: Option<InLine>,

    /// The wrapper ad details
    pub wrapper: Option<Wrapper>,
}

/// Represents an InLine ad, which carries the actual creative payload
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct InLine {
    /// The ad system that served this ad
    pub ad_system: Option<AdSystem>,

    /// The ad title
    pub ad_title: Option<String>,

    /// The description of the ad
    pub description: Option<String>,

    /// The survey URL
    pub survey: Option<Uri>,

    /// Error tracking URLs
    pub errors: Vec<Uri>,

    /// Impression tracking URLs
    pub impressions: Vec<Impression>,

    /// Creative elements
    pub creatives: Vec<Creative>,

    /// Vendor extensions
    pub extensions: Vec<Extension>,
}

/// Represents a Wrapper ad, which redirects to another VAST document
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Wrapper {
    /// The ad system that served this ad
    pub ad_system: Option<AdSystem>,

    /// The URL of the wrapped VAST document
    pub vast_ad_tag_uri: Uri,

    /// Error tracking URLs
    pub errors: Vec<Uri>,

    /// Impression tracking URLs
    pub impressions: Vec<Impression>,

    /// Creative elements; tracking and redirect data only, the media
    /// payload lives in the wrapped document
    pub creatives: Vec<CreativeWrapper>,

    /// Vendor extensions
    pub extensions: Vec<Extension>,
}

/// Represents the ad system information
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct AdSystem {
    /// The ad system version
    pub version: Option<String>,

    /// The ad system name
    pub name: String,
}

/// Represents an impression tracking URL
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Impression {
    /// The impression ID
    pub id: Option<String>,

    /// The impression tracking URL
    pub uri: Uri,
}

/// Represents a vendor extension. The inner markup is kept verbatim,
/// whitespace included, and is never re-parsed.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Extension {
    /// The extension type attribute
    pub kind: Option<String>,

    /// The raw inner markup
    pub content: String,
}

/// Represents a creative element within an InLine ad.
///
/// Some documents populate more than one role per creative ID, so
/// the roles are independent options rather than a single variant.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Creative {
    /// The creative ID
    pub id: Option<String>,

    /// The creative sequence number
    pub sequence: Option<u32>,

    /// The creative ad ID
    pub ad_id: Option<String>,

    /// The creative API framework
    pub api_framework: Option<String>,

    /// Linear ad details
    pub linear: Option<Linear>,

    /// CompanionAds details
    pub companion_ads: Option<CompanionAds>,

    /// NonLinearAds details
    pub non_linear_ads: Option<NonLinearAds>,
}

/// Represents a creative element within a Wrapper ad
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct CreativeWrapper {
    /// The creative ID
    pub id: Option<String>,

    /// The creative sequence number
    pub sequence: Option<u32>,

    /// The creative ad ID
    pub ad_id: Option<String>,

    /// Linear tracking details
    pub linear: Option<LinearWrapper>,

    /// CompanionAds details
    pub companion_ads: Option<CompanionAds>,

    /// NonLinearAds tracking details
    pub non_linear_ads: Option<NonLinearAdsWrapper>,
}

/// Represents a linear (in-stream video) creative
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Linear {
    /// Earliest point at which the player may offer a skip control
    pub skip_offset: Option<Offset>,

    /// The duration of the ad
    pub duration: Option<Duration>,

    /// Tracking events, in document order
    pub tracking_events: Vec<Tracking>,

    /// Video clicks
    pub video_clicks: Option<VideoClicks>,

    /// Media files
    pub media_files: Vec<MediaFile>,
}

/// Linear tracking data within a Wrapper ad; no media payload
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct LinearWrapper {
    /// Earliest point at which the player may offer a skip control
    pub skip_offset: Option<Offset>,

    /// Tracking events, in document order
    pub tracking_events: Vec<Tracking>,

    /// Video clicks
    pub video_clicks: Option<VideoClicks>,
}

/// Represents a tracking event.
///
/// Duplicate events are allowed; document order is the firing
/// priority when several fire at the same moment.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Tracking {
    /// The event name (e.g., "start", "midpoint", "complete", etc.)
    pub event: String,

    /// Timeline position for progress events
    pub offset: Option<Offset>,

    /// The tracking URL
    pub uri: Uri,
}

/// Represents video click-through and click-tracking URLs
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct VideoClicks {
    /// Click-through (landing page) URLs
    pub click_throughs: Vec<VideoClick>,

    /// Click tracking URLs
    pub click_trackings: Vec<VideoClick>,

    /// Custom click URLs
    pub custom_clicks: Vec<VideoClick>,
}

/// A single video click URL
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct VideoClick {
    /// The click ID
    pub id: Option<String>,

    /// The click URL
    pub uri: Uri,
}

/// Represents a media file
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct MediaFile {
    /// The media file ID
    pub id: Option<String>,

    /// The delivery method (progressive or streaming)
    pub delivery: Option<String>,

    /// The media file MIME type
    pub mime_type: Option<String>,

    /// The media file codec
    pub codec: Option<String>,

    /// The media file bitrate in Kbps
    pub bitrate: Option<u32>,

    /// The media file width in pixels
    pub width: Option<u32>,

    /// The media file height in pixels
    pub height: Option<u32>,

    /// Whether the media can scale to other dimensions
    pub scalable: Option<bool>,

    /// Whether the aspect ratio must be preserved when scaling
    pub maintain_aspect_ratio: Option<bool>,

    /// The media file API framework
    pub api_framework: Option<String>,

    /// The media file URL
    pub uri: Uri,
}

/// Represents non-linear (overlay) creatives
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct NonLinearAds {
    /// Tracking events, in document order
    pub tracking_events: Vec<Tracking>,

    /// The overlay descriptors
    pub non_linears: Vec<NonLinear>,
}

/// Non-linear tracking data within a Wrapper ad
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct NonLinearAdsWrapper {
    /// Tracking events, in document order
    pub tracking_events: Vec<Tracking>,
}

/// Represents a non-linear overlay
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct NonLinear {
    /// The overlay ID
    pub id: Option<String>,

    /// The overlay width in pixels
    pub width: u32,

    /// The overlay height in pixels
    pub height: u32,

    /// The expanded width in pixels
    pub expand_width: Option<u32>,

    /// The expanded height in pixels
    pub expand_height: Option<u32>,

    /// Whether the overlay can scale to other dimensions
    pub scalable: Option<bool>,

    /// Whether the aspect ratio must be preserved when scaling
    pub maintain_aspect_ratio: Option<bool>,

    /// Minimum suggested display time
    pub min_suggested_duration: Option<Duration>,

    /// The overlay API framework
    pub api_framework: Option<String>,

    /// The overlay image resource
    pub static_resource: Option<StaticResource>,

    /// The click-through URL
    pub click_through: Option<Uri>,
}

/// Represents companion ads shown alongside the main creative
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct CompanionAds {
    /// Display policy: "none", "any" or "all"; free text, not
    /// validated
    pub required: Option<String>,

    /// The companion banners
    pub companions: Vec<Companion>,
}

/// Represents a companion banner
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Companion {
    /// The companion ID
    pub id: Option<String>,

    /// The companion width in pixels
    pub width: u32,

    /// The companion height in pixels
    pub height: u32,

    /// Alternative text for the banner
    pub alt_text: Option<String>,

    /// The banner image resource
    pub static_resource: Option<StaticResource>,

    /// The click-through URL
    pub click_through: Option<Uri>,

    /// Companion tracking events
    pub tracking_events: Vec<Tracking>,
}

/// A static (image or flash) creative resource
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct StaticResource {
    /// The resource MIME type
    pub creative_type: Option<String>,

    /// The resource URL
    pub uri: Uri,
}
