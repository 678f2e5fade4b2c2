use crate::error::{Result, VastError};
use crate::models::*;
use crate::uri::Uri;
use log::debug;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::str::from_utf8;

/// Decode a VAST XML document into a [`Vast`] tree.
///
/// Unrecognized elements and attributes are ignored so that documents
/// from newer VAST versions still decode. Malformed XML and malformed
/// Duration/Offset text abort the decode with the first error.
pub fn parse_vast(xml: &str) -> Result<Vast> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut vast = Vast::default();
    let mut found_root = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"VAST" => {
                found_root = true;
                vast.version = parse_version(e)?;
                vast.ads = parse_ads(&mut reader)?;
                break;
            }
            Ok(Event::Empty(ref e)) if e.name().as_ref() == b"VAST" => {
                found_root = true;
                vast.version = parse_version(e)?;
                break;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(VastError::Xml(e)),
            _ => (),
        }
        buf.clear();
    }

    if !found_root {
        return Err(VastError::MissingField("VAST root element".to_string()));
    }

    Ok(vast)
}

/// Read the mandatory version attribute of the document root
fn parse_version(start: &BytesStart) -> Result<String> {
    for attr in start.attributes().flatten() {
        if attr.key.as_ref() == b"version" {
            if let Some(value) = attr_string(&attr) {
                if !value.is_empty() {
                    return Ok(value);
                }
            }
        }
    }
    Err(VastError::MissingField("VAST version".to_string()))
}

/// Parse the Ad elements under the document root
fn parse_ads(reader: &mut Reader<&[u8]>) -> Result<Vec<Ad>> {
    let mut ads = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"Ad" => {
                ads.push(parse_ad(reader, e)?);
            }
            Ok(Event::Start(ref e)) => skip_element(reader, e)?,
            Ok(Event::End(ref e)) if e.name().as_ref() == b"VAST" => break,
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(VastError::Xml(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(ads)
}

/// Parse a single Ad element
fn parse_ad(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<Ad> {
    let mut ad = Ad::default();

    for attr in start.attributes().flatten() {
        match attr.key.as_ref() {
            b"id" => ad.id = attr_string(&attr),
            b"sequence" => ad.sequence = attr_u32(&attr),
            _ => (),
        }
    }

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"InLine" => ad.inline = Some(parse_inline(reader)?),
                b"Wrapper" => ad.wrapper = Some(parse_wrapper(reader)?),
                _ => skip_element(reader, e)?,
            },
            Ok(Event::End(ref e)) if e.name().as_ref() == b"Ad" => break,
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(VastError::Xml(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(ad)
}

/// Parse an InLine element
fn parse_inline(reader: &mut Reader<&[u8]>) -> Result<InLine> {
    let mut inline = InLine::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"AdSystem" => inline.ad_system = Some(parse_ad_system(reader, e)?),
                b"AdTitle" => inline.ad_title = Some(read_text_element(reader)?),
                b"Description" => inline.description = Some(read_text_element(reader)?),
                b"Survey" => inline.survey = Some(read_uri_element(reader)?),
                b"Error" => inline.errors.push(read_uri_element(reader)?),
                b"Impression" => inline.impressions.push(parse_impression(reader, e)?),
                b"Creatives" => inline.creatives = parse_creatives(reader)?,
                b"Extensions" => inline.extensions = parse_extensions(reader)?,
                _ => skip_element(reader, e)?,
            },
            Ok(Event::End(ref e)) if e.name().as_ref() == b"InLine" => break,
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(VastError::Xml(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(inline)
}

/// Parse a Wrapper element
fn parse_wrapper(reader: &mut Reader<&[u8]>) -> Result<Wrapper> {
    let mut wrapper = Wrapper::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"AdSystem" => wrapper.ad_system = Some(parse_ad_system(reader, e)?),
                b"VASTAdTagURI" => wrapper.vast_ad_tag_uri = read_uri_element(reader)?,
                b"Error" => wrapper.errors.push(read_uri_element(reader)?),
                b"Impression" => wrapper.impressions.push(parse_impression(reader, e)?),
                b"Creatives" => wrapper.creatives = parse_creative_wrappers(reader)?,
                b"Extensions" => wrapper.extensions = parse_extensions(reader)?,
                _ => skip_element(reader, e)?,
            },
            Ok(Event::End(ref e)) if e.name().as_ref() == b"Wrapper" => break,
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(VastError::Xml(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(wrapper)
}

/// Parse an AdSystem element
fn parse_ad_system(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<AdSystem> {
    let mut ad_system = AdSystem::default();

    for attr in start.attributes().flatten() {
        if attr.key.as_ref() == b"version" {
            ad_system.version = attr_string(&attr);
        }
    }

    ad_system.name = read_text_element(reader)?;

    Ok(ad_system)
}

/// Parse an Impression element
fn parse_impression(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<Impression> {
    let mut impression = Impression::default();

    for attr in start.attributes().flatten() {
        if attr.key.as_ref() == b"id" {
            impression.id = attr_string(&attr);
        }
    }

    impression.uri = read_uri_element(reader)?;

    Ok(impression)
}

/// Parse an Extensions element
fn parse_extensions(reader: &mut Reader<&[u8]>) -> Result<Vec<Extension>> {
    let mut extensions = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"Extension" => {
                extensions.push(parse_extension(reader, e)?);
            }
            Ok(Event::Start(ref e)) => skip_element(reader, e)?,
            Ok(Event::End(ref e)) if e.name().as_ref() == b"Extensions" => break,
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(VastError::Xml(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(extensions)
}

/// Parse an Extension element, keeping its inner markup untouched
fn parse_extension(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<Extension> {
    let mut extension = Extension::default();

    for attr in start.attributes().flatten() {
        if attr.key.as_ref() == b"type" {
            extension.kind = attr_string(&attr);
        }
    }

    // Vendor payloads are opaque; capture the raw subtree verbatim
    // instead of re-parsing it
    extension.content = reader.read_text(start.name())?.into_owned();

    Ok(extension)
}

/// Parse a Creatives element within an InLine ad
fn parse_creatives(reader: &mut Reader<&[u8]>) -> Result<Vec<Creative>> {
    let mut creatives = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"Creative" => {
                creatives.push(parse_creative(reader, e)?);
            }
            Ok(Event::Start(ref e)) => skip_element(reader, e)?,
            Ok(Event::End(ref e)) if e.name().as_ref() == b"Creatives" => break,
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(VastError::Xml(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(creatives)
}

/// Parse a Creative element within an InLine ad
fn parse_creative(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<Creative> {
    let mut creative = Creative::default();

    for attr in start.attributes().flatten() {
        match attr.key.as_ref() {
            b"id" => creative.id = attr_string(&attr),
            b"sequence" => creative.sequence = attr_u32(&attr),
            b"AdID" | b"adId" => creative.ad_id = attr_string(&attr),
            b"apiFramework" => creative.api_framework = attr_string(&attr),
            _ => (),
        }
    }

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"Linear" => creative.linear = Some(parse_linear(reader, e)?),
                b"CompanionAds" => {
                    creative.companion_ads = Some(parse_companion_ads(reader, e)?);
                }
                b"NonLinearAds" => {
                    creative.non_linear_ads = Some(parse_non_linear_ads(reader)?);
                }
                _ => skip_element(reader, e)?,
            },
            Ok(Event::End(ref e)) if e.name().as_ref() == b"Creative" => break,
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(VastError::Xml(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(creative)
}

/// Parse a Creatives element within a Wrapper ad
fn parse_creative_wrappers(reader: &mut Reader<&[u8]>) -> Result<Vec<CreativeWrapper>> {
    let mut creatives = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"Creative" => {
                creatives.push(parse_creative_wrapper(reader, e)?);
            }
            Ok(Event::Start(ref e)) => skip_element(reader, e)?,
            Ok(Event::End(ref e)) if e.name().as_ref() == b"Creatives" => break,
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(VastError::Xml(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(creatives)
}

/// Parse a Creative element within a Wrapper ad
fn parse_creative_wrapper(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart,
) -> Result<CreativeWrapper> {
    let mut creative = CreativeWrapper::default();

    for attr in start.attributes().flatten() {
        match attr.key.as_ref() {
            b"id" => creative.id = attr_string(&attr),
            b"sequence" => creative.sequence = attr_u32(&attr),
            b"AdID" | b"adId" => creative.ad_id = attr_string(&attr),
            _ => (),
        }
    }

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"Linear" => creative.linear = Some(parse_linear_wrapper(reader, e)?),
                b"CompanionAds" => {
                    creative.companion_ads = Some(parse_companion_ads(reader, e)?);
                }
                b"NonLinearAds" => {
                    creative.non_linear_ads = Some(parse_non_linear_ads_wrapper(reader)?);
                }
                _ => skip_element(reader, e)?,
            },
            Ok(Event::End(ref e)) if e.name().as_ref() == b"Creative" => break,
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(VastError::Xml(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(creative)
}

/// Parse a Linear element within an InLine creative
fn parse_linear(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<Linear> {
    let mut linear = Linear::default();

    for attr in start.attributes().flatten() {
        if attr.key.as_ref() == b"skipoffset" {
            if let Ok(value) = from_utf8(&attr.value) {
                linear.skip_offset = Some(value.parse()?);
            }
        }
    }

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"Duration" => {
                    linear.duration = Some(read_text_element(reader)?.parse()?);
                }
                b"TrackingEvents" => linear.tracking_events = parse_tracking_events(reader)?,
                b"VideoClicks" => linear.video_clicks = Some(parse_video_clicks(reader)?),
                b"MediaFiles" => linear.media_files = parse_media_files(reader)?,
                _ => skip_element(reader, e)?,
            },
            Ok(Event::End(ref e)) if e.name().as_ref() == b"Linear" => break,
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(VastError::Xml(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(linear)
}

/// Parse a Linear element within a Wrapper creative
fn parse_linear_wrapper(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<LinearWrapper> {
    let mut linear = LinearWrapper::default();

    for attr in start.attributes().flatten() {
        if attr.key.as_ref() == b"skipoffset" {
            if let Ok(value) = from_utf8(&attr.value) {
                linear.skip_offset = Some(value.parse()?);
            }
        }
    }

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"TrackingEvents" => linear.tracking_events = parse_tracking_events(reader)?,
                b"VideoClicks" => linear.video_clicks = Some(parse_video_clicks(reader)?),
                _ => skip_element(reader, e)?,
            },
            Ok(Event::End(ref e)) if e.name().as_ref() == b"Linear" => break,
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(VastError::Xml(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(linear)
}

/// Parse a TrackingEvents element
fn parse_tracking_events(reader: &mut Reader<&[u8]>) -> Result<Vec<Tracking>> {
    let mut tracking_events = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"Tracking" => {
                tracking_events.push(parse_tracking(reader, e)?);
            }
            Ok(Event::Start(ref e)) => skip_element(reader, e)?,
            Ok(Event::End(ref e)) if e.name().as_ref() == b"TrackingEvents" => break,
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(VastError::Xml(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(tracking_events)
}

/// Parse a Tracking element
fn parse_tracking(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<Tracking> {
    let mut tracking = Tracking::default();

    for attr in start.attributes().flatten() {
        match attr.key.as_ref() {
            b"event" => {
                if let Some(value) = attr_string(&attr) {
                    tracking.event = value;
                }
            }
            b"offset" => {
                if let Ok(value) = from_utf8(&attr.value) {
                    tracking.offset = Some(value.parse()?);
                }
            }
            _ => (),
        }
    }

    tracking.uri = read_uri_element(reader)?;

    Ok(tracking)
}

/// Parse a VideoClicks element
fn parse_video_clicks(reader: &mut Reader<&[u8]>) -> Result<VideoClicks> {
    let mut video_clicks = VideoClicks::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"ClickThrough" => {
                    video_clicks.click_throughs.push(parse_video_click(reader, e)?);
                }
                b"ClickTracking" => {
                    video_clicks.click_trackings.push(parse_video_click(reader, e)?);
                }
                b"CustomClick" => {
                    video_clicks.custom_clicks.push(parse_video_click(reader, e)?);
                }
                _ => skip_element(reader, e)?,
            },
            Ok(Event::End(ref e)) if e.name().as_ref() == b"VideoClicks" => break,
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(VastError::Xml(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(video_clicks)
}

/// Parse a single click URL element
fn parse_video_click(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<VideoClick> {
    let mut click = VideoClick::default();

    for attr in start.attributes().flatten() {
        if attr.key.as_ref() == b"id" {
            click.id = attr_string(&attr);
        }
    }

    click.uri = read_uri_element(reader)?;

    Ok(click)
}

/// Parse a MediaFiles element
fn parse_media_files(reader: &mut Reader<&[u8]>) -> Result<Vec<MediaFile>> {
    let mut media_files = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"MediaFile" => {
                media_files.push(parse_media_file(reader, e)?);
            }
            Ok(Event::Start(ref e)) => skip_element(reader, e)?,
            Ok(Event::End(ref e)) if e.name().as_ref() == b"MediaFiles" => break,
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(VastError::Xml(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(media_files)
}

/// Parse a MediaFile element
fn parse_media_file(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<MediaFile> {
    let mut media_file = MediaFile::default();

    for attr in start.attributes().flatten() {
        match attr.key.as_ref() {
            b"id" => media_file.id = attr_string(&attr),
            b"delivery" => media_file.delivery = attr_string(&attr),
            b"type" => media_file.mime_type = attr_string(&attr),
            b"codec" => media_file.codec = attr_string(&attr),
            b"bitrate" => media_file.bitrate = attr_u32(&attr),
            b"width" => media_file.width = attr_u32(&attr),
            b"height" => media_file.height = attr_u32(&attr),
            b"scalable" => media_file.scalable = attr_bool(&attr),
            b"maintainAspectRatio" => media_file.maintain_aspect_ratio = attr_bool(&attr),
            b"apiFramework" => media_file.api_framework = attr_string(&attr),
            _ => (),
        }
    }

    media_file.uri = read_uri_element(reader)?;

    Ok(media_file)
}

/// Parse a NonLinearAds element within an InLine creative
fn parse_non_linear_ads(reader: &mut Reader<&[u8]>) -> Result<NonLinearAds> {
    let mut non_linear_ads = NonLinearAds::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"TrackingEvents" => {
                    non_linear_ads.tracking_events = parse_tracking_events(reader)?;
                }
                b"NonLinear" => {
                    non_linear_ads.non_linears.push(parse_non_linear(reader, e)?);
                }
                _ => skip_element(reader, e)?,
            },
            Ok(Event::End(ref e)) if e.name().as_ref() == b"NonLinearAds" => break,
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(VastError::Xml(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(non_linear_ads)
}

/// Parse a NonLinearAds element within a Wrapper creative; only the
/// tracking events matter, the overlays live in the wrapped document
fn parse_non_linear_ads_wrapper(reader: &mut Reader<&[u8]>) -> Result<NonLinearAdsWrapper> {
    let mut non_linear_ads = NonLinearAdsWrapper::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"TrackingEvents" => {
                    non_linear_ads.tracking_events = parse_tracking_events(reader)?;
                }
                _ => skip_element(reader, e)?,
            },
            Ok(Event::End(ref e)) if e.name().as_ref() == b"NonLinearAds" => break,
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(VastError::Xml(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(non_linear_ads)
}

/// Parse a NonLinear overlay element
fn parse_non_linear(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<NonLinear> {
    let mut non_linear = NonLinear::default();

    for attr in start.attributes().flatten() {
        match attr.key.as_ref() {
            b"id" => non_linear.id = attr_string(&attr),
            b"width" => non_linear.width = attr_u32(&attr).unwrap_or_default(),
            b"height" => non_linear.height = attr_u32(&attr).unwrap_or_default(),
            b"expandedWidth" => non_linear.expand_width = attr_u32(&attr),
            b"expandedHeight" => non_linear.expand_height = attr_u32(&attr),
            b"scalable" => non_linear.scalable = attr_bool(&attr),
            b"maintainAspectRatio" => non_linear.maintain_aspect_ratio = attr_bool(&attr),
            b"minSuggestedDuration" => {
                if let Ok(value) = from_utf8(&attr.value) {
                    non_linear.min_suggested_duration = Some(value.parse()?);
                }
            }
            b"apiFramework" => non_linear.api_framework = attr_string(&attr),
            _ => (),
        }
    }

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"StaticResource" => {
                    non_linear.static_resource = Some(parse_static_resource(reader, e)?);
                }
                b"NonLinearClickThrough" => {
                    non_linear.click_through = Some(read_uri_element(reader)?);
                }
                _ => skip_element(reader, e)?,
            },
            Ok(Event::End(ref e)) if e.name().as_ref() == b"NonLinear" => break,
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(VastError::Xml(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(non_linear)
}

/// Parse a CompanionAds element
fn parse_companion_ads(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<CompanionAds> {
    let mut companion_ads = CompanionAds::default();

    for attr in start.attributes().flatten() {
        if attr.key.as_ref() == b"required" {
            companion_ads.required = attr_string(&attr);
        }
    }

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"Companion" => {
                companion_ads.companions.push(parse_companion(reader, e)?);
            }
            Ok(Event::Start(ref e)) => skip_element(reader, e)?,
            Ok(Event::End(ref e)) if e.name().as_ref() == b"CompanionAds" => break,
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(VastError::Xml(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(companion_ads)
}

/// Parse a Companion banner element
fn parse_companion(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<Companion> {
    let mut companion = Companion::default();

    for attr in start.attributes().flatten() {
        match attr.key.as_ref() {
            b"id" => companion.id = attr_string(&attr),
            b"width" => companion.width = attr_u32(&attr).unwrap_or_default(),
            b"height" => companion.height = attr_u32(&attr).unwrap_or_default(),
            _ => (),
        }
    }

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"StaticResource" => {
                    companion.static_resource = Some(parse_static_resource(reader, e)?);
                }
                b"CompanionClickThrough" => {
                    companion.click_through = Some(read_uri_element(reader)?);
                }
                b"AltText" => companion.alt_text = Some(read_text_element(reader)?),
                b"TrackingEvents" => companion.tracking_events = parse_tracking_events(reader)?,
                _ => skip_element(reader, e)?,
            },
            Ok(Event::End(ref e)) if e.name().as_ref() == b"Companion" => break,
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(VastError::Xml(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(companion)
}

/// Parse a StaticResource element
fn parse_static_resource(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart,
) -> Result<StaticResource> {
    let mut resource = StaticResource::default();

    for attr in start.attributes().flatten() {
        if attr.key.as_ref() == b"creativeType" {
            resource.creative_type = attr_string(&attr);
        }
    }

    resource.uri = read_uri_element(reader)?;

    Ok(resource)
}

/// Read the text content of the current element
fn read_text_element(reader: &mut Reader<&[u8]>) -> Result<String> {
    let mut text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(e)) => text.push_str(&e.unescape()?),
            Ok(Event::CData(e)) => {
                if let Ok(value) = from_utf8(&e) {
                    text.push_str(value);
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => return Err(unexpected_eof()),
            Err(e) => return Err(VastError::Xml(e)),
            _ => (),
        }
        buf.clear();
    }

    Ok(text)
}

/// Read the text content of the current element as a trimmed URI
fn read_uri_element(reader: &mut Reader<&[u8]>) -> Result<Uri> {
    Ok(Uri::new(read_text_element(reader)?))
}

/// Skip an unrecognized element and its whole subtree
fn skip_element(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<()> {
    debug!(
        "ignoring unrecognized element: {}",
        String::from_utf8_lossy(start.name().as_ref())
    );
    let end = start.to_end().into_owned();
    let mut buf = Vec::new();
    reader.read_to_end_into(end.name(), &mut buf)?;
    Ok(())
}

fn unexpected_eof() -> VastError {
    VastError::Xml(quick_xml::Error::UnexpectedEof("VAST".to_string()))
}

fn attr_string(attr: &Attribute) -> Option<String> {
    from_utf8(&attr.value).ok().map(str::to_string)
}

fn attr_u32(attr: &Attribute) -> Option<u32> {
    from_utf8(&attr.value).ok()?.parse().ok()
}

fn attr_bool(attr: &Attribute) -> Option<bool> {
    let value = from_utf8(&attr.value).ok()?;
    Some(value.eq_ignore_ascii_case("true"))
}
