use vast_codec::{
    parse_vast, Ad, AdSystem, Companion, CompanionAds, Creative, CreativeWrapper, Duration,
    Extension, Impression, InLine, Linear, LinearWrapper, MediaFile, NonLinear, NonLinearAds,
    NonLinearAdsWrapper, StaticResource, Tracking, Uri, Vast, VideoClick, VideoClicks, Wrapper,
};

fn uri(text: &str) -> Uri {
    Uri::new(text)
}

fn s(text: &str) -> Option<String> {
    Some(text.to_string())
}

fn tracking(event: &str, uri_text: &str) -> Tracking {
    Tracking {
        event: event.to_string(),
        offset: None,
        uri: uri(uri_text),
    }
}

#[test]
fn inline_linear() {
    let vast = parse_vast(include_str!("fixtures/vast_inline_linear.xml")).unwrap();

    let expected = Vast {
        version: "2.0".to_string(),
        ads: vec![Ad {
            id: s("601364"),
            inline: Some(InLine {
                ad_system: Some(AdSystem {
                    version: s("1.0"),
                    name: "Acudeo Compatible".to_string(),
                }),
                ad_title: s("VAST 2.0 Instream Test 1"),
                description: s("VAST 2.0 Instream Test 1"),
                errors: vec![uri("http://myErrorURL/error"), uri("http://myErrorURL/error2")],
                impressions: vec![
                    Impression {
                        id: None,
                        uri: uri("http://myTrackingURL/impression"),
                    },
                    Impression {
                        id: s("foo"),
                        uri: uri("http://myTrackingURL/impression2"),
                    },
                ],
                creatives: vec![
                    Creative {
                        ad_id: s("601364"),
                        linear: Some(Linear {
                            duration: Some(Duration::from_secs(30)),
                            tracking_events: vec![
                                tracking("creativeView", "http://myTrackingURL/creativeView"),
                                tracking("start", "http://myTrackingURL/start"),
                                tracking("midpoint", "http://myTrackingURL/midpoint"),
                                tracking("firstQuartile", "http://myTrackingURL/firstQuartile"),
                                tracking("thirdQuartile", "http://myTrackingURL/thirdQuartile"),
                                tracking("complete", "http://myTrackingURL/complete"),
                            ],
                            video_clicks: Some(VideoClicks {
                                click_throughs: vec![VideoClick {
                                    id: None,
                                    uri: uri("http://www.tremormedia.com"),
                                }],
                                click_trackings: vec![VideoClick {
                                    id: None,
                                    uri: uri("http://myTrackingURL/click"),
                                }],
                                custom_clicks: vec![],
                            }),
                            media_files: vec![MediaFile {
                                delivery: s("progressive"),
                                mime_type: s("video/x-flv"),
                                bitrate: Some(500),
                                width: Some(400),
                                height: Some(300),
                                scalable: Some(true),
                                maintain_aspect_ratio: Some(true),
                                uri: uri(
                                    "http://cdnp.tremormedia.com/video/acudeo/Carrot_400x300_500kb.flv",
                                ),
                                ..Default::default()
                            }],
                            ..Default::default()
                        }),
                        ..Default::default()
                    },
                    Creative {
                        ad_id: s("601364-Companion"),
                        companion_ads: Some(CompanionAds {
                            required: s("all"),
                            companions: vec![
                                Companion {
                                    width: 300,
                                    height: 250,
                                    static_resource: Some(StaticResource {
                                        creative_type: s("image/jpeg"),
                                        uri: uri(
                                            "http://demo.tremormedia.com/proddev/vast/Blistex1.jpg",
                                        ),
                                    }),
                                    click_through: Some(uri("http://www.tremormedia.com")),
                                    tracking_events: vec![tracking(
                                        "creativeView",
                                        "http://myTrackingURL/firstCompanionCreativeView",
                                    )],
                                    ..Default::default()
                                },
                                Companion {
                                    width: 728,
                                    height: 90,
                                    static_resource: Some(StaticResource {
                                        creative_type: s("image/jpeg"),
                                        uri: uri(
                                            "http://demo.tremormedia.com/proddev/vast/728x90_banner1.jpg",
                                        ),
                                    }),
                                    click_through: Some(uri("http://www.tremormedia.com")),
                                    ..Default::default()
                                },
                            ],
                        }),
                        ..Default::default()
                    },
                ],
                extensions: vec![Extension {
                    kind: s("geo"),
                    content: "\n          <Geo>\n            <Country>US</Country>\n            <State>CA</State>\n          </Geo>\n        ".to_string(),
                }],
                ..Default::default()
            }),
            ..Default::default()
        }],
    };

    assert_eq!(vast, expected);
}

#[test]
fn extension_payload_is_preserved_verbatim() {
    let vast = parse_vast(include_str!("fixtures/vast_inline_linear.xml")).unwrap();
    let inline = vast.ads[0].inline.as_ref().unwrap();
    let geo = &inline.extensions[0];

    assert_eq!(geo.kind.as_deref(), Some("geo"));
    // the payload keeps its original indentation, untouched
    assert!(geo.content.starts_with("\n          <Geo>"));
    assert!(geo.content.ends_with("</Geo>\n        "));
    assert!(geo.content.contains("<Country>US</Country>"));
}

#[test]
fn inline_nonlinear() {
    let vast = parse_vast(include_str!("fixtures/vast_inline_nonlinear.xml")).unwrap();

    let expected = Vast {
        version: "2.0".to_string(),
        ads: vec![Ad {
            id: s("602678"),
            inline: Some(InLine {
                ad_system: Some(AdSystem {
                    version: None,
                    name: "Acudeo Compatible".to_string(),
                }),
                ad_title: s("NonLinear Test Campaign 1"),
                description: s("NonLinear Test Campaign 1"),
                survey: Some(uri("http://mySurveyURL/survey")),
                errors: vec![uri("http://myErrorURL/error")],
                impressions: vec![Impression {
                    id: None,
                    uri: uri("http://myTrackingURL/impression"),
                }],
                creatives: vec![
                    Creative {
                        ad_id: s("602678-NonLinear"),
                        non_linear_ads: Some(NonLinearAds {
                            tracking_events: vec![
                                tracking(
                                    "creativeView",
                                    "http://myTrackingURL/nonlinear/creativeView",
                                ),
                                tracking("expand", "http://myTrackingURL/nonlinear/expand"),
                                tracking("collapse", "http://myTrackingURL/nonlinear/collapse"),
                                tracking(
                                    "acceptInvitation",
                                    "http://myTrackingURL/nonlinear/acceptInvitation",
                                ),
                                tracking("close", "http://myTrackingURL/nonlinear/close"),
                            ],
                            non_linears: vec![
                                NonLinear {
                                    width: 300,
                                    height: 50,
                                    min_suggested_duration: Some(Duration::from_secs(15)),
                                    static_resource: Some(StaticResource {
                                        creative_type: s("image/jpeg"),
                                        uri: uri(
                                            "http://demo.tremormedia.com/proddev/vast/50x300_static.jpg",
                                        ),
                                    }),
                                    click_through: Some(uri("http://www.tremormedia.com")),
                                    ..Default::default()
                                },
                                NonLinear {
                                    width: 450,
                                    height: 50,
                                    min_suggested_duration: Some(Duration::from_secs(20)),
                                    static_resource: Some(StaticResource {
                                        creative_type: s("image/jpeg"),
                                        uri: uri(
                                            "http://demo.tremormedia.com/proddev/vast/50x450_static.jpg",
                                        ),
                                    }),
                                    click_through: Some(uri("http://www.tremormedia.com")),
                                    ..Default::default()
                                },
                            ],
                        }),
                        ..Default::default()
                    },
                    Creative {
                        ad_id: s("602678-Companion"),
                        companion_ads: Some(CompanionAds {
                            required: None,
                            companions: vec![
                                Companion {
                                    width: 300,
                                    height: 250,
                                    static_resource: Some(StaticResource {
                                        creative_type: s("application/x-shockwave-flash"),
                                        uri: uri(
                                            "http://demo.tremormedia.com/proddev/vast/300x250_companion_1.swf",
                                        ),
                                    }),
                                    click_through: Some(uri("http://www.tremormedia.com")),
                                    ..Default::default()
                                },
                                Companion {
                                    width: 728,
                                    height: 90,
                                    static_resource: Some(StaticResource {
                                        creative_type: s("image/jpeg"),
                                        uri: uri(
                                            "http://demo.tremormedia.com/proddev/vast/728x90_banner1.jpg",
                                        ),
                                    }),
                                    click_through: Some(uri("http://www.tremormedia.com")),
                                    tracking_events: vec![tracking(
                                        "creativeView",
                                        "http://myTrackingURL/secondCompanion",
                                    )],
                                    ..Default::default()
                                },
                            ],
                        }),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            }),
            ..Default::default()
        }],
    };

    assert_eq!(vast, expected);
}

#[test]
fn wrapper_linear() {
    let vast = parse_vast(include_str!("fixtures/vast_wrapper_linear.xml")).unwrap();

    let expected = Vast {
        version: "2.0".to_string(),
        ads: vec![Ad {
            id: s("602833"),
            wrapper: Some(Wrapper {
                ad_system: Some(AdSystem {
                    version: None,
                    name: "Acudeo Compatible".to_string(),
                }),
                vast_ad_tag_uri: uri(
                    "http://demo.tremormedia.com/proddev/vast/vast_inline_linear.xml",
                ),
                errors: vec![uri("http://myErrorURL/wrapper/error")],
                impressions: vec![Impression {
                    id: None,
                    uri: uri("http://myTrackingURL/wrapper/impression"),
                }],
                creatives: vec![
                    CreativeWrapper {
                        ad_id: s("602833"),
                        linear: Some(LinearWrapper {
                            tracking_events: vec![
                                tracking(
                                    "creativeView",
                                    "http://myTrackingURL/wrapper/creativeView",
                                ),
                                tracking("start", "http://myTrackingURL/wrapper/start"),
                                tracking("midpoint", "http://myTrackingURL/wrapper/midpoint"),
                                tracking(
                                    "firstQuartile",
                                    "http://myTrackingURL/wrapper/firstQuartile",
                                ),
                                tracking(
                                    "thirdQuartile",
                                    "http://myTrackingURL/wrapper/thirdQuartile",
                                ),
                                tracking("complete", "http://myTrackingURL/wrapper/complete"),
                                tracking("mute", "http://myTrackingURL/wrapper/mute"),
                                tracking("unmute", "http://myTrackingURL/wrapper/unmute"),
                                tracking("pause", "http://myTrackingURL/wrapper/pause"),
                                tracking("resume", "http://myTrackingURL/wrapper/resume"),
                                tracking("fullscreen", "http://myTrackingURL/wrapper/fullscreen"),
                            ],
                            ..Default::default()
                        }),
                        ..Default::default()
                    },
                    CreativeWrapper {
                        linear: Some(LinearWrapper {
                            video_clicks: Some(VideoClicks {
                                click_trackings: vec![VideoClick {
                                    id: None,
                                    uri: uri("http://myTrackingURL/wrapper/click"),
                                }],
                                ..Default::default()
                            }),
                            ..Default::default()
                        }),
                        ..Default::default()
                    },
                    CreativeWrapper {
                        ad_id: s("602833-NonLinearTracking"),
                        non_linear_ads: Some(NonLinearAdsWrapper {
                            tracking_events: vec![tracking(
                                "creativeView",
                                "http://myTrackingURL/wrapper/creativeView",
                            )],
                        }),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            }),
            ..Default::default()
        }],
    };

    assert_eq!(vast, expected);
}

#[test]
fn wrapper_nonlinear() {
    let vast = parse_vast(include_str!("fixtures/vast_wrapper_nonlinear.xml")).unwrap();

    let expected = Vast {
        version: "2.0".to_string(),
        ads: vec![Ad {
            id: s("602867"),
            wrapper: Some(Wrapper {
                ad_system: Some(AdSystem {
                    version: None,
                    name: "Acudeo Compatible".to_string(),
                }),
                vast_ad_tag_uri: uri(
                    "http://demo.tremormedia.com/proddev/vast/vast_inline_nonlinear2.xml",
                ),
                errors: vec![uri("http://myErrorURL/wrapper/error")],
                impressions: vec![Impression {
                    id: None,
                    uri: uri("http://myTrackingURL/wrapper/impression"),
                }],
                creatives: vec![
                    CreativeWrapper {
                        ad_id: s("602867"),
                        linear: Some(LinearWrapper::default()),
                        ..Default::default()
                    },
                    CreativeWrapper {
                        ad_id: s("602867-NonLinearTracking"),
                        non_linear_ads: Some(NonLinearAdsWrapper {
                            tracking_events: vec![
                                tracking(
                                    "creativeView",
                                    "http://myTrackingURL/wrapper/nonlinear/creativeView/creativeView",
                                ),
                                tracking(
                                    "expand",
                                    "http://myTrackingURL/wrapper/nonlinear/creativeView/expand",
                                ),
                                tracking(
                                    "collapse",
                                    "http://myTrackingURL/wrapper/nonlinear/creativeView/collapse",
                                ),
                                tracking(
                                    "acceptInvitation",
                                    "http://myTrackingURL/wrapper/nonlinear/creativeView/acceptInvitation",
                                ),
                                tracking(
                                    "close",
                                    "http://myTrackingURL/wrapper/nonlinear/creativeView/close",
                                ),
                            ],
                        }),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            }),
            ..Default::default()
        }],
    };

    assert_eq!(vast, expected);
}
