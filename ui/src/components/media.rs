use dioxus::prelude::*;

use crate::core::content::MediaRef;
use crate::core::localized;
use crate::core::source::site_config;

/// Image or looping background video for an uploaded media item.
#[component]
pub fn Media(media: MediaRef, locale: String, #[props(default)] class: String) -> Element {
    let src = media.src();

    if media.is_video() {
        let mime = media.mime_type.clone();
        return rsx! {
            video {
                class: "media media--video {class}",
                autoplay: true,
                muted: true,
                r#loop: true,
                playsinline: true,
                preload: "auto",
                source { src: "{src}", r#type: mime }
            }
        };
    }

    let alt = localized::resolve(media.alt.as_ref(), &locale, &site_config().fallback_locale);
    rsx! {
        img {
            class: "media media--image {class}",
            src: "{src}",
            alt: "{alt}",
            width: media.width.map(|w| w.to_string()),
            height: media.height.map(|h| h.to_string()),
            loading: "lazy",
        }
    }
}
