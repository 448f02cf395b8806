use log::{debug, warn};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::dom::{ObserverOptions, VisibilityObserver};
use crate::signals::{OneShotSignal, SignalOutcome};

/// Placeholder until the image nears the viewport, then the full source
/// loads, and the blur lifts once that full image has loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LazyStage {
    Placeholder,
    Loading,
    Loaded,
}

impl LazyStage {
    pub fn swap(self) -> Self {
        match self {
            LazyStage::Placeholder => LazyStage::Loading,
            other => other,
        }
    }

    /// The placeholder fires `load` too; only the full image lifts the blur.
    pub fn on_load(self) -> Self {
        match self {
            LazyStage::Loading => LazyStage::Loaded,
            other => other,
        }
    }

    pub fn shows_full_image(self) -> bool {
        self != LazyStage::Placeholder
    }

    pub fn is_blurred(self) -> bool {
        self != LazyStage::Loaded
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    /// Low-resolution placeholder shown until the image nears the viewport.
    pub src: AttrValue,
    pub data_src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let img_ref = use_node_ref();
    let stage = use_state(|| LazyStage::Placeholder);

    {
        let img_ref = img_ref.clone();
        let stage = stage.clone();
        let data_src = props.data_src.clone();
        let options = ObserverOptions {
            threshold: config.lazy_threshold,
            root_margin: Some(config.lazy_root_margin.clone()),
        };
        use_effect_with_deps(
            move |_| {
                let observer = img_ref.cast::<web_sys::Element>().and_then(|img| {
                    let mut signal = OneShotSignal::default();
                    let on_swap = stage.clone();
                    let result = VisibilityObserver::new(&options, move |entry, observer| {
                        if signal.observe(entry.is_intersecting()) == SignalOutcome::Fire {
                            debug!("Loading {}", data_src);
                            on_swap.set(LazyStage::Placeholder.swap());
                            observer.unobserve(&entry.target());
                        }
                    });
                    match result {
                        Ok(observer) => {
                            observer.observe(&img);
                            Some(observer)
                        }
                        Err(e) => {
                            warn!("Loading image eagerly: {}", e);
                            stage.set(LazyStage::Placeholder.swap());
                            None
                        }
                    }
                });
                move || drop(observer)
            },
            (),
        );
    }

    let on_load = {
        let stage = stage.clone();
        Callback::from(move |_: Event| stage.set(stage.on_load()))
    };

    let src = if stage.shows_full_image() { &props.data_src } else { &props.src };

    html! {
        <img
            src={src.clone()}
            data-src={props.data_src.clone()}
            alt={props.alt.clone()}
            class={classes!(props.class.clone(), stage.is_blurred().then(|| "lazy-img"))}
            onload={on_load}
            ref={img_ref}
        />
    }
}
