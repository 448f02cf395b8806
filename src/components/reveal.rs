use log::warn;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::dom::{ObserverOptions, VisibilityObserver};
use crate::signals::{OneShotSignal, SignalOutcome};

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A page section that stays hidden until it first scrolls into view.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let section_ref = use_node_ref();
    let revealed = use_state(|| false);

    {
        let section_ref = section_ref.clone();
        let revealed = revealed.clone();
        let id = props.id.clone();
        let options = ObserverOptions {
            threshold: config.reveal_threshold,
            root_margin: None,
        };
        use_effect_with_deps(
            move |_| {
                let observer = section_ref.cast::<web_sys::Element>().and_then(|section| {
                    let mut signal = OneShotSignal::default();
                    let on_reveal = revealed.clone();
                    let result = VisibilityObserver::new(&options, move |entry, observer| {
                        if signal.observe(entry.is_intersecting()) == SignalOutcome::Fire {
                            on_reveal.set(true);
                            observer.unobserve(&entry.target());
                        }
                    });
                    match result {
                        Ok(observer) => {
                            observer.observe(&section);
                            Some(observer)
                        }
                        Err(e) => {
                            warn!("Showing #{} without reveal: {}", id, e);
                            revealed.set(true);
                            None
                        }
                    }
                });
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <section
            id={props.id.clone()}
            class={classes!("section", props.class.clone(), (!*revealed).then(|| "section--hidden"))}
            ref={section_ref}
        >
            { for props.children.iter() }
        </section>
    }
}
