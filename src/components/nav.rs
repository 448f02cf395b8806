use log::{debug, warn};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::dom::{self, ObserverOptions, VisibilityObserver};
use crate::signals::StickySignal;

const LINKS: &[(&str, &str)] = &[
    ("#section--1", "Features"),
    ("#section--2", "Operations"),
    ("#section--3", "Testimonials"),
];

/// Opacity of a nav item while `hovered` is under the pointer.
/// `item` is `None` for the logo, which fades with the other links.
pub fn hover_opacity(item: Option<usize>, hovered: Option<usize>, faded: f64) -> f64 {
    match hovered {
        Some(h) if item != Some(h) => faded,
        _ => 1.0,
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub header: NodeRef,
    pub on_open_modal: Callback<MouseEvent>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let nav_ref = use_node_ref();
    let sticky = use_state(|| false);
    let hovered = use_state(|| None::<usize>);

    {
        let sticky = sticky.clone();
        let nav_ref = nav_ref.clone();
        let header = props.header.clone();
        let threshold = config.sticky_threshold;
        use_effect_with_deps(
            move |_| {
                let observer = match (nav_ref.cast::<web_sys::Element>(), header.cast::<web_sys::Element>()) {
                    (Some(nav), Some(header)) => {
                        let nav_height = nav.get_bounding_client_rect().height();
                        let options = ObserverOptions {
                            threshold,
                            root_margin: Some(format!("-{}px", nav_height)),
                        };
                        let mut signal = StickySignal::default();
                        let result = VisibilityObserver::new(&options, move |entry, _| {
                            sticky.set(signal.observe(entry.is_intersecting()));
                        });
                        match result {
                            Ok(observer) => {
                                observer.observe(&header);
                                debug!("Sticky nav observing header, nav height {}px", nav_height);
                                Some(observer)
                            }
                            Err(e) => {
                                warn!("Sticky nav disabled: {}", e);
                                None
                            }
                        }
                    }
                    _ => {
                        warn!("Sticky nav disabled: nav or header not mounted");
                        None
                    }
                };
                move || drop(observer)
            },
            (),
        );
    }

    let on_links_click = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        let Some(target) = dom::event_element(&e) else {
            return;
        };
        if !dom::has_class(&target, "nav__link") {
            return;
        }
        if let Some(href) = target.get_attribute("href") {
            if dom::fragment_selector(&href).is_some() {
                if let Err(e) = dom::scroll_to_fragment(&href) {
                    warn!("Nav link {} has no target: {}", href, e);
                }
            }
        }
    });

    let enter = |index: usize| {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
    };
    let leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };
    let style = |item: Option<usize>| {
        format!("opacity: {}", hover_opacity(item, *hovered, config.hover_opacity))
    };

    let open_modal = {
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_open_modal.emit(e);
        })
    };
    let open_index = LINKS.len();

    html! {
        <nav class={classes!("nav", (*sticky).then(|| "sticky"))} ref={nav_ref}>
            <img
                src="img/logo.png"
                alt="Bankist logo"
                class="nav__logo"
                id="logo"
                style={style(None)}
            />
            <ul class="nav__links" onclick={on_links_click}>
                {
                    for LINKS.iter().enumerate().map(|(i, (href, label))| html! {
                        <li class="nav__item">
                            <a
                                class="nav__link"
                                href={*href}
                                style={style(Some(i))}
                                onmouseenter={enter(i)}
                                onmouseleave={leave.clone()}
                            >
                                {*label}
                            </a>
                        </li>
                    })
                }
                <li class="nav__item">
                    <a
                        class="nav__link nav__link--btn btn--show-modal"
                        href="#"
                        style={style(Some(open_index))}
                        onmouseenter={enter(open_index)}
                        onmouseleave={leave.clone()}
                        onclick={open_modal}
                    >
                        {"Open account"}
                    </a>
                </li>
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_fades_without_hover() {
        assert_eq!(hover_opacity(Some(0), None, 0.5), 1.0);
        assert_eq!(hover_opacity(None, None, 0.5), 1.0);
    }

    #[test]
    fn siblings_and_logo_fade_on_hover() {
        assert_eq!(hover_opacity(Some(1), Some(1), 0.5), 1.0);
        assert_eq!(hover_opacity(Some(0), Some(1), 0.5), 0.5);
        assert_eq!(hover_opacity(Some(2), Some(1), 0.5), 0.5);
        assert_eq!(hover_opacity(None, Some(1), 0.5), 0.5);
    }
}
