use log::{info, warn};
use yew::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::components::modal::{next_visibility, AccountModal, ModalAction};
use crate::components::nav::Nav;
use crate::components::reveal::RevealSection;
use crate::components::slider::Slider;
use crate::components::tabs::OperationsTabs;
use crate::dom;

struct Feature {
    placeholder: &'static str,
    image: &'static str,
    alt: &'static str,
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        placeholder: "img/digital-lazy.jpg",
        image: "img/digital.jpg",
        alt: "Computer",
        icon: "◎",
        title: "100% digital bank",
        text: "Open an account, order a card and manage your money without ever stepping into a branch.",
    },
    Feature {
        placeholder: "img/grow-lazy.jpg",
        image: "img/grow.jpg",
        alt: "Plant",
        icon: "↗",
        title: "Watch your money grow",
        text: "Savings accounts that pay real interest, with every deposit and payout visible as it happens.",
    },
    Feature {
        placeholder: "img/card-lazy.jpg",
        image: "img/card.jpg",
        alt: "Credit card",
        icon: "▭",
        title: "Free debit card included",
        text: "A contactless card with no yearly fee, no foreign transaction fee and instant freeze from the app.",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let header_ref = use_node_ref();
    let modal_open = use_state(|| false);

    {
        use_effect_with_deps(
            move |_| {
                info!("Landing page mounted");
                || ()
            },
            (),
        );
    }

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            modal_open.set(next_visibility(*modal_open, ModalAction::Open));
        })
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(next_visibility(*modal_open, ModalAction::Close)))
    };

    let scroll_to_features = Callback::from(|_: MouseEvent| {
        if let Err(e) = dom::query("#section--1").map(|s| dom::scroll_into_view_smooth(&s)) {
            warn!("Cannot scroll to features: {}", e);
        }
    });

    html! {
        <>
            <header class="header" ref={header_ref.clone()}>
                <Nav header={header_ref.clone()} on_open_modal={open_modal.clone()} />
                <div class="header__title">
                    <h1>
                        {"When "}<span class="highlight">{"banking"}</span>
                        {" meets"}<br />
                        <span class="highlight">{"minimalist"}</span>
                    </h1>
                    <h4>{"A simpler banking experience for a simpler life."}</h4>
                    <button class="btn--text btn--scroll-to" onclick={scroll_to_features}>
                        {"Learn more ↓"}
                    </button>
                    <img src="img/hero.png" class="header__img" alt="Minimalist bank items" />
                </div>
            </header>

            <RevealSection id="section--1">
                <div class="section__title">
                    <h2 class="section__description">{"Features"}</h2>
                    <h3 class="section__header">
                        {"Everything you need in a modern bank and more."}
                    </h3>
                </div>
                <div class="features">
                    {
                        for FEATURES.iter().enumerate().map(|(i, f)| {
                            let image = html! {
                                <LazyImage
                                    src={f.placeholder}
                                    data_src={f.image}
                                    alt={f.alt}
                                    class={classes!("features__img")}
                                />
                            };
                            let text = html! {
                                <div class="features__feature">
                                    <div class="features__icon">{f.icon}</div>
                                    <h5 class="features__header">{f.title}</h5>
                                    <p>{f.text}</p>
                                </div>
                            };
                            if i % 2 == 0 {
                                html! { <>{image}{text}</> }
                            } else {
                                html! { <>{text}{image}</> }
                            }
                        })
                    }
                </div>
            </RevealSection>

            <RevealSection id="section--2">
                <div class="section__title">
                    <h2 class="section__description">{"Operations"}</h2>
                    <h3 class="section__header">
                        {"Everything as simple as possible, but no simpler."}
                    </h3>
                </div>
                <OperationsTabs />
            </RevealSection>

            <RevealSection id="section--3">
                <div class="section__title section__title--testimonials">
                    <h2 class="section__description">{"Not sure yet?"}</h2>
                    <h3 class="section__header">
                        {"Millions of Bankists are already making their lives simpler."}
                    </h3>
                </div>
                <Slider />
            </RevealSection>

            <RevealSection id="section--sign-up" class={classes!("section--sign-up")}>
                <div class="section__title">
                    <h3 class="section__header">
                        {"The best day to join Bankist was one year ago. The second best is today!"}
                    </h3>
                </div>
                <button class="btn btn--show-modal" onclick={open_modal}>
                    {"Open your free account today!"}
                </button>
            </RevealSection>

            <footer class="footer">
                <p class="footer__copyright">{"© Bankist"}</p>
            </footer>

            <AccountModal visible={*modal_open} on_close={close_modal} />
            <style>{PAGE_STYLE}</style>
        </>
    }
}

const PAGE_STYLE: &str = r#"
.hidden {
    visibility: hidden;
    opacity: 0;
}

.modal {
    position: fixed;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
    max-width: 60rem;
    background-color: #f3f3f3;
    padding: 5rem 6rem;
    box-shadow: 0 4rem 6rem rgba(0, 0, 0, 0.3);
    z-index: 1000;
    transition: all 0.5s;
}

.overlay {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    background-color: rgba(0, 0, 0, 0.5);
    backdrop-filter: blur(4px);
    z-index: 100;
    transition: all 0.5s;
}

.nav {
    display: flex;
    justify-content: space-between;
    align-items: center;
    height: 9rem;
    width: 100%;
    padding: 0 6rem;
    z-index: 100;
}

.nav.sticky {
    position: fixed;
    background-color: rgba(255, 255, 255, 0.95);
}

.nav__link {
    transition: all 0.3s;
}

.section {
    padding: 15rem 3rem;
    border-top: 1px solid #ddd;
    transition: transform 1s, opacity 1s;
}

.section--hidden {
    opacity: 0;
    transform: translateY(8rem);
}

.lazy-img {
    filter: blur(20px);
}

.operations__content {
    display: none;
}

.operations__content--active {
    display: grid;
}

.operations__tab--active {
    transform: translateY(-66%);
}

.slider {
    max-width: 100rem;
    height: 50rem;
    margin: 0 auto;
    position: relative;
    overflow: hidden;
}

.slide {
    position: absolute;
    top: 0;
    width: 100%;
    height: 50rem;
    display: flex;
    align-items: center;
    justify-content: center;
    transition: transform 1s;
}

.dots {
    position: absolute;
    bottom: 5%;
    left: 50%;
    transform: translateX(-50%);
    display: flex;
}

.dots__dot {
    border: none;
    background-color: #b9b9b9;
    opacity: 0.7;
    height: 1rem;
    width: 1rem;
    border-radius: 50%;
    margin-right: 1.75rem;
    cursor: pointer;
    transition: all 0.5s;
}

.dots__dot--active {
    background-color: #888;
    opacity: 1;
}
"#;
