use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};
use yew::prelude::*;

use crate::carousel::{parse_indicator_tag, slide_offset, Carousel, Command, SlideView};
use crate::dom::{self, EventListener};
use crate::error::SiteError;

const DOT_CLASS: &str = "dots__dot";
const DOT_ACTIVE_CLASS: &str = "dots__dot--active";

struct Testimonial {
    header: &'static str,
    text: &'static str,
    name: &'static str,
    location: &'static str,
    photo: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        header: "Best financial decision ever!",
        text: "Moving my salary over took ten minutes and I have not looked back. Everything I need is in one place and the app simply works.",
        name: "Aarav Lynn",
        location: "San Francisco, USA",
        photo: "img/user-1.jpg",
    },
    Testimonial {
        header: "The last step to becoming a complete minimalist",
        text: "One account, one card, no branch visits. Bankist let me drop three other services and I finally know where my money goes.",
        name: "Miyah Miles",
        location: "London, UK",
        photo: "img/user-2.jpg",
    },
    Testimonial {
        header: "Finally free from old-school banks",
        text: "Transfers are instant, support answers in minutes and closing my old account was the only painful part of switching.",
        name: "Francisco Gomes",
        location: "Lisbon, Portugal",
        photo: "img/user-3.jpg",
    },
];

/// Maps a click inside the dot row to a jump; clicks between dots yield nothing.
fn indicator_command(event: &MouseEvent) -> Option<Command> {
    let target = dom::event_element(event)?;
    if !dom::has_class(&target, DOT_CLASS) {
        return None;
    }
    target
        .get_attribute("data-slide")
        .as_deref()
        .and_then(parse_indicator_tag)
        .map(Command::JumpTo)
}

/// Positions slides with `translateX` and marks dots through their class list.
struct DomSlideView {
    slides: Vec<HtmlElement>,
    dots: Element,
}

impl DomSlideView {
    fn indicators(&self) -> Vec<Element> {
        let found = self.dots.get_elements_by_class_name(DOT_CLASS);
        (0..found.length()).filter_map(|i| found.item(i)).collect()
    }

    fn create_dot(&self, index: usize) -> Result<(), SiteError> {
        let dot = dom::document()?.create_element("button")?;
        dot.set_class_name(DOT_CLASS);
        dot.set_attribute("data-slide", &index.to_string())?;
        self.dots.append_child(&dot)?;
        Ok(())
    }
}

impl SlideView for DomSlideView {
    fn build_indicators(&mut self, slide_count: usize) {
        for index in 0..slide_count {
            if let Err(e) = self.create_dot(index) {
                warn!("Could not create dot {}: {}", index, e);
            }
        }
    }

    fn render(&mut self, current: usize, _slide_count: usize) {
        for (i, slide) in self.slides.iter().enumerate() {
            let transform = format!("translateX({}%)", slide_offset(i, current));
            if let Err(e) = slide.style().set_property("transform", &transform) {
                warn!("Could not move slide {}: {:?}", i, e);
            }
        }
    }

    fn set_indicator_active(&mut self, index: usize) {
        for dot in self.indicators() {
            if let Err(e) = dot.class_list().remove_1(DOT_ACTIVE_CLASS) {
                warn!("Could not clear dot: {:?}", e);
            }
            let tagged = dot
                .get_attribute("data-slide")
                .as_deref()
                .and_then(parse_indicator_tag);
            if tagged == Some(index) {
                if let Err(e) = dot.class_list().add_1(DOT_ACTIVE_CLASS) {
                    warn!("Could not mark dot {}: {:?}", index, e);
                }
            }
        }
    }
}

/// Testimonial slider. Slides and dots are moved directly on the DOM, so the
/// component renders its markup once and never re-renders.
pub struct Slider {
    slide_refs: Vec<NodeRef>,
    dots_ref: NodeRef,
    carousel: Option<Carousel<DomSlideView>>,
    keydown: Option<EventListener>,
}

impl Slider {
    fn mount(&mut self, ctx: &Context<Self>) -> Result<(), SiteError> {
        let slides = self
            .slide_refs
            .iter()
            .map(|r| r.cast::<HtmlElement>())
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| SiteError::MissingElement(".slide".to_string()))?;
        let dots = self
            .dots_ref
            .cast::<Element>()
            .ok_or_else(|| SiteError::MissingElement(".dots".to_string()))?;

        let slide_count = slides.len();
        self.carousel = Some(Carousel::new(slide_count, DomSlideView { slides, dots })?);

        let on_command = ctx.link().callback(|command: Command| command);
        let document = dom::document()?;
        self.keydown = Some(EventListener::new(&document, "keydown", move |e| {
            let command = e
                .dyn_ref::<KeyboardEvent>()
                .and_then(|e| Command::from_key(&e.key()));
            if let Some(command) = command {
                on_command.emit(command);
            }
        })?);

        info!("Slider ready with {} slides", slide_count);
        Ok(())
    }
}

impl Component for Slider {
    type Message = Command;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            slide_refs: TESTIMONIALS.iter().map(|_| NodeRef::default()).collect(),
            dots_ref: NodeRef::default(),
            carousel: None,
            keydown: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, command: Self::Message) -> bool {
        if let Some(carousel) = self.carousel.as_mut() {
            match carousel.dispatch(command) {
                Ok(current) => debug!("Slider at {}/{}", current + 1, carousel.slide_count()),
                Err(e) => warn!("Ignoring {:?}: {}", command, e),
            }
        }
        false
    }

    fn changed(&mut self, _ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_prev = link.callback(|_: MouseEvent| Command::Previous);
        let on_next = link.callback(|_: MouseEvent| Command::Next);
        let on_dots = link.batch_callback(|e: MouseEvent| indicator_command(&e));

        html! {
            <div class="slider">
                {
                    for TESTIMONIALS.iter().zip(&self.slide_refs).map(|(t, slide_ref)| html! {
                        <div class="slide" ref={slide_ref.clone()}>
                            <div class="testimonial">
                                <h5 class="testimonial__header">{t.header}</h5>
                                <blockquote class="testimonial__text">{t.text}</blockquote>
                                <address class="testimonial__author">
                                    <img src={t.photo} alt="" class="testimonial__photo" />
                                    <h6 class="testimonial__name">{t.name}</h6>
                                    <p class="testimonial__location">{t.location}</p>
                                </address>
                            </div>
                        </div>
                    })
                }
                <button class="slider__btn slider__btn--left" onclick={on_prev}>{"←"}</button>
                <button class="slider__btn slider__btn--right" onclick={on_next}>{"→"}</button>
                <div class="dots" ref={self.dots_ref.clone()} onclick={on_dots}></div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            if let Err(e) = self.mount(ctx) {
                warn!("Slider disabled: {}", e);
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.keydown.take();
    }
}
