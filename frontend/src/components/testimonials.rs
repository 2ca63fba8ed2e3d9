use std::rc::Rc;

use shared::carousel::{auto_advance_period, Rotation};
use shared::Testimonial;
use yew::prelude::*;

use crate::hooks::use_auto_advance::use_auto_advance;

enum SlideAction {
    Forward,
    Back,
    Select(usize),
    Reset(usize),
}

#[derive(PartialEq)]
struct Slides(Rotation);

impl Reducible for Slides {
    type Action = SlideAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let rotation = match action {
            SlideAction::Forward => self.0.forward(),
            SlideAction::Back => self.0.back(),
            SlideAction::Select(index) => self.0.select(index),
            SlideAction::Reset(len) => Rotation::new(len),
        };
        Rc::new(Slides(rotation))
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub testimonials: Vec<Testimonial>,
    pub auto_ms: u32,
    pub reduced_motion: bool,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let count = props.testimonials.len();
    let slides = use_reducer_eq(|| Slides(Rotation::new(count)));

    {
        let slides = slides.dispatcher();
        use_effect_with(count, move |count| {
            slides.dispatch(SlideAction::Reset(*count));
            || ()
        });
    }

    let on_tick = {
        let slides = slides.dispatcher();
        Callback::from(move |_| slides.dispatch(SlideAction::Forward))
    };
    use_auto_advance(auto_advance_period(props.auto_ms, count, props.reduced_motion), on_tick);

    let Some(current) = props.testimonials.get(slides.0.index()) else {
        return html! {};
    };

    let on_prev = {
        let slides = slides.dispatcher();
        Callback::from(move |_: MouseEvent| slides.dispatch(SlideAction::Back))
    };
    let on_next = {
        let slides = slides.dispatcher();
        Callback::from(move |_: MouseEvent| slides.dispatch(SlideAction::Forward))
    };

    html! {
        <section class="testimonials">
            <div class="section-header">
                <div>
                    <h2 class="section-title">{"What people are saying"}</h2>
                    <p class="section-lead">{"Fast-paced service, bold flavors — hear it from our guests."}</p>
                </div>
            </div>

            <div class="testimonial-card">
                <div class="testimonial-avatar">
                    <img src={current.avatar.clone()} alt={current.name.clone()} width="80" height="80" />
                </div>

                <div class="testimonial-body">
                    <blockquote
                        key={current.id}
                        class={classes!("testimonial-quote", (!props.reduced_motion).then_some("fade-in"))}
                    >
                        <p>{format!("“{}”", current.text)}</p>
                        <footer>
                            {format!("— {}, ", current.name)}
                            <span class="testimonial-title">{current.title.clone()}</span>
                        </footer>
                    </blockquote>

                    <div class="testimonial-controls">
                        <div class="testimonial-dots">
                            {for props.testimonials.iter().enumerate().map(|(i, t)| {
                                let onclick = {
                                    let slides = slides.dispatcher();
                                    Callback::from(move |_: MouseEvent| slides.dispatch(SlideAction::Select(i)))
                                };
                                html! {
                                    <button
                                        key={t.id}
                                        class={classes!("testimonial-dot", (i == slides.0.index()).then_some("active"))}
                                        aria-label={format!("Show testimonial {}", i + 1)}
                                        {onclick}
                                    />
                                }
                            })}
                        </div>
                        <div class="testimonial-arrows">
                            <button class="testimonial-prev" aria-label="Previous testimonial" onclick={on_prev}>{"‹"}</button>
                            <button class="testimonial-next" aria-label="Next testimonial" onclick={on_next}>{"›"}</button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn apply(slides: Slides, action: SlideAction) -> Rotation {
        Rc::new(slides).reduce(action).0
    }

    #[wasm_bindgen_test]
    fn test_slides_reducer() {
        let start = || Slides(Rotation::new(3));
        assert_eq!(apply(start(), SlideAction::Forward).index(), 1);
        assert_eq!(apply(start(), SlideAction::Back).index(), 2);
        assert_eq!(apply(start(), SlideAction::Select(2)).index(), 2);
        assert_eq!(apply(Slides(Rotation::new(3).select(2)), SlideAction::Reset(5)).index(), 0);
    }
}
