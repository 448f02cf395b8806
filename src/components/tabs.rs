use yew::prelude::*;

use crate::dom;

struct Operation {
    icon: &'static str,
    tab_label: &'static str,
    header: &'static str,
    body: &'static str,
}

const OPERATIONS: &[Operation] = &[
    Operation {
        icon: "↑",
        tab_label: "Instant Transfers",
        header: "Transfer money to anyone, instantly! No fees, no BS.",
        body: "Send money to anyone in your contacts in seconds. Transfers arrive before you have closed the app.",
    },
    Operation {
        icon: "⌂",
        tab_label: "Instant Loans",
        header: "Buy a home or make your dreams come true, with instant loans.",
        body: "Apply for a loan and get an answer right away. No paperwork, no waiting rooms.",
    },
    Operation {
        icon: "×",
        tab_label: "Instant Closing",
        header: "No longer need your account? No problem! Close it instantly.",
        body: "Close your account with one click. Your remaining balance is paid out the same day.",
    },
];

/// Tab numbers run `1..=tab_count`, matching the `data-tab` tags.
pub fn parse_tab(tag: &str, tab_count: usize) -> Option<usize> {
    tag.trim()
        .parse()
        .ok()
        .filter(|tab| (1..=tab_count).contains(tab))
}

/// Active markers for tab `tab` and its content pane when `active` is selected.
pub fn tab_classes(active: usize, tab: usize) -> (Option<&'static str>, Option<&'static str>) {
    if active == tab {
        (Some("operations__tab--active"), Some("operations__content--active"))
    } else {
        (None, None)
    }
}

#[function_component(OperationsTabs)]
pub fn operations_tabs() -> Html {
    let active = use_state(|| 1usize);

    let on_click = {
        let active = active.clone();
        Callback::from(move |e: MouseEvent| {
            let clicked = dom::event_element(&e)
                .and_then(|target| target.closest(".operations__tab").ok().flatten());
            let Some(clicked) = clicked else {
                return;
            };
            if let Some(tab) = clicked
                .get_attribute("data-tab")
                .and_then(|tag| parse_tab(&tag, OPERATIONS.len()))
            {
                active.set(tab);
            }
        })
    };

    html! {
        <div class="operations">
            <div class="operations__tab-container" onclick={on_click}>
                {
                    for OPERATIONS.iter().enumerate().map(|(i, op)| {
                        let tab = i + 1;
                        html! {
                            <button
                                class={classes!(
                                    "btn",
                                    "operations__tab",
                                    format!("operations__tab--{}", tab),
                                    tab_classes(*active, tab).0,
                                )}
                                data-tab={tab.to_string()}
                            >
                                <span>{format!("0{}", tab)}</span>{op.tab_label}
                            </button>
                        }
                    })
                }
            </div>
            {
                for OPERATIONS.iter().enumerate().map(|(i, op)| {
                    let tab = i + 1;
                    html! {
                        <div class={classes!(
                            "operations__content",
                            format!("operations__content--{}", tab),
                            tab_classes(*active, tab).1,
                        )}>
                            <div class={classes!("operations__icon", format!("operations__icon--{}", tab))}>
                                {op.icon}
                            </div>
                            <h5 class="operations__header">{op.header}</h5>
                            <p>{op.body}</p>
                        </div>
                    }
                })
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_tags_within_range() {
        assert_eq!(parse_tab("1", 3), Some(1));
        assert_eq!(parse_tab("3", 3), Some(3));
    }

    #[test]
    fn tab_tags_outside_range_are_ignored() {
        assert_eq!(parse_tab("0", 3), None);
        assert_eq!(parse_tab("4", 3), None);
        assert_eq!(parse_tab("", 3), None);
        assert_eq!(parse_tab("first", 3), None);
    }

    #[test]
    fn exactly_one_tab_and_pane_active() {
        let tabs = 1..=OPERATIONS.len();
        for active in tabs.clone() {
            let marked: Vec<_> = tabs.clone().map(|tab| tab_classes(active, tab)).collect();
            let active_tabs: Vec<usize> = tabs
                .clone()
                .zip(&marked)
                .filter(|(_, (t, _))| t.is_some())
                .map(|(tab, _)| tab)
                .collect();
            let active_panes: Vec<usize> = tabs
                .clone()
                .zip(&marked)
                .filter(|(_, (_, p))| p.is_some())
                .map(|(tab, _)| tab)
                .collect();
            assert_eq!(active_tabs, vec![active]);
            assert_eq!(active_panes, vec![active]);
        }
    }

    #[test]
    fn clicked_tab_becomes_the_only_active_one() {
        let active = parse_tab("2", OPERATIONS.len()).unwrap();
        assert_eq!(
            tab_classes(active, 2),
            (Some("operations__tab--active"), Some("operations__content--active"))
        );
        assert_eq!(tab_classes(active, 1), (None, None));
        assert_eq!(tab_classes(active, 3), (None, None));
    }
}
