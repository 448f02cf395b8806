use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction<'a> {
    Open,
    /// Close button or overlay click.
    Close,
    Key(&'a str),
}

/// Visibility after `action`. Escape only closes a modal that is actually showing.
pub fn next_visibility(visible: bool, action: ModalAction<'_>) -> bool {
    match action {
        ModalAction::Open => true,
        ModalAction::Close => false,
        ModalAction::Key("Escape") => false,
        ModalAction::Key(_) => visible,
    }
}

#[derive(Properties, PartialEq)]
pub struct AccountModalProps {
    pub visible: bool,
    pub on_close: Callback<()>,
}

#[function_component(AccountModal)]
pub fn account_modal(props: &AccountModalProps) -> Html {
    {
        let visible = props.visible;
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            let key = e.key();
            if visible && !next_visibility(visible, ModalAction::Key(&key)) {
                on_close.emit(());
            }
        });
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let submit = Callback::from(|e: SubmitEvent| e.prevent_default());
    let hidden = (!props.visible).then(|| "hidden");

    html! {
        <>
            <div class={classes!("modal", hidden)}>
                <button class="btn--close-modal" onclick={close.clone()}>{"×"}</button>
                <h2 class="modal__header">
                    {"Open your bank account "}<br />
                    {"in just "}<span class="highlight">{"5 minutes"}</span>
                </h2>
                <form class="modal__form" onsubmit={submit}>
                    <label>{"First Name"}</label>
                    <input type="text" />
                    <label>{"Last Name"}</label>
                    <input type="text" />
                    <label>{"Email Address"}</label>
                    <input type="email" />
                    <button class="btn">{"Next step →"}</button>
                </form>
            </div>
            <div class={classes!("overlay", hidden)} onclick={close}></div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_shows_modal() {
        assert!(next_visibility(false, ModalAction::Open));
        assert!(next_visibility(true, ModalAction::Open));
    }

    #[test]
    fn button_and_overlay_close() {
        assert!(!next_visibility(true, ModalAction::Close));
        assert!(!next_visibility(false, ModalAction::Close));
    }

    #[test]
    fn escape_closes_visible_modal() {
        assert!(!next_visibility(true, ModalAction::Key("Escape")));
    }

    #[test]
    fn escape_while_hidden_stays_hidden() {
        assert!(!next_visibility(false, ModalAction::Key("Escape")));
    }

    #[test]
    fn other_keys_keep_visibility() {
        assert!(next_visibility(true, ModalAction::Key("Enter")));
        assert!(next_visibility(true, ModalAction::Key("ArrowLeft")));
        assert!(!next_visibility(false, ModalAction::Key("Enter")));
    }

    #[test]
    fn open_then_close_round_trip() {
        let visible = next_visibility(false, ModalAction::Open);
        assert!(visible);
        let visible = next_visibility(visible, ModalAction::Key("Escape"));
        assert!(!visible);
        let visible = next_visibility(visible, ModalAction::Open);
        assert!(!next_visibility(visible, ModalAction::Close));
    }
}
