use darkmode_core::Preference;
use yew::prelude::*;

use crate::client::{get_client_preference, mount, update_client_preference};

/// Keeps dark mode in sync for as long as the calling component is mounted.
///
/// Changing `always_update` tears the old subscription down before the new
/// one is registered.
#[hook]
pub fn use_dark_mode_manager(always_update: bool) {
    use_effect_with(always_update, |&always_update| {
        let mounted = mount(always_update);
        move || drop(mounted)
    });
}

#[derive(Properties, PartialEq)]
pub struct DarkModeManagerProps {
    /// Set when the server doesn't render the dark class itself.
    #[prop_or_default]
    pub always_update: bool,
}

/// Place this somewhere that is always rendered, the root layout is a good
/// spot. It renders nothing.
#[function_component]
pub fn DarkModeManager(props: &DarkModeManagerProps) -> Html {
    use_dark_mode_manager(props.always_update);
    html! {}
}

#[derive(Properties, PartialEq)]
pub struct PreferenceSwitcherProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component]
pub fn PreferenceSwitcher(props: &PreferenceSwitcherProps) -> Html {
    let current = use_state(Preference::default);
    {
        let current = current.clone();
        use_effect_with((), move |_| current.set(get_client_preference()));
    }

    let items = [
        (Preference::System, "Auto"),
        (Preference::Light, "Light"),
        (Preference::Dark, "Dark"),
    ]
    .into_iter()
    .map(|(preference, label)| {
        let onclick = {
            let current = current.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                update_client_preference(preference);
                current.set(preference);
            })
        };
        let selected: Option<AttrValue> = (*current == preference).then(|| "true".into());
        html! {
            <li>
                <a href="#" data-darkmode-switcher={preference.as_str()} aria-current={selected} {onclick}>
                    {label}
                </a>
            </li>
        }
    });

    html! {
        <ul class={props.class.clone()}>
            { for items }
        </ul>
    }
}
