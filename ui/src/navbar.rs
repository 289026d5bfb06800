use dioxus::prelude::*;

#[component]
pub fn AppNavbar() -> Element {
    rsx! {
        header { class: "navbar",
            span { class: "navbar__brand", "Adpulse" }
            span { class: "navbar__tagline", "Marketing performance" }
        }
    }
}
