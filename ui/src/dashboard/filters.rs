use std::collections::BTreeSet;

use dioxus::prelude::*;

use crate::core::filter::{parse_input_date, Options, Selection};
use crate::core::format;

/// Sidebar with the date range and the three cascaded multi-selects.
///
/// The selection lives in the parent; every change rewrites it wholesale and
/// the parent recomputes the pipeline on the next render.
#[component]
pub fn FilterPanel(selection: Signal<Option<Selection>>, options: Options) -> Element {
    let Some(current) = selection() else {
        return VNode::empty();
    };

    let start_value = format::format_date(current.start);
    let end_value = format::format_date(current.end);

    rsx! {
        aside { class: "filters",
            h2 { class: "filters__title", "Filters" }

            div { class: "filters__section",
                span { class: "filters__label", "Date range" }
                input {
                    r#type: "date",
                    class: "filters__date",
                    value: "{start_value}",
                    onchange: move |event| {
                        if let Some(date) = parse_input_date(&event.value()) {
                            update(selection, |sel| sel.start = date);
                        }
                    },
                }
                input {
                    r#type: "date",
                    class: "filters__date",
                    value: "{end_value}",
                    onchange: move |event| {
                        if let Some(date) = parse_input_date(&event.value()) {
                            update(selection, |sel| sel.end = date);
                        }
                    },
                }
            }

            div { class: "filters__section",
                span { class: "filters__label", "Platform" }
                for platform in options.platforms.clone() {
                    {
                        let checked = current.platforms.contains(&platform);
                        rsx! {
                            label { class: "filters__option",
                                input {
                                    r#type: "checkbox",
                                    checked,
                                    onchange: move |event| {
                                        let on = event.checked();
                                        update(selection, move |sel| toggle(&mut sel.platforms, platform, on));
                                    },
                                }
                                "{platform}"
                            }
                        }
                    }
                }
            }

            div { class: "filters__section",
                span { class: "filters__label", "Group" }
                for group in options.groups.clone() {
                    {
                        let checked = current.groups.contains(&group);
                        let name = group.clone();
                        rsx! {
                            label { class: "filters__option",
                                input {
                                    r#type: "checkbox",
                                    checked,
                                    onchange: move |event| {
                                        let on = event.checked();
                                        let name = name.clone();
                                        update(selection, move |sel| toggle(&mut sel.groups, name, on));
                                    },
                                }
                                "{group}"
                            }
                        }
                    }
                }
            }

            div { class: "filters__section",
                span { class: "filters__label", "Campaign" }
                for campaign in options.campaigns.clone() {
                    {
                        let checked = current.campaigns.contains(&campaign);
                        let name = campaign.clone();
                        rsx! {
                            label { class: "filters__option",
                                input {
                                    r#type: "checkbox",
                                    checked,
                                    onchange: move |event| {
                                        let on = event.checked();
                                        let name = name.clone();
                                        update(selection, move |sel| toggle(&mut sel.campaigns, name, on));
                                    },
                                }
                                "{campaign}"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn update(mut selection: Signal<Option<Selection>>, apply: impl FnOnce(&mut Selection)) {
    selection.with_mut(|slot| {
        if let Some(current) = slot.as_mut() {
            apply(current);
        }
    });
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T, on: bool) {
    if on {
        set.insert(value);
    } else {
        set.remove(&value);
    }
}
