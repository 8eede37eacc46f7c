use dioxus::prelude::*;
use tracing::debug;

use crate::components::{CmsLink, Media};
use crate::core::content::{DropdownSpec, HeaderData, NavItem};
use crate::core::link::Appearance;
use crate::core::localized;
use crate::core::menu::{MenuCommand, MenuController, MenuPhase, MenuState};
use crate::core::source::site_config;
use crate::core::{platform, timing};
use crate::t;

/// Top-level navigation with hover dropdown curtains.
///
/// All open/close decisions belong to `MenuController`; this component
/// forwards pointer events to it and runs the timers it asks for. At most
/// one close task and one frame task exist at a time: scheduling a new one
/// cancels the old handle, and the controller's tokens discard anything that
/// slips through.
#[component]
pub fn HeaderNav(header: HeaderData, locale: String) -> Element {
    let menu = use_signal(|| MenuController::new(site_config().menu.close_delay_ms));
    let close_task = use_signal(|| Option::<Task>::None);
    let frame_task = use_signal(|| Option::<Task>::None);
    let timers = MenuTimers {
        menu,
        close_task,
        frame_task,
    };

    use_drop(move || timers.teardown());

    let state = menu.read().state();
    let fallback = site_config().fallback_locale.clone();
    let menu_label = t!("nav-menu-label");

    let open_dropdown = state
        .open_index
        .and_then(|index| header.nav_items.get(index))
        .and_then(NavItem::active_dropdown)
        .cloned();

    rsx! {
        nav { class: "site-nav", aria_label: "{menu_label}",
            ul { class: "site-nav__list",
                for (index, item) in header.nav_items.iter().enumerate() {
                    if item.link.resolve_href(&locale, &fallback).is_some() {
                        NavEntry {
                            key: "{index}",
                            index,
                            item: item.clone(),
                            locale: locale.clone(),
                            open: state.is_open(index),
                            timers,
                        }
                    }
                }
            }

            if let Some(dropdown) = open_dropdown {
                DropdownPanel {
                    key: "{state.reveal_token}",
                    dropdown,
                    state,
                    locale: locale.clone(),
                    timers,
                }
            }
        }
    }
}

/// Signals the nav shares with its children to drive the controller.
#[derive(Clone, Copy, PartialEq)]
struct MenuTimers {
    menu: Signal<MenuController>,
    close_task: Signal<Option<Task>>,
    frame_task: Signal<Option<Task>>,
}

impl MenuTimers {
    fn dispatch(self, f: impl FnOnce(&mut MenuController) -> Vec<MenuCommand>) {
        let mut menu = self.menu;
        let commands = menu.with_mut(f);
        self.run(commands);
    }

    fn hover_item(self, index: usize) {
        let mut menu = self.menu;
        if menu.read().state().active_item != index {
            menu.with_mut(|m| m.hover_item(index));
        }
    }

    fn run(self, commands: Vec<MenuCommand>) {
        let mut close_task = self.close_task;
        let mut frame_task = self.frame_task;
        let mut menu = self.menu;

        for command in commands {
            match command {
                MenuCommand::CancelClose => cancel(&mut close_task),
                MenuCommand::CancelFrame => cancel(&mut frame_task),
                MenuCommand::ScheduleClose { token, delay_ms } => {
                    cancel(&mut close_task);
                    let task = platform::spawn_future(async move {
                        timing::sleep_ms(delay_ms).await;
                        let follow_up = menu.with_mut(|m| m.close_elapsed(token));
                        self.run(follow_up);
                    });
                    close_task.set(Some(task));
                }
                MenuCommand::RequestFrame { token } => {
                    cancel(&mut frame_task);
                    let task = platform::spawn_future(async move {
                        timing::next_frame().await;
                        menu.with_mut(|m| m.frame_settled(token));
                    });
                    frame_task.set(Some(task));
                }
            }
        }
    }

    /// Unmount: nothing may fire after this.
    fn teardown(self) {
        let mut menu = self.menu;
        let commands = match menu.try_write() {
            Ok(mut menu) => menu.dispose(),
            Err(_) => Vec::new(),
        };
        debug!(pending = commands.len(), "header nav torn down");
        for mut signal in [self.close_task, self.frame_task] {
            if let Ok(mut slot) = signal.try_write() {
                if let Some(task) = slot.take() {
                    task.cancel();
                }
            }
        }
    }
}

fn cancel(slot: &mut Signal<Option<Task>>) {
    if let Some(task) = slot.take() {
        task.cancel();
    }
}

#[component]
fn NavEntry(
    index: usize,
    item: NavItem,
    locale: String,
    open: bool,
    timers: MenuTimers,
) -> Element {
    let has_dropdown = item.active_dropdown().is_some();
    let class = match (has_dropdown, open) {
        (true, true) => "site-nav__item site-nav__item--has-dropdown site-nav__item--open",
        (true, false) => "site-nav__item site-nav__item--has-dropdown",
        _ => "site-nav__item",
    };

    rsx! {
        li {
            class,
            aria_expanded: has_dropdown.then_some(if open { "true" } else { "false" }),
            onmouseenter: move |_| timers.dispatch(|m| m.pointer_enter_trigger(index, has_dropdown)),
            onmouseleave: move |_| timers.dispatch(MenuController::pointer_leave),
            CmsLink {
                link: item.link.clone(),
                locale,
                appearance: Appearance::Link,
                class: "site-nav__link",
            }
        }
    }
}

#[component]
fn DropdownPanel(
    dropdown: DropdownSpec,
    state: MenuState,
    locale: String,
    timers: MenuTimers,
) -> Element {
    let fallback = site_config().fallback_locale.clone();
    let phase = match state.phase {
        MenuPhase::Closed => "closed",
        MenuPhase::Opening => "opening",
        MenuPhase::Open => "open",
        MenuPhase::Closing => "closing",
    };
    let reveal = if state.revealed {
        "nav-dropdown--revealed"
    } else {
        ""
    };
    let panel_text = localized::resolve(dropdown.panel_text.as_ref(), &locale, &fallback);
    let preview = dropdown.preview_media(state.active_item).cloned();

    rsx! {
        div {
            class: "nav-dropdown nav-dropdown--{phase} {reveal}",
            onmouseenter: move |_| timers.dispatch(MenuController::pointer_enter_panel),
            onmouseleave: move |_| timers.dispatch(MenuController::pointer_leave),

            div { class: "nav-dropdown__intro",
                if let Some(title) = dropdown.panel_title_link.clone() {
                    CmsLink {
                        link: title,
                        locale: locale.clone(),
                        appearance: Appearance::Inline,
                        class: "nav-dropdown__title",
                    }
                }
                if !panel_text.is_empty() {
                    p { class: "nav-dropdown__text", "{panel_text}" }
                }
            }

            ul { class: "nav-dropdown__items",
                for (item_index, item) in dropdown.items.iter().enumerate() {
                    if item.link.resolve_href(&locale, &fallback).is_some() {
                        li {
                            key: "{item_index}",
                            class: if item_index == state.active_item {
                                "nav-dropdown__item nav-dropdown__item--active"
                            } else {
                                "nav-dropdown__item"
                            },
                            style: "--stagger-index: {item_index}",
                            onmouseenter: move |_| timers.hover_item(item_index),
                            CmsLink {
                                link: item.link.clone(),
                                locale: locale.clone(),
                                appearance: Appearance::Inline,
                                class: "nav-dropdown__link",
                            }
                            if let Some(description) = item.description.as_ref() {
                                span { class: "nav-dropdown__description",
                                    {description.resolve(&locale, &fallback)}
                                }
                            }
                        }
                    }
                }
            }

            div { class: "nav-dropdown__preview",
                if let Some(media) = preview {
                    Media { media, locale: locale.clone(), class: "nav-dropdown__media" }
                }
            }
        }
    }
}
