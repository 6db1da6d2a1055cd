// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::time::Duration;

use crate::geometry::any_contains;
use crate::timer::{TimerSlot, TimerToken, Timing};
use crate::{Point, Region, Tab, TabFilters};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    Idle,
    Loading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuVisibility {
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toast {
    pub at: Point,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub query: String,
    pub active_tab: Tab,
    pub loading: LoadingPhase,
    pub settings_menu: MenuVisibility,
    pub filters: TabFilters,
    pub toast: Option<Toast>,
    pub timing: Timing,
    loading_timer: TimerSlot,
    toast_timer: TimerSlot,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Timing::default(), TabFilters::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    SetQuery(String),
    ClearQuery,
    SelectTab(Tab),
    NextTab,
    PrevTab,
    ToggleSettingsMenu,
    CloseSettingsMenu,
    /// Pointer pressed while the settings container occupies `menu_regions`.
    PointerDown {
        at: Point,
        menu_regions: Vec<Region>,
    },
    ToggleFilter(Tab),
    LoadingElapsed(TimerToken),
    ShowToast {
        at: Point,
    },
    ToastExpired(TimerToken),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    QueryChanged(String),
    LoadingStarted { token: TimerToken, delay: Duration },
    LoadingFinished,
    TabChanged(Tab),
    SettingsMenuChanged(MenuVisibility),
    FilterToggled { tab: Tab, visible: bool },
    ToastShown {
        at: Point,
        token: TimerToken,
        delay: Duration,
    },
    ToastHidden,
}

impl AppState {
    pub fn new(timing: Timing, filters: TabFilters) -> Self {
        Self {
            query: String::new(),
            active_tab: Tab::All,
            loading: LoadingPhase::Idle,
            settings_menu: MenuVisibility::Closed,
            filters,
            toast: None,
            timing,
            loading_timer: TimerSlot::default(),
            toast_timer: TimerSlot::default(),
        }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.loading, LoadingPhase::Loading)
    }

    pub const fn menu_open(&self) -> bool {
        matches!(self.settings_menu, MenuVisibility::Open)
    }

    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::SetQuery(query) => self.set_query(query),
            AppCommand::ClearQuery => self.set_query(String::new()),
            AppCommand::SelectTab(tab) => self.select_tab(tab),
            AppCommand::NextTab => self.rotate_tab(1),
            AppCommand::PrevTab => self.rotate_tab(-1),
            AppCommand::ToggleSettingsMenu => {
                let next = if self.menu_open() {
                    MenuVisibility::Closed
                } else {
                    MenuVisibility::Open
                };
                self.set_menu(next)
            }
            AppCommand::CloseSettingsMenu => self.set_menu(MenuVisibility::Closed),
            AppCommand::PointerDown { at, menu_regions } => {
                if self.menu_open() && !any_contains(&menu_regions, at) {
                    self.set_menu(MenuVisibility::Closed)
                } else {
                    Vec::new()
                }
            }
            AppCommand::ToggleFilter(tab) => self.toggle_filter(tab),
            AppCommand::LoadingElapsed(token) => {
                if self.loading_timer.fire(token) {
                    self.loading = LoadingPhase::Idle;
                    vec![AppEvent::LoadingFinished]
                } else {
                    Vec::new()
                }
            }
            AppCommand::ShowToast { at } => {
                self.toast = Some(Toast { at });
                let token = self.toast_timer.arm();
                vec![AppEvent::ToastShown {
                    at,
                    token,
                    delay: self.timing.toast_duration,
                }]
            }
            AppCommand::ToastExpired(token) => {
                if self.toast_timer.fire(token) {
                    self.toast = None;
                    vec![AppEvent::ToastHidden]
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn set_query(&mut self, query: String) -> Vec<AppEvent> {
        if query == self.query {
            return Vec::new();
        }
        self.query = query;
        let mut events = vec![AppEvent::QueryChanged(self.query.clone())];

        if self.query.is_empty() {
            self.loading_timer.cancel();
            if self.is_loading() {
                self.loading = LoadingPhase::Idle;
                events.push(AppEvent::LoadingFinished);
            }
            // The settings button lives in the tab bar, which an empty query hides.
            events.extend(self.set_menu(MenuVisibility::Closed));
        } else {
            self.loading = LoadingPhase::Loading;
            let token = self.loading_timer.arm();
            events.push(AppEvent::LoadingStarted {
                token,
                delay: self.timing.loading_delay,
            });
        }
        events
    }

    fn select_tab(&mut self, tab: Tab) -> Vec<AppEvent> {
        if tab == self.active_tab || !self.filters.is_visible(tab) {
            return Vec::new();
        }
        self.active_tab = tab;
        vec![AppEvent::TabChanged(tab)]
    }

    fn rotate_tab(&mut self, delta: isize) -> Vec<AppEvent> {
        let tabs = self.filters.visible_tabs();
        let current = tabs
            .iter()
            .position(|tab| *tab == self.active_tab)
            .unwrap_or(0) as isize;
        let len = tabs.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.select_tab(tabs[next])
    }

    fn set_menu(&mut self, visibility: MenuVisibility) -> Vec<AppEvent> {
        if self.settings_menu == visibility {
            return Vec::new();
        }
        self.settings_menu = visibility;
        vec![AppEvent::SettingsMenuChanged(visibility)]
    }

    fn toggle_filter(&mut self, tab: Tab) -> Vec<AppEvent> {
        if tab == Tab::All {
            return Vec::new();
        }
        let visible = self.filters.toggle(tab);
        let mut events = vec![AppEvent::FilterToggled { tab, visible }];
        if !visible && self.active_tab == tab {
            self.active_tab = Tab::All;
            events.push(AppEvent::TabChanged(Tab::All));
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCommand, AppEvent, AppState, LoadingPhase, MenuVisibility, Toast};
    use crate::timer::Timing;
    use crate::{Point, Region, Tab, TabFilters};
    use std::time::Duration;

    fn loading_token(events: &[AppEvent]) -> Option<crate::TimerToken> {
        events.iter().find_map(|event| match event {
            AppEvent::LoadingStarted { token, .. } => Some(*token),
            _ => None,
        })
    }

    fn toast_token(events: &[AppEvent]) -> Option<crate::TimerToken> {
        events.iter().find_map(|event| match event {
            AppEvent::ToastShown { token, .. } => Some(*token),
            _ => None,
        })
    }

    #[test]
    fn typing_enters_loading_with_configured_delay() {
        let mut state = AppState::new(
            Timing {
                loading_delay: Duration::from_millis(250),
                ..Timing::default()
            },
            TabFilters::default(),
        );

        let events = state.dispatch(AppCommand::SetQuery("ran".to_owned()));
        assert_eq!(state.loading, LoadingPhase::Loading);
        assert_eq!(events[0], AppEvent::QueryChanged("ran".to_owned()));
        assert!(matches!(
            events[1],
            AppEvent::LoadingStarted { delay, .. } if delay == Duration::from_millis(250)
        ));
    }

    #[test]
    fn rapid_queries_finish_loading_once_from_latest_arm() {
        let mut state = AppState::default();
        let first = loading_token(&state.dispatch(AppCommand::SetQuery("a".to_owned())));
        let second = loading_token(&state.dispatch(AppCommand::SetQuery("ab".to_owned())));
        let (Some(first), Some(second)) = (first, second) else {
            panic!("both keystrokes should arm the loading timer");
        };

        assert!(state.dispatch(AppCommand::LoadingElapsed(first)).is_empty());
        assert!(state.is_loading());

        assert_eq!(
            state.dispatch(AppCommand::LoadingElapsed(second)),
            vec![AppEvent::LoadingFinished]
        );
        assert_eq!(state.loading, LoadingPhase::Idle);
        let repeated = state.dispatch(AppCommand::LoadingElapsed(second));
        assert!(repeated.is_empty());
    }

    #[test]
    fn clearing_query_forces_idle_and_drops_pending_timer() {
        let mut state = AppState::default();
        let token = loading_token(&state.dispatch(AppCommand::SetQuery("x".to_owned())));

        let events = state.dispatch(AppCommand::ClearQuery);
        assert_eq!(
            events,
            vec![
                AppEvent::QueryChanged(String::new()),
                AppEvent::LoadingFinished,
            ]
        );
        assert_eq!(state.loading, LoadingPhase::Idle);
        if let Some(token) = token {
            assert!(state.dispatch(AppCommand::LoadingElapsed(token)).is_empty());
        }
    }

    #[test]
    fn emptying_query_closes_settings_menu() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::SetQuery("ran".to_owned()));
        state.dispatch(AppCommand::ToggleSettingsMenu);
        assert!(state.menu_open());

        state.dispatch(AppCommand::SetQuery("ra".to_owned()));
        assert!(state.menu_open());

        let events = state.dispatch(AppCommand::SetQuery(String::new()));
        assert_eq!(
            events.last(),
            Some(&AppEvent::SettingsMenuChanged(MenuVisibility::Closed))
        );
        assert!(!state.menu_open());
    }

    #[test]
    fn unchanged_query_is_ignored() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::SetQuery("ran".to_owned()));
        let events = state.dispatch(AppCommand::SetQuery("ran".to_owned()));
        assert!(events.is_empty());
    }

    #[test]
    fn whitespace_query_still_simulates_loading() {
        let mut state = AppState::default();
        let events = state.dispatch(AppCommand::SetQuery(" ".to_owned()));
        assert!(loading_token(&events).is_some());
        assert!(state.is_loading());
    }

    #[test]
    fn tab_rotation_skips_hidden_tabs_and_wraps() {
        let mut state = AppState::default();

        assert_eq!(
            state.dispatch(AppCommand::NextTab),
            vec![AppEvent::TabChanged(Tab::Files)]
        );
        state.dispatch(AppCommand::NextTab);
        assert_eq!(state.active_tab, Tab::People);
        state.dispatch(AppCommand::NextTab);
        assert_eq!(state.active_tab, Tab::All);
        state.dispatch(AppCommand::PrevTab);
        assert_eq!(state.active_tab, Tab::People);
    }

    #[test]
    fn hidden_tabs_cannot_be_selected() {
        let mut state = AppState::default();
        assert!(state.dispatch(AppCommand::SelectTab(Tab::Chats)).is_empty());
        assert_eq!(state.active_tab, Tab::All);
    }

    #[test]
    fn hiding_active_tab_falls_back_to_all() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::SelectTab(Tab::People));

        let events = state.dispatch(AppCommand::ToggleFilter(Tab::People));
        assert_eq!(
            events,
            vec![
                AppEvent::FilterToggled {
                    tab: Tab::People,
                    visible: false,
                },
                AppEvent::TabChanged(Tab::All),
            ]
        );
        assert_eq!(state.active_tab, Tab::All);
    }

    #[test]
    fn pointer_down_outside_menu_closes_it() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::ToggleSettingsMenu);
        assert_eq!(state.settings_menu, MenuVisibility::Open);
        let regions = vec![Region::new(40, 2, 5, 1), Region::new(30, 3, 20, 6)];

        let inside = state.dispatch(AppCommand::PointerDown {
            at: Point::new(35, 5),
            menu_regions: regions.clone(),
        });
        assert!(inside.is_empty());
        assert!(state.menu_open());

        let outside = state.dispatch(AppCommand::PointerDown {
            at: Point::new(3, 12),
            menu_regions: regions,
        });
        assert_eq!(
            outside,
            vec![AppEvent::SettingsMenuChanged(MenuVisibility::Closed)]
        );
        assert!(!state.menu_open());
    }

    #[test]
    fn pointer_down_with_closed_menu_is_inert() {
        let mut state = AppState::default();
        let events = state.dispatch(AppCommand::PointerDown {
            at: Point::new(0, 0),
            menu_regions: Vec::new(),
        });
        assert!(events.is_empty());
        assert_eq!(state.settings_menu, MenuVisibility::Closed);
    }

    #[test]
    fn stale_toast_expiry_does_not_hide_newer_toast() {
        let mut state = AppState::default();
        let first = toast_token(&state.dispatch(AppCommand::ShowToast {
            at: Point::new(4, 9),
        }));
        let second = toast_token(&state.dispatch(AppCommand::ShowToast {
            at: Point::new(20, 3),
        }));
        let (Some(first), Some(second)) = (first, second) else {
            panic!("each toast should arm the dismiss timer");
        };

        assert!(state.dispatch(AppCommand::ToastExpired(first)).is_empty());
        assert_eq!(
            state.toast,
            Some(Toast {
                at: Point::new(20, 3)
            })
        );

        assert_eq!(
            state.dispatch(AppCommand::ToastExpired(second)),
            vec![AppEvent::ToastHidden]
        );
        assert_eq!(state.toast, None);
    }
}
