//! Header dropdown state machine.
//!
//! The controller owns which top-level entry is open, which sub-item is
//! highlighted, and where the panel is in its open/reveal cycle. It never
//! touches a clock: every transition returns the timer work the caller must
//! carry out (`MenuCommand`), and timer completions come back tagged with
//! the token they were issued with. A completion whose token is no longer
//! current is ignored, so a superseded timer can never mutate state.
//!
//! ```text
//! Closed --enter(i)--> Opening --frame settled--> Open
//!    ^                    |  ^                      |
//!    |                  leave |enter/panel        leave
//!    |                    v  |                      v
//!    +----close elapsed--- Closing <----------------+
//! ```

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuPhase {
    #[default]
    Closed,
    /// Panel is expanding; content not revealed yet.
    Opening,
    Open,
    /// Pointer left; a close timer is pending and re-entry can still cancel it.
    Closing,
}

/// Timer work requested by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    ScheduleClose { token: u64, delay_ms: u64 },
    CancelClose,
    /// Report back via `frame_settled(token)` once the next frame has rendered.
    RequestFrame { token: u64 },
    CancelFrame,
}

/// Observable state, cheap to copy into a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub open_index: Option<usize>,
    pub active_item: usize,
    pub phase: MenuPhase,
    /// Content reveal flag; flips to true one frame after opening.
    pub revealed: bool,
    /// Bumped on every open so the reveal animation restarts even when the
    /// same index reopens.
    pub reveal_token: u64,
}

impl MenuState {
    pub fn is_open(&self, index: usize) -> bool {
        self.open_index == Some(index) && self.phase != MenuPhase::Closed
    }
}

#[derive(Debug, Clone)]
pub struct MenuController {
    state: MenuState,
    close_delay_ms: u64,
    pending_close: Option<u64>,
    pending_frame: Option<u64>,
    next_token: u64,
    disposed: bool,
}

impl MenuController {
    pub fn new(close_delay_ms: u64) -> Self {
        Self {
            state: MenuState::default(),
            close_delay_ms,
            pending_close: None,
            pending_frame: None,
            next_token: 0,
            disposed: false,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Pointer entered top-level entry `index`.
    ///
    /// Every enter on a dropdown entry restarts the open cycle, even when
    /// `index` is already open: a pending close is cancelled, the highlight
    /// returns to the first item and the reveal runs again. Entries without
    /// a dropdown are ignored; the leave from the previous trigger already
    /// scheduled the close.
    pub fn pointer_enter_trigger(&mut self, index: usize, has_dropdown: bool) -> Vec<MenuCommand> {
        if self.disposed || !has_dropdown {
            return Vec::new();
        }

        let mut commands = self.cancel_close();
        if self.pending_frame.take().is_some() {
            commands.push(MenuCommand::CancelFrame);
        }
        let token = self.issue_token();
        self.pending_frame = Some(token);
        self.state = MenuState {
            open_index: Some(index),
            active_item: 0,
            phase: MenuPhase::Opening,
            revealed: false,
            reveal_token: self.state.reveal_token.wrapping_add(1),
        };
        commands.push(MenuCommand::RequestFrame { token });
        debug!(index, reveal = self.state.reveal_token, "menu opening");
        commands
    }

    /// Pointer re-entered the open panel.
    pub fn pointer_enter_panel(&mut self) -> Vec<MenuCommand> {
        if self.disposed || self.state.open_index.is_none() {
            return Vec::new();
        }
        let commands = self.cancel_close();
        self.settle_after_cancel();
        commands
    }

    /// Pointer left a trigger or the panel.
    pub fn pointer_leave(&mut self) -> Vec<MenuCommand> {
        if self.disposed || self.state.open_index.is_none() {
            return Vec::new();
        }
        let mut commands = self.cancel_close();
        let token = self.issue_token();
        self.pending_close = Some(token);
        self.state.phase = MenuPhase::Closing;
        commands.push(MenuCommand::ScheduleClose {
            token,
            delay_ms: self.close_delay_ms,
        });
        commands
    }

    /// Highlight sub-item `index` of the open dropdown.
    pub fn hover_item(&mut self, index: usize) {
        if self.disposed || self.state.open_index.is_none() {
            return;
        }
        self.state.active_item = index;
    }

    /// The frame requested with `token` has rendered.
    pub fn frame_settled(&mut self, token: u64) {
        if self.disposed || self.pending_frame != Some(token) {
            return;
        }
        self.pending_frame = None;
        self.state.revealed = true;
        if self.state.phase == MenuPhase::Opening {
            self.state.phase = MenuPhase::Open;
        }
    }

    /// The close timer issued with `token` fired.
    pub fn close_elapsed(&mut self, token: u64) -> Vec<MenuCommand> {
        if self.disposed || self.pending_close != Some(token) {
            return Vec::new();
        }
        self.pending_close = None;
        let mut commands = Vec::new();
        if self.pending_frame.take().is_some() {
            commands.push(MenuCommand::CancelFrame);
        }
        debug!(index = ?self.state.open_index, "menu closed");
        self.state = MenuState {
            reveal_token: self.state.reveal_token,
            ..MenuState::default()
        };
        commands
    }

    /// Tear down: cancel everything pending and ignore all later events.
    pub fn dispose(&mut self) -> Vec<MenuCommand> {
        if self.disposed {
            return Vec::new();
        }
        self.disposed = true;
        let mut commands = self.cancel_close();
        if self.pending_frame.take().is_some() {
            commands.push(MenuCommand::CancelFrame);
        }
        commands
    }

    fn cancel_close(&mut self) -> Vec<MenuCommand> {
        match self.pending_close.take() {
            Some(_) => vec![MenuCommand::CancelClose],
            None => Vec::new(),
        }
    }

    fn settle_after_cancel(&mut self) {
        if self.state.phase == MenuPhase::Closing {
            self.state.phase = if self.state.revealed {
                MenuPhase::Open
            } else {
                MenuPhase::Opening
            };
        }
    }

    fn issue_token(&mut self) -> u64 {
        self.next_token = self.next_token.wrapping_add(1);
        self.next_token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_token(commands: &[MenuCommand]) -> u64 {
        commands
            .iter()
            .find_map(|c| match c {
                MenuCommand::RequestFrame { token } => Some(*token),
                _ => None,
            })
            .expect("frame requested")
    }

    fn close_token(commands: &[MenuCommand]) -> u64 {
        commands
            .iter()
            .find_map(|c| match c {
                MenuCommand::ScheduleClose { token, .. } => Some(*token),
                _ => None,
            })
            .expect("close scheduled")
    }

    #[test]
    fn opens_through_reveal_frame() {
        let mut menu = MenuController::new(140);
        let cmds = menu.pointer_enter_trigger(0, true);
        assert_eq!(menu.state().phase, MenuPhase::Opening);
        assert!(!menu.state().revealed);

        menu.frame_settled(frame_token(&cmds));
        assert_eq!(menu.state().phase, MenuPhase::Open);
        assert!(menu.state().revealed);
        assert!(menu.state().is_open(0));
    }

    #[test]
    fn leave_then_timer_closes() {
        let mut menu = MenuController::new(140);
        let cmds = menu.pointer_enter_trigger(2, true);
        menu.frame_settled(frame_token(&cmds));
        menu.hover_item(3);

        let cmds = menu.pointer_leave();
        assert!(cmds.contains(&MenuCommand::ScheduleClose {
            token: close_token(&cmds),
            delay_ms: 140
        }));
        assert_eq!(menu.state().phase, MenuPhase::Closing);

        menu.close_elapsed(close_token(&cmds));
        let state = menu.state();
        assert_eq!(state.phase, MenuPhase::Closed);
        assert_eq!(state.open_index, None);
        assert_eq!(state.active_item, 0);
        assert!(!state.revealed);
    }

    #[test]
    fn reentering_panel_cancels_close() {
        let mut menu = MenuController::new(140);
        let cmds = menu.pointer_enter_trigger(0, true);
        menu.frame_settled(frame_token(&cmds));
        let leave = menu.pointer_leave();

        let cmds = menu.pointer_enter_panel();
        assert_eq!(cmds, vec![MenuCommand::CancelClose]);
        assert_eq!(menu.state().phase, MenuPhase::Open);

        // The cancelled timer firing late is ignored.
        menu.close_elapsed(close_token(&leave));
        assert_eq!(menu.state().phase, MenuPhase::Open);
    }

    #[test]
    fn switching_entries_never_passes_through_closed() {
        let mut menu = MenuController::new(140);
        let first = menu.pointer_enter_trigger(0, true);
        menu.frame_settled(frame_token(&first));
        menu.pointer_leave();
        assert_ne!(menu.state().phase, MenuPhase::Closed);

        let second = menu.pointer_enter_trigger(1, true);
        assert_eq!(second[0], MenuCommand::CancelClose);
        let state = menu.state();
        assert_eq!(state.open_index, Some(1));
        assert_eq!(state.phase, MenuPhase::Opening);
        assert!(!state.revealed);
    }

    #[test]
    fn every_open_resets_active_item_and_bumps_reveal() {
        let mut menu = MenuController::new(140);
        let cmds = menu.pointer_enter_trigger(0, true);
        menu.frame_settled(frame_token(&cmds));
        menu.hover_item(4);
        assert_eq!(menu.state().active_item, 4);
        let before = menu.state().reveal_token;

        menu.pointer_enter_trigger(1, true);
        assert_eq!(menu.state().active_item, 0);
        assert_eq!(menu.state().reveal_token, before + 1);

        let leave = menu.pointer_leave();
        menu.close_elapsed(close_token(&leave));
        menu.pointer_enter_trigger(1, true);
        assert_eq!(menu.state().active_item, 0);
        assert_eq!(menu.state().reveal_token, before + 2);
    }

    #[test]
    fn reentering_the_open_trigger_restarts_the_reveal() {
        let mut menu = MenuController::new(140);
        let open = menu.pointer_enter_trigger(0, true);
        menu.frame_settled(frame_token(&open));
        menu.hover_item(2);
        let before = menu.state().reveal_token;
        let leave = menu.pointer_leave();

        let again = menu.pointer_enter_trigger(0, true);
        assert_eq!(again[0], MenuCommand::CancelClose);
        let state = menu.state();
        assert_eq!(state.open_index, Some(0));
        assert_eq!(state.active_item, 0);
        assert_eq!(state.reveal_token, before + 1);
        assert_eq!(state.phase, MenuPhase::Opening);
        assert!(!state.revealed);

        menu.close_elapsed(close_token(&leave));
        assert!(menu.state().is_open(0));
        menu.frame_settled(frame_token(&again));
        assert_eq!(menu.state().phase, MenuPhase::Open);
        assert!(menu.state().revealed);
    }

    #[test]
    fn stale_frame_from_previous_open_is_ignored() {
        let mut menu = MenuController::new(140);
        let first = menu.pointer_enter_trigger(0, true);
        let second = menu.pointer_enter_trigger(1, true);
        assert!(second.contains(&MenuCommand::CancelFrame));

        menu.frame_settled(frame_token(&first));
        assert_eq!(menu.state().phase, MenuPhase::Opening);
        menu.frame_settled(frame_token(&second));
        assert_eq!(menu.state().phase, MenuPhase::Open);
    }

    #[test]
    fn leaving_during_opening_then_returning_requests_a_fresh_frame() {
        let mut menu = MenuController::new(140);
        let open = menu.pointer_enter_trigger(0, true);
        menu.pointer_leave();
        let again = menu.pointer_enter_trigger(0, true);
        assert!(again.contains(&MenuCommand::CancelFrame));
        assert_eq!(menu.state().phase, MenuPhase::Opening);

        menu.frame_settled(frame_token(&open));
        assert_eq!(menu.state().phase, MenuPhase::Opening);
        menu.frame_settled(frame_token(&again));
        assert_eq!(menu.state().phase, MenuPhase::Open);
    }

    #[test]
    fn reentering_the_panel_keeps_the_highlight() {
        let mut menu = MenuController::new(140);
        let open = menu.pointer_enter_trigger(0, true);
        menu.frame_settled(frame_token(&open));
        menu.hover_item(2);
        let before = menu.state().reveal_token;
        menu.pointer_leave();

        menu.pointer_enter_panel();
        let state = menu.state();
        assert_eq!(state.active_item, 2);
        assert_eq!(state.reveal_token, before);
        assert!(state.revealed);
    }

    #[test]
    fn a_second_leave_supersedes_the_first_timer() {
        let mut menu = MenuController::new(140);
        let open = menu.pointer_enter_trigger(0, true);
        menu.frame_settled(frame_token(&open));
        let first = menu.pointer_leave();
        let second = menu.pointer_leave();
        assert_eq!(second[0], MenuCommand::CancelClose);

        menu.close_elapsed(close_token(&first));
        assert_eq!(menu.state().phase, MenuPhase::Closing);
        menu.close_elapsed(close_token(&second));
        assert_eq!(menu.state().phase, MenuPhase::Closed);
    }

    #[test]
    fn plain_entries_and_closed_menu_ignore_events() {
        let mut menu = MenuController::new(140);
        assert!(menu.pointer_enter_trigger(0, false).is_empty());
        assert!(menu.pointer_leave().is_empty());
        assert!(menu.pointer_enter_panel().is_empty());
        menu.hover_item(2);
        assert_eq!(menu.state(), MenuState::default());
    }

    #[test]
    fn dispose_cancels_pending_work_and_freezes_state() {
        let mut menu = MenuController::new(140);
        let open = menu.pointer_enter_trigger(0, true);
        let leave = menu.pointer_leave();

        let cmds = menu.dispose();
        assert!(cmds.contains(&MenuCommand::CancelClose));
        assert!(cmds.contains(&MenuCommand::CancelFrame));

        let frozen = menu.state();
        menu.frame_settled(frame_token(&open));
        assert!(menu.close_elapsed(close_token(&leave)).is_empty());
        assert!(menu.pointer_enter_trigger(1, true).is_empty());
        assert_eq!(menu.state(), frozen);
        assert!(menu.dispose().is_empty());
    }
}
