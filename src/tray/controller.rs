//! Tray menu event pump
//!
//! Menu and icon events arrive on global channels owned by `tray-icon`.
//! A dedicated thread blocks on them, translates each into a
//! [`TrayCommand`] and posts it to the UI thread, which owns the timer.
//! The thread never touches timer or window state itself.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, select, Receiver, Sender};
use tray_icon::menu::{MenuEvent, MenuId};
use tray_icon::{MouseButton, MouseButtonState, TrayIconEvent};

use crate::error::ClockError;

/// Stable ids for the tray menu entries
pub mod menu_ids {
    pub const RESET: &str = "reset-clock";
    pub const PAUSE_PLAY: &str = "pause-play";
    pub const EXIT: &str = "exit";
}

/// Actions requested from the tray
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayCommand {
    /// Restart the full countdown
    Reset,
    /// Pause a running countdown or resume a paused one
    TogglePause,
    /// Remove the tray icon, close the window and quit
    Exit,
}

impl TrayCommand {
    /// Menu entries in display order. The first one is the primary action.
    pub const MENU: [(&'static str, &'static str, TrayCommand); 3] = [
        (menu_ids::RESET, "Reset Clock", TrayCommand::Reset),
        (menu_ids::PAUSE_PLAY, "Pause / Play", TrayCommand::TogglePause),
        (menu_ids::EXIT, "Exit", TrayCommand::Exit),
    ];

    /// The action bound to a menu entry
    pub fn from_menu_id(id: &MenuId) -> Option<Self> {
        Self::MENU
            .iter()
            .find(|(menu_id, _, _)| *menu_id == id.0.as_str())
            .map(|(_, _, command)| *command)
    }

    /// A left click on the icon itself triggers the primary action
    pub fn from_icon_event(event: &TrayIconEvent) -> Option<Self> {
        match event {
            TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } => Some(Self::MENU[0].2),
            _ => None,
        }
    }
}

/// Owns the menu pump thread. Stopping is idempotent and also happens on
/// drop.
pub struct TrayController {
    shutdown_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TrayController {
    /// Start pumping the global `tray-icon` event channels. `wake` is
    /// called after every forwarded command so the UI notices it promptly.
    pub fn spawn<W>(commands: Sender<TrayCommand>, wake: W) -> Result<Self, ClockError>
    where
        W: Fn() + Send + 'static,
    {
        Self::spawn_with(
            MenuEvent::receiver().clone(),
            TrayIconEvent::receiver().clone(),
            commands,
            wake,
        )
    }

    /// Start pumping the given event channels
    pub fn spawn_with<W>(
        menu_rx: Receiver<MenuEvent>,
        icon_rx: Receiver<TrayIconEvent>,
        commands: Sender<TrayCommand>,
        wake: W,
    ) -> Result<Self, ClockError>
    where
        W: Fn() + Send + 'static,
    {
        let (shutdown_tx, shutdown_rx) = bounded(1);

        let handle = thread::Builder::new()
            .name("tray-menu".to_string())
            .spawn(move || pump(menu_rx, icon_rx, shutdown_rx, commands, wake))
            .map_err(ClockError::Thread)?;

        tracing::debug!("Tray menu thread started");

        Ok(Self {
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Whether the pump thread is still running
    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Signal the pump thread and wait for it to finish
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            // The thread may already be gone after an Exit click
            let _ = tx.try_send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.thread().id() == thread::current().id() {
                return;
            }
            if handle.join().is_err() {
                tracing::warn!("Tray menu thread panicked");
            }
            tracing::debug!("Tray menu thread stopped");
        }
    }
}

impl Drop for TrayController {
    fn drop(&mut self) {
        self.stop();
    }
}

fn pump<W: Fn()>(
    menu_rx: Receiver<MenuEvent>,
    icon_rx: Receiver<TrayIconEvent>,
    shutdown_rx: Receiver<()>,
    commands: Sender<TrayCommand>,
    wake: W,
) {
    loop {
        // Outer None: a channel closed or shutdown was requested.
        // Inner None: an event with no bound action.
        let received: Option<Option<TrayCommand>> = select! {
            recv(menu_rx) -> event => event.ok().map(|e| TrayCommand::from_menu_id(&e.id)),
            recv(icon_rx) -> event => event.ok().map(|e| TrayCommand::from_icon_event(&e)),
            recv(shutdown_rx) -> _ => None,
        };

        let Some(received) = received else {
            break;
        };
        let Some(command) = received else {
            continue;
        };

        tracing::info!("Tray command: {:?}", command);
        if commands.send(command).is_err() {
            // UI side is gone, nothing left to drive
            break;
        }
        wake();

        if command == TrayCommand::Exit {
            break;
        }
    }
}
