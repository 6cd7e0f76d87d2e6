//! GTK host for the tray on Linux
//!
//! The Linux tray backend is built on GTK, which has to be initialised on
//! the thread that creates the icon and needs a main loop running there.
//! eframe provides neither, so the icon lives on a dedicated `tray-gtk`
//! thread. The UI reaches it through a channel drained by a GLib timer.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, unbounded, Receiver, Sender, TryRecvError};
use gtk::glib;

use super::manager::TOOLTIP;
use super::{IconImage, TrayManager};
use crate::error::ClockError;

/// How often the GTK thread picks up requests from the UI
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, PartialEq, Eq)]
enum HostRequest {
    Tooltip(String),
    Stop,
}

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

/// Tray icon owned by a GTK thread
pub struct GtkTrayHost {
    requests: Sender<HostRequest>,
    handle: Option<JoinHandle<()>>,
    tooltip: String,
}

impl GtkTrayHost {
    /// Start the GTK thread and build the tray on it. Returns once the icon
    /// exists, or with the error that kept it from being created.
    pub fn create(icon: &IconImage) -> Result<Self, ClockError> {
        let icon = icon.clone();
        let (requests, requests_rx) = unbounded();
        let (ready_tx, ready_rx) = bounded(1);

        let handle = thread::Builder::new()
            .name("tray-gtk".to_string())
            .spawn(move || host(icon, requests_rx, ready_tx))
            .map_err(ClockError::Thread)?;

        let started = ready_rx.recv().unwrap_or_else(|_| {
            Err(ClockError::TrayHost(
                "tray thread exited during startup".to_string(),
            ))
        });
        if let Err(e) = started {
            if handle.join().is_err() {
                tracing::warn!("GTK tray thread panicked");
            }
            return Err(e);
        }

        tracing::debug!("GTK tray thread started");
        Ok(Self {
            requests,
            handle: Some(handle),
            tooltip: TOOLTIP.to_string(),
        })
    }

    pub fn set_tooltip(&mut self, tooltip: &str) {
        if self.tooltip == tooltip {
            return;
        }
        self.tooltip = tooltip.to_string();
        if self
            .requests
            .send(HostRequest::Tooltip(self.tooltip.clone()))
            .is_err()
        {
            tracing::debug!("GTK tray thread gone, tooltip not updated");
        }
    }

    /// Remove the icon and end the GTK main loop
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        if self.requests.send(HostRequest::Stop).is_err() {
            tracing::debug!("GTK tray thread already gone");
        }
        if handle.join().is_err() {
            tracing::warn!("GTK tray thread panicked");
        }
        tracing::debug!("GTK tray thread stopped");
    }
}

impl Drop for GtkTrayHost {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn host(icon: IconImage, requests: Receiver<HostRequest>, ready: Sender<Result<(), ClockError>>) {
    if let Err(e) = gtk::init() {
        let _ = ready.send(Err(ClockError::TrayHost(format!(
            "GTK initialisation failed: {}",
            e
        ))));
        return;
    }

    let mut manager = match TrayManager::create(&icon) {
        Ok(manager) => Some(manager),
        Err(e) => {
            let _ = ready.send(Err(e));
            return;
        }
    };
    let _ = ready.send(Ok(()));

    glib::timeout_add_local(POLL_INTERVAL, move || {
        let step = drain(&requests, |tooltip| {
            if let Some(manager) = manager.as_mut() {
                manager.set_tooltip(tooltip);
            }
        });
        match step {
            Step::Continue => glib::ControlFlow::Continue,
            Step::Quit => {
                if let Some(manager) = manager.take() {
                    manager.stop();
                }
                gtk::main_quit();
                glib::ControlFlow::Break
            }
        }
    });

    gtk::main();
}

/// Apply pending requests. Only the newest tooltip is applied. A stop
/// request or a vanished UI ends the loop.
fn drain<F: FnMut(&str)>(requests: &Receiver<HostRequest>, mut set_tooltip: F) -> Step {
    let mut latest = None;
    let step = loop {
        match requests.try_recv() {
            Ok(HostRequest::Tooltip(tooltip)) => latest = Some(tooltip),
            Ok(HostRequest::Stop) | Err(TryRecvError::Disconnected) => break Step::Quit,
            Err(TryRecvError::Empty) => break Step::Continue,
        }
    };
    if step == Step::Continue {
        if let Some(tooltip) = latest {
            set_tooltip(&tooltip);
        }
    }
    step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_applies_latest_tooltip() {
        let (tx, rx) = unbounded();
        tx.send(HostRequest::Tooltip("Countdown Clock - 2:59".to_string()))
            .unwrap();
        tx.send(HostRequest::Tooltip("Countdown Clock - 2:58".to_string()))
            .unwrap();

        let mut applied = Vec::new();
        assert_eq!(drain(&rx, |t| applied.push(t.to_string())), Step::Continue);
        assert_eq!(applied, vec!["Countdown Clock - 2:58".to_string()]);

        // Nothing pending: nothing applied
        assert_eq!(drain(&rx, |t| applied.push(t.to_string())), Step::Continue);
        assert_eq!(applied.len(), 1);
    }

    #[test]
    fn test_drain_quits_on_stop() {
        let (tx, rx) = unbounded();
        tx.send(HostRequest::Tooltip("ignored".to_string())).unwrap();
        tx.send(HostRequest::Stop).unwrap();

        let mut applied = 0;
        assert_eq!(drain(&rx, |_| applied += 1), Step::Quit);
        assert_eq!(applied, 0);
    }

    #[test]
    fn test_drain_quits_when_ui_is_gone() {
        let (tx, rx) = unbounded::<HostRequest>();
        drop(tx);
        assert_eq!(drain(&rx, |_| {}), Step::Quit);
    }
}
