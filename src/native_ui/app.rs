//! Countdown window
//!
//! Owns the timer and everything on screen. Tray commands arrive over a
//! channel and are applied here, so the timer is only ever read and
//! written on the UI thread.

use std::sync::Arc;

use crossbeam_channel::Receiver;
use eframe::egui::{self, FontId, PointerButton, RichText, ViewportCommand};

use super::refresh::{LabelSink, RefreshLoop};
use super::theme::{fitted_window_size, Theme};
use crate::core::{DragController, MonotonicClock, TimerState, REFRESH_PERIOD};
use crate::error::ClockError;
use crate::settings::Settings;
use crate::tray::{
    load_icon_image, tooltip_for, IconImage, TrayCommand, TrayController, TrayHandle, TraySurface,
};

const APP_TITLE: &str = "Countdown Clock";

/// The on-screen label. Dead once shutdown has started.
struct DisplayLabel {
    text: String,
    alive: bool,
}

impl LabelSink for DisplayLabel {
    fn is_alive(&self) -> bool {
        self.alive
    }

    fn set_label(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
        }
    }
}

pub struct CountdownApp {
    timer: TimerState,
    clock: MonotonicClock,
    refresh: RefreshLoop,
    label: DisplayLabel,
    drag: DragController,
    commands: Receiver<TrayCommand>,
    tray: TrayHandle,
    settings: Settings,
    fitted: bool,
}

impl CountdownApp {
    fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        icon: &IconImage,
    ) -> Result<Self, ClockError> {
        let surface = TraySurface::create(icon)?;

        let (commands_tx, commands) = crossbeam_channel::unbounded();
        let ctx = cc.egui_ctx.clone();
        let controller = TrayController::spawn(commands_tx, move || ctx.request_repaint())?;

        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = Theme::BACKGROUND;
        cc.egui_ctx.set_visuals(visuals);

        Ok(Self::with_tray(
            settings,
            commands,
            TrayHandle::new(Some(surface), Some(controller)),
        ))
    }

    fn with_tray(settings: Settings, commands: Receiver<TrayCommand>, tray: TrayHandle) -> Self {
        Self {
            timer: TimerState::new(),
            clock: MonotonicClock::new(),
            refresh: RefreshLoop::new(REFRESH_PERIOD),
            label: DisplayLabel {
                text: String::new(),
                alive: true,
            },
            drag: DragController::new(),
            commands,
            tray,
            settings,
            fitted: false,
        }
    }

    fn font(&self) -> FontId {
        FontId::proportional(self.settings.font_size)
    }

    /// One UI pass
    fn frame(&mut self, ctx: &egui::Context) {
        let now = self.clock.now();

        while let Ok(command) = self.commands.try_recv() {
            self.apply(command, ctx, now);
        }

        if ctx.input(|i| i.viewport().close_requested()) {
            self.shut_down();
        }

        self.handle_pointer(ctx);

        if let Some(delay) = self.refresh.tick(&self.timer, now, &mut self.label) {
            ctx.request_repaint_after(delay);
            self.tray.set_tooltip(&tooltip_for(&self.timer, now));
        }

        self.fit_window(ctx);
        self.draw(ctx);
    }

    fn apply(&mut self, command: TrayCommand, ctx: &egui::Context, now: f64) {
        match command {
            TrayCommand::Reset => {
                self.timer.reset(now);
                tracing::info!("Clock reset");
            }
            TrayCommand::TogglePause => {
                self.timer.toggle_pause(now);
                tracing::info!(
                    running = self.timer.is_running(),
                    remaining = self.timer.remaining(now),
                    "Clock paused/resumed"
                );
            }
            TrayCommand::Exit => self.exit(ctx),
        }
    }

    /// Remove the tray icon and close the window. Safe to call repeatedly.
    fn exit(&mut self, ctx: &egui::Context) {
        if self.shut_down() {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }

    /// Stop the tray and the refresh loop. Returns `true` the first time.
    fn shut_down(&mut self) -> bool {
        self.label.alive = false;
        self.refresh.stop();
        let first = self.tray.stop();
        if first {
            tracing::info!("Shutting down");
        }
        first
    }

    /// Feed primary-button events to the drag controller and move the
    /// window. Only the last move of a pass is sent, since every position
    /// in the pass is relative to the same window origin.
    fn handle_pointer(&mut self, ctx: &egui::Context) {
        let (events, outer) = ctx.input(|i| (i.events.clone(), i.viewport().outer_rect));
        let mut target = None;

        for event in &events {
            match event {
                egui::Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed: true,
                    ..
                } => {
                    self.drag.press(pos.x, pos.y);
                    if outer.is_none() {
                        // Window position unknown (e.g. Wayland): let the
                        // platform move it instead
                        ctx.send_viewport_cmd(ViewportCommand::StartDrag);
                    }
                }
                egui::Event::PointerButton {
                    button: PointerButton::Primary,
                    pressed: false,
                    ..
                } => self.drag.release(),
                egui::Event::PointerMoved(pos) => {
                    if let (Some((dx, dy)), Some(outer)) = (self.drag.motion(pos.x, pos.y), outer) {
                        target = Some(outer.min + egui::vec2(dx, dy));
                    }
                }
                _ => {}
            }
        }

        if let Some(target) = target {
            ctx.send_viewport_cmd(ViewportCommand::OuterPosition(target));
        }
    }

    /// Size the window to the label once, and never let it shrink below
    /// that size afterwards
    fn fit_window(&mut self, ctx: &egui::Context) {
        if self.fitted {
            return;
        }

        let text = if self.label.text.is_empty() {
            Theme::MEASURE_FALLBACK.to_string()
        } else {
            self.label.text.clone()
        };
        let font = self.font();
        let text_size = ctx.fonts(|fonts| fonts.layout_no_wrap(text, font, Theme::TEXT).size());
        let size = fitted_window_size(text_size, self.settings.padding);

        ctx.send_viewport_cmd(ViewportCommand::InnerSize(size));
        ctx.send_viewport_cmd(ViewportCommand::MinInnerSize(size));
        self.fitted = true;
        tracing::debug!("Window fitted to {}x{}", size.x, size.y);
    }

    fn draw(&self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(Theme::BACKGROUND)
                    .inner_margin(self.settings.padding),
            )
            .show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    let text = RichText::new(&self.label.text)
                        .font(self.font())
                        .color(Theme::TEXT);
                    ui.add(egui::Label::new(text).selectable(false));
                });
            });
    }
}

impl eframe::App for CountdownApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx);
    }
}

/// Run the clock until Exit is chosen from the tray
pub fn run(settings: Settings) -> Result<(), ClockError> {
    // A missing icon is fatal before any window appears
    let icon = load_icon_image(&settings.icon_path)?;
    tracing::info!(
        "Starting countdown clock (icon {}, font size {})",
        settings.icon_path.display(),
        settings.font_size
    );

    let viewport = egui::ViewportBuilder::default()
        .with_title(APP_TITLE)
        .with_decorations(false)
        .with_always_on_top()
        .with_transparent(false)
        .with_icon(Arc::new(icon.to_icon_data()));

    let options = eframe::NativeOptions {
        viewport,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            let app = CountdownApp::new(cc, settings, &icon)?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| ClockError::Gui(e.to_string()))?;

    tracing::info!("Countdown clock exited");
    Ok(())
}
