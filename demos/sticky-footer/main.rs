//! Sticky-footer scroll view demo.
//!
//! Scroll a long journal entry through the view and watch the footer rise
//! into place: the backdrop hangs below the screen by the remaining scroll
//! distance and settles flush when you reach the end. An overlay block sits
//! centered on the backdrop's safe zone, so it arrives with the footer.
//!
//! Run with: cargo run
//! Keys: j/k or arrows to scroll, f/b to page, g/G to jump, q to quit.

use bubbletea_rs::{quit, Cmd, KeyMsg, Model, Msg, Program, WindowSizeMsg};
use bubbletea_stickyfooter::geometry::{BACKGROUND_ASPECT_RATIO, SAFE_ZONE_HEIGHT_RATIO};
use bubbletea_stickyfooter::key::KeyMap as _;
use bubbletea_stickyfooter::prelude::*;
use lipgloss_extras::prelude::*;

/// Rows reserved below the scroll view for the status bar.
const STATUS_ROWS: usize = 2;

/// Overlay block size on the safe zone, in cells.
const OVERLAY_WIDTH: usize = 6;
const OVERLAY_HEIGHT: usize = 3;

/// Backdrop artwork for the background region: a dotted sky over a filled
/// footer band, with an overlay block centered on the safe zone.
struct Backdrop;

impl Content for Backdrop {
    fn lines(&self, width: usize) -> Vec<String> {
        let rows = (width as f64 * BACKGROUND_ASPECT_RATIO).ceil() as usize;
        let safe_rows = (rows as f64 * SAFE_ZONE_HEIGHT_RATIO).round() as usize;
        let sky_rows = rows.saturating_sub(safe_rows);

        let overlay_top = sky_rows + safe_rows.saturating_sub(OVERLAY_HEIGHT) / 2;
        let overlay_left = width.saturating_sub(OVERLAY_WIDTH) / 2;

        (0..rows)
            .map(|row| {
                (0..width)
                    .map(|col| {
                        if row >= overlay_top
                            && row < overlay_top + OVERLAY_HEIGHT
                            && col >= overlay_left
                            && col < overlay_left + OVERLAY_WIDTH
                        {
                            '█'
                        } else if row >= sky_rows {
                            '░'
                        } else if (row * 7 + col * 3) % 29 == 0 {
                            '·'
                        } else {
                            ' '
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

/// The journal entry scrolled through the content column.
fn document() -> String {
    let mut lines = vec![
        "NORTH RIDGE TRAVERSE".to_string(),
        "".to_string(),
        "Day one. We left the trailhead before light, the valley still".to_string(),
        "holding last night's cold. The first hours are all switchbacks".to_string(),
        "through old pine, and the pack straps find every bruise from".to_string(),
        "the drive up.".to_string(),
        "".to_string(),
    ];
    for day in 2..=9 {
        lines.push(format!("Day {}.", day));
        lines.push("The ridge narrows here and the wind arrives sideways.".to_string());
        lines.push("We moved slowly, checking anchors twice, trading leads".to_string());
        lines.push("at each notch. Water is down to two bottles between us.".to_string());
        lines.push("Camp is a shelf barely wider than the tent, but the view".to_string());
        lines.push("runs a hundred miles in both directions.".to_string());
        lines.push("".to_string());
    }
    lines.push("Last day. Down the scree to the lake, boots full of grit,".to_string());
    lines.push("and the footer of this journal finally earned. Scroll to".to_string());
    lines.push("the end to see the safe zone settle into place.".to_string());
    lines.join("\n")
}

struct App {
    footer: StickyFooter,
    quit_binding: Binding,
    status_style: Style,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let mut footer = sticky_footer_new(80, 22)
            .with_insets(Insets::new(1.0, 2.0, 1.0, 2.0));
        footer.set_content(document());
        footer.set_background(Backdrop);

        let app = App {
            footer,
            quit_binding: Binding::new(vec!["q", "esc", "ctrl+c"]).with_help("q", "quit"),
            status_style: Style::new().foreground(Color::from("#874BFD")),
        };
        (app, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.quit_binding.matches(key_msg) {
                return Some(quit());
            }
        }

        // Reserve the status rows ourselves instead of auto-sizing.
        if let Some(size_msg) = msg.downcast_ref::<WindowSizeMsg>() {
            self.footer.set_size(
                size_msg.width as usize,
                (size_msg.height as usize).saturating_sub(STATUS_ROWS),
            );
            return None;
        }

        self.footer.update(msg)
    }

    fn view(&self) -> String {
        let reveal = self.footer.background_bottom_offset();
        let position = format!(
            "scrolled {:>3.0}%  footer {}",
            self.footer.scroll_percent() * 100.0,
            if reveal <= f64::EPSILON {
                "in place".to_string()
            } else {
                format!("{:.0} rows below", reveal)
            },
        );

        let mut help: Vec<String> = self
            .footer
            .keymap
            .short_help()
            .iter()
            .map(|binding| format!("{} {}", binding.help().key, binding.help().desc))
            .collect();
        help.push(format!(
            "{} {}",
            self.quit_binding.help().key,
            self.quit_binding.help().desc
        ));

        format!(
            "{}\n{}\n{}",
            self.footer.view(),
            self.status_style.render(&position),
            self.status_style.render(&help.join(" • ")),
        )
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<App>::builder().build()?;
    program.run().await?;
    Ok(())
}
