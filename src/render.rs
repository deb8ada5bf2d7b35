//! Canvas 2D drawing. Reads mixer state only; never mutates it.

use crate::constants::*;
use crate::input::MouseState;
use mixer_core::{Mixer, SelectorRegion, Source};
use std::f64::consts::TAU;
use web_sys as web;

type Ctx = web::CanvasRenderingContext2d;

#[inline]
fn rgba(c: [u8; 3], a: f64) -> String {
    format!("rgba({},{},{},{:.3})", c[0], c[1], c[2], a)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn circle(ctx: &Ctx, x: f64, y: f64, r: f64) {
    ctx.begin_path();
    _ = ctx.arc(x, y, r.max(0.0), 0.0, TAU);
}

fn rounded_rect(ctx: &Ctx, x: f64, y: f64, w: f64, h: f64, r: f64) {
    let r = r.min(w / 2.0).min(h / 2.0);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    _ = ctx.arc_to(x + w, y, x + w, y + h, r);
    _ = ctx.arc_to(x + w, y + h, x, y + h, r);
    _ = ctx.arc_to(x, y + h, x, y, r);
    _ = ctx.arc_to(x, y, x + w, y, r);
    ctx.close_path();
}

fn text(ctx: &Ctx, s: &str, x: f64, y: f64, font: &str, align: &str, baseline: &str) {
    ctx.set_font(font);
    ctx.set_text_align(align);
    ctx.set_text_baseline(baseline);
    _ = ctx.fill_text(s, x, y);
}

pub struct DrawState<'a> {
    pub mixer: &'a Mixer,
    pub mouse: MouseState,
    pub show_help: bool,
}

pub fn draw(ctx: &Ctx, st: &DrawState) {
    let vp = st.mixer.viewport;
    let (w, h) = (vp.width as f64, vp.height as f64);

    ctx.set_fill_style_str("#000");
    ctx.fill_rect(0.0, 0.0, w, h);

    ctx.save();
    _ = ctx.translate(w / 2.0, h / 2.0);
    draw_grid(ctx, st.mixer);
    for s in &st.mixer.sources {
        draw_source(ctx, st.mixer, s);
    }
    ctx.restore();

    draw_selectors(ctx, st.mixer);
    if st.show_help {
        draw_help(ctx);
    }
    if let Some(s) = st.mixer.active_source() {
        draw_selected_info(ctx, st.mixer, s);
    }
    draw_balance_button(ctx, st);
}

fn draw_grid(ctx: &Ctx, mixer: &Mixer) {
    let inner = mixer.config.inner_radius as f64;
    let outer = mixer.config.outer_radius as f64;

    ctx.set_line_width(1.0);
    for i in 0..=GRID_RINGS {
        let t = i as f64 / GRID_RINGS as f64;
        let alpha = lerp(GRID_RING_ALPHA_NEAR, GRID_RING_ALPHA_FAR, t);
        ctx.set_stroke_style_str(&rgba([40, 40, 40], alpha));
        circle(ctx, 0.0, 0.0, lerp(inner, outer, t));
        ctx.stroke();
    }

    ctx.set_stroke_style_str(&rgba([40, 40, 40], GRID_SPOKE_ALPHA));
    for i in 0..GRID_SPOKES {
        let angle = TAU * i as f64 / GRID_SPOKES as f64;
        let (sin, cos) = angle.sin_cos();
        ctx.begin_path();
        ctx.move_to(cos * inner, sin * inner);
        ctx.line_to(cos * outer, sin * outer);
        ctx.stroke();
    }

    // Listener
    ctx.set_fill_style_str(&rgba([255, 255, 0], 100.0 / 255.0));
    circle(ctx, 0.0, 0.0, LISTENER_DOT_RADIUS);
    ctx.fill();
    ctx.set_stroke_style_str("rgb(255,255,0)");
    ctx.set_line_width(2.0);
    circle(ctx, 0.0, 0.0, LISTENER_RING_RADIUS);
    ctx.stroke();

    // Distance markers along the diagonal
    ctx.set_fill_style_str("rgb(150,150,150)");
    let (sin, cos) = GRID_LABEL_ANGLE.sin_cos();
    for i in 1..=GRID_RINGS {
        let r = lerp(inner, outer, i as f64 / GRID_RINGS as f64);
        text(
            ctx,
            &format!("{}", r.round()),
            cos * r,
            sin * r,
            FONT_SMALL,
            "center",
            "middle",
        );
    }
}

fn draw_source(ctx: &Ctx, mixer: &Mixer, s: &Source) {
    let base = mixer.config.base_radius as f64;
    let r = s.current_radius(mixer.config.base_radius) as f64;
    let (x, y) = (s.position.x as f64, s.position.y as f64);
    let volume = s.manual_volume as f64;

    // Shadow
    ctx.set_fill_style_str(&rgba([0, 0, 0], 100.0 / 255.0));
    circle(ctx, x + SHADOW_OFFSET, y + SHADOW_OFFSET, r * SHADOW_SCALE);
    ctx.fill();

    // Influence rings
    ctx.set_line_width(1.0);
    ctx.set_stroke_style_str(&rgba(s.color_rgb, 20.0 / 255.0));
    let influence = base * INFLUENCE_SCALE * volume;
    for i in 0..INFLUENCE_RINGS {
        circle(ctx, x, y, influence * (1.0 - i as f64 / 4.0));
        ctx.stroke();
    }

    // Body
    let alpha = if s.is_active() {
        BODY_ALPHA_ACTIVE
    } else {
        BODY_ALPHA_IDLE
    };
    ctx.set_fill_style_str(&rgba(s.color_rgb, alpha));
    circle(ctx, x, y, r);
    ctx.fill();

    // Labels
    ctx.set_fill_style_str("#fff");
    let sound_name = mixer.catalog.name(s.sound).unwrap_or("(missing)");
    text(
        ctx,
        sound_name,
        x,
        y - r - LABEL_NAME_OFFSET,
        FONT_LABEL,
        "center",
        "middle",
    );
    text(
        ctx,
        &format!("Vol: {:.2}", volume),
        x,
        y - r - LABEL_VOLUME_OFFSET,
        FONT_SMALL,
        "center",
        "middle",
    );

    // Resize handle while the source owns the pointer
    if s.is_active() {
        ctx.set_stroke_style_str("rgb(255,255,0)");
        ctx.set_line_width(2.0);
        ctx.begin_path();
        ctx.move_to(x, y);
        ctx.line_to(x + r, y);
        ctx.stroke();
        ctx.set_fill_style_str("rgb(255,255,0)");
        circle(ctx, x + r, y, HANDLE_DRAW_RADIUS);
        ctx.fill();
    }
}

fn draw_selector_box(ctx: &Ctx, s: &Source, label: &str, x: f64, y: f64, w: f64, h: f64) {
    ctx.set_fill_style_str(&rgba([40, 40, 40], 240.0 / 255.0));
    ctx.set_stroke_style_str(&rgba(s.color_rgb, 1.0));
    ctx.set_line_width(2.0);
    rounded_rect(ctx, x, y, w, h, CORNER_RADIUS_SELECTOR);
    ctx.fill();
    ctx.stroke();
    ctx.set_fill_style_str("#fff");
    text(ctx, label, x + w / 2.0, y + h / 2.0, FONT_LABEL, "center", "middle");
}

fn draw_selectors(ctx: &Ctx, mixer: &Mixer) {
    let center = mixer.viewport.center();
    for s in &mixer.sources {
        let label = mixer.catalog.name(s.sound).unwrap_or("(missing)");
        match mixer.selector_region(s.id) {
            Some(SelectorRegion::Screen(rect)) => draw_selector_box(
                ctx,
                s,
                label,
                rect.x as f64,
                rect.y as f64,
                rect.w as f64,
                rect.h as f64,
            ),
            Some(SelectorRegion::Rotated {
                center: c,
                size,
                rotation,
            }) => {
                let (w, h) = (size.x as f64, size.y as f64);
                ctx.save();
                _ = ctx.translate((center.x + c.x) as f64, (center.y + c.y) as f64);
                _ = ctx.rotate(rotation as f64);
                draw_selector_box(ctx, s, label, -w / 2.0, -h / 2.0, w, h);
                ctx.restore();
            }
            None => {}
        }
    }
}

fn draw_help(ctx: &Ctx) {
    let [x, y, w, h] = HELP_PANEL;
    ctx.set_fill_style_str(&rgba([0, 0, 0], 200.0 / 255.0));
    ctx.fill_rect(x, y, w, h);
    ctx.set_fill_style_str("#fff");
    for (i, line) in HELP_LINES.iter().enumerate() {
        text(
            ctx,
            line,
            x + 10.0,
            y + 10.0 + i as f64 * 18.0,
            FONT_LABEL,
            "left",
            "top",
        );
    }
}

fn draw_selected_info(ctx: &Ctx, mixer: &Mixer, s: &Source) {
    let bottom = mixer.viewport.height as f64 - mixer_core::SELECTOR_HEIGHT as f64 - 10.0;
    let top = bottom - INFO_PANEL_HEIGHT;
    ctx.set_fill_style_str(&rgba([0, 0, 0], 200.0 / 255.0));
    ctx.fill_rect(10.0, top, INFO_PANEL_WIDTH, INFO_PANEL_HEIGHT);
    ctx.set_fill_style_str("#fff");
    text(
        ctx,
        &format!("Selected: {}", s.name),
        20.0,
        top + 8.0,
        FONT_LABEL,
        "left",
        "top",
    );
    text(
        ctx,
        &format!(
            "X={:.1}, Y={:.1} / Volume: {:.2}",
            s.position.x, s.position.y, s.manual_volume
        ),
        20.0,
        top + 28.0,
        FONT_LABEL,
        "left",
        "top",
    );
}

fn draw_balance_button(ctx: &Ctx, st: &DrawState) {
    let rect = st.mixer.viewport.balance_button();
    let hovered = st.mouse.inside && rect.contains(st.mouse.pos());
    let on = st.mixer.auto_balance();
    let (fill, stroke) = match (on, hovered) {
        (true, true) => (rgba([100, 200, 100], 220.0 / 255.0), "rgb(120,255,120)"),
        (true, false) => (rgba([100, 200, 100], 180.0 / 255.0), "rgb(120,255,120)"),
        (false, true) => (rgba([80, 80, 80], 220.0 / 255.0), "rgb(100,100,100)"),
        (false, false) => (rgba([60, 60, 60], 180.0 / 255.0), "rgb(100,100,100)"),
    };
    let (x, y, w, h) = (rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    ctx.set_fill_style_str(&fill);
    ctx.set_stroke_style_str(stroke);
    ctx.set_line_width(2.0);
    rounded_rect(ctx, x, y, w, h, CORNER_RADIUS_BUTTON);
    ctx.fill();
    ctx.stroke();
    ctx.set_fill_style_str("#fff");
    let label = if on { "Auto balance: ON" } else { "Auto balance: OFF" };
    text(ctx, label, x + w / 2.0, y + h / 2.0, FONT_LABEL, "center", "middle");
}
