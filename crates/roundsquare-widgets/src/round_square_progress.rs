//! Rounded-square progress widget.
//!
//! The widget strokes a rounded border (the track) and, on top of it, the
//! part of the border covering the current percent. The track switches
//! between an idle and an active tint; both the tint and the percent glide
//! to new values through tweens advanced by [`Animate::tick`]. A caption is
//! drawn inside the border, scaled to fit unless a fixed size is set.

use crate::caption::{layout_caption, CaptionLayout, CaptionParams};
use crate::error::BuildError;
use crate::font_provider::FontProvider;
use crate::progress_path::{border_path, percent_tier, progress_segment};
use roundsquare_core::{
    Animate, Brick, BrickAssertion, BrickBudget, BrickVerification, Canvas, Color, Constraints,
    Easing, Font, FontError, GradientDirection, Invalidation, LayoutResult, LineCap, LineJoin,
    LinearGradient, Paint, Path, Rect, Size, StrokeStyle, TextGravity, TextStyle, Tween, TypeId,
    Widget,
};
use roundsquare_yaml::ProgressAttributes;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

/// Percent value meaning "no active progress".
pub const IDLE_PERCENT: f32 = -1.0;

/// Track tint transition length in seconds.
pub const TRACK_COLOR_DURATION: f64 = 0.7;

/// Percent transition length in seconds.
pub const PERCENT_DURATION: f64 = 0.5;

/// Whether the widget runs live or is rendered for a design-time preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    /// Value changes animate
    #[default]
    Interactive,
    /// Value changes apply immediately and font assets are not loaded
    Preview,
}

/// What the progress segment is stroked with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProgressPaint {
    /// One color
    Solid(Color),
    /// Light-to-dark gradient across the segment's bounding box
    Gradient {
        /// Lighter color
        light: Color,
        /// Darker color
        dark: Color,
        /// Gradient axis
        direction: GradientDirection,
    },
}

impl Default for ProgressPaint {
    fn default() -> Self {
        Self::Solid(Color::GRAY)
    }
}

/// A value written by a running tween.
enum Animated {
    TrackColor(Color),
    Percent(f32),
}

/// Rounded-square progress indicator.
#[derive(Debug, Clone)]
pub struct RoundSquareProgress {
    /// Corner radius in scale-independent pixels
    corner_radius: f32,
    background_color: Color,
    progress_paint: ProgressPaint,
    track_color_idle: Color,
    track_color_active: Color,
    /// Displayed track tint
    current_track_color: Color,
    /// Displayed percent: `IDLE_PERCENT` or a value in `[1, 100]` at rest
    progress_percent: f32,
    /// Last accepted percent after normalization
    target_percent: f32,
    stroke_width: f32,
    start_angle: i32,
    gap_compensation: bool,
    text: String,
    text_color: Color,
    text_size: Option<f32>,
    font: Font,
    gravity: TextGravity,
    density: f32,
    mode: InteractionMode,
    min_size: Size,
    bounds: Rect,
    track_tween: Option<Tween<Color>>,
    percent_tween: Option<Tween<f32>>,
    invalidation: Invalidation,
}

impl Default for RoundSquareProgress {
    fn default() -> Self {
        Self {
            corner_radius: 0.0,
            background_color: Color::TRANSPARENT,
            progress_paint: ProgressPaint::default(),
            track_color_idle: Color::LIGHT_GRAY,
            track_color_active: Color::RED,
            current_track_color: Color::LIGHT_GRAY,
            progress_percent: IDLE_PERCENT,
            target_percent: IDLE_PERCENT,
            stroke_width: 12.0,
            start_angle: 0,
            gap_compensation: true,
            text: String::new(),
            text_color: Color::WHITE,
            text_size: None,
            font: Font::default_font(),
            gravity: TextGravity::None,
            density: 1.0,
            mode: InteractionMode::Interactive,
            min_size: Size::ZERO,
            bounds: Rect::default(),
            track_tween: None,
            percent_tween: None,
            invalidation: Invalidation::default(),
        }
    }
}

fn non_negative(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

const FRAME_BUDGET_MS: u32 = 16;

static ASSERTIONS: [BrickAssertion; 5] = [
    BrickAssertion::in_range("stroke_width", 0.0, f32::MAX),
    BrickAssertion::in_range("corner_radius", 0.0, f32::MAX),
    BrickAssertion::in_range("progress_percent", IDLE_PERCENT, 100.0),
    BrickAssertion::in_range("density", f32::MIN_POSITIVE, f32::MAX),
    BrickAssertion::max_latency_ms(FRAME_BUDGET_MS),
];

fn within_budget(elapsed: Duration, budget: Duration) -> Result<(), String> {
    if elapsed <= budget {
        Ok(())
    } else {
        Err(format!("took {elapsed:?}, budget {budget:?}"))
    }
}

impl RoundSquareProgress {
    /// Create an idle widget with default styling.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a widget from an attribute set.
    ///
    /// Attributes go through the same setters as runtime changes, so an
    /// initial percent animates in [`InteractionMode::Interactive`]. In
    /// [`InteractionMode::Preview`] the font name is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Font`] if the font name cannot be resolved.
    pub fn from_attributes(
        attrs: &ProgressAttributes,
        fonts: &dyn FontProvider,
        mode: InteractionMode,
    ) -> Result<Self, BuildError> {
        let font = match mode {
            InteractionMode::Interactive => fonts.resolve(&attrs.font_name)?,
            InteractionMode::Preview => Font::default_font(),
        };

        let mut widget = Self::new()
            .mode(mode)
            .track_colors(attrs.track_color_static, attrs.track_color_dynamic)
            .density(attrs.density)
            .corner_radius(attrs.radius)
            .background_color(attrs.background_color)
            .font(font)
            .text(attrs.text.clone())
            .text_color(attrs.text_color)
            .gravity(attrs.text_gravity)
            .text_size(attrs.text_size)
            .stroke_width(attrs.progress_width)
            .start_angle(attrs.start_angle)
            .gap_compensation(attrs.gap_compensation);
        match attrs.progress_gradient {
            Some(g) => widget.set_progress_gradient(g.light, g.dark, g.direction),
            None => widget.set_progress_color(attrs.progress_color),
        }
        widget.set_progress_percent(attrs.progress_percent);
        Ok(widget)
    }

    /// Parse a YAML attribute set and build a widget from it.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Attributes`] for invalid YAML and
    /// [`BuildError::Font`] for an unknown font.
    pub fn from_yaml(
        yaml: &str,
        fonts: &dyn FontProvider,
        mode: InteractionMode,
    ) -> Result<Self, BuildError> {
        let attrs = ProgressAttributes::from_yaml(yaml)?;
        Self::from_attributes(&attrs, fonts, mode)
    }

    // ===== Builders =====

    /// Set the interaction mode.
    #[must_use]
    pub fn mode(mut self, mode: InteractionMode) -> Self {
        self.set_mode(mode);
        self
    }

    /// Set the intrinsic size reported when unconstrained.
    #[must_use]
    pub fn min_size(mut self, size: Size) -> Self {
        self.set_min_size(size);
        self
    }

    /// Set both track colors and show the one matching the current state.
    #[must_use]
    pub fn track_colors(mut self, idle: Color, active: Color) -> Self {
        self.track_color_idle = idle;
        self.track_color_active = active;
        self.track_tween = None;
        self.current_track_color = self.steady_track_color();
        self
    }

    /// Set the corner radius.
    #[must_use]
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.set_corner_radius(radius);
        self
    }

    /// Set the stroke width.
    #[must_use]
    pub fn stroke_width(mut self, width: f32) -> Self {
        self.set_stroke_width(width);
        self
    }

    /// Set the interior fill color.
    #[must_use]
    pub fn background_color(mut self, color: Color) -> Self {
        self.set_background_color(color);
        self
    }

    /// Set a solid progress color.
    #[must_use]
    pub fn progress_color(mut self, color: Color) -> Self {
        self.set_progress_color(color);
        self
    }

    /// Set the caption text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Set the caption color.
    #[must_use]
    pub fn text_color(mut self, color: Color) -> Self {
        self.set_text_color(color);
        self
    }

    /// Set a fixed caption size, or `None` to auto-fit.
    #[must_use]
    pub fn text_size(mut self, size: Option<f32>) -> Self {
        self.set_text_size(size);
        self
    }

    /// Set the caption font.
    #[must_use]
    pub fn font(mut self, font: Font) -> Self {
        self.set_text_font(font);
        self
    }

    /// Set the caption gravity.
    #[must_use]
    pub fn gravity(mut self, gravity: TextGravity) -> Self {
        self.set_text_gravity(gravity);
        self
    }

    /// Set the start angle in degrees.
    #[must_use]
    pub fn start_angle(mut self, degrees: i32) -> Self {
        self.set_start_angle(degrees);
        self
    }

    /// Enable or disable the fixed start offset.
    #[must_use]
    pub fn gap_compensation(mut self, enabled: bool) -> Self {
        self.set_gap_compensation(enabled);
        self
    }

    /// Set the display density.
    #[must_use]
    pub fn density(mut self, density: f32) -> Self {
        self.set_density(density);
        self
    }

    // ===== Setters =====

    /// Set the interior fill color.
    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
        self.invalidation.request_layout();
    }

    /// Stroke the progress segment with one color.
    pub fn set_progress_color(&mut self, color: Color) {
        self.progress_paint = ProgressPaint::Solid(color);
        self.invalidation.request_layout();
    }

    /// Stroke the progress segment with a gradient.
    pub fn set_progress_gradient(&mut self, light: Color, dark: Color, direction: GradientDirection) {
        self.progress_paint = ProgressPaint::Gradient {
            light,
            dark,
            direction,
        };
        self.invalidation.request_layout();
    }

    /// Set the idle track color.
    ///
    /// An idle widget transitions to the new color.
    pub fn set_track_idle_color(&mut self, color: Color) {
        self.track_color_idle = color;
        if self.is_idle() {
            self.transition_track(color);
        }
        self.invalidation.request_layout();
    }

    /// Set the active track color.
    ///
    /// An active widget transitions to the new color.
    pub fn set_track_active_color(&mut self, color: Color) {
        self.track_color_active = color;
        if !self.is_idle() {
            self.transition_track(color);
        }
        self.invalidation.request_layout();
    }

    /// Set the track and progress stroke width. Negative widths become 0.
    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = non_negative(width);
        self.invalidation.request_layout();
    }

    /// Set the corner radius in scale-independent pixels. Negative radii
    /// become 0.
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = non_negative(radius);
        self.invalidation.request_layout();
    }

    /// Set the caption text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.invalidation.request_layout();
    }

    /// Set the caption color.
    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
        self.invalidation.request_layout();
    }

    /// Set a fixed caption size; `None` or a non-positive size auto-fits.
    pub fn set_text_size(&mut self, size: Option<f32>) {
        self.text_size = size.filter(|s| s.is_finite() && *s > 0.0);
        self.invalidation.request_layout();
    }

    /// Set the caption font.
    pub fn set_text_font(&mut self, font: Font) {
        self.font = font;
        self.invalidation.request_layout();
    }

    /// Resolve and set the caption font by asset name.
    ///
    /// On failure the default font is used and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if `name` cannot be resolved.
    pub fn set_text_font_name(
        &mut self,
        name: &str,
        fonts: &dyn FontProvider,
    ) -> Result<(), FontError> {
        match fonts.resolve(name) {
            Ok(font) => {
                self.set_text_font(font);
                Ok(())
            }
            Err(err) => {
                warn!("font '{name}' unavailable, using default font: {err}");
                self.set_text_font(Font::default_font());
                Err(err)
            }
        }
    }

    /// Set the caption gravity.
    pub fn set_text_gravity(&mut self, gravity: TextGravity) {
        self.gravity = gravity;
        self.invalidation.request_paint();
    }

    /// Rotate where 0% sits, in degrees clockwise.
    pub fn set_start_angle(&mut self, degrees: i32) {
        self.start_angle = degrees;
        self.invalidation.request_paint();
    }

    /// Enable or disable the fixed 26 degree start offset.
    pub fn set_gap_compensation(&mut self, enabled: bool) {
        self.gap_compensation = enabled;
        self.invalidation.request_layout();
    }

    /// Set the display density. Non-positive values become 1.
    pub fn set_density(&mut self, density: f32) {
        self.density = if density.is_finite() && density > 0.0 {
            density
        } else {
            1.0
        };
        self.invalidation.request_layout();
    }

    /// Set the intrinsic size reported when unconstrained.
    pub fn set_min_size(&mut self, size: Size) {
        self.min_size = Size::new(non_negative(size.width), non_negative(size.height));
        self.invalidation.request_layout();
    }

    /// Switch between live and preview behavior.
    ///
    /// Entering preview finishes any running transition.
    pub fn set_mode(&mut self, mode: InteractionMode) {
        self.mode = mode;
        if mode == InteractionMode::Preview && self.is_animating() {
            self.finish_animations();
            self.invalidation.request_paint();
        }
    }

    /// Show a new percent.
    ///
    /// The value is truncated to pick a tier: −1 and 0 are idle, 1 to 100
    /// are active (values above 100 are shown as 100), anything else
    /// (including infinities) snaps straight to idle. NaN counts as 0.
    pub fn set_progress_percent(&mut self, percent: f32) {
        match percent_tier(percent) {
            -1 | 0 => {
                debug!("progress percent {percent} -> idle");
                self.target_percent = IDLE_PERCENT;
                self.transition_track(self.track_color_idle);
                self.animate_percent(IDLE_PERCENT);
            }
            1..=100 => {
                let target = percent.min(100.0);
                debug!("progress percent {percent} -> active, target {target}");
                self.target_percent = target;
                self.transition_track(self.track_color_active);
                self.animate_percent(target);
            }
            tier => {
                debug!("progress percent {percent} (tier {tier}) out of range, snapping to idle");
                self.target_percent = IDLE_PERCENT;
                self.percent_tween = None;
                self.apply(Animated::Percent(IDLE_PERCENT));
                self.transition_track(self.track_color_idle);
            }
        }
        self.invalidation.request_paint();
    }

    // ===== Getters =====

    /// Displayed percent (animated).
    #[must_use]
    pub fn get_progress_percent(&self) -> f32 {
        self.progress_percent
    }

    /// Percent the widget is heading to.
    #[must_use]
    pub fn get_target_percent(&self) -> f32 {
        self.target_percent
    }

    /// Whether the widget is (heading to) idle.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.target_percent == IDLE_PERCENT
    }

    /// Displayed track tint (animated).
    #[must_use]
    pub fn get_track_color(&self) -> Color {
        self.current_track_color
    }

    /// Idle track color.
    #[must_use]
    pub fn get_track_idle_color(&self) -> Color {
        self.track_color_idle
    }

    /// Active track color.
    #[must_use]
    pub fn get_track_active_color(&self) -> Color {
        self.track_color_active
    }

    /// Interior fill color.
    #[must_use]
    pub fn get_background_color(&self) -> Color {
        self.background_color
    }

    /// Progress segment paint.
    #[must_use]
    pub fn get_progress_paint(&self) -> ProgressPaint {
        self.progress_paint
    }

    /// Stroke width.
    #[must_use]
    pub fn get_stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Corner radius in scale-independent pixels.
    #[must_use]
    pub fn get_corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Corner radius in pixels before clamping to the border.
    #[must_use]
    pub fn effective_corner_radius(&self) -> f32 {
        self.corner_radius * self.density
    }

    /// Start angle in degrees.
    #[must_use]
    pub fn get_start_angle(&self) -> i32 {
        self.start_angle
    }

    /// Whether the fixed start offset is applied.
    #[must_use]
    pub fn has_gap_compensation(&self) -> bool {
        self.gap_compensation
    }

    /// Caption text.
    #[must_use]
    pub fn get_text(&self) -> &str {
        &self.text
    }

    /// Caption color.
    #[must_use]
    pub fn get_text_color(&self) -> Color {
        self.text_color
    }

    /// Fixed caption size, if any.
    #[must_use]
    pub fn get_text_size(&self) -> Option<f32> {
        self.text_size
    }

    /// Caption font.
    #[must_use]
    pub fn get_font(&self) -> &Font {
        &self.font
    }

    /// Caption gravity.
    #[must_use]
    pub fn get_gravity(&self) -> TextGravity {
        self.gravity
    }

    /// Display density.
    #[must_use]
    pub fn get_density(&self) -> f32 {
        self.density
    }

    /// Interaction mode.
    #[must_use]
    pub fn get_mode(&self) -> InteractionMode {
        self.mode
    }

    /// Intrinsic size.
    #[must_use]
    pub fn get_min_size(&self) -> Size {
        self.min_size
    }

    // ===== Geometry =====

    /// Track outline for the current bounds.
    #[must_use]
    pub fn track_path(&self) -> Path {
        border_path(self.bounds, self.stroke_width, self.effective_corner_radius())
    }

    /// Progress segment for the current bounds and displayed percent.
    #[must_use]
    pub fn segment_path(&self) -> Path {
        progress_segment(
            &self.track_path(),
            self.progress_percent,
            self.start_angle,
            self.gap_compensation,
        )
    }

    /// Caption layout for the current bounds.
    #[must_use]
    pub fn caption_layout(&self) -> Option<CaptionLayout> {
        layout_caption(&self.caption_params(self.bounds))
    }

    // ===== Internals =====

    fn steady_track_color(&self) -> Color {
        if self.is_idle() {
            self.track_color_idle
        } else {
            self.track_color_active
        }
    }

    /// The single place animated state is written.
    fn apply(&mut self, value: Animated) {
        match value {
            Animated::TrackColor(color) => self.current_track_color = color,
            Animated::Percent(percent) => self.progress_percent = percent,
        }
    }

    fn transition_track(&mut self, to: Color) {
        if self
            .track_tween
            .as_ref()
            .is_some_and(|tween| tween.to.same_argb(&to))
        {
            return;
        }
        if self.current_track_color.same_argb(&to) || self.mode == InteractionMode::Preview {
            self.track_tween = None;
            self.apply(Animated::TrackColor(to));
            return;
        }
        if self.track_tween.is_some() {
            debug!("superseding track color tween, new target {}", to.to_hex());
        } else {
            debug!("track color tween to {}", to.to_hex());
        }
        self.track_tween = Some(
            Tween::new(self.current_track_color, to, TRACK_COLOR_DURATION)
                .with_easing(Easing::EaseInOut),
        );
    }

    fn animate_percent(&mut self, target: f32) {
        if self
            .percent_tween
            .as_ref()
            .is_some_and(|tween| tween.to == target)
        {
            return;
        }
        if self.progress_percent == target || self.mode == InteractionMode::Preview {
            self.percent_tween = None;
            self.apply(Animated::Percent(target));
            return;
        }
        if self.percent_tween.is_some() {
            debug!("superseding percent tween at {}, new target {target}", self.progress_percent);
        } else {
            debug!("percent tween {} -> {target}", self.progress_percent);
        }
        self.percent_tween = Some(
            Tween::new(self.progress_percent, target, PERCENT_DURATION)
                .with_easing(Easing::EaseInOut),
        );
    }

    fn finish_animations(&mut self) {
        if let Some(tween) = self.track_tween.take() {
            self.apply(Animated::TrackColor(tween.to));
        }
        if let Some(tween) = self.percent_tween.take() {
            self.apply(Animated::Percent(tween.to));
        }
    }

    fn viewport(&self, clip: Option<Rect>) -> Option<Rect> {
        let viewport = match clip {
            Some(clip) => self.bounds.intersection(&clip)?,
            None => self.bounds,
        };
        (!viewport.is_empty()).then_some(viewport)
    }

    fn caption_params(&self, viewport: Rect) -> CaptionParams<'_> {
        CaptionParams {
            text: &self.text,
            metrics: self.font.metrics(),
            viewport,
            stroke_width: self.stroke_width,
            density: self.density,
            fixed_size: self.text_size,
            gravity: self.gravity,
        }
    }

    fn segment_paint(&self, segment: &Path) -> Paint {
        match self.progress_paint {
            ProgressPaint::Solid(color) => Paint::Solid(color),
            ProgressPaint::Gradient {
                light,
                dark,
                direction,
            } => {
                let Some(bounds) = segment.bounds() else {
                    return Paint::Solid(light);
                };
                let (light, dark) = if light.relative_luminance() >= dark.relative_luminance() {
                    (light, dark)
                } else {
                    (dark, light)
                };
                let (start, end) = direction.endpoints(bounds);
                Paint::Linear(LinearGradient {
                    start,
                    end,
                    start_color: light,
                    end_color: dark,
                })
            }
        }
    }

    fn paint_caption(&self, canvas: &mut dyn Canvas, viewport: Rect) {
        let Some(layout) = layout_caption(&self.caption_params(viewport)) else {
            return;
        };
        let style = TextStyle {
            size: layout.size,
            color: self.text_color,
            font: self.font.name().map(str::to_string),
        };
        let mut buf = [0u8; 4];
        for (ch, origin) in &layout.glyphs {
            canvas.draw_text(ch.encode_utf8(&mut buf), *origin, &style);
        }
    }
}

impl Animate for RoundSquareProgress {
    fn tick(&mut self, dt: f64) -> bool {
        let track = self
            .track_tween
            .as_mut()
            .map(|tween| (tween.advance(dt), tween.is_complete()));
        let percent = self
            .percent_tween
            .as_mut()
            .map(|tween| (tween.advance(dt), tween.is_complete()));

        if let Some((color, done)) = track {
            self.apply(Animated::TrackColor(color));
            if done {
                self.track_tween = None;
            }
        }
        if let Some((value, done)) = percent {
            self.apply(Animated::Percent(value));
            if done {
                self.percent_tween = None;
            }
        }

        let changed = track.is_some() || percent.is_some();
        if changed {
            trace!(
                "tick dt={dt:.4} percent={} track={}",
                self.progress_percent,
                self.current_track_color.to_hex()
            );
            self.invalidation.request_paint();
        }
        changed
    }

    fn is_animating(&self) -> bool {
        self.track_tween.is_some() || self.percent_tween.is_some()
    }
}

impl Widget for RoundSquareProgress {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.resolve(self.min_size)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let verification = self.verify();
        if !verification.is_valid() {
            for (assertion, reason) in &verification.failed {
                warn!("skipping paint, {assertion:?} failed: {reason}");
            }
            return;
        }
        let Some(viewport) = self.viewport(canvas.clip_bounds()) else {
            return;
        };

        let border = border_path(viewport, self.stroke_width, self.effective_corner_radius());
        canvas.fill_path(&border, self.background_color);
        canvas.stroke_path(
            &border,
            &StrokeStyle::solid(self.current_track_color, self.stroke_width),
        );

        let segment = progress_segment(
            &border,
            self.progress_percent,
            self.start_angle,
            self.gap_compensation,
        );
        if !segment.is_empty() {
            let style = StrokeStyle {
                paint: self.segment_paint(&segment),
                width: self.stroke_width,
                cap: LineCap::Butt,
                join: LineJoin::Round,
            };
            canvas.stroke_path(&segment, &style);
        }

        self.paint_caption(canvas, viewport);
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn take_invalidation(&mut self) -> Invalidation {
        self.invalidation.take()
    }
}

impl Brick for RoundSquareProgress {
    fn brick_name(&self) -> &'static str {
        "RoundSquareProgress"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        &ASSERTIONS
    }

    fn budget(&self) -> BrickBudget {
        BrickBudget::uniform(FRAME_BUDGET_MS)
    }

    fn verify(&self) -> BrickVerification {
        let started = Instant::now();
        let mut verification = BrickVerification::default();

        let in_range = |value: f32, min: f32, max: f32| {
            if (min..=max).contains(&value) {
                Ok(())
            } else {
                Err(format!("{value} outside [{min}, {max}]"))
            }
        };
        let [stroke, radius, percent, density, latency] = &ASSERTIONS;

        verification.check(stroke.clone(), in_range(self.stroke_width, 0.0, f32::MAX));
        verification.check(
            radius.clone(),
            in_range(self.effective_corner_radius(), 0.0, f32::MAX),
        );
        verification.check(
            percent.clone(),
            in_range(self.progress_percent, IDLE_PERCENT, 100.0),
        );
        verification.check(
            density.clone(),
            in_range(self.density, f32::MIN_POSITIVE, f32::MAX),
        );
        verification.check(
            latency.clone(),
            within_budget(started.elapsed(), self.budget().as_duration()),
        );

        verification.verification_time = started.elapsed();
        verification
    }
}
