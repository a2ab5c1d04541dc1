use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

impl Theme {
    pub fn slate() -> Self {
        Theme { dark: ThemeDetails::slate_dark(), light: ThemeDetails::slate_light() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).foreground).strong()
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).blue
    }

    pub fn favorite(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    pub fn rating(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).amber
    }

    pub fn muted(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).muted
    }
}

#[derive(Clone)]
pub struct ThemeDetails {
    background: Color32,
    background_dark: Color32,
    background_light: Color32,
    foreground: Color32,
    muted: Color32,
    selection: Color32,
    blue: Color32,
    red: Color32,
    amber: Color32,
}

impl ThemeDetails {
    fn slate_dark() -> Self {
        Self {
            background: Color32::from_rgb(30, 41, 59),
            background_dark: Color32::from_rgb(15, 23, 42),
            background_light: Color32::from_rgb(51, 65, 85),
            foreground: Color32::from_rgb(241, 245, 249),
            muted: Color32::from_rgb(148, 163, 184),
            selection: Color32::from_rgb(30, 58, 138),
            blue: Color32::from_rgb(96, 165, 250),
            red: Color32::from_rgb(248, 113, 113),
            amber: Color32::from_rgb(253, 224, 71),
        }
    }

    fn slate_light() -> Self {
        Self {
            background: Color32::from_rgb(255, 255, 255),
            background_dark: Color32::from_rgb(241, 245, 249),
            background_light: Color32::from_rgb(248, 250, 252),
            foreground: Color32::from_rgb(15, 23, 42),
            muted: Color32::from_rgb(100, 116, 139),
            selection: Color32::from_rgb(191, 219, 254),
            blue: Color32::from_rgb(37, 99, 235),
            red: Color32::from_rgb(220, 38, 38),
            amber: Color32::from_rgb(180, 83, 9),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    let widget = |base: WidgetVisuals, bg_fill: Color32, stroke: Color32| WidgetVisuals {
        bg_fill,
        weak_bg_fill: bg_fill,
        bg_stroke: Stroke { color: stroke, ..base.bg_stroke },
        fg_stroke: Stroke { color: theme.foreground, ..base.fg_stroke },
        ..base
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: widget(
                    default.widgets.noninteractive,
                    theme.background,
                    theme.background_light,
                ),
                inactive: widget(default.widgets.inactive, theme.background_light, theme.muted),
                hovered: widget(default.widgets.hovered, theme.selection, theme.blue),
                active: widget(default.widgets.active, theme.selection, theme.blue),
                open: widget(default.widgets.open, theme.background_dark, theme.blue),
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.blue,
            faint_bg_color: theme.background_light,
            extreme_bg_color: theme.background_dark,
            error_fg_color: theme.red,
            warn_fg_color: theme.amber,
            window_shadow: Shadow { color: theme.background_dark, ..default.window_shadow },
            window_fill: theme.background,
            panel_fill: theme.background_dark,
            ..default
        },
    );
}
