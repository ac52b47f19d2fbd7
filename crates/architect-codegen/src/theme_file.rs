//! Theme file renderers.
//!
//! One renderer per supported style framework, each interpolating the
//! working configuration into that framework's theme declaration. The
//! generic renderer dumps the configuration as JSON and cannot fail.

use serde_json::Value;

use architect_core::theme::color::{darken, hsl_triplet, lighten, Rgb};
use architect_core::{Framework, TemplateConfig};

const FALLBACK_FONT_FAMILY: &str = "sans-serif";
const FALLBACK_FONT_SIZE: f64 = 14.0;

/// Used when the working config has no value for a role.
const FALLBACK_COLORS: [(&str, &str); 9] = [
    ("primary", "#1976d2"),
    ("secondary", "#9c27b0"),
    ("success", "#2e7d32"),
    ("warning", "#ed6c02"),
    ("error", "#d32f2f"),
    ("info", "#0288d1"),
    ("background", "#ffffff"),
    ("surface", "#ffffff"),
    ("text", "#1a2027"),
];

/// Render the theme file for `framework`.
pub fn render(framework: Framework, config: &TemplateConfig) -> String {
    match framework {
        Framework::Material => render_material(config),
        Framework::AntDesign => render_ant_design(config),
        Framework::Tailwind => render_tailwind(config),
        Framework::Bootstrap => render_bootstrap(config),
        Framework::Shadcn => render_shadcn(config),
        Framework::Generic => render_generic(config),
    }
}

/// Theme file location relative to the project root.
pub fn path(framework: Framework) -> &'static str {
    match framework {
        Framework::Material => "src/theme/theme.js",
        Framework::AntDesign => "src/theme/antd-theme.js",
        Framework::Tailwind => "tailwind.config.js",
        Framework::Bootstrap => "src/styles/_variables.scss",
        Framework::Shadcn => "src/styles/globals.css",
        Framework::Generic => "src/theme/theme.js",
    }
}

fn color<'a>(config: &'a TemplateConfig, role: &str) -> &'a str {
    config.color(role).unwrap_or_else(|| {
        FALLBACK_COLORS
            .iter()
            .find(|(name, _)| *name == role)
            .map(|(_, value)| *value)
            .unwrap_or("inherit")
    })
}

/// `fontFamily` as text. Non-string values render as their JSON text.
pub(crate) fn font_family(config: &TemplateConfig) -> String {
    match config.typography_value("fontFamily") {
        Some(Value::String(family)) => family.clone(),
        Some(other) => other.to_string(),
        None => FALLBACK_FONT_FAMILY.to_string(),
    }
}

/// `fontSize` for JavaScript output: numbers as-is, anything else as a string
/// literal.
fn js_font_size(config: &TemplateConfig) -> String {
    match config.typography_value("fontSize") {
        Some(Value::Number(size)) => size.to_string(),
        Some(Value::String(size)) => js_string(size),
        Some(other) => js_string(&other.to_string()),
        None => FALLBACK_FONT_SIZE.to_string(),
    }
}

/// `fontSize` as a CSS length: numbers are pixels, strings pass through.
pub(crate) fn css_font_size(config: &TemplateConfig) -> String {
    match config.typography_value("fontSize") {
        Some(Value::Number(size)) => format!("{}px", size.as_f64().unwrap_or(FALLBACK_FONT_SIZE)),
        Some(Value::String(size)) => size.clone(),
        Some(other) => other.to_string(),
        None => format!("{}px", FALLBACK_FONT_SIZE),
    }
}

/// `fontSize` in rem when numeric; strings pass through.
fn rem_font_size(config: &TemplateConfig) -> String {
    match config.typography_value("fontSize") {
        Some(Value::Number(size)) => rem(size.as_f64().unwrap_or(FALLBACK_FONT_SIZE)),
        Some(Value::String(size)) => size.clone(),
        Some(other) => other.to_string(),
        None => rem(FALLBACK_FONT_SIZE),
    }
}

/// Color keys outside the semantic roles, in key order.
fn extra_colors(config: &TemplateConfig) -> impl Iterator<Item = (&String, &String)> {
    config
        .colors
        .iter()
        .filter(|(key, _)| !FALLBACK_COLORS.iter().any(|(role, _)| *role == key.as_str()))
}

/// Single-quoted JavaScript string literal.
fn js_string(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Object key, quoted unless it is a plain identifier.
fn js_key(key: &str) -> String {
    let plain = key.chars().next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        key.to_string()
    } else {
        js_string(key)
    }
}

/// Kebab-case identifier for a color key in SCSS variables and CSS custom
/// properties: `brandAccent` and `brand accent` both become `brand-accent`.
pub(crate) fn css_ident(key: &str) -> String {
    let mut ident = String::new();
    let mut after_lower = false;
    for c in key.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if c.is_ascii_uppercase() && after_lower {
                ident.push('-');
            }
            ident.push(c.to_ascii_lowercase());
            after_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        } else {
            if !ident.is_empty() && !ident.ends_with('-') {
                ident.push('-');
            }
            after_lower = false;
        }
    }
    let ident = ident.trim_end_matches('-');
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        format!("color-{}", ident).trim_end_matches('-').to_string()
    } else {
        ident.to_string()
    }
}

/// Families of a CSS font stack, quotes stripped.
fn font_stack(family: &str) -> Vec<&str> {
    family
        .split(',')
        .map(|f| f.trim().trim_matches(|c| c == '"' || c == '\''))
        .filter(|f| !f.is_empty())
        .collect()
}

fn rem(px: f64) -> String {
    format!("{}rem", px / 16.0)
}

fn is_dark(value: &str) -> bool {
    Rgb::from_hex(value).is_some_and(|rgb| rgb.to_hsl().l < 0.5)
}

fn render_material(config: &TemplateConfig) -> String {
    let mut js = String::new();

    js.push_str("import { createTheme } from '@mui/material/styles';\n\n");
    js.push_str("const theme = createTheme({\n");
    js.push_str("  palette: {\n");
    if is_dark(color(config, "background")) {
        js.push_str("    mode: 'dark',\n");
    }
    for role in ["primary", "secondary"] {
        let main = color(config, role);
        js.push_str(&format!(
            "    {}: {{ main: {}, light: {}, dark: {} }},\n",
            role,
            js_string(main),
            js_string(&lighten(main, 0.15)),
            js_string(&darken(main, 0.15))
        ));
    }
    for role in ["success", "warning", "error", "info"] {
        js.push_str(&format!("    {}: {{ main: {} }},\n", role, js_string(color(config, role))));
    }
    for (key, value) in extra_colors(config) {
        js.push_str(&format!("    {}: {{ main: {} }},\n", js_key(key), js_string(value)));
    }
    js.push_str(&format!(
        "    background: {{ default: {}, paper: {} }},\n",
        js_string(color(config, "background")),
        js_string(color(config, "surface"))
    ));
    js.push_str(&format!("    text: {{ primary: {} }},\n", js_string(color(config, "text"))));
    js.push_str("  },\n");

    js.push_str("  typography: {\n");
    js.push_str(&format!("    fontFamily: {},\n", js_string(&font_family(config))));
    js.push_str(&format!("    fontSize: {},\n", js_font_size(config)));
    js.push_str("  },\n");
    js.push_str(&format!("  spacing: {},\n", config.spacing));
    js.push_str("  shape: {\n");
    js.push_str(&format!("    borderRadius: {},\n", config.border_radius));
    js.push_str("  },\n");
    js.push_str("});\n\n");
    js.push_str("export default theme;\n");

    js
}

fn render_ant_design(config: &TemplateConfig) -> String {
    let mut js = String::new();
    let algorithm = if is_dark(color(config, "background")) {
        "darkAlgorithm"
    } else {
        "defaultAlgorithm"
    };
    let size_step = (config.spacing / 2).max(1);

    js.push_str("import { theme } from 'antd';\n\n");
    js.push_str("const themeConfig = {\n");
    js.push_str(&format!("  algorithm: theme.{},\n", algorithm));
    js.push_str("  token: {\n");
    for (token, role) in [
        ("colorPrimary", "primary"),
        ("colorSuccess", "success"),
        ("colorWarning", "warning"),
        ("colorError", "error"),
        ("colorInfo", "info"),
        ("colorLink", "secondary"),
        ("colorBgLayout", "background"),
        ("colorBgContainer", "surface"),
        ("colorText", "text"),
    ] {
        js.push_str(&format!("    {}: {},\n", token, js_string(color(config, role))));
    }
    js.push_str(&format!("    fontFamily: {},\n", js_string(&font_family(config))));
    js.push_str(&format!("    fontSize: {},\n", js_font_size(config)));
    js.push_str(&format!("    borderRadius: {},\n", config.border_radius));
    js.push_str(&format!("    sizeUnit: {},\n", size_step));
    js.push_str(&format!("    sizeStep: {},\n", size_step));
    js.push_str("  },\n");
    js.push_str("};\n\n");
    js.push_str("export default themeConfig;\n");

    js
}

fn render_tailwind(config: &TemplateConfig) -> String {
    let mut js = String::new();

    js.push_str("/** @type {import('tailwindcss').Config} */\n");
    js.push_str("module.exports = {\n");
    js.push_str("  content: ['./index.html', './src/**/*.{js,jsx,ts,tsx}'],\n");
    js.push_str("  theme: {\n");
    js.push_str("    extend: {\n");

    js.push_str("      colors: {\n");
    for (key, value) in &config.colors {
        js.push_str(&format!("        {}: {},\n", js_key(key), js_string(value)));
    }
    js.push_str("      },\n");

    let family = font_family(config);
    let families: Vec<String> = font_stack(&family).into_iter().map(js_string).collect();
    js.push_str("      fontFamily: {\n");
    js.push_str(&format!("        sans: [{}],\n", families.join(", ")));
    js.push_str("      },\n");
    js.push_str("      fontSize: {\n");
    js.push_str(&format!("        base: {},\n", js_string(&css_font_size(config))));
    js.push_str("      },\n");
    js.push_str("      spacing: {\n");
    js.push_str(&format!("        unit: '{}px',\n", config.spacing));
    js.push_str("      },\n");
    js.push_str("      borderRadius: {\n");
    js.push_str(&format!("        DEFAULT: '{}px',\n", config.border_radius));
    js.push_str("      },\n");

    js.push_str("    },\n");
    js.push_str("  },\n");
    js.push_str("  plugins: [],\n");
    js.push_str("};\n");

    js
}

fn render_bootstrap(config: &TemplateConfig) -> String {
    let mut scss = String::new();

    scss.push_str("// Bootstrap variable overrides. Import before bootstrap/scss/bootstrap.\n\n");
    for (variable, role) in [
        ("primary", "primary"),
        ("secondary", "secondary"),
        ("success", "success"),
        ("warning", "warning"),
        ("danger", "error"),
        ("info", "info"),
        ("body-bg", "background"),
        ("card-bg", "surface"),
        ("body-color", "text"),
    ] {
        scss.push_str(&format!("${}: {};\n", variable, color(config, role)));
    }
    for (key, value) in extra_colors(config) {
        scss.push_str(&format!("${}: {};\n", css_ident(key), value));
    }
    scss.push('\n');
    scss.push_str(&format!("$font-family-base: {};\n", font_family(config)));
    scss.push_str(&format!("$font-size-base: {};\n", rem_font_size(config)));
    scss.push_str(&format!("$spacer: {};\n", rem(f64::from(config.spacing))));
    scss.push_str(&format!("$border-radius: {};\n", rem(f64::from(config.border_radius))));
    scss.push('\n');
    scss.push_str("@import 'bootstrap/scss/bootstrap';\n");

    scss
}

/// Color as a shadcn CSS variable value: an HSL triplet, or the raw value
/// when it is not a hex color.
fn css_var_color(value: &str) -> String {
    hsl_triplet(value).unwrap_or_else(|| value.to_string())
}

/// Foreground for text drawn on `value`.
fn foreground_for(value: &str) -> &'static str {
    if Rgb::from_hex(value).is_some_and(|rgb| rgb.to_hsl().l > 0.6) {
        "222 47% 11%"
    } else {
        "0 0% 100%"
    }
}

fn render_shadcn(config: &TemplateConfig) -> String {
    let mut css = String::new();
    let text = css_var_color(color(config, "text"));
    let surface = color(config, "surface");

    css.push_str("@tailwind base;\n@tailwind components;\n@tailwind utilities;\n\n");
    css.push_str("@layer base {\n");
    css.push_str("  :root {\n");
    css.push_str(&format!("    --background: {};\n", css_var_color(color(config, "background"))));
    css.push_str(&format!("    --foreground: {};\n", text));
    css.push_str(&format!("    --card: {};\n", css_var_color(surface)));
    css.push_str(&format!("    --card-foreground: {};\n", text));
    css.push_str(&format!("    --popover: {};\n", css_var_color(surface)));
    css.push_str(&format!("    --popover-foreground: {};\n", text));
    for role in ["primary", "secondary"] {
        let value = color(config, role);
        css.push_str(&format!("    --{}: {};\n", role, css_var_color(value)));
        css.push_str(&format!("    --{}-foreground: {};\n", role, foreground_for(value)));
    }
    css.push_str(&format!("    --destructive: {};\n", css_var_color(color(config, "error"))));
    css.push_str(&format!("    --destructive-foreground: {};\n", foreground_for(color(config, "error"))));
    for role in ["success", "warning", "info"] {
        css.push_str(&format!("    --{}: {};\n", role, css_var_color(color(config, role))));
    }
    for (key, value) in extra_colors(config) {
        css.push_str(&format!("    --{}: {};\n", css_ident(key), css_var_color(value)));
    }
    let border = if is_dark(surface) { lighten(surface, 0.1) } else { darken(surface, 0.1) };
    css.push_str(&format!("    --border: {};\n", css_var_color(&border)));
    css.push_str(&format!("    --input: {};\n", css_var_color(&border)));
    css.push_str(&format!("    --ring: {};\n", css_var_color(color(config, "primary"))));
    css.push_str(&format!("    --radius: {};\n", rem(f64::from(config.border_radius))));
    css.push_str(&format!("    --spacing: {}px;\n", config.spacing));
    css.push_str("  }\n\n");
    css.push_str("  body {\n");
    css.push_str("    @apply bg-background text-foreground;\n");
    css.push_str(&format!("    font-family: {};\n", font_family(config)));
    css.push_str(&format!("    font-size: {};\n", css_font_size(config)));
    css.push_str("  }\n");
    css.push_str("}\n");

    css
}

fn render_generic(config: &TemplateConfig) -> String {
    let json = serde_json::to_string_pretty(config).unwrap_or_else(|_| "{}".to_string());
    format!("export const theme = {};\n\nexport default theme;\n", json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use architect_core::template::find_template;

    fn config(id: &str) -> TemplateConfig {
        find_template(id).unwrap().default_config.clone()
    }

    #[test]
    fn test_material_theme() {
        let theme = render(Framework::Material, &config("material-modern"));
        assert!(theme.contains("import { createTheme } from '@mui/material/styles';"));
        assert!(theme.contains("primary: { main: '#1976d2', light: "));
        assert!(theme.contains("background: { default: '#f5f7fa', paper: '#ffffff' }"));
        assert!(theme.contains("spacing: 8,"));
        assert!(theme.contains("borderRadius: 8,"));
        assert!(!theme.contains("mode: 'dark'"));
    }

    #[test]
    fn test_material_dark_mode_and_extra_colors() {
        let mut config = config("shadcn-clean");
        config.colors.insert("brand-accent".to_string(), "#ff00ff".to_string());
        let theme = render(Framework::Material, &config);
        assert!(theme.contains("mode: 'dark'"));
        assert!(theme.contains("'brand-accent': { main: '#ff00ff' }"));
    }

    #[test]
    fn test_ant_design_theme() {
        let theme = render(Framework::AntDesign, &config("ant-enterprise"));
        assert!(theme.contains("algorithm: theme.defaultAlgorithm,"));
        assert!(theme.contains("colorPrimary: '#1677ff',"));
        assert!(theme.contains("borderRadius: 6,"));
        assert!(theme.contains("sizeStep: 4,"));
    }

    #[test]
    fn test_tailwind_theme() {
        let theme = render(Framework::Tailwind, &config("tailwind-minimal"));
        assert!(theme.contains("module.exports = {"));
        assert!(theme.contains("primary: '#6a1b9a',"));
        assert!(theme.contains("sans: ['Inter', 'Helvetica Neue', 'Arial', 'sans-serif'],"));
        assert!(theme.contains("DEFAULT: '4px',"));
        assert!(theme.contains("unit: '4px',"));
    }

    #[test]
    fn test_bootstrap_theme() {
        let theme = render(Framework::Bootstrap, &config("bootstrap-classic"));
        assert!(theme.contains("$danger: #d32f2f;"));
        assert!(theme.contains("$font-size-base: 0.875rem;"));
        assert!(theme.contains("$spacer: 0.5rem;"));
        assert!(theme.contains("$border-radius: 0.25rem;"));
        assert!(theme.ends_with("@import 'bootstrap/scss/bootstrap';\n"));
    }

    #[test]
    fn test_shadcn_theme() {
        let mut config = config("shadcn-clean");
        config.colors.insert("primary".to_string(), "#ff0000".to_string());
        config.colors.insert("secondary".to_string(), "var(--brand)".to_string());
        let theme = render(Framework::Shadcn, &config);
        assert!(theme.contains("--primary: 0 100% 50%;"));
        assert!(theme.contains("--primary-foreground: 0 0% 100%;"));
        assert!(theme.contains("--secondary: var(--brand);"));
        assert!(theme.contains("--radius: 0.25rem;"));
    }

    #[test]
    fn test_generic_theme_dumps_config() {
        let config = config("chakra-soft");
        let theme = render(Framework::Generic, &config);
        assert!(theme.starts_with("export const theme = {"));
        assert!(theme.contains(&serde_json::to_string_pretty(&config).unwrap()));
    }

    #[test]
    fn test_missing_roles_use_fallbacks() {
        let mut config = config("material-modern");
        config.colors.clear();
        config.typography.clear();
        let theme = render(Framework::Material, &config);
        assert!(theme.contains("error: { main: '#d32f2f' }"));
        assert!(theme.contains("fontFamily: 'sans-serif',"));
        assert!(theme.contains("fontSize: 14,"));
    }

    #[test]
    fn test_string_font_size_is_kept() {
        let mut config = config("material-modern");
        config.typography.insert("fontSize".to_string(), Value::from("16px"));

        assert!(render(Framework::Material, &config).contains("    fontSize: '16px',\n"));
        assert!(render(Framework::Tailwind, &config).contains("        base: '16px',\n"));
        assert!(render(Framework::Bootstrap, &config).contains("$font-size-base: 16px;"));
        assert!(render(Framework::Shadcn, &config).contains("    font-size: 16px;\n"));
    }

    #[test]
    fn test_fractional_font_size_is_kept() {
        let mut config = config("material-modern");
        config.typography.insert("fontSize".to_string(), Value::from(15.5));

        assert!(render(Framework::Material, &config).contains("    fontSize: 15.5,\n"));
        assert!(render(Framework::AntDesign, &config).contains("    fontSize: 15.5,\n"));
        assert!(render(Framework::Tailwind, &config).contains("        base: '15.5px',\n"));
    }

    #[test]
    fn test_non_string_font_family_is_rendered() {
        let mut config = config("material-modern");
        config.typography.insert("fontFamily".to_string(), Value::from(42));
        assert!(render(Framework::Material, &config).contains("    fontFamily: '42',\n"));
    }

    #[test]
    fn test_extra_color_keys_become_identifiers() {
        assert_eq!(css_ident("brandAccent"), "brand-accent");
        assert_eq!(css_ident("brand accent"), "brand-accent");
        assert_eq!(css_ident("brand--500!"), "brand-500");
        assert_eq!(css_ident("primaryDark2"), "primary-dark2");
        assert_eq!(css_ident("500"), "color-500");
        assert_eq!(css_ident("!!"), "color");

        let mut config = config("bootstrap-classic");
        config.colors.insert("Brand Accent!".to_string(), "#ff00ff".to_string());
        assert!(render(Framework::Bootstrap, &config).contains("$brand-accent: #ff00ff;"));
        assert!(render(Framework::Shadcn, &config).contains("    --brand-accent: 300 100% 50%;"));
    }

    #[test]
    fn test_js_string_escapes_quotes() {
        assert_eq!(js_string("Bob's Font"), "'Bob\\'s Font'");
        assert_eq!(js_key("primary"), "primary");
        assert_eq!(js_key("brand-500"), "'brand-500'");
    }

    #[test]
    fn test_theme_paths() {
        assert_eq!(path(Framework::Tailwind), "tailwind.config.js");
        assert_eq!(path(Framework::Shadcn), "src/styles/globals.css");
        assert_eq!(path(Framework::Generic), "src/theme/theme.js");
    }
}
